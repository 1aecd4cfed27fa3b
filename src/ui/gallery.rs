// SPDX-License-Identifier: MPL-2.0
//! Scrollable gallery body: the responsive thumbnail grid followed by the
//! error banner, the loader and the "load more" button.

use crate::gallery::{Message, State};
use crate::i18n::fluent::I18n;
use crate::ui::components::error_banner::ErrorBanner;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::state::{PreviewKind, Previews};
use crate::ui::{gallery_item, load_more, loader};
use iced::widget::{responsive, Column, Container, Row, Scrollable, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::Id,
    Element, Length, Size,
};

/// Id of the gallery scrollable, used to scroll to newly loaded content.
pub const SCROLLABLE_ID: &str = "gallery-scrollable";

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub previews: &'a Previews,
    /// Preferred thumbnail size; cells stretch to fill each row.
    pub thumbnail_size: (f32, f32),
    pub spinner_rotation: f32,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    // Use responsive widget to get the available width for the grid
    responsive(move |available_size: Size| view_inner(&ctx, available_size)).into()
}

fn view_inner<'a>(ctx: &ViewContext<'a>, available: Size) -> Element<'a, Message> {
    let state = ctx.state;
    let mut content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let inner_width = (available.width - 2.0 * spacing::LG).max(0.0);
    let (preferred_width, preferred_height) = ctx.thumbnail_size;
    let columns = column_count(inner_width, preferred_width, spacing::MD);
    let cell = cell_size(inner_width, columns, spacing::MD, ctx.thumbnail_size);
    // Keep the configured aspect ratio when stretching
    let cell = Size::new(cell.width, cell.width * preferred_height / preferred_width);

    if !state.images().is_empty() {
        let item_ctx = gallery_item::ViewContext {
            i18n: ctx.i18n,
            cell,
        };

        let mut grid = Column::new().spacing(spacing::MD);
        for chunk in state.images().chunks(columns) {
            let row = chunk.iter().fold(Row::new().spacing(spacing::MD), |row, record| {
                let preview = ctx.previews.get(PreviewKind::Thumbnail, record.id());
                row.push(gallery_item::view(&item_ctx, record, preview))
            });
            grid = grid.push(row);
        }
        content = content.push(grid);
    } else if let Some(key) = hint_key(state) {
        content = content.push(hint(ctx.i18n.tr(key)));
    }

    if let Some(error) = state.error() {
        content = content.push(ErrorBanner::for_search_error(error, ctx.i18n).view());
    }

    if state.is_loading() {
        content = content.push(loader::view(ctx.spinner_rotation));
    }

    if state.can_load_more() {
        content = content.push(load_more::view(ctx.i18n));
    }

    Scrollable::new(content)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Message key of the hint shown instead of an empty grid, if any.
fn hint_key(state: &State) -> Option<&'static str> {
    if state.is_loading() || state.error().is_some() {
        None
    } else if state.query().is_none() {
        Some("gallery-empty-hint")
    } else if state.has_no_results() {
        Some("gallery-no-results")
    } else {
        None
    }
}

fn hint<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY_LG))
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(spacing::XL)
        .into()
}

/// Number of columns that fit in `available_width` with cells at least
/// `min_cell_width` wide. Always at least one.
#[must_use]
pub fn column_count(available_width: f32, min_cell_width: f32, gap: f32) -> usize {
    if min_cell_width <= 0.0 || available_width <= min_cell_width {
        return 1;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = ((available_width + gap) / (min_cell_width + gap)).floor() as usize;
    count.max(1)
}

/// Cell size when `columns` cells and their gaps share `available_width`.
/// Falls back to `preferred` when the width is unknown.
#[must_use]
pub fn cell_size(available_width: f32, columns: usize, gap: f32, preferred: (f32, f32)) -> Size {
    if available_width <= 0.0 || columns == 0 {
        return Size::new(preferred.0, preferred.1);
    }
    #[allow(clippy::cast_precision_loss)]
    let columns = columns as f32;
    let width = ((available_width - gap * (columns - 1.0)) / columns).max(1.0);
    Size::new(width, preferred.1)
}
