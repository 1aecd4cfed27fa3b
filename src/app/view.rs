// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is the search form above the gallery, with an optional
//! startup notice between them. The image overlay is stacked on top when open.

use super::Message;
use crate::gallery;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::searchbar;
use crate::ui::state::{PreviewKind, Previews};
use crate::ui::styles;
use crate::ui::{gallery as gallery_view, modal};
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Stack, Text},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub searchbar: &'a searchbar::State,
    pub gallery: &'a gallery::State,
    pub previews: &'a Previews,
    pub thumbnail_size: (f32, f32),
    pub spinner_rotation: f32,
    /// Message key of the startup notice, if any.
    pub notice: Option<&'a str>,
}

/// Renders the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut column = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(searchbar::view(ctx.searchbar, ctx.i18n).map(Message::Searchbar));

    if let Some(key) = ctx.notice {
        column = column.push(view_notice(ctx.i18n, key));
    }

    let body = gallery_view::view(gallery_view::ViewContext {
        i18n: ctx.i18n,
        state: ctx.gallery,
        previews: ctx.previews,
        thumbnail_size: ctx.thumbnail_size,
        spinner_rotation: ctx.spinner_rotation,
    })
    .map(Message::Gallery);
    column = column.push(body);

    let overlay = ctx
        .gallery
        .selected_image()
        .filter(|_| ctx.gallery.is_overlay_open());

    match overlay {
        Some(record) => {
            let layer = modal::view(modal::ViewContext {
                i18n: ctx.i18n,
                record,
                full_size: ctx.previews.get(PreviewKind::FullSize, record.id()),
                thumbnail: ctx.previews.get(PreviewKind::Thumbnail, record.id()),
                spinner_rotation: ctx.spinner_rotation,
            })
            .map(Message::Gallery);

            Stack::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(column)
                .push(layer)
                .into()
        }
        None => column.into(),
    }
}

fn view_notice<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    let dismiss = button(Text::new(i18n.tr("notice-dismiss")).size(typography::BODY))
        .on_press(Message::DismissNotice)
        .padding([spacing::XXS, spacing::SM])
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::primary);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(i18n.tr(key)).size(typography::BODY).width(Length::Fill))
        .push(dismiss);

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::LG])
        .style(styles::container::card)
        .into()
}
