// SPDX-License-Identifier: MPL-2.0
//! One thumbnail cell of the gallery grid.
//!
//! Pressing the thumbnail selects the image; the corner button removes it
//! from the current results.

use crate::domain::search::ImageRecord;
use crate::gallery::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, spacing, typography};
use crate::ui::state::Preview;
use crate::ui::styles;
use iced::widget::{button, image, Container, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length, Size,
};

/// Contextual data needed to render a cell.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Cell size in logical pixels.
    pub cell: Size,
}

/// Render a gallery cell.
pub fn view<'a>(
    ctx: &ViewContext<'a>,
    record: &'a ImageRecord,
    preview: Option<&'a Preview>,
) -> Element<'a, Message> {
    let id = record.id();

    let content: Element<'a, Message> = match preview {
        Some(Preview::Ready(handle)) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Some(Preview::Failed(_)) => placeholder(ctx.i18n.tr("gallery-thumbnail-failed")),
        Some(Preview::Loading) | None => placeholder(ctx.i18n.tr("gallery-thumbnail-loading")),
    };

    let thumbnail = button(content)
        .on_press(Message::SelectImage(id))
        .padding(0)
        .width(Length::Fixed(ctx.cell.width))
        .height(Length::Fixed(ctx.cell.height))
        .style(styles::button::thumbnail);

    let remove = button(Text::new("✕").size(typography::BODY))
        .on_press(Message::RemoveImage(id))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ));

    let remove_layer = Container::new(remove)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Top)
        .padding(spacing::XS);

    let mut stack = Stack::new()
        .width(Length::Fixed(ctx.cell.width))
        .height(Length::Fixed(ctx.cell.height))
        .push(thumbnail)
        .push(remove_layer);

    if !record.tags().is_empty() {
        let tags = Container::new(Text::new(record.tags()).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::overlay::indicator(radius::SM));
        stack = stack.push(
            Container::new(tags)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Left)
                .align_y(Vertical::Bottom)
                .padding(spacing::XS),
        );
    }

    stack.into()
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
