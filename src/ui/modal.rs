// SPDX-License-Identifier: MPL-2.0
//! Full-size image overlay.
//!
//! The overlay covers the window with a dimmed backdrop. Clicking the
//! backdrop or the close button emits [`Message::CloseOverlay`]; clicks on
//! the image itself are swallowed. Escape is handled by the app subscription.

use crate::domain::search::ImageRecord;
use crate::gallery::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, spacing, typography};
use crate::ui::state::Preview;
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, image, mouse_area, opaque, Column, Container, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length,
};

/// Contextual data needed to render the overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub record: &'a ImageRecord,
    /// Full-size rendition, if requested.
    pub full_size: Option<&'a Preview>,
    /// Thumbnail shown while the full-size image is loading or if it failed.
    pub thumbnail: Option<&'a Preview>,
    pub spinner_rotation: f32,
}

/// Render the overlay layer. Meant to be stacked above the main content.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let picture = picture(&ctx);

    let close = button(Text::new(ctx.i18n.tr("modal-close")).size(typography::BODY))
        .on_press(Message::CloseOverlay)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ));

    let mut body = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(
            Container::new(close)
                .width(Length::Fill)
                .align_x(Horizontal::Right),
        )
        .push(opaque(picture));

    if !ctx.record.tags().is_empty() {
        body = body.push(
            Container::new(Text::new(ctx.record.tags()).size(typography::BODY))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::overlay::indicator(radius::SM)),
        );
    }

    let backdrop = Container::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(spacing::XL)
        .style(styles::overlay::backdrop);

    opaque(mouse_area(backdrop).on_press(Message::CloseOverlay))
}

fn picture<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let handle = ctx
        .full_size
        .and_then(Preview::handle)
        .or_else(|| ctx.thumbnail.and_then(Preview::handle));

    let full_size_loading = ctx.full_size.is_some_and(Preview::is_loading);
    let full_size_failed = matches!(ctx.full_size, Some(Preview::Failed(_)));

    let mut layers = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center);

    match handle {
        Some(handle) => {
            layers = layers.push(
                Container::new(
                    image(handle.clone())
                        .content_fit(ContentFit::Contain)
                        .width(Length::Shrink)
                        .height(Length::Shrink),
                )
                .style(styles::overlay::frame),
            );
        }
        None if !full_size_loading => {
            layers = layers.push(Text::new(ctx.i18n.tr("modal-image-unavailable")));
        }
        None => {}
    }

    if full_size_loading {
        layers = layers.push(
            AnimatedSpinner::new(palette::WHITE, ctx.spinner_rotation).into_element(),
        );
    } else if full_size_failed {
        layers = layers.push(
            Text::new(ctx.i18n.tr("modal-image-failed")).size(typography::CAPTION),
        );
    }

    layers.into()
}
