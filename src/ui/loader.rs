// SPDX-License-Identifier: MPL-2.0
//! Loading indicator shown while a page is being fetched.

use crate::ui::design_tokens::{palette, spacing};
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::Container;
use iced::{alignment::Horizontal, Element, Length};

/// Render a centered spinner at the given rotation.
pub fn view<'a, Message: 'static>(rotation: f32) -> Element<'a, Message> {
    Container::new(AnimatedSpinner::new(palette::PRIMARY_400, rotation).into_element())
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding(spacing::MD)
        .into()
}
