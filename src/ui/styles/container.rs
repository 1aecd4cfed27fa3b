// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Colored band holding the search form.
pub fn header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::HEADER)),
        text_color: Some(palette::WHITE),
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Neutral card used for banners and hints.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}
