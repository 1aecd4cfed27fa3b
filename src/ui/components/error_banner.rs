// SPDX-License-Identifier: MPL-2.0
//! Error banner shown below the gallery when a search fails.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::error_banner::ErrorBanner;
//!
//! ErrorBanner::new()
//!     .title("Search failed")
//!     .message("HTTP status 429: Too Many Requests")
//!     .view()
//! ```

use crate::application::port::SearchError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use iced::widget::{container, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Builder for the error banner.
#[derive(Debug, Clone, Default)]
pub struct ErrorBanner {
    title: Option<String>,
    message: Option<String>,
}

impl ErrorBanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a banner for a search failure: the localized title comes from
    /// the error kind, the message carries the error text.
    pub fn for_search_error(error: &SearchError, i18n: &I18n) -> Self {
        Self::new()
            .title(i18n.tr(error.i18n_key()))
            .message(error.message())
    }

    /// Sets the title (main heading).
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the message (error text).
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Renders the banner.
    pub fn view<Message: 'static>(self) -> Element<'static, Message> {
        let badge = Container::new(Text::new("!").size(typography::TITLE_SM))
            .width(Length::Fixed(sizing::INPUT_HEIGHT))
            .height(Length::Fixed(sizing::INPUT_HEIGHT))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(|_theme: &Theme| container::Style {
                background: Some(iced::Background::Color(palette::ERROR_500)),
                text_color: Some(palette::WHITE),
                border: iced::Border {
                    radius: radius::FULL.into(),
                    ..Default::default()
                },
                ..Default::default()
            });

        let mut content = Column::new().spacing(spacing::XXS).width(Length::Fill);

        if let Some(title_text) = self.title {
            content = content.push(Text::new(title_text).size(typography::TITLE_SM).style(
                |_theme: &Theme| text::Style {
                    color: Some(palette::ERROR_500),
                },
            ));
        }

        if let Some(message_text) = self.message {
            content = content.push(Text::new(message_text).size(typography::BODY));
        }

        let row = Row::new()
            .spacing(spacing::MD)
            .align_y(alignment::Vertical::Center)
            .push(badge)
            .push(content);

        Container::new(row)
            .width(Length::Fill)
            .max_width(sizing::ERROR_BANNER_MAX_WIDTH)
            .padding(spacing::MD)
            .style(crate::ui::styles::container::card)
            .into()
    }
}
