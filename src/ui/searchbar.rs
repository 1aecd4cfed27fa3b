// SPDX-License-Identifier: MPL-2.0
//! Search form at the top of the window.
//!
//! The form owns only the text being typed. Submitting (button or Enter)
//! trims the text and emits [`Event::Submitted`] when something is left.

use crate::domain::search::SearchQuery;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, text_input, Container, Row, Text},
    Element, Length,
};

/// Transient input state of the search form.
#[derive(Debug, Clone, Default)]
pub struct State {
    input: String,
}

/// Messages emitted by the search form widgets.
#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Submitted(SearchQuery),
}

impl State {
    /// Creates a form pre-filled with `input`.
    #[must_use]
    pub fn with_input(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Process a form message and return the corresponding event.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::InputChanged(value) => {
                self.input = value;
                Event::None
            }
            Message::Submit => match SearchQuery::parse(&self.input) {
                Some(query) => Event::Submitted(query),
                None => Event::None,
            },
        }
    }
}

/// Render the search form.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let input = text_input(&i18n.tr("search-placeholder"), &state.input)
        .on_input(Message::InputChanged)
        .on_submit(Message::Submit)
        .size(typography::BODY_LG)
        .padding(spacing::XS)
        .width(Length::Fill);

    let submit = button(Text::new(i18n.tr("search-button")).size(typography::BODY_LG))
        .on_press(Message::Submit)
        .padding([spacing::XS, spacing::MD])
        .height(Length::Fixed(sizing::INPUT_HEIGHT))
        .style(styles::button::primary);

    let form = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(input)
        .push(submit);

    let form = Container::new(form).max_width(sizing::SEARCHBAR_MAX_WIDTH);

    Container::new(form)
        .center_x(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .style(styles::container::header)
        .into()
}
