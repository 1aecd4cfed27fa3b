// SPDX-License-Identifier: MPL-2.0
//! "Load more" button below the grid.

use crate::gallery::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, typography};
use crate::ui::styles;
use iced::widget::{button, Container, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Render the button. The caller decides whether it should be shown.
pub fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    let label = Container::new(Text::new(i18n.tr("gallery-load-more")).size(typography::BODY_LG))
        .width(Length::Fill)
        .align_x(Horizontal::Center);

    let load_more = button(label)
        .on_press(Message::LoadMore)
        .width(Length::Fixed(sizing::LOAD_MORE_WIDTH))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::primary);

    Container::new(load_more)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}
