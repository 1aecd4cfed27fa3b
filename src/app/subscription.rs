// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Spinner animation interval.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Routes native keyboard events. Escape closes the image overlay unless a
/// widget (such as the search input) already captured it.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(Named::Escape),
                ..
            }),
            event::Status::Ignored,
        ) => Some(Message::EscapePressed),
        _ => None,
    })
}

/// Creates the spinner tick subscription, active only while something is
/// loading.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
