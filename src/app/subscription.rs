// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard arrows drive slide navigation; a periodic tick re-reads the
//! ambient system color scheme while no explicit theme choice exists.

use super::Message;
use crate::ui::viewport;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// How often the ambient system preference is re-read. There is no portable
/// push notification for scheme changes, so the app polls.
pub const AMBIENT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Routes keyboard arrow presses to slide navigation.
///
/// Only events no widget captured are considered, so future focusable
/// widgets keep their own arrow handling.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowLeft),
                ..
            }) => Some(Message::Viewport(viewport::Message::PreviousPressed)),
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::ArrowRight),
                ..
            }) => Some(Message::Viewport(viewport::Message::NextPressed)),
            _ => None,
        }
    })
}

/// Creates the ambient-preference poll, active only while the theme still
/// follows the system. Once the user chooses explicitly, the subscription is
/// dropped and ambient changes are ignored for the rest of the session.
pub fn create_ambient_subscription(user_override: bool) -> Subscription<Message> {
    if user_override {
        Subscription::none()
    } else {
        time::every(AMBIENT_POLL_INTERVAL).map(Message::AmbientPoll)
    }
}
