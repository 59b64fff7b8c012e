// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! This module routes native events (keyboard, window) to the appropriate
//! screen based on the current application state.

use super::{Message, Screen};
use crate::ui::filter_dialog;
use iced::{event, keyboard, Subscription};

/// Creates the appropriate event subscription based on the current screen.
///
/// - Viewer: listens for files dropped on the window
/// - FilterDialog: listens for Escape to dismiss the dialog
///
/// Keyboard events already captured by a focused widget are not re-routed.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Viewer => event::listen_with(|event, _status, _window_id| {
            if let event::Event::Window(iced::window::Event::FileDropped(path)) = &event {
                return Some(Message::FileDropped(path.clone()));
            }
            None
        }),
        Screen::FilterDialog => event::listen_with(|event, status, _window_id| {
            if let event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(keyboard::key::Named::Escape),
                ..
            }) = &event
            {
                return match status {
                    event::Status::Ignored => {
                        Some(Message::FilterDialog(filter_dialog::Message::ClosePressed))
                    }
                    event::Status::Captured => None,
                };
            }
            None
        }),
    }
}
