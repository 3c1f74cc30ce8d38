// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use crate::surface::Visibility;
use crate::toast::{self, HostEvent};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Maps window focus to the host visibility toasts pause on.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Focused) => Some(visibility(Visibility::Visible)),
        event::Event::Window(window::Event::Unfocused) => Some(visibility(Visibility::Hidden)),
        _ => None,
    })
}

/// Drives countdowns and progress while any toast is live.
pub fn create_tick_subscription(interval: Duration, has_toasts: bool) -> Subscription<Message> {
    if has_toasts {
        time::every(interval).map(|now| Message::Toast(toast::Message::Tick(now)))
    } else {
        Subscription::none()
    }
}

fn visibility(visibility: Visibility) -> Message {
    Message::Toast(toast::Message::Event(HostEvent::VisibilityChanged(
        visibility,
    )))
}
