// SPDX-License-Identifier: MPL-2.0
//! Demo application: spawns toasts into each region and renders them.
//!
//! The `App` owns a toast [`Manager`] and forwards ticks, window focus and
//! pointer input to it. Settings come from `settings.toml` (or the file
//! named on the command line); a broken file falls back to defaults.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::toast::{Manager, Position, ToastOptions};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 650;

/// Root Iced application state.
pub struct App {
    manager: Manager,
    /// Incremented by every toast's close callback.
    closed: Arc<AtomicUsize>,
    spawned: usize,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("toasts", &self.manager.len())
            .field("spawned", &self.spawned)
            .field("closed", &self.closed())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; the flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(&Config::default())
    }
}

impl App {
    fn with_config(config: &Config) -> Self {
        Self {
            manager: Manager::from_config(config),
            closed: Arc::new(AtomicUsize::new(0)),
            spawned: 0,
        }
    }

    /// Loads settings and shows a first toast so the window is not empty.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let loaded = match flags.config_path.as_deref() {
            Some(path) => config::load_from_path(path),
            None => config::load(),
        };
        let config = loaded.unwrap_or_else(|err| {
            log::warn!("using default settings: {err}");
            Config::default()
        });

        let mut app = Self::with_config(&config);
        let position = flags.position.unwrap_or(config.toast.position);
        app.spawn(position, Instant::now());

        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.live() {
            0 => "Iced Toast".to_owned(),
            live => format!("Iced Toast ({live})"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.manager.timing().tick_interval(),
            self.manager.has_toasts(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Spawn(position) => {
                self.spawn(position, Instant::now());
            }
            Message::ClearAll => self.manager.clear(Instant::now()),
            Message::Toast(message) => self.manager.handle_message(message),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            document: self.manager.surface(),
            live: self.live(),
            closed: self.closed(),
        })
    }

    fn spawn(&mut self, position: Position, now: Instant) {
        self.spawned += 1;
        let closed = Arc::clone(&self.closed);
        let text = format!("{} #{}", self.manager.defaults().text, self.spawned);

        let id = self.manager.push(
            ToastOptions::new()
                .position(position)
                .text(text)
                .on_close(move || {
                    closed.fetch_add(1, Ordering::Relaxed);
                }),
            now,
        );
        log::debug!("spawned toast {id:?}");
    }

    fn live(&self) -> usize {
        self.manager.toasts().filter(|toast| toast.is_live()).count()
    }

    fn closed(&self) -> usize {
        self.closed.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast;
    use std::time::Duration;

    #[test]
    fn spawn_adds_a_live_toast() {
        let mut app = App::default();
        let _ = app.update(Message::Spawn(Position::BottomLeft));
        let _ = app.update(Message::Spawn(Position::BottomLeft));

        assert_eq!(app.live(), 2);
        assert_eq!(app.manager.surface().regions().count(), 1);
        assert_eq!(app.title(), "Iced Toast (2)");
    }

    #[test]
    fn clear_all_runs_every_close_callback() {
        let mut app = App::default();
        let _ = app.update(Message::Spawn(Position::TopLeft));
        let _ = app.update(Message::Spawn(Position::BottomRight));
        let _ = app.update(Message::ClearAll);

        assert_eq!(app.closed(), 2);
        assert_eq!(app.live(), 0);
    }

    #[test]
    fn ticks_dismiss_expired_toasts() {
        let mut app = App::default();
        let start = Instant::now();
        app.spawn(Position::TopRight, start);

        let _ = app.update(Message::Toast(toast::Message::Tick(
            start + Duration::from_secs(5),
        )));

        assert_eq!(app.closed(), 1);
        assert!(!app.manager.has_toasts());
    }

    #[test]
    fn missing_settings_file_falls_back_to_defaults() {
        let (app, _) = App::new(Flags {
            config_path: Some("/nonexistent/iced_toast/settings.toml".into()),
            position: Some(Position::BottomCenter),
        });

        assert_eq!(app.spawned, 1);
        let toast = app.manager.toasts().next().map(|t| t.position().clone());
        assert_eq!(toast, Some(Position::BottomCenter));
    }
}
