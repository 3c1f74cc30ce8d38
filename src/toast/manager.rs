// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` owns the presentation surface, the timer queue and every
//! toast that has not finished detaching. Hosts drive it with two inputs:
//! the current time ([`Manager::advance`]) and input notifications
//! ([`Manager::handle`]). Both take `now` explicitly so that tests can run
//! on simulated time.

use super::options::ToastOptions;
use super::widget::{Host, Phase, Toast, ToastId};
use crate::config::{Config, Timing, ToastDefaults};
use crate::surface::{Document, ElementId, Listener, Surface, Visibility};
use crate::timer::{Fired, Scheduler, TimerKind};
use std::time::Instant;

/// Notifications delivered by the host presentation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    PointerEntered(ElementId),
    PointerLeft(ElementId),
    Clicked(ElementId),
    TransitionEnded(ElementId),
    VisibilityChanged(Visibility),
}

/// Messages for toast state changes.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Periodic tick carrying the current time.
    Tick(Instant),
    /// Input from the surface, handled at the current time.
    Event(HostEvent),
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
}

#[derive(Debug)]
pub struct Manager<S: Surface = Document> {
    surface: S,
    timers: Scheduler,
    timing: Timing,
    defaults: ToastDefaults,
    /// Toasts in creation order, until they detach.
    toasts: Vec<Toast>,
}

impl Manager<Document> {
    /// Creates a manager over an empty [`Document`] with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    /// Creates a manager over an empty [`Document`] using `config`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::with_surface(Document::with_transition(config.timing.transition()), config)
    }
}

impl Default for Manager<Document> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Surface> Manager<S> {
    /// Creates a manager drawing on an arbitrary surface.
    pub fn with_surface(surface: S, config: &Config) -> Self {
        Self {
            surface,
            timers: Scheduler::new(),
            timing: config.timing,
            defaults: config.toast.clone(),
            toasts: Vec::new(),
        }
    }

    /// Creates a toast from `options` merged over the defaults.
    pub fn push(&mut self, options: ToastOptions, now: Instant) -> ToastId {
        let id = ToastId::new();
        let settings = options.merged_over(&self.defaults);
        let mut host = Host {
            surface: &mut self.surface,
            timers: &mut self.timers,
            timing: &self.timing,
            now,
        };
        let toast = Toast::new(id, settings, &mut host);
        self.toasts.push(toast);
        self.settle(now);
        id
    }

    /// Applies the supplied fields to a toast, in the order given.
    ///
    /// Returns `false` if the toast is unknown or already dismissing.
    pub fn update(&mut self, id: ToastId, options: ToastOptions, now: Instant) -> bool {
        let settings = options.into_settings();
        self.with_toast(id, now, |toast, host| {
            if !toast.is_live() {
                return false;
            }
            for setting in settings {
                toast.apply(setting, host);
            }
            true
        })
        .unwrap_or(false)
    }

    /// Starts dismissing a toast.
    ///
    /// Returns `true` if this call started the dismissal. The toast's close
    /// callback has run by the time this returns.
    pub fn remove(&mut self, id: ToastId, now: Instant) -> bool {
        self.with_toast(id, now, |toast, host| {
            let live = toast.is_live();
            toast.remove(host);
            live
        })
        .unwrap_or(false)
    }

    /// Starts dismissing every live toast.
    pub fn clear(&mut self, now: Instant) {
        let ids: Vec<ToastId> = self.toasts.iter().map(Toast::id).collect();
        for id in ids {
            self.remove(id, now);
        }
    }

    /// Fires every timer due at or before `now`, in order.
    pub fn advance(&mut self, now: Instant) {
        while let Some(fired) = self.timers.pop_due(now) {
            self.fire(fired);
        }
    }

    /// Delivers a host notification.
    ///
    /// Element notifications only reach toasts that registered for them.
    pub fn handle(&mut self, event: HostEvent, now: Instant) {
        match event {
            HostEvent::PointerEntered(element) => {
                self.dispatch(element, Listener::PointerEnter, now, |toast, _| {
                    toast.set_paused(true);
                });
            }
            HostEvent::PointerLeft(element) => {
                self.dispatch(element, Listener::PointerLeave, now, |toast, _| {
                    toast.set_paused(false);
                });
            }
            HostEvent::Clicked(element) => {
                self.dispatch(element, Listener::Click, now, Toast::remove);
            }
            HostEvent::TransitionEnded(element) => {
                self.dispatch(element, Listener::TransitionEnd, now, Toast::finish_exit);
            }
            HostEvent::VisibilityChanged(visibility) => {
                self.surface.set_visibility(visibility);
                let watchers: Vec<ToastId> = self
                    .toasts
                    .iter()
                    .filter(|toast| self.surface.is_watching_visibility(toast.element()))
                    .map(Toast::id)
                    .collect();
                log::debug!("host {visibility:?}, {} toast(s) notified", watchers.len());
                for id in watchers {
                    self.with_toast(id, now, |toast, _| toast.visibility_changed(visibility));
                }
            }
        }
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Tick(now) => self.advance(now),
            Message::Event(event) => self.handle(event, Instant::now()),
            Message::Dismiss(id) => {
                self.remove(id, Instant::now());
            }
        }
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|toast| toast.id() == id)
    }

    /// Finds the toast rendered by `element`.
    #[must_use]
    pub fn find_by_element(&self, element: ElementId) -> Option<&Toast> {
        self.toasts.iter().find(|toast| toast.element() == element)
    }

    /// Toasts that have not detached yet, in creation order.
    pub fn toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Returns whether anything is left to render or time.
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn defaults(&self) -> &ToastDefaults {
        &self.defaults
    }

    /// Replaces the defaults used by later [`Manager::push`] calls.
    pub fn set_defaults(&mut self, defaults: ToastDefaults) {
        self.defaults = defaults;
    }

    #[must_use]
    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// Earliest instant at which a timer is due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    fn fire(&mut self, fired: Fired) {
        let now = fired.at;
        match fired.kind {
            TimerKind::Entry(id) => {
                self.with_toast(id, now, Toast::enter);
            }
            TimerKind::Countdown(id) => {
                self.with_toast(id, now, Toast::countdown_tick);
            }
            TimerKind::Progress(id) => {
                self.with_toast(id, now, Toast::progress_tick);
            }
            TimerKind::TransitionEnd(element) => {
                self.handle(HostEvent::TransitionEnded(element), now);
            }
        }
    }

    fn dispatch(
        &mut self,
        element: ElementId,
        listener: Listener,
        now: Instant,
        f: impl FnOnce(&mut Toast, &mut Host<'_, S>),
    ) {
        if !self.surface.is_listening(element, listener) {
            return;
        }
        if let Some(id) = self.find_by_element(element).map(Toast::id) {
            self.with_toast(id, now, f);
        }
    }

    fn with_toast<R>(
        &mut self,
        id: ToastId,
        now: Instant,
        f: impl FnOnce(&mut Toast, &mut Host<'_, S>) -> R,
    ) -> Option<R> {
        let toast = self.toasts.iter_mut().find(|toast| toast.id() == id)?;
        let mut host = Host {
            surface: &mut self.surface,
            timers: &mut self.timers,
            timing: &self.timing,
            now,
        };
        let result = f(toast, &mut host);
        self.settle(now);
        Some(result)
    }

    /// Schedules the end of newly started transitions and drops detached toasts.
    fn settle(&mut self, now: Instant) {
        for (element, duration) in self.surface.take_started_transitions() {
            // A restarted transition replaces the one still running.
            self.timers
                .clear_where(|kind| kind == TimerKind::TransitionEnd(element));
            self.timers
                .set_timeout(TimerKind::TransitionEnd(element), now, duration);
        }
        self.toasts.retain(|toast| toast.phase() != Phase::Detached);
    }
}
