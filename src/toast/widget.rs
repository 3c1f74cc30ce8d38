// SPDX-License-Identifier: MPL-2.0
//! A single toast: its element, timers and lifecycle.

use super::countdown::Countdown;
use super::options::{OnClose, Setting};
use super::{classes, registry, AutoClose, Position};
use crate::config::Timing;
use crate::surface::{ElementId, Listener, Surface, Visibility};
use crate::timer::{Scheduler, TimerId, TimerKind};
use std::time::{Duration, Instant};

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle of a toast.
///
/// `Entering → Visible → Dismissing → Detached`. A toast removed before its
/// entry delay goes straight from `Entering` to `Dismissing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Mounted, waiting for the entry transition to be triggered.
    #[default]
    Entering,
    Visible,
    /// Exit transition running; the element is still in its region.
    Dismissing,
    /// Element and, if emptied, its region are gone.
    Detached,
}

/// Everything a toast touches outside itself while handling a call.
pub(crate) struct Host<'a, S: Surface> {
    pub surface: &'a mut S,
    pub timers: &'a mut Scheduler,
    pub timing: &'a Timing,
    pub now: Instant,
}

#[derive(Debug)]
pub struct Toast {
    id: ToastId,
    element: ElementId,
    phase: Phase,
    paused: bool,
    position: Position,
    text: String,
    auto_close: AutoClose,
    countdown: Option<Countdown>,
    manual_close: bool,
    show_progress: bool,
    pause_on_hover: bool,
    pause_on_focus_loss: bool,
    on_close: OnClose,
    entry_timer: Option<TimerId>,
    countdown_timer: Option<TimerId>,
    progress_timer: Option<TimerId>,
}

impl Toast {
    /// Creates the element, schedules the entry toggle and applies `settings`.
    pub(crate) fn new<S: Surface>(id: ToastId, settings: Vec<Setting>, host: &mut Host<'_, S>) -> Self {
        let element = host.surface.create_element(classes::TOAST);
        let entry_timer =
            host.timers
                .set_timeout(TimerKind::Entry(id), host.now, host.timing.entry_delay());
        let mut toast = Self {
            id,
            element,
            phase: Phase::Entering,
            paused: false,
            position: Position::default(),
            text: String::new(),
            auto_close: AutoClose::Disabled,
            countdown: None,
            manual_close: false,
            show_progress: false,
            pause_on_hover: false,
            pause_on_focus_loss: false,
            on_close: OnClose::noop(),
            entry_timer: Some(entry_timer),
            countdown_timer: None,
            progress_timer: None,
        };
        for setting in settings {
            toast.apply(setting, host);
        }
        log::debug!("toast {:?} created in {}", id, toast.position);
        toast
    }

    /// Applies one setting through its setter.
    pub(crate) fn apply<S: Surface>(&mut self, setting: Setting, host: &mut Host<'_, S>) {
        match setting {
            Setting::Position(position) => self.set_position(position, host),
            Setting::Text(text) => self.set_text(text, host),
            Setting::AutoClose(auto_close) => self.set_auto_close(auto_close, host),
            Setting::OnClose(on_close) => self.on_close = on_close,
            Setting::ManualClose(enabled) => self.set_manual_close(enabled, host),
            Setting::ShowProgress(enabled) => self.set_show_progress(enabled, host),
            Setting::PauseOnHover(enabled) => self.set_pause_on_hover(enabled, host),
            Setting::PauseOnFocusLoss(enabled) => self.set_pause_on_focus_loss(enabled, host),
        }
    }

    fn set_position<S: Surface>(&mut self, position: Position, host: &mut Host<'_, S>) {
        let previous = host.surface.parent(self.element);
        let container = registry::get_or_create(&mut *host.surface, &position);
        host.surface.append_child(container, self.element);
        if let Some(previous) = previous.filter(|&p| p != container) {
            registry::release_if_empty(&mut *host.surface, previous);
        }
        self.position = position;
    }

    fn set_text<S: Surface>(&mut self, text: String, host: &mut Host<'_, S>) {
        host.surface.set_text(self.element, &text);
        self.text = text;
    }

    fn set_auto_close<S: Surface>(&mut self, auto_close: AutoClose, host: &mut Host<'_, S>) {
        cancel(&mut self.countdown_timer, host.timers);
        self.auto_close = auto_close;
        self.countdown = auto_close.duration().map(Countdown::new);
        if self.countdown.is_some() {
            self.countdown_timer = Some(host.timers.set_interval(
                TimerKind::Countdown(self.id),
                host.now,
                host.timing.tick_interval(),
            ));
        }
        if self.show_progress {
            self.restart_progress(host);
        }
    }

    fn set_manual_close<S: Surface>(&mut self, enabled: bool, host: &mut Host<'_, S>) {
        self.manual_close = enabled;
        host.surface.set_class(self.element, classes::MANUAL_CLOSE, enabled);
        if enabled {
            host.surface.listen(self.element, Listener::Click);
        } else {
            host.surface.unlisten(self.element, Listener::Click);
        }
    }

    fn set_show_progress<S: Surface>(&mut self, enabled: bool, host: &mut Host<'_, S>) {
        self.show_progress = enabled;
        host.surface.set_class(self.element, classes::PROGRESS, enabled);
        self.restart_progress(host);
    }

    fn set_pause_on_hover<S: Surface>(&mut self, enabled: bool, host: &mut Host<'_, S>) {
        self.pause_on_hover = enabled;
        for listener in [Listener::PointerEnter, Listener::PointerLeave] {
            if enabled {
                host.surface.listen(self.element, listener);
            } else {
                host.surface.unlisten(self.element, listener);
            }
        }
    }

    fn set_pause_on_focus_loss<S: Surface>(&mut self, enabled: bool, host: &mut Host<'_, S>) {
        self.pause_on_focus_loss = enabled;
        host.surface.watch_visibility(self.element, enabled);
    }

    /// Replaces the progress updater, if progress is shown and a positive
    /// countdown is running.
    fn restart_progress<S: Surface>(&mut self, host: &mut Host<'_, S>) {
        cancel(&mut self.progress_timer, host.timers);
        if !self.show_progress {
            return;
        }
        let Some(countdown) = self.countdown.filter(|c| !c.duration().is_zero()) else {
            return;
        };
        host.surface.set_style_property(
            self.element,
            classes::PROGRESS_PROPERTY,
            countdown.progress(),
        );
        self.progress_timer = Some(host.timers.set_interval(
            TimerKind::Progress(self.id),
            host.now,
            host.timing.tick_interval(),
        ));
    }

    /// Entry delay elapsed: trigger the enter transition.
    pub(crate) fn enter<S: Surface>(&mut self, host: &mut Host<'_, S>) {
        self.entry_timer = None;
        if self.phase != Phase::Entering {
            return;
        }
        host.surface.add_class(self.element, classes::SHOW);
        self.phase = Phase::Visible;
        log::debug!("toast {:?} visible", self.id);
    }

    pub(crate) fn countdown_tick<S: Surface>(&mut self, host: &mut Host<'_, S>) {
        let Some(countdown) = self.countdown.as_mut() else {
            return;
        };
        if !countdown.tick(host.now, self.paused) {
            return;
        }
        log::debug!("toast {:?} expired after {:?}", self.id, countdown.elapsed());
        if self.progress_timer.is_some() {
            host.surface
                .set_style_property(self.element, classes::PROGRESS_PROPERTY, 0.0);
        }
        self.remove(host);
    }

    pub(crate) fn progress_tick<S: Surface>(&mut self, host: &mut Host<'_, S>) {
        if self.paused {
            return;
        }
        if let Some(countdown) = &self.countdown {
            host.surface.set_style_property(
                self.element,
                classes::PROGRESS_PROPERTY,
                countdown.progress(),
            );
        }
    }

    pub(crate) fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            log::trace!("toast {:?} paused = {paused}", self.id);
        }
        self.paused = paused;
    }

    pub(crate) fn visibility_changed(&mut self, visibility: Visibility) {
        self.set_paused(visibility == Visibility::Hidden);
    }

    /// Starts dismissal. Later calls are ignored.
    ///
    /// The close callback runs before this returns, while the element is
    /// still attached; the element is detached when the exit transition ends.
    pub(crate) fn remove<S: Surface>(&mut self, host: &mut Host<'_, S>) {
        if !self.is_live() {
            return;
        }
        cancel(&mut self.entry_timer, host.timers);
        cancel(&mut self.countdown_timer, host.timers);
        cancel(&mut self.progress_timer, host.timers);

        let was_shown = host.surface.has_class(self.element, classes::SHOW);
        host.surface.remove_class(self.element, classes::SHOW);
        self.phase = Phase::Dismissing;
        if was_shown {
            host.surface.listen(self.element, Listener::TransitionEnd);
        }
        log::debug!("toast {:?} dismissing", self.id);

        self.on_close.call();

        // Never shown: there is no exit transition to wait for.
        if !was_shown {
            self.detach(host);
        }
    }

    /// Exit transition finished.
    pub(crate) fn finish_exit<S: Surface>(&mut self, host: &mut Host<'_, S>) {
        if self.phase == Phase::Dismissing {
            self.detach(host);
        }
    }

    fn detach<S: Surface>(&mut self, host: &mut Host<'_, S>) {
        let container = host.surface.parent(self.element);
        host.surface.remove(self.element);
        if let Some(container) = container {
            registry::release_if_empty(&mut *host.surface, container);
        }
        self.phase = Phase::Detached;
        log::debug!("toast {:?} detached", self.id);
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn element(&self) -> ElementId {
        self.element
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns whether the toast has not started dismissing yet.
    #[must_use]
    pub fn is_live(&self) -> bool {
        matches!(self.phase, Phase::Entering | Phase::Visible)
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn auto_close(&self) -> AutoClose {
        self.auto_close
    }

    /// Unpaused time counted toward auto-close.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.countdown.map_or(Duration::ZERO, |c| c.elapsed())
    }

    #[must_use]
    pub fn manual_close(&self) -> bool {
        self.manual_close
    }

    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.show_progress
    }

    #[must_use]
    pub fn pause_on_hover(&self) -> bool {
        self.pause_on_hover
    }

    #[must_use]
    pub fn pause_on_focus_loss(&self) -> bool {
        self.pause_on_focus_loss
    }

    /// Returns whether a countdown timer is currently scheduled.
    #[must_use]
    pub fn has_countdown(&self) -> bool {
        self.countdown_timer.is_some()
    }

    /// Returns whether a progress updater is currently scheduled.
    #[must_use]
    pub fn has_progress_updater(&self) -> bool {
        self.progress_timer.is_some()
    }
}

fn cancel(slot: &mut Option<TimerId>, timers: &mut Scheduler) {
    if let Some(id) = slot.take() {
        timers.clear(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToastDefaults;
    use crate::surface::Document;
    use crate::test_utils::{counting_on_close, ms};
    use crate::toast::ToastOptions;
    use std::sync::atomic::Ordering;

    struct Harness {
        doc: Document,
        timers: Scheduler,
        timing: Timing,
        t0: Instant,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                doc: Document::new(),
                timers: Scheduler::new(),
                timing: Timing::default(),
                t0: Instant::now(),
            }
        }

        fn host(&mut self, after: u64) -> Host<'_, Document> {
            Host {
                surface: &mut self.doc,
                timers: &mut self.timers,
                timing: &self.timing,
                now: self.t0 + ms(after),
            }
        }

        fn build(&mut self, options: ToastOptions) -> Toast {
            let settings = options.merged_over(&ToastDefaults::default());
            let mut host = self.host(0);
            Toast::new(ToastId::new(), settings, &mut host)
        }
    }

    #[test]
    fn construction_mounts_into_region() {
        let mut h = Harness::new();
        let toast = h.build(ToastOptions::new().text("Hello"));

        let region = registry::find(&h.doc, &Position::TopRight).expect("region exists");
        assert_eq!(h.doc.children(region), &[toast.element()]);
        assert_eq!(h.doc.text(toast.element()), Some("Hello"));
        assert_eq!(toast.phase(), Phase::Entering);
        assert!(!h.doc.has_class(toast.element(), classes::SHOW));
    }

    #[test]
    fn defaults_register_listeners_and_classes() {
        let mut h = Harness::new();
        let toast = h.build(ToastOptions::new());
        let el = toast.element();

        assert!(h.doc.has_class(el, classes::MANUAL_CLOSE));
        assert!(h.doc.has_class(el, classes::PROGRESS));
        assert!(h.doc.is_listening(el, Listener::Click));
        assert!(h.doc.is_listening(el, Listener::PointerEnter));
        assert!(h.doc.is_listening(el, Listener::PointerLeave));
        assert!(h.doc.is_watching_visibility(el));
        assert_eq!(h.doc.style_property(el, classes::PROGRESS_PROPERTY), Some(1.0));
        assert!(toast.has_countdown());
        assert!(toast.has_progress_updater());
    }

    #[test]
    fn disabling_features_unregisters_them() {
        let mut h = Harness::new();
        let mut toast = h.build(ToastOptions::new());
        let el = toast.element();

        let mut host = h.host(5);
        for setting in ToastOptions::new()
            .manual_close(false)
            .pause_on_hover(false)
            .pause_on_focus_loss(false)
            .show_progress(false)
            .into_settings()
        {
            toast.apply(setting, &mut host);
        }

        assert!(!h.doc.has_class(el, classes::MANUAL_CLOSE));
        assert!(!h.doc.has_class(el, classes::PROGRESS));
        assert!(!h.doc.is_listening(el, Listener::Click));
        assert!(!h.doc.is_listening(el, Listener::PointerEnter));
        assert!(!h.doc.is_watching_visibility(el));
        assert!(!toast.has_progress_updater());
    }

    #[test]
    fn no_progress_updater_without_auto_close() {
        let mut h = Harness::new();
        let toast = h.build(ToastOptions::new().no_auto_close().show_progress(true));

        assert!(!toast.has_countdown());
        assert!(!toast.has_progress_updater());
        assert!(h.doc.has_class(toast.element(), classes::PROGRESS));
        assert_eq!(h.doc.style_property(toast.element(), classes::PROGRESS_PROPERTY), None);
    }

    #[test]
    fn reapplying_auto_close_replaces_timers() {
        let mut h = Harness::new();
        let mut toast = h.build(ToastOptions::new().auto_close_millis(1000));
        let timers_before = h.timers.len();

        let mut host = h.host(5);
        toast.apply(Setting::AutoClose(AutoClose::after_millis(2000)), &mut host);
        toast.apply(Setting::AutoClose(AutoClose::after_millis(3000)), &mut host);

        assert_eq!(h.timers.len(), timers_before);
        assert_eq!(toast.auto_close(), AutoClose::after_millis(3000));
    }

    #[test]
    fn removing_before_entry_detaches_immediately() {
        let mut h = Harness::new();
        let (on_close, count) = counting_on_close();
        let mut toast = h.build(ToastOptions::new().with(Setting::OnClose(on_close)));

        let mut host = h.host(10);
        toast.remove(&mut host);
        toast.remove(&mut host);

        assert_eq!(toast.phase(), Phase::Detached);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(h.doc.is_empty());
        assert!(h.timers.is_empty());
    }

    #[test]
    fn removing_a_shown_toast_waits_for_transition() {
        let mut h = Harness::new();
        let mut toast = h.build(ToastOptions::new());
        let el = toast.element();

        let mut host = h.host(50);
        toast.enter(&mut host);
        toast.remove(&mut host);
        assert_eq!(toast.phase(), Phase::Dismissing);
        assert!(h.doc.is_listening(el, Listener::TransitionEnd));
        assert!(h.doc.contains(el));

        let mut host = h.host(300);
        toast.finish_exit(&mut host);
        assert_eq!(toast.phase(), Phase::Detached);
        assert!(h.doc.body().is_empty());
    }

    #[test]
    fn moving_position_releases_empty_region() {
        let mut h = Harness::new();
        let mut toast = h.build(ToastOptions::new().position(Position::TopLeft));

        let mut host = h.host(1);
        toast.apply(Setting::Position(Position::BottomRight), &mut host);

        assert_eq!(registry::find(&h.doc, &Position::TopLeft), None);
        let region = registry::find(&h.doc, &Position::BottomRight).expect("new region");
        assert_eq!(h.doc.children(region), &[toast.element()]);
        assert_eq!(toast.position(), &Position::BottomRight);
    }
}
