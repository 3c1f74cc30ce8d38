// SPDX-License-Identifier: MPL-2.0
//! End-to-end toast behavior on simulated time.
//!
//! Every test drives the manager with explicit instants, so countdown ticks
//! land on exact 10ms boundaries after the starting instant.

use approx::assert_abs_diff_eq;
use iced_toast::config::{self, Config, Timing};
use iced_toast::surface::{Surface, Visibility};
use iced_toast::toast::{classes, registry, HostEvent, Manager, Phase, Position, ToastOptions};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn closing_counter() -> (Arc<AtomicUsize>, impl FnMut() + Send + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    (count, move || {
        counter.fetch_add(1, Ordering::SeqCst);
    })
}

fn progress(manager: &Manager, element: iced_toast::surface::ElementId) -> Option<f32> {
    manager
        .surface()
        .style_property(element, classes::PROGRESS_PROPERTY)
}

#[test]
fn one_container_per_position_in_use() {
    let mut manager = Manager::new();
    let t0 = Instant::now();

    let a = manager.push(ToastOptions::new().position("top-left"), t0);
    let b = manager.push(ToastOptions::new().position("top-left"), t0);
    let c = manager.push(ToastOptions::new().position("bottom-right"), t0);
    let d = manager.push(ToastOptions::new().position("over-there"), t0);
    manager.advance(t0 + ms(100));

    let mut positions: Vec<&str> = manager.surface().regions().map(|r| r.position).collect();
    positions.sort_unstable();
    assert_eq!(positions, ["bottom-right", "over-there", "top-left"]);

    for id in [a, b, c, d] {
        manager.remove(id, t0 + ms(100));
    }
    manager.advance(t0 + ms(400));

    assert_eq!(manager.surface().regions().count(), 0);
    assert!(manager.surface().body().is_empty());
    assert!(!manager.has_toasts());
}

#[test]
fn repeated_remove_closes_once() {
    let mut manager = Manager::new();
    let t0 = Instant::now();
    let (count, on_close) = closing_counter();

    let id = manager.push(ToastOptions::new().on_close(on_close), t0);
    manager.advance(t0 + ms(60));

    assert!(manager.remove(id, t0 + ms(60)));
    assert!(!manager.remove(id, t0 + ms(70)));
    manager.advance(t0 + ms(500));
    assert!(!manager.remove(id, t0 + ms(500)));

    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn disabled_auto_close_never_dismisses() {
    let mut manager = Manager::new();
    let t0 = Instant::now();
    let (count, on_close) = closing_counter();

    let id = manager.push(
        ToastOptions::new().no_auto_close().on_close(on_close),
        t0,
    );
    manager.advance(t0 + Duration::from_secs(60));

    let toast = manager.get(id).expect("toast is still live");
    assert_eq!(toast.phase(), Phase::Visible);
    assert!(!toast.has_countdown());
    assert!(!toast.has_progress_updater());
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn progress_drains_to_zero_at_dismissal() {
    let mut manager = Manager::new();
    let t0 = Instant::now();

    let id = manager.push(
        ToastOptions::new().auto_close_millis(400).show_progress(true),
        t0,
    );
    let element = manager.get(id).map(|t| t.element()).expect("pushed");

    let mut last = 1.0_f32;
    let mut dismissed_at = None;
    for step in 1..=60 {
        let now = t0 + ms(step * 10);
        manager.advance(now);
        if let Some(value) = progress(&manager, element) {
            assert!(value <= last, "progress rose from {last} to {value}");
            last = value;
        }
        if manager.get(id).map(|t| t.phase()) == Some(Phase::Dismissing) {
            dismissed_at = Some(step * 10);
            break;
        }
    }

    let dismissed_at = dismissed_at.expect("toast dismissed");
    assert!(dismissed_at >= 400);
    assert_eq!(progress(&manager, element), Some(0.0));
}

#[test]
fn hover_delays_dismissal_by_the_paused_time() {
    let mut manager = Manager::new();
    let t0 = Instant::now();

    let id = manager.push(ToastOptions::new().auto_close_millis(1000), t0);
    let element = manager.get(id).map(|t| t.element()).expect("pushed");

    manager.advance(t0 + ms(300));
    manager.handle(HostEvent::PointerEntered(element), t0 + ms(300));
    manager.advance(t0 + ms(800));
    assert!(manager.get(id).is_some_and(|t| t.is_paused()));
    manager.handle(HostEvent::PointerLeft(element), t0 + ms(800));

    manager.advance(t0 + ms(1500));
    assert_eq!(manager.get(id).map(|t| t.phase()), Some(Phase::Visible));

    manager.advance(t0 + ms(1510));
    assert_eq!(manager.get(id).map(|t| t.phase()), Some(Phase::Dismissing));
}

#[test]
fn hidden_host_pauses_countdown() {
    let mut manager = Manager::new();
    let t0 = Instant::now();

    let id = manager.push(ToastOptions::new().auto_close_millis(500), t0);

    manager.advance(t0 + ms(200));
    manager.handle(HostEvent::VisibilityChanged(Visibility::Hidden), t0 + ms(200));
    manager.advance(t0 + ms(2000));

    let elapsed = manager.get(id).map(|t| t.elapsed()).expect("still live");
    assert_eq!(elapsed, ms(190));

    manager.handle(HostEvent::VisibilityChanged(Visibility::Visible), t0 + ms(2000));
    manager.advance(t0 + ms(2300));
    assert_eq!(manager.get(id).map(|t| t.phase()), Some(Phase::Visible));
    manager.advance(t0 + ms(2310));
    assert_eq!(manager.get(id).map(|t| t.phase()), Some(Phase::Dismissing));
}

#[test]
fn hover_is_ignored_without_pause_on_hover() {
    let mut manager = Manager::new();
    let t0 = Instant::now();

    let id = manager.push(
        ToastOptions::new()
            .auto_close_millis(300)
            .pause_on_hover(false),
        t0,
    );
    let element = manager.get(id).map(|t| t.element()).expect("pushed");

    manager.advance(t0 + ms(100));
    manager.handle(HostEvent::PointerEntered(element), t0 + ms(100));
    manager.advance(t0 + ms(310));

    assert_eq!(manager.get(id).map(|t| t.phase()), Some(Phase::Dismissing));
}

#[test]
fn update_restarts_countdown_from_zero() {
    let mut manager = Manager::new();
    let t0 = Instant::now();

    let id = manager.push(ToastOptions::new().auto_close_millis(1000), t0);
    manager.advance(t0 + ms(800));
    assert_eq!(manager.get(id).map(|t| t.elapsed()), Some(ms(790)));

    assert!(manager.update(id, ToastOptions::new().auto_close_millis(500), t0 + ms(800)));
    assert_eq!(manager.get(id).map(|t| t.elapsed()), Some(Duration::ZERO));

    manager.advance(t0 + ms(1300));
    assert_eq!(manager.get(id).map(|t| t.phase()), Some(Phase::Visible));
    manager.advance(t0 + ms(1310));
    assert_eq!(manager.get(id).map(|t| t.phase()), Some(Phase::Dismissing));
}

#[test]
fn saved_toast_scenario() {
    let mut manager = Manager::new();
    let t0 = Instant::now();
    let (count, on_close) = closing_counter();

    let id = manager.push(
        ToastOptions::new()
            .text("Saved")
            .auto_close_millis(1000)
            .show_progress(true)
            .on_close(on_close),
        t0,
    );
    let element = manager.get(id).map(|t| t.element()).expect("pushed");
    assert_eq!(manager.surface().text(element), Some("Saved"));

    // The first tick at 10ms only sets the baseline.
    manager.advance(t0 + ms(510));
    let value = progress(&manager, element).expect("progress written");
    assert_abs_diff_eq!(value, 0.5, epsilon = 0.011);
    assert_eq!(count.load(Ordering::SeqCst), 0);

    manager.advance(t0 + ms(1010));
    assert_eq!(manager.get(id).map(|t| t.phase()), Some(Phase::Dismissing));
    assert_eq!(count.load(Ordering::SeqCst), 1);

    manager.advance(t0 + ms(2000));
    assert!(manager.get(id).is_none());
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn shared_region_outlives_its_first_toast() {
    let mut manager = Manager::new();
    let t0 = Instant::now();
    let top_right = Position::TopRight;

    let first = manager.push(ToastOptions::new().position("top-right"), t0);
    let second = manager.push(ToastOptions::new().position("top-right"), t0);
    manager.advance(t0 + ms(100));

    manager.remove(first, t0 + ms(100));
    manager.advance(t0 + ms(400));
    let container = registry::find(manager.surface(), &top_right).expect("region kept");
    assert_eq!(manager.surface().children(container).len(), 1);

    manager.remove(second, t0 + ms(400));
    manager.advance(t0 + ms(700));
    assert!(registry::find(manager.surface(), &top_right).is_none());
}

#[test]
fn click_dismisses_only_with_manual_close() {
    let mut manager = Manager::new();
    let t0 = Instant::now();

    let sticky = manager.push(
        ToastOptions::new().no_auto_close().manual_close(false),
        t0,
    );
    let closable = manager.push(ToastOptions::new().no_auto_close(), t0);
    manager.advance(t0 + ms(60));

    for id in [sticky, closable] {
        let element = manager.get(id).map(|t| t.element()).expect("pushed");
        manager.handle(HostEvent::Clicked(element), t0 + ms(60));
    }

    assert_eq!(manager.get(sticky).map(|t| t.phase()), Some(Phase::Visible));
    assert_eq!(manager.get(closable).map(|t| t.phase()), Some(Phase::Dismissing));
    let element = manager.get(closable).map(|t| t.element()).expect("dismissing");
    assert!(!manager.surface().has_class(element, classes::SHOW));
}

#[test]
fn config_defaults_drive_new_toasts() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut settings = Config::default();
    settings.toast.position = Position::BottomLeft;
    settings.toast.text = "Hello".to_string();
    settings.toast.show_progress = false;
    settings.timing = Timing {
        entry_delay_ms: 20,
        ..Timing::default()
    };
    config::save_to_path(&settings, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let mut manager = Manager::from_config(&loaded);
    let t0 = Instant::now();
    let id = manager.push(ToastOptions::new(), t0);

    let toast = manager.get(id).expect("pushed");
    assert_eq!(toast.position(), &Position::BottomLeft);
    assert_eq!(toast.text(), "Hello");
    assert!(!toast.has_progress_updater());

    manager.advance(t0 + ms(20));
    assert_eq!(manager.get(id).map(|t| t.phase()), Some(Phase::Visible));
}
