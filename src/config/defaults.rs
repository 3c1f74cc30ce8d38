// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for toast behavior and timing.
//!
//! This module is the single source of truth for the documented defaults.
//! The settings file can override every value here except the close callback.
//!
//! # Categories
//!
//! - **Toast**: Per-toast option defaults
//! - **Timing**: Tick, entry delay and transition durations

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default screen region for new toasts.
pub const DEFAULT_POSITION: &str = "top-right";

/// Default message when none is supplied.
pub const DEFAULT_TEXT: &str = "Notification";

/// Default auto-close delay (in milliseconds).
pub const DEFAULT_AUTO_CLOSE_MS: u64 = 3000;

/// Clicking a toast dismisses it by default.
pub const DEFAULT_MANUAL_CLOSE: bool = true;

/// Toasts show a draining progress bar by default.
pub const DEFAULT_SHOW_PROGRESS: bool = true;

/// Hovering a toast pauses its countdown by default.
pub const DEFAULT_PAUSE_ON_HOVER: bool = true;

/// Hiding the host surface pauses every countdown by default.
pub const DEFAULT_PAUSE_ON_FOCUS_LOSS: bool = true;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Interval of the countdown and progress ticks (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 10;

/// Minimum tick interval (in milliseconds).
pub const MIN_TICK_INTERVAL_MS: u64 = 1;

/// Maximum tick interval (in milliseconds).
pub const MAX_TICK_INTERVAL_MS: u64 = 250;

/// Delay before the entry transition is triggered (in milliseconds).
///
/// Must be long enough for the host to lay the element out once without the
/// `show` class, otherwise no enter transition runs.
pub const DEFAULT_ENTRY_DELAY_MS: u64 = 50;

/// Duration of the enter/exit transitions (in milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = 200;

/// Maximum transition duration (in milliseconds).
pub const MAX_TRANSITION_MS: u64 = 5000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_AUTO_CLOSE_MS > 0);

    assert!(MIN_TICK_INTERVAL_MS > 0);
    assert!(MAX_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS < DEFAULT_AUTO_CLOSE_MS);

    assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_defaults_match_documented_values() {
        assert_eq!(DEFAULT_POSITION, "top-right");
        assert_eq!(DEFAULT_TEXT, "Notification");
        assert_eq!(DEFAULT_AUTO_CLOSE_MS, 3000);
        assert!(DEFAULT_MANUAL_CLOSE);
        assert!(DEFAULT_SHOW_PROGRESS);
        assert!(DEFAULT_PAUSE_ON_HOVER);
        assert!(DEFAULT_PAUSE_ON_FOCUS_LOSS);
    }

    #[test]
    fn timing_defaults_are_valid() {
        assert_eq!(DEFAULT_TICK_INTERVAL_MS, 10);
        assert_eq!(DEFAULT_ENTRY_DELAY_MS, 50);
        assert!(DEFAULT_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
        assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);
    }
}
