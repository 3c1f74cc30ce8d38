// SPDX-License-Identifier: MPL-2.0
//! Test utilities for simulated time and float comparisons.
//!
//! Re-exports the `approx` crate's assertion macros for progress values,
//! which `assert_eq!` cannot compare reliably.

pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::toast::OnClose;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Tolerance for progress values, one tick out of a one second countdown.
pub const PROGRESS_EPSILON: f32 = 0.011;

/// Shorthand for building millisecond durations.
pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Returns a close callback together with the counter it increments.
pub fn counting_on_close() -> (OnClose, Arc<AtomicUsize>) {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    let on_close = OnClose::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (on_close, count)
}
