// SPDX-License-Identifier: MPL-2.0
//! Auto-close setting.

use crate::config::DEFAULT_AUTO_CLOSE_MS;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Whether, and after how much unpaused time, a toast dismisses itself.
///
/// In the settings file this is either `false` or a number of milliseconds.
/// Negative millisecond values clamp to zero, which dismisses the toast on
/// the first countdown tick that accumulates time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AutoCloseRepr", into = "AutoCloseRepr")]
pub enum AutoClose {
    Disabled,
    After(Duration),
}

impl AutoClose {
    /// Builds an auto-close delay from signed milliseconds.
    #[must_use]
    pub fn after_millis(millis: i64) -> Self {
        AutoClose::After(Duration::from_millis(millis.max(0) as u64))
    }

    /// Returns the delay, or `None` when auto-close is disabled.
    #[must_use]
    pub fn duration(self) -> Option<Duration> {
        match self {
            AutoClose::Disabled => None,
            AutoClose::After(duration) => Some(duration),
        }
    }

    #[must_use]
    pub fn is_enabled(self) -> bool {
        matches!(self, AutoClose::After(_))
    }
}

impl Default for AutoClose {
    fn default() -> Self {
        AutoClose::after_millis(DEFAULT_AUTO_CLOSE_MS as i64)
    }
}

impl From<Duration> for AutoClose {
    fn from(duration: Duration) -> Self {
        AutoClose::After(duration)
    }
}

impl From<Option<Duration>> for AutoClose {
    fn from(duration: Option<Duration>) -> Self {
        duration.map_or(AutoClose::Disabled, AutoClose::After)
    }
}

/// Serialized form: `false`, `true` (default delay) or milliseconds.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum AutoCloseRepr {
    Enabled(bool),
    Millis(i64),
}

impl From<AutoCloseRepr> for AutoClose {
    fn from(repr: AutoCloseRepr) -> Self {
        match repr {
            AutoCloseRepr::Enabled(false) => AutoClose::Disabled,
            AutoCloseRepr::Enabled(true) => AutoClose::default(),
            AutoCloseRepr::Millis(millis) => AutoClose::after_millis(millis),
        }
    }
}

impl From<AutoClose> for AutoCloseRepr {
    fn from(value: AutoClose) -> Self {
        match value {
            AutoClose::Disabled => AutoCloseRepr::Enabled(false),
            AutoClose::After(duration) => {
                AutoCloseRepr::Millis(i64::try_from(duration.as_millis()).unwrap_or(i64::MAX))
            }
        }
    }
}
