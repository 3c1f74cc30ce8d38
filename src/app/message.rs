// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::toast::{self, Position};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show a new toast in the given region.
    Spawn(Position),
    /// Dismiss every live toast.
    ClearAll,
    /// Ticks, host events and dismiss requests forwarded to the manager.
    Toast(toast::Message),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Settings file to read instead of the per-user `settings.toml`.
    pub config_path: Option<PathBuf>,
    /// Region used for the toast shown at startup.
    pub position: Option<Position>,
}
