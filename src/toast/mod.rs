// SPDX-License-Identifier: MPL-2.0
//! Auto-dismissing toast notifications.
//!
//! A toast is a small message element mounted into a per-position region
//! container. It dismisses itself after a countdown that pauses while the
//! pointer is over it or while the host is hidden, and can show the
//! remaining time as a draining progress value.
//!
//! # Components
//!
//! - [`Manager`] - Owns the surface, the timers and every live toast
//! - [`Toast`] - One toast's state machine
//! - [`ToastOptions`] - Partial configuration applied field by field
//! - [`registry`] - Region containers, discovered by querying the surface
//!
//! # Usage
//!
//! ```
//! use iced_toast::toast::{Manager, Phase, ToastOptions};
//! use std::time::{Duration, Instant};
//!
//! let mut manager = Manager::new();
//! let start = Instant::now();
//! let id = manager.push(
//!     ToastOptions::new().text("Saved").auto_close_millis(1000),
//!     start,
//! );
//!
//! manager.advance(start + Duration::from_millis(1100));
//! assert_eq!(manager.get(id).map(|t| t.phase()), Some(Phase::Dismissing));
//! ```

mod auto_close;
mod countdown;
mod manager;
mod options;
mod position;
pub mod registry;
mod widget;

pub use auto_close::AutoClose;
pub use countdown::Countdown;
pub use manager::{HostEvent, Manager, Message};
pub use options::{Field, OnClose, Setting, ToastOptions};
pub use position::Position;
pub use widget::{Phase, Toast, ToastId};

/// Class names, data keys and style properties written to the surface.
pub mod classes {
    /// Every toast element.
    pub const TOAST: &str = "toast";
    /// Region containers.
    pub const CONTAINER: &str = "toast-container";
    /// Present while a toast is entered; its removal starts the exit transition.
    pub const SHOW: &str = "show";
    /// Click-to-dismiss affordance.
    pub const MANUAL_CLOSE: &str = "manual-close";
    /// Progress indicator affordance.
    pub const PROGRESS: &str = "progress";
    /// Data key holding a container's position.
    pub const POSITION_KEY: &str = "position";
    /// Style property holding the remaining fraction, from 1 down to 0.
    pub const PROGRESS_PROPERTY: &str = "--progress";
}
