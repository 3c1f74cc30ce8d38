// SPDX-License-Identifier: MPL-2.0
//! Toast options and the closed set of fields they can carry.
//!
//! Options are an ordered list of [`Setting`]s. A toast applies them one by
//! one in that order, so callers control the order of partial updates while
//! construction always uses [`Field::CANONICAL`].

use super::{AutoClose, Position};
use crate::config::ToastDefaults;
use std::fmt;

/// Callback invoked once when a toast starts being dismissed.
pub struct OnClose(Box<dyn FnMut() + Send>);

impl OnClose {
    pub fn new(callback: impl FnMut() + Send + 'static) -> Self {
        Self(Box::new(callback))
    }

    /// A callback that does nothing.
    #[must_use]
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    pub(crate) fn call(&mut self) {
        (self.0)();
    }
}

impl Default for OnClose {
    fn default() -> Self {
        Self::noop()
    }
}

impl fmt::Debug for OnClose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OnClose(..)")
    }
}

/// Names of the configurable toast fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Position,
    Text,
    AutoClose,
    OnClose,
    ManualClose,
    ShowProgress,
    PauseOnHover,
    PauseOnFocusLoss,
}

impl Field {
    /// Order used when a toast is first built.
    ///
    /// `AutoClose` precedes `ShowProgress` so the progress updater knows the
    /// duration it drains against.
    pub const CANONICAL: [Field; 8] = [
        Field::Position,
        Field::Text,
        Field::AutoClose,
        Field::OnClose,
        Field::ManualClose,
        Field::ShowProgress,
        Field::PauseOnHover,
        Field::PauseOnFocusLoss,
    ];

    /// Returns the field's settings-file key.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Field::Position => "position",
            Field::Text => "text",
            Field::AutoClose => "auto_close",
            Field::OnClose => "on_close",
            Field::ManualClose => "manual_close",
            Field::ShowProgress => "show_progress",
            Field::PauseOnHover => "pause_on_hover",
            Field::PauseOnFocusLoss => "pause_on_focus_loss",
        }
    }

    /// Returns the default setting for this field.
    #[must_use]
    pub fn default_setting(self, defaults: &ToastDefaults) -> Setting {
        match self {
            Field::Position => Setting::Position(defaults.position.clone()),
            Field::Text => Setting::Text(defaults.text.clone()),
            Field::AutoClose => Setting::AutoClose(defaults.auto_close),
            Field::OnClose => Setting::OnClose(OnClose::noop()),
            Field::ManualClose => Setting::ManualClose(defaults.manual_close),
            Field::ShowProgress => Setting::ShowProgress(defaults.show_progress),
            Field::PauseOnHover => Setting::PauseOnHover(defaults.pause_on_hover),
            Field::PauseOnFocusLoss => Setting::PauseOnFocusLoss(defaults.pause_on_focus_loss),
        }
    }
}

/// A single field together with its value.
#[derive(Debug)]
pub enum Setting {
    Position(Position),
    Text(String),
    AutoClose(AutoClose),
    OnClose(OnClose),
    ManualClose(bool),
    ShowProgress(bool),
    PauseOnHover(bool),
    PauseOnFocusLoss(bool),
}

impl Setting {
    #[must_use]
    pub fn field(&self) -> Field {
        match self {
            Setting::Position(_) => Field::Position,
            Setting::Text(_) => Field::Text,
            Setting::AutoClose(_) => Field::AutoClose,
            Setting::OnClose(_) => Field::OnClose,
            Setting::ManualClose(_) => Field::ManualClose,
            Setting::ShowProgress(_) => Field::ShowProgress,
            Setting::PauseOnHover(_) => Field::PauseOnHover,
            Setting::PauseOnFocusLoss(_) => Field::PauseOnFocusLoss,
        }
    }
}

/// A partial set of toast options.
///
/// # Example
///
/// ```
/// use iced_toast::toast::{Field, ToastOptions};
///
/// let options = ToastOptions::new()
///     .text("Saved")
///     .auto_close_millis(1000)
///     .show_progress(true);
///
/// let fields: Vec<_> = options.fields().collect();
/// assert_eq!(fields, vec![Field::Text, Field::AutoClose, Field::ShowProgress]);
/// ```
#[derive(Debug, Default)]
pub struct ToastOptions {
    settings: Vec<Setting>,
}

impl ToastOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a setting. Setting a field again keeps its first position and
    /// replaces its value.
    #[must_use]
    pub fn with(mut self, setting: Setting) -> Self {
        let field = setting.field();
        match self.settings.iter_mut().find(|s| s.field() == field) {
            Some(slot) => *slot = setting,
            None => self.settings.push(setting),
        }
        self
    }

    #[must_use]
    pub fn position(self, position: impl Into<Position>) -> Self {
        self.with(Setting::Position(position.into()))
    }

    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.with(Setting::Text(text.into()))
    }

    #[must_use]
    pub fn auto_close(self, auto_close: impl Into<AutoClose>) -> Self {
        self.with(Setting::AutoClose(auto_close.into()))
    }

    /// Auto-closes after `millis`; negative values behave like zero.
    #[must_use]
    pub fn auto_close_millis(self, millis: i64) -> Self {
        self.auto_close(AutoClose::after_millis(millis))
    }

    #[must_use]
    pub fn no_auto_close(self) -> Self {
        self.auto_close(AutoClose::Disabled)
    }

    #[must_use]
    pub fn on_close(self, callback: impl FnMut() + Send + 'static) -> Self {
        self.with(Setting::OnClose(OnClose::new(callback)))
    }

    #[must_use]
    pub fn manual_close(self, enabled: bool) -> Self {
        self.with(Setting::ManualClose(enabled))
    }

    #[must_use]
    pub fn show_progress(self, enabled: bool) -> Self {
        self.with(Setting::ShowProgress(enabled))
    }

    #[must_use]
    pub fn pause_on_hover(self, enabled: bool) -> Self {
        self.with(Setting::PauseOnHover(enabled))
    }

    #[must_use]
    pub fn pause_on_focus_loss(self, enabled: bool) -> Self {
        self.with(Setting::PauseOnFocusLoss(enabled))
    }

    /// Supplied fields, in application order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.settings.iter().map(Setting::field)
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.fields().any(|f| f == field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.settings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Consumes the options, yielding settings in the order they were supplied.
    #[must_use]
    pub fn into_settings(self) -> Vec<Setting> {
        self.settings
    }

    /// Fills every missing field from `defaults` and returns all settings in
    /// canonical order.
    #[must_use]
    pub fn merged_over(mut self, defaults: &ToastDefaults) -> Vec<Setting> {
        Field::CANONICAL
            .iter()
            .map(|&field| {
                match self.settings.iter().position(|s| s.field() == field) {
                    Some(index) => self.settings.swap_remove(index),
                    None => field.default_setting(defaults),
                }
            })
            .collect()
    }
}

impl From<&ToastDefaults> for ToastOptions {
    fn from(defaults: &ToastDefaults) -> Self {
        Self {
            settings: Field::CANONICAL
                .iter()
                .map(|field| field.default_setting(defaults))
                .collect(),
        }
    }
}
