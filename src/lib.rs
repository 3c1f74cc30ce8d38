// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` provides pausable, auto-dismissing toast notifications.
//!
//! The toast logic is headless: it drives a [`surface::Surface`] and a
//! timer queue on caller-supplied time. The bundled [`surface::Document`]
//! keeps the element tree in memory, and the [`ui`] module renders it with
//! the Iced GUI framework.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod surface;
pub mod timer;
pub mod toast;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
