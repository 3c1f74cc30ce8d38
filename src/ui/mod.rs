// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of toast regions.
//!
//! - [`overlay`] - Turns a [`crate::surface::Document`] into widgets
//! - [`styles`] - Card and progress bar styles
//! - [`design_tokens`] - Colors, spacing and sizes

pub mod design_tokens;
pub mod overlay;
pub mod styles;
