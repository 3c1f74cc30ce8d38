// SPDX-License-Identifier: MPL-2.0
//! Style functions for toast cards and their progress bar.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::{container, progress_bar};
use iced::{Background, Border, Color, Theme};

/// Card surface of a toast.
///
/// `shown` mirrors the toast's `show` class: a toast that has not entered
/// yet, or is leaving, is drawn fully transparent.
pub fn toast_card(theme: &Theme, shown: bool) -> container::Style {
    let base = theme.extended_palette().background.base;
    let alpha = if shown {
        opacity::OPAQUE
    } else {
        opacity::TOAST_HIDDEN
    };

    container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..base.color
        })),
        text_color: Some(Color { a: alpha, ..base.text }),
        border: Border {
            color: Color {
                a: alpha,
                ..palette::GRAY_400
            },
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: if shown {
            shadow::TOAST
        } else {
            iced::Shadow::default()
        },
        ..Default::default()
    }
}

/// Draining bar along the bottom of a toast.
pub fn progress(_theme: &Theme) -> progress_bar::Style {
    progress_bar::Style {
        background: Background::Color(Color {
            a: opacity::TRACK,
            ..palette::GRAY_200
        }),
        bar: Background::Color(palette::PRIMARY_500),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
    }
}
