// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the toast front end.
//!
//! Colors, spacing and sizes used by [`crate::ui::styles`] and
//! [`crate::ui::overlay`]. Spacing follows a 4px grid.
//!
//! ```
//! use iced_toast::ui::design_tokens::{opacity, palette};
//! use iced::Color;
//!
//! let faded = Color {
//!     a: opacity::TOAST_HIDDEN,
//!     ..palette::GRAY_900
//! };
//! assert!(faded.a < 1.0);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    /// Accent used by the progress bar.
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
}

pub mod opacity {
    /// Toast not entered yet, or fading out.
    pub const TOAST_HIDDEN: f32 = 0.0;
    /// Progress track behind the bar.
    pub const TRACK: f32 = 0.25;
    pub const SHADOW: f32 = 0.35;
    pub const OPAQUE: f32 = 1.0;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

pub mod sizing {
    pub const TOAST_WIDTH: f32 = 300.0;
}

pub mod typography {
    /// Toast message text.
    pub const BODY: f32 = 14.0;
    /// Status line of the demo application.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    pub const TOAST: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(opacity::TOAST_HIDDEN < opacity::OPAQUE);
    assert!(typography::BODY > typography::CAPTION);
    assert!(radius::MD > radius::SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_follows_grid() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XXS * 4.0);
    }
}
