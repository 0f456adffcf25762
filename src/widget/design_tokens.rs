// SPDX-License-Identifier: MPL-2.0
//! Design tokens of the player surface.
//!
//! The surface is themed independently of the host, so the colors are fixed
//! rather than derived from the active iced `Theme`.

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    /// Played portion of the progress track.
    pub const ACCENT: Color = Color::from_rgb(1.0, 0.65, 0.0);
}

pub mod opacity {
    /// Control bar laid over the bottom of the video.
    pub const CONTROLS: f32 = 0.6;
    pub const TRACK: f32 = 0.5;
}

/// Spacing scale (4px grid).
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
}

pub mod sizing {
    pub const VIDEO_MIN_HEIGHT: f32 = 240.0;
    pub const PROGRESS_HEIGHT: f32 = 8.0;
    pub const BUTTON_HEIGHT: f32 = 32.0;
    pub const RANGE_WIDTH: f32 = 100.0;
    pub const LABEL_TEXT: f32 = 12.0;
    pub const GLYPH_TEXT: f32 = 16.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_increasing() {
        assert!(spacing::XXS < spacing::XS);
        assert!(spacing::XS < spacing::SM);
    }

    #[test]
    fn progress_fits_in_a_button_row() {
        assert!(sizing::PROGRESS_HEIGHT < sizing::BUTTON_HEIGHT);
    }

    #[test]
    fn opacities_are_fractions() {
        for value in [opacity::CONTROLS, opacity::TRACK] {
            assert!((0.0..=1.0).contains(&value));
        }
    }
}
