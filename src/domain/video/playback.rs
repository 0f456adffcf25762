// SPDX-License-Identifier: MPL-2.0
//! Play/pause glyph shown on the toggle control.

/// Glyph displayed on the toggle button.
///
/// The glyph reflects the state playback is transitioning *into*: pressing
/// the button while paused shows [`Glyph::Pause`] because the media is about
/// to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Glyph {
    /// Shown while paused (`►`).
    #[default]
    Play,
    /// Shown while playing (`❚❚`).
    Pause,
}

impl Glyph {
    /// Glyph for the state entered when toggling from `was_paused`.
    #[must_use]
    pub fn after_toggle(was_paused: bool) -> Self {
        if was_paused {
            Self::Pause
        } else {
            Self::Play
        }
    }

    /// Text of the glyph.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Play => "►",
            Self::Pause => "❚❚",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_play() {
        assert_eq!(Glyph::default(), Glyph::Play);
        assert_eq!(Glyph::default().symbol(), "►");
    }

    #[test]
    fn toggle_from_paused_shows_pause() {
        assert_eq!(Glyph::after_toggle(true), Glyph::Pause);
        assert_eq!(Glyph::after_toggle(true).symbol(), "❚❚");
    }

    #[test]
    fn toggle_from_playing_shows_play() {
        assert_eq!(Glyph::after_toggle(false), Glyph::Play);
    }
}
