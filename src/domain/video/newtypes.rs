// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for the values the player widget
//! derives from pointer positions and media timing. Each constructor encodes
//! the policy for degenerate inputs (unknown duration, zero-width track).

use std::fmt;

// =============================================================================
// ProgressPercent
// =============================================================================

/// Portion of the media already played, in percent (0.0 to 100.0).
///
/// An unknown, zero or non-finite duration yields 0%. Positions past the end
/// are reported as 100%.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgressPercent(f32);

impl ProgressPercent {
    /// Empty progress (nothing played yet, or playback ended).
    pub const ZERO: Self = Self(0.0);

    /// Computes `current / duration * 100`.
    #[must_use]
    pub fn from_position(current_secs: f64, duration_secs: Option<f64>) -> Self {
        let Some(duration) = duration_secs.filter(|d| d.is_finite() && *d > 0.0) else {
            return Self::ZERO;
        };
        let percent = current_secs / duration * 100.0;
        if !percent.is_finite() {
            return Self::ZERO;
        }
        Self(percent.clamp(0.0, 100.0) as f32)
    }

    /// Returns the percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the filled fraction of the track (0.0 to 1.0).
    #[must_use]
    pub fn fraction(self) -> f32 {
        self.0 / 100.0
    }
}

impl fmt::Display for ProgressPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// ScrubRatio
// =============================================================================

/// Horizontal pointer position on the progress track, as a fraction of its
/// width (0.0 = left edge, 1.0 = right edge).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrubRatio(f64);

impl ScrubRatio {
    /// Builds the ratio from a pointer offset and the track width.
    ///
    /// Returns `None` for a collapsed or non-finite track. Offsets outside
    /// the track are clamped to its edges.
    #[must_use]
    pub fn from_pointer(offset_x: f32, track_width: f32) -> Option<Self> {
        if !track_width.is_finite() || track_width <= 0.0 || !offset_x.is_finite() {
            return None;
        }
        let ratio = f64::from(offset_x) / f64::from(track_width);
        Some(Self(ratio.clamp(0.0, 1.0)))
    }

    /// Returns the ratio value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Maps the ratio onto a media duration, in seconds.
    ///
    /// Returns `None` when the duration is unknown or not finite.
    #[must_use]
    pub fn position_in(self, duration_secs: Option<f64>) -> Option<f64> {
        duration_secs
            .filter(|d| d.is_finite() && *d >= 0.0)
            .map(|d| self.0 * d)
    }
}

// =============================================================================
// SeekStep
// =============================================================================

/// Direction of a relative seek.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekDirection {
    Backward,
    Forward,
}

impl SeekDirection {
    /// Picks a direction from a pointer offset on a surface of the given
    /// width: inside the left edge zone goes backward, inside the right edge
    /// zone goes forward, anything else is `None`.
    #[must_use]
    pub fn from_edge(offset_x: f32, width: f32, zone: f32) -> Option<Self> {
        if offset_x < zone {
            Some(Self::Backward)
        } else if offset_x > width - zone {
            Some(Self::Forward)
        } else {
            None
        }
    }
}

/// Amount of seconds skipped by the step controls.
///
/// Unlike the other newtypes this one is not clamped: the configured value is
/// used as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekStep(f64);

impl SeekStep {
    #[must_use]
    pub fn new(secs: f64) -> Self {
        Self(secs)
    }

    /// Returns the step in seconds.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Computes the seek target from `current_secs`, bounded to
    /// `[0, duration]` (or to `>= 0` when the duration is unknown).
    #[must_use]
    pub fn target(self, current_secs: f64, direction: SeekDirection, duration_secs: Option<f64>) -> f64 {
        let raw = match direction {
            SeekDirection::Backward => current_secs - self.0,
            SeekDirection::Forward => current_secs + self.0,
        };
        clamp_to_media(raw, duration_secs)
    }

    /// Label of the step-backward control, e.g. `<<2s`.
    #[must_use]
    pub fn backward_label(self) -> String {
        format!("<<{}s", self.0)
    }

    /// Label of the step-forward control, e.g. `2s>>`.
    #[must_use]
    pub fn forward_label(self) -> String {
        format!("{}s>>", self.0)
    }
}

/// Bounds a media position to `[0, duration]`.
#[must_use]
pub fn clamp_to_media(position_secs: f64, duration_secs: Option<f64>) -> f64 {
    let lower_bounded = position_secs.max(0.0);
    match duration_secs.filter(|d| d.is_finite() && *d >= 0.0) {
        Some(duration) => lower_bounded.min(duration),
        None => lower_bounded,
    }
}

// =============================================================================
// Tests
// =============================================================================
