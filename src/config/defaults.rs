// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the widget. Constants are organized by category.
//!
//! # Categories
//!
//! - **Steps**: Granularity of the volume, rate and seek controls
//! - **Ranges**: Bounds rendered on the range controls
//! - **Pointer**: Hit zones for pointer gestures on the video surface
//! - **Diagnostics**: Capacity of the per-widget event buffer

// ==========================================================================
// Step Defaults
// ==========================================================================

/// Default step of the volume range control.
pub const DEFAULT_VOLUME_STEP: f64 = 0.05;

/// Default step of the playback-rate range control.
pub const DEFAULT_RATE_STEP: f64 = 0.5;

/// Default amount skipped by the step buttons (in seconds).
pub const DEFAULT_SEEK_STEP_SECS: f64 = 2.0;

// ==========================================================================
// Range Defaults
// ==========================================================================

/// Lower bound of the volume control.
pub const VOLUME_MIN: f64 = 0.0;

/// Upper bound of the volume control.
pub const VOLUME_MAX: f64 = 1.0;

/// Lower bound of the playback-rate control.
pub const RATE_MIN: f64 = 0.0;

/// Upper bound of the playback-rate control.
pub const RATE_MAX: f64 = 5.0;

/// Initial value of the playback-rate control.
pub const DEFAULT_RATE: f64 = 1.0;

// ==========================================================================
// Pointer Defaults
// ==========================================================================

/// Width (in logical pixels) of the edge zones on the video surface where a
/// double click steps backward (left) or forward (right).
pub const EDGE_ZONE_PX: f32 = 20.0;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events retained per widget.
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize = 256;

/// Minimum diagnostic buffer capacity.
pub const MIN_DIAGNOSTICS_CAPACITY: usize = 16;

/// Maximum diagnostic buffer capacity.
pub const MAX_DIAGNOSTICS_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_VOLUME_STEP > 0.0);
    assert!(DEFAULT_RATE_STEP > 0.0);
    assert!(DEFAULT_SEEK_STEP_SECS > 0.0);

    assert!(VOLUME_MAX > VOLUME_MIN);
    assert!(RATE_MAX > RATE_MIN);
    assert!(DEFAULT_RATE >= RATE_MIN);
    assert!(DEFAULT_RATE <= RATE_MAX);

    assert!(EDGE_ZONE_PX > 0.0);

    assert!(MIN_DIAGNOSTICS_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_CAPACITY >= MIN_DIAGNOSTICS_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_CAPACITY >= MIN_DIAGNOSTICS_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_CAPACITY <= MAX_DIAGNOSTICS_CAPACITY);
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn step_defaults_are_valid() {
        assert_abs_diff_eq!(DEFAULT_VOLUME_STEP, 0.05);
        assert_abs_diff_eq!(DEFAULT_RATE_STEP, 0.5);
        assert_abs_diff_eq!(DEFAULT_SEEK_STEP_SECS, 2.0);
    }

    #[test]
    fn volume_step_fits_volume_range() {
        assert!(DEFAULT_VOLUME_STEP < VOLUME_MAX - VOLUME_MIN);
    }

    #[test]
    fn rate_default_is_normal_speed() {
        assert_abs_diff_eq!(DEFAULT_RATE, 1.0);
        assert!(DEFAULT_RATE > RATE_MIN);
        assert!(DEFAULT_RATE < RATE_MAX);
    }

    #[test]
    fn diagnostics_defaults_are_valid() {
        assert_eq!(DEFAULT_DIAGNOSTICS_CAPACITY, 256);
        assert!(DEFAULT_DIAGNOSTICS_CAPACITY >= MIN_DIAGNOSTICS_CAPACITY);
        assert!(DEFAULT_DIAGNOSTICS_CAPACITY <= MAX_DIAGNOSTICS_CAPACITY);
    }
}
