// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests.
//!
//! Float values are compared with `approx`, which handles the precision
//! issues `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

use crate::config::WidgetConfig;

/// Media URL used by [`sample_config`].
pub const SAMPLE_URL: &str = "video/mov_bbb.mp4";

/// A valid configuration mounting into `body` with the default steps.
pub fn sample_config() -> WidgetConfig {
    WidgetConfig {
        media_url: Some(SAMPLE_URL.to_string()),
        host_selector: Some("body".to_string()),
        ..WidgetConfig::default()
    }
}
