// SPDX-License-Identifier: MPL-2.0
//! Media playback port definition.
//!
//! This module defines the [`MediaPlayback`] trait, the native capability the
//! player widget drives. The widget never decodes anything itself: a platform
//! adapter plays the stream and reports progress through
//! [`MediaNotification`]s.
//!
//! # Design Notes
//!
//! - The capability is **stateful** and owned by a single widget
//! - Only `play` and `pause` can fail; setters apply whatever the platform
//!   accepts (clamping, if any, is the adapter's business)
//! - Notifications are pulled with [`MediaPlayback::take_notifications`] by
//!   the host's event loop and handed back to the widget

use crate::error::PlaybackError;

/// Playback-state changes emitted by the capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaNotification {
    /// The current position moved (playback progressed or a seek completed).
    TimeAdvanced,
    /// Playback reached the end of the media.
    Ended,
}

/// Port for the native media-playback capability.
///
/// # Example
///
/// ```ignore
/// use iced_vplayer::application::port::MediaPlayback;
///
/// fn restart(media: &mut impl MediaPlayback) {
///     media.set_current_time(0.0);
///     if let Err(err) = media.play() {
///         log::warn!("restart failed: {err}");
///     }
/// }
/// ```
pub trait MediaPlayback {
    /// Starts or resumes playback.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaybackError`] when the platform refuses to play.
    fn play(&mut self) -> Result<(), PlaybackError>;

    /// Pauses playback.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaybackError`] when the platform refuses to pause.
    fn pause(&mut self) -> Result<(), PlaybackError>;

    /// Returns true while playback is paused (including before the first play).
    fn is_paused(&self) -> bool;

    /// Current position, in seconds.
    fn current_time(&self) -> f64;

    /// Moves the current position, in seconds.
    fn set_current_time(&mut self, secs: f64);

    /// Media duration in seconds, `None` while unknown.
    fn duration(&self) -> Option<f64>;

    /// Output volume (nominally 0.0 to 1.0).
    fn volume(&self) -> f64;

    fn set_volume(&mut self, volume: f64);

    /// Playback rate multiplier (1.0 = normal speed).
    fn playback_rate(&self) -> f64;

    fn set_playback_rate(&mut self, rate: f64);

    /// Drains the notifications emitted since the last call.
    fn take_notifications(&mut self) -> Vec<MediaNotification>;
}
