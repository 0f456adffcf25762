// SPDX-License-Identifier: MPL-2.0
//! Clock-driven media capability that does no decoding.
//!
//! [`SimulatedMedia`] behaves like a native media element from the widget's
//! point of view: it tracks a play position that advances with the host's
//! clock at the current playback rate and emits the same notifications a
//! real player would. The demo application and the tests run on it.

use std::time::Duration;

use crate::application::port::{MediaNotification, MediaPlayback};
use crate::domain::video::clamp_to_media;
use crate::error::PlaybackError;

/// In-memory implementation of [`MediaPlayback`].
#[derive(Debug, Clone)]
pub struct SimulatedMedia {
    source: Option<String>,
    duration: Option<f64>,
    position: f64,
    paused: bool,
    volume: f64,
    rate: f64,
    refusal: Option<String>,
    pending: Vec<MediaNotification>,
}

impl SimulatedMedia {
    /// Creates a paused media of the given length, positioned at 0.
    #[must_use]
    pub fn new(source: impl Into<String>, duration_secs: f64) -> Self {
        Self {
            source: Some(source.into()),
            duration: Some(duration_secs.max(0.0)),
            ..Self::unloaded()
        }
    }

    /// Creates a media without source nor duration (metadata not loaded).
    #[must_use]
    pub fn unloaded() -> Self {
        Self {
            source: None,
            duration: None,
            position: 0.0,
            paused: true,
            volume: 1.0,
            rate: 1.0,
            refusal: None,
            pending: Vec::new(),
        }
    }

    /// Makes every following `play()` fail with [`PlaybackError::Rejected`].
    pub fn refuse_play(&mut self, reason: impl Into<String>) {
        self.refusal = Some(reason.into());
    }

    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Returns true once the position reached the end of the media.
    #[must_use]
    pub fn has_ended(&self) -> bool {
        self.duration.is_some_and(|d| self.position >= d)
    }

    /// Advances the clock by `elapsed`, scaled by the playback rate.
    ///
    /// Does nothing while paused. Reaching the end pauses and queues
    /// [`MediaNotification::Ended`] after the final time update.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.paused {
            return;
        }
        let Some(duration) = self.duration else {
            return;
        };

        let step = elapsed.as_secs_f64() * self.rate;
        self.position = (self.position + step).clamp(0.0, duration);
        self.pending.push(MediaNotification::TimeAdvanced);

        if self.position >= duration {
            self.paused = true;
            self.pending.push(MediaNotification::Ended);
        }
    }
}

impl MediaPlayback for SimulatedMedia {
    fn play(&mut self) -> Result<(), PlaybackError> {
        if let Some(reason) = &self.refusal {
            return Err(PlaybackError::Rejected(reason.clone()));
        }
        if self.source.is_none() {
            return Err(PlaybackError::NoSource);
        }
        if self.has_ended() {
            self.position = 0.0;
            self.pending.push(MediaNotification::TimeAdvanced);
        }
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) -> Result<(), PlaybackError> {
        self.paused = true;
        Ok(())
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_current_time(&mut self, secs: f64) {
        if !secs.is_finite() {
            return;
        }
        self.position = clamp_to_media(secs, self.duration);
        self.pending.push(MediaNotification::TimeAdvanced);
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        if volume.is_finite() {
            self.volume = volume.clamp(0.0, 1.0);
        }
    }

    fn playback_rate(&self) -> f64 {
        self.rate
    }

    fn set_playback_rate(&mut self, rate: f64) {
        if rate.is_finite() {
            self.rate = rate;
        }
    }

    fn take_notifications(&mut self) -> Vec<MediaNotification> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn new_media_is_paused_at_start() {
        let media = SimulatedMedia::new("clip.mp4", 10.0);
        assert!(media.is_paused());
        assert_abs_diff_eq!(media.current_time(), 0.0);
        assert_eq!(media.duration(), Some(10.0));
        assert_eq!(media.source(), Some("clip.mp4"));
    }

    #[test]
    fn advance_is_ignored_while_paused() {
        let mut media = SimulatedMedia::new("clip.mp4", 10.0);
        media.advance(Duration::from_secs(1));
        assert_abs_diff_eq!(media.current_time(), 0.0);
        assert!(media.take_notifications().is_empty());
    }

    #[test]
    fn advance_scales_with_rate() {
        let mut media = SimulatedMedia::new("clip.mp4", 10.0);
        media.play().expect("play should succeed");
        media.set_playback_rate(2.0);
        media.advance(Duration::from_millis(1500));
        assert_abs_diff_eq!(media.current_time(), 3.0, epsilon = 1e-9);
        assert_eq!(
            media.take_notifications(),
            vec![MediaNotification::TimeAdvanced]
        );
    }

    #[test]
    fn reaching_the_end_pauses_and_notifies() {
        let mut media = SimulatedMedia::new("clip.mp4", 2.0);
        media.play().expect("play should succeed");
        media.advance(Duration::from_secs(5));
        assert!(media.is_paused());
        assert!(media.has_ended());
        assert_abs_diff_eq!(media.current_time(), 2.0);
        assert_eq!(
            media.take_notifications(),
            vec![MediaNotification::TimeAdvanced, MediaNotification::Ended]
        );
    }

    #[test]
    fn play_after_end_restarts() {
        let mut media = SimulatedMedia::new("clip.mp4", 2.0);
        media.play().expect("play should succeed");
        media.advance(Duration::from_secs(5));
        media.play().expect("play should succeed");
        assert_abs_diff_eq!(media.current_time(), 0.0);
        assert!(!media.is_paused());
    }

    #[test]
    fn seek_clamps_and_notifies() {
        let mut media = SimulatedMedia::new("clip.mp4", 60.0);
        media.set_current_time(75.0);
        assert_abs_diff_eq!(media.current_time(), 60.0);
        media.set_current_time(-4.0);
        assert_abs_diff_eq!(media.current_time(), 0.0);
        media.set_current_time(f64::NAN);
        assert_abs_diff_eq!(media.current_time(), 0.0);
        assert_eq!(media.take_notifications().len(), 2);
    }

    #[test]
    fn volume_is_clamped_to_unit_range() {
        let mut media = SimulatedMedia::new("clip.mp4", 60.0);
        media.set_volume(0.3);
        assert_abs_diff_eq!(media.volume(), 0.3);
        media.set_volume(4.0);
        assert_abs_diff_eq!(media.volume(), 1.0);
    }

    #[test]
    fn unloaded_media_cannot_play() {
        let mut media = SimulatedMedia::unloaded();
        assert_eq!(media.play(), Err(PlaybackError::NoSource));
        assert!(media.duration().is_none());
    }

    #[test]
    fn refused_play_reports_reason() {
        let mut media = SimulatedMedia::new("clip.mp4", 60.0);
        media.refuse_play("autoplay blocked");
        assert_eq!(
            media.play(),
            Err(PlaybackError::Rejected("autoplay blocked".to_string()))
        );
        assert!(media.is_paused());
    }
}
