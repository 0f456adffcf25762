// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for widget activity tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Widget actions that can be captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Widget was rendered into its host node.
    Mount {
        /// Selector of the host node.
        host: String,
    },

    /// Toggle play/pause state.
    TogglePlayback {
        /// Whether playback was requested to start.
        play: bool,
    },

    /// Seek to an absolute position.
    SeekVideo {
        /// Target position in seconds.
        position_secs: f64,
    },

    /// Relative step backward or forward.
    StepSeek {
        /// Signed offset in seconds.
        offset_secs: f64,
    },

    /// Change volume level.
    SetVolume {
        /// Volume level as entered on the control.
        volume: f64,
    },

    /// Change playback rate.
    SetPlaybackRate {
        /// New playback rate multiplier.
        rate: f64,
    },

    /// Playback reached the end of the media.
    PlaybackEnded,
}

/// A single diagnostic event with its capture time.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// Widget action triggered by the user or by the media.
    UserAction {
        action: UserAction,
    },

    /// Non-critical issue; the widget kept going.
    Warning {
        message: String,
    },

    /// Operation refused or failed.
    Error {
        message: String,
    },
}

impl DiagnosticEventKind {
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Warning { .. })
    }
}

/// Event shape used for export, with the timestamp made relative to the
/// start of the log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    /// Milliseconds since the log was created.
    pub elapsed_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[must_use]
    pub fn from_event(event: &DiagnosticEvent, origin: Instant) -> Self {
        let elapsed = event.timestamp.saturating_duration_since(origin);
        Self {
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            kind: event.kind.clone(),
        }
    }
}
