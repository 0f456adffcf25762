// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for a single player widget.
//!
//! Every widget keeps a bounded history of what happened to it (actions,
//! warnings, refused operations) next to what it writes through the `log`
//! facade. Hosts can inspect it or export it as TOML when reporting issues.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event, see [`DiagnosticEventKind`]
//! - [`DiagnosticsLog`]: Per-widget recorder built on the two above

mod buffer;
mod events;

use std::time::Instant;

use serde::Serialize;

use crate::config::DEFAULT_DIAGNOSTICS_CAPACITY;
use crate::error::Result;

pub use buffer::CircularBuffer;
pub use events::{DiagnosticEvent, DiagnosticEventKind, SerializableEvent, UserAction};

/// Recorder of diagnostic events for one widget.
#[derive(Debug, Clone)]
pub struct DiagnosticsLog {
    events: CircularBuffer<DiagnosticEvent>,
    started_at: Instant,
}

impl Default for DiagnosticsLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_DIAGNOSTICS_CAPACITY)
    }
}

#[derive(Serialize)]
struct Export<'a> {
    events: &'a [SerializableEvent],
}

impl DiagnosticsLog {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: CircularBuffer::new(capacity),
            started_at: Instant::now(),
        }
    }

    pub fn log_action(&mut self, action: UserAction) {
        self.events
            .push(DiagnosticEvent::new(DiagnosticEventKind::UserAction { action }));
    }

    pub fn log_warning(&mut self, message: impl Into<String>) {
        self.events.push(DiagnosticEvent::new(DiagnosticEventKind::Warning {
            message: message.into(),
        }));
    }

    pub fn log_error(&mut self, message: impl Into<String>) {
        self.events.push(DiagnosticEvent::new(DiagnosticEventKind::Error {
            message: message.into(),
        }));
    }

    /// Iterates over recorded events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    /// Returns the most recent event.
    #[must_use]
    pub fn last(&self) -> Option<&DiagnosticEvent> {
        self.events.last()
    }

    /// Iterates over the messages of recorded errors.
    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|event| match &event.kind {
            DiagnosticEventKind::Error { message } => Some(message.as_str()),
            _ => None,
        })
    }

    /// Iterates over the recorded actions.
    pub fn actions(&self) -> impl Iterator<Item = &UserAction> {
        self.events.iter().filter_map(|event| match &event.kind {
            DiagnosticEventKind::UserAction { action } => Some(action),
            _ => None,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Serializes the retained events as a TOML document.
    pub fn export_toml(&self) -> Result<String> {
        let events: Vec<SerializableEvent> = self
            .events
            .iter()
            .map(|event| SerializableEvent::from_event(event, self.started_at))
            .collect();
        Ok(toml::to_string(&Export { events: &events })?)
    }
}
