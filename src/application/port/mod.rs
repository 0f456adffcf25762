// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the widget remains independent
//! of any concrete media backend.
//!
//! # Available Ports
//!
//! - [`media`]: Native media playback (play/pause, seek, volume, rate)
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no platform types)
//! - Methods that can be refused return `Result` with domain error types
//! - No `async fn` - notifications are pulled by the host event loop

pub mod media;

pub use media::{MediaNotification, MediaPlayback};
