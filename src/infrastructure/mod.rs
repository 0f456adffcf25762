// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`simulated`]: Clock-driven media without decoding (implements [`MediaPlayback`])
//!
//! [`MediaPlayback`]: crate::application::port::MediaPlayback

pub mod simulated;

pub use simulated::SimulatedMedia;
