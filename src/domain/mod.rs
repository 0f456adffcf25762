// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core playback rules with ZERO external dependencies.
//!
//! This module contains pure value objects for the player widget. It has no
//! dependencies on external crates (except `std`) to ensure testability.
//!
//! # Modules
//!
//! - [`video`]: Playback values ([`ProgressPercent`](video::ProgressPercent),
//!   [`ScrubRatio`](video::ScrubRatio), [`SeekStep`](video::SeekStep),
//!   [`Glyph`](video::Glyph))

pub mod video;
