// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports between the widget and its collaborators.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The widget (presentation) only talks to ports
//!
//! # Example
//!
//! ```ignore
//! use iced_vplayer::application::port::MediaPlayback;
//!
//! // Infrastructure implements the port trait
//! struct GstPlayback { /* ... */ }
//! impl MediaPlayback for GstPlayback { /* ... */ }
//! ```

pub mod port;
