// SPDX-License-Identifier: MPL-2.0
//! `iced_vplayer` is a small video player widget built with the Iced GUI framework.
//!
//! The widget mounts a video surface and its transport controls (play/pause
//! toggle, progress track, volume and rate ranges, step buttons) into a host
//! page, and drives a media-playback capability in response to user input.
//! Decoding is out of scope: the capability is a trait, with a simulated
//! clock-driven implementation for the demo and the tests.

#![doc(html_root_url = "https://docs.rs/iced_vplayer/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod host;
pub mod i18n;
pub mod infrastructure;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_utils;
