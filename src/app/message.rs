// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags of the demo application.

use crate::widget;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Player(widget::Message),
    /// Periodic tick driving the simulated media clock.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
///
/// Every `Some` value overrides the one read from the configuration file.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional path of a TOML configuration file.
    pub config_path: Option<PathBuf>,
    pub media_url: Option<String>,
    pub host_selector: Option<String>,
    /// Length of the simulated media, in seconds.
    pub duration_secs: Option<f64>,
}
