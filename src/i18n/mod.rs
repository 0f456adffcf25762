// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the widget.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Tooltips, labels and user-facing error messages go through it.
//!
//! # Features
//!
//! - Locale detection from the CLI flag or the system settings
//! - `.ftl` translation files embedded at build time
//! - Runtime language switching
//! - Fallback to en-US when a translation is missing

pub mod fluent;
