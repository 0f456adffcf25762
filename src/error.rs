// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Init(InitError),
    Playback(PlaybackError),
}

/// Reasons why [`crate::widget::PlayerWidget::init`] refused to mount.
///
/// None of these leave anything behind in the host page.
#[derive(Debug, Clone, PartialEq)]
pub enum InitError {
    /// The configuration has no (or a blank) media URL.
    MissingMediaUrl,

    /// The configuration has no (or a blank) host selector.
    MissingHostSelector,

    /// The host selector did not match any node of the page.
    HostNotFound(String),

    /// The widget was already mounted by an earlier `init`.
    AlreadyInitialized,
}

impl InitError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            InitError::MissingMediaUrl => "error-init-missing-media-url",
            InitError::MissingHostSelector => "error-init-missing-host",
            InitError::HostNotFound(_) => "error-init-host-not-found",
            InitError::AlreadyInitialized => "error-init-already-initialized",
        }
    }
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::MissingMediaUrl => write!(f, "Need media URL"),
            InitError::MissingHostSelector => write!(f, "Need host container selector"),
            InitError::HostNotFound(selector) => {
                write!(f, "No host container matches '{}'", selector)
            }
            InitError::AlreadyInitialized => write!(f, "Widget is already initialized"),
        }
    }
}

/// Failures reported by the native media-playback capability.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackError {
    /// The media has no playable source (not loaded, unsupported, ...).
    NoSource,

    /// The capability refused the request.
    Rejected(String),
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::NoSource => write!(f, "No playable media source"),
            PlaybackError::Rejected(msg) => write!(f, "Playback rejected: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Init(e) => write!(f, "Init Error: {}", e),
            Error::Playback(e) => write!(f, "Playback Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<InitError> for Error {
    fn from(err: InitError) -> Self {
        Error::Init(err)
    }
}

impl From<PlaybackError> for Error {
    fn from(err: PlaybackError) -> Self {
        Error::Playback(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
