/// Error types for QR Studio
///
/// Validation and encoding errors are shown inline to the user.
/// Config and export errors are only logged.

use std::path::PathBuf;
use thiserror::Error;

/// Generic message shown when the encoder fails without saying why
pub const ENCODE_FALLBACK_MESSAGE: &str = "Failed to generate QR code";

/// Why user input was rejected before encoding
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter some content to generate a QR code")]
    EmptyInput,

    #[error("Invalid URL format")]
    MalformedUrl,
}

/// The encoder could not produce an image
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("{0}")]
    Encoder(String),

    #[error("{}", ENCODE_FALLBACK_MESSAGE)]
    Unknown,
}

impl EncodeError {
    /// Wrap an encoder message, falling back to the generic one when blank
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            EncodeError::Unknown
        } else {
            EncodeError::Encoder(message)
        }
    }
}

/// Problems reading or applying the config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid color {0:?} (expected #rrggbb)")]
    InvalidColor(String),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

/// Problems writing a downloaded image to disk
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
