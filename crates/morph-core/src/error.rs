//! Error types for conversion operations.

use thiserror::Error;

use crate::format::Format;

/// Errors produced by the format codecs and the conversion dispatcher.
///
/// Codec-level errors propagate unchanged to the caller; nothing is
/// recovered or retried internally.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The file could not be opened, read, or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The content does not conform to the declared format's grammar.
    #[error("{format} parse error: {message}")]
    Parse { format: Format, message: String },

    /// The value's shape cannot be represented in the target format
    /// (notably: a mapping or sequence targeting XML).
    #[error("{format} serialization error: {message}")]
    Serialize { format: Format, message: String },

    /// The format token is not one of `json`, `yaml`, `yml`, or `xml`.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Convenience alias used throughout morph-core.
pub type Result<T> = std::result::Result<T, ConvertError>;
