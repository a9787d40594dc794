//! Format identification and extension-based inference.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{ConvertError, Result};

/// A supported serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json = 0,
    Yaml = 1,
    Xml = 2,
}

impl Format {
    /// Resolve a format token. Tokens are ASCII case-folded; `yaml` and
    /// `yml` are synonyms for the same codec.
    pub fn from_token(token: &str) -> Result<Self> {
        match token.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            "xml" => Ok(Format::Xml),
            _ => Err(ConvertError::UnsupportedFormat(token.to_string())),
        }
    }

    /// Infer a format from the extension of `path` — the substring after
    /// the final `.`. No content sniffing is performed.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|ext| ext.to_str()).ok_or_else(|| {
            ConvertError::UnsupportedFormat(format!("{} (no file extension)", path.display()))
        })?;
        Self::from_token(ext)
    }

    /// The canonical lower-case token for this format.
    pub fn token(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Xml => "xml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Json => "JSON",
            Format::Yaml => "YAML",
            Format::Xml => "XML",
        })
    }
}

impl FromStr for Format {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        Format::from_token(s)
    }
}
