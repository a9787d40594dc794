//! YAML codec.
//!
//! Reading parses a document into the shared [`Value`] tree; an empty
//! document parses to [`Value::Null`]. Writing emits block style only (no
//! flow collections), with key insertion order preserved. Mapping keys must
//! be strings; wider YAML key forms are rejected at parse time.

use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::format::Format;
use crate::value::Value;

/// Parse a YAML document into a [`Value`].
pub fn from_str(content: &str) -> Result<Value> {
    serde_yaml::from_str(content).map_err(|e| ConvertError::Parse {
        format: Format::Yaml,
        message: e.to_string(),
    })
}

/// Serialize a [`Value`] as a block-style YAML document.
pub fn to_string(value: &Value) -> Result<String> {
    serde_yaml::to_string(value).map_err(|e| ConvertError::Serialize {
        format: Format::Yaml,
        message: e.to_string(),
    })
}

/// Read and parse the YAML file at `path`.
pub fn read(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    from_str(&content)
}

/// Serialize `value` and write it to `path`, creating or truncating the
/// file.
pub fn write(value: &Value, path: &Path) -> Result<()> {
    let text = to_string(value)?;
    std::fs::write(path, text)?;
    Ok(())
}
