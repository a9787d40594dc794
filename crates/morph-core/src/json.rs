//! JSON codec.
//!
//! Reading parses a document into the shared [`Value`] tree. Writing emits
//! human-readable JSON indented with 4 spaces, preserving key insertion
//! order and nesting exactly.

use std::path::Path;

use serde::Serialize;

use crate::error::{ConvertError, Result};
use crate::format::Format;
use crate::value::Value;

/// Parse a JSON document into a [`Value`].
pub fn from_str(content: &str) -> Result<Value> {
    serde_json::from_str(content).map_err(|e| ConvertError::Parse {
        format: Format::Json,
        message: e.to_string(),
    })
}

/// Serialize a [`Value`] as indented JSON. No trailing newline is added.
pub fn to_string(value: &Value) -> Result<String> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser).map_err(|e| serialize_error(e.to_string()))?;
    String::from_utf8(buf).map_err(|e| serialize_error(e.to_string()))
}

/// Read and parse the JSON file at `path`.
pub fn read(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    from_str(&content)
}

/// Serialize `value` and write it to `path`, creating or truncating the
/// file. The document is built fully in memory first, so a serialization
/// failure never touches the file.
pub fn write(value: &Value, path: &Path) -> Result<()> {
    let text = to_string(value)?;
    std::fs::write(path, text)?;
    Ok(())
}

fn serialize_error(message: String) -> ConvertError {
    ConvertError::Serialize {
        format: Format::Json,
        message,
    }
}
