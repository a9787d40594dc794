//! XML codec.
//!
//! XML has no generic mapping onto the shared [`Value`] tree: elements
//! carry attributes, ordered children, and mixed text content, none of
//! which correspond 1:1 to a map/list/scalar model. Rather than invent a
//! lossy tree mapping, the reader parses the document and immediately
//! re-serializes it: the Intermediate Value for an XML source is the
//! canonical document *string*, not a parsed tree. The writer accepts only
//! such a string and parses it back out to disk.
//!
//! Consequences, by design:
//! - XML→XML re-emits the canonical document.
//! - XML→JSON and XML→YAML wrap the canonical document in a single string
//!   scalar.
//! - JSON→XML and YAML→XML are not defined for structured values; a
//!   mapping or sequence targeting XML is a serialization error.
//!
//! The canonical form preserves elements, attributes, text, and CDATA
//! byte-for-byte as parsed, and drops the XML declaration, comments,
//! processing instructions, and DOCTYPE. Canonicalization is idempotent:
//! its output re-canonicalizes to itself.

use std::path::Path;

use quick_xml::events::Event;
use quick_xml::{Reader, Writer};

use crate::error::{ConvertError, Result};
use crate::format::Format;
use crate::value::Value;

/// Read the XML file at `path` and return its canonical string form.
pub fn read(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    canonicalize(&content).map(Value::String)
}

/// Write an XML document held in `value` to `path`.
///
/// `value` must be a [`Value::String`] containing a well-formed document;
/// any other shape has no generic XML representation and is rejected
/// without touching the file.
pub fn write(value: &Value, path: &Path) -> Result<()> {
    let Value::String(document) = value else {
        return Err(ConvertError::Serialize {
            format: Format::Xml,
            message: "value is not an XML document string; mappings, sequences, and \
                      non-string scalars have no element representation"
                .to_string(),
        });
    };
    let canonical = canonicalize(document)?;
    std::fs::write(path, canonical)?;
    Ok(())
}

/// Parse `input` and re-serialize it into the canonical string form.
///
/// Beyond what the event parser enforces, this checks the document-level
/// grammar: exactly one root element, balanced tags, and no non-whitespace
/// text outside the root.
pub fn canonicalize(input: &str) -> Result<String> {
    let mut reader = Reader::from_str(input);
    let mut writer = Writer::new(Vec::new());

    // Open-element stack, checked here rather than left to reader config.
    let mut open: Vec<Vec<u8>> = Vec::new();
    let mut seen_root = false;

    loop {
        match reader.read_event() {
            Err(e) => return Err(parse_error(e.to_string())),
            Ok(Event::Eof) => break,
            // Not part of the canonical form.
            Ok(Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_)) => {}
            Ok(Event::Start(start)) => {
                if open.is_empty() {
                    claim_root(&mut seen_root)?;
                }
                open.push(start.name().as_ref().to_vec());
                write_event(&mut writer, Event::Start(start))?;
            }
            Ok(Event::End(end)) => {
                let expected = open
                    .pop()
                    .ok_or_else(|| parse_error("unmatched closing tag".to_string()))?;
                if expected != end.name().as_ref() {
                    return Err(parse_error(format!(
                        "mismatched closing tag: expected </{}>, found </{}>",
                        String::from_utf8_lossy(&expected),
                        String::from_utf8_lossy(end.name().as_ref()),
                    )));
                }
                write_event(&mut writer, Event::End(end))?;
            }
            Ok(Event::Empty(empty)) => {
                if open.is_empty() {
                    claim_root(&mut seen_root)?;
                }
                write_event(&mut writer, Event::Empty(empty))?;
            }
            Ok(Event::Text(text)) => {
                if open.is_empty() && !text.iter().all(|b| b.is_ascii_whitespace()) {
                    return Err(parse_error("text outside the root element".to_string()));
                }
                // Whitespace between top-level nodes passes through as-is.
                write_event(&mut writer, Event::Text(text))?;
            }
            Ok(event) => write_event(&mut writer, event)?,
        }
    }

    if !open.is_empty() {
        return Err(parse_error(
            "unexpected end of document: unclosed element".to_string(),
        ));
    }
    if !seen_root {
        return Err(parse_error("no root element found".to_string()));
    }

    String::from_utf8(writer.into_inner()).map_err(|e| parse_error(e.to_string()))
}

fn claim_root(seen_root: &mut bool) -> Result<()> {
    if *seen_root {
        return Err(parse_error("junk after document element".to_string()));
    }
    *seen_root = true;
    Ok(())
}

fn parse_error(message: String) -> ConvertError {
    ConvertError::Parse {
        format: Format::Xml,
        message,
    }
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer.write_event(event).map_err(|e| ConvertError::Serialize {
        format: Format::Xml,
        message: e.to_string(),
    })
}
