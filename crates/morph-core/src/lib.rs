//! # morph-core
//!
//! Format-conversion engine for structured data files. A document in one of
//! the supported formats — JSON, YAML, or XML — is read into a shared
//! in-memory [`Value`] tree and written back out in another format.
//!
//! XML is the deliberate exception: it has no generic mapping onto a
//! map/list/scalar tree, so the XML reader produces the canonical document
//! *string* as its value, and the XML writer accepts only such a string.
//! See the [`xml`] module for the full policy.
//!
//! ## Quick start
//!
//! ```rust
//! use morph_core::{json, yaml};
//!
//! // JSON → Value → YAML → Value, structurally equal throughout
//! let value = json::from_str(r#"{"name":"Ada","tags":["math","engines"]}"#).unwrap();
//! let block = yaml::to_string(&value).unwrap();
//! assert_eq!(yaml::from_str(&block).unwrap(), value);
//! ```
//!
//! File-to-file conversion goes through the dispatcher:
//!
//! ```rust,no_run
//! use morph_core::convert_paths;
//!
//! // Formats inferred from the extensions
//! convert_paths("data.json".as_ref(), "data.yaml".as_ref(), None, None)?;
//! # Ok::<(), morph_core::ConvertError>(())
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the dynamically-typed tree passed from a reader to a writer
//! - [`json`] / [`yaml`] / [`xml`] — one reader/writer pair per format
//! - [`convert`] — format resolution and read→write dispatch
//! - [`worker`] — background submission of one-shot conversion jobs
//! - [`format`] — format tokens and extension inference
//! - [`error`] — the conversion error taxonomy

pub mod convert;
pub mod error;
pub mod format;
pub mod json;
pub mod value;
pub mod worker;
pub mod xml;
pub mod yaml;

pub use convert::{convert, convert_paths};
pub use error::{ConvertError, Result};
pub use format::Format;
pub use value::{Number, Value};
pub use worker::{ConversionReport, ConversionRequest};
