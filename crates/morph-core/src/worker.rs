//! Background execution of conversion jobs.
//!
//! A conversion is a single blocking read-then-write with no internal
//! concurrency; callers that need a responsive thread of control submit it
//! here instead of calling [`convert_paths`] inline. Each job runs on its
//! own thread against its own files and value, so concurrent jobs never
//! contend — unless they target the same output path, in which case the
//! last writer wins with no ordering guarantee.
//!
//! There is no cancellation, timeout, or retry: a spawned job runs to
//! completion or failure and reports exactly once.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use crate::convert::convert_paths;
use crate::format::Format;

/// One conversion job: where to read, where to write, and optional format
/// overrides (inferred from the extensions when `None`).
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub input_format: Option<Format>,
    pub output_format: Option<Format>,
}

/// Outcome of a background conversion.
///
/// Failure carries only the rendered message, not the error kind — callers
/// that need to distinguish kinds use [`convert_paths`] directly.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionReport {
    /// The output file was fully written.
    Finished { input: PathBuf, output: PathBuf },
    /// The conversion failed; the output file may not exist or may be
    /// incomplete.
    Failed { message: String },
}

/// Run `request` on a fresh worker thread.
///
/// Returns immediately; exactly one [`ConversionReport`] is delivered on
/// the returned channel when the job completes or fails.
pub fn spawn(request: ConversionRequest) -> Receiver<ConversionReport> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let outcome = convert_paths(
            &request.input,
            &request.output,
            request.input_format,
            request.output_format,
        );
        let report = match outcome {
            Ok(()) => ConversionReport::Finished {
                input: request.input,
                output: request.output,
            },
            Err(e) => ConversionReport::Failed {
                message: e.to_string(),
            },
        };
        // The receiver may already be gone; the report is simply dropped.
        let _ = tx.send(report);
    });
    rx
}
