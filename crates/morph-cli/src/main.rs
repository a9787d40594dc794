//! `morph` CLI — convert structured data files between JSON, YAML, and XML.
//!
//! ## Usage
//!
//! ```sh
//! # Formats inferred from the file extensions
//! morph convert config.json config.yaml
//!
//! # yml is a synonym for yaml
//! morph convert settings.yml settings.json
//!
//! # Override extension-based inference
//! morph convert data.txt data.json --input-format yaml
//!
//! # XML→XML re-emits the canonical document
//! morph convert notes.xml canonical.xml
//! ```
//!
//! Exit code is 0 on success; any failure exits nonzero with a one-line
//! `Error: ...` message on standard error.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use morph_core::{worker, ConversionReport, ConversionRequest, Format};

#[derive(Parser)]
#[command(
    name = "morph",
    version,
    about = "Convert structured data files between JSON, YAML, and XML"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a file from one format to another
    Convert {
        /// Path of the file to read
        input: PathBuf,
        /// Path of the converted file to write
        output: PathBuf,
        /// Input format (json, yaml, yml, xml); overrides the input extension
        #[arg(long, value_name = "FORMAT")]
        input_format: Option<Format>,
        /// Output format (json, yaml, yml, xml); overrides the output extension
        #[arg(long, value_name = "FORMAT")]
        output_format: Option<Format>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            input_format,
            output_format,
        } => {
            // One job submitted to a worker thread, the way an interactive
            // front-end keeps its own thread of control responsive. The
            // conversion itself stays synchronous.
            let reports = worker::spawn(ConversionRequest {
                input,
                output,
                input_format,
                output_format,
            });
            match reports
                .recv()
                .context("conversion worker terminated without reporting")?
            {
                ConversionReport::Finished { input, output } => {
                    println!(
                        "Finished converting {} to {}",
                        input.display(),
                        output.display()
                    );
                }
                ConversionReport::Failed { message } => bail!(message),
            }
        }
    }

    Ok(())
}
