//! CLI interface for relnotes

use std::env;
use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use crate::notes;

/// Environment variable supplying the display label for the commit range.
pub const RANGE_LABEL_VAR: &str = "RANGE_LABEL";

/// relnotes: grouped Markdown release notes from commit subjects
///
/// Reads newline-delimited commit subject lines on standard input and writes
/// a grouped Markdown release-notes document to standard output. The commit
/// range label is taken from the `RANGE_LABEL` environment variable.
#[derive(Parser)]
#[command(name = "relnotes")]
#[command(about = "Generate grouped Markdown release notes from commit subjects", long_about = None)]
#[command(version)]
pub struct Cli {}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read commit subjects from stdin")?;

        let range_label = env::var(RANGE_LABEL_VAR).unwrap_or_else(|_| "unknown".to_string());
        tracing::debug!(range = %range_label, "generating release notes");

        let report = notes::generate_report(&input, &range_label);
        println!("{report}");

        Ok(())
    }
}
