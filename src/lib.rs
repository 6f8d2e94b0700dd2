//! # relnotes
//!
//! Generates grouped Markdown release notes from commit subject lines.
//!
//! Subjects are read from standard input, one per line. Each subject is
//! normalized (conventional-commit prefix stripped, whitespace collapsed,
//! first letter capitalized), classified into one of a fixed set of feature
//! categories by keyword matching, and rendered as a grouped Markdown report
//! on standard output.
//!
//! ## Quick Start
//!
//! ```rust
//! use relnotes::notes::generate_report;
//!
//! let report = generate_report("feat(sheet): show mythic rating\n", "v1.2.0..v1.3.0");
//! assert!(report.starts_with("## Release notes"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod notes;

pub use crate::cli::Cli;

/// The current version of relnotes.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
