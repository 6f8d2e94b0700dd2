//! Release-notes pipeline: normalize, classify, render.
//!
//! The pipeline is a single pass over the input: each non-blank line is
//! normalized, classified into a feature category, and appended to that
//! category's bucket. Rendering walks the categories in their fixed priority
//! order and emits one Markdown section per non-empty bucket.

pub mod classify;
pub mod normalize;
pub mod render;

pub use classify::{classify, Category};
pub use normalize::normalize;
pub use render::{render, Buckets};

/// Generates the full Markdown release-notes report for the given input.
///
/// `input` is newline-delimited commit subjects; blank lines are discarded.
/// `range_label` is the display label for the commit range.
pub fn generate_report(input: &str, range_label: &str) -> String {
    let mut buckets = Buckets::new();

    for line in input.lines() {
        let subject = line.trim();
        if subject.is_empty() {
            continue;
        }

        let category = classify(subject);
        buckets.push(category, normalize(subject));
    }

    render(&buckets, range_label)
}
