//! Markdown report rendering.

use super::classify::Category;

/// Fallback bullet used when no subjects were supplied at all.
const NO_CHANGES_BULLET: &str = "No user-facing changes recorded in this tag range.";

/// Normalized subjects accumulated per category.
///
/// Insertion order within a category is preserved; iteration across
/// categories follows the fixed [`Category::ALL`] priority order.
#[derive(Debug, Default)]
pub struct Buckets {
    entries: [Vec<String>; 8],
}

impl Buckets {
    /// Creates an empty set of buckets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a normalized subject to the given category's bucket.
    pub fn push(&mut self, category: Category, subject: String) {
        self.entries[Self::index(category)].push(subject);
    }

    /// Returns the subjects collected for a category, in input order.
    pub fn get(&self, category: Category) -> &[String] {
        &self.entries[Self::index(category)]
    }

    /// Total number of subjects across all categories.
    pub fn len(&self) -> usize {
        self.entries.iter().map(Vec::len).sum()
    }

    /// True when no subjects have been collected.
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Vec::is_empty)
    }

    fn index(category: Category) -> usize {
        Category::ALL
            .iter()
            .position(|c| *c == category)
            .unwrap_or(Category::ALL.len() - 1)
    }
}

/// Renders the grouped Markdown release-notes report.
///
/// The report always opens with the `## Release notes` banner and the range
/// label line. With no subjects at all, a single fixed Maintenance section is
/// emitted; otherwise one section per non-empty category, in priority order.
/// Trailing whitespace is trimmed from the result.
pub fn render(buckets: &Buckets, range_label: &str) -> String {
    let mut out = String::new();

    out.push_str("## Release notes\n\n");
    out.push_str(&format!("Range: {range_label}\n\n"));

    if buckets.is_empty() {
        tracing::debug!("no subjects collected, emitting fallback section");
        out.push_str("### Feature: Maintenance\n");
        out.push_str(&format!("- {NO_CHANGES_BULLET}\n"));
        return out.trim_end().to_string();
    }

    for category in Category::ALL {
        let count = buckets.get(category).len();
        if count == 0 {
            continue;
        }

        tracing::debug!(category = category.name(), count, "rendering section");
        out.push_str(&format!("### Feature: {}\n", category.name()));
        out.push_str(&format!(
            "- {} ({} {} in this release range.)\n\n",
            category.summary(),
            count,
            pluralize_commit(count)
        ));
    }

    out.trim_end().to_string()
}

/// Singular at exactly one commit, plural otherwise.
fn pluralize_commit(count: usize) -> &'static str {
    if count == 1 {
        "commit"
    } else {
        "commits"
    }
}
