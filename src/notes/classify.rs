//! Keyword-based commit classification.
//!
//! Each category carries a fixed substring list; a subject is assigned to the
//! first category in priority order whose list matches the lower-cased text.
//! The ordering is deliberate: feature categories are tested before the
//! documentation, release, and maintenance catch-alls, so a commit that
//! touches both a feature and its docs lands in the feature section.

/// A release-notes feature category.
///
/// Variant order is the classification priority order and the section order
/// in the rendered report. It must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Character sheet panel: layout, equipment, vault, Mythic+ rating.
    CharacterSheet,
    /// Account-currency transfer flow and taint guards.
    CurrencyTransfer,
    /// Friendly nameplate rendering.
    FriendlyNameplates,
    /// Assisted rotation helper.
    RotationHelper,
    /// Shared UI modules: XP, cast, loot, minimap, game menu, tooltips.
    CoreUiModules,
    /// Documentation-only changes.
    Documentation,
    /// Packaging, tagging, and CI workflow changes.
    ReleasePipeline,
    /// Everything else. Also the fallback when no keyword matches.
    Maintenance,
}

impl Category {
    /// All categories in classification priority order.
    pub const ALL: [Self; 8] = [
        Self::CharacterSheet,
        Self::CurrencyTransfer,
        Self::FriendlyNameplates,
        Self::RotationHelper,
        Self::CoreUiModules,
        Self::Documentation,
        Self::ReleasePipeline,
        Self::Maintenance,
    ];

    /// Display name used in report headings.
    pub fn name(self) -> &'static str {
        match self {
            Self::CharacterSheet => "Character Sheet",
            Self::CurrencyTransfer => "Currency Transfer",
            Self::FriendlyNameplates => "Friendly Nameplates",
            Self::RotationHelper => "Rotation Helper",
            Self::CoreUiModules => "Core UI Modules",
            Self::Documentation => "Documentation",
            Self::ReleasePipeline => "Release Pipeline",
            Self::Maintenance => "Maintenance",
        }
    }

    /// Fixed summary sentence for the category's report bullet.
    pub fn summary(self) -> &'static str {
        match self {
            Self::CharacterSheet => {
                "Refined Character Sheet layout, panel presentation, and interaction polish for smoother day-to-day navigation."
            }
            Self::CurrencyTransfer => {
                "Hardened account-currency transfer behavior to reduce taint risk and keep native Character/Reputation/Currency flows stable."
            }
            Self::FriendlyNameplates => {
                "Improved friendly nameplate reliability and option sync behavior in combat and restricted UI states."
            }
            Self::RotationHelper => {
                "Adjusted Rotation Helper behavior and layering so it stays visible when useful without obstructing core UI."
            }
            Self::CoreUiModules => {
                "Polished core module behavior across XP/Cast/Loot/Minimap/Game Menu and related utility controls."
            }
            Self::Documentation => {
                "Updated player-facing documentation to match the current addon scope, setup path, and feature list."
            }
            Self::ReleasePipeline => {
                "Improved release automation and publishing consistency across tags, artifacts, and store metadata."
            }
            Self::Maintenance => {
                "Applied internal refactors and cleanup work to keep systems stable and easier to evolve."
            }
        }
    }

    /// Substrings that assign a lower-cased subject to this category.
    /// Maintenance has none: it is purely the fallback.
    fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::CharacterSheet => &[
                "charsheet",
                "character sheet",
                "mythic",
                "vault",
                "gear cluster",
                "stat cluster",
                "equipment",
                "title row",
                "title click",
                "pane",
                "portal",
                "spec highlight",
                "layout",
            ],
            Self::CurrencyTransfer => &["currency", "transfer", "taint", "tokenui"],
            Self::FriendlyNameplates => &["friendly", "nameplate", "platynator"],
            Self::RotationHelper => &["rotation helper", "rotation"],
            Self::CoreUiModules => &[
                "xp",
                "cast",
                "loot",
                "summon",
                "minimap",
                "tracked bars",
                "game menu",
                "tooltip",
            ],
            Self::Documentation => &["readme", "docs", "changelog", "agents.md"],
            Self::ReleasePipeline => &[
                "ci:",
                "release",
                "tag",
                "artifact",
                "packager",
                "curseforge",
                "workflow",
            ],
            Self::Maintenance => &[],
        }
    }
}

/// Classifies a commit subject into exactly one category.
///
/// Matching is case-insensitive substring search, evaluated in
/// [`Category::ALL`] order; the first matching category wins. Subjects that
/// match nothing fall through to [`Category::Maintenance`].
pub fn classify(subject: &str) -> Category {
    let subject_lower = subject.to_lowercase();

    for category in Category::ALL {
        if category
            .keywords()
            .iter()
            .any(|keyword| subject_lower.contains(keyword))
        {
            tracing::trace!(subject, category = category.name(), "classified");
            return category;
        }
    }

    tracing::trace!(subject, "no keyword match, defaulting to Maintenance");
    Category::Maintenance
}
