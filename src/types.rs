// Core type definitions
// Identity units, scan results, acceptance verdicts, and error types

use serde::Serialize;
use thiserror::Error;

/// Whether an identity unit is one of the 214 Kangxi radicals or a
/// common non-radical component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Radical,
    Component,
}

impl std::fmt::Display for UnitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitKind::Radical => write!(f, "radical"),
            UnitKind::Component => write!(f, "component"),
        }
    }
}

/// A canonical structural building block: a Kangxi radical or a common
/// component.
///
/// Units are created once at catalog initialization and never mutated.
/// The `glyph` field is the unit's identity: every recognized form of
/// the unit normalizes to this glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityUnit {
    /// Canonical CJK glyph (e.g., '女')
    pub glyph: char,

    /// Kangxi radical codepoint form (e.g., '⼥'), radicals only
    pub kangxi: Option<char>,

    /// Radical number 1..=214, radicals only
    pub number: Option<u16>,

    /// Stroke count of the canonical form
    pub strokes: u32,

    /// Semantic label (e.g., "woman")
    pub meaning: &'static str,

    /// Radical or component
    pub kind: UnitKind,
}

/// Result of scanning one raw IDS decomposition string.
///
/// `components` holds the canonical glyph of every recognized unit in
/// order of appearance, duplicates kept. `fully_recognized` is false if
/// any non-marker glyph failed normalization; an empty input scans to
/// an empty list with the flag vacuously true.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Decomposition {
    /// Canonical component glyphs in order of appearance
    pub components: Vec<char>,

    /// True iff every non-marker glyph normalized to a unit
    pub fully_recognized: bool,
}

/// Outcome of the acceptance filter for one decomposition record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Record enters the database
    Accepted,

    /// The character is itself a cataloged radical or component
    SelfUnit,

    /// At least one glyph in the decomposition was not recognized
    NotFullyRecognized,

    /// Fewer than two recognized components
    TooFewComponents,

    /// Codepoint outside the reliably-rendering CJK ranges
    OutOfRange,

    /// Character already indexed; first record wins
    Duplicate,
}

impl Verdict {
    /// True for [`Verdict::Accepted`] only
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "accepted"),
            Verdict::SelfUnit => write!(f, "self-unit"),
            Verdict::NotFullyRecognized => write!(f, "not fully recognized"),
            Verdict::TooFewComponents => write!(f, "too few components"),
            Verdict::OutOfRange => write!(f, "out of range"),
            Verdict::Duplicate => write!(f, "duplicate"),
        }
    }
}

/// An accepted character with its component list and complexity score.
///
/// Serializes to the shape consumed by the game:
/// `{"radicals": [...], "radical_count": n, "complexity": n}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterEntry {
    /// The character itself (carried as the map key on serialization)
    #[serde(skip)]
    pub character: char,

    /// Canonical component glyphs in decomposition order
    #[serde(rename = "radicals")]
    pub components: Vec<char>,

    /// Number of components, duplicates counted
    #[serde(rename = "radical_count")]
    pub component_count: usize,

    /// Sum of component stroke counts
    pub complexity: u32,
}

/// Catalog consistency errors, fatal at startup
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("variant '{variant}' maps to '{target}', which is not a cataloged unit")]
    VariantTargetUnknown { variant: char, target: char },

    #[error("visual alias glyph '{glyph}' does not resolve to a cataloged unit")]
    AliasNotRecognized { glyph: char },

    #[error("alias pair '{semantic}' / '{visual}' resolve to different units")]
    AliasMismatch { semantic: char, visual: char },

    #[error("radical form '{glyph}' is claimed by two radicals")]
    DuplicateRadicalForm { glyph: char },
}

/// Counters for one database build. Diagnostic only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Records handed to the builder
    pub processed: u64,

    /// Records that entered the database
    pub accepted: u64,

    /// Accepted records dropped because the character was already indexed
    pub duplicates: u64,

    /// Rejections, by first failing condition
    pub rejected_self_unit: u64,
    pub rejected_unrecognized: u64,
    pub rejected_too_few: u64,
    pub rejected_out_of_range: u64,
}

impl BuildStats {
    /// Total rejected records (duplicates not included)
    pub fn rejected(&self) -> u64 {
        self.rejected_self_unit
            + self.rejected_unrecognized
            + self.rejected_too_few
            + self.rejected_out_of_range
    }
}

impl std::fmt::Display for BuildStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} processed, {} accepted, {} rejected ({} self-unit, {} unrecognized, {} too few, {} out of range), {} duplicates",
            self.processed,
            self.accepted,
            self.rejected(),
            self.rejected_self_unit,
            self.rejected_unrecognized,
            self.rejected_too_few,
            self.rejected_out_of_range,
            self.duplicates,
        )
    }
}
