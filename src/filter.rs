// Acceptance filter
// Decides whether a scanned character enters the database

use crate::catalog::Catalog;
use crate::types::{Decomposition, Verdict};

/// CJK Unified Ideographs, the common block that renders everywhere
const CJK_UNIFIED: std::ops::RangeInclusive<u32> = 0x4E00..=0x9FFF;

/// CJK Unified Ideographs Extension A, less common but usually renders
const CJK_EXT_A: std::ops::RangeInclusive<u32> = 0x3400..=0x4DBF;

/// True if the character lies in one of the two CJK blocks designated
/// as rendering reliably. Anything outside is rejected regardless of
/// its decomposition.
#[inline]
pub fn in_reliable_range(character: char) -> bool {
    let code = character as u32;
    CJK_UNIFIED.contains(&code) || CJK_EXT_A.contains(&code)
}

/// Apply the acceptance policy to one scanned character.
///
/// A character is accepted iff, in order:
/// (a) it is not itself a cataloged radical or component,
/// (b) its decomposition is fully recognized,
/// (c) it has at least two components,
/// (d) its codepoint is in a reliable CJK range.
///
/// The first failing condition is reported. All conditions are
/// per-character; there is no cross-character state.
pub fn evaluate(catalog: &Catalog, character: char, decomposition: &Decomposition) -> Verdict {
    if catalog.is_unit(character) {
        return Verdict::SelfUnit;
    }
    if !decomposition.fully_recognized {
        return Verdict::NotFullyRecognized;
    }
    if decomposition.components.len() < 2 {
        return Verdict::TooFewComponents;
    }
    if !in_reliable_range(character) {
        return Verdict::OutOfRange;
    }
    Verdict::Accepted
}
