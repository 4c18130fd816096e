// Decomposition scanner
// Walks a raw IDS string, skips structural noise, normalizes glyphs

use crate::catalog::Catalog;
use crate::types::Decomposition;

/// Annotation letters and brackets that appear in IDS corpus entries
/// (source tags like `[GTK]`) and carry no component identity.
const ANNOTATION_CHARS: &[char] = &['[', ']', 'G', 'T', 'K', 'J', 'V', 'A', 'X', 'O'];

/// True for glyphs that are discarded during scanning: the 16 IDS
/// layout operators (U+2FF0..=U+2FFF), the circled-number placeholders
/// for unencoded components (U+2460..=U+2473), and the bracket and
/// source-tag letters.
#[inline]
pub fn is_structural_marker(glyph: char) -> bool {
    matches!(glyph, '\u{2FF0}'..='\u{2FFF}' | '\u{2460}'..='\u{2473}')
        || ANNOTATION_CHARS.contains(&glyph)
}

/// Scanner over raw IDS decomposition strings.
///
/// Borrows the catalog; one scanner serves the whole run.
pub struct Scanner<'a> {
    catalog: &'a Catalog,
}

impl<'a> Scanner<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Scan one raw decomposition string.
    ///
    /// Structural markers are dropped silently. Every other glyph goes
    /// through the normalizer: recognized glyphs append their unit's
    /// canonical glyph (in order of appearance, duplicates kept),
    /// unrecognized glyphs clear the `fully_recognized` flag but do
    /// not stop the scan; partial component lists are still computed
    /// for characters that will be rejected.
    ///
    /// An empty string scans to an empty list with the flag vacuously
    /// true; the two-component acceptance test rejects it later.
    ///
    /// # Example
    /// ```
    /// # use hanzi_radicals::{Catalog, Scanner};
    /// let catalog = Catalog::new().unwrap();
    /// let scanner = Scanner::new(&catalog);
    /// let result = scanner.scan("⿰女子");
    /// assert_eq!(result.components, vec!['女', '子']);
    /// assert!(result.fully_recognized);
    /// ```
    pub fn scan(&self, raw: &str) -> Decomposition {
        let mut components = Vec::new();
        let mut fully_recognized = true;

        for glyph in raw.chars() {
            if is_structural_marker(glyph) {
                continue;
            }
            match self.catalog.normalize(glyph) {
                Some(unit) => components.push(unit.glyph),
                None => fully_recognized = false,
            }
        }

        Decomposition {
            components,
            fully_recognized,
        }
    }
}
