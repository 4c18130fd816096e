// Character index
// Forward (character → entry) and reverse (combination key → characters) maps

use crate::types::CharacterEntry;
use std::collections::BTreeMap;

/// Canonical, order-independent key for a component multiset: the
/// glyphs sorted by codepoint and joined with commas. Two characters
/// with the same components in different decomposition order collide
/// into the same bucket.
///
/// # Example
/// ```
/// # use hanzi_radicals::index::combination_key;
/// assert_eq!(combination_key(&['子', '女']), combination_key(&['女', '子']));
/// ```
pub fn combination_key(components: &[char]) -> String {
    let mut sorted = components.to_vec();
    sorted.sort_unstable();
    let mut key = String::with_capacity(sorted.len() * 4);
    for (i, glyph) in sorted.iter().enumerate() {
        if i > 0 {
            key.push(',');
        }
        key.push(*glyph);
    }
    key
}

/// Accumulating index over accepted character entries.
///
/// Both maps are ordered so that emission is byte-identical across
/// runs. Buckets in the reverse index keep insertion order; entries
/// are never removed.
#[derive(Debug, Clone, Default)]
pub struct CharacterIndex {
    by_character: BTreeMap<char, CharacterEntry>,
    by_combination: BTreeMap<String, Vec<char>>,
}

impl CharacterIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an accepted entry into both maps.
    ///
    /// Returns false without touching either map when the character is
    /// already indexed: the first record for a character wins, so the
    /// result does not depend on how upstream corpora were merged.
    pub fn insert(&mut self, entry: CharacterEntry) -> bool {
        if self.by_character.contains_key(&entry.character) {
            return false;
        }
        let key = combination_key(&entry.components);
        self.by_combination
            .entry(key)
            .or_default()
            .push(entry.character);
        self.by_character.insert(entry.character, entry);
        true
    }

    /// Entry for a character, if accepted
    pub fn entry(&self, character: char) -> Option<&CharacterEntry> {
        self.by_character.get(&character)
    }

    /// Characters sharing exactly this component multiset, in
    /// insertion order
    pub fn bucket(&self, key: &str) -> Option<&[char]> {
        self.by_combination.get(key).map(|chars| chars.as_slice())
    }

    /// Number of indexed characters
    pub fn len(&self) -> usize {
        self.by_character.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_character.is_empty()
    }

    /// All entries in character order
    pub fn entries(&self) -> impl Iterator<Item = &CharacterEntry> {
        self.by_character.values()
    }

    /// Consume the index into its two maps
    pub fn into_maps(self) -> (BTreeMap<char, CharacterEntry>, BTreeMap<String, Vec<char>>) {
        (self.by_character, self.by_combination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(character: char, components: &[char]) -> CharacterEntry {
        CharacterEntry {
            character,
            components: components.to_vec(),
            component_count: components.len(),
            complexity: 0,
        }
    }

    #[test]
    fn test_combination_key_sorts_by_codepoint() {
        // 女 U+5973 < 子 U+5B50
        assert_eq!(combination_key(&['子', '女']), "女,子");
        assert_eq!(combination_key(&['女', '子']), "女,子");
    }

    #[test]
    fn test_combination_key_keeps_duplicates() {
        assert_eq!(combination_key(&['木', '木']), "木,木");
    }

    #[test]
    fn test_combination_key_single_and_empty() {
        assert_eq!(combination_key(&['木']), "木");
        assert_eq!(combination_key(&[]), "");
    }

    #[test]
    fn test_insert_populates_both_maps() {
        let mut index = CharacterIndex::new();
        assert!(index.insert(entry('好', &['女', '子'])));

        assert_eq!(index.len(), 1);
        assert_eq!(index.entry('好').unwrap().components, vec!['女', '子']);
        assert_eq!(index.bucket("女,子"), Some(&['好'][..]));
    }

    #[test]
    fn test_same_multiset_shares_bucket() {
        let mut index = CharacterIndex::new();
        index.insert(entry('杏', &['木', '口']));
        index.insert(entry('呆', &['口', '木']));

        let bucket = index.bucket(&combination_key(&['木', '口'])).unwrap();
        assert_eq!(bucket, &['杏', '呆']);
    }

    #[test]
    fn test_first_record_wins() {
        let mut index = CharacterIndex::new();
        assert!(index.insert(entry('好', &['女', '子'])));
        assert!(!index.insert(entry('好', &['女', '女'])));

        // the original entry and bucket are untouched
        assert_eq!(index.entry('好').unwrap().components, vec!['女', '子']);
        assert!(index.bucket("女,女").is_none());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_bucket_preserves_insertion_order() {
        let mut index = CharacterIndex::new();
        index.insert(entry('呆', &['口', '木']));
        index.insert(entry('杏', &['木', '口']));
        index.insert(entry('困', &['囗', '木']));

        assert_eq!(index.bucket("口,木"), Some(&['呆', '杏'][..]));
        assert_eq!(index.bucket("囗,木"), Some(&['困'][..]));
    }

    #[test]
    fn test_entries_iterate_in_character_order() {
        let mut index = CharacterIndex::new();
        index.insert(entry('杏', &['木', '口']));
        index.insert(entry('呆', &['口', '木']));

        let chars: Vec<char> = index.entries().map(|e| e.character).collect();
        // 呆 U+5446 < 杏 U+674F
        assert_eq!(chars, vec!['呆', '杏']);
    }
}
