// Database output
// The final queryable structure and its serialization shape

use crate::catalog::Catalog;
use crate::index::{combination_key, CharacterIndex};
use crate::types::{BuildStats, CharacterEntry, IdentityUnit, UnitKind};
use serde::Serialize;
use std::collections::BTreeMap;

/// One presentation tile: a radical or component with its metadata.
/// Radical-only fields are omitted from component tiles on
/// serialization, matching the consumer's expectations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kangxi: Option<char>,

    pub cjk: char,
    pub strokes: u32,
    pub meaning: &'static str,

    #[serde(rename = "type")]
    pub kind: UnitKind,
}

impl Tile {
    fn from_unit(unit: &IdentityUnit) -> Self {
        Self {
            number: unit.number,
            kangxi: unit.kangxi,
            cjk: unit.glyph,
            strokes: unit.strokes,
            meaning: unit.meaning,
            kind: unit.kind,
        }
    }
}

/// How a semantic radical is displayed and which forms match it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasEntry {
    /// The visual form shown on the tile
    pub display: char,

    /// Forms accepted as this radical during play
    pub matches: Vec<char>,
}

/// Summary counts carried in the serialized output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub description: &'static str,
    pub total_radicals: usize,
    pub total_components: usize,
    pub total_tiles: usize,
    pub total_characters: usize,
    pub source: &'static str,
}

/// The complete radical database: catalogs, accepted characters, and
/// the component-combination reverse index.
///
/// Immutable once assembled. Field order matches the serialized
/// layout; both character maps are ordered, so serializing the same
/// corpus twice yields byte-identical output.
#[derive(Debug, Clone, Serialize)]
pub struct Database {
    pub metadata: Metadata,
    pub radicals: Vec<Tile>,
    pub components: Vec<Tile>,
    pub all_tiles: Vec<Tile>,
    pub visual_aliases: BTreeMap<char, AliasEntry>,
    pub characters: BTreeMap<char, CharacterEntry>,
    pub radical_combinations: BTreeMap<String, Vec<char>>,

    #[serde(skip)]
    stats: BuildStats,
}

impl Database {
    /// Assemble the output structure from a finished index.
    pub(crate) fn assemble(catalog: &Catalog, index: CharacterIndex, stats: BuildStats) -> Self {
        let radicals: Vec<Tile> = catalog.radicals().map(Tile::from_unit).collect();
        let components: Vec<Tile> = catalog.components().map(Tile::from_unit).collect();

        let mut all_tiles = Vec::with_capacity(radicals.len() + components.len());
        all_tiles.extend(radicals.iter().cloned());
        all_tiles.extend(components.iter().cloned());

        let visual_aliases: BTreeMap<char, AliasEntry> = catalog
            .visual_aliases()
            .iter()
            .map(|&(semantic, visual)| {
                (
                    semantic,
                    AliasEntry {
                        display: visual,
                        matches: vec![semantic, visual],
                    },
                )
            })
            .collect();

        let (characters, radical_combinations) = index.into_maps();

        let metadata = Metadata {
            description: "Chinese Word Hunt radical database",
            total_radicals: radicals.len(),
            total_components: components.len(),
            total_tiles: all_tiles.len(),
            total_characters: characters.len(),
            source: "CJKVI-IDS (based on CHISE IDS Database)",
        };

        Self {
            metadata,
            radicals,
            components,
            all_tiles,
            visual_aliases,
            characters,
            radical_combinations,
            stats,
        }
    }

    /// Entry for an accepted character
    pub fn character(&self, character: char) -> Option<&CharacterEntry> {
        self.characters.get(&character)
    }

    /// Characters built from exactly this component multiset, in
    /// insertion order. Component order does not matter.
    ///
    /// # Example
    /// ```no_run
    /// # use hanzi_radicals::DatabaseBuilder;
    /// let mut builder = DatabaseBuilder::new().unwrap();
    /// builder.add_record('好', "⿰女子");
    /// let db = builder.finish();
    /// assert_eq!(db.characters_with(&['子', '女']), &['好']);
    /// ```
    pub fn characters_with(&self, components: &[char]) -> &[char] {
        self.radical_combinations
            .get(&combination_key(components))
            .map(|chars| chars.as_slice())
            .unwrap_or(&[])
    }

    /// Number of accepted characters
    pub fn character_count(&self) -> usize {
        self.characters.len()
    }

    /// Build counters for the run that produced this database
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::DatabaseBuilder;

    fn sample_database() -> Database {
        let mut builder = DatabaseBuilder::new().unwrap();
        builder.add_record('好', "⿰女子");
        builder.add_record('林', "⿰木木");
        builder.finish()
    }

    #[test]
    fn test_metadata_counts() {
        let db = sample_database();
        assert_eq!(db.metadata.total_radicals, 214);
        assert_eq!(db.metadata.total_components, db.components.len());
        assert_eq!(
            db.metadata.total_tiles,
            db.radicals.len() + db.components.len()
        );
        assert_eq!(db.metadata.total_characters, 2);
    }

    #[test]
    fn test_all_tiles_order() {
        let db = sample_database();
        assert_eq!(db.all_tiles.len(), db.radicals.len() + db.components.len());
        // radicals first, components after
        assert_eq!(db.all_tiles[0].kind, UnitKind::Radical);
        assert_eq!(db.all_tiles.last().unwrap().kind, UnitKind::Component);
    }

    #[test]
    fn test_radical_tile_serialization() {
        let db = sample_database();
        let woman = db.radicals.iter().find(|t| t.cjk == '女').unwrap();
        let json = serde_json::to_value(woman).unwrap();
        assert_eq!(json["number"], 38);
        assert_eq!(json["kangxi"], "⼥");
        assert_eq!(json["cjk"], "女");
        assert_eq!(json["strokes"], 3);
        assert_eq!(json["meaning"], "woman");
        assert_eq!(json["type"], "radical");
    }

    #[test]
    fn test_component_tile_omits_radical_fields() {
        let db = sample_database();
        let tile = db.components.iter().find(|t| t.cjk == '且').unwrap();
        let json = serde_json::to_value(tile).unwrap();
        assert!(json.get("number").is_none());
        assert!(json.get("kangxi").is_none());
        assert_eq!(json["type"], "component");
    }

    #[test]
    fn test_visual_alias_shape() {
        let db = sample_database();
        let meat = db.visual_aliases.get(&'肉').unwrap();
        assert_eq!(meat.display, '月');
        assert_eq!(meat.matches, vec!['肉', '月']);
    }

    #[test]
    fn test_character_lookup() {
        let db = sample_database();
        let entry = db.character('好').unwrap();
        assert_eq!(entry.components, vec!['女', '子']);
        assert_eq!(entry.component_count, 2);
        assert!(db.character('爩').is_none());
    }

    #[test]
    fn test_characters_with_is_order_independent() {
        let db = sample_database();
        assert_eq!(db.characters_with(&['女', '子']), &['好']);
        assert_eq!(db.characters_with(&['子', '女']), &['好']);
        assert_eq!(db.characters_with(&['木', '木']), &['林']);
        assert!(db.characters_with(&['女', '女']).is_empty());
    }

    #[test]
    fn test_serialized_top_level_shape() {
        let db = sample_database();
        let json = serde_json::to_value(&db).unwrap();
        for field in [
            "metadata",
            "radicals",
            "components",
            "all_tiles",
            "visual_aliases",
            "characters",
            "radical_combinations",
        ] {
            assert!(json.get(field).is_some(), "missing field {}", field);
        }
        assert_eq!(json["characters"]["好"]["radical_count"], 2);
        assert_eq!(
            json["radical_combinations"]["女,子"],
            serde_json::json!(["好"])
        );
    }
}
