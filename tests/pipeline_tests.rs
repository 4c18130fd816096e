// End-to-end pipeline tests: corpus → scan → filter → database

use hanzi_radicals::{
    combination_key, read_records, Catalog, DatabaseBuilder, Scanner, Verdict,
};

fn build_from(records: &[(char, &str)]) -> hanzi_radicals::Database {
    let mut builder = DatabaseBuilder::new().unwrap();
    for &(character, ids) in records {
        builder.add_record(character, ids);
    }
    builder.finish()
}

// ============ Acceptance Scenarios ============

#[test]
fn test_hao_scenario() {
    // 好 = ⿰女子: the operator is discarded, both radicals normalize,
    // and the character is accepted with two components
    let catalog = Catalog::new().unwrap();
    let scanner = Scanner::new(&catalog);

    let result = scanner.scan("⿰女子");
    assert_eq!(result.components, vec!['女', '子']);
    assert!(result.fully_recognized);

    let db = build_from(&[('好', "⿰女子")]);
    let entry = db.character('好').unwrap();
    assert_eq!(entry.components, vec!['女', '子']);
    assert_eq!(entry.component_count, 2);
    assert_eq!(entry.complexity, 6); // 3 + 3 strokes
    assert_eq!(db.characters_with(&['女', '子']), &['好']);
}

#[test]
fn test_unknown_glyph_rejects_character() {
    // one recognized radical plus one glyph absent from every catalog
    let mut builder = DatabaseBuilder::new().unwrap();
    let verdict = builder.add_record('爨', "⿰女爩");
    assert_eq!(verdict, Verdict::NotFullyRecognized);

    let db = builder.finish();
    assert!(db.character('爨').is_none());
    assert_eq!(db.character_count(), 0);
}

#[test]
fn test_variant_and_canonical_share_combination_key() {
    // 氵 inside a decomposition normalizes to the same unit as 水, so
    // the two records collide into one bucket regardless of glyph form
    // and component order
    let db = build_from(&[('汗', "⿰氵干"), ('刊', "⿰干氵")]);

    let key = combination_key(&['水', '干']);
    assert_eq!(key, combination_key(&['干', '水']));
    assert_eq!(db.characters_with(&['干', '水']), &['汗', '刊']);

    assert_eq!(db.character('汗').unwrap().components, vec!['水', '干']);
    assert_eq!(db.character('刊').unwrap().components, vec!['干', '水']);
}

// ============ Invariants ============

#[test]
fn test_accepted_entries_satisfy_cardinality() {
    let db = build_from(&[
        ('好', "⿰女子"),
        ('林', "⿰木木"),
        ('爨', "⿰女爩"), // rejected: unknown glyph
        ('乑', "丿"),    // rejected: one component
    ]);

    assert_eq!(db.character_count(), 2);
    for entry in db.characters.values() {
        assert!(entry.component_count >= 2);
        assert_eq!(entry.component_count, entry.components.len());
    }
}

#[test]
fn test_self_exclusion_invariant() {
    // radicals and components never appear as database keys, even with
    // a plausible decomposition record
    let db = build_from(&[
        ('水', "⿰水一"),
        ('且', "⿱一一"),
        ('氵', "⿰水一"),
        ('好', "⿰女子"),
    ]);

    let catalog = Catalog::new().unwrap();
    assert_eq!(db.character_count(), 1);
    for character in db.characters.keys() {
        assert!(!catalog.is_unit(*character));
    }
}

#[test]
fn test_reverse_index_consistency() {
    let db = build_from(&[
        ('好', "⿰女子"),
        ('杏', "⿱木口"),
        ('呆', "⿱口木"),
        ('林', "⿰木木"),
    ]);

    for entry in db.characters.values() {
        let key = combination_key(&entry.components);
        let bucket = db.radical_combinations.get(&key).unwrap();
        assert!(bucket.contains(&entry.character));

        // every character in the bucket has the same component multiset
        for other in bucket {
            let mut mine = entry.components.clone();
            let mut theirs = db.character(*other).unwrap().components.clone();
            mine.sort_unstable();
            theirs.sort_unstable();
            assert_eq!(mine, theirs);
        }
    }
}

#[test]
fn test_duplicate_records_first_wins() {
    // the corpus may carry two decompositions for one character when
    // sources are merged; the pipeline keeps the first deterministically
    let db = build_from(&[('好', "⿰女子"), ('好', "⿰木木")]);

    assert_eq!(db.character('好').unwrap().components, vec!['女', '子']);
    assert_eq!(db.characters_with(&['女', '子']), &['好']);
    assert!(db.characters_with(&['木', '木']).is_empty());
    assert_eq!(db.stats().duplicates, 1);
}

// ============ Determinism ============

#[test]
fn test_rebuild_yields_byte_identical_output() {
    let records = [
        ('好', "⿰女子"),
        ('林', "⿰木木"),
        ('汗', "⿰氵干"),
        ('杏', "⿱木口"),
        ('呆', "⿱口木"),
        ('爨', "⿰女爩"),
    ];

    let first = serde_json::to_string(&build_from(&records)).unwrap();
    let second = serde_json::to_string(&build_from(&records)).unwrap();
    assert_eq!(first, second);
}

// ============ Corpus to Database ============

#[test]
fn test_full_corpus_workflow() {
    let corpus = "\
# CHISE/CJKVI IDS excerpt
U+597D\t好\t⿰女子
U+6C57\t汗\t⿰氵干
U+6797\t林\t⿰木木
U+6C34\t水\t水
malformed
U+4E51\t乑\t丿
";
    let records = read_records(corpus.as_bytes()).unwrap();
    assert_eq!(records.len(), 5);

    let mut builder = DatabaseBuilder::new().unwrap();
    builder.add_corpus(records);

    let stats = *builder.stats();
    assert_eq!(stats.processed, 5);
    assert_eq!(stats.accepted, 3);
    assert_eq!(stats.rejected_self_unit, 1); // 水
    assert_eq!(stats.rejected_too_few, 1); // 乑

    let db = builder.finish();
    assert_eq!(db.character_count(), 3);
    assert_eq!(db.stats().accepted, 3);

    // 汗 normalized through the water variant
    assert_eq!(db.character('汗').unwrap().components, vec!['水', '干']);
}

#[test]
fn test_empty_decomposition_edge_case() {
    let catalog = Catalog::new().unwrap();
    let scanner = Scanner::new(&catalog);

    let result = scanner.scan("");
    assert!(result.fully_recognized); // vacuously
    assert!(result.components.is_empty());

    let mut builder = DatabaseBuilder::new().unwrap();
    assert_eq!(builder.add_record('好', ""), Verdict::TooFewComponents);
    assert!(builder.finish().character('好').is_none());
}

#[test]
fn test_catalog_shape_reaches_output() {
    let db = build_from(&[]);

    assert_eq!(db.radicals.len(), 214);
    assert!(!db.components.is_empty());
    assert_eq!(db.all_tiles.len(), db.radicals.len() + db.components.len());
    assert_eq!(db.visual_aliases.len(), 12);
    assert_eq!(db.character_count(), 0);
}
