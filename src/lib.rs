//! # hanzi-radicals: IDS Radical Database Builder
//!
//! Converts a raw IDS (Ideographic Description Sequence) corpus into a
//! queryable database for a character puzzle game: which characters
//! are built from which recognized radicals and components, how
//! complex each character is, and which characters share a given
//! component set.
//!
//! ## Pipeline
//!
//! 1. **Catalog**: immutable reference tables: the 214 Kangxi
//!    radicals, common components, variant forms, visual aliases.
//!    Built once, validated at startup.
//! 2. **Scanner**: walks a raw decomposition string, discards layout
//!    operators and placeholders, normalizes every remaining glyph.
//! 3. **Filter**: accepts a character iff it is not itself a unit,
//!    every glyph was recognized, it has 2+ components, and it sits in
//!    a reliably-rendering CJK block.
//! 4. **Scorer**: complexity = sum of component stroke counts.
//! 5. **Index**: character entries plus a reverse index from sorted
//!    component keys to the characters sharing that exact multiset.
//!
//! The whole pass is single-threaded and deterministic: the same
//! corpus always serializes to byte-identical output.
//!
//! ## Example
//!
//! ```
//! use hanzi_radicals::DatabaseBuilder;
//!
//! let mut builder = DatabaseBuilder::new()?;
//! builder.add_record('好', "⿰女子");
//! builder.add_record('汗', "⿰氵干");
//!
//! let db = builder.finish();
//! assert_eq!(db.character('好').unwrap().complexity, 6);
//! assert_eq!(db.characters_with(&['子', '女']), &['好']);
//! # Ok::<(), hanzi_radicals::CatalogError>(())
//! ```

pub mod builder;
pub mod catalog;
pub mod corpus;
pub mod database;
pub mod filter;
pub mod index;
pub mod scanner;
pub mod score;
pub mod types;

// Re-export main types for convenience
pub use builder::DatabaseBuilder;
pub use catalog::Catalog;
pub use corpus::{parse_line, read_records, RawRecord};
pub use database::{AliasEntry, Database, Metadata, Tile};
pub use index::combination_key;
pub use scanner::Scanner;
pub use types::{
    BuildStats, CatalogError, CharacterEntry, Decomposition, IdentityUnit, UnitKind, Verdict,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
