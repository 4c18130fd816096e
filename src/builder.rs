// Database builder
// Orchestrates scan → filter → score → index for a whole corpus

use crate::catalog::Catalog;
use crate::corpus::RawRecord;
use crate::database::Database;
use crate::filter;
use crate::index::CharacterIndex;
use crate::scanner::Scanner;
use crate::score::complexity;
use crate::types::{BuildStats, CatalogError, CharacterEntry, Verdict};

/// Single-pass builder turning decomposition records into a
/// [`Database`].
///
/// The pipeline is a pure function of (catalog, corpus): records are
/// processed one at a time with no cross-record state beyond the
/// accumulating index, and identical input always produces identical
/// output.
pub struct DatabaseBuilder {
    catalog: Catalog,
    index: CharacterIndex,
    stats: BuildStats,
}

impl DatabaseBuilder {
    /// Create a builder over the built-in reference catalogs.
    ///
    /// # Errors
    /// Propagates [`CatalogError`] if the reference tables are
    /// inconsistent; nothing is processed in that case.
    pub fn new() -> Result<Self, CatalogError> {
        Ok(Self::with_catalog(Catalog::new()?))
    }

    /// Create a builder over an already-validated catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            index: CharacterIndex::new(),
            stats: BuildStats::default(),
        }
    }

    /// The catalog this builder resolves glyphs against
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Process one decomposition record.
    ///
    /// Scans the raw IDS string, applies the acceptance policy, and on
    /// acceptance scores the component list and indexes the entry.
    /// Rejection is the expected path for most of a real corpus and
    /// never stops the run.
    ///
    /// A second record for an already-indexed character returns
    /// [`Verdict::Duplicate`] and leaves the first entry in place.
    pub fn add_record(&mut self, character: char, raw_ids: &str) -> Verdict {
        self.stats.processed += 1;

        let decomposition = Scanner::new(&self.catalog).scan(raw_ids);
        let verdict = filter::evaluate(&self.catalog, character, &decomposition);

        match verdict {
            Verdict::Accepted => {
                let entry = CharacterEntry {
                    character,
                    component_count: decomposition.components.len(),
                    complexity: complexity(&self.catalog, &decomposition.components),
                    components: decomposition.components,
                };
                if self.index.insert(entry) {
                    self.stats.accepted += 1;
                    Verdict::Accepted
                } else {
                    self.stats.duplicates += 1;
                    Verdict::Duplicate
                }
            }
            Verdict::SelfUnit => {
                self.stats.rejected_self_unit += 1;
                verdict
            }
            Verdict::NotFullyRecognized => {
                self.stats.rejected_unrecognized += 1;
                verdict
            }
            Verdict::TooFewComponents => {
                self.stats.rejected_too_few += 1;
                verdict
            }
            Verdict::OutOfRange => {
                self.stats.rejected_out_of_range += 1;
                verdict
            }
            // evaluate never returns Duplicate
            Verdict::Duplicate => verdict,
        }
    }

    /// Process a whole corpus of records in order.
    pub fn add_corpus<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = RawRecord>,
    {
        for record in records {
            self.add_record(record.character, &record.ids);
        }
    }

    /// Counters for the records processed so far
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// Number of characters accepted so far
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Finish the run and assemble the output database.
    pub fn finish(self) -> Database {
        Database::assemble(&self.catalog, self.index, self.stats)
    }
}
