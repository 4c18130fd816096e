// Corpus reader
// Line-oriented IDS corpus parsing, upstream of the core pipeline

use std::io::{self, BufRead};

/// One raw decomposition record: tab-separated codepoint identifier,
/// character, and raw IDS string. Transient: consumed once per run, not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// Codepoint field as written in the corpus (e.g., "U+597D");
    /// carried through but ignored by the core logic
    pub codepoint: String,

    /// The character being decomposed
    pub character: char,

    /// The raw IDS decomposition string
    pub ids: String,
}

/// Parse one corpus line.
///
/// Returns `None` for lines that do not carry a record: blank lines,
/// `#` comments, lines with fewer than three tab-separated fields, and
/// lines whose character field is not exactly one char. Malformed
/// lines are skipped, never fatal.
pub fn parse_line(line: &str) -> Option<RawRecord> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut fields = line.split('\t');
    let codepoint = fields.next()?;
    let character_field = fields.next()?;
    let ids = fields.next()?;

    let mut chars = character_field.chars();
    let character = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    Some(RawRecord {
        codepoint: codepoint.to_string(),
        character,
        ids: ids.to_string(),
    })
}

/// Read every record from a corpus stream, skipping non-record lines.
pub fn read_records<R: BufRead>(reader: R) -> io::Result<Vec<RawRecord>> {
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(record) = parse_line(&line) {
            records.push(record);
        }
    }
    Ok(records)
}
