// Record processing: dictionary source lines to expanded output rows.
//
// Input files are line oriented. A record line holds `;`-separated fields,
// one of which carries the word-variant notation; blank lines and lines
// whose first non-space character is `#` are comments. Every expanded word
// is written as one `word;line` row so downstream tools keep the full
// source record next to each word.

use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::LexError;
use crate::expand::expand;

// ---------------------------------------------------------------------------
// Line primitives
// ---------------------------------------------------------------------------

/// Splits a record line into its `;`-separated fields.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(';').collect()
}

/// Returns false for blank lines and `#` comments.
pub fn is_content_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    !trimmed.is_empty() && !trimmed.starts_with('#')
}

/// Expands the selected field of one line.
///
/// Returns `None` for non-content lines and for lines without enough
/// fields; both are recovered locally, never escalated.
pub fn expand_line(line: &str, field: usize) -> Option<Vec<String>> {
    let line = line.trim();
    if !is_content_line(line) {
        return None;
    }
    let fields = split_fields(line);
    fields.get(field).map(|value| expand(value))
}

// ---------------------------------------------------------------------------
// Stream processing
// ---------------------------------------------------------------------------

/// Counters for one processing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Content lines seen.
    pub lines: usize,
    /// Output rows written.
    pub records: usize,
    /// Content lines skipped because the field index was out of range.
    pub skipped: usize,
}

/// Processes a line stream, writing one `word;line` row per expanded word.
///
/// Lines are trimmed before processing, so CRLF input is accepted.
pub fn process_reader<R: BufRead, W: Write>(
    reader: R,
    field: usize,
    out: &mut W,
) -> io::Result<Stats> {
    let mut stats = Stats::default();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !is_content_line(line) {
            continue;
        }
        stats.lines += 1;
        let fields = split_fields(line);
        let Some(value) = fields.get(field) else {
            stats.skipped += 1;
            continue;
        };
        for word in expand(value) {
            writeln!(out, "{word};{line}")?;
            stats.records += 1;
        }
    }
    Ok(stats)
}

/// Processes one file; I/O failures carry the offending path.
pub fn process_file<W: Write>(
    path: &Path,
    field: usize,
    out: &mut W,
) -> Result<Stats, LexError> {
    let file = std::fs::File::open(path).map_err(|e| LexError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    process_reader(BufReader::new(file), field, out).map_err(|e| LexError::Io {
        path: path.display().to_string(),
        source: e,
    })
}
