// Tag lexicon: word to grammatical-category entries for the tagger.
//
// Entry files hold one word per content line followed by its category
// abbreviation, separated by ASCII spaces or tabs. The lexicon expands
// abbreviations through the built-in table, detects duplicate words, and
// writes `word;category` rows to a `.tag` destination.

use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use hashbrown::HashMap;

use crate::LexError;
use crate::abbrev::AbbrevTable;

/// One lexicon entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    /// Grammatical category, abbreviation expanded where recognized.
    pub category: String,
}

/// Splits an entry line into word and category abbreviation.
///
/// The word is the first whitespace-delimited token, the category the
/// second; anything after the category is ignored. Returns `None` when the
/// line has fewer than two tokens.
pub fn parse_entry(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split_ascii_whitespace();
    let word = parts.next()?;
    let category = parts.next()?;
    Some((word, category))
}

/// Destination files for tag lexicons must carry the `.tag` extension.
pub fn check_tag_extension(path: &Path) -> Result<(), LexError> {
    if path.extension().and_then(|e| e.to_str()) == Some("tag") {
        Ok(())
    } else {
        Err(LexError::OutputExtension(path.display().to_string()))
    }
}

// ---------------------------------------------------------------------------
// TagLexicon
// ---------------------------------------------------------------------------

/// In-memory tag lexicon with duplicate detection.
#[derive(Debug, Clone)]
pub struct TagLexicon {
    abbrevs: AbbrevTable,
    words: HashMap<String, TagEntry>,
}

impl TagLexicon {
    pub fn new() -> Self {
        Self {
            abbrevs: AbbrevTable::builtin(),
            words: HashMap::new(),
        }
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, word: &str) -> Option<&TagEntry> {
        self.words.get(word)
    }

    /// Inserts an entry, expanding the category abbreviation; unknown
    /// abbreviations are stored verbatim. Returns the previous entry when
    /// the word was already present (last entry wins).
    pub fn insert(&mut self, word: &str, category: &str) -> Option<TagEntry> {
        let category = self.abbrevs.expand_category(category).unwrap_or(category);
        self.words.insert(
            word.to_string(),
            TagEntry {
                category: category.to_string(),
            },
        )
    }

    /// Ingests an entry stream; blank lines, `#` comments and lines without
    /// a category are skipped. Returns the words that appeared more than
    /// once, in input order.
    pub fn ingest_reader<R: BufRead>(&mut self, reader: R) -> io::Result<Vec<String>> {
        let mut duplicates = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((word, category)) = parse_entry(line) else {
                continue;
            };
            if self.insert(word, category).is_some() {
                duplicates.push(word.to_string());
            }
        }
        Ok(duplicates)
    }

    /// Ingests one entry file; I/O failures carry the offending path.
    pub fn ingest_file(&mut self, path: &Path) -> Result<Vec<String>, LexError> {
        let file = std::fs::File::open(path).map_err(|e| LexError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        self.ingest_reader(BufReader::new(file))
            .map_err(|e| LexError::Io {
                path: path.display().to_string(),
                source: e,
            })
    }

    /// Writes `word;category` rows sorted by word.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut words: Vec<(&String, &TagEntry)> = self.words.iter().collect();
        words.sort_by_key(|&(word, _)| word);
        for (word, entry) in words {
            writeln!(out, "{};{}", word, entry.category)?;
        }
        Ok(())
    }
}

impl Default for TagLexicon {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Entry parsing -------------------------------------------------------

    #[test]
    fn entry_splits_word_and_category() {
        assert_eq!(parse_entry("રામ પું૦"), Some(("રામ", "પું૦")));
        assert_eq!(parse_entry("રામ\tપું૦"), Some(("રામ", "પું૦")));
        assert_eq!(parse_entry("રામ   પું૦"), Some(("રામ", "પું૦")));
    }

    #[test]
    fn entry_without_category_is_none() {
        assert_eq!(parse_entry("રામ"), None);
        assert_eq!(parse_entry(""), None);
    }

    #[test]
    fn trailing_tokens_are_ignored() {
        assert_eq!(parse_entry("રામ પું૦ સર૦ મહેતા"), Some(("રામ", "પું૦")));
    }

    // -- Lexicon -------------------------------------------------------------

    #[test]
    fn insert_expands_known_abbreviations() {
        let mut lexicon = TagLexicon::new();
        assert!(lexicon.insert("રામ", "પું૦").is_none());
        assert_eq!(lexicon.get("રામ").unwrap().category, "પુંલિંગ");
    }

    #[test]
    fn insert_keeps_unknown_categories_verbatim() {
        let mut lexicon = TagLexicon::new();
        lexicon.insert("રામ", "ક૦");
        assert_eq!(lexicon.get("રામ").unwrap().category, "ક૦");
    }

    #[test]
    fn duplicate_insert_reports_previous_entry() {
        let mut lexicon = TagLexicon::new();
        assert!(lexicon.insert("રામ", "પું૦").is_none());
        let previous = lexicon.insert("રામ", "વિ૦").unwrap();
        assert_eq!(previous.category, "પુંલિંગ");
        // Last entry wins.
        assert_eq!(lexicon.get("રામ").unwrap().category, "વિશેષણ");
        assert_eq!(lexicon.len(), 1);
    }

    #[test]
    fn ingest_skips_comments_and_collects_duplicates() {
        let input = "# lexicon\n\nરામ પું૦\nસીતા સ્ત્રી૦\nરામ વિ૦\nસીતા\n";
        let mut lexicon = TagLexicon::new();
        let duplicates = lexicon.ingest_reader(input.as_bytes()).unwrap();
        assert_eq!(duplicates, vec!["રામ"]);
        assert_eq!(lexicon.len(), 2);
        // The entry with no category was skipped, not treated as a duplicate.
        assert_eq!(lexicon.get("સીતા").unwrap().category, "સ્ત્રીલિંગ");
    }

    #[test]
    fn write_to_sorts_by_word() {
        let mut lexicon = TagLexicon::new();
        lexicon.insert("સીતા", "સ્ત્રી૦");
        lexicon.insert("રામ", "પું૦");
        let mut out = Vec::new();
        lexicon.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "રામ;પુંલિંગ\nસીતા;સ્ત્રીલિંગ\n");
    }

    // -- Output convention ---------------------------------------------------

    #[test]
    fn tag_extension_is_enforced() {
        assert!(check_tag_extension(Path::new("words.tag")).is_ok());
        assert!(check_tag_extension(Path::new("dir/words.tag")).is_ok());
        assert!(check_tag_extension(Path::new("words.txt")).is_err());
        assert!(check_tag_extension(Path::new("words")).is_err());
    }

    #[test]
    fn missing_entry_file_reports_path() {
        let mut lexicon = TagLexicon::new();
        let err = lexicon.ingest_file(Path::new("/no/such/entries")).unwrap_err();
        assert!(err.to_string().contains("/no/such/entries"));
    }
}
