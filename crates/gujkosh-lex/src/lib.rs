//! Lexicon processing for the gujkosh Gujarati dictionary pipeline.
//!
//! Dictionary source files are line oriented: `;`-separated fields, one of
//! which carries a compact word-variant notation. This crate expands that
//! notation into explicit word lists and builds the tag lexicon consumed by
//! the downstream tagger.
//!
//! # Architecture
//!
//! - [`expand`] -- word-variant notation scanner (`base(+suffix,-suffix)`)
//! - [`record`] -- record-line processing into `word;line` output rows
//! - [`abbrev`] -- grammatical-category abbreviation table
//! - [`tags`] -- tag-lexicon building with duplicate detection
//!
//! The `expand` and `tags` Cargo features gate the two subsystems; both are
//! enabled by default.

#[cfg(feature = "tags")]
pub mod abbrev;
#[cfg(feature = "expand")]
pub mod expand;
#[cfg(feature = "expand")]
pub mod record;
#[cfg(feature = "tags")]
pub mod tags;

/// Error type for lexicon file processing.
#[derive(Debug, thiserror::Error)]
pub enum LexError {
    /// An input or output file could not be read or written.
    #[error("{path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// Tag-lexicon destinations must carry the `.tag` extension.
    #[error("output file must have .tag extension: {0}")]
    OutputExtension(String),
}
