// Word-variant expansion.
//
// A field of variant notation names a base word plus its inflection
// variants:
//
//   words = mword {"," mword}
//   mword = token ["(" mods ")"]
//   mods  = mod {"," mod}
//   mod   = ("+" | "-") token
//
// `+` appends the suffix to the whole base word; `-` replaces the final
// akshar of the base word with the suffix. Tokens are delimited by `(`,
// `)`, `,`, space, or end of input.

use gujkosh_core::akshar::last_akshar_start;

/// How a modifier combines its suffix with the base word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    /// Suffix is appended to the full base word.
    Append,
    /// Suffix replaces the final akshar of the base word.
    ReplaceStem,
}

// ---------------------------------------------------------------------------
// Expansion scanner
// ---------------------------------------------------------------------------

/// Single-pass scanner state for one field.
///
/// A token in flight is tracked as a start offset into the decoded field,
/// not a copy; the base word and its stem are materialized once per
/// modifier group.
struct ExpansionScanner<'a> {
    chars: &'a [char],
    /// Start offset of the token being accumulated.
    pending: Option<usize>,
    /// Operator waiting for its modifier token.
    op: Option<Modifier>,
    /// Inside a `( ... )` modifier group.
    in_group: bool,
    /// Base word of the current group.
    base: String,
    /// Base word truncated at its last akshar boundary.
    stem: String,
    out: Vec<String>,
}

impl<'a> ExpansionScanner<'a> {
    fn new(chars: &'a [char]) -> Self {
        Self {
            chars,
            pending: None,
            op: None,
            in_group: false,
            base: String::new(),
            stem: String::new(),
            out: Vec::new(),
        }
    }

    /// `(`: the pending token becomes the base word of a new modifier
    /// group, is emitted immediately, and its stem is remembered for
    /// `-` modifiers. A group with no base word combines against the
    /// empty stem.
    fn open_group(&mut self, at: usize) {
        if let Some(start) = self.pending.take() {
            let word = &self.chars[start..at];
            self.base = word.iter().collect();
            self.stem = match last_akshar_start(word) {
                Some(cut) => word[..cut].iter().collect(),
                None => String::new(),
            };
            self.out.push(self.base.clone());
        } else {
            self.base.clear();
            self.stem.clear();
        }
        self.in_group = true;
        self.op = None;
    }

    /// Finalize the pending token ending at `at`, if any.
    fn flush(&mut self, at: usize) {
        let Some(start) = self.pending.take() else {
            return;
        };
        if start == at {
            // An operator directly before a delimiter left no token behind.
            return;
        }
        let token: String = self.chars[start..at].iter().collect();
        let word = if !self.in_group {
            token
        } else {
            match self.op.take() {
                Some(Modifier::Append) => format!("{}{}", self.base, token),
                Some(Modifier::ReplaceStem) => format!("{}{}", self.stem, token),
                None => token,
            }
        };
        self.out.push(word);
    }

    fn step(&mut self, i: usize, c: char) {
        match c {
            '(' => self.open_group(i),
            ')' => {
                self.flush(i);
                self.in_group = false;
            }
            ',' | ' ' => self.flush(i),
            '+' | '-' => {
                self.op = Some(if c == '+' {
                    Modifier::Append
                } else {
                    Modifier::ReplaceStem
                });
                // An operator in the middle of a token abandons the partial
                // token; accumulation restarts after the sign.
                if self.pending.is_some() {
                    self.pending = Some(i + 1);
                }
            }
            _ => {
                if self.pending.is_none() {
                    self.pending = Some(i);
                }
            }
        }
    }

    /// End of input closes the last token and any unterminated group.
    fn finish(mut self) -> Vec<String> {
        self.flush(self.chars.len());
        self.out
    }
}

/// Expands one field of variant notation into its explicit word list.
///
/// A field without delimiters yields exactly one word equal to the whole
/// field; the empty field yields the empty list. Malformed notation
/// degrades gracefully: unterminated groups are closed at end of input and
/// a group with no base word combines against the empty stem.
pub fn expand(field: &str) -> Vec<String> {
    let chars: Vec<char> = field.chars().collect();
    let mut scanner = ExpansionScanner::new(&chars);
    for (i, &c) in chars.iter().enumerate() {
        scanner.step(i, c);
    }
    scanner.finish()
}
