// Gujarati code-point classification.

// ---------------------------------------------------------------------------
// Syllable-role categories
// ---------------------------------------------------------------------------

/// Syllable role of a single code point in Gujarati text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AksharCategory {
    /// Not covered by the script tables; acts as a word/akshar separator.
    Other,
    /// Independent vowel.
    Vowel,
    /// Consonant.
    Consonant,
    /// Dependent vowel sign attached to a consonant.
    Matra,
    /// Virama, suppresses the inherent vowel to form consonant clusters.
    Halant,
    /// Chandrabindu, anusvara or visarga.
    Diacritic,
}

// ---------------------------------------------------------------------------
// Classification ranges
// ---------------------------------------------------------------------------

/// Inclusive classification ranges within the Gujarati block (U+0A80..U+0AFF).
///
/// Code points outside every range classify as `Other`.
const CLASS_RANGES: &[(AksharCategory, u32, u32)] = &[
    (AksharCategory::Vowel, 0x0A85, 0x0A94), // અ..ઔ independent vowels
    (AksharCategory::Consonant, 0x0A95, 0x0AB9), // ક..હ
    (AksharCategory::Matra, 0x0ABE, 0x0ACC), // ા..ૌ dependent vowel signs
    (AksharCategory::Halant, 0x0ACD, 0x0ACD), // ્ virama
    (AksharCategory::Diacritic, 0x0A81, 0x0A83), // ઁ ં ઃ
];

/// Returns the syllable-role category of a code point.
///
/// Pure and total: every code point not covered by the fixed ranges maps to
/// [`AksharCategory::Other`].
pub fn classify(c: char) -> AksharCategory {
    let cp = c as u32;
    for &(category, low, high) in CLASS_RANGES {
        if (low..=high).contains(&cp) {
            return category;
        }
    }
    AksharCategory::Other
}
