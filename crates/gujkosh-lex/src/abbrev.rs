// Grammatical-category abbreviation table.
//
// Lexicon entry files mark each word's grammatical category with a compact
// abbreviation in the traditional dictionary style: the Gujarati digit zero
// `૦` (U+0AE6) terminates each abbreviated element. The table below maps
// every abbreviation the source lexicons use to its full category text.

use hashbrown::HashMap;

/// The fixed abbreviation table of the source lexicons.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("અ૦", "અવ્યય"),                       // indeclinable
    ("અ૦ક્રિ૦", "અકર્મક ક્રિયાપદ"),          // intransitive verb
    ("ઉદા૦", "ઉદાહરણ"),                    // example
    ("અે૦વ૦", "અેકવચન"),                   // singular
    ("કૃ૦", "કૃદંત"),                        // participle
    ("ક્રિ૦", "ક્રિયાપદ"),                    // verb
    ("ન૦", "નપુંસક લિંગ"),                   // neuter
    ("ન૦બ૦વ૦", "નપુંસક લિંગ, બહુવચન"),       // neuter plural
    ("પું૦", "પુંલિંગ"),                      // masculine
    ("પું૦બ૦વ૦", "પુંલિંગ, બહુવચન"),          // masculine plural
    ("પ્રા૦વિ૦", "પ્રાણી વિજ્ઞાન"),            // zoology
    ("બ૦વ૦", "બહુવચન"),                    // plural
    ("ભ૦કા૦", "ભવિષ્યકાળ"),                // future tense
    ("ભ૦કૃ૦", "ભવિષ્યકૃદંત"),               // future participle
    ("ભૂ૦કા૦", "ભૂતકાળ"),                   // past tense
    ("ભૂ૦કૃ૦", "ભૂતકૃદંત"),                  // past participle
    ("રવ૦", "રવાનુકારી"),                   // onomatopoeic
    ("ર૦વિ૦", "રસાયણ વિજ્ઞાન"),             // chemistry
    ("વ૦કા૦", "વર્તમાનકાળ"),               // present tense
    ("વ૦કૃ૦", "વર્તમાનકૃદંત"),              // present participle
    ("વ૦વિ૦", "વનસ્પતિ વિજ્ઞાન"),           // botany
    ("વિ૦", "વિશેષણ"),                     // adjective
    ("વિ૦ન૦", "વિશેષણ, નપુંસક લિંગ"),        // adjective, neuter
    ("વિ૦પું૦", "વિશેષણ, પુંલિંગ"),           // adjective, masculine
    ("વિ૦સ્ત્રી૦", "વિશેષણ, સ્ત્રીલિંગ"),       // adjective, feminine
    ("શ૦પ્ર૦", "શબ્દપ્રયોગ"),               // idiom
    ("શ૦વિ૦", "શરીર વિજ્ઞાન"),              // physiology
    ("સ૦", "સર્વનામ"),                     // pronoun
    ("સર૦", "સરખાવો"),                    // compare
    ("સા૦કૃ૦", "સામાન્ય કૃદંત"),             // general participle
    ("સ્ત્રી૦", "સ્ત્રીલિંગ"),                 // feminine
    ("સ્ત્રી૦બ૦વ૦", "સ્ત્રીલિંગ, બહુવચન"),     // feminine plural
];

/// Lookup table from category abbreviation to full category text.
///
/// Built once from the fixed pairs above; read-only afterwards.
#[derive(Debug, Clone)]
pub struct AbbrevTable {
    map: HashMap<&'static str, &'static str>,
}

impl AbbrevTable {
    /// The built-in table of the source lexicons.
    pub fn builtin() -> Self {
        let mut map = HashMap::with_capacity(ABBREVIATIONS.len());
        for &(abbr, full) in ABBREVIATIONS {
            map.insert(abbr, full);
        }
        Self { map }
    }

    /// Full category text for an abbreviation, `None` when unknown.
    pub fn expand_category(&self, abbr: &str) -> Option<&'static str> {
        self.map.get(abbr).copied()
    }

    /// Number of known abbreviations.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for AbbrevTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_complete() {
        let table = AbbrevTable::builtin();
        assert_eq!(table.len(), ABBREVIATIONS.len());
        assert!(!table.is_empty());
    }

    #[test]
    fn common_categories_expand() {
        let table = AbbrevTable::builtin();
        assert_eq!(table.expand_category("વિ૦"), Some("વિશેષણ"));
        assert_eq!(table.expand_category("સ્ત્રી૦"), Some("સ્ત્રીલિંગ"));
        assert_eq!(table.expand_category("અ૦ક્રિ૦"), Some("અકર્મક ક્રિયાપદ"));
    }

    #[test]
    fn compound_abbreviations_expand() {
        let table = AbbrevTable::builtin();
        assert_eq!(
            table.expand_category("ન૦બ૦વ૦"),
            Some("નપુંસક લિંગ, બહુવચન")
        );
        assert_eq!(
            table.expand_category("વિ૦સ્ત્રી૦"),
            Some("વિશેષણ, સ્ત્રીલિંગ")
        );
    }

    #[test]
    fn unknown_abbreviation_is_none() {
        let table = AbbrevTable::builtin();
        assert_eq!(table.expand_category("ક૦"), None);
        assert_eq!(table.expand_category(""), None);
        // The full text is not itself an abbreviation.
        assert_eq!(table.expand_category("વિશેષણ"), None);
    }

    #[test]
    fn no_duplicate_abbreviations_in_the_table() {
        let table = AbbrevTable::builtin();
        // HashMap::insert would silently keep the last duplicate; the
        // length check above plus this recount pins the table down.
        let mut seen: Vec<&str> = ABBREVIATIONS.iter().map(|&(a, _)| a).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), table.len());
    }
}
