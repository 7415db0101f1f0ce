// Major Mnemonic Phoneme Table
// Bidirectional digit <-> consonant-spelling mapping and the filler letters

use crate::types::{Digit, FillerConfig, PhonemeTableError};
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

/// Standard digit → spellings table
pub const STANDARD_SPELLINGS: [(u8, &[&str]); 10] = [
    (0, &["s", "z"]),
    (1, &["t", "d"]),
    (2, &["n"]),
    (3, &["m"]),
    (4, &["r"]),
    (5, &["l"]),
    (6, &["sj", "skj", "tj", "kj"]),
    (7, &["k", "g"]),
    (8, &["f", "v"]),
    (9, &["p", "b"]),
];

/// Letters that are always skippable
const BASE_FILLERS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y', 'æ', 'ø', 'å', 'h', 'j'];

/// Letters that are skippable only when `include_wc` is set
const EXTENDED_FILLERS: &[char] = &['w', 'c'];

static STANDARD_TABLE: Lazy<PhonemeTable> = Lazy::new(|| {
    PhonemeTable::from_entries(&STANDARD_SPELLINGS)
        .unwrap_or_else(|e| panic!("standard phoneme table is inconsistent: {}", e))
});

/// Bidirectional mapping between digits and their consonant spellings
#[derive(Debug, Clone)]
pub struct PhonemeTable {
    /// Spellings per digit, in declaration order
    by_digit: [Vec<String>; 10],

    /// Inverted map: spelling → digit
    by_spelling: FxHashMap<String, Digit>,

    /// Every spelling, longest first
    longest_first: Vec<(Vec<char>, Digit)>,
}

impl PhonemeTable {
    /// Build a table from (digit, spellings) entries.
    ///
    /// Fails if a spelling is listed under two different digits, since the
    /// word → digit direction would then be ambiguous.
    pub fn from_entries(entries: &[(u8, &[&str])]) -> Result<Self, PhonemeTableError> {
        let mut by_digit: [Vec<String>; 10] = Default::default();
        let mut by_spelling: FxHashMap<String, Digit> = FxHashMap::default();
        let mut ordered: Vec<(Vec<char>, Digit)> = Vec::new();

        for &(value, spellings) in entries {
            let digit =
                Digit::new(value).map_err(|_| PhonemeTableError::InvalidDigit { value })?;

            for &spelling in spellings {
                let spelling = spelling.to_lowercase();
                if spelling.is_empty() {
                    return Err(PhonemeTableError::EmptySpelling { digit });
                }

                match by_spelling.get(&spelling) {
                    Some(&first) if first != digit => {
                        return Err(PhonemeTableError::AmbiguousSpelling {
                            spelling,
                            first,
                            second: digit,
                        });
                    }
                    Some(_) => continue,
                    None => {}
                }

                by_spelling.insert(spelling.clone(), digit);
                ordered.push((spelling.chars().collect(), digit));
                by_digit[digit.index()].push(spelling);
            }
        }

        // Stable sort keeps digit/declaration order among equal lengths
        ordered.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        Ok(Self {
            by_digit,
            by_spelling,
            longest_first: ordered,
        })
    }

    /// The process-wide standard table
    pub fn standard() -> &'static PhonemeTable {
        &STANDARD_TABLE
    }

    /// Spellings that realize `digit`
    pub fn phonemes_for(&self, digit: Digit) -> &[String] {
        &self.by_digit[digit.index()]
    }

    /// Digit realized by `spelling`, if any
    pub fn digit_for(&self, spelling: &str) -> Option<Digit> {
        self.by_spelling.get(spelling).copied()
    }

    /// All spellings with their digits, longest first
    pub fn spellings_longest_first(&self) -> impl Iterator<Item = (&[char], Digit)> {
        self.longest_first.iter().map(|(s, d)| (s.as_slice(), *d))
    }

    /// Longest spelling that starts at `pos`, with its length in chars
    pub fn longest_match_at(&self, chars: &[char], pos: usize) -> Option<(usize, Digit)> {
        let rest = &chars[pos..];
        self.longest_first
            .iter()
            .find(|(spelling, _)| rest.starts_with(spelling))
            .map(|(spelling, digit)| (spelling.len(), *digit))
    }

    /// Total number of spellings
    pub fn len(&self) -> usize {
        self.longest_first.len()
    }

    pub fn is_empty(&self) -> bool {
        self.longest_first.is_empty()
    }
}

impl Default for PhonemeTable {
    fn default() -> Self {
        Self::standard().clone()
    }
}

/// Letters that may be skipped around and between consonants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FillerSet {
    config: FillerConfig,
}

impl FillerSet {
    pub fn new(config: FillerConfig) -> Self {
        Self { config }
    }

    /// Check a lower-cased character
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        BASE_FILLERS.contains(&ch) || (self.config.include_wc && EXTENDED_FILLERS.contains(&ch))
    }

    /// Length of the filler run starting at `pos`
    #[inline]
    pub fn run_length(&self, chars: &[char], pos: usize) -> usize {
        chars[pos..].iter().take_while(|&&c| self.contains(c)).count()
    }

    pub fn config(&self) -> FillerConfig {
        self.config
    }

    /// All letters in the set, for display
    pub fn letters(&self) -> String {
        let mut letters: String = BASE_FILLERS.iter().collect();
        if self.config.include_wc {
            letters.extend(EXTENDED_FILLERS.iter());
        }
        letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(v: u8) -> Digit {
        Digit::new(v).unwrap()
    }

    #[test]
    fn test_standard_lookup() {
        let table = PhonemeTable::standard();
        assert_eq!(table.digit_for("skj"), Some(d(6)));
        assert_eq!(table.digit_for("s"), Some(d(0)));
        assert_eq!(table.digit_for("b"), Some(d(9)));
        assert_eq!(table.digit_for("x"), None);
        assert_eq!(table.phonemes_for(d(7)), &["k", "g"]);
        assert_eq!(table.len(), 18);
    }

    #[test]
    fn test_longest_first_order() {
        let table = PhonemeTable::standard();
        let order: Vec<String> = table
            .spellings_longest_first()
            .map(|(s, _)| s.iter().collect())
            .collect();
        assert_eq!(order[0], "skj");
        assert_eq!(&order[1..4], &["sj", "tj", "kj"]);
        assert_eq!(order[4], "s");

        let lengths: Vec<usize> = table.spellings_longest_first().map(|(s, _)| s.len()).collect();
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_longest_match_prefers_skj() {
        let table = PhonemeTable::standard();
        let chars: Vec<char> = "skje".chars().collect();
        assert_eq!(table.longest_match_at(&chars, 0), Some((3, d(6))));
        assert_eq!(table.longest_match_at(&chars, 3), None);
    }

    #[test]
    fn test_ambiguous_table_rejected() {
        let entries: [(u8, &[&str]); 2] = [(1, &["t", "d"]), (2, &["n", "d"])];
        let err = PhonemeTable::from_entries(&entries).unwrap_err();
        assert_eq!(
            err,
            PhonemeTableError::AmbiguousSpelling {
                spelling: "d".to_string(),
                first: d(1),
                second: d(2),
            }
        );
    }

    #[test]
    fn test_empty_spelling_rejected() {
        let entries: [(u8, &[&str]); 1] = [(3, &["m", ""])];
        assert!(matches!(
            PhonemeTable::from_entries(&entries),
            Err(PhonemeTableError::EmptySpelling { .. })
        ));
    }

    #[test]
    fn test_filler_sets() {
        let basic = FillerSet::new(FillerConfig::BASIC);
        let extended = FillerSet::new(FillerConfig::EXTENDED);

        for ch in "aeiouyæøåhj".chars() {
            assert!(basic.contains(ch));
            assert!(extended.contains(ch));
        }
        assert!(!basic.contains('w'));
        assert!(!basic.contains('c'));
        assert!(extended.contains('w'));
        assert!(extended.contains('c'));
        assert!(!extended.contains('k'));
    }

    #[test]
    fn test_filler_run_length() {
        let fillers = FillerSet::new(FillerConfig::BASIC);
        let chars: Vec<char> = "aeho".chars().collect();
        assert_eq!(fillers.run_length(&chars, 0), 4);
        let chars: Vec<char> = "oik".chars().collect();
        assert_eq!(fillers.run_length(&chars, 0), 2);
        assert_eq!(fillers.run_length(&chars, 3), 0);
    }
}
