// Major Mnemonic Pattern Matcher
// Decides whether a whole word spells out a digit window

use crate::phonemes::{FillerSet, PhonemeTable};
use crate::types::{DigitWindow, FillerConfig};

/// What may follow a consonant slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gap {
    /// Zero or more fillers before the next consonant
    Optional,
    /// At least one filler: the next digit is the same consonant
    Mandatory,
    /// Last slot: only fillers may remain
    Trailing,
}

/// One digit position of the window
#[derive(Debug, Clone)]
struct Slot {
    spellings: Vec<Vec<char>>,
    gap: Gap,
}

/// Whole-word predicate for one digit window.
///
/// A word matches when, lower-cased, it decomposes as
///
/// ```text
/// [filler*] C1 [sep1] C2 [sep2] ... Cn [filler*]
/// ```
///
/// where each `Ci` is a spelling of digit `i`, optionally doubled verbatim
/// (`"ll"`, `"kk"`, `"sjsj"`), and `sepi` is one-or-more fillers when
/// digits `i` and `i+1` are equal, zero-or-more otherwise.
///
/// # Example
/// ```
/// # use major_mnemonic::{Digit, DigitWindow, FillerConfig, PatternMatcher};
/// let window = DigitWindow::new(&[Digit::new(5)?, Digit::new(3)?])?;
/// let matcher = PatternMatcher::new(&window, FillerConfig::BASIC);
/// assert!(matcher.matches("lam"));
/// assert!(matcher.matches("Ellmo"));
/// assert!(!matcher.matches("lamp"));
/// # Ok::<(), major_mnemonic::InputError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    window: DigitWindow,
    fillers: FillerSet,
    slots: Vec<Slot>,
    /// Fewest non-filler characters any matching word can contain
    min_non_fillers: usize,
}

impl PatternMatcher {
    /// Build a matcher against the standard phoneme table
    pub fn new(window: &DigitWindow, filler: FillerConfig) -> Self {
        Self::with_table(PhonemeTable::standard(), window, filler)
    }

    /// Build a matcher against a custom phoneme table
    pub fn with_table(table: &PhonemeTable, window: &DigitWindow, filler: FillerConfig) -> Self {
        let digits = window.digits();
        let slots = digits
            .iter()
            .enumerate()
            .map(|(i, digit)| {
                let gap = match digits.get(i + 1) {
                    None => Gap::Trailing,
                    Some(next) if next == digit => Gap::Mandatory,
                    Some(_) => Gap::Optional,
                };
                Slot {
                    spellings: table
                        .phonemes_for(*digit)
                        .iter()
                        .map(|s| s.chars().collect())
                        .collect(),
                    gap,
                }
            })
            .collect::<Vec<Slot>>();

        let fillers = FillerSet::new(filler);
        let min_non_fillers = slots
            .iter()
            .map(|slot| {
                slot.spellings
                    .iter()
                    .map(|s| s.iter().filter(|&&c| !fillers.contains(c)).count())
                    .min()
                    .unwrap_or(usize::MAX)
            })
            .fold(0, usize::saturating_add);

        Self {
            window: window.clone(),
            fillers,
            slots,
            min_non_fillers,
        }
    }

    /// The window this matcher was built for
    pub fn window(&self) -> &DigitWindow {
        &self.window
    }

    pub fn filler_config(&self) -> FillerConfig {
        self.fillers.config()
    }

    /// Test a word, case-insensitively
    pub fn matches(&self, word: &str) -> bool {
        // Most words fail this count, so reject them before allocating
        if !self.has_enough_non_fillers(word) {
            return false;
        }

        let chars: Vec<char> = word.chars().flat_map(char::to_lowercase).collect();
        if chars.is_empty() {
            return false;
        }

        let mut failed = FailedStates::new(self.slots.len(), chars.len());
        let lead = self.fillers.run_length(&chars, 0);
        (0..=lead).any(|start| self.match_slot(&chars, 0, start, &mut failed))
    }

    fn has_enough_non_fillers(&self, word: &str) -> bool {
        let mut seen = 0;
        for c in word.chars().flat_map(char::to_lowercase) {
            if seen >= self.min_non_fillers {
                break;
            }
            if !self.fillers.contains(c) {
                seen += 1;
            }
        }
        seen >= self.min_non_fillers
    }

    /// Try to match slot `slot` starting exactly at `pos`
    fn match_slot(&self, chars: &[char], slot: usize, pos: usize, failed: &mut FailedStates) -> bool {
        if failed.contains(slot, pos) {
            return false;
        }

        let Slot { spellings, gap } = &self.slots[slot];
        for spelling in spellings {
            if !chars[pos..].starts_with(spelling) {
                continue;
            }

            let single = pos + spelling.len();
            let doubled = chars[single..]
                .starts_with(spelling)
                .then_some(single + spelling.len());

            for end in std::iter::once(single).chain(doubled) {
                if self.match_gap(chars, slot, *gap, end, failed) {
                    return true;
                }
            }
        }

        failed.insert(slot, pos);
        false
    }

    /// Consume the separator after slot `slot` (ending at `end`) and continue
    fn match_gap(
        &self,
        chars: &[char],
        slot: usize,
        gap: Gap,
        end: usize,
        failed: &mut FailedStates,
    ) -> bool {
        let run = self.fillers.run_length(chars, end);
        match gap {
            Gap::Trailing => end + run == chars.len(),
            Gap::Optional => (0..=run).any(|k| self.match_slot(chars, slot + 1, end + k, failed)),
            Gap::Mandatory => (1..=run).any(|k| self.match_slot(chars, slot + 1, end + k, failed)),
        }
    }
}

impl std::fmt::Display for PatternMatcher {
    /// Regex-style rendering, for logs only
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fillers = format!("[{}]", self.fillers.letters());
        write!(f, "^{}*", fillers)?;
        for (i, slot) in self.slots.iter().enumerate() {
            let alternatives: Vec<String> =
                slot.spellings.iter().map(|s| s.iter().collect()).collect();
            write!(f, "({})\\{}?", alternatives.join("|"), i + 1)?;
            match slot.gap {
                Gap::Mandatory => write!(f, "{}+", fillers)?,
                Gap::Optional | Gap::Trailing => write!(f, "{}*", fillers)?,
            }
        }
        write!(f, "$")
    }
}

/// (slot, position) pairs already known not to lead to a match
struct FailedStates {
    width: usize,
    bits: Vec<bool>,
}

impl FailedStates {
    fn new(slots: usize, len: usize) -> Self {
        let width = len + 1;
        Self {
            width,
            bits: vec![false; slots * width],
        }
    }

    #[inline]
    fn contains(&self, slot: usize, pos: usize) -> bool {
        self.bits[slot * self.width + pos]
    }

    #[inline]
    fn insert(&mut self, slot: usize, pos: usize) {
        self.bits[slot * self.width + pos] = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{digits_from_values, Digit};

    fn matcher(values: &[u8], filler: FillerConfig) -> PatternMatcher {
        let digits = digits_from_values(values).unwrap();
        PatternMatcher::new(&DigitWindow::new(&digits).unwrap(), filler)
    }

    fn basic(values: &[u8]) -> PatternMatcher {
        matcher(values, FillerConfig::BASIC)
    }

    // ============ Single Digit Tests ============

    #[test]
    fn test_every_spelling_matches_its_digit() {
        let table = PhonemeTable::standard();
        for digit in Digit::all() {
            let m = basic(&[digit.value()]);
            for spelling in table.phonemes_for(digit) {
                assert!(m.matches(spelling), "'{}' should match [{}]", spelling, digit);
            }
        }
    }

    #[test]
    fn test_single_digit_with_fillers() {
        let m = basic(&[3]);
        assert!(m.matches("om"));
        assert!(m.matches("mai"));
        assert!(m.matches("ham"));
        assert!(!m.matches("mm m"));
        assert!(!m.matches("mar"));
    }

    #[test]
    fn test_empty_word_never_matches() {
        assert!(!basic(&[0]).matches(""));
    }

    #[test]
    fn test_filler_only_word_does_not_match() {
        assert!(!basic(&[2]).matches("aie"));
    }

    // ============ Gemination Tests ============

    #[test]
    fn test_gemination_single_occurrence() {
        let m = basic(&[7]);
        assert!(m.matches("kk"));
        assert!(m.matches("gg"));
        assert!(!m.matches("kak"));
        assert!(!m.matches("kkk"));
    }

    #[test]
    fn test_gemination_requires_same_spelling() {
        // "kg" is two different spellings back to back
        assert!(!basic(&[7]).matches("kg"));
        assert!(basic(&[7, 7]).matches("kag"));
    }

    #[test]
    fn test_multi_letter_gemination() {
        assert!(basic(&[6]).matches("sjsj"));
        assert!(!basic(&[6]).matches("sjtj"));
    }

    // ============ Separator Tests ============

    #[test]
    fn test_mandatory_separator_between_same_digits() {
        let m = basic(&[2, 2]);
        assert!(!m.matches("nn"));
        assert!(m.matches("nan"));
        assert!(m.matches("nnann"));
    }

    #[test]
    fn test_optional_separator_between_different_digits() {
        let m = basic(&[5, 3]);
        assert!(m.matches("lm"));
        assert!(m.matches("lam"));
        assert!(m.matches("ellom"));
    }

    #[test]
    fn test_doubled_letters_across_window() {
        // "tønne": t, ø, nn (one 2), e
        assert!(basic(&[1, 2]).matches("tønne"));
        assert!(!basic(&[1, 2, 2]).matches("tønne"));
    }

    // ============ Phoneme Overlap Tests ============

    #[test]
    fn test_skj_as_six_or_zero_seven() {
        assert!(basic(&[6]).matches("skje"));
        // s + k with "je" as trailing filler
        assert!(basic(&[0, 7]).matches("skje"));
        assert!(!basic(&[0]).matches("skje"));
    }

    #[test]
    fn test_j_is_filler_after_consonant() {
        assert!(basic(&[1]).matches("tja"));
        assert!(basic(&[6]).matches("tja"));
    }

    // ============ Case and Filler Config Tests ============

    #[test]
    fn test_case_insensitive() {
        let m = basic(&[5, 3]);
        assert!(m.matches("LAM"));
        assert!(m.matches("Lam"));
        assert!(basic(&[3, 8]).matches("ØMVE"));
    }

    #[test]
    fn test_wc_filler_flag() {
        assert!(!basic(&[3]).matches("mw"));
        assert!(matcher(&[3], FillerConfig::EXTENDED).matches("mw"));
        assert!(!basic(&[2, 2]).matches("ncn"));
        assert!(matcher(&[2, 2], FillerConfig::EXTENDED).matches("ncn"));
    }

    #[test]
    fn test_long_window() {
        // motorhotell → 3,1,4,1,5
        let m = basic(&[3, 1, 4, 1, 5]);
        assert!(m.matches("motorhotell"));
        assert!(!basic(&[3, 1, 4, 1, 5, 5]).matches("motorhotell"));
    }

    #[test]
    fn test_non_filler_lower_bound() {
        assert_eq!(basic(&[3, 1, 4, 1, 5]).min_non_fillers, 5);
        // sj/tj/kj need one non-filler letter, j being a filler
        assert_eq!(basic(&[6]).min_non_fillers, 1);
        assert_eq!(basic(&[6, 6]).min_non_fillers, 2);

        assert!(!basic(&[3, 1, 4]).matches("mat"));
        assert!(!basic(&[3, 1, 4]).matches("aaaaaaaa"));
        assert!(basic(&[6]).matches("SJØ"));
    }

    #[test]
    fn test_unknown_letters_count_but_do_not_match() {
        // 'x' passes the count but is not a phoneme or filler
        assert!(!basic(&[3, 1]).matches("mxt"));
        assert!(!basic(&[3, 1]).matches("mx"));
    }

    #[test]
    fn test_display_pattern() {
        let pattern = basic(&[2, 2]).to_string();
        assert!(pattern.starts_with("^[aeiouyæøåhj]*(n)\\1?"));
        assert!(pattern.contains("[aeiouyæøåhj]+"));
        assert!(pattern.ends_with("$"));
    }
}
