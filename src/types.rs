// Major Mnemonic Type Definitions
// Core types shared by the matcher, finder and codec

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single decimal digit, 0-9.
///
/// The only way to build one is through a checked constructor, so the
/// matching core never sees an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Create a digit, rejecting anything above 9
    pub fn new(value: u8) -> Result<Self, InputError> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(InputError::InvalidDigit {
                value: value as u32,
            })
        }
    }

    /// Numeric value (0-9)
    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Index into per-digit tables
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    /// ASCII character for this digit
    #[inline]
    pub fn as_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// All ten digits in ascending order
    pub fn all() -> impl Iterator<Item = Digit> {
        (0..=9).map(Digit)
    }
}

impl TryFrom<u8> for Digit {
    type Error = InputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value)
    }
}

impl TryFrom<char> for Digit {
    type Error = InputError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch.to_digit(10) {
            Some(d) => Ok(Digit(d as u8)),
            None => Err(InputError::InvalidCharacter { ch }),
        }
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Build a digit vector from raw values, failing on the first bad one
pub fn digits_from_values(values: &[u8]) -> Result<Vec<Digit>, InputError> {
    values.iter().map(|&v| Digit::new(v)).collect()
}

/// Filler configuration: whether `w` and `c` count as skippable letters
/// in addition to the vowels, `h` and `j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FillerConfig {
    pub include_wc: bool,
}

impl FillerConfig {
    /// Vowels plus `h` and `j` only
    pub const BASIC: FillerConfig = FillerConfig { include_wc: false };

    /// Vowels, `h`, `j`, `w` and `c`
    pub const EXTENDED: FillerConfig = FillerConfig { include_wc: true };

    pub fn new(include_wc: bool) -> Self {
        Self { include_wc }
    }
}

/// An ordered, non-empty run of digits searched for in one matching pass.
///
/// Two windows with the same digits are the same window, which is what the
/// matcher cache keys on (together with the filler flag).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitWindow {
    digits: Vec<Digit>,
}

impl DigitWindow {
    /// Create a window; an empty slice is rejected
    pub fn new(digits: &[Digit]) -> Result<Self, InputError> {
        if digits.is_empty() {
            return Err(InputError::EmptyWindow);
        }
        Ok(Self {
            digits: digits.to_vec(),
        })
    }

    /// The digits of this window
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false for a constructed window
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Digits without separators, e.g. "53"
    pub fn to_digit_string(&self) -> String {
        self.digits.iter().map(|d| d.as_char()).collect()
    }
}

impl std::fmt::Display for DigitWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, digit) in self.digits.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

/// Words found for one digit window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitsWords {
    /// The digits actually consumed (may be shorter than requested)
    window: DigitWindow,

    /// Matching dictionary words, in dictionary order
    words: Vec<String>,
}

impl DigitsWords {
    pub fn new(window: DigitWindow, words: Vec<String>) -> Self {
        Self { window, words }
    }

    pub fn window(&self) -> &DigitWindow {
        &self.window
    }

    pub fn digits(&self) -> &[Digit] {
        self.window.digits()
    }

    /// Comma-joined digits, e.g. "5,3"
    pub fn digits_as_string(&self) -> String {
        self.window.to_string()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of candidate words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

impl std::fmt::Display for DigitsWords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] Candidates={}", self.window, self.words.len())
    }
}

impl Serialize for DigitsWords {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("DigitsWords", 2)?;
        state.serialize_field("digits", self.window.digits())?;
        state.serialize_field("words", &self.words)?;
        state.end()
    }
}

/// One piece of a word's decomposition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Part {
    /// Letters encoding a digit (same-digit neighbours already merged)
    Phoneme { value: String, digit: Digit },

    /// A run of filler letters
    Filler { value: String },
}

impl Part {
    /// The exact letters of this part
    pub fn value(&self) -> &str {
        match self {
            Part::Phoneme { value, .. } | Part::Filler { value } => value,
        }
    }

    /// The encoded digit, if this is a phoneme part
    pub fn digit(&self) -> Option<Digit> {
        match self {
            Part::Phoneme { digit, .. } => Some(*digit),
            Part::Filler { .. } => None,
        }
    }

    pub fn is_phoneme(&self) -> bool {
        matches!(self, Part::Phoneme { .. })
    }
}

/// A word with both of its codec views
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordEncoding {
    pub word: String,
    pub digits: String,
    pub parts: Vec<Part>,
}

/// Errors raised at the input boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid digit value {value}: only 0-9 allowed")]
    InvalidDigit { value: u32 },

    #[error("Invalid character '{ch}' in digit input")]
    InvalidCharacter { ch: char },

    #[error("Digit window must contain at least one digit")]
    EmptyWindow,

    #[error("Split length must be at least 1")]
    InvalidSplitLength,
}

/// Phoneme table construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhonemeTableError {
    #[error("Spelling '{spelling}' is mapped to both {first} and {second}")]
    AmbiguousSpelling {
        spelling: String,
        first: Digit,
        second: Digit,
    },

    #[error("Digit {value} in phoneme table is out of range")]
    InvalidDigit { value: u8 },

    #[error("Empty spelling for digit {digit}")]
    EmptySpelling { digit: Digit },
}

/// Dictionary loading errors
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Failed to read word list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(v: u8) -> Digit {
        Digit::new(v).unwrap()
    }

    #[test]
    fn test_digit_range() {
        assert_eq!(d(0).value(), 0);
        assert_eq!(d(9).as_char(), '9');
        assert_eq!(
            Digit::new(10),
            Err(InputError::InvalidDigit { value: 10 })
        );
    }

    #[test]
    fn test_digit_from_char() {
        assert_eq!(Digit::try_from('7').unwrap(), d(7));
        assert_eq!(
            Digit::try_from('x'),
            Err(InputError::InvalidCharacter { ch: 'x' })
        );
    }

    #[test]
    fn test_empty_window_rejected() {
        assert_eq!(DigitWindow::new(&[]), Err(InputError::EmptyWindow));
    }

    #[test]
    fn test_window_display() {
        let window = DigitWindow::new(&[d(5), d(3)]).unwrap();
        assert_eq!(window.to_string(), "5,3");
        assert_eq!(window.to_digit_string(), "53");
        assert_eq!(window.len(), 2);
    }

    #[test]
    fn test_digits_words_display() {
        let window = DigitWindow::new(&[d(5), d(3)]).unwrap();
        let result = DigitsWords::new(window, vec!["lam".to_string()]);
        assert_eq!(result.to_string(), "[5,3] Candidates=1");
        assert_eq!(result.digits_as_string(), "5,3");
    }

    #[test]
    fn test_part_serialization() {
        let part = Part::Phoneme {
            value: "ll".to_string(),
            digit: d(5),
        };
        let json = serde_json::to_string(&part).unwrap();
        assert_eq!(json, r#"{"type":"phoneme","value":"ll","digit":5}"#);

        let filler = Part::Filler {
            value: "o".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&filler).unwrap(),
            r#"{"type":"filler","value":"o"}"#
        );
    }

    #[test]
    fn test_digits_words_serialization() {
        let window = DigitWindow::new(&[d(5), d(3)]).unwrap();
        let result = DigitsWords::new(window, vec!["lam".to_string()]);
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"digits":[5,3],"words":["lam"]}"#
        );
    }
}
