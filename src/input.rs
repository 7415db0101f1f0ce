// Major Mnemonic Input Parsing
// Normalizes free-form digit text and word lists before they reach the core

use crate::types::{Digit, InputError};
use once_cell::sync::Lazy;
use regex::Regex;

/// Characters tolerated between digits
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s.,\-/()+_']").unwrap());

/// Anything that is not an ASCII digit
static NON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9]").unwrap());

/// Parse digit text into a digit sequence
///
/// Separators (whitespace, `.`, `,`, `-`, `/`, `(`, `)`, `+`, `_`, `'`) are
/// removed; any other non-digit is rejected.
///
/// # Examples
/// ```
/// # use major_mnemonic::input::parse_digits;
/// let digits = parse_digits("3.14-15")?;
/// assert_eq!(digits.len(), 6);
/// assert!(parse_digits("12a").is_err());
/// # Ok::<(), major_mnemonic::InputError>(())
/// ```
pub fn parse_digits(text: &str) -> Result<Vec<Digit>, InputError> {
    SEPARATORS
        .replace_all(text, "")
        .chars()
        .map(Digit::try_from)
        .collect()
}

/// Parse whitespace-separated digit groups
///
/// Each group is searched on its own, so `"3141 5926"` yields two
/// sequences. Empty groups are dropped.
pub fn parse_digit_groups(text: &str) -> Result<Vec<Vec<Digit>>, InputError> {
    let mut groups = Vec::new();
    for group in text.split_whitespace() {
        let digits = parse_digits(group)?;
        if !digits.is_empty() {
            groups.push(digits);
        }
    }
    Ok(groups)
}

/// Regroup every digit in `text` into chunks of `length`
///
/// Non-digits are discarded, not rejected. The last chunk may be shorter.
///
/// ```
/// # use major_mnemonic::input::split_digits;
/// assert_eq!(split_digits("3,1415 92", 3)?, ["314", "159", "2"]);
/// # Ok::<(), major_mnemonic::InputError>(())
/// ```
pub fn split_digits(text: &str, length: usize) -> Result<Vec<String>, InputError> {
    if length == 0 {
        return Err(InputError::InvalidSplitLength);
    }

    let cleaned = NON_DIGITS.replace_all(text, "");
    let chars: Vec<char> = cleaned.chars().collect();
    Ok(chars
        .chunks(length)
        .map(|chunk| chunk.iter().collect())
        .collect())
}

/// Whitespace-separated words
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::digits_from_values;

    #[test]
    fn test_parse_plain_digits() {
        assert_eq!(
            parse_digits("53138552").unwrap(),
            digits_from_values(&[5, 3, 1, 3, 8, 5, 5, 2]).unwrap()
        );
    }

    #[test]
    fn test_parse_strips_separators() {
        let digits = parse_digits("+47 (22) 33-44.55/6_7'8,9").unwrap();
        assert_eq!(digits.len(), 14);
        assert_eq!(digits[0].value(), 4);
    }

    #[test]
    fn test_parse_rejects_letters() {
        assert_eq!(
            parse_digits("12a4"),
            Err(InputError::InvalidCharacter { ch: 'a' })
        );
    }

    #[test]
    fn test_parse_rejects_non_ascii_digits() {
        assert!(parse_digits("١٢").is_err());
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_digits("").unwrap().is_empty());
        assert!(parse_digits(" - ").unwrap().is_empty());
    }

    #[test]
    fn test_digit_groups() {
        let groups = parse_digit_groups("  3141  59-26 ").unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].len(), 4);
        assert_eq!(groups[1].len(), 4);
    }

    #[test]
    fn test_digit_groups_drop_empty() {
        let groups = parse_digit_groups("12 -- 3").unwrap();
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_split_digits() {
        assert_eq!(
            split_digits("31415926535", 4).unwrap(),
            vec!["3141", "5926", "535"]
        );
        assert!(split_digits("abc", 3).unwrap().is_empty());
    }

    #[test]
    fn test_split_zero_length() {
        assert_eq!(split_digits("123", 0), Err(InputError::InvalidSplitLength));
    }

    #[test]
    fn test_split_words() {
        assert_eq!(
            split_words(" motorhotell  penkjole\tmilf "),
            vec!["motorhotell", "penkjole", "milf"]
        );
    }
}
