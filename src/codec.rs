// Major Mnemonic Codec
// Reduces a word to its digit string and its phoneme/filler breakdown

use crate::phonemes::{FillerSet, PhonemeTable};
use crate::types::{Digit, FillerConfig, Part, WordEncoding};

/// One step of the left-to-right scan
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Phoneme(String, Digit),
    Filler(String),
    /// Whitespace: breaks same-digit merging, renders as nothing
    Break,
}

/// Word → digits / segments converter
///
/// At every position the longest phoneme spelling is tried first, then a
/// run of filler letters, then whitespace. Anything else is skipped.
/// Consecutive phonemes for the same digit collapse into one unless a
/// filler run (or whitespace) sits between them.
#[derive(Debug, Clone)]
pub struct MnemonicCodec<'t> {
    table: &'t PhonemeTable,
    fillers: FillerSet,
}

impl MnemonicCodec<'static> {
    /// Codec over the standard phoneme table
    pub fn new(filler: FillerConfig) -> Self {
        Self::with_table(PhonemeTable::standard(), filler)
    }
}

impl Default for MnemonicCodec<'static> {
    fn default() -> Self {
        Self::new(FillerConfig::EXTENDED)
    }
}

impl<'t> MnemonicCodec<'t> {
    pub fn with_table(table: &'t PhonemeTable, filler: FillerConfig) -> Self {
        Self {
            table,
            fillers: FillerSet::new(filler),
        }
    }

    pub fn filler_config(&self) -> FillerConfig {
        self.fillers.config()
    }

    /// Digit string for a word, e.g. "motorhotell" → "31415"
    pub fn digits_of(&self, word: &str) -> String {
        let mut digits = String::new();
        let mut last: Option<Digit> = None;
        let mut separated = false;

        for token in self.scan(word) {
            match token {
                Token::Filler(_) | Token::Break => separated = true,
                Token::Phoneme(_, digit) => {
                    if last != Some(digit) || separated {
                        digits.push(digit.as_char());
                        last = Some(digit);
                    }
                    separated = false;
                }
            }
        }

        digits
    }

    /// Ordered phoneme/filler parts of a word
    pub fn segments_of(&self, word: &str) -> Vec<Part> {
        let mut parts: Vec<Part> = Vec::new();
        let mut separated = false;

        for token in self.scan(word) {
            match token {
                Token::Break => separated = true,
                Token::Filler(value) => {
                    separated = true;
                    parts.push(Part::Filler { value });
                }
                Token::Phoneme(letters, digit) => {
                    match parts.last_mut() {
                        Some(Part::Phoneme { value, digit: prev }) if *prev == digit && !separated => {
                            value.push_str(&letters);
                        }
                        _ => parts.push(Part::Phoneme {
                            value: letters,
                            digit,
                        }),
                    }
                    separated = false;
                }
            }
        }

        parts
    }

    /// Both views of a word
    pub fn encode(&self, word: &str) -> WordEncoding {
        WordEncoding {
            word: word.to_string(),
            digits: self.digits_of(word),
            parts: self.segments_of(word),
        }
    }

    fn scan(&self, word: &str) -> Vec<Token> {
        let chars: Vec<char> = word.to_lowercase().chars().collect();
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < chars.len() {
            if let Some((len, digit)) = self.table.longest_match_at(&chars, pos) {
                tokens.push(Token::Phoneme(chars[pos..pos + len].iter().collect(), digit));
                pos += len;
                continue;
            }

            let run = self.fillers.run_length(&chars, pos);
            if run > 0 {
                tokens.push(Token::Filler(chars[pos..pos + run].iter().collect()));
                pos += run;
                continue;
            }

            let spaces = chars[pos..].iter().take_while(|c| c.is_whitespace()).count();
            if spaces > 0 {
                tokens.push(Token::Break);
                pos += spaces;
                continue;
            }

            pos += 1;
        }

        tokens
    }
}

/// Digit string using the standard table and the extended filler set
pub fn digits_of(word: &str) -> String {
    MnemonicCodec::default().digits_of(word)
}

/// Segments using the standard table and the extended filler set
pub fn segments_of(word: &str) -> Vec<Part> {
    MnemonicCodec::default().segments_of(word)
}
