//! # Major Mnemonic: Phonetic Number ↔ Word Conversion
//!
//! Converts between digit sequences and words using the phonetic major
//! system, where consonant sounds stand for digits and vowels are free.
//!
//! ## Two Directions
//!
//! 1. **Digits → words** - find dictionary words whose consonant skeleton
//!    spells a digit sequence, consuming the longest matchable prefix at a time
//!    - `finder.find(&dictionary, &digits, filler, |found| ...)`
//! 2. **Word → digits** - reduce a word to its digit string and a
//!    phoneme/filler breakdown
//!    - `digits_of("motorhotell")` → `"31415"`
//!
//! ## Phoneme Table
//!
//! | Digit | Spellings          |
//! |-------|--------------------|
//! | 0     | s, z               |
//! | 1     | t, d               |
//! | 2     | n                  |
//! | 3     | m                  |
//! | 4     | r                  |
//! | 5     | l                  |
//! | 6     | sj, skj, tj, kj    |
//! | 7     | k, g               |
//! | 8     | f, v               |
//! | 9     | p, b               |
//!
//! Fillers are `a e i o u y æ ø å h j`, plus `w c` when enabled.
//! A doubled spelling (`ll`, `kk`) counts once; two occurrences of the same
//! digit need a filler between them (`nan` is 22, `nn` is 2).
//!
//! ## Example Usage
//!
//! ```
//! use major_mnemonic::{MnemonicConfig, MnemonicSearch};
//!
//! let dictionary = vec!["lam".to_string(), "dum".to_string()];
//! let search = MnemonicSearch::new(dictionary, MnemonicConfig::default());
//!
//! // Digits to words
//! let results = search.find("5313")?;
//! assert_eq!(results[0].words(), &["lam"]);
//!
//! // Words to digits
//! let encoded = search.encode_words("motorhotell");
//! assert_eq!(encoded[0].digits, "31415");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - **Phoneme Table** - digit ↔ spelling mapping and filler letters
//! - **Pattern Matcher** - whole-word predicate for one digit window
//! - **Matcher Cache** - memoizes matchers by (window, filler flag)
//! - **Word Finder** - windowed, shrink-and-retry dictionary search
//! - **Mnemonic Codec** - word → digits / segments scan
//! - **MnemonicSearch API** - main entry point combining all components

pub mod cache;
pub mod codec;
pub mod config;
pub mod dictionary;
pub mod finder;
pub mod input;
pub mod pattern;
pub mod phonemes;
pub mod search;
pub mod types;

// Re-export main types and functions for convenience
pub use cache::{MatcherCache, NoopMatcherCache, SharedMatcherCache};
pub use codec::{digits_of, segments_of, MnemonicCodec};
pub use config::MnemonicConfig;
pub use dictionary::{load_word_list, parse_word_list};
pub use finder::{CancelToken, FindReport, FindStatus, WordFinder, MAX_WINDOW};
pub use input::{parse_digit_groups, parse_digits, split_digits, split_words};
pub use pattern::PatternMatcher;
pub use phonemes::{FillerSet, PhonemeTable};
pub use search::MnemonicSearch;
pub use types::{
    digits_from_values, DictionaryError, Digit, DigitWindow, DigitsWords, FillerConfig,
    InputError, Part, PhonemeTableError, WordEncoding,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
