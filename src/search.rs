// Major Mnemonic Search Engine
// Main API that combines input parsing, the word finder and the codec

use crate::codec::MnemonicCodec;
use crate::config::MnemonicConfig;
use crate::dictionary::load_word_list;
use crate::finder::{CancelToken, FindReport, WordFinder};
use crate::input::{parse_digit_groups, split_words};
use crate::types::{Digit, DictionaryError, DigitsWords, InputError, WordEncoding};
use std::path::Path;

/// Main mnemonic engine
///
/// Combines all components:
/// - Input parsing (digit groups, word lists)
/// - Word finding (digits → dictionary words)
/// - Codec (words → digits and segments)
///
/// The finder and the codec read separate w/c flags
/// ([`MnemonicConfig::include_wc`] and [`MnemonicConfig::codec_include_wc`]).
/// With the default config the codec treats "w" and "c" as fillers and the
/// finder does not, so `encode_words("kaw")` reports "7" while `find("7")`
/// over `["kaw"]` finds nothing. Set both flags alike for the two directions
/// to agree.
pub struct MnemonicSearch {
    /// In-memory word list, in file order
    dictionary: Vec<String>,

    /// Finder with a matcher cache shared across calls
    finder: WordFinder,

    /// Word → digit converter
    codec: MnemonicCodec<'static>,

    config: MnemonicConfig,
}

impl MnemonicSearch {
    /// Create an engine over an in-memory dictionary
    ///
    /// # Arguments
    /// * `dictionary` - Candidate words, searched in this order
    /// * `config` - Filler flags and window size
    pub fn new(dictionary: Vec<String>, config: MnemonicConfig) -> Self {
        Self {
            dictionary,
            finder: WordFinder::new().with_max_window(config.max_window),
            codec: MnemonicCodec::new(config.codec_filler()),
            config,
        }
    }

    /// Create an engine from a newline-delimited word list on disk
    pub fn from_path(path: impl AsRef<Path>, config: MnemonicConfig) -> Result<Self, DictionaryError> {
        let dictionary = load_word_list(path)?;
        Ok(Self::new(dictionary, config))
    }

    /// Find words for free-form digit text
    ///
    /// Whitespace-separated groups are searched independently, in order.
    ///
    /// # Arguments
    /// * `text` - Digits, e.g. "3141 5926" or "+47 22-33"
    ///
    /// # Returns
    /// Matched windows for every group, left to right, or an error if the
    /// text holds anything other than digits and separators
    pub fn find(&self, text: &str) -> Result<Vec<DigitsWords>, InputError> {
        self.find_with_progress(text, |_| {})
    }

    /// Like [`find`](Self::find), reporting each window as it is found
    ///
    /// # Arguments
    /// * `text` - Digit groups, as for [`find`](Self::find)
    /// * `on_result` - Called once per matched window, before the next search step
    ///
    /// # Returns
    /// The same windows `on_result` saw, in the same order
    pub fn find_with_progress<F>(&self, text: &str, mut on_result: F) -> Result<Vec<DigitsWords>, InputError>
    where
        F: FnMut(&DigitsWords),
    {
        let groups = parse_digit_groups(text)?;
        let mut results = Vec::new();

        for group in &groups {
            results.extend(self.finder.find(
                &self.dictionary,
                group,
                self.config.finder_filler(),
                &mut on_result,
            ));
        }

        Ok(results)
    }

    /// Find words for one already-validated digit sequence
    pub fn find_digits(&self, digits: &[Digit]) -> Vec<DigitsWords> {
        self.finder
            .find(&self.dictionary, digits, self.config.finder_filler(), |_| {})
    }

    /// Find words for one digit sequence, honouring `cancel`
    pub fn find_digits_cancellable<F>(&self, digits: &[Digit], cancel: &CancelToken, on_result: F) -> FindReport
    where
        F: FnMut(&DigitsWords),
    {
        self.finder.find_cancellable(
            &self.dictionary,
            digits,
            self.config.finder_filler(),
            cancel,
            on_result,
        )
    }

    /// Digits and segments for each whitespace-separated word
    pub fn encode_words(&self, text: &str) -> Vec<WordEncoding> {
        split_words(text)
            .into_iter()
            .map(|word| self.codec.encode(word))
            .collect()
    }

    /// The word → digit converter in use
    pub fn codec(&self) -> &MnemonicCodec<'static> {
        &self.codec
    }

    pub fn config(&self) -> &MnemonicConfig {
        &self.config
    }

    pub fn dictionary(&self) -> &[String] {
        &self.dictionary
    }

    /// (dictionary words, cached matchers)
    pub fn stats(&self) -> (usize, usize) {
        (self.dictionary.len(), self.finder.cache().len())
    }
}
