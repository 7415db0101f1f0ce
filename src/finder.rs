// Major Mnemonic Word Finder
// Greedy longest-prefix search of a digit sequence against a word list

use crate::cache::{MatcherCache, SharedMatcherCache};
use crate::pattern::PatternMatcher;
use crate::phonemes::PhonemeTable;
use crate::types::{Digit, DigitWindow, DigitsWords, FillerConfig};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Largest number of digits matched against a single word
pub const MAX_WINDOW: usize = 16;

/// Cooperative cancellation flag, checked before each window
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; every clone observes it
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindStatus {
    /// Every digit was consumed
    Complete,

    /// No word matched any prefix of the digits starting at `cursor`
    OutOfCoverage { cursor: usize },

    /// Cancelled before the window starting at `cursor`
    Cancelled { cursor: usize },
}

/// Results of a search plus how it ended
#[derive(Debug, Clone)]
pub struct FindReport {
    pub results: Vec<DigitsWords>,
    pub status: FindStatus,
}

impl FindReport {
    /// Number of digits covered by the results
    pub fn digits_consumed(&self) -> usize {
        self.results.iter().map(|r| r.digits().len()).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.status == FindStatus::Complete
    }
}

/// Finds dictionary words for digit sequences
///
/// The sequence is consumed left to right in windows of at most
/// `max_window` digits. For each window the dictionary is scanned; if
/// nothing matches, the last digit is dropped and the scan repeated. The
/// first (longest) window with matches is reported and consumed. If even
/// a single digit finds nothing, the search stops with what it has.
#[derive(Clone)]
pub struct WordFinder {
    cache: Arc<dyn MatcherCache>,
    max_window: usize,
}

impl WordFinder {
    /// Finder with its own shared matcher cache
    pub fn new() -> Self {
        Self::with_cache(Arc::new(SharedMatcherCache::new()))
    }

    /// Finder backed by the given cache
    pub fn with_cache(cache: Arc<dyn MatcherCache>) -> Self {
        Self {
            cache,
            max_window: MAX_WINDOW,
        }
    }

    /// Finder whose matchers use a custom phoneme table
    pub fn with_table(table: Arc<PhonemeTable>) -> Self {
        Self::with_cache(Arc::new(SharedMatcherCache::with_table(table)))
    }

    /// Limit the window size (clamped to at least 1)
    pub fn with_max_window(mut self, max_window: usize) -> Self {
        self.max_window = max_window.max(1);
        self
    }

    pub fn max_window(&self) -> usize {
        self.max_window
    }

    pub fn cache(&self) -> &dyn MatcherCache {
        self.cache.as_ref()
    }

    /// Find words for `digits`.
    ///
    /// # Arguments
    /// * `dictionary` - Candidate words; matches keep this order
    /// * `digits` - Sequence to cover, left to right
    /// * `filler` - Whether "w" and "c" count as fillers
    /// * `on_result` - Invoked synchronously, once per matched window, in order
    ///
    /// # Returns
    /// The same results `on_result` saw, in the same order. A list covering
    /// fewer digits than requested means the dictionary ran out of coverage,
    /// not an error.
    ///
    /// # Example
    /// ```
    /// # use major_mnemonic::{digits_from_values, FillerConfig, WordFinder};
    /// let dictionary = ["lam", "dum", "fly", "lyn"];
    /// let digits = digits_from_values(&[5, 3, 1, 3, 8, 5, 5, 2])?;
    /// let results = WordFinder::new().find(&dictionary, &digits, FillerConfig::BASIC, |_| {});
    /// let words: Vec<&str> = results.iter().map(|r| r.words()[0].as_str()).collect();
    /// assert_eq!(words, ["lam", "dum", "fly", "lyn"]);
    /// # Ok::<(), major_mnemonic::InputError>(())
    /// ```
    pub fn find<S, F>(
        &self,
        dictionary: &[S],
        digits: &[Digit],
        filler: FillerConfig,
        on_result: F,
    ) -> Vec<DigitsWords>
    where
        S: AsRef<str>,
        F: FnMut(&DigitsWords),
    {
        self.find_cancellable(dictionary, digits, filler, &CancelToken::new(), on_result)
            .results
    }

    /// Same as [`find`](Self::find), but stops before the next window once
    /// `cancel` is set and reports how the search ended.
    pub fn find_cancellable<S, F>(
        &self,
        dictionary: &[S],
        digits: &[Digit],
        filler: FillerConfig,
        cancel: &CancelToken,
        mut on_result: F,
    ) -> FindReport
    where
        S: AsRef<str>,
        F: FnMut(&DigitsWords),
    {
        let mut results = Vec::new();
        let mut cursor = 0;

        if dictionary.is_empty() {
            let status = if digits.is_empty() {
                FindStatus::Complete
            } else {
                FindStatus::OutOfCoverage { cursor }
            };
            return FindReport { results, status };
        }

        while cursor < digits.len() {
            if cancel.is_cancelled() {
                tracing::info!(cursor, "digit search cancelled");
                return FindReport {
                    results,
                    status: FindStatus::Cancelled { cursor },
                };
            }

            let end = (cursor + self.max_window).min(digits.len());
            match self.longest_match(dictionary, &digits[cursor..end], filler) {
                Some(found) => {
                    cursor += found.digits().len();
                    on_result(&found);
                    results.push(found);
                }
                None => {
                    tracing::debug!(cursor, "no dictionary word for any prefix");
                    return FindReport {
                        results,
                        status: FindStatus::OutOfCoverage { cursor },
                    };
                }
            }
        }

        tracing::info!(
            windows = results.len(),
            digits = digits.len(),
            "digit search complete"
        );
        FindReport {
            results,
            status: FindStatus::Complete,
        }
    }

    /// Longest prefix of `chunk` with at least one matching word
    fn longest_match<S: AsRef<str>>(
        &self,
        dictionary: &[S],
        chunk: &[Digit],
        filler: FillerConfig,
    ) -> Option<DigitsWords> {
        for len in (1..=chunk.len()).rev() {
            // Non-empty by construction of the range
            let window = DigitWindow::new(&chunk[..len]).ok()?;
            let matcher = self.cache.get(&window, filler);
            let words = scan(dictionary, &matcher);

            tracing::debug!(window = %window, matches = words.len(), "window scanned");
            if !words.is_empty() {
                return Some(DigitsWords::new(window, words));
            }
        }
        None
    }
}

impl Default for WordFinder {
    fn default() -> Self {
        Self::new()
    }
}

/// Every dictionary word accepted by `matcher`, in dictionary order
pub fn scan<S: AsRef<str>>(dictionary: &[S], matcher: &PatternMatcher) -> Vec<String> {
    dictionary
        .iter()
        .map(|word| word.as_ref())
        .filter(|word| matcher.matches(word))
        .map(str::to_string)
        .collect()
}
