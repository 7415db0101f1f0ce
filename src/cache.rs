// Major Mnemonic Matcher Cache
// Memoizes pattern matchers by (digit window, filler flag)

use crate::pattern::PatternMatcher;
use crate::phonemes::PhonemeTable;
use crate::types::{DigitWindow, FillerConfig};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Cache identity for a matcher
pub type MatcherKey = (DigitWindow, FillerConfig);

/// Source of pattern matchers.
///
/// Implementations must return a matcher equivalent to
/// `PatternMatcher::with_table(table, window, filler)` for the table they
/// were built with; caching is never observable.
pub trait MatcherCache: Send + Sync {
    /// Get (or build) the matcher for this window and filler flag
    fn get(&self, window: &DigitWindow, filler: FillerConfig) -> Arc<PatternMatcher>;

    /// Number of matchers currently held
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Thread-safe, unbounded matcher cache.
///
/// Lookups take a read lock; on a miss the matcher is built outside any
/// lock and inserted unless another thread got there first, in which case
/// the existing entry wins.
#[derive(Default)]
pub struct SharedMatcherCache {
    /// `None` means the standard table
    table: Option<Arc<PhonemeTable>>,
    entries: RwLock<FxHashMap<MatcherKey, Arc<PatternMatcher>>>,
}

impl SharedMatcherCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache whose matchers are built from a custom phoneme table
    pub fn with_table(table: Arc<PhonemeTable>) -> Self {
        Self {
            table: Some(table),
            entries: RwLock::default(),
        }
    }

    /// Drop every cached matcher
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl MatcherCache for SharedMatcherCache {
    fn get(&self, window: &DigitWindow, filler: FillerConfig) -> Arc<PatternMatcher> {
        let key = (window.clone(), filler);

        if let Some(matcher) = self.entries.read().get(&key) {
            tracing::trace!(window = %window, "matcher cache hit");
            return Arc::clone(matcher);
        }

        tracing::trace!(window = %window, "matcher cache miss");
        let built = Arc::new(build(self.table.as_deref(), window, filler));
        let mut entries = self.entries.write();
        Arc::clone(entries.entry(key).or_insert(built))
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }
}

/// Cache that never stores anything
#[derive(Debug, Default, Clone)]
pub struct NoopMatcherCache {
    table: Option<Arc<PhonemeTable>>,
}

impl NoopMatcherCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(table: Arc<PhonemeTable>) -> Self {
        Self { table: Some(table) }
    }
}

impl MatcherCache for NoopMatcherCache {
    fn get(&self, window: &DigitWindow, filler: FillerConfig) -> Arc<PatternMatcher> {
        Arc::new(build(self.table.as_deref(), window, filler))
    }

    fn len(&self) -> usize {
        0
    }
}

fn build(table: Option<&PhonemeTable>, window: &DigitWindow, filler: FillerConfig) -> PatternMatcher {
    match table {
        Some(table) => PatternMatcher::with_table(table, window, filler),
        None => PatternMatcher::new(window, filler),
    }
}
