// Major Mnemonic Configuration
// Tunables threaded into the finder and the codec

use crate::finder::MAX_WINDOW;
use crate::types::FillerConfig;
use serde::{Deserialize, Serialize};

/// Search and codec settings
///
/// The two filler flags are independent: dictionary matching defaults to
/// the basic set, while word → digit conversion treats `w` and `c` as
/// fillers unless told otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MnemonicConfig {
    /// Count `w` and `c` as fillers when matching dictionary words
    pub include_wc: bool,

    /// Count `w` and `c` as fillers when converting words to digits
    pub codec_include_wc: bool,

    /// Largest digit window tried against one word
    pub max_window: usize,
}

impl Default for MnemonicConfig {
    fn default() -> Self {
        Self {
            include_wc: false,
            codec_include_wc: true,
            max_window: MAX_WINDOW,
        }
    }
}

impl MnemonicConfig {
    pub fn with_include_wc(mut self, include_wc: bool) -> Self {
        self.include_wc = include_wc;
        self
    }

    pub fn with_codec_include_wc(mut self, include_wc: bool) -> Self {
        self.codec_include_wc = include_wc;
        self
    }

    pub fn with_max_window(mut self, max_window: usize) -> Self {
        self.max_window = max_window;
        self
    }

    /// Filler flag for dictionary matching
    pub fn finder_filler(&self) -> FillerConfig {
        FillerConfig::new(self.include_wc)
    }

    /// Filler flag for the word → digit direction
    pub fn codec_filler(&self) -> FillerConfig {
        FillerConfig::new(self.codec_include_wc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MnemonicConfig::default();
        assert_eq!(config.finder_filler(), FillerConfig::BASIC);
        assert_eq!(config.codec_filler(), FillerConfig::EXTENDED);
        assert_eq!(config.max_window, 16);
    }

    #[test]
    fn test_partial_json() {
        let config: MnemonicConfig = serde_json::from_str(r#"{"include_wc": true}"#).unwrap();
        assert!(config.include_wc);
        assert!(config.codec_include_wc);
        assert_eq!(config.max_window, 16);
    }

    #[test]
    fn test_builders() {
        let config = MnemonicConfig::default()
            .with_include_wc(true)
            .with_codec_include_wc(false)
            .with_max_window(4);
        assert_eq!(config.finder_filler(), FillerConfig::EXTENDED);
        assert_eq!(config.codec_filler(), FillerConfig::BASIC);
        assert_eq!(config.max_window, 4);
    }
}
