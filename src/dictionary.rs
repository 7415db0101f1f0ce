// Major Mnemonic Word List Loader
// Reads newline-delimited dictionaries into memory

use crate::types::DictionaryError;
use std::path::Path;

/// Parse a newline-delimited word list (`\n` or `\r\n`)
///
/// Surrounding whitespace is trimmed and blank lines are dropped. Order and
/// duplicates are kept as-is.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load a word list from disk
pub fn load_word_list(path: impl AsRef<Path>) -> Result<Vec<String>, DictionaryError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let words = parse_word_list(&text);
    tracing::info!(path = %path.display(), words = words.len(), "word list loaded");
    Ok(words)
}
