//! Dictionary loading utilities
//!
//! Provides functions to build a [`WordStore`] from a file or from the
//! embedded word list.

use super::WORDS;
use crate::core::WordStore;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name that selects the embedded dictionary instead of a file
pub const EMBEDDED: &str = "embedded";

/// Error loading a dictionary file
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("dictionary {} contains no words", .path.display())]
    Empty { path: PathBuf },
}

/// Load a newline-separated dictionary file
///
/// Lines are trimmed and blank lines dropped; lower-casing and deduplication
/// happen in the store.
///
/// # Errors
///
/// Returns [`DictionaryError::Io`] if the file cannot be read and
/// [`DictionaryError::Empty`] if it holds no words.
///
/// # Examples
/// ```no_run
/// use letter_boxed::wordlists::loader::load_from_file;
///
/// let store = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", store.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordStore, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let store = WordStore::load(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty()),
    );

    if store.is_empty() {
        return Err(DictionaryError::Empty {
            path: path.to_path_buf(),
        });
    }

    log::info!("loaded {} words from {}", store.len(), path.display());
    Ok(store)
}

/// Build a store from an embedded string slice
///
/// # Examples
/// ```
/// use letter_boxed::wordlists::loader::store_from_slice;
/// use letter_boxed::wordlists::WORDS;
///
/// let store = store_from_slice(WORDS);
/// assert_eq!(store.len(), WORDS.len());
/// ```
#[must_use]
pub fn store_from_slice(slice: &[&str]) -> WordStore {
    WordStore::load(slice.iter().map(|word| word.trim()))
}

/// Resolve a `--dictionary` value, degrading to an empty store on failure
///
/// `"embedded"` selects the built-in list; anything else is a file path. Load
/// errors are logged rather than returned so callers see empty results.
#[must_use]
pub fn load_or_empty(source: &str) -> WordStore {
    if source == EMBEDDED {
        return store_from_slice(WORDS);
    }

    load_from_file(source).unwrap_or_else(|err| {
        log::error!("{err}");
        WordStore::default()
    })
}
