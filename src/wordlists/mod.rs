//! Dictionaries for Letter Boxed
//!
//! Provides the embedded default dictionary and file loading.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{DictionaryError, EMBEDDED, load_from_file, load_or_empty, store_from_slice};
