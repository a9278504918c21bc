//! Core domain types for Letter Boxed
//!
//! Letter sets, per-letter statuses, result ordering and the normalized
//! dictionary. Everything here is plain data with pure operations.

mod letter_set;
mod sort_order;
mod status;
mod word_store;

pub use letter_set::LetterSet;
pub use sort_order::{ParseSortOrderError, SortOrder};
pub use status::{ALPHABET, LetterStatus, LetterStatuses, ParseStatusError};
pub use word_store::WordStore;
