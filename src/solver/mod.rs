//! Word search algorithms
//!
//! Constraint filtering over the dictionary, the two-word chain search, and
//! the `Solver` that runs both against a puzzle snapshot.

mod engine;
pub mod filter;
pub mod pairs;

pub use engine::{MAX_RESULTS, Solver};
pub use filter::{Constraints, Matcher, filter_words};
pub use pairs::{MIN_PAIR_LENGTH, find_pairs};
