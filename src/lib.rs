//! Letter Boxed Explorer
//!
//! Word search for Letter Boxed style puzzles: filter a dictionary by
//! per-letter constraints and adjacency groups, find two-word chains that use
//! every letter, and encode the whole view as a shareable token.
//!
//! # Quick Start
//!
//! ```rust
//! use letter_boxed::core::WordStore;
//! use letter_boxed::solver::Solver;
//! use letter_boxed::state::{PuzzleState, decode, encode};
//!
//! let store = WordStore::load(["tide", "bad", "cab", "tin", "xyz"]);
//! let state = PuzzleState::from_sides(&["cat", "dog", "bin", "elm"]);
//!
//! // "cab" and "tin" each put two letters from one side next to each other
//! let solver = Solver::new(&store);
//! assert_eq!(solver.results(&state), ["tide", "bad"]);
//!
//! let token = encode(&state);
//! assert_eq!(decode(&token), state);
//! ```

// Core domain types
pub mod core;

// Filtering and pair search
pub mod solver;

// Puzzle snapshots, groups and the share token
pub mod state;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
