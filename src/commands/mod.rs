//! Command implementations

pub mod benchmark;
pub mod cheat;
pub mod explore;
pub mod share;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use cheat::{CheatResult, cheat};
pub use explore::{run_explore, run_session};
pub use share::{DecodeResult, ShareConfig, build_state, decode_token, share};
pub use solve::{SolveConfig, SolveResult, solve};
