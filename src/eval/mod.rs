//! Position evaluation
//!
//! Static scoring of non-terminal boards from one color's point of view.
//! Terminal positions (a completed five) are scored by the search, not here.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{forward_run, maximal_runs, run_score, EvalStrategy, Evaluator, Run};
pub use patterns::{run_value, PatternScore};
