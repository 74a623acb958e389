//! highscore - find the highest-scoring word in a sentence
//!
//! highscore provides:
//! - Word scoring by summed character code points
//! - A sort-then-fold search with a fixed ("a", 97) seed
//! - A step-by-step explanation of the fold
//! - Unified output format (raw/jsonl/json/md)

pub mod cli;
pub mod commands;
pub mod core;

pub use crate::core::score::find_highest;
