//! Scavenger hunt sequence generation.
//!
//! Given a pool of clues (the last one shared by everyone as the final step)
//! and a group count, produce one path per group such that no two groups share
//! an opening clue or an adjacent clue pair, every path opens on a Place when
//! possible, and Person/Place clues alternate where the pool allows.
pub mod alternate;
pub mod clue;
pub mod config;
pub mod constraints;
pub mod error;
pub mod generate;
pub mod input;
pub mod ledger;
pub mod output;
pub mod shuffle;

pub use clue::{Category, Clue};
pub use config::HuntConfig;
pub use error::GenerateError;
pub use generate::{generate_hunt, Hunt, Sequence, SequenceGenerator, Step};
pub use ledger::ConstraintLedger;
