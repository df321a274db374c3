use thiserror::Error;

/// Minimum pool size: one shared final clue plus one randomizable clue.
pub const MIN_CLUES: usize = 2;

/// Conditions that abort a generation run. Callers recover by changing the
/// clue pool or the group count; the generator never returns partial output.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("need at least 2 clues to generate a hunt (got {found})")]
    InsufficientClues { found: usize },

    #[error("group count must be at least 1")]
    NoGroups,

    #[error(
        "could not generate a valid sequence for group {group} after {attempts} attempts; \
         try using more clues or fewer groups"
    )]
    UnsatisfiableConstraints { group: usize, attempts: u32 },
}
