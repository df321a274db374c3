//! Candidate validation against the run's ledger.
//!
//! Checks run in a fixed order and stop at the first failure: unique opening,
//! Place-first, no reused adjacent pair, then the soft alternation threshold.
use crate::clue::{Category, Clue};
use crate::ledger::ConstraintLedger;

/// Return true when `candidate` breaks any cross-group or ordering rule.
pub fn violates(candidate: &[Clue], ledger: &ConstraintLedger) -> bool {
    let Some(first) = candidate.first() else {
        return false;
    };

    if ledger.has_first_clue(&first.question) {
        return true;
    }

    if first.is(Category::Person) {
        return true;
    }

    if candidate
        .windows(2)
        .any(|pair| ledger.has_pair(&pair[0].question, &pair[1].question))
    {
        return true;
    }

    !follows_alternating_types(candidate)
}

/// Soft alternation: tolerate up to `len / 2` adjacent same-category pairs.
///
/// Untyped clues never count as a repeat, and pools with fewer than two typed
/// clues always pass.
pub fn follows_alternating_types(candidate: &[Clue]) -> bool {
    let typed = candidate
        .iter()
        .filter(|clue| clue.category.is_some())
        .count();
    if typed < 2 {
        return true;
    }
    same_category_pairs(candidate) <= candidate.len() / 2
}

/// Count adjacent pairs where both clues carry the same category.
pub fn same_category_pairs(candidate: &[Clue]) -> usize {
    candidate
        .windows(2)
        .filter(|pair| match (pair[0].category, pair[1].category) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        })
        .count()
}
