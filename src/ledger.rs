//! Per-run record of openings and adjacent pairs already handed out.
//!
//! The ledger only grows: entries are recorded after a candidate passes
//! validation and are never removed for the lifetime of a run.
use crate::clue::Clue;
use std::collections::HashSet;

#[derive(Debug, Default, Clone)]
pub struct ConstraintLedger {
    used_first_clues: HashSet<String>,
    used_consecutive_pairs: HashSet<(String, String)>,
}

impl ConstraintLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_first_clue(&mut self, question: &str) {
        self.used_first_clues.insert(question.to_string());
    }

    pub fn record_adjacent_pairs(&mut self, sequence: &[Clue]) {
        for pair in sequence.windows(2) {
            self.used_consecutive_pairs
                .insert((pair[0].question.clone(), pair[1].question.clone()));
        }
    }

    /// Record both the opening clue and every adjacent pair of an accepted
    /// sequence.
    pub fn commit(&mut self, sequence: &[Clue]) {
        if let Some(first) = sequence.first() {
            self.record_first_clue(&first.question);
        }
        self.record_adjacent_pairs(sequence);
    }

    pub fn has_first_clue(&self, question: &str) -> bool {
        self.used_first_clues.contains(question)
    }

    pub fn has_pair(&self, from: &str, to: &str) -> bool {
        self.used_consecutive_pairs
            .contains(&(from.to_string(), to.to_string()))
    }

    pub fn first_clue_count(&self) -> usize {
        self.used_first_clues.len()
    }

    pub fn pair_count(&self) -> usize {
        self.used_consecutive_pairs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_records_opening_and_ordered_pairs() {
        let seq = vec![
            Clue::new("a", "A", None),
            Clue::new("b", "B", None),
            Clue::new("c", "C", None),
        ];
        let mut ledger = ConstraintLedger::new();
        ledger.commit(&seq);

        assert!(ledger.has_first_clue("a"));
        assert!(!ledger.has_first_clue("b"));
        assert!(ledger.has_pair("a", "b"));
        assert!(ledger.has_pair("b", "c"));
        assert!(!ledger.has_pair("b", "a"));
        assert_eq!(ledger.first_clue_count(), 1);
        assert_eq!(ledger.pair_count(), 2);
    }

    #[test]
    fn single_clue_sequence_records_no_pairs() {
        let mut ledger = ConstraintLedger::new();
        ledger.commit(&[Clue::new("only", "here", None)]);
        assert!(ledger.has_first_clue("only"));
        assert_eq!(ledger.pair_count(), 0);
    }
}
