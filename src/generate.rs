//! Per-group sequence search.
//!
//! Each group gets a bounded rejection-sampling loop: build a candidate (the
//! alternating builder first, a plain shuffle as fallback), validate it against
//! the run's ledger, and commit on success. A group that exhausts its attempts
//! aborts the whole run.
use crate::alternate::build_alternating;
use crate::clue::{split_final, Clue};
use crate::config::{default_config, HuntConfig};
use crate::constraints::violates;
use crate::error::{GenerateError, MIN_CLUES};
use crate::ledger::ConstraintLedger;
use crate::shuffle::shuffled;
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;

/// One line of a group's path.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Step {
    pub step_number: usize,
    pub question: String,
    pub location: String,
    pub next_step_label: String,
}

pub type Sequence = Vec<Step>;

/// Group number (1-based) to that group's full path.
pub type Hunt = BTreeMap<usize, Sequence>;

/// Result of a single attempt for one group.
#[derive(Debug)]
enum Attempt {
    Committed(Vec<Clue>),
    Rejected,
}

#[derive(Debug, Clone)]
pub struct SequenceGenerator {
    clues: Vec<Clue>,
    group_count: usize,
    config: HuntConfig,
}

impl SequenceGenerator {
    pub fn new(clues: Vec<Clue>, group_count: usize) -> Self {
        Self {
            clues,
            group_count,
            config: default_config(),
        }
    }

    pub fn with_config(mut self, config: HuntConfig) -> Self {
        self.config = config;
        self
    }

    pub fn clues(&self) -> &[Clue] {
        &self.clues
    }

    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// Generate one sequence per group.
    ///
    /// A fresh ledger is created per call, so the same generator can be run
    /// repeatedly with independent results.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Hunt, GenerateError> {
        if self.clues.len() < MIN_CLUES {
            return Err(GenerateError::InsufficientClues {
                found: self.clues.len(),
            });
        }
        if self.group_count == 0 {
            return Err(GenerateError::NoGroups);
        }
        let (final_clue, pool) =
            split_final(&self.clues).ok_or(GenerateError::InsufficientClues { found: 0 })?;

        let mut ledger = ConstraintLedger::new();
        let mut hunt = Hunt::new();
        for group in 1..=self.group_count {
            let (order, attempts) = self.search_group(group, pool, &ledger, rng)?;
            ledger.commit(&order);
            tracing::debug!(
                group,
                attempts,
                opening = %order[0].question,
                "group sequence committed"
            );
            hunt.insert(group, self.materialize(&order, final_clue));
        }

        tracing::info!(
            groups = self.group_count,
            clues = self.clues.len(),
            recorded_pairs = ledger.pair_count(),
            "hunt generated"
        );
        Ok(hunt)
    }

    fn search_group<R: Rng + ?Sized>(
        &self,
        group: usize,
        pool: &[Clue],
        ledger: &ConstraintLedger,
        rng: &mut R,
    ) -> Result<(Vec<Clue>, u32), GenerateError> {
        for attempt in 1..=self.config.max_attempts {
            match attempt_once(pool, ledger, rng) {
                Attempt::Committed(order) => return Ok((order, attempt)),
                Attempt::Rejected => continue,
            }
        }
        tracing::warn!(
            group,
            attempts = self.config.max_attempts,
            used_openings = ledger.first_clue_count(),
            "attempt bound exhausted"
        );
        Err(GenerateError::UnsatisfiableConstraints {
            group,
            attempts: self.config.max_attempts,
        })
    }

    /// Turn an accepted ordering into numbered steps ending on the final clue.
    fn materialize(&self, order: &[Clue], final_clue: &Clue) -> Sequence {
        let mut steps = Vec::with_capacity(order.len() + 1);
        for (idx, clue) in order.iter().enumerate() {
            let step_number = idx + 1;
            let next = order.get(idx + 1).unwrap_or(final_clue);
            steps.push(self.step(step_number, clue, &next.question));
        }
        steps.push(self.step(order.len() + 1, final_clue, &self.config.terminal_marker));
        steps
    }

    fn step(&self, step_number: usize, clue: &Clue, next: &str) -> Step {
        Step {
            step_number,
            question: clue.question.clone(),
            location: format!("{}{}", self.config.location_prefix, clue.location_hint),
            next_step_label: format!("{}. {}", step_number + 1, next),
        }
    }
}

/// Searching, then Validating; the builder's candidate is kept only when it
/// already passes, otherwise a plain shuffle takes its place.
fn attempt_once<R: Rng + ?Sized>(pool: &[Clue], ledger: &ConstraintLedger, rng: &mut R) -> Attempt {
    let candidate = match build_alternating(pool, rng) {
        Some(candidate) if !violates(&candidate, ledger) => candidate,
        _ => shuffled(pool, rng),
    };
    if violates(&candidate, ledger) {
        Attempt::Rejected
    } else {
        Attempt::Committed(candidate)
    }
}

/// Convenience wrapper over [`SequenceGenerator`] with default config.
pub fn generate_hunt<R: Rng + ?Sized>(
    clues: Vec<Clue>,
    group_count: usize,
    rng: &mut R,
) -> Result<Hunt, GenerateError> {
    SequenceGenerator::new(clues, group_count).generate(rng)
}
