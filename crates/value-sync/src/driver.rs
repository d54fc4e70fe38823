//! Round-based convergence driver.
//!
//! One round runs every agent once, in the given order: decide, then act
//! on the grid as left by the predecessors. The run ends when every
//! criticality reaches zero. Agent order shapes the trajectory, not the
//! per-agent semantics, so the caller fixes it explicitly.

use tracing::debug;

use accord_core::{Agent, Lookahead};

use crate::agent::FieldAgent;
use crate::env::ValueGrid;
use crate::report::{ConvergenceReport, RoundReport};

/// Bounds for a convergence run.
#[derive(Debug, Clone, Copy)]
pub struct RoundLimits {
    /// Hard cap on executed rounds.
    pub max_rounds: usize,
}

impl Default for RoundLimits {
    fn default() -> Self {
        Self { max_rounds: 32 }
    }
}

/// Errors from the convergence driver.
#[derive(Debug, thiserror::Error)]
pub enum ConvergenceError {
    #[error("no convergence within {limit} rounds")]
    RoundLimitExceeded { limit: usize },
    #[error(transparent)]
    Fingerprint(#[from] accord_core::FingerprintError),
}

/// Largest agent criticality on the grid; zero means converged.
#[must_use]
pub fn max_criticality(agents: &[FieldAgent], grid: &ValueGrid) -> f64 {
    agents
        .iter()
        .map(|agent| agent.criticality(grid))
        .max()
        .map_or(0.0, |worst| worst.0)
}

/// Run one decision round and report the resulting grid.
#[must_use]
pub fn run_round(agents: &[FieldAgent], grid: &ValueGrid, round: usize) -> (ValueGrid, RoundReport) {
    let mut current = grid.clone();
    let mut turns = 0;
    for agent in agents {
        let selection = agent.decision_to_depth(&current);
        if !selection.is_empty() {
            turns += 1;
        }
        current = agent.act(&current, &selection);
    }
    let report = RoundReport {
        round,
        values: current.values().clone(),
        max_criticality: max_criticality(agents, &current),
        turns,
    };
    debug!(round, turns, max_criticality = report.max_criticality, "round complete");
    (current, report)
}

/// Run rounds until every criticality reaches zero.
///
/// Returns the fingerprinted trajectory, or
/// [`ConvergenceError::RoundLimitExceeded`] when the cap runs out first.
pub fn run_to_convergence(
    agents: &[FieldAgent],
    grid: ValueGrid,
    limits: RoundLimits,
) -> Result<ConvergenceReport, ConvergenceError> {
    let initial_values = grid.values().clone();
    let mut current = grid;
    let mut rounds = Vec::new();

    while max_criticality(agents, &current) > 0.0 {
        let round = rounds.len() + 1;
        if round > limits.max_rounds {
            return Err(ConvergenceError::RoundLimitExceeded {
                limit: limits.max_rounds,
            });
        }
        let (next, report) = run_round(agents, &current, round);
        rounds.push(report);
        current = next;
    }

    let mut report = ConvergenceReport {
        initial_values,
        final_values: current.values().clone(),
        rounds,
        fingerprint: None,
    };
    report.fingerprint = Some(accord_core::fingerprint::fingerprint(&report)?);
    Ok(report)
}
