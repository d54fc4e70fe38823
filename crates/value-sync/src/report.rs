//! Run reports.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Snapshot of the grid after one decision round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundReport {
    /// Round number, starting at one.
    pub round: usize,
    /// Field values at the end of the round.
    pub values: BTreeMap<String, i64>,
    /// Largest agent criticality at the end of the round.
    pub max_criticality: f64,
    /// Agents that proposed at least one action this round.
    pub turns: usize,
}

/// Full record of a convergence run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceReport {
    /// Field values before the first round.
    pub initial_values: BTreeMap<String, i64>,
    /// Field values once every criticality reached zero.
    pub final_values: BTreeMap<String, i64>,
    /// One entry per executed round; empty when the run started converged.
    pub rounds: Vec<RoundReport>,
    /// SHA-256 of the canonical report with this field unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

impl ConvergenceReport {
    /// Number of rounds it took to converge.
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// The value every field settled on, if the run ended uniform.
    #[must_use]
    pub fn uniform_value(&self) -> Option<i64> {
        let mut values = self.final_values.values();
        let first = values.next().copied()?;
        values.all(|value| *value == first).then_some(first)
    }

    /// Largest criticality per executed round, in round order.
    #[must_use]
    pub fn max_criticalities(&self) -> Vec<f64> {
        self.rounds.iter().map(|round| round.max_criticality).collect()
    }
}
