//! Batch outcome metrics.
//!
//! Aggregates the verdicts of a batch evaluation into simple counts,
//! for reporting layers that run many scenarios at once.

use crate::models::Verdict;

/// Aggregate counts over a batch of verdicts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    /// Number of scenarios evaluated.
    pub total: usize,
    /// Number of feasible scenarios.
    pub feasible: usize,
    /// Number of infeasible scenarios.
    pub infeasible: usize,
}

impl BatchSummary {
    /// Computes a summary from a batch of verdicts.
    pub fn from_verdicts(verdicts: &[Verdict]) -> Self {
        let feasible = verdicts.iter().filter(|v| v.is_feasible()).count();
        Self {
            total: verdicts.len(),
            feasible,
            infeasible: verdicts.len() - feasible,
        }
    }

    /// Fraction of feasible scenarios (0.0..1.0).
    ///
    /// An empty batch reports 1.0, mirroring the convention that an
    /// empty constraint set is satisfied.
    pub fn feasible_rate(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.feasible as f64 / self.total as f64
        }
    }

    /// Whether every scenario in the batch was feasible.
    pub fn all_feasible(&self) -> bool {
        self.infeasible == 0
    }
}
