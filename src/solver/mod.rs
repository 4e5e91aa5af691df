//! Greedy feasibility solver and batch summary metrics.
//!
//! # Algorithm
//!
//! `GreedySolver` processes slots in increasing order, maintaining a
//! global count of still-active agents per resource and a lazily-grown
//! pool of currently-unwanted resources. Each slot commits exactly one
//! resource; the first slot that cannot be satisfied makes the scenario
//! infeasible. Overall near-linear time in slot count plus total
//! preference-list length.
//!
//! # Summary
//!
//! `BatchSummary` aggregates verdict counts over a batch of scenarios.

mod greedy;
mod summary;

pub use greedy::GreedySolver;
pub use summary::BatchSummary;
