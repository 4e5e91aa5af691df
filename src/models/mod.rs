//! Assignment domain models.
//!
//! Provides the core data types for representing assignment feasibility
//! problems and their outcomes. Domain-agnostic within assignment —
//! applicable wherever distinguishable resources must be placed into
//! ordered slots under observer preferences.
//!
//! # Domain Mappings
//!
//! | u-assign | Horticulture | Warehousing | Broadcasting |
//! |----------|--------------|-------------|--------------|
//! | Slot | Pot | Shelf Bay | Time Slot |
//! | Resource | Plant | Pallet | Program |
//! | Agent | Cat | Picker | Sponsor |
//! | Verdict | Arrangeable? | Storable? | Schedulable? |

mod scenario;
mod verdict;

pub use scenario::{Agent, Scenario};
pub use verdict::Verdict;

/// 1-based slot identifier. Slots are processed in increasing id order.
pub type SlotId = usize;

/// 1-based resource identifier. Resource ids share the slot id space:
/// a scenario with `m` slots has exactly the resources `1..=m`.
pub type ResourceId = usize;
