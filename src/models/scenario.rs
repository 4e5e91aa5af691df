//! Scenario (problem instance) model.
//!
//! A scenario is one independent feasibility question: `m` slots, `m`
//! resources sharing the same id space, and a set of agents that each
//! target one slot and like a non-empty set of resources. Scenarios are
//! built by a parsing layer, validated by [`crate::validation`], and
//! handed to the solver as an already-validated structure.

use serde::{Deserialize, Serialize};

use super::{ResourceId, SlotId};

/// An agent constraining resource placement.
///
/// Each agent targets exactly one slot and likes a non-empty set of
/// resources. The liked list is a set in effect — ordering carries no
/// meaning, and the validation layer rejects duplicates. An agent
/// constrains resource eligibility only until the slot-processing loop
/// reaches its target slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// Slot this agent targets (1-based).
    pub target_slot: SlotId,
    /// Resources this agent likes (1-based ids).
    pub liked: Vec<ResourceId>,
}

impl Agent {
    /// Creates an agent targeting the given slot, with no liked resources.
    pub fn new(target_slot: SlotId) -> Self {
        Self {
            target_slot,
            liked: Vec::new(),
        }
    }

    /// Sets the liked-resource list.
    pub fn with_liked(mut self, liked: impl Into<Vec<ResourceId>>) -> Self {
        self.liked = liked.into();
        self
    }

    /// Adds a single liked resource.
    pub fn with_liked_resource(mut self, resource: ResourceId) -> Self {
        self.liked.push(resource);
        self
    }

    /// Whether this agent likes the given resource.
    pub fn likes(&self, resource: ResourceId) -> bool {
        self.liked.contains(&resource)
    }

    /// Number of liked resources.
    pub fn liked_count(&self) -> usize {
        self.liked.len()
    }
}

/// One independent feasibility problem instance.
///
/// A successful evaluation is a bijection between the resource universe
/// `1..=slot_count` and the slot universe `1..=slot_count`. Scenarios in
/// a batch share no state; evaluating one never affects another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Number of slots (and, equally, of resources).
    pub slot_count: usize,
    /// Agents constraining the assignment. May be empty.
    pub agents: Vec<Agent>,
    /// Optional human-readable label (for batch reporting).
    pub label: String,
}

impl Scenario {
    /// Creates a scenario with the given slot count and no agents.
    pub fn new(slot_count: usize) -> Self {
        Self {
            slot_count,
            agents: Vec::new(),
            label: String::new(),
        }
    }

    /// Adds an agent.
    pub fn with_agent(mut self, agent: Agent) -> Self {
        self.agents.push(agent);
        self
    }

    /// Sets all agents at once.
    pub fn with_agents(mut self, agents: impl Into<Vec<Agent>>) -> Self {
        self.agents = agents.into();
        self
    }

    /// Sets a human-readable label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Number of agents.
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// Whether no agent constrains this scenario.
    ///
    /// Unconstrained scenarios are trivially feasible: every slot is free
    /// and every resource is safe.
    pub fn is_unconstrained(&self) -> bool {
        self.agents.is_empty()
    }

    /// Agents targeting the given slot.
    pub fn agents_targeting(&self, slot: SlotId) -> impl Iterator<Item = &Agent> {
        self.agents.iter().filter(move |a| a.target_slot == slot)
    }

    /// Total preference-list length across all agents.
    ///
    /// Together with `slot_count`, this bounds the solver's running time.
    pub fn total_liked_len(&self) -> usize {
        self.agents.iter().map(|a| a.liked.len()).sum()
    }
}
