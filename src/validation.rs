//! Input validation for assignment scenarios.
//!
//! Checks structural integrity of a scenario before solving. Detects:
//! - Empty universe (zero slots)
//! - Target slot ids outside `[1, m]`
//! - Liked resource ids outside `[1, m]`
//! - Empty preference lists
//! - Duplicate entries within one agent's preference list
//!
//! The solver itself performs no bounds checking; every scenario must
//! pass validation before evaluation.

use crate::models::Scenario;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The scenario has zero slots.
    EmptyUniverse,
    /// An agent targets a slot outside `[1, m]`.
    TargetOutOfRange,
    /// An agent likes a resource outside `[1, m]`.
    ResourceOutOfRange,
    /// An agent has an empty preference list.
    EmptyPreferenceList,
    /// An agent lists the same resource more than once.
    DuplicateLikedResource,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates one scenario.
///
/// Checks:
/// 1. At least one slot (`m >= 1`)
/// 2. Every target slot is in `[1, m]`
/// 3. Every agent likes at least one resource
/// 4. Every liked resource id is in `[1, m]`
/// 5. No agent lists the same resource twice
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_scenario(scenario: &Scenario) -> ValidationResult {
    let mut errors = Vec::new();
    let m = scenario.slot_count;

    if m == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyUniverse,
            "Scenario has zero slots",
        ));
    }

    for (idx, agent) in scenario.agents.iter().enumerate() {
        if agent.target_slot == 0 || agent.target_slot > m {
            errors.push(ValidationError::new(
                ValidationErrorKind::TargetOutOfRange,
                format!(
                    "Agent {idx} targets slot {} outside [1, {m}]",
                    agent.target_slot
                ),
            ));
        }

        if agent.liked.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyPreferenceList,
                format!("Agent {idx} has an empty preference list"),
            ));
        }

        let mut seen = HashSet::new();
        for &resource in &agent.liked {
            if resource == 0 || resource > m {
                errors.push(ValidationError::new(
                    ValidationErrorKind::ResourceOutOfRange,
                    format!("Agent {idx} likes resource {resource} outside [1, {m}]"),
                ));
            }
            if !seen.insert(resource) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateLikedResource,
                    format!("Agent {idx} lists resource {resource} more than once"),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates every scenario in a batch.
///
/// Errors from all scenarios are accumulated, with the scenario index
/// prepended to each message.
pub fn validate_batch(scenarios: &[Scenario]) -> ValidationResult {
    let mut errors = Vec::new();

    for (idx, scenario) in scenarios.iter().enumerate() {
        if let Err(scenario_errors) = validate_scenario(scenario) {
            for e in scenario_errors {
                errors.push(ValidationError::new(
                    e.kind,
                    format!("Scenario {idx}: {}", e.message),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
