//! Verdict (outcome) model.
//!
//! The solver recognizes exactly two outcomes per scenario: feasible or
//! infeasible. There is no third "malformed" outcome — malformed input is
//! rejected by the validation layer before a scenario reaches the solver.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one scenario evaluation.
///
/// Rendered as the literal token `yes` (feasible) or `no` (infeasible)
/// in the text batch format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// A valid resource-to-slot bijection exists.
    Feasible,
    /// No valid bijection exists.
    Infeasible,
}

impl Verdict {
    /// Whether this verdict is feasible.
    #[inline]
    pub fn is_feasible(self) -> bool {
        matches!(self, Verdict::Feasible)
    }

    /// The canonical output token: `"yes"` or `"no"`.
    pub fn as_token(self) -> &'static str {
        match self {
            Verdict::Feasible => "yes",
            Verdict::Infeasible => "no",
        }
    }
}

impl From<bool> for Verdict {
    fn from(feasible: bool) -> Self {
        if feasible {
            Verdict::Feasible
        } else {
            Verdict::Infeasible
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens() {
        assert_eq!(Verdict::Feasible.as_token(), "yes");
        assert_eq!(Verdict::Infeasible.as_token(), "no");
        assert_eq!(Verdict::Feasible.to_string(), "yes");
    }

    #[test]
    fn test_is_feasible() {
        assert!(Verdict::Feasible.is_feasible());
        assert!(!Verdict::Infeasible.is_feasible());
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(Verdict::from(true), Verdict::Feasible);
        assert_eq!(Verdict::from(false), Verdict::Infeasible);
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Verdict::Infeasible).unwrap();
        let back: Verdict = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Verdict::Infeasible);
    }
}
