//! Plain-text batch format.
//!
//! Whitespace-tokenized scenario batches: a scenario count `T`, then per
//! scenario the agent count `n` and slot count `m`, then `n` agent
//! records of the form `target k r1 .. rk`. Verdicts render as the
//! literal tokens `yes`/`no`, one per line, in scenario input order.
//!
//! Parsing is purely structural — it checks the token stream's shape and
//! numeric form but not id ranges. Run [`crate::validation`] on the
//! parsed scenarios before handing them to the solver.

use crate::models::{Agent, Scenario, Verdict};

/// A batch-format parse error.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Error category.
    pub kind: ParseErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The token stream ended before the declared structure was complete.
    UnexpectedEnd,
    /// A token was not a non-negative integer.
    InvalidToken,
}

impl ParseError {
    fn new(kind: ParseErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn next_count<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<usize, ParseError> {
    let token = tokens.next().ok_or_else(|| {
        ParseError::new(
            ParseErrorKind::UnexpectedEnd,
            format!("Input ended while reading {what}"),
        )
    })?;
    token.parse().map_err(|_| {
        ParseError::new(
            ParseErrorKind::InvalidToken,
            format!("Expected {what}, got '{token}'"),
        )
    })
}

/// Parses a whitespace-tokenized scenario batch.
///
/// # Format
/// ```text
/// T
/// n m
/// target k r1 .. rk     (n records)
/// ...                   (T scenarios)
/// ```
///
/// Token boundaries are any whitespace; line structure is not
/// significant.
pub fn parse_batch(input: &str) -> Result<Vec<Scenario>, ParseError> {
    let mut tokens = input.split_whitespace();

    let scenario_count = next_count(&mut tokens, "scenario count")?;
    let mut scenarios = Vec::with_capacity(scenario_count);

    for _ in 0..scenario_count {
        let agent_count = next_count(&mut tokens, "agent count")?;
        let slot_count = next_count(&mut tokens, "slot count")?;

        let mut scenario = Scenario::new(slot_count);
        for _ in 0..agent_count {
            let target = next_count(&mut tokens, "target slot")?;
            let liked_count = next_count(&mut tokens, "liked-resource count")?;
            let mut liked = Vec::with_capacity(liked_count);
            for _ in 0..liked_count {
                liked.push(next_count(&mut tokens, "liked resource id")?);
            }
            scenario = scenario.with_agent(Agent::new(target).with_liked(liked));
        }
        scenarios.push(scenario);
    }

    Ok(scenarios)
}

/// Renders verdicts as `yes`/`no` tokens, one per line, in input order.
pub fn render_verdicts(verdicts: &[Verdict]) -> String {
    let mut out = String::new();
    for v in verdicts {
        out.push_str(v.as_token());
        out.push('\n');
    }
    out
}
