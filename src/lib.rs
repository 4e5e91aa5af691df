//! Assignment feasibility framework for the U-Engine ecosystem.
//!
//! Decides whether a bijective assignment of labeled resources to labeled
//! slots exists that satisfies per-agent preference constraints under an
//! ordered slot-processing rule. The crate defines the assignment domain
//! language and a single-pass greedy feasibility solver — it reports
//! feasibility only, never a constructed assignment.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Scenario`, `Agent`, `Verdict`
//! - **`validation`**: Input integrity checks (id ranges, empty or
//!   duplicated preference lists)
//! - **`solver`**: Greedy feasibility solver and batch summary metrics
//! - **`text`**: Whitespace-token batch format (parse scenarios, render
//!   `yes`/`no` verdicts)
//!
//! # Architecture
//!
//! This crate sits at Layer 2 (Algorithms) in the U-Engine ecosystem.
//! It contains no time, calendar, or capacity concepts — scheduling and
//! routing domains are defined by consumers at higher layers.
//!
//! # References
//!
//! - Hall (1935), "On Representatives of Subsets"
//! - Lovász & Plummer (1986), "Matching Theory"

pub mod models;
pub mod solver;
pub mod text;
pub mod validation;
