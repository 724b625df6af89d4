//! Declarative payload validation
//!
//! Write payloads are validated before any persistence side effect: a
//! [`Ruleset`] runs reusable field [`validators`] in a fixed declaration
//! order and collects structured per-field failures.

pub mod ruleset;
pub mod validators;

pub use ruleset::{Rule, Ruleset};
