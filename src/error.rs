//! Error types for the fallible edges of the crate.
//!
//! Allocation and scoring never fail: degenerate input produces an empty
//! or partial result. Only period construction, configuration loading and
//! shift-type parsing return errors.

use thiserror::Error;

/// Invalid target month.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    /// Month outside 1..=12.
    #[error("month {0} is out of range (expected 1..=12)")]
    InvalidMonth(u32),
    /// Year not representable by the calendar.
    #[error("year {0} is out of the supported calendar range")]
    InvalidYear(i32),
}

/// Configuration document could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed JSON or wrong field types.
    #[error("invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field parsed but holds an unusable value.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String,
    },
}

/// Unknown shift-type label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown shift type `{0}` (expected morning, evening or night)")]
pub struct ParseShiftTypeError(pub String);
