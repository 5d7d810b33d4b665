//! Query validation error types.

use thiserror::Error;

/// Errors raised when a query argument falls outside its documented
/// domain.
///
/// Raised synchronously to the caller; the engine's state is never
/// affected. An empty input list is not an error — it yields an empty
/// result set.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A categorical query named a value its axis does not accept.
    #[error("unknown {axis} value '{value}'; accepted values: {accepted:?}")]
    UnknownCategory {
        axis: &'static str,
        value: String,
        accepted: Vec<String>,
    },

    /// An ordinal query named a value outside its axis's seeded domain.
    #[error("{axis} value {value} is outside the accepted domain {min}..={max}")]
    OutOfDomain {
        axis: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A runner query named a base outside -3..=3.
    #[error("invalid base number {0}; accepted base numbers are -3..=3")]
    InvalidBase(i8),

    /// A runner query named more than three bases.
    #[error("too many base numbers ({0}); at most 3 bases can be named")]
    TooManyBases(usize),

    /// A runner query combined 0 ("bases empty") with a required base.
    #[error("base number 0 (bases empty) cannot be combined with a required base")]
    ContradictoryBases,

    /// A half-inning selector was neither 0 nor 1.
    #[error("invalid half-inning {0}; accepted values are 0 or 1")]
    InvalidHalfInning(i64),
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, ValidationError>;
