//! Data-model error types.

use common::EventId;
use thiserror::Error;

/// Errors raised when a match record violates a mandatory-field invariant.
///
/// All variants are fatal at index-build time: no partial engine is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// The stored event counters do not match the sequence positions.
    ///
    /// The counter is compared modulo 256 because historical format
    /// versions overflowed it at 256 while identity remained the
    /// sequence position.
    #[error("non-contiguous event ids: expected position {expected}, found counter {found}")]
    NonContiguousEvents { expected: u32, found: u32 },

    /// An event's half-inning value selects neither side.
    #[error("event {event}: half-inning value {value} is outside 0..=1")]
    InvalidHalfInning { event: EventId, value: u8 },

    /// An event names a roster slot outside the nine-slot lineup.
    #[error("event {event}: {role} roster slot {slot} is outside the nine-slot lineup")]
    UnknownRosterSlot {
        event: EventId,
        role: &'static str,
        slot: u8,
    },

    /// A metadata timestamp does not match the legacy wall-clock format.
    #[error("timestamp '{0}' does not match the legacy 'Day Mon DD HH:MM:SS YYYY' format")]
    InvalidTimestamp(String),
}

/// Result type for record construction and validation.
pub type Result<T> = std::result::Result<T, ConstructionError>;
