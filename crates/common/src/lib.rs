//! Shared types for the match index and query engine.
//!
//! This crate provides the small identifier and enum types used across
//! the workspace: event identities, team sides, bases, and roster slots.

pub mod types;

pub use types::{Base, EventId, EventSet, RosterSlot, TeamSide};
