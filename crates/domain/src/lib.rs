//! Match record data model.
//!
//! This crate defines the immutable input the index is built from:
//! - [`GameRecord`] — one fully-decoded match: metadata, rosters, and the
//!   ordered event sequence
//! - [`Event`] and its optional nested sub-records ([`PitchData`],
//!   [`ContactData`], [`FirstFielderData`], [`RunnerData`])
//! - [`EventView`] — a read-only, absence-safe projection of one event in
//!   its match context
//!
//! Decoding raw save files into these types is an external concern; the
//! types here are the contract that decoder must satisfy, with field
//! presence represented faithfully (`Option`, never a default stand-in).

pub mod error;
pub mod game;

pub use error::ConstructionError;
pub use game::event::{
    ContactData, Event, EventBuilder, FirstFielderData, PitchData, RunnerData,
};
pub use game::record::{GameMeta, GameRecord, RosterEntry, TeamRoster};
pub use game::view::EventView;
