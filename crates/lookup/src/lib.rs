//! Static code↔name lookup tables and categorical axis domains.
//!
//! The tables mirror the fixed enumerations baked into the game: character
//! identities, team and stadium names, and the categorical vocabularies
//! (at-bat outcomes, pitch types, contact types, ...). They are immutable,
//! constructed once at first use, and accessed through a bidirectional
//! capability — no runtime mutation and no guess-the-key-type coercion.
//!
//! [`CategoryDomain`] packages the canonical accepted-value set per
//! categorical axis; the index builder uses it to pre-seed every bucket so
//! "zero occurrences" queries return an empty set rather than a
//! missing-key failure.

pub mod domain;
pub mod table;
pub mod tables;

pub use domain::CategoryDomain;
pub use table::{CharacterRef, LookupTable};
pub use tables::{
    base_character_name, canonical_stadium_name, CHARACTERS, CHARGE_TYPES, CONTACT_TYPES,
    FIELDER_ACTIONS, FIELDER_BOBBLES, FIELDER_POSITIONS, INPUT_DIRECTIONS, MANUAL_SELECT_STATES,
    OUTCOMES, OUT_TYPES, PITCH_TYPES, STADIUMS, STEAL_TYPES, SWING_TYPES, TEAMS,
};
