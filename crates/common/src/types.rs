use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Identifier of an event within a single match.
///
/// Wraps the event's zero-based position in the match's event sequence.
/// Positions are stable, unique, and never reused; the sequence order is
/// the only temporal relationship the index relies on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EventId(u32);

impl EventId {
    /// Creates an event ID from a raw sequence position.
    pub fn new(position: u32) -> Self {
        Self(position)
    }

    /// Returns the zero-based sequence position.
    pub fn position(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EventId {
    fn from(position: u32) -> Self {
        Self(position)
    }
}

impl From<EventId> for u32 {
    fn from(id: EventId) -> Self {
        id.0
    }
}

/// A set of event identifiers, the result currency of every query.
///
/// A `BTreeSet` keeps bucket contents deterministic: two builds over the
/// same match produce identical sets in identical iteration order.
pub type EventSet = BTreeSet<EventId>;

/// One of the two sides in a match.
///
/// The numeric sense (0 = away, 1 = home) matches the modern record
/// format; older format versions flip it, which `GameMeta` corrects for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSide {
    /// The visiting side (index 0).
    Away,
    /// The hosting side (index 1).
    Home,
}

impl TeamSide {
    /// Returns the numeric side index (0 for away, 1 for home).
    pub fn index(&self) -> usize {
        match self {
            TeamSide::Away => 0,
            TeamSide::Home => 1,
        }
    }

    /// Returns the opposing side.
    pub fn other(&self) -> TeamSide {
        match self {
            TeamSide::Away => TeamSide::Home,
            TeamSide::Home => TeamSide::Away,
        }
    }
}

impl std::fmt::Display for TeamSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamSide::Away => write!(f, "away"),
            TeamSide::Home => write!(f, "home"),
        }
    }
}

impl TryFrom<u8> for TeamSide {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TeamSide::Away),
            1 => Ok(TeamSide::Home),
            other => Err(other),
        }
    }
}

/// One of the three occupiable bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Base {
    First,
    Second,
    Third,
}

impl Base {
    /// All bases in first-to-third order.
    pub const ALL: [Base; 3] = [Base::First, Base::Second, Base::Third];

    /// Returns the conventional base number (1, 2, or 3).
    pub fn number(&self) -> u8 {
        match self {
            Base::First => 1,
            Base::Second => 2,
            Base::Third => 3,
        }
    }

    /// Creates a base from its conventional number.
    pub fn try_from_number(number: u8) -> Option<Base> {
        match number {
            1 => Some(Base::First),
            2 => Some(Base::Second),
            3 => Some(Base::Third),
            _ => None,
        }
    }
}

impl std::fmt::Display for Base {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Base::First => write!(f, "1B"),
            Base::Second => write!(f, "2B"),
            Base::Third => write!(f, "3B"),
        }
    }
}

/// A fixed position in a team's nine-slot lineup.
///
/// Distinct from the character occupying it; slots are always 0..=8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RosterSlot(u8);

impl RosterSlot {
    /// Number of slots in a lineup.
    pub const COUNT: usize = 9;

    /// Creates a roster slot, rejecting values outside 0..=8.
    pub fn new(slot: u8) -> Option<Self> {
        if usize::from(slot) < Self::COUNT {
            Some(Self(slot))
        } else {
            None
        }
    }

    /// Returns the raw slot number.
    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Returns the slot as a lineup array index.
    pub fn as_index(&self) -> usize {
        usize::from(self.0)
    }

    /// Iterates every slot in lineup order.
    pub fn all() -> impl Iterator<Item = RosterSlot> {
        (0..Self::COUNT as u8).map(RosterSlot)
    }
}

impl std::fmt::Display for RosterSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_id_preserves_position() {
        let id = EventId::new(42);
        assert_eq!(id.position(), 42);
        assert_eq!(u32::from(id), 42);
    }

    #[test]
    fn event_id_orders_by_position() {
        assert!(EventId::new(3) < EventId::new(10));
    }

    #[test]
    fn event_id_serialization_roundtrip() {
        let id = EventId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "7");
        let back: EventId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn team_side_index_and_other() {
        assert_eq!(TeamSide::Away.index(), 0);
        assert_eq!(TeamSide::Home.index(), 1);
        assert_eq!(TeamSide::Away.other(), TeamSide::Home);
        assert_eq!(TeamSide::Home.other(), TeamSide::Away);
    }

    #[test]
    fn team_side_rejects_out_of_range() {
        assert_eq!(TeamSide::try_from(0), Ok(TeamSide::Away));
        assert_eq!(TeamSide::try_from(1), Ok(TeamSide::Home));
        assert_eq!(TeamSide::try_from(2), Err(2));
    }

    #[test]
    fn base_numbers_roundtrip() {
        for base in Base::ALL {
            assert_eq!(Base::try_from_number(base.number()), Some(base));
        }
        assert_eq!(Base::try_from_number(0), None);
        assert_eq!(Base::try_from_number(4), None);
    }

    #[test]
    fn roster_slot_bounds() {
        assert!(RosterSlot::new(0).is_some());
        assert!(RosterSlot::new(8).is_some());
        assert!(RosterSlot::new(9).is_none());
        assert_eq!(RosterSlot::all().count(), 9);
    }
}
