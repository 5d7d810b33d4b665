//! The immutable index snapshot produced by one build pass.

use std::collections::HashMap;

use common::{Base, EventId, EventSet};

use crate::axis::{
    BandedAxis, BandedKind, CategoricalAxis, CategoricalKind, MarkerKind, OrdinalAxis, OrdinalKind,
};

/// Per-character participation buckets.
#[derive(Debug, Clone, Default)]
pub struct Participation {
    /// Events where the character was at bat.
    pub batting: EventSet,

    /// Events where the character was pitching.
    pub pitching: EventSet,

    /// Events where the character was the first fielder on the ball.
    pub fielding: EventSet,
}

/// Every index built over one match, frozen after the build pass.
///
/// The snapshot has no interior mutability and is safe to share
/// read-only across concurrent query callers. Its scope is exactly one
/// match: no cross-match sharing or merging.
#[derive(Debug, Clone)]
pub struct MatchIndex {
    pub(crate) event_count: u32,
    pub(crate) categorical: HashMap<CategoricalKind, CategoricalAxis>,
    pub(crate) ordinal: HashMap<OrdinalKind, OrdinalAxis>,
    pub(crate) banded: HashMap<BandedKind, BandedAxis>,
    pub(crate) markers: HashMap<MarkerKind, EventSet>,
    /// Slot 0 is the "no runners at all" marker; slots 1..=3 hold the
    /// per-base occupancy buckets.
    pub(crate) runners: [EventSet; 4],
    pub(crate) participation: HashMap<String, Participation>,
    /// Player display names with version correction already applied.
    pub(crate) away_player: String,
    pub(crate) home_player: String,
    /// The last event and its RBI, for walkoff resolution.
    pub(crate) final_event: Option<(EventId, u8)>,
}

impl MatchIndex {
    /// Number of events the index covers.
    pub fn event_count(&self) -> u32 {
        self.event_count
    }

    /// Returns a categorical axis by identity.
    ///
    /// Every kind is seeded at build time, so lookups cannot miss.
    pub fn categorical(&self, kind: CategoricalKind) -> &CategoricalAxis {
        &self.categorical[&kind]
    }

    /// Returns an ordinal axis by identity.
    pub fn ordinal(&self, kind: OrdinalKind) -> &OrdinalAxis {
        &self.ordinal[&kind]
    }

    /// Returns a banded axis by identity.
    pub fn banded(&self, kind: BandedKind) -> &BandedAxis {
        &self.banded[&kind]
    }

    /// Returns a marker set by identity.
    pub fn marker(&self, kind: MarkerKind) -> &EventSet {
        &self.markers[&kind]
    }

    /// Events where a runner occupied the given base.
    pub fn events_with_runner(&self, base: Base) -> &EventSet {
        &self.runners[base.number() as usize]
    }

    /// Events where all three bases were empty.
    pub fn events_with_bases_empty(&self) -> &EventSet {
        &self.runners[0]
    }

    /// A character's participation buckets, if the character appeared in
    /// either roster.
    pub fn participation(&self, character: &str) -> Option<&Participation> {
        self.participation.get(character)
    }

    /// Iterates every indexed character and its participation buckets.
    pub fn participants(&self) -> impl Iterator<Item = (&str, &Participation)> {
        self.participation.iter().map(|(k, v)| (k.as_str(), v))
    }
}
