//! Index axis structures and their identities.
//!
//! An axis maps discrete values to buckets of event ids. Three flavors
//! cover every queryable dimension: categorical (string-valued), ordinal
//! (integer-valued over a seeded inclusive range, with a fixed threshold
//! polarity), and banded (float-valued, bucketed at two decimal places).
//! Axis identities are closed enums so the set of dimensions the engine
//! answers for is auditable in one place.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use common::{EventId, EventSet};
use serde::{Deserialize, Serialize};

/// Direction a signed threshold query reads on an ordinal axis.
///
/// Preserved per axis from the legacy query convention: most axes are
/// ascending ("at least"), pitcher stamina is descending ("at most").
/// The two directions must not be unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    /// A negated magnitude means "this value or greater".
    Ascending,
    /// A negated magnitude means "this value or less".
    Descending,
}

/// Identity of a categorical (string-valued) axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoricalKind {
    Outcome,
    PitchType,
    ChargeType,
    SwingType,
    ContactType,
    InputDirection,
    FielderPosition,
}

/// Identity of an ordinal (integer-valued) axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrdinalKind {
    Inning,
    HalfInning,
    Balls,
    Strikes,
    OutsInInning,
    AwayScore,
    HomeScore,
    Rbi,
    ChemLinks,
    PitcherStamina,
    StarChance,
    OutsDuringPlay,
    InStrikezone,
    ContactFrame,
}

/// Identity of a banded (float-valued) axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BandedKind {
    StrikezonePosition,
    ContactPositionX,
}

/// Identity of a boolean marker set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    Steal,
    StarPitch,
    Bobble,
    FireballBurn,
    FiveStarSwing,
    SlidingCatch,
    WallJump,
    ManualSelection,
    FirstPitchOfAtBat,
    LastPitchOfAtBat,
    AwayLeading,
    HomeLeading,
    Tied,
    LeadChanged,
}

/// A string-valued axis: one bucket per accepted value.
///
/// Buckets are pre-seeded from the category domain so a value with zero
/// occurrences answers with an empty set rather than a missing key.
#[derive(Debug, Clone)]
pub struct CategoricalAxis {
    name: &'static str,
    partition: bool,
    buckets: BTreeMap<String, EventSet>,
}

impl CategoricalAxis {
    /// Creates an axis with one empty bucket per accepted value.
    pub fn seeded(name: &'static str, partition: bool, values: &[String]) -> Self {
        Self {
            name,
            partition,
            buckets: values
                .iter()
                .map(|v| (v.clone(), EventSet::new()))
                .collect(),
        }
    }

    /// Axis name for diagnostics and validation messages.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether every event contributes to exactly one bucket.
    pub fn is_partition(&self) -> bool {
        self.partition
    }

    /// Files an event under a value; returns false (and files nothing)
    /// when the value is outside the seeded domain.
    pub fn insert(&mut self, value: &str, id: EventId) -> bool {
        match self.buckets.get_mut(value) {
            Some(bucket) => {
                bucket.insert(id);
                true
            }
            None => false,
        }
    }

    /// Returns the bucket for a value, if the value is accepted.
    pub fn bucket(&self, value: &str) -> Option<&EventSet> {
        self.buckets.get(value)
    }

    /// The accepted values, in bucket order.
    pub fn accepted(&self) -> Vec<String> {
        self.buckets.keys().cloned().collect()
    }

    /// Iterates `(value, bucket)` pairs in value order.
    pub fn buckets(&self) -> impl Iterator<Item = (&str, &EventSet)> {
        self.buckets.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// An integer-valued axis seeded over an inclusive range.
#[derive(Debug, Clone)]
pub struct OrdinalAxis {
    name: &'static str,
    polarity: Polarity,
    buckets: BTreeMap<i64, EventSet>,
}

impl OrdinalAxis {
    /// Creates an axis with one empty bucket per value in the range.
    pub fn seeded(name: &'static str, polarity: Polarity, range: RangeInclusive<i64>) -> Self {
        Self {
            name,
            polarity,
            buckets: range.map(|v| (v, EventSet::new())).collect(),
        }
    }

    /// Axis name for diagnostics and validation messages.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The direction signed threshold queries read on this axis.
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Smallest seeded value.
    pub fn min(&self) -> i64 {
        self.buckets.keys().next().copied().unwrap_or(0)
    }

    /// Largest seeded value.
    pub fn max(&self) -> i64 {
        self.buckets.keys().next_back().copied().unwrap_or(0)
    }

    /// Whether a value falls inside the seeded domain.
    pub fn contains(&self, value: i64) -> bool {
        self.buckets.contains_key(&value)
    }

    /// Files an event under a value; returns false (and files nothing)
    /// when the value is outside the seeded range.
    pub fn insert(&mut self, value: i64, id: EventId) -> bool {
        match self.buckets.get_mut(&value) {
            Some(bucket) => {
                bucket.insert(id);
                true
            }
            None => false,
        }
    }

    /// Returns the bucket for an exact value.
    pub fn bucket(&self, value: i64) -> Option<&EventSet> {
        self.buckets.get(&value)
    }

    /// Unions the buckets for all values `>= threshold`.
    pub fn at_least(&self, threshold: i64) -> EventSet {
        self.buckets
            .range(threshold..)
            .flat_map(|(_, bucket)| bucket.iter().copied())
            .collect()
    }

    /// Unions the buckets for all values `<= threshold`.
    pub fn at_most(&self, threshold: i64) -> EventSet {
        self.buckets
            .range(..=threshold)
            .flat_map(|(_, bucket)| bucket.iter().copied())
            .collect()
    }

    /// Iterates `(value, bucket)` pairs in value order.
    pub fn buckets(&self) -> impl Iterator<Item = (i64, &EventSet)> {
        self.buckets.iter().map(|(k, v)| (*k, v))
    }
}

/// A float-valued axis bucketed at two decimal places.
///
/// Keys are centi-units (`round(value * 100)`); buckets appear on first
/// use since the value range is not known ahead of the pass.
#[derive(Debug, Clone, Default)]
pub struct BandedAxis {
    buckets: BTreeMap<i32, EventSet>,
}

impl BandedAxis {
    /// Creates an empty axis.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps a raw value to its two-decimal band.
    pub fn band(value: f32) -> i32 {
        (value * 100.0).round() as i32
    }

    /// Files an event under the value's band.
    pub fn insert(&mut self, value: f32, id: EventId) {
        self.buckets.entry(Self::band(value)).or_default().insert(id);
    }

    /// Unions the buckets whose band magnitude is at least that of
    /// `min_magnitude`.
    pub fn at_least_magnitude(&self, min_magnitude: f32) -> EventSet {
        let floor = Self::band(min_magnitude).abs();
        self.buckets
            .iter()
            .filter(|(band, _)| band.abs() >= floor)
            .flat_map(|(_, bucket)| bucket.iter().copied())
            .collect()
    }

    /// Iterates `(band, bucket)` pairs in band order.
    pub fn buckets(&self) -> impl Iterator<Item = (i32, &EventSet)> {
        self.buckets.iter().map(|(k, v)| (*k, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> EventId {
        EventId::new(n)
    }

    #[test]
    fn categorical_insert_respects_domain() {
        let values = vec!["Curve".to_string(), "Charge".to_string()];
        let mut axis = CategoricalAxis::seeded("pitch type", false, &values);
        assert!(axis.insert("Curve", id(0)));
        assert!(!axis.insert("Knuckle", id(1)));
        assert_eq!(axis.bucket("Curve").unwrap().len(), 1);
        assert!(axis.bucket("Charge").unwrap().is_empty());
        assert!(axis.bucket("Knuckle").is_none());
    }

    #[test]
    fn ordinal_threshold_unions() {
        let mut axis = OrdinalAxis::seeded("strikes", Polarity::Ascending, 0..=4);
        axis.insert(0, id(0));
        axis.insert(2, id(1));
        axis.insert(4, id(2));
        assert_eq!(axis.at_least(2), [id(1), id(2)].into_iter().collect());
        assert_eq!(axis.at_most(2), [id(0), id(1)].into_iter().collect());
    }

    #[test]
    fn ordinal_insert_outside_range_is_rejected() {
        let mut axis = OrdinalAxis::seeded("balls", Polarity::Ascending, 0..=3);
        assert!(!axis.insert(7, id(0)));
        assert_eq!(axis.min(), 0);
        assert_eq!(axis.max(), 3);
    }

    #[test]
    fn banded_axis_rounds_to_two_decimals() {
        assert_eq!(BandedAxis::band(-0.260153), -26);
        assert_eq!(BandedAxis::band(0.25), 25);
        assert_eq!(BandedAxis::band(0.0), 0);
    }

    #[test]
    fn banded_magnitude_query_is_symmetric() {
        let mut axis = BandedAxis::new();
        axis.insert(-0.75, id(0));
        axis.insert(0.75, id(1));
        axis.insert(0.10, id(2));
        let far = axis.at_least_magnitude(0.5);
        assert_eq!(far, [id(0), id(1)].into_iter().collect());
        // Negative magnitudes read the same as positive ones.
        assert_eq!(axis.at_least_magnitude(-0.5), far);
    }
}
