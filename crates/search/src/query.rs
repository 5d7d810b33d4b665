//! Stateless set-algebra query surface over a built match index.
//!
//! Every query is a pure function from the immutable [`MatchIndex`] to a
//! set of event ids. There is no result cache: result sets are bounded
//! by match length and cheap to recompute.

use common::{Base, EventSet};
use domain::{ConstructionError, GameRecord};
use lookup::CategoryDomain;
use serde::{Deserialize, Serialize};

use crate::axis::{BandedKind, CategoricalKind, MarkerKind, OrdinalKind, Polarity};
use crate::builder::IndexBuilder;
use crate::error::{Result, ValidationError};
use crate::index::MatchIndex;

/// A typed request against an ordinal axis.
///
/// The legacy convention encodes thresholds as negated magnitudes in
/// plain integer lists; [`RangeQuery::from_signed`] performs that
/// translation at the public boundary, honoring the axis's polarity, so
/// the sign trick never leaks into the execution path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeQuery {
    /// Exactly this value.
    Exact(i64),
    /// Any of these values.
    AnyOf(Vec<i64>),
    /// This value or greater.
    AtLeast(i64),
    /// This value or less.
    AtMost(i64),
}

impl RangeQuery {
    /// Translates one legacy signed value: non-negative means exact, a
    /// negated magnitude means the open-ended side given by the axis's
    /// polarity.
    pub fn from_signed(value: i64, polarity: Polarity) -> Self {
        if value >= 0 {
            RangeQuery::Exact(value)
        } else {
            match polarity {
                Polarity::Ascending => RangeQuery::AtLeast(-value),
                Polarity::Descending => RangeQuery::AtMost(-value),
            }
        }
    }
}

/// Handedness selector for the contact-quality convenience queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
    Both,
}

/// Hit magnitude selector for the hit-family convenience query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitKind {
    Single,
    Double,
    Triple,
    HomeRun,
}

impl HitKind {
    fn outcome(&self) -> &'static str {
        match self {
            HitKind::Single => "Single",
            HitKind::Double => "Double",
            HitKind::Triple => "Triple",
            HitKind::HomeRun => "HR",
        }
    }
}

/// Outcomes that end the at-bat with the batter (or a runner) out.
const OUT_FAMILY: [&str; 7] = [
    "Strikeout",
    "Out",
    "Caught",
    "Caught line-drive",
    "SacFly",
    "Ground ball double Play",
    "Foul catch",
];

/// The public, stateless query surface over one match's indices.
///
/// Construction is the only state transition: unbuilt → ready. After
/// that the engine is immutable and may be shared freely across
/// concurrent readers.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    index: MatchIndex,
}

impl QueryEngine {
    /// Builds the index over a record and wraps it for querying.
    pub fn build(
        record: &GameRecord,
        domain: &CategoryDomain,
    ) -> std::result::Result<Self, ConstructionError> {
        Ok(Self {
            index: IndexBuilder::build(record, domain)?,
        })
    }

    /// Wraps an already-built index.
    pub fn from_index(index: MatchIndex) -> Self {
        Self { index }
    }

    /// The underlying index snapshot.
    pub fn index(&self) -> &MatchIndex {
        &self.index
    }

    // ---- ordinal axes ----

    /// Answers a typed request against an ordinal axis.
    pub fn ordinal_events(&self, kind: OrdinalKind, query: &RangeQuery) -> Result<EventSet> {
        let axis = self.index.ordinal(kind);
        let check = |value: i64| -> Result<i64> {
            if axis.contains(value) {
                Ok(value)
            } else {
                Err(ValidationError::OutOfDomain {
                    axis: axis.name(),
                    value,
                    min: axis.min(),
                    max: axis.max(),
                })
            }
        };
        match query {
            RangeQuery::Exact(value) => {
                Ok(axis.bucket(check(*value)?).cloned().unwrap_or_default())
            }
            RangeQuery::AnyOf(values) => {
                let mut result = EventSet::new();
                for &value in values {
                    result.extend(axis.bucket(check(value)?).cloned().unwrap_or_default());
                }
                Ok(result)
            }
            RangeQuery::AtLeast(value) => Ok(axis.at_least(check(*value)?)),
            RangeQuery::AtMost(value) => Ok(axis.at_most(check(*value)?)),
        }
    }

    /// Answers a legacy signed-integer list against an ordinal axis,
    /// translating each element per the axis's polarity and unioning the
    /// results. An empty list yields an empty set.
    pub fn ordinal_signed_events(&self, kind: OrdinalKind, values: &[i64]) -> Result<EventSet> {
        let polarity = self.index.ordinal(kind).polarity();
        let mut result = EventSet::new();
        for &value in values {
            result.extend(self.ordinal_events(kind, &RangeQuery::from_signed(value, polarity))?);
        }
        Ok(result)
    }

    /// Events at the given ball counts (negative = that many or more).
    pub fn ball_events(&self, balls: &[i64]) -> Result<EventSet> {
        self.ordinal_signed_events(OrdinalKind::Balls, balls)
    }

    /// Events at the given strike counts (negative = that many or more).
    pub fn strike_events(&self, strikes: &[i64]) -> Result<EventSet> {
        self.ordinal_signed_events(OrdinalKind::Strikes, strikes)
    }

    /// Events at the given out counts (negative = that many or more).
    pub fn outs_in_inning_events(&self, outs: &[i64]) -> Result<EventSet> {
        self.ordinal_signed_events(OrdinalKind::OutsInInning, outs)
    }

    /// Events in the given innings (negative = that inning or later).
    pub fn inning_events(&self, innings: &[i64]) -> Result<EventSet> {
        self.ordinal_signed_events(OrdinalKind::Inning, innings)
    }

    /// Events at the given away-side scores (negative = that score or
    /// higher).
    pub fn away_score_events(&self, scores: &[i64]) -> Result<EventSet> {
        self.ordinal_signed_events(OrdinalKind::AwayScore, scores)
    }

    /// Events at the given home-side scores (negative = that score or
    /// higher).
    pub fn home_score_events(&self, scores: &[i64]) -> Result<EventSet> {
        self.ordinal_signed_events(OrdinalKind::HomeScore, scores)
    }

    /// Events with the given RBI counts (negative = that many or more).
    pub fn rbi_events(&self, rbi: &[i64]) -> Result<EventSet> {
        self.ordinal_signed_events(OrdinalKind::Rbi, rbi)
    }

    /// Events with the given chemistry-link counts (negative = that many
    /// or more).
    pub fn chem_link_events(&self, links: &[i64]) -> Result<EventSet> {
        self.ordinal_signed_events(OrdinalKind::ChemLinks, links)
    }

    /// Events with the given outs recorded during the play (negative =
    /// that many or more).
    pub fn outs_during_play_events(&self, outs: &[i64]) -> Result<EventSet> {
        self.ordinal_signed_events(OrdinalKind::OutsDuringPlay, outs)
    }

    /// Contacts on the given swing frames (negative = that frame or
    /// later).
    pub fn contact_frame_events(&self, frames: &[i64]) -> Result<EventSet> {
        self.ordinal_signed_events(OrdinalKind::ContactFrame, frames)
    }

    /// Events at the given pitcher stamina. This axis is descending: a
    /// negated magnitude means that stamina **or less**.
    pub fn pitcher_stamina_events(&self, stamina: &[i64]) -> Result<EventSet> {
        self.ordinal_signed_events(OrdinalKind::PitcherStamina, stamina)
    }

    /// Events in the given half-inning (0 = away batting, 1 = home
    /// batting).
    pub fn half_inning_events(&self, half_inning: i64) -> Result<EventSet> {
        if half_inning != 0 && half_inning != 1 {
            return Err(ValidationError::InvalidHalfInning(half_inning));
        }
        self.ordinal_events(OrdinalKind::HalfInning, &RangeQuery::Exact(half_inning))
    }

    /// Events with (or without) an active star chance.
    pub fn star_chance_events(&self, active: bool) -> EventSet {
        self.index
            .ordinal(OrdinalKind::StarChance)
            .bucket(i64::from(active))
            .cloned()
            .unwrap_or_default()
    }

    /// Pitches that crossed inside the strikezone.
    pub fn in_strikezone_events(&self) -> EventSet {
        self.index
            .ordinal(OrdinalKind::InStrikezone)
            .bucket(1)
            .cloned()
            .unwrap_or_default()
    }

    // ---- categorical axes ----

    fn categorical_events(&self, kind: CategoricalKind, value: &str) -> Result<EventSet> {
        let axis = self.index.categorical(kind);
        axis.bucket(value)
            .cloned()
            .ok_or_else(|| ValidationError::UnknownCategory {
                axis: axis.name(),
                value: value.to_string(),
                accepted: axis.accepted(),
            })
    }

    fn categorical_bucket(&self, kind: CategoricalKind, value: &str) -> EventSet {
        self.index
            .categorical(kind)
            .bucket(value)
            .cloned()
            .unwrap_or_default()
    }

    /// Events whose at-bat resolved to exactly this outcome.
    pub fn outcome_events(&self, outcome: &str) -> Result<EventSet> {
        self.categorical_events(CategoricalKind::Outcome, outcome)
    }

    /// Events where the named position made the first touch. Position
    /// abbreviations match case-insensitively ("ss" finds "SS").
    pub fn fielder_position_events(&self, position: &str) -> Result<EventSet> {
        let axis = self.index.categorical(CategoricalKind::FielderPosition);
        if axis.bucket(position).is_some() {
            return self.categorical_events(CategoricalKind::FielderPosition, position);
        }
        self.categorical_events(CategoricalKind::FielderPosition, &position.to_uppercase())
            .map_err(|_| ValidationError::UnknownCategory {
                axis: axis.name(),
                value: position.to_string(),
                accepted: axis.accepted(),
            })
    }

    /// Contacts made with exactly this stick input direction.
    pub fn input_direction_events(&self, direction: &str) -> Result<EventSet> {
        self.categorical_events(CategoricalKind::InputDirection, direction)
    }

    /// Pitches of the named types, unioned. Accepts the primary
    /// classifications (Curve, Charge, ChangeUp) and the charge
    /// sub-classifications (Slider, Perfect), which read from the
    /// charge-type axis.
    pub fn pitch_type_events(&self, pitch_types: &[&str]) -> Result<EventSet> {
        let mut result = EventSet::new();
        for &name in pitch_types {
            let bucket = match name.to_lowercase().as_str() {
                "curve" => self.categorical_bucket(CategoricalKind::PitchType, "Curve"),
                "charge" => self.categorical_bucket(CategoricalKind::PitchType, "Charge"),
                "changeup" => self.categorical_bucket(CategoricalKind::PitchType, "ChangeUp"),
                "slider" => self.categorical_bucket(CategoricalKind::ChargeType, "Slider"),
                "perfect" => self.categorical_bucket(CategoricalKind::ChargeType, "Perfect"),
                _ => {
                    return Err(ValidationError::UnknownCategory {
                        axis: "pitch type",
                        value: name.to_string(),
                        accepted: ["Curve", "Charge", "ChangeUp", "Slider", "Perfect"]
                            .iter()
                            .map(|s| s.to_string())
                            .collect(),
                    });
                }
            };
            result.extend(bucket);
        }
        Ok(result)
    }

    /// Pitches with the named swing types, unioned (case-insensitive).
    pub fn swing_type_events(&self, swing_types: &[&str]) -> Result<EventSet> {
        let mut result = EventSet::new();
        for &name in swing_types {
            let canonical = match name.to_lowercase().as_str() {
                "none" => "None",
                "slap" => "Slap",
                "charge" => "Charge",
                "star" => "Star",
                "bunt" => "Bunt",
                _ => {
                    let axis = self.index.categorical(CategoricalKind::SwingType);
                    return Err(ValidationError::UnknownCategory {
                        axis: axis.name(),
                        value: name.to_string(),
                        accepted: axis.accepted(),
                    });
                }
            };
            result.extend(self.categorical_bucket(CategoricalKind::SwingType, canonical));
        }
        Ok(result)
    }

    /// Contacts of exactly this recorded type (handedness included).
    pub fn contact_type_events(&self, contact_type: &str) -> Result<EventSet> {
        self.categorical_events(CategoricalKind::ContactType, contact_type)
    }

    /// Nice contacts, optionally narrowed to one handed variant.
    pub fn nice_contact_events(&self, side: Side) -> EventSet {
        self.handed_contact_events("Nice", side)
    }

    /// Sour contacts, optionally narrowed to one handed variant.
    pub fn sour_contact_events(&self, side: Side) -> EventSet {
        self.handed_contact_events("Sour", side)
    }

    /// Perfect contacts.
    pub fn perfect_contact_events(&self) -> EventSet {
        self.categorical_bucket(CategoricalKind::ContactType, "Perfect")
    }

    fn handed_contact_events(&self, quality: &str, side: Side) -> EventSet {
        let mut result = EventSet::new();
        if matches!(side, Side::Left | Side::Both) {
            result.extend(
                self.categorical_bucket(CategoricalKind::ContactType, &format!("{quality} - Left")),
            );
        }
        if matches!(side, Side::Right | Side::Both) {
            result.extend(
                self.categorical_bucket(CategoricalKind::ContactType, &format!("{quality} - Right")),
            );
        }
        result
    }

    /// Contacts of the named qualities (sour/nice/perfect), both handed
    /// variants included, unioned (case-insensitive).
    pub fn contact_quality_events(&self, qualities: &[&str]) -> Result<EventSet> {
        let mut result = EventSet::new();
        for &name in qualities {
            match name.to_lowercase().as_str() {
                "sour" => result.extend(self.sour_contact_events(Side::Both)),
                "nice" => result.extend(self.nice_contact_events(Side::Both)),
                "perfect" => result.extend(self.perfect_contact_events()),
                _ => {
                    return Err(ValidationError::UnknownCategory {
                        axis: "contact quality",
                        value: name.to_string(),
                        accepted: ["Sour", "Nice", "Perfect"]
                            .iter()
                            .map(|s| s.to_string())
                            .collect(),
                    });
                }
            }
        }
        Ok(result)
    }

    // ---- outcome families ----

    /// Events whose at-bat has not resolved.
    pub fn unresolved_events(&self) -> EventSet {
        self.categorical_bucket(CategoricalKind::Outcome, "None")
    }

    /// At-bats that ended in a strikeout.
    pub fn strikeout_events(&self) -> EventSet {
        self.categorical_bucket(CategoricalKind::Outcome, "Strikeout")
    }

    /// At-bats that ended in a walk. The flags select the walk kinds to
    /// include; both false yields an empty set.
    pub fn walk_events(&self, include_hbp: bool, include_bb: bool) -> EventSet {
        let mut result = EventSet::new();
        if include_hbp {
            result.extend(self.categorical_bucket(CategoricalKind::Outcome, "Walk (HBP)"));
        }
        if include_bb {
            result.extend(self.categorical_bucket(CategoricalKind::Outcome, "Walk (BB)"));
        }
        result
    }

    /// At-bats that ended in a hit: one magnitude, or all four unioned.
    pub fn hit_events(&self, kind: Option<HitKind>) -> EventSet {
        match kind {
            Some(kind) => self.categorical_bucket(CategoricalKind::Outcome, kind.outcome()),
            None => {
                let mut result = EventSet::new();
                for kind in [HitKind::Single, HitKind::Double, HitKind::Triple, HitKind::HomeRun] {
                    result.extend(self.categorical_bucket(CategoricalKind::Outcome, kind.outcome()));
                }
                result
            }
        }
    }

    /// At-bats that ended with a fielded out.
    pub fn out_outcome_events(&self) -> EventSet {
        self.categorical_bucket(CategoricalKind::Outcome, "Out")
    }

    /// At-bats that ended with a caught fly.
    pub fn caught_events(&self) -> EventSet {
        self.categorical_bucket(CategoricalKind::Outcome, "Caught")
    }

    /// At-bats that ended with a caught line drive.
    pub fn caught_line_drive_events(&self) -> EventSet {
        self.categorical_bucket(CategoricalKind::Outcome, "Caught line-drive")
    }

    /// At-bats that ended in any out-like outcome.
    pub fn all_out_events(&self) -> EventSet {
        let mut result = EventSet::new();
        for outcome in OUT_FAMILY {
            result.extend(self.categorical_bucket(CategoricalKind::Outcome, outcome));
        }
        result
    }

    /// At-bats that ended on an input error.
    pub fn input_error_events(&self) -> EventSet {
        self.categorical_bucket(CategoricalKind::Outcome, "Error - Input")
    }

    /// At-bats that ended on a chemistry error.
    pub fn chem_error_events(&self) -> EventSet {
        self.categorical_bucket(CategoricalKind::Outcome, "Error - Chem")
    }

    /// At-bats that ended on a landed bunt.
    pub fn bunt_events(&self) -> EventSet {
        self.categorical_bucket(CategoricalKind::Outcome, "Bunt")
    }

    /// At-bats that ended on a sacrifice fly.
    pub fn sac_fly_events(&self) -> EventSet {
        self.categorical_bucket(CategoricalKind::Outcome, "SacFly")
    }

    /// At-bats that ended on a ground-ball double play.
    pub fn double_play_events(&self) -> EventSet {
        self.categorical_bucket(CategoricalKind::Outcome, "Ground ball double Play")
    }

    /// At-bats that ended on a foul catch.
    pub fn foul_catch_events(&self) -> EventSet {
        self.categorical_bucket(CategoricalKind::Outcome, "Foul catch")
    }

    // ---- runner occupancy ----

    /// Tri-state runner-occupancy query.
    ///
    /// Each element of `bases` is a signed base number in -3..=3:
    /// positive = a runner is **required** on that base, negative = a
    /// runner is **optional** there, and a base not mentioned at all is
    /// **excluded** (no returned event has a runner on it). The literal
    /// `[0]` returns the bases-empty set; 0 may accompany optional bases
    /// but combining it with a required base is contradictory.
    pub fn runner_on_base_events(&self, bases: &[i8]) -> Result<EventSet> {
        if bases.len() > 3 {
            return Err(ValidationError::TooManyBases(bases.len()));
        }
        for &base in bases {
            if !(-3..=3).contains(&base) {
                return Err(ValidationError::InvalidBase(base));
            }
        }
        if bases == [0] {
            return Ok(self.index.events_with_bases_empty().clone());
        }

        let required: Vec<u8> = bases.iter().filter(|&&b| b > 0).map(|&b| b as u8).collect();
        let optional: Vec<u8> = bases
            .iter()
            .filter(|&&b| b <= 0)
            .map(|b| b.unsigned_abs())
            .collect();
        if !required.is_empty() && optional.contains(&0) {
            return Err(ValidationError::ContradictoryBases);
        }

        let bucket = |number: u8| -> &EventSet { &self.index.runners[number as usize] };

        let mut result = if required.is_empty() {
            let mut union = EventSet::new();
            for &number in &optional {
                union.extend(bucket(number).iter().copied());
            }
            union
        } else {
            let mut iter = required.iter();
            let mut intersection = iter
                .next()
                .map(|&number| bucket(number).clone())
                .unwrap_or_default();
            for &number in iter {
                intersection = intersection
                    .intersection(bucket(number))
                    .copied()
                    .collect();
            }
            intersection
        };

        let mentioned: Vec<u8> = bases.iter().map(|b| b.unsigned_abs()).collect();
        for number in 1..=3u8 {
            if !mentioned.contains(&number) {
                result = result.difference(bucket(number)).copied().collect();
            }
        }
        Ok(result)
    }

    // ---- marker sets ----

    /// Events where any runner attempted a steal.
    pub fn steal_events(&self) -> EventSet {
        self.index.marker(MarkerKind::Steal).clone()
    }

    /// Events where the pitcher used a star pitch.
    pub fn star_pitch_events(&self) -> EventSet {
        self.index.marker(MarkerKind::StarPitch).clone()
    }

    /// Events where the first fielder bobbled in any way.
    pub fn bobble_events(&self) -> EventSet {
        self.index.marker(MarkerKind::Bobble).clone()
    }

    /// Events where the first fielder was burned by a fireball.
    pub fn fireball_burn_events(&self) -> EventSet {
        self.index.marker(MarkerKind::FireballBurn).clone()
    }

    /// Events with a five-star star swing.
    pub fn five_star_swing_events(&self) -> EventSet {
        self.index.marker(MarkerKind::FiveStarSwing).clone()
    }

    /// Events where the first fielder made a sliding catch.
    pub fn sliding_catch_events(&self) -> EventSet {
        self.index.marker(MarkerKind::SlidingCatch).clone()
    }

    /// Events where the first fielder made a wall jump.
    pub fn wall_jump_events(&self) -> EventSet {
        self.index.marker(MarkerKind::WallJump).clone()
    }

    /// Events where the fielder was selected manually.
    pub fn manual_selection_events(&self) -> EventSet {
        self.index.marker(MarkerKind::ManualSelection).clone()
    }

    /// First pitches of an at-bat (0-0 count, pitch present).
    pub fn first_pitch_events(&self) -> EventSet {
        self.index.marker(MarkerKind::FirstPitchOfAtBat).clone()
    }

    /// Pitches that resolved their at-bat.
    pub fn last_pitch_events(&self) -> EventSet {
        self.index.marker(MarkerKind::LastPitchOfAtBat).clone()
    }

    /// Events with the away side strictly ahead.
    pub fn away_leading_events(&self) -> EventSet {
        self.index.marker(MarkerKind::AwayLeading).clone()
    }

    /// Events with the home side strictly ahead.
    pub fn home_leading_events(&self) -> EventSet {
        self.index.marker(MarkerKind::HomeLeading).clone()
    }

    /// Events with the score tied.
    pub fn tied_events(&self) -> EventSet {
        self.index.marker(MarkerKind::Tied).clone()
    }

    /// Events whose play took the lead from the fielding side.
    pub fn lead_changed_events(&self) -> EventSet {
        self.index.marker(MarkerKind::LeadChanged).clone()
    }

    // ---- participation ----

    /// Events where the character was at bat. Unknown characters answer
    /// with an empty set, never an error.
    pub fn character_at_bat_events(&self, character: &str) -> EventSet {
        self.index
            .participation(character)
            .map(|p| p.batting.clone())
            .unwrap_or_default()
    }

    /// Events where the character was pitching.
    pub fn character_pitching_events(&self, character: &str) -> EventSet {
        self.index
            .participation(character)
            .map(|p| p.pitching.clone())
            .unwrap_or_default()
    }

    /// Events where the character made the first touch in the field.
    pub fn character_fielding_events(&self, character: &str) -> EventSet {
        self.index
            .participation(character)
            .map(|p| p.fielding.clone())
            .unwrap_or_default()
    }

    // ---- banded position axes ----

    /// Pitches whose strikezone position magnitude is at least
    /// `min_magnitude` (two-decimal banding).
    pub fn strikezone_position_events(&self, min_magnitude: f32) -> EventSet {
        self.index
            .banded(BandedKind::StrikezonePosition)
            .at_least_magnitude(min_magnitude)
    }

    /// Contacts whose X-position magnitude is at least `min_magnitude`
    /// (two-decimal banding).
    pub fn contact_position_events(&self, min_magnitude: f32) -> EventSet {
        self.index
            .banded(BandedKind::ContactPositionX)
            .at_least_magnitude(min_magnitude)
    }

    // ---- match-context queries ----

    /// The final event, when it drove in a run: the match ended on it.
    pub fn walkoff_events(&self) -> EventSet {
        match self.index.final_event {
            Some((id, rbi)) if rbi != 0 => [id].into_iter().collect(),
            _ => EventSet::new(),
        }
    }

    /// Events where the named player's team was batting. Unknown player
    /// names answer with an empty set.
    pub fn player_batting_events(&self, player: &str) -> EventSet {
        if player.eq_ignore_ascii_case(&self.index.away_player) {
            self.half_inning_bucket(0)
        } else if player.eq_ignore_ascii_case(&self.index.home_player) {
            self.half_inning_bucket(1)
        } else {
            EventSet::new()
        }
    }

    /// Events where the named player's team was pitching.
    pub fn player_pitching_events(&self, player: &str) -> EventSet {
        if player.eq_ignore_ascii_case(&self.index.away_player) {
            self.half_inning_bucket(1)
        } else if player.eq_ignore_ascii_case(&self.index.home_player) {
            self.half_inning_bucket(0)
        } else {
            EventSet::new()
        }
    }

    fn half_inning_bucket(&self, half_inning: i64) -> EventSet {
        self.index
            .ordinal(OrdinalKind::HalfInning)
            .bucket(half_inning)
            .cloned()
            .unwrap_or_default()
    }

    /// Events with a runner on the given base (typed single-base form).
    pub fn events_with_runner(&self, base: Base) -> EventSet {
        self.index.events_with_runner(base).clone()
    }

    /// Events with all bases empty (typed form of `[0]`).
    pub fn events_with_bases_empty(&self) -> EventSet {
        self.index.events_with_bases_empty().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_signed_keeps_non_negative_values_exact() {
        assert_eq!(
            RangeQuery::from_signed(2, Polarity::Ascending),
            RangeQuery::Exact(2)
        );
        assert_eq!(
            RangeQuery::from_signed(0, Polarity::Descending),
            RangeQuery::Exact(0)
        );
    }

    #[test]
    fn from_signed_honors_axis_polarity() {
        assert_eq!(
            RangeQuery::from_signed(-2, Polarity::Ascending),
            RangeQuery::AtLeast(2)
        );
        assert_eq!(
            RangeQuery::from_signed(-7, Polarity::Descending),
            RangeQuery::AtMost(7)
        );
    }

    #[test]
    fn range_query_serialization_roundtrip() {
        let query = RangeQuery::AnyOf(vec![1, 3, 5]);
        let json = serde_json::to_string(&query).unwrap();
        let back: RangeQuery = serde_json::from_str(&json).unwrap();
        assert_eq!(back, query);
    }

    #[test]
    fn hit_kind_maps_to_outcome_vocabulary() {
        assert_eq!(HitKind::Single.outcome(), "Single");
        assert_eq!(HitKind::HomeRun.outcome(), "HR");
    }
}
