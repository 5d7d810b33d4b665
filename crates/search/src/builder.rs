//! One-pass index construction over a match record.
//!
//! Every dimension the engine can answer for is declared in the
//! definition tables below: an axis identity, a display name, and an
//! extraction function over the event view (plus seed range and polarity
//! for ordinals). The build loop is generic over the tables, so the
//! domain coverage is auditable by reading them top to bottom.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use common::{Base, EventSet, TeamSide};
use domain::{ConstructionError, EventView, GameRecord};
use lookup::CategoryDomain;

use crate::axis::{
    BandedAxis, BandedKind, CategoricalAxis, CategoricalKind, MarkerKind, OrdinalAxis, OrdinalKind,
    Polarity,
};
use crate::index::{MatchIndex, Participation};

type CategoricalExtract = for<'r> fn(&EventView<'r>) -> Option<&'r str>;
type OrdinalExtract = fn(&EventView<'_>) -> Option<i64>;
type BandedExtract = fn(&EventView<'_>) -> Option<f32>;
type MarkerPredicate = fn(&EventView<'_>) -> bool;

struct CategoricalDef {
    kind: CategoricalKind,
    name: &'static str,
    partition: bool,
    domain: for<'d> fn(&'d CategoryDomain) -> &'d [String],
    extract: CategoricalExtract,
}

struct OrdinalDef {
    kind: OrdinalKind,
    name: &'static str,
    polarity: Polarity,
    seed: SeedRange,
    extract: OrdinalExtract,
}

struct BandedDef {
    kind: BandedKind,
    extract: BandedExtract,
}

struct MarkerDef {
    kind: MarkerKind,
    applies: MarkerPredicate,
}

/// Where an ordinal axis's seeded range comes from.
enum SeedRange {
    /// A fixed inclusive range known ahead of the match.
    Fixed(i64, i64),
    /// 1 through the number of innings actually played.
    Innings,
    /// 0 through the away side's final score.
    FinalAwayScore,
    /// 0 through the home side's final score.
    FinalHomeScore,
}

impl SeedRange {
    fn resolve(&self, record: &GameRecord) -> RangeInclusive<i64> {
        match self {
            SeedRange::Fixed(min, max) => *min..=*max,
            SeedRange::Innings => 1..=i64::from(record.meta.innings_played.max(1)),
            SeedRange::FinalAwayScore => 0..=i64::from(record.meta.away_score),
            SeedRange::FinalHomeScore => 0..=i64::from(record.meta.home_score),
        }
    }
}

fn extract_outcome<'r>(view: &EventView<'r>) -> Option<&'r str> {
    Some(view.outcome())
}

const CATEGORICAL_DEFS: &[CategoricalDef] = &[
    CategoricalDef {
        kind: CategoricalKind::Outcome,
        name: "outcome",
        partition: true,
        domain: CategoryDomain::outcomes,
        extract: extract_outcome,
    },
    CategoricalDef {
        kind: CategoricalKind::PitchType,
        name: "pitch type",
        partition: false,
        domain: CategoryDomain::pitch_types,
        extract: |v| v.pitch_type(),
    },
    CategoricalDef {
        kind: CategoricalKind::ChargeType,
        name: "charge type",
        partition: false,
        domain: CategoryDomain::charge_types,
        extract: |v| v.charge_type(),
    },
    CategoricalDef {
        kind: CategoricalKind::SwingType,
        name: "swing type",
        partition: false,
        domain: CategoryDomain::swing_types,
        extract: |v| v.swing_type(),
    },
    CategoricalDef {
        kind: CategoricalKind::ContactType,
        name: "contact type",
        partition: false,
        domain: CategoryDomain::contact_types,
        extract: |v| v.contact_type(),
    },
    CategoricalDef {
        kind: CategoricalKind::InputDirection,
        name: "input direction",
        partition: false,
        domain: CategoryDomain::input_directions,
        extract: |v| v.input_direction(),
    },
    CategoricalDef {
        kind: CategoricalKind::FielderPosition,
        name: "fielder position",
        partition: false,
        domain: CategoryDomain::fielder_positions,
        extract: |v| v.fielder_position(),
    },
];

const ORDINAL_DEFS: &[OrdinalDef] = &[
    OrdinalDef {
        kind: OrdinalKind::Inning,
        name: "inning",
        polarity: Polarity::Ascending,
        seed: SeedRange::Innings,
        extract: |v| Some(i64::from(v.inning())),
    },
    OrdinalDef {
        kind: OrdinalKind::HalfInning,
        name: "half-inning",
        polarity: Polarity::Ascending,
        seed: SeedRange::Fixed(0, 1),
        extract: |v| Some(i64::from(v.half_inning())),
    },
    OrdinalDef {
        kind: OrdinalKind::Balls,
        name: "balls",
        polarity: Polarity::Ascending,
        seed: SeedRange::Fixed(0, 3),
        extract: |v| Some(i64::from(v.balls())),
    },
    OrdinalDef {
        kind: OrdinalKind::Strikes,
        name: "strikes",
        polarity: Polarity::Ascending,
        seed: SeedRange::Fixed(0, 4),
        extract: |v| Some(i64::from(v.strikes())),
    },
    OrdinalDef {
        kind: OrdinalKind::OutsInInning,
        name: "outs",
        polarity: Polarity::Ascending,
        seed: SeedRange::Fixed(0, 2),
        extract: |v| Some(i64::from(v.outs())),
    },
    OrdinalDef {
        kind: OrdinalKind::AwayScore,
        name: "away score",
        polarity: Polarity::Ascending,
        seed: SeedRange::FinalAwayScore,
        extract: |v| Some(i64::from(v.score_for(TeamSide::Away))),
    },
    OrdinalDef {
        kind: OrdinalKind::HomeScore,
        name: "home score",
        polarity: Polarity::Ascending,
        seed: SeedRange::FinalHomeScore,
        extract: |v| Some(i64::from(v.score_for(TeamSide::Home))),
    },
    OrdinalDef {
        kind: OrdinalKind::Rbi,
        name: "rbi",
        polarity: Polarity::Ascending,
        seed: SeedRange::Fixed(0, 4),
        extract: |v| Some(i64::from(v.rbi())),
    },
    OrdinalDef {
        kind: OrdinalKind::ChemLinks,
        name: "chemistry links",
        polarity: Polarity::Ascending,
        seed: SeedRange::Fixed(0, 3),
        extract: |v| Some(i64::from(v.chem_links_on_base())),
    },
    OrdinalDef {
        kind: OrdinalKind::PitcherStamina,
        name: "pitcher stamina",
        polarity: Polarity::Descending,
        seed: SeedRange::Fixed(0, 10),
        extract: |v| Some(i64::from(v.pitcher_stamina())),
    },
    OrdinalDef {
        kind: OrdinalKind::StarChance,
        name: "star chance",
        polarity: Polarity::Ascending,
        seed: SeedRange::Fixed(0, 1),
        extract: |v| Some(i64::from(v.star_chance())),
    },
    OrdinalDef {
        kind: OrdinalKind::OutsDuringPlay,
        name: "outs during play",
        polarity: Polarity::Ascending,
        seed: SeedRange::Fixed(0, 3),
        extract: |v| Some(i64::from(v.outs_during_play())),
    },
    OrdinalDef {
        kind: OrdinalKind::InStrikezone,
        name: "in strikezone",
        polarity: Polarity::Ascending,
        seed: SeedRange::Fixed(0, 1),
        extract: |v| v.in_strikezone().map(i64::from),
    },
    OrdinalDef {
        kind: OrdinalKind::ContactFrame,
        name: "contact frame",
        polarity: Polarity::Ascending,
        seed: SeedRange::Fixed(0, 10),
        extract: |v| v.contact_frame().map(i64::from),
    },
];

const BANDED_DEFS: &[BandedDef] = &[
    BandedDef {
        kind: BandedKind::StrikezonePosition,
        extract: |v| v.strikezone_position(),
    },
    BandedDef {
        kind: BandedKind::ContactPositionX,
        extract: |v| v.contact_position_x(),
    },
];

/// The lead changes when the batting side was not ahead before the play
/// and this event's RBI puts it strictly ahead. Equality after the play
/// does not count.
fn lead_changed(view: &EventView<'_>) -> bool {
    let Ok(batting) = view.batting_side() else {
        return false;
    };
    let before = view.score_for(batting);
    let opponent = view.score_for(batting.other());
    before <= opponent && before + u32::from(view.rbi()) > opponent
}

const MARKER_DEFS: &[MarkerDef] = &[
    MarkerDef {
        kind: MarkerKind::Steal,
        applies: |v| v.stealing(),
    },
    MarkerDef {
        kind: MarkerKind::StarPitch,
        applies: |v| v.star_pitch() == Some(true),
    },
    MarkerDef {
        kind: MarkerKind::Bobble,
        applies: |v| v.fielder_bobble().is_some_and(|b| b != "None"),
    },
    MarkerDef {
        kind: MarkerKind::FireballBurn,
        applies: |v| v.fielder_bobble() == Some("Fireball"),
    },
    MarkerDef {
        kind: MarkerKind::FiveStarSwing,
        applies: |v| v.five_star_swing() == Some(true),
    },
    MarkerDef {
        kind: MarkerKind::SlidingCatch,
        applies: |v| v.fielder_action() == Some("Sliding"),
    },
    MarkerDef {
        kind: MarkerKind::WallJump,
        applies: |v| v.fielder_action() == Some("Walljump"),
    },
    MarkerDef {
        kind: MarkerKind::ManualSelection,
        applies: |v| v.fielder_manual_selection().is_some_and(|m| m != "No Selected Char"),
    },
    MarkerDef {
        kind: MarkerKind::FirstPitchOfAtBat,
        applies: |v| v.pitch().is_some() && v.balls() == 0 && v.strikes() == 0,
    },
    MarkerDef {
        kind: MarkerKind::LastPitchOfAtBat,
        applies: |v| v.pitch().is_some() && v.at_bat_resolved(),
    },
    MarkerDef {
        kind: MarkerKind::AwayLeading,
        applies: |v| v.score_for(TeamSide::Away) > v.score_for(TeamSide::Home),
    },
    MarkerDef {
        kind: MarkerKind::HomeLeading,
        applies: |v| v.score_for(TeamSide::Home) > v.score_for(TeamSide::Away),
    },
    MarkerDef {
        kind: MarkerKind::Tied,
        applies: |v| v.score_for(TeamSide::Away) == v.score_for(TeamSide::Home),
    },
    MarkerDef {
        kind: MarkerKind::LeadChanged,
        applies: lead_changed,
    },
];

/// Builds the full index set over one match in a single pass.
pub struct IndexBuilder;

impl IndexBuilder {
    /// Consumes the event sequence once and produces the immutable index
    /// snapshot.
    ///
    /// Mandatory-field violations (non-contiguous ids, unresolvable
    /// half-innings or roster slots) are fatal. A value outside one
    /// axis's accepted domain is tolerated: the event is omitted from
    /// that bucket only, the skip is logged, and the build continues —
    /// historical files must remain queryable.
    #[tracing::instrument(skip_all, fields(events = record.len()))]
    pub fn build(
        record: &GameRecord,
        domain: &CategoryDomain,
    ) -> Result<MatchIndex, ConstructionError> {
        record.validate()?;

        let mut categorical: Vec<CategoricalAxis> = CATEGORICAL_DEFS
            .iter()
            .map(|def| CategoricalAxis::seeded(def.name, def.partition, (def.domain)(domain)))
            .collect();
        let mut ordinal: Vec<OrdinalAxis> = ORDINAL_DEFS
            .iter()
            .map(|def| OrdinalAxis::seeded(def.name, def.polarity, def.seed.resolve(record)))
            .collect();
        let mut banded: Vec<BandedAxis> = BANDED_DEFS.iter().map(|_| BandedAxis::new()).collect();
        let mut markers: Vec<EventSet> = MARKER_DEFS.iter().map(|_| EventSet::new()).collect();
        let mut runners: [EventSet; 4] = Default::default();

        // Pre-seed participation with every rostered character, so
        // querying one who never generated an event answers with an
        // empty set instead of a miss.
        let mut participation: HashMap<String, Participation> = HashMap::new();
        for side in [TeamSide::Away, TeamSide::Home] {
            for character in record.roster_raw(side).characters() {
                participation.entry(character.to_string()).or_default();
            }
        }

        let mut skipped: u64 = 0;
        for view in record.views() {
            let id = view.id();

            for (def, axis) in CATEGORICAL_DEFS.iter().zip(categorical.iter_mut()) {
                if let Some(value) = (def.extract)(&view)
                    && !axis.insert(value, id)
                {
                    skipped += 1;
                    tracing::debug!(
                        axis = def.name,
                        value,
                        event = %id,
                        "value outside axis domain; event omitted from this axis"
                    );
                }
            }

            for (def, axis) in ORDINAL_DEFS.iter().zip(ordinal.iter_mut()) {
                if let Some(value) = (def.extract)(&view)
                    && !axis.insert(value, id)
                {
                    skipped += 1;
                    tracing::debug!(
                        axis = def.name,
                        value,
                        event = %id,
                        "value outside axis domain; event omitted from this axis"
                    );
                }
            }

            for (def, axis) in BANDED_DEFS.iter().zip(banded.iter_mut()) {
                if let Some(value) = (def.extract)(&view) {
                    axis.insert(value, id);
                }
            }

            for (def, set) in MARKER_DEFS.iter().zip(markers.iter_mut()) {
                if (def.applies)(&view) {
                    set.insert(id);
                }
            }

            if view.bases_empty() {
                runners[0].insert(id);
            } else {
                for base in Base::ALL {
                    if view.runner_on(base) {
                        runners[base.number() as usize].insert(id);
                    }
                }
            }

            let batter = view.batter()?.to_string();
            let pitcher = view.pitcher()?.to_string();
            participation.entry(batter).or_default().batting.insert(id);
            participation.entry(pitcher).or_default().pitching.insert(id);
            if let Some(fielder) = view.fielder_character() {
                participation
                    .entry(fielder.to_string())
                    .or_default()
                    .fielding
                    .insert(id);
            }
        }

        metrics::counter!("match_index_events_indexed").increment(record.len() as u64);
        if skipped > 0 {
            metrics::counter!("match_index_values_skipped").increment(skipped);
            tracing::warn!(skipped, "values outside their axis domains were skipped");
        }
        tracing::info!(events = record.len(), "match index built");

        let final_event = record
            .final_event_id()
            .map(|id| (id, record.event(id).map(|e| e.rbi).unwrap_or(0)));

        Ok(MatchIndex {
            event_count: record.len() as u32,
            categorical: CATEGORICAL_DEFS
                .iter()
                .zip(categorical)
                .map(|(def, axis)| (def.kind, axis))
                .collect(),
            ordinal: ORDINAL_DEFS
                .iter()
                .zip(ordinal)
                .map(|(def, axis)| (def.kind, axis))
                .collect(),
            banded: BANDED_DEFS
                .iter()
                .zip(banded)
                .map(|(def, axis)| (def.kind, axis))
                .collect(),
            markers: MARKER_DEFS
                .iter()
                .zip(markers)
                .map(|(def, set)| (def.kind, set))
                .collect(),
            runners,
            participation,
            away_player: record.meta.player_name(TeamSide::Away).to_string(),
            home_player: record.meta.player_name(TeamSide::Home).to_string(),
            final_event,
        })
    }
}
