//! Absence-safe typed projection over one event in its match context.

use common::{Base, EventId, RosterSlot, TeamSide};

use crate::error::{ConstructionError, Result};
use crate::game::event::{ContactData, Event, FirstFielderData, PitchData, RunnerData, OUTCOME_NONE};
use crate::game::record::GameRecord;

/// Read-only view of one event, resolving team-relative numbering against
/// the match's rosters.
///
/// Mandatory-field accessors return concrete values, or a
/// [`ConstructionError`] where resolution can fail. Accessors for fields
/// nested inside an optional sub-record return `Option`: `None` means
/// "not applicable here", never a default that could be mistaken for
/// real data.
#[derive(Debug, Clone, Copy)]
pub struct EventView<'a> {
    record: &'a GameRecord,
    event: &'a Event,
    id: EventId,
}

impl<'a> EventView<'a> {
    pub(crate) fn new(record: &'a GameRecord, event: &'a Event, id: EventId) -> Self {
        Self { record, event, id }
    }

    /// The event's identity: its sequence position in the match.
    pub fn id(&self) -> EventId {
        self.id
    }

    /// The underlying raw event.
    pub fn raw(&self) -> &'a Event {
        self.event
    }

    /// One-based inning number.
    pub fn inning(&self) -> u8 {
        self.event.inning
    }

    /// Raw half-inning selector (0 = away batting, 1 = home batting).
    pub fn half_inning(&self) -> u8 {
        self.event.half_inning
    }

    /// The side currently batting.
    pub fn batting_side(&self) -> Result<TeamSide> {
        TeamSide::try_from(self.event.half_inning).map_err(|value| {
            ConstructionError::InvalidHalfInning { event: self.id, value }
        })
    }

    /// The side currently fielding.
    pub fn fielding_side(&self) -> Result<TeamSide> {
        Ok(self.batting_side()?.other())
    }

    /// The named side's score as of this event.
    ///
    /// Event-level scores are recorded in the normalized away/home sense
    /// for every format version; no correction applies.
    pub fn score_for(&self, side: TeamSide) -> u32 {
        match side {
            TeamSide::Away => self.event.away_score,
            TeamSide::Home => self.event.home_score,
        }
    }

    /// Balls in the count.
    pub fn balls(&self) -> u8 {
        self.event.balls
    }

    /// Strikes in the count.
    pub fn strikes(&self) -> u8 {
        self.event.strikes
    }

    /// Outs in the half-inning before this play.
    pub fn outs(&self) -> u8 {
        self.event.outs
    }

    /// Whether a star chance is active.
    pub fn star_chance(&self) -> bool {
        self.event.star_chance
    }

    /// The named side's star count.
    pub fn stars_for(&self, side: TeamSide) -> u8 {
        match side {
            TeamSide::Away => self.event.away_stars,
            TeamSide::Home => self.event.home_stars,
        }
    }

    /// Remaining stamina of the current pitcher.
    pub fn pitcher_stamina(&self) -> u8 {
        self.event.pitcher_stamina
    }

    /// Chemistry links among the runners currently on base.
    pub fn chem_links_on_base(&self) -> u8 {
        self.event.chem_links_on_base
    }

    /// Runs batted in on this event.
    pub fn rbi(&self) -> u8 {
        self.event.rbi
    }

    /// Outs recorded during this play.
    pub fn outs_during_play(&self) -> u8 {
        self.event.outs_during_play
    }

    /// At-bat resolution, `"None"` while the at-bat is in progress.
    pub fn outcome(&self) -> &'a str {
        &self.event.outcome
    }

    /// Whether this event resolved its at-bat.
    pub fn at_bat_resolved(&self) -> bool {
        self.event.outcome != OUTCOME_NONE
    }

    fn character_for(&self, side: TeamSide, slot: u8, role: &'static str) -> Result<&'a str> {
        let slot = RosterSlot::new(slot).ok_or(ConstructionError::UnknownRosterSlot {
            event: self.id,
            role,
            slot,
        })?;
        Ok(self.record.roster_raw(side).character_at(slot))
    }

    /// The batter's character identity, resolved through the batting
    /// side's lineup.
    pub fn batter(&self) -> Result<&'a str> {
        self.character_for(self.batting_side()?, self.event.batter_slot, "batter")
    }

    /// The pitcher's character identity, resolved through the fielding
    /// side's lineup.
    pub fn pitcher(&self) -> Result<&'a str> {
        self.character_for(self.fielding_side()?, self.event.pitcher_slot, "pitcher")
    }

    /// The catcher's character identity, resolved through the fielding
    /// side's lineup.
    pub fn catcher(&self) -> Result<&'a str> {
        self.character_for(self.fielding_side()?, self.event.catcher_slot, "catcher")
    }

    /// The runner sub-record on a base, absent when the base is empty.
    pub fn runner(&self, base: Base) -> Option<&'a RunnerData> {
        match base {
            Base::First => self.event.runner_first.as_ref(),
            Base::Second => self.event.runner_second.as_ref(),
            Base::Third => self.event.runner_third.as_ref(),
        }
    }

    /// The batter-as-runner sub-record, present when the play put the
    /// ball live.
    pub fn runner_batter(&self) -> Option<&'a RunnerData> {
        self.event.runner_batter.as_ref()
    }

    /// Whether a runner occupies the given base.
    pub fn runner_on(&self, base: Base) -> bool {
        self.runner(base).is_some()
    }

    /// Whether any base is occupied.
    pub fn any_runner(&self) -> bool {
        Base::ALL.iter().any(|&base| self.runner_on(base))
    }

    /// Whether all three bases are empty.
    pub fn bases_empty(&self) -> bool {
        !self.any_runner()
    }

    /// Whether any present runner is attempting a steal.
    pub fn stealing(&self) -> bool {
        Base::ALL
            .iter()
            .filter_map(|&base| self.runner(base))
            .any(|runner| runner.steal != "None")
    }

    /// The pitch sub-record, absent on non-pitch events.
    pub fn pitch(&self) -> Option<&'a PitchData> {
        self.event.pitch.as_ref()
    }

    /// The contact sub-record, absent without a pitch or without contact.
    pub fn contact(&self) -> Option<&'a ContactData> {
        self.pitch().and_then(|pitch| pitch.contact.as_ref())
    }

    /// The first-fielder sub-record, absent unless a fielder touched the
    /// ball.
    pub fn first_fielder(&self) -> Option<&'a FirstFielderData> {
        self.contact().and_then(|contact| contact.first_fielder.as_ref())
    }

    /// Pitch classification, when a pitch was thrown.
    pub fn pitch_type(&self) -> Option<&'a str> {
        self.pitch().map(|p| p.pitch_type.as_str())
    }

    /// Charge sub-classification, when a pitch was thrown.
    pub fn charge_type(&self) -> Option<&'a str> {
        self.pitch().map(|p| p.charge_type.as_str())
    }

    /// Swing classification, when a pitch was thrown.
    pub fn swing_type(&self) -> Option<&'a str> {
        self.pitch().map(|p| p.swing_type.as_str())
    }

    /// Whether the pitch was a star pitch, when one was thrown.
    pub fn star_pitch(&self) -> Option<bool> {
        self.pitch().map(|p| p.star_pitch)
    }

    /// Whether the pitch crossed the strikezone, when one was thrown.
    pub fn in_strikezone(&self) -> Option<bool> {
        self.pitch().map(|p| p.in_strikezone)
    }

    /// Horizontal strikezone position, when a pitch was thrown.
    pub fn strikezone_position(&self) -> Option<f32> {
        self.pitch().map(|p| p.strikezone_position)
    }

    /// Contact quality classification, when contact was made.
    pub fn contact_type(&self) -> Option<&'a str> {
        self.contact().map(|c| c.contact_type.as_str())
    }

    /// Stick input direction at contact, when contact was made.
    pub fn input_direction(&self) -> Option<&'a str> {
        self.contact().map(|c| c.input_direction.as_str())
    }

    /// Swing frame of the contact, when contact was made.
    pub fn contact_frame(&self) -> Option<u8> {
        self.contact().map(|c| c.frame)
    }

    /// Whether the contact was a five-star swing, when contact was made.
    pub fn five_star_swing(&self) -> Option<bool> {
        self.contact().map(|c| c.five_star_swing)
    }

    /// Ball position at contact, X component, when contact was made.
    pub fn contact_position_x(&self) -> Option<f32> {
        self.contact().map(|c| c.contact_position_x)
    }

    /// The first fielder's character identity, when one touched the ball.
    pub fn fielder_character(&self) -> Option<&'a str> {
        self.first_fielder().map(|f| f.character.as_str())
    }

    /// The first fielder's position abbreviation, when one touched the
    /// ball.
    pub fn fielder_position(&self) -> Option<&'a str> {
        self.first_fielder().map(|f| f.position.as_str())
    }

    /// The first fielder's special action, when one touched the ball.
    pub fn fielder_action(&self) -> Option<&'a str> {
        self.first_fielder().map(|f| f.action.as_str())
    }

    /// The first fielder's bobble outcome, when one touched the ball.
    pub fn fielder_bobble(&self) -> Option<&'a str> {
        self.first_fielder().map(|f| f.bobble.as_str())
    }

    /// The manual-selection state of the first fielder, when one touched
    /// the ball.
    pub fn fielder_manual_selection(&self) -> Option<&'a str> {
        self.first_fielder().map(|f| f.manual_selection.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::event::EventBuilder;
    use crate::game::record::{GameMeta, RosterEntry, TeamRoster};

    fn record_with(events: Vec<Event>) -> GameRecord {
        let meta = GameMeta {
            game_id: 1,
            format_version: "1.9.2".to_string(),
            stadium: "Mario Stadium".to_string(),
            away_player: "VisitorPlayer".to_string(),
            home_player: "HostPlayer".to_string(),
            start_time: None,
            end_time: None,
            innings_selected: 9,
            innings_played: 9,
            away_score: 0,
            home_score: 0,
            quitter: None,
        };
        let away: [RosterEntry; 9] = std::array::from_fn(|i| RosterEntry::new(format!("Away{i}")));
        let home: [RosterEntry; 9] = std::array::from_fn(|i| RosterEntry::new(format!("Home{i}")));
        GameRecord::new(meta, TeamRoster::new(away), TeamRoster::new(home), events)
    }

    fn pitch_event() -> EventBuilder {
        Event::builder().pitch(PitchData {
            pitch_type: "Curve".to_string(),
            contact: Some(ContactData {
                contact_type: "Perfect".to_string(),
                frame: 2,
                first_fielder: Some(FirstFielderData {
                    character: "Home5".to_string(),
                    position: "SS".to_string(),
                    ..FirstFielderData::default()
                }),
                ..ContactData::default()
            }),
            ..PitchData::default()
        })
    }

    #[test]
    fn test_resolves_batter_and_pitcher_through_lineups() {
        // Away side batting: batter from the away lineup, pitcher from
        // the home lineup.
        let record = record_with(vec![
            Event::builder().half_inning(0).batter_slot(2).pitcher_slot(7).build(),
        ]);
        let view = record.view(EventId::new(0)).unwrap();
        assert_eq!(view.batter().unwrap(), "Away2");
        assert_eq!(view.pitcher().unwrap(), "Home7");

        let record = record_with(vec![
            Event::builder().event_num(0).half_inning(1).batter_slot(2).pitcher_slot(7).build(),
        ]);
        let view = record.view(EventId::new(0)).unwrap();
        assert_eq!(view.batter().unwrap(), "Home2");
        assert_eq!(view.pitcher().unwrap(), "Away7");
    }

    #[test]
    fn test_bad_half_inning_fails_resolution() {
        let record = record_with(vec![Event::builder().half_inning(3).build()]);
        let view = record.view(EventId::new(0)).unwrap();
        assert!(matches!(
            view.batting_side(),
            Err(ConstructionError::InvalidHalfInning { value: 3, .. })
        ));
        assert!(view.batter().is_err());
    }

    #[test]
    fn test_out_of_lineup_slot_fails_resolution() {
        let record = record_with(vec![Event::builder().batter_slot(12).build()]);
        let view = record.view(EventId::new(0)).unwrap();
        assert!(matches!(
            view.batter(),
            Err(ConstructionError::UnknownRosterSlot { role: "batter", slot: 12, .. })
        ));
    }

    #[test]
    fn test_absent_pitch_yields_not_applicable() {
        let record = record_with(vec![Event::builder().build()]);
        let view = record.view(EventId::new(0)).unwrap();
        assert!(view.pitch().is_none());
        assert_eq!(view.pitch_type(), None);
        assert_eq!(view.contact_frame(), None);
        assert_eq!(view.fielder_position(), None);
    }

    #[test]
    fn test_nested_chain_flattens_when_present() {
        let record = record_with(vec![pitch_event().build()]);
        let view = record.view(EventId::new(0)).unwrap();
        assert_eq!(view.pitch_type(), Some("Curve"));
        assert_eq!(view.contact_type(), Some("Perfect"));
        assert_eq!(view.contact_frame(), Some(2));
        assert_eq!(view.fielder_position(), Some("SS"));
        assert_eq!(view.fielder_bobble(), Some("None"));
    }

    #[test]
    fn test_contact_absent_cuts_fielder_chain() {
        let record = record_with(vec![
            Event::builder().pitch(PitchData::default()).build(),
        ]);
        let view = record.view(EventId::new(0)).unwrap();
        assert!(view.pitch().is_some());
        assert!(view.contact().is_none());
        assert!(view.first_fielder().is_none());
        assert_eq!(view.five_star_swing(), None);
    }

    #[test]
    fn test_runner_occupancy_helpers() {
        let record = record_with(vec![
            Event::builder()
                .runner_second(RunnerData {
                    character: "Away1".to_string(),
                    initial_base: 2,
                    ..RunnerData::default()
                })
                .build(),
        ]);
        let view = record.view(EventId::new(0)).unwrap();
        assert!(view.runner_on(Base::Second));
        assert!(!view.runner_on(Base::First));
        assert!(view.any_runner());
        assert!(!view.bases_empty());
        assert!(!view.stealing());
    }

    #[test]
    fn test_steal_detection_on_any_base() {
        let record = record_with(vec![
            Event::builder()
                .runner_third(RunnerData {
                    steal: "Perfect".to_string(),
                    initial_base: 3,
                    ..RunnerData::default()
                })
                .build(),
        ]);
        let view = record.view(EventId::new(0)).unwrap();
        assert!(view.stealing());
    }

    #[test]
    fn test_zero_values_distinct_from_absence() {
        // A pitch with strikezone position 0.0 is applicable, not absent.
        let record = record_with(vec![
            Event::builder().pitch(PitchData::default()).build(),
        ]);
        let view = record.view(EventId::new(0)).unwrap();
        assert_eq!(view.strikezone_position(), Some(0.0));

        let record = record_with(vec![Event::builder().build()]);
        let view = record.view(EventId::new(0)).unwrap();
        assert_eq!(view.strikezone_position(), None);
    }
}
