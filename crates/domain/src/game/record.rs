//! The match record: metadata, rosters, and the ordered event sequence.

use chrono::NaiveDateTime;
use common::{EventId, RosterSlot, TeamSide};
use serde::{Deserialize, Serialize};

use crate::error::{ConstructionError, Result};
use crate::game::event::Event;
use crate::game::view::EventView;

/// Wall-clock format used by the legacy save files ("Fri Sep 16 22:11:52 2022").
const LEGACY_TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// Format versions recorded before the away/home sense of side 0/1 was
/// normalized; metadata from these matches reads the sides flipped.
const SIDE_FLIPPED_VERSIONS: [&str; 5] = ["Pre 0.1.7", "0.1.7a", "0.1.8", "0.1.9", "1.9.1"];

/// Score gap beyond which an early finish counts as a mercy ruling.
const MERCY_RUN_GAP: u32 = 10;

/// Match-level facts about one played game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameMeta {
    /// Match identifier as decoded from the save file.
    pub game_id: u64,

    /// Format version string the file was recorded under.
    pub format_version: String,

    /// Stadium name as recorded (legacy spellings included).
    pub stadium: String,

    /// Display name of the player controlling the away side.
    pub away_player: String,

    /// Display name of the player controlling the home side.
    pub home_player: String,

    /// When the match started, if the file recorded it.
    #[serde(default)]
    pub start_time: Option<NaiveDateTime>,

    /// When the match ended, if the file recorded it.
    #[serde(default)]
    pub end_time: Option<NaiveDateTime>,

    /// Innings the players selected before the match.
    pub innings_selected: u8,

    /// Innings actually played.
    pub innings_played: u8,

    /// Away side's final score.
    pub away_score: u32,

    /// Home side's final score.
    pub home_score: u32,

    /// Name of the side that quit early, if any.
    #[serde(default)]
    pub quitter: Option<String>,
}

impl GameMeta {
    /// Parses a legacy wall-clock timestamp.
    pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
        NaiveDateTime::parse_from_str(raw, LEGACY_TIMESTAMP_FORMAT)
            .map_err(|_| ConstructionError::InvalidTimestamp(raw.to_string()))
    }

    /// Normalizes a side selector for this match's format version.
    ///
    /// Matches recorded before the away/home normalization store their
    /// side-keyed metadata flipped; event-level fields are unaffected.
    pub fn corrected_side(&self, side: TeamSide) -> TeamSide {
        if SIDE_FLIPPED_VERSIONS.contains(&self.format_version.as_str()) {
            side.other()
        } else {
            side
        }
    }

    /// Returns the named side's final score, version-corrected.
    pub fn score_for(&self, side: TeamSide) -> u32 {
        match self.corrected_side(side) {
            TeamSide::Away => self.away_score,
            TeamSide::Home => self.home_score,
        }
    }

    /// Returns the named side's player display name, version-corrected.
    pub fn player_name(&self, side: TeamSide) -> &str {
        match self.corrected_side(side) {
            TeamSide::Away => &self.away_player,
            TeamSide::Home => &self.home_player,
        }
    }

    /// Returns the winning side, or `None` for a tie.
    pub fn winner(&self) -> Option<TeamSide> {
        let away = self.score_for(TeamSide::Away);
        let home = self.score_for(TeamSide::Home);
        if away > home {
            Some(TeamSide::Away)
        } else if home > away {
            Some(TeamSide::Home)
        } else {
            None
        }
    }

    /// Whether the match ended on a mercy ruling: it stopped short of the
    /// selected innings with a run gap above the mercy threshold.
    pub fn is_mercy(&self) -> bool {
        self.innings_selected.saturating_sub(self.innings_played) >= 1
            && self.away_score.abs_diff(self.home_score) > MERCY_RUN_GAP
    }

    /// Whether a side quit before the match completed.
    pub fn was_quit(&self) -> bool {
        self.quitter.as_deref().is_some_and(|q| !q.is_empty())
    }
}

/// One character's entry in a lineup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Character identity occupying the slot.
    pub character: String,

    /// Whether this character captains the team.
    #[serde(default)]
    pub captain: bool,

    /// Whether this character is in superstar form.
    #[serde(default)]
    pub superstar: bool,
}

impl RosterEntry {
    /// Creates a plain (non-captain, non-superstar) entry.
    pub fn new(character: impl Into<String>) -> Self {
        Self {
            character: character.into(),
            captain: false,
            superstar: false,
        }
    }
}

/// A team's fixed nine-slot lineup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamRoster {
    entries: [RosterEntry; 9],
}

impl TeamRoster {
    /// Creates a roster from its nine entries in slot order.
    pub fn new(entries: [RosterEntry; 9]) -> Self {
        Self { entries }
    }

    /// Creates a roster of plain entries from nine character identities.
    pub fn from_characters(characters: [&str; 9]) -> Self {
        Self {
            entries: characters.map(RosterEntry::new),
        }
    }

    /// Returns the entry at a lineup slot.
    pub fn entry_at(&self, slot: RosterSlot) -> &RosterEntry {
        &self.entries[slot.as_index()]
    }

    /// Returns the character identity at a lineup slot.
    pub fn character_at(&self, slot: RosterSlot) -> &str {
        &self.entries[slot.as_index()].character
    }

    /// Iterates the entries in slot order.
    pub fn entries(&self) -> impl Iterator<Item = &RosterEntry> {
        self.entries.iter()
    }

    /// Iterates the character identities in slot order.
    pub fn characters(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.character.as_str())
    }

    /// Returns the captain's entry, if one is marked.
    pub fn captain(&self) -> Option<&RosterEntry> {
        self.entries.iter().find(|e| e.captain)
    }

    /// Whether any character on this roster is in superstar form.
    pub fn has_superstar(&self) -> bool {
        self.entries.iter().any(|e| e.superstar)
    }
}

/// One fully-decoded match: metadata, rosters, and the event sequence.
///
/// The record is immutable once supplied; the index never mutates or
/// duplicates it, and query results resolve back into it by [`EventId`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Match-level facts.
    pub meta: GameMeta,

    away_roster: TeamRoster,
    home_roster: TeamRoster,
    events: Vec<Event>,
}

impl GameRecord {
    /// Assembles a record from its parts.
    pub fn new(
        meta: GameMeta,
        away_roster: TeamRoster,
        home_roster: TeamRoster,
        events: Vec<Event>,
    ) -> Self {
        Self {
            meta,
            away_roster,
            home_roster,
            events,
        }
    }

    /// Returns the named side's roster, version-corrected.
    ///
    /// Use this for metadata-level access; event-level slot resolution
    /// goes through [`GameRecord::roster_raw`] because events are
    /// recorded in the already-normalized side sense.
    pub fn roster(&self, side: TeamSide) -> &TeamRoster {
        self.roster_raw(self.meta.corrected_side(side))
    }

    /// Returns the named side's roster without version correction.
    pub fn roster_raw(&self, side: TeamSide) -> &TeamRoster {
        match side {
            TeamSide::Away => &self.away_roster,
            TeamSide::Home => &self.home_roster,
        }
    }

    /// Number of events in the match.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the match recorded no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the raw event at a sequence position.
    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.events.get(id.position() as usize)
    }

    /// Returns the event sequence in occurrence order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns a typed view of the event at a sequence position.
    pub fn view(&self, id: EventId) -> Option<EventView<'_>> {
        self.event(id).map(|event| EventView::new(self, event, id))
    }

    /// Iterates typed views over the whole sequence in order.
    pub fn views(&self) -> impl Iterator<Item = EventView<'_>> {
        self.events
            .iter()
            .enumerate()
            .map(|(i, event)| EventView::new(self, event, EventId::new(i as u32)))
    }

    /// Identifier of the last event, if any were recorded.
    pub fn final_event_id(&self) -> Option<EventId> {
        if self.events.is_empty() {
            None
        } else {
            Some(EventId::new((self.events.len() - 1) as u32))
        }
    }

    /// Checks the mandatory-field invariants the index build relies on.
    ///
    /// Event counters must match their sequence positions (modulo 256,
    /// accepting historical files whose fixed-width counter wrapped),
    /// every half-inning must select a side, and every batter/pitcher/
    /// catcher slot must fall inside the nine-slot lineup.
    pub fn validate(&self) -> Result<()> {
        for (position, event) in self.events.iter().enumerate() {
            let id = EventId::new(position as u32);
            if event.event_num % 256 != (position as u32) % 256 {
                return Err(ConstructionError::NonContiguousEvents {
                    expected: position as u32,
                    found: event.event_num,
                });
            }
            if TeamSide::try_from(event.half_inning).is_err() {
                return Err(ConstructionError::InvalidHalfInning {
                    event: id,
                    value: event.half_inning,
                });
            }
            for (role, slot) in [
                ("batter", event.batter_slot),
                ("pitcher", event.pitcher_slot),
                ("catcher", event.catcher_slot),
            ] {
                if RosterSlot::new(slot).is_none() {
                    return Err(ConstructionError::UnknownRosterSlot { event: id, role, slot });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(version: &str) -> GameMeta {
        GameMeta {
            game_id: 0xABCD,
            format_version: version.to_string(),
            stadium: "Mario Stadium".to_string(),
            away_player: "VisitorPlayer".to_string(),
            home_player: "HostPlayer".to_string(),
            start_time: None,
            end_time: None,
            innings_selected: 9,
            innings_played: 9,
            away_score: 3,
            home_score: 5,
            quitter: None,
        }
    }

    fn roster(prefix: &str) -> TeamRoster {
        let names: Vec<String> = (0..9).map(|i| format!("{prefix}{i}")).collect();
        TeamRoster::new(std::array::from_fn(|i| RosterEntry::new(names[i].clone())))
    }

    #[test]
    fn test_parse_legacy_timestamp() {
        let parsed = GameMeta::parse_timestamp("Fri Sep 16 22:11:52 2022").unwrap();
        assert_eq!(parsed.to_string(), "2022-09-16 22:11:52");
        assert!(GameMeta::parse_timestamp("2022-09-16").is_err());
    }

    #[test]
    fn test_modern_versions_keep_side_sense() {
        let meta = meta("1.9.2");
        assert_eq!(meta.corrected_side(TeamSide::Away), TeamSide::Away);
        assert_eq!(meta.score_for(TeamSide::Away), 3);
        assert_eq!(meta.player_name(TeamSide::Home), "HostPlayer");
    }

    #[test]
    fn test_legacy_versions_flip_side_sense() {
        let meta = meta("0.1.8");
        assert_eq!(meta.corrected_side(TeamSide::Away), TeamSide::Home);
        assert_eq!(meta.score_for(TeamSide::Away), 5);
        assert_eq!(meta.player_name(TeamSide::Away), "HostPlayer");
    }

    #[test]
    fn test_winner_and_tie() {
        assert_eq!(meta("1.9.2").winner(), Some(TeamSide::Home));
        let mut tied = meta("1.9.2");
        tied.away_score = 5;
        assert_eq!(tied.winner(), None);
    }

    #[test]
    fn test_mercy_requires_early_finish_and_gap() {
        let mut m = meta("1.9.2");
        assert!(!m.is_mercy());
        m.innings_played = 7;
        assert!(!m.is_mercy());
        m.home_score = 20;
        assert!(m.is_mercy());
    }

    #[test]
    fn test_quit_detection() {
        let mut m = meta("1.9.2");
        assert!(!m.was_quit());
        m.quitter = Some(String::new());
        assert!(!m.was_quit());
        m.quitter = Some("HostPlayer".to_string());
        assert!(m.was_quit());
    }

    #[test]
    fn test_roster_access_applies_correction() {
        let record = GameRecord::new(meta("0.1.8"), roster("A"), roster("H"), Vec::new());
        // Legacy flip: asking for the away roster reads the home array.
        assert_eq!(
            record.roster(TeamSide::Away).character_at(RosterSlot::new(0).unwrap()),
            "H0"
        );
        assert_eq!(
            record.roster_raw(TeamSide::Away).character_at(RosterSlot::new(0).unwrap()),
            "A0"
        );
    }

    #[test]
    fn test_validate_accepts_contiguous_events() {
        let events = (0..5).map(|i| Event::builder().event_num(i).build()).collect();
        let record = GameRecord::new(meta("1.9.2"), roster("A"), roster("H"), events);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_gapped_events() {
        let events = vec![
            Event::builder().event_num(0).build(),
            Event::builder().event_num(2).build(),
        ];
        let record = GameRecord::new(meta("1.9.2"), roster("A"), roster("H"), events);
        assert_eq!(
            record.validate(),
            Err(ConstructionError::NonContiguousEvents { expected: 1, found: 2 })
        );
    }

    #[test]
    fn test_wrapped_event_counters_validate() {
        // Historical files overflowed the counter at 256; position 300
        // is stored as 44 and must still validate.
        let events: Vec<Event> = (0..300)
            .map(|i| Event::builder().event_num(i % 256).build())
            .collect();
        let record = GameRecord::new(meta("0.1.8"), roster("A"), roster("H"), events);
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_half_inning() {
        let events = vec![Event::builder().half_inning(2).build()];
        let record = GameRecord::new(meta("1.9.2"), roster("A"), roster("H"), events);
        assert!(matches!(
            record.validate(),
            Err(ConstructionError::InvalidHalfInning { value: 2, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_lineup_slot() {
        let events = vec![Event::builder().batter_slot(9).build()];
        let record = GameRecord::new(meta("1.9.2"), roster("A"), roster("H"), events);
        assert!(matches!(
            record.validate(),
            Err(ConstructionError::UnknownRosterSlot { role: "batter", slot: 9, .. })
        ));
    }

    #[test]
    fn test_final_event_id() {
        let record = GameRecord::new(meta("1.9.2"), roster("A"), roster("H"), Vec::new());
        assert_eq!(record.final_event_id(), None);

        let events = (0..3).map(|i| Event::builder().event_num(i).build()).collect();
        let record = GameRecord::new(meta("1.9.2"), roster("A"), roster("H"), events);
        assert_eq!(record.final_event_id(), Some(EventId::new(2)));
    }
}
