//! Per-event records and their optional nested sub-records.
//!
//! An [`Event`] is one discrete occurrence within a match: a pitch, an
//! at-bat resolution, or both. Conditionally-present data (a pitch, the
//! contact on a pitch, the first fielder on a contact, a runner on a
//! base) is modeled with `Option` so absence is never conflated with a
//! default value.

use serde::{Deserialize, Serialize};

/// Outcome recorded while an at-bat is still in progress.
pub const OUTCOME_NONE: &str = "None";

fn default_outcome() -> String {
    OUTCOME_NONE.to_string()
}

fn default_none() -> String {
    "None".to_string()
}

/// One discrete occurrence within a match.
///
/// Identity is the event's zero-based position in the match sequence, not
/// a field here; `event_num` is the raw counter as recorded in the save
/// file, which historical format versions overflowed at 256.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Raw per-event counter from the save file.
    pub event_num: u32,

    /// One-based inning number.
    pub inning: u8,

    /// Which side is batting (0 = away, 1 = home).
    pub half_inning: u8,

    /// Away side's score as of this event.
    pub away_score: u32,

    /// Home side's score as of this event.
    pub home_score: u32,

    /// Balls in the count.
    pub balls: u8,

    /// Strikes in the count.
    pub strikes: u8,

    /// Outs in the half-inning before this play.
    pub outs: u8,

    /// Whether a star chance is active.
    pub star_chance: bool,

    /// Away side's star count.
    pub away_stars: u8,

    /// Home side's star count.
    pub home_stars: u8,

    /// Remaining stamina of the current pitcher (0..=10).
    pub pitcher_stamina: u8,

    /// Chemistry links among the runners currently on base.
    pub chem_links_on_base: u8,

    /// Lineup slot of the pitcher on the fielding side.
    pub pitcher_slot: u8,

    /// Lineup slot of the batter on the batting side.
    pub batter_slot: u8,

    /// Lineup slot of the catcher on the fielding side.
    pub catcher_slot: u8,

    /// Runs batted in on this event.
    pub rbi: u8,

    /// Outs recorded during this play.
    pub outs_during_play: u8,

    /// Resolution of the at-bat, `"None"` while it is still in progress.
    #[serde(default = "default_outcome")]
    pub outcome: String,

    /// The batter as a runner, when the play put the ball live.
    #[serde(default)]
    pub runner_batter: Option<RunnerData>,

    /// Runner on first base, absent when the base is empty.
    #[serde(default)]
    pub runner_first: Option<RunnerData>,

    /// Runner on second base, absent when the base is empty.
    #[serde(default)]
    pub runner_second: Option<RunnerData>,

    /// Runner on third base, absent when the base is empty.
    #[serde(default)]
    pub runner_third: Option<RunnerData>,

    /// The pitch, absent on non-pitch events (steals, pickoffs).
    #[serde(default)]
    pub pitch: Option<PitchData>,
}

impl Event {
    /// Starts building an event with neutral defaults.
    pub fn builder() -> EventBuilder {
        EventBuilder::default()
    }
}

impl Default for Event {
    fn default() -> Self {
        Self {
            event_num: 0,
            inning: 1,
            half_inning: 0,
            away_score: 0,
            home_score: 0,
            balls: 0,
            strikes: 0,
            outs: 0,
            star_chance: false,
            away_stars: 0,
            home_stars: 0,
            pitcher_stamina: 10,
            chem_links_on_base: 0,
            pitcher_slot: 0,
            batter_slot: 0,
            catcher_slot: 0,
            rbi: 0,
            outs_during_play: 0,
            outcome: default_outcome(),
            runner_batter: None,
            runner_first: None,
            runner_second: None,
            runner_third: None,
            pitch: None,
        }
    }
}

/// A runner occupying a base (or the batter going live) during an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerData {
    /// Lineup slot of the runner on the batting side.
    pub slot: u8,

    /// Character identity of the runner.
    pub character: String,

    /// Base the runner started the play on (0 = batter).
    pub initial_base: u8,

    /// How the runner was put out, `"None"` if they were not.
    #[serde(default = "default_none")]
    pub out_type: String,

    /// Steal attempt kind, `"None"` when not stealing.
    #[serde(default = "default_none")]
    pub steal: String,

    /// Base the runner ended the play on.
    pub result_base: u8,
}

impl Default for RunnerData {
    fn default() -> Self {
        Self {
            slot: 0,
            character: String::new(),
            initial_base: 0,
            out_type: default_none(),
            steal: default_none(),
            result_base: 0,
        }
    }
}

/// The pitch thrown during an event.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PitchData {
    /// Character identity of the pitcher.
    pub pitcher_character: String,

    /// Primary pitch classification.
    pub pitch_type: String,

    /// Charge sub-classification of a charge pitch.
    pub charge_type: String,

    /// Whether this was a star pitch.
    pub star_pitch: bool,

    /// Pitch speed as recorded.
    pub pitch_speed: u16,

    /// Horizontal position of the ball across the strikezone.
    pub strikezone_position: f32,

    /// Whether the ball crossed inside the strikezone.
    pub in_strikezone: bool,

    /// The batter's swing classification, `"None"` for a take.
    pub swing_type: String,

    /// The contact, absent when the batter did not put bat on ball.
    #[serde(default)]
    pub contact: Option<ContactData>,
}

/// Bat-on-ball contact made during a pitch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContactData {
    /// Contact quality classification (sour/nice/perfect, handed).
    pub contact_type: String,

    /// Whether this was a five-star star swing.
    pub five_star_swing: bool,

    /// Stick input direction held at contact.
    pub input_direction: String,

    /// Push/pull sense of the input relative to the batter.
    pub push_pull: String,

    /// Swing frame on which contact occurred.
    pub frame: u8,

    /// Raw ball power at contact.
    pub power: u16,

    /// Ball position at contact, X component.
    pub contact_position_x: f32,

    /// Ball position at contact, Z component.
    pub contact_position_z: f32,

    /// The first fielder to touch the ball, absent if none did.
    #[serde(default)]
    pub first_fielder: Option<FirstFielderData>,
}

/// The first fielder to touch a batted ball.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirstFielderData {
    /// Lineup slot of the fielder on the fielding side.
    pub slot: u8,

    /// Character identity of the fielder.
    pub character: String,

    /// Defensive position abbreviation (P, C, 1B, ... RF).
    pub position: String,

    /// Special fielding action, `"None"` for a plain play.
    pub action: String,

    /// Bobble outcome, `"None"` for a clean touch.
    pub bobble: String,

    /// Manual fielder-selection state.
    pub manual_selection: String,
}

impl Default for FirstFielderData {
    fn default() -> Self {
        Self {
            slot: 0,
            character: String::new(),
            position: String::new(),
            action: default_none(),
            bobble: default_none(),
            manual_selection: "No Selected Char".to_string(),
        }
    }
}

/// Consuming builder for [`Event`], used by decoders and test fixtures.
#[derive(Debug, Default)]
pub struct EventBuilder {
    event: Event,
}

impl EventBuilder {
    /// Sets the raw per-event counter.
    pub fn event_num(mut self, event_num: u32) -> Self {
        self.event.event_num = event_num;
        self
    }

    /// Sets the one-based inning number.
    pub fn inning(mut self, inning: u8) -> Self {
        self.event.inning = inning;
        self
    }

    /// Sets which side is batting (0 = away, 1 = home).
    pub fn half_inning(mut self, half_inning: u8) -> Self {
        self.event.half_inning = half_inning;
        self
    }

    /// Sets both sides' scores.
    pub fn score(mut self, away: u32, home: u32) -> Self {
        self.event.away_score = away;
        self.event.home_score = home;
        self
    }

    /// Sets the ball/strike/out count.
    pub fn count(mut self, balls: u8, strikes: u8, outs: u8) -> Self {
        self.event.balls = balls;
        self.event.strikes = strikes;
        self.event.outs = outs;
        self
    }

    /// Sets the star-chance flag.
    pub fn star_chance(mut self, star_chance: bool) -> Self {
        self.event.star_chance = star_chance;
        self
    }

    /// Sets both sides' star counts.
    pub fn stars(mut self, away: u8, home: u8) -> Self {
        self.event.away_stars = away;
        self.event.home_stars = home;
        self
    }

    /// Sets the pitcher's remaining stamina.
    pub fn pitcher_stamina(mut self, stamina: u8) -> Self {
        self.event.pitcher_stamina = stamina;
        self
    }

    /// Sets the chemistry links among runners on base.
    pub fn chem_links(mut self, links: u8) -> Self {
        self.event.chem_links_on_base = links;
        self
    }

    /// Sets the pitcher's lineup slot.
    pub fn pitcher_slot(mut self, slot: u8) -> Self {
        self.event.pitcher_slot = slot;
        self
    }

    /// Sets the batter's lineup slot.
    pub fn batter_slot(mut self, slot: u8) -> Self {
        self.event.batter_slot = slot;
        self
    }

    /// Sets the catcher's lineup slot.
    pub fn catcher_slot(mut self, slot: u8) -> Self {
        self.event.catcher_slot = slot;
        self
    }

    /// Sets the runs batted in on this event.
    pub fn rbi(mut self, rbi: u8) -> Self {
        self.event.rbi = rbi;
        self
    }

    /// Sets the outs recorded during this play.
    pub fn outs_during_play(mut self, outs: u8) -> Self {
        self.event.outs_during_play = outs;
        self
    }

    /// Sets the at-bat resolution.
    pub fn outcome(mut self, outcome: impl Into<String>) -> Self {
        self.event.outcome = outcome.into();
        self
    }

    /// Places the batter-as-runner sub-record.
    pub fn runner_batter(mut self, runner: RunnerData) -> Self {
        self.event.runner_batter = Some(runner);
        self
    }

    /// Places a runner on first base.
    pub fn runner_first(mut self, runner: RunnerData) -> Self {
        self.event.runner_first = Some(runner);
        self
    }

    /// Places a runner on second base.
    pub fn runner_second(mut self, runner: RunnerData) -> Self {
        self.event.runner_second = Some(runner);
        self
    }

    /// Places a runner on third base.
    pub fn runner_third(mut self, runner: RunnerData) -> Self {
        self.event.runner_third = Some(runner);
        self
    }

    /// Attaches the pitch sub-record.
    pub fn pitch(mut self, pitch: PitchData) -> Self {
        self.event.pitch = Some(pitch);
        self
    }

    /// Finishes the event.
    pub fn build(self) -> Event {
        self.event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_are_neutral() {
        let event = Event::builder().build();
        assert_eq!(event.inning, 1);
        assert_eq!(event.outcome, OUTCOME_NONE);
        assert!(event.pitch.is_none());
        assert!(event.runner_first.is_none());
    }

    #[test]
    fn builder_sets_nested_sub_records() {
        let event = Event::builder()
            .event_num(3)
            .count(2, 1, 0)
            .outcome("Single")
            .runner_first(RunnerData {
                character: "Boo".to_string(),
                initial_base: 1,
                ..RunnerData::default()
            })
            .pitch(PitchData {
                pitch_type: "Curve".to_string(),
                contact: Some(ContactData::default()),
                ..PitchData::default()
            })
            .build();

        assert_eq!(event.event_num, 3);
        assert_eq!(event.balls, 2);
        assert_eq!(event.runner_first.as_ref().unwrap().character, "Boo");
        assert!(event.pitch.as_ref().unwrap().contact.is_some());
    }

    #[test]
    fn absent_sub_records_deserialize_as_none() {
        let json = r#"{
            "event_num": 0, "inning": 1, "half_inning": 0,
            "away_score": 0, "home_score": 0,
            "balls": 0, "strikes": 0, "outs": 0,
            "star_chance": false, "away_stars": 0, "home_stars": 0,
            "pitcher_stamina": 10, "chem_links_on_base": 0,
            "pitcher_slot": 0, "batter_slot": 0, "catcher_slot": 0,
            "rbi": 0, "outs_during_play": 0
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.outcome, OUTCOME_NONE);
        assert!(event.pitch.is_none());
        assert!(event.runner_second.is_none());
    }

    #[test]
    fn runner_defaults_are_not_stealing() {
        let runner = RunnerData::default();
        assert_eq!(runner.steal, "None");
        assert_eq!(runner.out_type, "None");
    }

    #[test]
    fn event_serialization_roundtrip() {
        let event = Event::builder()
            .event_num(12)
            .inning(4)
            .half_inning(1)
            .pitch(PitchData {
                pitch_type: "Charge".to_string(),
                charge_type: "Slider".to_string(),
                strikezone_position: -0.26,
                ..PitchData::default()
            })
            .build();
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
