//! The fixed enumerations baked into the game, as static lookup tables.
//!
//! Codes and names are historical fact — gaps and aliases included — and
//! must not be "cleaned up": historical files reference them as-is.

use std::sync::LazyLock;

use crate::table::LookupTable;

const CHARACTER_PAIRS: &[(u16, &str)] = &[
    (0, "Mario"),
    (1, "Luigi"),
    (2, "DK"),
    (3, "Diddy"),
    (4, "Peach"),
    (5, "Daisy"),
    (6, "Yoshi"),
    (7, "Baby Mario"),
    (8, "Baby Luigi"),
    (9, "Bowser"),
    (10, "Wario"),
    (11, "Waluigi"),
    (12, "Koopa(G)"),
    (13, "Toad(R)"),
    (14, "Boo"),
    (15, "Toadette"),
    (16, "Shy Guy(R)"),
    (17, "Birdo"),
    (18, "Monty"),
    (19, "Bowser Jr"),
    (20, "Paratroopa(R)"),
    (21, "Pianta(B)"),
    (22, "Pianta(R)"),
    (23, "Pianta(Y)"),
    (24, "Noki(B)"),
    (25, "Noki(R)"),
    (26, "Noki(G)"),
    (27, "Bro(H)"),
    (28, "Toadsworth"),
    (29, "Toad(B)"),
    (30, "Toad(Y)"),
    (31, "Toad(G)"),
    (32, "Toad(P)"),
    (33, "Magikoopa(B)"),
    (34, "Magikoopa(R)"),
    (35, "Magikoopa(G)"),
    (36, "Magikoopa(Y)"),
    (37, "King Boo"),
    (38, "Petey"),
    (39, "Dixie"),
    (40, "Goomba"),
    (41, "Paragoomba"),
    (42, "Koopa(R)"),
    (43, "Paratroopa(G)"),
    (44, "Shy Guy(B)"),
    (45, "Shy Guy(Y)"),
    (46, "Shy Guy(G)"),
    (47, "Shy Guy(Bk)"),
    (48, "Dry Bones(Gy)"),
    (49, "Dry Bones(G)"),
    (50, "Dry Bones(R)"),
    (51, "Dry Bones(B)"),
    (52, "Bro(F)"),
    (53, "Bro(B)"),
];

const BASE_CHARACTER_PAIRS: &[(u16, &str)] = &[
    (0, "Mario"),
    (1, "Luigi"),
    (2, "DK"),
    (3, "Diddy"),
    (4, "Peach"),
    (5, "Daisy"),
    (6, "Yoshi"),
    (7, "Baby Mario"),
    (8, "Baby Luigi"),
    (9, "Bowser"),
    (10, "Wario"),
    (11, "Waluigi"),
    (12, "Koopa"),
    (13, "Toad"),
    (14, "Boo"),
    (15, "Toadette"),
    (16, "Shy Guy"),
    (17, "Birdo"),
    (18, "Monty"),
    (19, "Bowser Jr"),
    (20, "Paratroopa"),
    (21, "Pianta"),
    (22, "Pianta"),
    (23, "Pianta"),
    (24, "Noki"),
    (25, "Noki"),
    (26, "Noki"),
    (27, "Bro"),
    (28, "Toadsworth"),
    (29, "Toad"),
    (30, "Toad"),
    (31, "Toad"),
    (32, "Toad"),
    (33, "Magikoopa"),
    (34, "Magikoopa"),
    (35, "Magikoopa"),
    (36, "Magikoopa"),
    (37, "King Boo"),
    (38, "Petey"),
    (39, "Dixie"),
    (40, "Goomba"),
    (41, "Paragoomba"),
    (42, "Koopa"),
    (43, "Paratroopa"),
    (44, "Shy Guy"),
    (45, "Shy Guy"),
    (46, "Shy Guy"),
    (47, "Shy Guy"),
    (48, "Dry Bones"),
    (49, "Dry Bones"),
    (50, "Dry Bones"),
    (51, "Dry Bones"),
    (52, "Bro"),
    (53, "Bro"),
];

const TEAM_PAIRS: &[(u16, &str)] = &[
    (0, "Mario Sunshines"),
    (1, "Mario All Stars"),
    (2, "Mario Heroes"),
    (3, "Mario Fireballs"),
    (4, "Luigi Mansioneers"),
    (5, "Luigi Leapers"),
    (6, "Luigi Gentlemen"),
    (7, "Luigi Vacuums"),
    (8, "Peach Monarchs"),
    (9, "Peach Princesses"),
    (10, "Peach Roses"),
    (11, "Peach Dynasties"),
    (12, "Daisy Queen Bees"),
    (13, "Daisy Petals"),
    (14, "Daisy Lillies"),
    (15, "Daisy Cupids"),
    (16, "Yoshi Islanders"),
    (17, "Yoshi Flutters"),
    (18, "Yoshi Eggs"),
    (19, "Yoshi Speed Stars"),
    (20, "Birdo Bows"),
    (21, "Birdo Fans"),
    (22, "Birdo Beauties"),
    (23, "Birdo Models"),
    (24, "Wario Greats"),
    (25, "Wario Beasts"),
    (26, "Wario Garlics"),
    (27, "Wario Steakheads"),
    (28, "Waluigi Flankers"),
    (29, "Waluigi Mashers"),
    (30, "Waluigi Mystiques"),
    (31, "Waluigi Smart Alecks"),
    (32, "DK Kongs"),
    (33, "DK Animals"),
    (34, "DK Explorers"),
    (35, "DK Wild Ones"),
    (36, "Diddy Tails"),
    (37, "Diddy Red Caps"),
    (38, "Diddy Survivors"),
    (39, "Diddy Ninjas"),
    (40, "Bowser Monsters"),
    (41, "Bowser Black Stars"),
    (42, "Bowser Flames"),
    (43, "Bowser Blue Shells"),
    (44, "Jr Pixies"),
    (45, "Jr Rookies"),
    (46, "Jr Fangs"),
    (47, "Jr Bombers"),
];

const STADIUM_PAIRS: &[(u16, &str)] = &[
    (0, "Mario Stadium"),
    (1, "Bowser Castle"),
    (2, "Wario Palace"),
    (3, "Yoshi Park"),
    (4, "Peach Garden"),
    (5, "DK Jungle"),
    (6, "Toy Field"),
];

const OUTCOME_PAIRS: &[(u16, &str)] = &[
    (0, "None"),
    (1, "Strikeout"),
    (2, "Walk (BB)"),
    (3, "Walk (HBP)"),
    (4, "Out"),
    (5, "Caught"),
    (6, "Caught line-drive"),
    (7, "Single"),
    (8, "Double"),
    (9, "Triple"),
    (10, "HR"),
    (11, "Error - Input"),
    (12, "Error - Chem"),
    (13, "Bunt"),
    (14, "SacFly"),
    (15, "Ground ball double Play"),
    (16, "Foul catch"),
];

const CONTACT_TYPE_PAIRS: &[(u16, &str)] = &[
    (0, "Sour - Left"),
    (1, "Nice - Left"),
    (2, "Perfect"),
    (3, "Nice - Right"),
    (4, "Sour - Right"),
    (255, "Miss"),
];

const INPUT_DIRECTION_PAIRS: &[(u16, &str)] = &[
    (0, ""),
    (1, "Left"),
    (2, "Right"),
    (3, "Left+Right"),
    (4, "Down"),
    (5, "Left+Down"),
    (6, "Right+Down"),
    (7, "Left+Right+Down"),
    (8, "Up"),
    (9, "Left+Up"),
    (10, "Right+Up"),
    (11, "Left+Right+Up"),
    (13, "Left+Down+Up"),
    (14, "Right+Down+Up"),
    (15, "Left+Right+Down+Up"),
];

const PITCH_TYPE_PAIRS: &[(u16, &str)] = &[(0, "Curve"), (1, "Charge"), (2, "ChangeUp")];

const CHARGE_TYPE_PAIRS: &[(u16, &str)] = &[(0, "N/A"), (2, "Slider"), (3, "Perfect")];

const SWING_TYPE_PAIRS: &[(u16, &str)] = &[
    (0, "None"),
    (1, "Slap"),
    (2, "Charge"),
    (3, "Star"),
    (4, "Bunt"),
];

const FIELDER_POSITION_PAIRS: &[(u16, &str)] = &[
    (0, "P"),
    (1, "C"),
    (2, "1B"),
    (3, "2B"),
    (4, "3B"),
    (5, "SS"),
    (6, "LF"),
    (7, "CF"),
    (8, "RF"),
    (255, "Inv"),
];

const FIELDER_ACTION_PAIRS: &[(u16, &str)] = &[(0, "None"), (2, "Sliding"), (3, "Walljump")];

const FIELDER_BOBBLE_PAIRS: &[(u16, &str)] = &[
    (0, "None"),
    (1, "Slide/stun lock"),
    (2, "Fumble"),
    (3, "Bobble"),
    (4, "Fireball"),
    (16, "Garlic knockout"),
    (255, "None"),
];

const STEAL_TYPE_PAIRS: &[(u16, &str)] = &[
    (0, "None"),
    (1, "Ready"),
    (2, "Normal"),
    (3, "Perfect"),
    (55, "None"),
];

const OUT_TYPE_PAIRS: &[(u16, &str)] = &[
    (0, "None"),
    (1, "Caught"),
    (2, "Force"),
    (3, "Tag"),
    (4, "Force Back"),
    (16, "Strike-out"),
];

const MANUAL_SELECT_PAIRS: &[(u16, &str)] = &[
    (0, "No Selected Char"),
    (1, "Selected Other Char"),
    (2, "Selected This Char"),
];

/// Character codes and display names, variant colors distinguished.
pub static CHARACTERS: LazyLock<LookupTable> =
    LazyLock::new(|| LookupTable::from_pairs("character", CHARACTER_PAIRS));

static BASE_CHARACTERS: LazyLock<LookupTable> =
    LazyLock::new(|| LookupTable::from_pairs("base character", BASE_CHARACTER_PAIRS));

/// Team codes and display names.
pub static TEAMS: LazyLock<LookupTable> =
    LazyLock::new(|| LookupTable::from_pairs("team", TEAM_PAIRS));

/// Stadium codes and canonical display names.
pub static STADIUMS: LazyLock<LookupTable> =
    LazyLock::new(|| LookupTable::from_pairs("stadium", STADIUM_PAIRS));

/// At-bat outcome codes and names; the full outcome vocabulary.
pub static OUTCOMES: LazyLock<LookupTable> =
    LazyLock::new(|| LookupTable::from_pairs("outcome", OUTCOME_PAIRS));

/// Contact quality classifications, handedness distinguished.
pub static CONTACT_TYPES: LazyLock<LookupTable> =
    LazyLock::new(|| LookupTable::from_pairs("contact type", CONTACT_TYPE_PAIRS));

/// Stick input directions held at contact.
pub static INPUT_DIRECTIONS: LazyLock<LookupTable> =
    LazyLock::new(|| LookupTable::from_pairs("input direction", INPUT_DIRECTION_PAIRS));

/// Primary pitch classifications.
pub static PITCH_TYPES: LazyLock<LookupTable> =
    LazyLock::new(|| LookupTable::from_pairs("pitch type", PITCH_TYPE_PAIRS));

/// Charge-pitch sub-classifications.
pub static CHARGE_TYPES: LazyLock<LookupTable> =
    LazyLock::new(|| LookupTable::from_pairs("charge type", CHARGE_TYPE_PAIRS));

/// Swing classifications.
pub static SWING_TYPES: LazyLock<LookupTable> =
    LazyLock::new(|| LookupTable::from_pairs("swing type", SWING_TYPE_PAIRS));

/// Defensive position abbreviations.
pub static FIELDER_POSITIONS: LazyLock<LookupTable> =
    LazyLock::new(|| LookupTable::from_pairs("fielder position", FIELDER_POSITION_PAIRS));

/// Special fielding actions.
pub static FIELDER_ACTIONS: LazyLock<LookupTable> =
    LazyLock::new(|| LookupTable::from_pairs("fielder action", FIELDER_ACTION_PAIRS));

/// Fielder bobble outcomes.
pub static FIELDER_BOBBLES: LazyLock<LookupTable> =
    LazyLock::new(|| LookupTable::from_pairs("fielder bobble", FIELDER_BOBBLE_PAIRS));

/// Steal attempt kinds.
pub static STEAL_TYPES: LazyLock<LookupTable> =
    LazyLock::new(|| LookupTable::from_pairs("steal type", STEAL_TYPE_PAIRS));

/// Runner out kinds.
pub static OUT_TYPES: LazyLock<LookupTable> =
    LazyLock::new(|| LookupTable::from_pairs("out type", OUT_TYPE_PAIRS));

/// Manual fielder-selection states.
pub static MANUAL_SELECT_STATES: LazyLock<LookupTable> =
    LazyLock::new(|| LookupTable::from_pairs("manual selection", MANUAL_SELECT_PAIRS));

/// Collapses a character code to its base name, dropping the variant
/// color suffix ("Toad(R)" and "Toad(Y)" both map to "Toad").
pub fn base_character_name(code: u16) -> Option<&'static str> {
    BASE_CHARACTERS.name_for(code)
}

/// Normalizes the possessive stadium spellings used by early format
/// versions to the canonical names.
pub fn canonical_stadium_name(recorded: &str) -> &str {
    match recorded {
        "Bowser's Castle" => "Bowser Castle",
        "Wario's Palace" => "Wario Palace",
        "Yoshi's Island" => "Yoshi Park",
        "Peach's Garden" => "Peach Garden",
        "DK's Jungle" => "DK Jungle",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_table_is_complete() {
        assert_eq!(CHARACTERS.len(), 54);
        assert_eq!(CHARACTERS.name_for(39), Some("Dixie"));
        assert_eq!(CHARACTERS.code_for("king boo"), Some(37));
    }

    #[test]
    fn base_names_collapse_variants() {
        assert_eq!(base_character_name(13), Some("Toad"));
        assert_eq!(base_character_name(30), Some("Toad"));
        assert_eq!(base_character_name(0), Some("Mario"));
        assert_eq!(base_character_name(200), None);
    }

    #[test]
    fn outcome_vocabulary_has_all_results() {
        assert_eq!(OUTCOMES.len(), 17);
        assert!(OUTCOMES.contains_name("Ground ball double Play"));
        assert!(OUTCOMES.contains_name("Caught line-drive"));
        assert_eq!(OUTCOMES.code_for("HR"), Some(10));
    }

    #[test]
    fn legacy_stadium_spellings_normalize() {
        assert_eq!(canonical_stadium_name("Bowser's Castle"), "Bowser Castle");
        assert_eq!(canonical_stadium_name("Yoshi's Island"), "Yoshi Park");
        assert_eq!(canonical_stadium_name("Mario Stadium"), "Mario Stadium");
    }

    #[test]
    fn bobble_alias_codes_share_a_name() {
        assert_eq!(FIELDER_BOBBLES.name_for(0), Some("None"));
        assert_eq!(FIELDER_BOBBLES.name_for(255), Some("None"));
        // Six distinct outcomes despite seven codes.
        assert_eq!(FIELDER_BOBBLES.len(), 6);
    }

    #[test]
    fn input_direction_codes_have_historical_gap() {
        // Code 12 was never emitted by the game.
        assert_eq!(INPUT_DIRECTIONS.name_for(12), None);
        assert_eq!(INPUT_DIRECTIONS.name_for(15), Some("Left+Right+Down+Up"));
    }

    #[test]
    fn position_table_covers_the_diamond() {
        assert_eq!(FIELDER_POSITIONS.name_for(5), Some("SS"));
        assert_eq!(FIELDER_POSITIONS.name_for(255), Some("Inv"));
        assert_eq!(FIELDER_POSITIONS.code_for("cf"), Some(7));
    }
}
