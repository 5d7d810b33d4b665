//! Canonical accepted-value sets for the categorical index axes.

use crate::tables;

/// The canonical value set for every categorical axis.
///
/// Supplied to the index builder to pre-seed each axis's buckets: a value
/// listed here gets a (possibly empty) bucket, and an event carrying a
/// value outside the set is tolerated but omitted from that axis.
///
/// The default domain sources the static game tables; callers replaying
/// narrowed or extended vocabularies can construct their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDomain {
    outcomes: Vec<String>,
    pitch_types: Vec<String>,
    charge_types: Vec<String>,
    swing_types: Vec<String>,
    contact_types: Vec<String>,
    input_directions: Vec<String>,
    fielder_positions: Vec<String>,
}

impl CategoryDomain {
    /// Builds a domain from explicit value sets.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        outcomes: Vec<String>,
        pitch_types: Vec<String>,
        charge_types: Vec<String>,
        swing_types: Vec<String>,
        contact_types: Vec<String>,
        input_directions: Vec<String>,
        fielder_positions: Vec<String>,
    ) -> Self {
        Self {
            outcomes,
            pitch_types,
            charge_types,
            swing_types,
            contact_types,
            input_directions,
            fielder_positions,
        }
    }

    /// Accepted at-bat outcomes.
    pub fn outcomes(&self) -> &[String] {
        &self.outcomes
    }

    /// Accepted primary pitch classifications.
    pub fn pitch_types(&self) -> &[String] {
        &self.pitch_types
    }

    /// Accepted charge-pitch sub-classifications.
    pub fn charge_types(&self) -> &[String] {
        &self.charge_types
    }

    /// Accepted swing classifications.
    pub fn swing_types(&self) -> &[String] {
        &self.swing_types
    }

    /// Accepted contact quality classifications.
    pub fn contact_types(&self) -> &[String] {
        &self.contact_types
    }

    /// Accepted stick input directions.
    pub fn input_directions(&self) -> &[String] {
        &self.input_directions
    }

    /// Accepted defensive position abbreviations.
    pub fn fielder_positions(&self) -> &[String] {
        &self.fielder_positions
    }
}

impl Default for CategoryDomain {
    fn default() -> Self {
        let collect = |table: &crate::table::LookupTable| {
            table.names().map(str::to_string).collect::<Vec<_>>()
        };
        Self {
            outcomes: collect(&tables::OUTCOMES),
            pitch_types: collect(&tables::PITCH_TYPES),
            charge_types: collect(&tables::CHARGE_TYPES),
            swing_types: collect(&tables::SWING_TYPES),
            contact_types: collect(&tables::CONTACT_TYPES),
            input_directions: collect(&tables::INPUT_DIRECTIONS),
            fielder_positions: collect(&tables::FIELDER_POSITIONS),
        }
    }
}
