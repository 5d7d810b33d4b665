//! Bidirectional code↔name lookup capability.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::tables::CHARACTERS;

/// An immutable bidirectional map between numeric codes and display names.
///
/// Built once from a static pair slice. Name lookups are
/// case-insensitive; where two codes share a name (historical aliases),
/// the lowest code wins the reverse direction.
#[derive(Debug)]
pub struct LookupTable {
    label: &'static str,
    by_code: HashMap<u16, &'static str>,
    by_name: HashMap<String, u16>,
    names: Vec<&'static str>,
}

impl LookupTable {
    /// Builds a table from `(code, name)` pairs.
    pub fn from_pairs(label: &'static str, pairs: &'static [(u16, &'static str)]) -> Self {
        let mut by_code = HashMap::with_capacity(pairs.len());
        let mut by_name = HashMap::with_capacity(pairs.len());
        let mut names = Vec::with_capacity(pairs.len());
        for &(code, name) in pairs {
            by_code.insert(code, name);
            by_name.entry(name.to_lowercase()).or_insert(code);
            if !names.contains(&name) {
                names.push(name);
            }
        }
        Self {
            label,
            by_code,
            by_name,
            names,
        }
    }

    /// What this table maps (for diagnostics).
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Returns the display name for a code.
    pub fn name_for(&self, code: u16) -> Option<&'static str> {
        self.by_code.get(&code).copied()
    }

    /// Returns the code for a display name, case-insensitively.
    pub fn code_for(&self, name: &str) -> Option<u16> {
        self.by_name.get(&name.to_lowercase()).copied()
    }

    /// Whether the table knows this display name.
    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(&name.to_lowercase())
    }

    /// Iterates the distinct display names in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names.iter().copied()
    }

    /// Number of distinct display names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Explicit, caller-tagged input for a character lookup.
///
/// Replaces the legacy convention of guessing whether a bare value was a
/// code or a name: the caller says which side of the map it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterRef {
    /// Look up by numeric character code.
    ByCode(u16),
    /// Look up by display name (case-insensitive).
    ByName(String),
}

impl CharacterRef {
    /// Resolves to the `(code, canonical name)` pair, if known.
    pub fn resolve(&self) -> Option<(u16, &'static str)> {
        match self {
            CharacterRef::ByCode(code) => CHARACTERS.name_for(*code).map(|name| (*code, name)),
            CharacterRef::ByName(name) => {
                let code = CHARACTERS.code_for(name)?;
                CHARACTERS.name_for(code).map(|canonical| (code, canonical))
            }
        }
    }

    /// Resolves just the canonical display name.
    pub fn canonical_name(&self) -> Option<&'static str> {
        self.resolve().map(|(_, name)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAIRS: &[(u16, &str)] = &[(0, "None"), (2, "Sliding"), (3, "Walljump"), (255, "None")];

    #[test]
    fn name_for_known_codes() {
        let table = LookupTable::from_pairs("action", PAIRS);
        assert_eq!(table.name_for(2), Some("Sliding"));
        assert_eq!(table.name_for(255), Some("None"));
        assert_eq!(table.name_for(7), None);
    }

    #[test]
    fn code_for_is_case_insensitive() {
        let table = LookupTable::from_pairs("action", PAIRS);
        assert_eq!(table.code_for("walljump"), Some(3));
        assert_eq!(table.code_for("WALLJUMP"), Some(3));
        assert_eq!(table.code_for("unknown"), None);
    }

    #[test]
    fn duplicate_names_resolve_to_first_code() {
        let table = LookupTable::from_pairs("action", PAIRS);
        assert_eq!(table.code_for("None"), Some(0));
        // Distinct names deduplicate for domain seeding.
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn character_ref_resolves_both_directions() {
        let by_code = CharacterRef::ByCode(0).resolve().unwrap();
        let by_name = CharacterRef::ByName("mario".to_string()).resolve().unwrap();
        assert_eq!(by_code, by_name);
        assert_eq!(by_code.1, "Mario");
    }

    #[test]
    fn character_ref_unknown_is_none() {
        assert!(CharacterRef::ByCode(999).resolve().is_none());
        assert!(CharacterRef::ByName("Nobody".to_string()).resolve().is_none());
    }

    #[test]
    fn character_ref_serialization_is_tagged() {
        let json = serde_json::to_string(&CharacterRef::ByCode(14)).unwrap();
        assert_eq!(json, r#"{"ByCode":14}"#);
    }
}
