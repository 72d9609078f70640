//! Vocabularies the rule processors validate against.
//!
//! A [`ValidationData`] is an immutable snapshot. Callers share it as an
//! `Arc` and swap in a new one wholesale when settings change; a parse pass
//! always sees a single snapshot from start to end.

use serde::{Deserialize, Serialize};

/// What to do with a well-formed keyword the engine does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownKeywordPolicy {
    /// Model the row as unknown without any diagnostic; the game skips it too.
    #[default]
    Ignore,
    /// Additionally report a warning on the keyword.
    Warn,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationData {
    pub valid_classes: Vec<String>,
    pub valid_bases: Vec<String>,
    pub valid_sounds: Vec<String>,
    pub class_whitelist: Vec<String>,
    pub base_whitelist: Vec<String>,
    pub unknown_keywords: UnknownKeywordPolicy,
}

const BUILTIN_CLASSES: &[&str] = &[
    "Active Skill Gems",
    "Amulets",
    "Belts",
    "Body Armours",
    "Boots",
    "Bows",
    "Claws",
    "Currency",
    "Daggers",
    "Divination Card",
    "Fishing Rods",
    "Gloves",
    "Helmets",
    "Hybrid Flasks",
    "Jewel",
    "Labyrinth Item",
    "Labyrinth Map Item",
    "Labyrinth Trinket",
    "Leaguestones",
    "Life Flasks",
    "Mana Flasks",
    "Map Fragments",
    "Maps",
    "One Hand Axes",
    "One Hand Maces",
    "One Hand Swords",
    "Pieces",
    "Quest Items",
    "Quivers",
    "Rings",
    "Sceptres",
    "Shields",
    "Stackable Currency",
    "Staves",
    "Support Skill Gems",
    "Thrusting One Hand Swords",
    "Two Hand Axes",
    "Two Hand Maces",
    "Two Hand Swords",
    "Utility Flasks",
    "Wands",
];

const BUILTIN_SOUNDS: &[&str] = &[
    "ShAlchemy",
    "ShBlessed",
    "ShChaos",
    "ShDivine",
    "ShExalted",
    "ShFusing",
    "ShGeneral",
    "ShMirror",
    "ShRegal",
    "ShVaal",
];

impl ValidationData {
    /// The vocabularies shipped with the engine. Base types are left empty:
    /// they change every game patch and come from a dataset file instead.
    pub fn builtin() -> Self {
        Self {
            valid_classes: BUILTIN_CLASSES.iter().map(|s| s.to_string()).collect(),
            valid_bases: Vec::new(),
            valid_sounds: BUILTIN_SOUNDS.iter().map(|s| s.to_string()).collect(),
            class_whitelist: Vec::new(),
            base_whitelist: Vec::new(),
            unknown_keywords: UnknownKeywordPolicy::Ignore,
        }
    }

    pub fn is_class(&self, value: &str) -> bool {
        contains(&self.valid_classes, value) || contains(&self.class_whitelist, value)
    }

    pub fn is_base(&self, value: &str) -> bool {
        contains(&self.valid_bases, value) || contains(&self.base_whitelist, value)
    }

    pub fn is_sound(&self, value: &str) -> bool {
        contains(&self.valid_sounds, value)
    }

    /// Item classes a completion component may offer: valid list, then whitelist.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        union(&self.valid_classes, &self.class_whitelist)
    }

    /// Base types a completion component may offer: valid list, then whitelist.
    pub fn bases(&self) -> impl Iterator<Item = &str> {
        union(&self.valid_bases, &self.base_whitelist)
    }

    pub fn sounds(&self) -> impl Iterator<Item = &str> {
        self.valid_sounds.iter().map(String::as_str)
    }
}

fn contains(list: &[String], value: &str) -> bool {
    list.iter().any(|entry| entry == value)
}

fn union<'a>(valid: &'a [String], whitelist: &'a [String]) -> impl Iterator<Item = &'a str> {
    valid.iter().map(String::as_str).chain(
        whitelist
            .iter()
            .map(String::as_str)
            .filter(move |w| !contains(valid, w)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> ValidationData {
        ValidationData {
            valid_classes: vec!["Boots".into(), "Rings".into()],
            class_whitelist: vec!["Gloves".into(), "Boots".into()],
            base_whitelist: vec!["Maelström Staff".into()],
            ..ValidationData::default()
        }
    }

    #[test]
    fn membership_checks_valid_list_and_whitelist() {
        let data = data();
        assert!(data.is_class("Boots"));
        assert!(data.is_class("Gloves"));
        assert!(!data.is_class("boots"));
        assert!(data.is_base("Maelström Staff"));
        assert!(!data.is_base("Boots"));
    }

    #[test]
    fn vocabulary_union_skips_duplicates() {
        let data = data();
        let classes: Vec<_> = data.classes().collect();
        assert_eq!(classes, vec!["Boots", "Rings", "Gloves"]);
    }

    #[test]
    fn builtin_has_classes_and_sounds() {
        let data = ValidationData::builtin();
        assert!(data.is_class("Stackable Currency"));
        assert!(data.is_sound("ShExalted"));
        assert!(data.bases().next().is_none());
        assert_eq!(data.unknown_keywords, UnknownKeywordPolicy::Ignore);
    }
}
