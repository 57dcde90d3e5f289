//! Stored creature profiles.
//!
//! A profile holds only the source data that a statline is computed from.
//! Call [`CreatureProfile::compose`] to get the finished statline.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::compose::{compose, ComposedProfile};
use super::stats::Stats;
use super::traits::Traits;
use super::weapons::Weapon;

/// Which generator produced a profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreatureOrigin {
    Inequity { archetype: String },
    BestiaryFauna { base: String, world: String },
    BestiaryFlora { world: String },
    Primitive,
    Custom,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureProfile {
    pub name: String,
    pub origin: CreatureOrigin,
    pub stats: Stats,
    pub traits: Traits,
    /// Skill name to bonus (0 = trained, 10 = +10, ...).
    pub skills: BTreeMap<String, i32>,
    pub talents: BTreeSet<String>,
    /// Carried or innate weapons present before traits are applied.
    pub weapons: Vec<Weapon>,
    pub wounds: i32,
}

impl CreatureProfile {
    pub fn new(name: impl Into<String>, origin: CreatureOrigin, stats: Stats, wounds: i32) -> Self {
        Self {
            name: name.into(),
            origin,
            stats,
            traits: Traits::new(),
            skills: BTreeMap::new(),
            talents: BTreeSet::new(),
            weapons: Vec::new(),
            wounds,
        }
    }

    pub fn with_traits(mut self, traits: Traits) -> Self {
        self.traits = traits;
        self
    }

    pub fn with_skill(mut self, skill: &str, bonus: i32) -> Self {
        self.skills.insert(skill.to_string(), bonus);
        self
    }

    pub fn with_talent(mut self, talent: &str) -> Self {
        self.talents.insert(talent.to_string());
        self
    }

    pub fn with_weapon(mut self, weapon: Weapon) -> Self {
        self.weapons.push(weapon);
        self
    }

    /// Apply every trait and derive the finished statline.
    pub fn compose(&self) -> ComposedProfile {
        compose(self)
    }
}
