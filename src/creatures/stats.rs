//! The nine characteristics of a creature profile.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const STAT_MIN: i32 = 0;
pub const STAT_MAX: i32 = 99;
/// Highest characteristic bonus before unnatural multipliers.
pub const BONUS_CAP: i32 = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Characteristic {
    WeaponSkill,
    BallisticSkill,
    Strength,
    Toughness,
    Agility,
    Intelligence,
    Perception,
    Willpower,
    Fellowship,
}

impl Characteristic {
    pub const ALL: [Characteristic; 9] = [
        Characteristic::WeaponSkill,
        Characteristic::BallisticSkill,
        Characteristic::Strength,
        Characteristic::Toughness,
        Characteristic::Agility,
        Characteristic::Intelligence,
        Characteristic::Perception,
        Characteristic::Willpower,
        Characteristic::Fellowship,
    ];

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Characteristic::WeaponSkill => "WS",
            Characteristic::BallisticSkill => "BS",
            Characteristic::Strength => "S",
            Characteristic::Toughness => "T",
            Characteristic::Agility => "Ag",
            Characteristic::Intelligence => "Int",
            Characteristic::Perception => "Per",
            Characteristic::Willpower => "WP",
            Characteristic::Fellowship => "Fel",
        }
    }
}

/// Raw characteristic values, each kept within 0-99.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub weapon_skill: i32,
    pub ballistic_skill: i32,
    pub strength: i32,
    pub toughness: i32,
    pub agility: i32,
    pub intelligence: i32,
    pub perception: i32,
    pub willpower: i32,
    pub fellowship: i32,
}

impl Stats {
    /// Values in [`Characteristic::ALL`] order.
    pub fn from_array(values: [i32; 9]) -> Self {
        let mut stats = Stats::default();
        for (characteristic, value) in Characteristic::ALL.iter().zip(values) {
            stats.set(*characteristic, value);
        }
        stats
    }

    pub fn get(&self, characteristic: Characteristic) -> i32 {
        match characteristic {
            Characteristic::WeaponSkill => self.weapon_skill,
            Characteristic::BallisticSkill => self.ballistic_skill,
            Characteristic::Strength => self.strength,
            Characteristic::Toughness => self.toughness,
            Characteristic::Agility => self.agility,
            Characteristic::Intelligence => self.intelligence,
            Characteristic::Perception => self.perception,
            Characteristic::Willpower => self.willpower,
            Characteristic::Fellowship => self.fellowship,
        }
    }

    /// Set a characteristic, clamped to 0-99.
    pub fn set(&mut self, characteristic: Characteristic, value: i32) {
        let value = value.clamp(STAT_MIN, STAT_MAX);
        let slot = match characteristic {
            Characteristic::WeaponSkill => &mut self.weapon_skill,
            Characteristic::BallisticSkill => &mut self.ballistic_skill,
            Characteristic::Strength => &mut self.strength,
            Characteristic::Toughness => &mut self.toughness,
            Characteristic::Agility => &mut self.agility,
            Characteristic::Intelligence => &mut self.intelligence,
            Characteristic::Perception => &mut self.perception,
            Characteristic::Willpower => &mut self.willpower,
            Characteristic::Fellowship => &mut self.fellowship,
        };
        *slot = value;
    }

    pub fn add(&mut self, characteristic: Characteristic, delta: i32) {
        self.set(characteristic, self.get(characteristic) + delta);
    }

    /// `floor(value / 10)`, capped at 9.
    pub fn bonus(&self, characteristic: Characteristic) -> i32 {
        characteristic_bonus(self.get(characteristic))
    }
}

pub fn characteristic_bonus(value: i32) -> i32 {
    (value.max(0) / 10).min(BONUS_CAP)
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Characteristic::ALL
            .iter()
            .map(|c| format!("{} {}", c.abbreviation(), self.get(*c)))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}
