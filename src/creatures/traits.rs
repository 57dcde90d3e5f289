//! Creature traits and the trait multiset.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Every trait the composition engine knows how to apply.
///
/// Variants are listed in application order. A trait's effect may grant
/// intensity to traits declared after it, never before it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CreatureTrait {
    Size,
    Apex,
    Silicate,
    Armoured,
    Deadly,
    Mighty,
    Resilient,
    Stealthy,
    Sturdy,
    UnnaturalStrength,
    UnnaturalToughness,
    UnnaturalAgility,
    NaturalArmour,
    NaturalWeapons,
    MultipleArms,
    Thrashing,
    ProjectileAttack,
    Venomous,
    ImprovedNaturalWeapons,
    LethalDefences,
    BrutalCharge,
    Fear,
    Flyer,
    Hoverer,
    Burrower,
    Amphibious,
    DarkSight,
    SonarSense,
    Bestial,
    Fearless,
    Swift,
    UnnaturalSpeed,
    Quadruped,
    Crawler,
    Sessile,
}

impl CreatureTrait {
    pub const ALL: [CreatureTrait; 35] = [
        CreatureTrait::Size,
        CreatureTrait::Apex,
        CreatureTrait::Silicate,
        CreatureTrait::Armoured,
        CreatureTrait::Deadly,
        CreatureTrait::Mighty,
        CreatureTrait::Resilient,
        CreatureTrait::Stealthy,
        CreatureTrait::Sturdy,
        CreatureTrait::UnnaturalStrength,
        CreatureTrait::UnnaturalToughness,
        CreatureTrait::UnnaturalAgility,
        CreatureTrait::NaturalArmour,
        CreatureTrait::NaturalWeapons,
        CreatureTrait::MultipleArms,
        CreatureTrait::Thrashing,
        CreatureTrait::ProjectileAttack,
        CreatureTrait::Venomous,
        CreatureTrait::ImprovedNaturalWeapons,
        CreatureTrait::LethalDefences,
        CreatureTrait::BrutalCharge,
        CreatureTrait::Fear,
        CreatureTrait::Flyer,
        CreatureTrait::Hoverer,
        CreatureTrait::Burrower,
        CreatureTrait::Amphibious,
        CreatureTrait::DarkSight,
        CreatureTrait::SonarSense,
        CreatureTrait::Bestial,
        CreatureTrait::Fearless,
        CreatureTrait::Swift,
        CreatureTrait::UnnaturalSpeed,
        CreatureTrait::Quadruped,
        CreatureTrait::Crawler,
        CreatureTrait::Sessile,
    ];

    /// Key used in a profile's trait map.
    pub fn name(&self) -> &'static str {
        match self {
            CreatureTrait::Size => "Size",
            CreatureTrait::Apex => "Apex",
            CreatureTrait::Silicate => "Silicate",
            CreatureTrait::Armoured => "Armoured",
            CreatureTrait::Deadly => "Deadly",
            CreatureTrait::Mighty => "Mighty",
            CreatureTrait::Resilient => "Resilient",
            CreatureTrait::Stealthy => "Stealthy",
            CreatureTrait::Sturdy => "Sturdy",
            CreatureTrait::UnnaturalStrength => "Unnatural Strength",
            CreatureTrait::UnnaturalToughness => "Unnatural Toughness",
            CreatureTrait::UnnaturalAgility => "Unnatural Agility",
            CreatureTrait::NaturalArmour => "Natural Armour",
            CreatureTrait::NaturalWeapons => "Natural Weapons",
            CreatureTrait::MultipleArms => "Multiple Arms",
            CreatureTrait::Thrashing => "Thrashing",
            CreatureTrait::ProjectileAttack => "Projectile Attack",
            CreatureTrait::Venomous => "Venomous",
            CreatureTrait::ImprovedNaturalWeapons => "Improved Natural Weapons",
            CreatureTrait::LethalDefences => "Lethal Defences",
            CreatureTrait::BrutalCharge => "Brutal Charge",
            CreatureTrait::Fear => "Fear",
            CreatureTrait::Flyer => "Flyer",
            CreatureTrait::Hoverer => "Hoverer",
            CreatureTrait::Burrower => "Burrower",
            CreatureTrait::Amphibious => "Amphibious",
            CreatureTrait::DarkSight => "Dark Sight",
            CreatureTrait::SonarSense => "Sonar Sense",
            CreatureTrait::Bestial => "Bestial",
            CreatureTrait::Fearless => "Fearless",
            CreatureTrait::Swift => "Swift",
            CreatureTrait::UnnaturalSpeed => "Unnatural Speed",
            CreatureTrait::Quadruped => "Quadruped",
            CreatureTrait::Crawler => "Crawler",
            CreatureTrait::Sessile => "Sessile",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Whether the intensity is shown next to the name ("Fear (2)").
    fn shows_intensity(&self) -> bool {
        matches!(
            self,
            CreatureTrait::Fear
                | CreatureTrait::Flyer
                | CreatureTrait::Hoverer
                | CreatureTrait::Burrower
                | CreatureTrait::NaturalArmour
                | CreatureTrait::Apex
        )
    }

    /// Display label for a trait at some intensity.
    pub fn label(&self, intensity: u32) -> String {
        match self {
            CreatureTrait::Size => format!("Size ({})", CreatureSize::from_intensity(intensity).label()),
            CreatureTrait::UnnaturalStrength
            | CreatureTrait::UnnaturalToughness
            | CreatureTrait::UnnaturalAgility => format!("{} (x{})", self.name(), intensity + 1),
            t if t.shows_intensity() => format!("{} ({})", t.name(), intensity),
            t => t.name().to_string(),
        }
    }
}

impl fmt::Display for CreatureTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Body size, stored as the intensity of the Size trait.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CreatureSize {
    Miniscule = 1,
    Puny = 2,
    Scrawny = 3,
    Average = 4,
    Hulking = 5,
    Enormous = 6,
    Massive = 7,
}

impl CreatureSize {
    /// Size for a Size-trait intensity; an absent trait means Average.
    pub fn from_intensity(intensity: u32) -> Self {
        match intensity {
            0 => CreatureSize::Average,
            1 => CreatureSize::Miniscule,
            2 => CreatureSize::Puny,
            3 => CreatureSize::Scrawny,
            4 => CreatureSize::Average,
            5 => CreatureSize::Hulking,
            6 => CreatureSize::Enormous,
            _ => CreatureSize::Massive,
        }
    }

    pub fn intensity(&self) -> u32 {
        *self as u32
    }

    /// Steps away from Average; negative for small creatures.
    pub fn steps_from_average(&self) -> i32 {
        *self as i32 - CreatureSize::Average as i32
    }

    pub fn label(&self) -> &'static str {
        match self {
            CreatureSize::Miniscule => "Miniscule",
            CreatureSize::Puny => "Puny",
            CreatureSize::Scrawny => "Scrawny",
            CreatureSize::Average => "Average",
            CreatureSize::Hulking => "Hulking",
            CreatureSize::Enormous => "Enormous",
            CreatureSize::Massive => "Massive",
        }
    }
}

/// Named trait intensities. Intensity 0 means absent.
///
/// Keys are plain names so profiles written by newer tables still load;
/// names the engine does not know are kept but never applied.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Traits(BTreeMap<String, u32>);

impl Traits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, creature_trait: CreatureTrait, intensity: u32) -> Self {
        self.add(creature_trait, intensity);
        self
    }

    pub fn intensity(&self, creature_trait: CreatureTrait) -> u32 {
        self.0.get(creature_trait.name()).copied().unwrap_or(0)
    }

    pub fn has(&self, creature_trait: CreatureTrait) -> bool {
        self.intensity(creature_trait) > 0
    }

    /// Increase a trait's intensity.
    pub fn add(&mut self, creature_trait: CreatureTrait, amount: u32) {
        if amount == 0 {
            return;
        }
        *self.0.entry(creature_trait.name().to_string()).or_insert(0) += amount;
    }

    /// Overwrite a trait's intensity; 0 removes it.
    pub fn set(&mut self, creature_trait: CreatureTrait, intensity: u32) {
        if intensity == 0 {
            self.0.remove(creature_trait.name());
        } else {
            self.0.insert(creature_trait.name().to_string(), intensity);
        }
    }

    /// Insert an arbitrary key, known or not.
    pub fn insert_raw(&mut self, name: impl Into<String>, intensity: u32) {
        if intensity > 0 {
            self.0.insert(name.into(), intensity);
        }
    }

    pub fn size(&self) -> CreatureSize {
        CreatureSize::from_intensity(self.intensity(CreatureTrait::Size))
    }

    /// Known traits present, in application order.
    pub fn known(&self) -> impl Iterator<Item = (CreatureTrait, u32)> + '_ {
        CreatureTrait::ALL
            .iter()
            .map(move |t| (*t, self.intensity(*t)))
            .filter(|(_, n)| *n > 0)
    }

    /// Keys that do not name a known trait.
    pub fn unrecognized(&self) -> Vec<&str> {
        self.0
            .keys()
            .filter(|k| CreatureTrait::ALL.iter().all(|t| t.name() != k.as_str()))
            .map(String::as_str)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|n| *n == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accumulates() {
        let mut traits = Traits::new();
        traits.add(CreatureTrait::UnnaturalStrength, 1);
        traits.add(CreatureTrait::UnnaturalStrength, 1);
        assert_eq!(traits.intensity(CreatureTrait::UnnaturalStrength), 2);
    }

    #[test]
    fn test_absent_size_is_average() {
        assert_eq!(Traits::new().size(), CreatureSize::Average);
        let hulking = Traits::new().with(CreatureTrait::Size, 5);
        assert_eq!(hulking.size(), CreatureSize::Hulking);
    }

    #[test]
    fn test_unknown_keys_are_reported_not_applied() {
        let mut traits = Traits::new().with(CreatureTrait::Bestial, 1);
        traits.insert_raw("Warp Instability", 1);
        assert_eq!(traits.unrecognized(), vec!["Warp Instability"]);
        assert_eq!(traits.known().count(), 1);
    }

    #[test]
    fn test_names_round_trip() {
        for t in CreatureTrait::ALL {
            assert_eq!(CreatureTrait::from_name(t.name()), Some(t));
        }
    }

    #[test]
    fn test_all_is_declaration_order() {
        let mut sorted = CreatureTrait::ALL;
        sorted.sort();
        assert_eq!(sorted, CreatureTrait::ALL);
    }

    #[test]
    fn test_labels() {
        assert_eq!(CreatureTrait::UnnaturalStrength.label(1), "Unnatural Strength (x2)");
        assert_eq!(CreatureTrait::Fear.label(3), "Fear (3)");
        assert_eq!(CreatureTrait::Size.label(6), "Size (Enormous)");
        assert_eq!(CreatureTrait::Bestial.label(1), "Bestial");
    }
}
