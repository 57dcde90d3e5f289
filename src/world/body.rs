//! Physical classifications of a celestial body and their lookup tables.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dice::{d5, RandomSource};
use crate::tables::Table;

/// Orbital zone around the system's star.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OrbitalZone {
    InnerCauldron,
    #[default]
    PrimaryBiosphere,
    OuterReaches,
}

impl OrbitalZone {
    pub const ALL: [OrbitalZone; 3] = [
        OrbitalZone::InnerCauldron,
        OrbitalZone::PrimaryBiosphere,
        OrbitalZone::OuterReaches,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OrbitalZone::InnerCauldron => "Inner Cauldron",
            OrbitalZone::PrimaryBiosphere => "Primary Biosphere",
            OrbitalZone::OuterReaches => "Outer Reaches",
        }
    }

    /// Shift applied to the climate roll.
    pub fn climate_shift(&self) -> i32 {
        match self {
            OrbitalZone::InnerCauldron => -6,
            OrbitalZone::PrimaryBiosphere => 0,
            OrbitalZone::OuterReaches => 6,
        }
    }
}

impl fmt::Display for OrbitalZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Size class from the d10 body roll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SizeClass {
    LowMass,
    Small,
    SmallAndDense,
    #[default]
    Large,
    LargeAndDense,
    Vast,
}

pub const SIZE_CLASSES: Table<SizeClass> = Table::new(
    10,
    &[
        (1, SizeClass::LowMass),
        (3, SizeClass::Small),
        (4, SizeClass::SmallAndDense),
        (7, SizeClass::Large),
        (8, SizeClass::LargeAndDense),
        (10, SizeClass::Vast),
    ],
);

impl SizeClass {
    pub const ALL: [SizeClass; 6] = [
        SizeClass::LowMass,
        SizeClass::Small,
        SizeClass::SmallAndDense,
        SizeClass::Large,
        SizeClass::LargeAndDense,
        SizeClass::Vast,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SizeClass::LowMass => "Low-Mass",
            SizeClass::Small => "Small",
            SizeClass::SmallAndDense => "Small and Dense",
            SizeClass::Large => "Large",
            SizeClass::LargeAndDense => "Large and Dense",
            SizeClass::Vast => "Vast",
        }
    }

    pub fn gravity_modifier(&self) -> i32 {
        match self {
            SizeClass::LowMass => -7,
            SizeClass::Small => -5,
            SizeClass::SmallAndDense | SizeClass::Large => 0,
            SizeClass::LargeAndDense => 5,
            SizeClass::Vast => 4,
        }
    }

    pub fn orbital_modifier(&self) -> i32 {
        match self {
            SizeClass::LowMass => -20,
            SizeClass::Small | SizeClass::SmallAndDense => -10,
            SizeClass::Large => 0,
            SizeClass::LargeAndDense => 10,
            SizeClass::Vast => 20,
        }
    }

    pub fn mineral_abundance_modifier(&self) -> i32 {
        match self {
            SizeClass::LowMass => -10,
            SizeClass::SmallAndDense | SizeClass::LargeAndDense => 10,
            _ => 0,
        }
    }

    /// Roll the number of mineral deposits a body of this size starts with.
    pub fn roll_base_minerals(&self, rng: &mut impl RandomSource) -> u32 {
        let offset = match self {
            SizeClass::LowMass => -3,
            SizeClass::Small => -2,
            SizeClass::SmallAndDense => -1,
            SizeClass::Large => 0,
            SizeClass::LargeAndDense | SizeClass::Vast => 1,
        };
        (d5(rng) + offset).max(0) as u32
    }

    pub fn island_modifier(&self) -> i32 {
        match self {
            SizeClass::LowMass => -5,
            SizeClass::Small | SizeClass::SmallAndDense => -3,
            SizeClass::Large | SizeClass::LargeAndDense => 0,
            SizeClass::Vast => 2,
        }
    }

    pub fn territory_modifier(&self) -> i32 {
        match self {
            SizeClass::LowMass => -2,
            SizeClass::Small | SizeClass::SmallAndDense => -1,
            SizeClass::Large => 0,
            SizeClass::LargeAndDense => 1,
            SizeClass::Vast => 2,
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gravity {
    Low,
    #[default]
    Normal,
    High,
}

pub const GRAVITY: Table<Gravity> = Table::new(10, &[(2, Gravity::Low), (8, Gravity::Normal), (10, Gravity::High)]);

impl Gravity {
    pub fn name(&self) -> &'static str {
        match self {
            Gravity::Low => "Low Gravity",
            Gravity::Normal => "Normal Gravity",
            Gravity::High => "High Gravity",
        }
    }

    /// Offset added to the d5 orbital feature count.
    pub fn feature_modifier(&self) -> i32 {
        match self {
            Gravity::Low => -3,
            Gravity::Normal => -2,
            Gravity::High => -1,
        }
    }

    pub fn atmosphere_modifier(&self) -> i32 {
        match self {
            Gravity::Low => -2,
            Gravity::Normal => 0,
            Gravity::High => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AtmospherePresence {
    #[default]
    None,
    Thin,
    Moderate,
    Heavy,
}

pub const ATMOSPHERE_PRESENCE: Table<AtmospherePresence> = Table::new(
    10,
    &[
        (1, AtmospherePresence::None),
        (4, AtmospherePresence::Thin),
        (9, AtmospherePresence::Moderate),
        (10, AtmospherePresence::Heavy),
    ],
);

impl AtmospherePresence {
    pub fn name(&self) -> &'static str {
        match self {
            AtmospherePresence::None => "No Atmosphere",
            AtmospherePresence::Thin => "Thin",
            AtmospherePresence::Moderate => "Moderate",
            AtmospherePresence::Heavy => "Heavy",
        }
    }

    pub fn habitability_modifier(&self) -> i32 {
        match self {
            AtmospherePresence::None => 0,
            AtmospherePresence::Thin | AtmospherePresence::Heavy => -1,
            AtmospherePresence::Moderate => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AtmosphereComposition {
    Deadly,
    Corrosive,
    Toxic,
    Tainted,
    Pure,
}

pub const ATMOSPHERE_COMPOSITION: Table<AtmosphereComposition> = Table::new(
    10,
    &[
        (1, AtmosphereComposition::Deadly),
        (2, AtmosphereComposition::Corrosive),
        (5, AtmosphereComposition::Toxic),
        (7, AtmosphereComposition::Tainted),
        (10, AtmosphereComposition::Pure),
    ],
);

impl AtmosphereComposition {
    pub fn name(&self) -> &'static str {
        match self {
            AtmosphereComposition::Deadly => "Deadly",
            AtmosphereComposition::Corrosive => "Corrosive",
            AtmosphereComposition::Toxic => "Toxic",
            AtmosphereComposition::Tainted => "Tainted",
            AtmosphereComposition::Pure => "Pure",
        }
    }

    /// Whether ordinary life can take hold under this air.
    pub fn supports_life(&self) -> bool {
        matches!(self, AtmosphereComposition::Tainted | AtmosphereComposition::Pure)
    }

    pub fn habitability_modifier(&self) -> i32 {
        match self {
            AtmosphereComposition::Pure => 2,
            _ => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Climate {
    BurningWorld,
    HotWorld,
    #[default]
    TemperateWorld,
    ColdWorld,
    IceWorld,
}

/// Rolled with the zone's climate shift applied.
pub const CLIMATE: Table<Climate> = Table::new(
    10,
    &[
        (0, Climate::BurningWorld),
        (3, Climate::HotWorld),
        (7, Climate::TemperateWorld),
        (10, Climate::ColdWorld),
        (11, Climate::IceWorld),
    ],
);

impl Climate {
    pub fn name(&self) -> &'static str {
        match self {
            Climate::BurningWorld => "Burning World",
            Climate::HotWorld => "Hot World",
            Climate::TemperateWorld => "Temperate World",
            Climate::ColdWorld => "Cold World",
            Climate::IceWorld => "Ice World",
        }
    }

    pub fn habitability_modifier(&self) -> i32 {
        match self {
            Climate::BurningWorld | Climate::IceWorld => -7,
            Climate::HotWorld | Climate::ColdWorld => -2,
            Climate::TemperateWorld => 0,
        }
    }

    /// Ceiling on the modified habitability roll.
    pub fn habitability_cap(&self) -> Option<i32> {
        match self {
            Climate::BurningWorld | Climate::IceWorld => Some(3),
            _ => None,
        }
    }
}

/// Ordered from least to most life-supporting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Habitability {
    #[default]
    Inhospitable,
    TrappedWater,
    LiquidWater,
    LimitedEcosystem,
    Verdant,
}

pub const HABITABILITY: Table<Habitability> = Table::new(
    10,
    &[
        (1, Habitability::Inhospitable),
        (2, Habitability::TrappedWater),
        (5, Habitability::LiquidWater),
        (7, Habitability::LimitedEcosystem),
        (8, Habitability::Verdant),
    ],
);

impl Habitability {
    pub const ALL: [Habitability; 5] = [
        Habitability::Inhospitable,
        Habitability::TrappedWater,
        Habitability::LiquidWater,
        Habitability::LimitedEcosystem,
        Habitability::Verdant,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Habitability::Inhospitable => "Inhospitable",
            Habitability::TrappedWater => "Trapped Water",
            Habitability::LiquidWater => "Liquid Water",
            Habitability::LimitedEcosystem => "Limited Ecosystem",
            Habitability::Verdant => "Verdant",
        }
    }

    /// Whether the surface supports territories and their ecosystems.
    pub fn has_ecosystem(&self) -> bool {
        *self >= Habitability::LimitedEcosystem
    }

    pub fn island_modifier(&self) -> i32 {
        match self {
            Habitability::LiquidWater => -2,
            Habitability::LimitedEcosystem => -1,
            _ => 0,
        }
    }

    pub fn territory_modifier(&self) -> i32 {
        match self {
            Habitability::LimitedEcosystem => -1,
            Habitability::Verdant => 1,
            _ => 0,
        }
    }

    /// Highest d10 roll that leaves the body inhabited.
    pub fn inhabitant_threshold(&self) -> i32 {
        match self {
            Habitability::Inhospitable => 2,
            Habitability::TrappedWater => 3,
            Habitability::LiquidWater => 4,
            Habitability::LimitedEcosystem => 6,
            Habitability::Verdant => 8,
        }
    }
}

impl fmt::Display for Habitability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_bands() {
        assert_eq!(SIZE_CLASSES.resolve(1), SizeClass::LowMass);
        assert_eq!(SIZE_CLASSES.resolve(2), SizeClass::Small);
        assert_eq!(SIZE_CLASSES.resolve(3), SizeClass::Small);
        assert_eq!(SIZE_CLASSES.resolve(4), SizeClass::SmallAndDense);
        assert_eq!(SIZE_CLASSES.resolve(7), SizeClass::Large);
        assert_eq!(SIZE_CLASSES.resolve(8), SizeClass::LargeAndDense);
        assert_eq!(SIZE_CLASSES.resolve(10), SizeClass::Vast);
    }

    #[test]
    fn test_climate_bands_shifted_by_zone() {
        assert_eq!(CLIMATE.resolve(1 + OrbitalZone::InnerCauldron.climate_shift()), Climate::BurningWorld);
        assert_eq!(CLIMATE.resolve(5), Climate::TemperateWorld);
        assert_eq!(CLIMATE.resolve(5 + OrbitalZone::OuterReaches.climate_shift()), Climate::IceWorld);
        assert_eq!(CLIMATE.resolve(10), Climate::ColdWorld);
    }

    #[test]
    fn test_extreme_climates_are_capped() {
        assert_eq!(Climate::IceWorld.habitability_cap(), Some(3));
        assert_eq!(Climate::BurningWorld.habitability_cap(), Some(3));
        assert_eq!(Climate::HotWorld.habitability_cap(), None);
        // The cap can never reach Limited Ecosystem
        assert_eq!(HABITABILITY.resolve(3), Habitability::LiquidWater);
    }

    #[test]
    fn test_habitability_is_ordered() {
        let mut sorted = Habitability::ALL;
        sorted.sort();
        assert_eq!(sorted, Habitability::ALL);
        assert!(Habitability::Verdant.has_ecosystem());
        assert!(!Habitability::LiquidWater.has_ecosystem());
    }
}
