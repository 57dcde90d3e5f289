//! Fauna and flora built from world-specific trait tables.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::profile::{CreatureOrigin, CreatureProfile};
use super::stats::Stats;
use super::traits::{CreatureTrait, Traits};
use super::weapons::{DamageType, Weapon, WeaponQuality};
use super::{compound_name, GenerateCreature};
use crate::dice::{d5, RandomSource};
use crate::tables::{Outcome, RecursiveTable, Table};

/// The kind of world a creature evolved on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorldType {
    DeathWorld,
    DesertWorld,
    IceWorld,
    JungleWorld,
    OceanWorld,
    TemperateWorld,
    VolcanicWorld,
}

impl WorldType {
    pub const ALL: [WorldType; 7] = [
        WorldType::DeathWorld,
        WorldType::DesertWorld,
        WorldType::IceWorld,
        WorldType::JungleWorld,
        WorldType::OceanWorld,
        WorldType::TemperateWorld,
        WorldType::VolcanicWorld,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WorldType::DeathWorld => "Death World",
            WorldType::DesertWorld => "Desert World",
            WorldType::IceWorld => "Ice World",
            WorldType::JungleWorld => "Jungle World",
            WorldType::OceanWorld => "Ocean World",
            WorldType::TemperateWorld => "Temperate World",
            WorldType::VolcanicWorld => "Volcanic World",
        }
    }

    /// Parse "Ice World", "ice" or "ice_world". Anything unrecognised is a
    /// temperate world.
    pub fn from_name(name: &str) -> Self {
        let wanted: String = name
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        let wanted = wanted.strip_suffix("world").unwrap_or(&wanted);

        let found = Self::ALL.iter().copied().find(|w| {
            let short = w.name().trim_end_matches(" World").replace(' ', "");
            short.eq_ignore_ascii_case(wanted)
        });
        match found {
            Some(world) => world,
            None => {
                tracing::debug!(name, "unknown world type, using Temperate World");
                WorldType::TemperateWorld
            }
        }
    }

    fn trait_table(&self) -> &'static RecursiveTable<CreatureTrait> {
        match self {
            WorldType::DeathWorld => &DEATH_WORLD_TRAITS,
            WorldType::DesertWorld => &DESERT_WORLD_TRAITS,
            WorldType::IceWorld => &ICE_WORLD_TRAITS,
            WorldType::JungleWorld => &JUNGLE_WORLD_TRAITS,
            WorldType::OceanWorld => &OCEAN_WORLD_TRAITS,
            WorldType::TemperateWorld => &TEMPERATE_WORLD_TRAITS,
            WorldType::VolcanicWorld => &VOLCANIC_WORLD_TRAITS,
        }
    }

    fn prefixes(&self) -> &'static [&'static str] {
        match self {
            WorldType::DeathWorld => &["Gore", "Razor", "Blood", "Bane"],
            WorldType::DesertWorld => &["Sand", "Dust", "Sun", "Dune"],
            WorldType::IceWorld => &["Frost", "Rime", "Snow", "Ice"],
            WorldType::JungleWorld => &["Vine", "Moss", "Thorn", "Canopy"],
            WorldType::OceanWorld => &["Deep", "Tide", "Brine", "Reef"],
            WorldType::TemperateWorld => &["Grass", "Hill", "River", "Field"],
            WorldType::VolcanicWorld => &["Ember", "Cinder", "Magma", "Ash"],
        }
    }
}

impl fmt::Display for WorldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const DEATH_WORLD_TRAITS: RecursiveTable<CreatureTrait> = RecursiveTable::new(
    100,
    &[
        (10, Outcome::Value(CreatureTrait::Apex)),
        (20, Outcome::Value(CreatureTrait::Armoured)),
        (30, Outcome::Value(CreatureTrait::Deadly)),
        (40, Outcome::Value(CreatureTrait::Mighty)),
        (50, Outcome::Value(CreatureTrait::Resilient)),
        (60, Outcome::Value(CreatureTrait::LethalDefences)),
        (70, Outcome::Value(CreatureTrait::Venomous)),
        (80, Outcome::Value(CreatureTrait::Thrashing)),
        (88, Outcome::Value(CreatureTrait::UnnaturalStrength)),
        (95, Outcome::Value(CreatureTrait::UnnaturalToughness)),
        (100, Outcome::Recurse(2)),
    ],
);

const DESERT_WORLD_TRAITS: RecursiveTable<CreatureTrait> = RecursiveTable::new(
    100,
    &[
        (12, Outcome::Value(CreatureTrait::Burrower)),
        (24, Outcome::Value(CreatureTrait::Crawler)),
        (36, Outcome::Value(CreatureTrait::Swift)),
        (48, Outcome::Value(CreatureTrait::Venomous)),
        (58, Outcome::Value(CreatureTrait::ProjectileAttack)),
        (68, Outcome::Value(CreatureTrait::Silicate)),
        (78, Outcome::Value(CreatureTrait::Armoured)),
        (88, Outcome::Value(CreatureTrait::NaturalArmour)),
        (95, Outcome::Value(CreatureTrait::DarkSight)),
        (100, Outcome::Recurse(2)),
    ],
);

const ICE_WORLD_TRAITS: RecursiveTable<CreatureTrait> = RecursiveTable::new(
    100,
    &[
        (20, Outcome::Value(CreatureTrait::NaturalArmour)),
        (35, Outcome::Value(CreatureTrait::Resilient)),
        (50, Outcome::Value(CreatureTrait::Sturdy)),
        (65, Outcome::Value(CreatureTrait::Quadruped)),
        (78, Outcome::Value(CreatureTrait::Burrower)),
        (88, Outcome::Value(CreatureTrait::Apex)),
        (95, Outcome::Value(CreatureTrait::Mighty)),
        (100, Outcome::Recurse(2)),
    ],
);

const JUNGLE_WORLD_TRAITS: RecursiveTable<CreatureTrait> = RecursiveTable::new(
    100,
    &[
        (15, Outcome::Value(CreatureTrait::Stealthy)),
        (27, Outcome::Value(CreatureTrait::MultipleArms)),
        (40, Outcome::Value(CreatureTrait::Venomous)),
        (52, Outcome::Value(CreatureTrait::Swift)),
        (62, Outcome::Value(CreatureTrait::Flyer)),
        (72, Outcome::Value(CreatureTrait::ProjectileAttack)),
        (84, Outcome::Value(CreatureTrait::ImprovedNaturalWeapons)),
        (95, Outcome::Value(CreatureTrait::Crawler)),
        (100, Outcome::Recurse(2)),
    ],
);

const OCEAN_WORLD_TRAITS: RecursiveTable<CreatureTrait> = RecursiveTable::new(
    100,
    &[
        (20, Outcome::Value(CreatureTrait::Amphibious)),
        (33, Outcome::Value(CreatureTrait::SonarSense)),
        (46, Outcome::Value(CreatureTrait::Thrashing)),
        (58, Outcome::Value(CreatureTrait::MultipleArms)),
        (70, Outcome::Value(CreatureTrait::ImprovedNaturalWeapons)),
        (83, Outcome::Value(CreatureTrait::NaturalArmour)),
        (95, Outcome::Value(CreatureTrait::Swift)),
        (100, Outcome::Recurse(2)),
    ],
);

const TEMPERATE_WORLD_TRAITS: RecursiveTable<CreatureTrait> = RecursiveTable::new(
    100,
    &[
        (15, Outcome::Value(CreatureTrait::Quadruped)),
        (30, Outcome::Value(CreatureTrait::Swift)),
        (42, Outcome::Value(CreatureTrait::Flyer)),
        (52, Outcome::Value(CreatureTrait::ProjectileAttack)),
        (64, Outcome::Value(CreatureTrait::NaturalArmour)),
        (76, Outcome::Value(CreatureTrait::ImprovedNaturalWeapons)),
        (85, Outcome::Value(CreatureTrait::UnnaturalSpeed)),
        (95, Outcome::Value(CreatureTrait::Sturdy)),
        (100, Outcome::Recurse(2)),
    ],
);

const VOLCANIC_WORLD_TRAITS: RecursiveTable<CreatureTrait> = RecursiveTable::new(
    100,
    &[
        (15, Outcome::Value(CreatureTrait::Silicate)),
        (27, Outcome::Value(CreatureTrait::Armoured)),
        (40, Outcome::Value(CreatureTrait::NaturalArmour)),
        (52, Outcome::Value(CreatureTrait::Resilient)),
        (64, Outcome::Value(CreatureTrait::ProjectileAttack)),
        (76, Outcome::Value(CreatureTrait::Burrower)),
        (86, Outcome::Value(CreatureTrait::UnnaturalToughness)),
        (95, Outcome::Value(CreatureTrait::DarkSight)),
        (100, Outcome::Recurse(2)),
    ],
);

/// Ecological niche of a fauna profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaunaBase {
    ApexPredator,
    LowOrderPredator,
    Grazer,
    Scavenger,
}

const FAUNA_BASES: Table<FaunaBase> = Table::new(
    10,
    &[
        (2, FaunaBase::ApexPredator),
        (5, FaunaBase::LowOrderPredator),
        (8, FaunaBase::Grazer),
        (10, FaunaBase::Scavenger),
    ],
);

impl FaunaBase {
    pub fn name(&self) -> &'static str {
        match self {
            FaunaBase::ApexPredator => "Apex Predator",
            FaunaBase::LowOrderPredator => "Low-Order Predator",
            FaunaBase::Grazer => "Grazer",
            FaunaBase::Scavenger => "Scavenger",
        }
    }

    fn suffixes(&self) -> &'static [&'static str] {
        match self {
            FaunaBase::ApexPredator => &["Stalker", "Ravager", "Tyrant"],
            FaunaBase::LowOrderPredator => &["Hound", "Prowler", "Snapper"],
            FaunaBase::Grazer => &["Strider", "Grazer", "Lumber"],
            FaunaBase::Scavenger => &["Skulker", "Gnawer", "Picker"],
        }
    }

    fn base_profile(&self, world: WorldType) -> CreatureProfile {
        let origin = CreatureOrigin::BestiaryFauna {
            base: self.name().to_string(),
            world: world.name().to_string(),
        };
        match self {
            FaunaBase::ApexPredator => CreatureProfile::new(
                self.name(),
                origin,
                Stats::from_array([45, 0, 45, 40, 40, 15, 40, 35, 5]),
                18,
            )
            .with_traits(
                Traits::new()
                    .with(CreatureTrait::Size, 5)
                    .with(CreatureTrait::Apex, 1)
                    .with(CreatureTrait::NaturalWeapons, 1)
                    .with(CreatureTrait::Bestial, 1),
            )
            .with_skill("Awareness", 10)
            .with_skill("Tracking", 0),
            FaunaBase::LowOrderPredator => CreatureProfile::new(
                self.name(),
                origin,
                Stats::from_array([35, 0, 35, 35, 40, 12, 38, 30, 5]),
                10,
            )
            .with_traits(
                Traits::new()
                    .with(CreatureTrait::NaturalWeapons, 1)
                    .with(CreatureTrait::Bestial, 1),
            )
            .with_skill("Awareness", 0),
            FaunaBase::Grazer => CreatureProfile::new(
                self.name(),
                origin,
                Stats::from_array([25, 0, 40, 45, 30, 10, 35, 25, 5]),
                16,
            )
            .with_traits(
                Traits::new()
                    .with(CreatureTrait::Size, 5)
                    .with(CreatureTrait::Quadruped, 1)
                    .with(CreatureTrait::Sturdy, 1)
                    .with(CreatureTrait::Bestial, 1),
            )
            .with_weapon(
                Weapon::melee("Horns", 1, DamageType::Impact)
                    .natural()
                    .with_quality(WeaponQuality::Primitive),
            ),
            FaunaBase::Scavenger => CreatureProfile::new(
                self.name(),
                origin,
                Stats::from_array([30, 0, 30, 30, 40, 14, 42, 25, 5]),
                8,
            )
            .with_traits(
                Traits::new()
                    .with(CreatureTrait::Size, 3)
                    .with(CreatureTrait::NaturalWeapons, 1)
                    .with(CreatureTrait::Bestial, 1),
            )
            .with_skill("Awareness", 10)
            .with_skill("Concealment", 0),
        }
    }
}

/// Mobile animal life.
pub struct FaunaGenerator {
    world: WorldType,
}

impl FaunaGenerator {
    pub fn new(world: WorldType) -> Self {
        Self { world }
    }
}

impl GenerateCreature for FaunaGenerator {
    fn generate(&self, rng: &mut impl RandomSource) -> CreatureProfile {
        let base = FAUNA_BASES.roll(rng, 0);
        let mut profile = base.base_profile(self.world);

        let slots = (d5(rng) - 1).max(0) as u32;
        for world_trait in self.world.trait_table().roll_slots(rng, slots, 0) {
            profile.traits.add(world_trait, 1);
        }

        profile.name = compound_name(rng, self.world.prefixes(), base.suffixes());
        profile
    }
}

const FLORA_SUFFIXES: &[&str] = &["Thorn", "Creeper", "Bloom", "Trap", "Spore"];

/// Sessile plant life.
pub struct FloraGenerator {
    world: WorldType,
}

impl FloraGenerator {
    pub fn new(world: WorldType) -> Self {
        Self { world }
    }

    fn base_profile(&self) -> CreatureProfile {
        CreatureProfile::new(
            "Flora",
            CreatureOrigin::BestiaryFlora {
                world: self.world.name().to_string(),
            },
            Stats::from_array([35, 0, 40, 40, 10, 0, 25, 20, 0]),
            15,
        )
        .with_traits(
            Traits::new()
                .with(CreatureTrait::Sessile, 1)
                .with(CreatureTrait::Fearless, 1)
                .with(CreatureTrait::DarkSight, 1),
        )
        .with_weapon(
            Weapon::melee("Grasping Tendrils", 1, DamageType::Impact)
                .natural()
                .with_quality(WeaponQuality::Snare),
        )
    }
}

impl GenerateCreature for FloraGenerator {
    fn generate(&self, rng: &mut impl RandomSource) -> CreatureProfile {
        let mut profile = self.base_profile();

        let slots = (d5(rng) - 2).max(0) as u32;
        for world_trait in self.world.trait_table().roll_slots(rng, slots, 0) {
            // Plants cannot take traits that only make sense on a moving body
            if matches!(
                world_trait,
                CreatureTrait::Swift
                    | CreatureTrait::UnnaturalSpeed
                    | CreatureTrait::Quadruped
                    | CreatureTrait::Crawler
                    | CreatureTrait::Flyer
                    | CreatureTrait::Burrower
            ) {
                continue;
            }
            profile.traits.add(world_trait, 1);
        }

        profile.name = compound_name(rng, self.world.prefixes(), FLORA_SUFFIXES);
        profile
    }
}
