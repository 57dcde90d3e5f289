//! Notable xenos species from the core system tables.
//!
//! Each archetype is a fixed base profile; a handful of extra traits is
//! rolled on top of it.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::profile::{CreatureOrigin, CreatureProfile};
use super::stats::Stats;
use super::traits::{CreatureTrait, Traits};
use super::weapons::{DamageType, Weapon, WeaponQuality};
use super::{compound_name, GenerateCreature};
use crate::dice::{d5, RandomSource};
use crate::tables::{Outcome, RecursiveTable};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    ApexPredator,
    Behemoth,
    PteraBeast,
    ShadowInTheDark,
    VenomousTerror,
    WarpPredator,
}

impl Archetype {
    pub const ALL: [Archetype; 6] = [
        Archetype::ApexPredator,
        Archetype::Behemoth,
        Archetype::PteraBeast,
        Archetype::ShadowInTheDark,
        Archetype::VenomousTerror,
        Archetype::WarpPredator,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Archetype::ApexPredator => "Apex Predator",
            Archetype::Behemoth => "Behemoth",
            Archetype::PteraBeast => "Ptera-Beast",
            Archetype::ShadowInTheDark => "Shadow in the Dark",
            Archetype::VenomousTerror => "Venomous Terror",
            Archetype::WarpPredator => "Warp Predator",
        }
    }

    /// Case-insensitive lookup that also ignores spaces, dashes and underscores.
    pub fn from_name(name: &str) -> Option<Self> {
        let squash = |s: &str| {
            s.chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_ascii_lowercase()
        };
        let wanted = squash(name);
        Self::ALL.iter().copied().find(|a| squash(a.name()) == wanted)
    }

    fn suffixes(&self) -> &'static [&'static str] {
        match self {
            Archetype::ApexPredator => &["Stalker", "Ravager", "Render", "Hunter"],
            Archetype::Behemoth => &["Hulk", "Titan", "Mauler", "Colossus"],
            Archetype::PteraBeast => &["Wing", "Swooper", "Shrieker", "Glider"],
            Archetype::ShadowInTheDark => &["Lurker", "Creeper", "Shade", "Whisper"],
            Archetype::VenomousTerror => &["Stinger", "Crawler", "Fang", "Spitter"],
            Archetype::WarpPredator => &["Wraith", "Horror", "Devourer", "Shade"],
        }
    }

    /// Base statline, wounds and starting traits.
    fn base_profile(&self) -> CreatureProfile {
        let origin = CreatureOrigin::Inequity {
            archetype: self.name().to_string(),
        };
        let claws = Weapon::melee("Teeth and Claws", 1, DamageType::Rending)
            .natural()
            .with_quality(WeaponQuality::Primitive);

        match self {
            Archetype::ApexPredator => CreatureProfile::new(
                self.name(),
                origin,
                Stats::from_array([45, 0, 50, 45, 40, 15, 40, 35, 5]),
                20,
            )
            .with_traits(
                Traits::new()
                    .with(CreatureTrait::Size, 5)
                    .with(CreatureTrait::Apex, 1)
                    .with(CreatureTrait::NaturalWeapons, 1)
                    .with(CreatureTrait::Bestial, 1)
                    .with(CreatureTrait::Quadruped, 1),
            )
            .with_skill("Awareness", 10)
            .with_skill("Tracking", 0),
            Archetype::Behemoth => CreatureProfile::new(
                self.name(),
                origin,
                Stats::from_array([40, 0, 60, 60, 20, 10, 30, 40, 5]),
                40,
            )
            .with_traits(
                Traits::new()
                    .with(CreatureTrait::Size, 7)
                    .with(CreatureTrait::Armoured, 1)
                    .with(CreatureTrait::UnnaturalToughness, 1)
                    .with(CreatureTrait::BrutalCharge, 1)
                    .with(CreatureTrait::Bestial, 1)
                    .with(CreatureTrait::Quadruped, 1),
            )
            .with_weapon(
                Weapon::melee("Trampling Bulk", 2, DamageType::Impact)
                    .natural()
                    .with_quality(WeaponQuality::Primitive),
            )
            .with_skill("Awareness", 0),
            Archetype::PteraBeast => CreatureProfile::new(
                self.name(),
                origin,
                Stats::from_array([35, 0, 35, 30, 45, 15, 45, 30, 5]),
                14,
            )
            .with_traits(
                Traits::new()
                    .with(CreatureTrait::Size, 5)
                    .with(CreatureTrait::Flyer, 10)
                    .with(CreatureTrait::NaturalWeapons, 1)
                    .with(CreatureTrait::Bestial, 1),
            )
            .with_skill("Awareness", 20),
            Archetype::ShadowInTheDark => CreatureProfile::new(
                self.name(),
                origin,
                Stats::from_array([40, 0, 35, 35, 50, 20, 45, 35, 5]),
                12,
            )
            .with_traits(
                Traits::new()
                    .with(CreatureTrait::Stealthy, 1)
                    .with(CreatureTrait::DarkSight, 1)
                    .with(CreatureTrait::Fear, 1)
                    .with(CreatureTrait::Bestial, 1),
            )
            .with_weapon(claws),
            Archetype::VenomousTerror => CreatureProfile::new(
                self.name(),
                origin,
                Stats::from_array([40, 0, 35, 40, 40, 10, 35, 30, 5]),
                14,
            )
            .with_traits(
                Traits::new()
                    .with(CreatureTrait::Venomous, 1)
                    .with(CreatureTrait::Crawler, 1)
                    .with(CreatureTrait::Bestial, 1),
            )
            .with_weapon(claws)
            .with_skill("Concealment", 0),
            Archetype::WarpPredator => CreatureProfile::new(
                self.name(),
                origin,
                Stats::from_array([45, 0, 45, 45, 45, 25, 45, 50, 5]),
                18,
            )
            .with_traits(
                Traits::new()
                    .with(CreatureTrait::Fear, 2)
                    .with(CreatureTrait::Hoverer, 6)
                    .with(CreatureTrait::DarkSight, 1)
                    .with(CreatureTrait::Fearless, 1)
                    .with(CreatureTrait::NaturalWeapons, 1),
            )
            .with_skill("Awareness", 10)
            .with_talent("Resistance (Psychic Powers)"),
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const PREFIXES: &[&str] = &["Blood", "Void", "Ash", "Grim", "Night", "Iron", "Bone", "Storm"];

const EXTRA_TRAITS: RecursiveTable<CreatureTrait> = RecursiveTable::new(
    10,
    &[
        (1, Outcome::Value(CreatureTrait::Armoured)),
        (2, Outcome::Value(CreatureTrait::Deadly)),
        (3, Outcome::Value(CreatureTrait::Mighty)),
        (4, Outcome::Value(CreatureTrait::Resilient)),
        (5, Outcome::Value(CreatureTrait::Stealthy)),
        (6, Outcome::Value(CreatureTrait::Swift)),
        (7, Outcome::Value(CreatureTrait::Thrashing)),
        (8, Outcome::Value(CreatureTrait::Sturdy)),
        (9, Outcome::Value(CreatureTrait::ImprovedNaturalWeapons)),
        (10, Outcome::Recurse(2)),
    ],
);

pub struct InequityGenerator {
    archetype: Archetype,
}

impl InequityGenerator {
    pub fn new(archetype: Archetype) -> Self {
        Self { archetype }
    }
}

impl GenerateCreature for InequityGenerator {
    fn generate(&self, rng: &mut impl RandomSource) -> CreatureProfile {
        let mut profile = self.archetype.base_profile();

        let slots = (d5(rng) - 2).max(0) as u32;
        for extra in EXTRA_TRAITS.roll_slots(rng, slots, 0) {
            profile.traits.add(extra, 1);
        }

        profile.name = compound_name(rng, PREFIXES, self.archetype.suffixes());
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedRolls;

    #[test]
    fn test_archetype_names_parse() {
        assert_eq!(Archetype::from_name("shadow-in-the-dark"), Some(Archetype::ShadowInTheDark));
        assert_eq!(Archetype::from_name("ptera_beast"), Some(Archetype::PteraBeast));
        assert_eq!(Archetype::from_name("Dragon"), None);
    }

    #[test]
    fn test_low_roll_adds_no_extra_traits() {
        let mut rng = ScriptedRolls::always_min();
        let profile = InequityGenerator::new(Archetype::Behemoth).generate(&mut rng);
        assert_eq!(profile.traits, Archetype::Behemoth.base_profile().traits);
        assert_eq!(profile.origin, CreatureOrigin::Inequity { archetype: "Behemoth".into() });
    }

    #[test]
    fn test_extra_traits_stack_on_base() {
        // d5 = 4 gives two slots, both Deadly
        let mut rng = ScriptedRolls::new([4, 2, 2]);
        let profile = InequityGenerator::new(Archetype::ApexPredator).generate(&mut rng);
        assert_eq!(profile.traits.intensity(CreatureTrait::Deadly), 2);
        assert_eq!(profile.traits.intensity(CreatureTrait::Apex), 1);
    }

    #[test]
    fn test_always_max_terminates() {
        let mut rng = ScriptedRolls::always_max();
        let profile = InequityGenerator::new(Archetype::WarpPredator).generate(&mut rng);
        // Every extra slot recursed until the budget ran out
        assert_eq!(profile.traits, Archetype::WarpPredator.base_profile().traits);
    }
}
