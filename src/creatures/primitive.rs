//! Primitive xenos: roughly human-scale tool users.

use super::profile::{CreatureOrigin, CreatureProfile};
use super::stats::{Characteristic, Stats};
use super::traits::{CreatureTrait, Traits};
use super::weapons::{DamageType, Weapon, WeaponQuality};
use super::{compound_name, GenerateCreature};
use crate::dice::{d5, roll_die, RandomSource};
use crate::tables::{Outcome, RecursiveTable};

const PREFIXES: &[&str] = &["Kae", "Vor", "Ith", "Mor", "Sel", "Dra", "Ulth", "Ny"];
const SUFFIXES: &[&str] = &["Kin", "Folk", "Tribe", "Clan", "Ari"];

const EXTRA_TRAITS: RecursiveTable<CreatureTrait> = RecursiveTable::new(
    10,
    &[
        (1, Outcome::Value(CreatureTrait::Deadly)),
        (2, Outcome::Value(CreatureTrait::Mighty)),
        (3, Outcome::Value(CreatureTrait::Resilient)),
        (4, Outcome::Value(CreatureTrait::Stealthy)),
        (5, Outcome::Value(CreatureTrait::Swift)),
        (6, Outcome::Value(CreatureTrait::Sturdy)),
        (7, Outcome::Value(CreatureTrait::DarkSight)),
        (8, Outcome::Value(CreatureTrait::Amphibious)),
        (9, Outcome::Value(CreatureTrait::MultipleArms)),
        (10, Outcome::Recurse(2)),
    ],
);

pub struct PrimitiveGenerator;

impl GenerateCreature for PrimitiveGenerator {
    fn generate(&self, rng: &mut impl RandomSource) -> CreatureProfile {
        let mut stats = Stats::default();
        for characteristic in Characteristic::ALL {
            stats.set(characteristic, 20 + roll_die(rng, 10, 2));
        }
        let wounds = 8 + d5(rng);

        let mut traits = Traits::new();
        let slots = (d5(rng) - 3).max(0) as u32;
        for extra in EXTRA_TRAITS.roll_slots(rng, slots, 0) {
            traits.add(extra, 1);
        }

        let name = compound_name(rng, PREFIXES, SUFFIXES);
        CreatureProfile::new(name, CreatureOrigin::Primitive, stats, wounds)
            .with_traits(traits)
            .with_weapon(
                Weapon::melee("Primitive Spear", 1, DamageType::Rending)
                    .with_quality(WeaponQuality::Primitive),
            )
            .with_weapon(
                Weapon::ranged("Primitive Bow", 30, 1, DamageType::Rending)
                    .with_quality(WeaponQuality::Primitive),
            )
            .with_skill("Survival", 0)
            .with_skill("Awareness", 0)
            .with_skill("Tracking", 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedRolls;

    #[test]
    fn test_minimum_primitive() {
        let mut rng = ScriptedRolls::always_min();
        let profile = PrimitiveGenerator.generate(&mut rng);
        assert_eq!(profile.stats.get(Characteristic::Strength), 22);
        assert_eq!(profile.wounds, 9);
        assert!(profile.traits.is_empty());

        let composed = profile.compose();
        assert_eq!(
            composed.weapon_strings(),
            vec![
                "Primitive Spear (Melee; 1d10+2 R; Pen 0; Primitive)".to_string(),
                "Primitive Bow (30m; 1d10 R; Pen 0; Primitive)".to_string(),
            ]
        );
    }

    #[test]
    fn test_stats_stay_human_scale() {
        let mut rng = ScriptedRolls::always_max();
        let profile = PrimitiveGenerator.generate(&mut rng);
        for characteristic in Characteristic::ALL {
            assert_eq!(profile.stats.get(characteristic), 40);
        }
    }
}
