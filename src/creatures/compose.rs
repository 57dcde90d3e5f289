//! Trait/stat composition engine.
//!
//! Traits are applied one at a time, in [`CreatureTrait::ALL`] order, to a
//! working copy of a profile. Effects can change characteristics, grant
//! intensity to later traits, add weapons, or upgrade weapons added earlier.
//! Derived values (bonuses, armour, wounds, movement) are computed only after
//! every trait has run, so traits granted along the way are counted once.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::profile::CreatureProfile;
use super::stats::{Characteristic, Stats};
use super::traits::{CreatureSize, CreatureTrait, Traits};
use super::weapons::{DamageType, Weapon, WeaponQuality};

/// Extra wounds per size step above Average.
const WOUNDS_PER_SIZE_STEP: i32 = 3;

/// Half, full, charge and run distances in metres.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    pub half: i32,
    pub full: i32,
    pub charge: i32,
    pub run: i32,
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}/{}", self.half, self.full, self.charge, self.run)
    }
}

/// Traits that change how a creature moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MovementFlags {
    pub swift: u32,
    pub unnatural_speed: bool,
    pub quadruped: bool,
    pub crawler: bool,
    pub sessile: bool,
}

impl MovementFlags {
    pub fn from_traits(traits: &Traits) -> Self {
        Self {
            swift: traits.intensity(CreatureTrait::Swift),
            unnatural_speed: traits.has(CreatureTrait::UnnaturalSpeed),
            quadruped: traits.has(CreatureTrait::Quadruped),
            crawler: traits.has(CreatureTrait::Crawler),
            sessile: traits.has(CreatureTrait::Sessile),
        }
    }
}

/// Movement from the final agility bonus, size and movement traits.
pub fn movement(agility_bonus: i32, size: CreatureSize, flags: &MovementFlags) -> Movement {
    if flags.sessile {
        return Movement::default();
    }

    let mut base = (agility_bonus + size.steps_from_average() + flags.swift as i32).max(1);
    if flags.unnatural_speed {
        base *= 2;
    }
    if flags.quadruped {
        base *= 2;
    }
    if flags.crawler {
        base = (base + 1) / 2;
    }

    Movement {
        half: base,
        full: base * 2,
        charge: base * 3,
        run: base * 6,
    }
}

/// Strength bonus multiplied by Unnatural Strength.
pub fn total_strength_bonus(stats: &Stats, traits: &Traits) -> i32 {
    multiplied_bonus(stats, traits, Characteristic::Strength, CreatureTrait::UnnaturalStrength)
}

/// Toughness bonus multiplied by Unnatural Toughness.
pub fn total_toughness_bonus(stats: &Stats, traits: &Traits) -> i32 {
    multiplied_bonus(stats, traits, Characteristic::Toughness, CreatureTrait::UnnaturalToughness)
}

/// Agility bonus multiplied by Unnatural Agility.
pub fn total_agility_bonus(stats: &Stats, traits: &Traits) -> i32 {
    multiplied_bonus(stats, traits, Characteristic::Agility, CreatureTrait::UnnaturalAgility)
}

fn multiplied_bonus(
    stats: &Stats,
    traits: &Traits,
    characteristic: Characteristic,
    unnatural: CreatureTrait,
) -> i32 {
    stats.bonus(characteristic) * (traits.intensity(unnatural) as i32 + 1)
}

/// A finished statline. Never stored; recompute from the profile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposedProfile {
    pub name: String,
    pub stats: Stats,
    pub traits: Traits,
    pub skills: BTreeMap<String, i32>,
    pub talents: BTreeSet<String>,
    pub weapons: Vec<Weapon>,
    pub strength_bonus: i32,
    pub toughness_bonus: i32,
    pub agility_bonus: i32,
    pub armour: i32,
    pub wounds: i32,
    pub movement: Movement,
    /// Rules text for effects that are not reflected in the numbers.
    pub notes: Vec<String>,
}

impl ComposedProfile {
    pub fn movement_string(&self) -> String {
        self.movement.to_string()
    }

    pub fn weapon_strings(&self) -> Vec<String> {
        self.weapons.iter().map(|w| w.describe(self.strength_bonus)).collect()
    }

    pub fn trait_labels(&self) -> Vec<String> {
        self.traits.known().map(|(t, n)| t.label(n)).collect()
    }
}

struct Working {
    stats: Stats,
    traits: Traits,
    skills: BTreeMap<String, i32>,
    talents: BTreeSet<String>,
    weapons: Vec<Weapon>,
    notes: Vec<String>,
}

impl Working {
    fn add_weapon(&mut self, weapon: Weapon) {
        if !self.weapons.iter().any(|w| w.name == weapon.name) {
            self.weapons.push(weapon);
        }
    }

    fn raise_skill(&mut self, skill: &str, bonus: i32) {
        let entry = self.skills.entry(skill.to_string()).or_insert(bonus);
        *entry = (*entry).max(bonus);
    }
}

/// Apply every known trait of `profile` and derive the statline.
pub fn compose(profile: &CreatureProfile) -> ComposedProfile {
    let mut working = Working {
        stats: profile.stats,
        traits: profile.traits.clone(),
        skills: profile.skills.clone(),
        talents: profile.talents.clone(),
        weapons: profile.weapons.clone(),
        notes: Vec::new(),
    };

    for creature_trait in CreatureTrait::ALL {
        let intensity = working.traits.intensity(creature_trait);
        if intensity > 0 {
            apply_trait(creature_trait, intensity, &mut working);
        }
    }

    let strength_bonus = total_strength_bonus(&working.stats, &working.traits);
    let toughness_bonus = total_toughness_bonus(&working.stats, &working.traits);
    let agility_bonus = total_agility_bonus(&working.stats, &working.traits);
    let size = working.traits.size();
    let movement = movement(agility_bonus, size, &MovementFlags::from_traits(&working.traits));
    let armour = working.traits.intensity(CreatureTrait::NaturalArmour) as i32;
    let wounds = profile.wounds + size.steps_from_average().max(0) * WOUNDS_PER_SIZE_STEP;

    let mut notes = working.notes;
    for (unnatural, abbreviation, value) in [
        (CreatureTrait::UnnaturalStrength, "SB", strength_bonus),
        (CreatureTrait::UnnaturalToughness, "TB", toughness_bonus),
        (CreatureTrait::UnnaturalAgility, "AB", agility_bonus),
    ] {
        let intensity = working.traits.intensity(unnatural);
        if intensity > 0 {
            notes.push(format!("{}: {} {}", unnatural.label(intensity), abbreviation, value));
        }
    }

    ComposedProfile {
        name: profile.name.clone(),
        stats: working.stats,
        traits: working.traits,
        skills: working.skills,
        talents: working.talents,
        weapons: working.weapons,
        strength_bonus,
        toughness_bonus,
        agility_bonus,
        armour,
        wounds,
        movement,
        notes,
    }
}

fn apply_trait(creature_trait: CreatureTrait, intensity: u32, w: &mut Working) {
    let n = intensity as i32;
    match creature_trait {
        CreatureTrait::Apex => {
            w.stats.add(Characteristic::WeaponSkill, 5 * n);
            w.stats.add(Characteristic::Perception, 5 * n);
            if intensity >= 2 {
                w.traits.add(CreatureTrait::UnnaturalStrength, 1);
                w.traits.add(CreatureTrait::UnnaturalToughness, 1);
            }
        }
        CreatureTrait::Silicate => {
            w.stats.add(Characteristic::Agility, -10);
            w.traits.add(CreatureTrait::UnnaturalStrength, 1);
            w.traits.add(CreatureTrait::UnnaturalToughness, 1);
        }
        CreatureTrait::Armoured => {
            w.traits.add(CreatureTrait::NaturalArmour, 2 * intensity);
        }
        CreatureTrait::Deadly => w.stats.add(Characteristic::WeaponSkill, 10 * n),
        CreatureTrait::Mighty => w.stats.add(Characteristic::Strength, 10 * n),
        CreatureTrait::Resilient => w.stats.add(Characteristic::Toughness, 10 * n),
        CreatureTrait::Stealthy => {
            w.raise_skill("Concealment", 10);
            w.raise_skill("Silent Move", 10);
        }
        CreatureTrait::Sturdy => {
            w.notes.push("Sturdy: +20 to resist Grapple and Takedown".to_string());
        }
        CreatureTrait::NaturalWeapons => {
            w.add_weapon(
                Weapon::melee("Teeth and Claws", 1, DamageType::Rending)
                    .natural()
                    .with_quality(WeaponQuality::Primitive),
            );
        }
        CreatureTrait::MultipleArms => {
            w.talents.insert("Two-Weapon Wielder (Melee)".to_string());
        }
        CreatureTrait::Thrashing => {
            w.add_weapon(
                Weapon::melee("Thrashing Tail", 1, DamageType::Impact)
                    .natural()
                    .with_quality(WeaponQuality::Primitive),
            );
        }
        CreatureTrait::ProjectileAttack => {
            w.add_weapon(
                Weapon::ranged("Projectile Attack", 15, 1, DamageType::Impact)
                    .natural()
                    .with_quality(WeaponQuality::Primitive),
            );
        }
        CreatureTrait::Venomous => {
            w.add_weapon(
                Weapon::melee("Venomous Sting", 1, DamageType::Rending)
                    .natural()
                    .with_penetration(1)
                    .with_quality(WeaponQuality::Toxic)
                    .with_quality(WeaponQuality::Primitive),
            );
        }
        CreatureTrait::ImprovedNaturalWeapons => {
            for weapon in w.weapons.iter_mut().filter(|weapon| weapon.natural) {
                weapon.qualities.remove(&WeaponQuality::Primitive);
                weapon.penetration += n - 1;
            }
        }
        CreatureTrait::LethalDefences => {
            w.notes.push("Lethal Defences: melee attackers suffer 1d10 R ignoring armour".to_string());
        }
        CreatureTrait::BrutalCharge => {
            w.notes.push("Brutal Charge: +3 damage on a charge".to_string());
        }
        // Multipliers and movement flags are read after the loop.
        CreatureTrait::Size
        | CreatureTrait::UnnaturalStrength
        | CreatureTrait::UnnaturalToughness
        | CreatureTrait::UnnaturalAgility
        | CreatureTrait::NaturalArmour
        | CreatureTrait::Swift
        | CreatureTrait::UnnaturalSpeed
        | CreatureTrait::Quadruped
        | CreatureTrait::Crawler
        | CreatureTrait::Sessile => {}
        CreatureTrait::Fear
        | CreatureTrait::Flyer
        | CreatureTrait::Hoverer
        | CreatureTrait::Burrower
        | CreatureTrait::Amphibious
        | CreatureTrait::DarkSight
        | CreatureTrait::SonarSense
        | CreatureTrait::Bestial
        | CreatureTrait::Fearless => {}
    }
}
