//! Creature weapons and their display strings.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageType {
    Impact,
    Rending,
    Explosive,
    Energy,
}

impl DamageType {
    pub fn code(&self) -> &'static str {
        match self {
            DamageType::Impact => "I",
            DamageType::Rending => "R",
            DamageType::Explosive => "X",
            DamageType::Energy => "E",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WeaponQuality {
    Primitive,
    Toxic,
    Tearing,
    Snare,
    Unbalanced,
}

impl fmt::Display for WeaponQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WeaponQuality::Primitive => "Primitive",
            WeaponQuality::Toxic => "Toxic",
            WeaponQuality::Tearing => "Tearing",
            WeaponQuality::Snare => "Snare",
            WeaponQuality::Unbalanced => "Unbalanced",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponClass {
    Melee,
    /// Range in metres.
    Ranged { range: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub class: WeaponClass,
    /// Number of d10 rolled for damage.
    pub dice: u32,
    pub bonus: i32,
    pub damage: DamageType,
    pub penetration: i32,
    pub qualities: BTreeSet<WeaponQuality>,
    /// Part of the creature's body rather than a carried item.
    pub natural: bool,
}

impl Weapon {
    pub fn melee(name: &str, dice: u32, damage: DamageType) -> Self {
        Self {
            name: name.to_string(),
            class: WeaponClass::Melee,
            dice,
            bonus: 0,
            damage,
            penetration: 0,
            qualities: BTreeSet::new(),
            natural: false,
        }
    }

    pub fn ranged(name: &str, range: u32, dice: u32, damage: DamageType) -> Self {
        Self {
            class: WeaponClass::Ranged { range },
            ..Self::melee(name, dice, damage)
        }
    }

    pub fn natural(mut self) -> Self {
        self.natural = true;
        self
    }

    pub fn with_quality(mut self, quality: WeaponQuality) -> Self {
        self.qualities.insert(quality);
        self
    }

    pub fn with_penetration(mut self, penetration: i32) -> Self {
        self.penetration = penetration;
        self
    }

    pub fn with_bonus(mut self, bonus: i32) -> Self {
        self.bonus = bonus;
        self
    }

    pub fn is_melee(&self) -> bool {
        matches!(self.class, WeaponClass::Melee)
    }

    /// Flat damage bonus once the wielder's strength bonus is applied.
    pub fn damage_bonus(&self, strength_bonus: i32) -> i32 {
        if self.is_melee() {
            self.bonus + strength_bonus
        } else {
            self.bonus
        }
    }

    /// "Teeth and Claws (Melee; 1d10+4 R; Pen 0; Primitive)"
    pub fn describe(&self, strength_bonus: i32) -> String {
        let class = match self.class {
            WeaponClass::Melee => "Melee".to_string(),
            WeaponClass::Ranged { range } => format!("{range}m"),
        };
        let bonus = self.damage_bonus(strength_bonus);
        let flat = match bonus {
            0 => String::new(),
            b if b > 0 => format!("+{b}"),
            b => format!("{b}"),
        };
        let mut out = format!(
            "{} ({}; {}d10{} {}; Pen {}",
            self.name,
            class,
            self.dice,
            flat,
            self.damage.code(),
            self.penetration
        );
        for quality in &self.qualities {
            out.push_str(&format!("; {quality}"));
        }
        out.push(')');
        out
    }
}
