//! Treasures: origin, item type, craftsmanship and quirks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::dice::{choose_uniform, d5, RandomSource};
use crate::tables::{Outcome, RecursiveTable, Table};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TreasureOrigin {
    FinelyWrought,
    AncientMiracle,
    AlienTechnology,
    CursedArtefact,
}

const ORIGINS: Table<TreasureOrigin> = Table::new(
    10,
    &[
        (4, TreasureOrigin::FinelyWrought),
        (6, TreasureOrigin::AncientMiracle),
        (8, TreasureOrigin::AlienTechnology),
        (10, TreasureOrigin::CursedArtefact),
    ],
);

impl TreasureOrigin {
    pub fn name(&self) -> &'static str {
        match self {
            TreasureOrigin::FinelyWrought => "Finely Wrought",
            TreasureOrigin::AncientMiracle => "Ancient Miracle",
            TreasureOrigin::AlienTechnology => "Alien Technology",
            TreasureOrigin::CursedArtefact => "Cursed Artefact",
        }
    }

    fn epithets(&self) -> &'static [&'static str] {
        match self {
            TreasureOrigin::FinelyWrought => &["Gilded", "Master-Forged", "Filigreed"],
            TreasureOrigin::AncientMiracle => &["Ancient", "Saint's", "Dark Age"],
            TreasureOrigin::AlienTechnology => &["Xenos", "Starwrought", "Whispering"],
            TreasureOrigin::CursedArtefact => &["Damned", "Blackened", "Hungering"],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TreasureKind {
    MeleeWeapon,
    RangedWeapon,
    Armour,
    Gear,
    Curio,
}

const KINDS: Table<TreasureKind> = Table::new(
    10,
    &[
        (2, TreasureKind::MeleeWeapon),
        (4, TreasureKind::RangedWeapon),
        (6, TreasureKind::Armour),
        (8, TreasureKind::Gear),
        (10, TreasureKind::Curio),
    ],
);

impl TreasureKind {
    pub fn name(&self) -> &'static str {
        match self {
            TreasureKind::MeleeWeapon => "Melee Weapon",
            TreasureKind::RangedWeapon => "Ranged Weapon",
            TreasureKind::Armour => "Armour",
            TreasureKind::Gear => "Gear",
            TreasureKind::Curio => "Curio",
        }
    }

    fn nouns(&self) -> &'static [&'static str] {
        match self {
            TreasureKind::MeleeWeapon => &["Blade", "Hammer", "Axe", "Sword"],
            TreasureKind::RangedWeapon => &["Pistol", "Longlas", "Bolter", "Carbine"],
            TreasureKind::Armour => &["Carapace", "Breastplate", "Mesh Cloak"],
            TreasureKind::Gear => &["Auspex", "Void Suit", "Chronometer"],
            TreasureKind::Curio => &["Reliquary", "Orb", "Icon", "Compass"],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Craftsmanship {
    Poor,
    Common,
    Good,
    Best,
}

const CRAFTSMANSHIP: Table<Craftsmanship> = Table::new(
    10,
    &[
        (2, Craftsmanship::Poor),
        (7, Craftsmanship::Common),
        (9, Craftsmanship::Good),
        (10, Craftsmanship::Best),
    ],
);

impl Craftsmanship {
    pub fn name(&self) -> &'static str {
        match self {
            Craftsmanship::Poor => "Poor",
            Craftsmanship::Common => "Common",
            Craftsmanship::Good => "Good",
            Craftsmanship::Best => "Best",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Quirk {
    Archaic,
    Bloodthirsty,
    Coldtouched,
    Deceptive,
    Gleaming,
    Lucky,
    OathBound,
    Resonant,
    Whispering,
}

impl Quirk {
    pub fn name(&self) -> &'static str {
        match self {
            Quirk::Archaic => "Archaic",
            Quirk::Bloodthirsty => "Bloodthirsty",
            Quirk::Coldtouched => "Cold-Touched",
            Quirk::Deceptive => "Deceptive",
            Quirk::Gleaming => "Gleaming",
            Quirk::Lucky => "Lucky",
            Quirk::OathBound => "Oath-Bound",
            Quirk::Resonant => "Resonant",
            Quirk::Whispering => "Whispering",
        }
    }
}

const QUIRKS: RecursiveTable<Quirk> = RecursiveTable::new(
    10,
    &[
        (1, Outcome::Value(Quirk::Archaic)),
        (2, Outcome::Value(Quirk::Bloodthirsty)),
        (3, Outcome::Value(Quirk::Coldtouched)),
        (4, Outcome::Value(Quirk::Deceptive)),
        (5, Outcome::Value(Quirk::Gleaming)),
        (6, Outcome::Value(Quirk::Lucky)),
        (7, Outcome::Value(Quirk::OathBound)),
        (8, Outcome::Value(Quirk::Resonant)),
        (9, Outcome::Value(Quirk::Whispering)),
        (10, Outcome::Recurse(2)),
    ],
);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Treasure {
    pub name: String,
    pub origin: TreasureOrigin,
    pub kind: TreasureKind,
    pub craftsmanship: Craftsmanship,
    pub quirks: Vec<Quirk>,
}

impl fmt::Display for Treasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} Craftsmanship {}, {})",
            self.name,
            self.craftsmanship.name(),
            self.kind.name(),
            self.origin.name()
        )?;
        if !self.quirks.is_empty() {
            let quirks: Vec<&str> = self.quirks.iter().map(Quirk::name).collect();
            write!(f, " [{}]", quirks.join(", "))?;
        }
        Ok(())
    }
}

pub fn generate_treasure(config: &GeneratorConfig, rng: &mut impl RandomSource) -> Treasure {
    let origin = ORIGINS.roll(rng, 0);
    let kind = KINDS.roll(rng, 0);
    let craftsmanship = if config.books.into_the_storm {
        CRAFTSMANSHIP.roll(rng, 0)
    } else {
        Craftsmanship::Common
    };

    let mut slots = (d5(rng) - 3).max(0) as u32;
    if origin == TreasureOrigin::CursedArtefact {
        slots += 1;
    }
    let quirks = QUIRKS.roll_slots(rng, slots, 0);

    let epithet = *choose_uniform(rng, origin.epithets());
    let noun = *choose_uniform(rng, kind.nouns());
    let name = format!("The {epithet} {noun}");

    tracing::debug!(%name, origin = origin.name(), quirks = quirks.len(), "generated treasure");
    Treasure {
        name,
        origin,
        kind,
        craftsmanship,
        quirks,
    }
}
