//! Starships and wrecked vessels.
//!
//! A vessel is a hull class, an origin that adjusts the class profile, and a
//! crew rating. Wrecks add a condition and what is left of the hull.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::dice::{d10, roll_die, RandomSource};
use crate::naming::NameGenerator;
use crate::tables::Table;
use crate::world::resources::{ResourceKind, ResourceLedger, XenosRuinSpecies};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShipOrigin {
    Imperial,
    ChaosReaver,
    Ork,
    Eldar,
    RakGol,
    Kroot,
    Stryxis,
    DarkEldar,
}

const ORIGINS: Table<ShipOrigin> = Table::new(
    10,
    &[
        (2, ShipOrigin::Imperial),
        (3, ShipOrigin::ChaosReaver),
        (5, ShipOrigin::Ork),
        (6, ShipOrigin::Eldar),
        (7, ShipOrigin::RakGol),
        (8, ShipOrigin::Kroot),
        (9, ShipOrigin::Stryxis),
        (10, ShipOrigin::DarkEldar),
    ],
);

impl ShipOrigin {
    pub fn name(&self) -> &'static str {
        match self {
            ShipOrigin::Imperial => "Imperial",
            ShipOrigin::ChaosReaver => "Chaos Reaver",
            ShipOrigin::Ork => "Ork",
            ShipOrigin::Eldar => "Eldar",
            ShipOrigin::RakGol => "Rak'Gol",
            ShipOrigin::Kroot => "Kroot",
            ShipOrigin::Stryxis => "Stryxis",
            ShipOrigin::DarkEldar => "Dark Eldar",
        }
    }

    /// Vessels built by the same people who left a species' ruins.
    pub fn from_ruin_species(species: XenosRuinSpecies) -> Option<Self> {
        match species {
            XenosRuinSpecies::Eldar => Some(ShipOrigin::Eldar),
            XenosRuinSpecies::Ork => Some(ShipOrigin::Ork),
            XenosRuinSpecies::Kroot => Some(ShipOrigin::Kroot),
            XenosRuinSpecies::Undiscovered | XenosRuinSpecies::Egarian | XenosRuinSpecies::Yuvath => None,
        }
    }

    /// What picking over a hull of this origin turns up.
    pub fn salvage_kind(&self) -> ResourceKind {
        match self {
            ShipOrigin::Imperial | ShipOrigin::ChaosReaver => ResourceKind::Archeotech,
            ShipOrigin::Ork => ResourceKind::XenosRuins(XenosRuinSpecies::Ork),
            ShipOrigin::Eldar | ShipOrigin::DarkEldar => ResourceKind::XenosRuins(XenosRuinSpecies::Eldar),
            ShipOrigin::Kroot => ResourceKind::XenosRuins(XenosRuinSpecies::Kroot),
            ShipOrigin::RakGol | ShipOrigin::Stryxis => ResourceKind::XenosRuins(XenosRuinSpecies::Undiscovered),
        }
    }

    fn adjustment(&self) -> HullProfile {
        let (speed, manoeuvrability, detection, armour, hull_integrity) = match self {
            ShipOrigin::Imperial => (0, 0, 0, 0, 0),
            ShipOrigin::ChaosReaver => (1, 0, 5, -1, 0),
            ShipOrigin::Ork => (-1, -5, -5, 3, 5),
            ShipOrigin::Eldar => (3, 20, 10, -4, -10),
            ShipOrigin::RakGol => (0, -5, 0, 2, 5),
            ShipOrigin::Kroot => (0, 0, 5, -1, 0),
            ShipOrigin::Stryxis => (-1, -5, 10, -2, 5),
            ShipOrigin::DarkEldar => (4, 20, 5, -5, -12),
        };
        HullProfile {
            speed,
            manoeuvrability,
            detection,
            armour,
            hull_integrity,
            ..HullProfile::default()
        }
    }
}

impl fmt::Display for ShipOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Roll an origin; Dark Eldar vessels need their book and become Eldar otherwise.
pub fn roll_origin(config: &GeneratorConfig, rng: &mut impl RandomSource) -> ShipOrigin {
    match ORIGINS.roll(rng, 0) {
        ShipOrigin::DarkEldar if !config.books.the_soul_reaver => ShipOrigin::Eldar,
        origin => origin,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HullClass {
    Transport,
    Raider,
    Frigate,
    LightCruiser,
    Cruiser,
    Battlecruiser,
    GrandCruiser,
}

const HULL_CLASSES: Table<HullClass> = Table::new(
    10,
    &[
        (2, HullClass::Transport),
        (4, HullClass::Raider),
        (6, HullClass::Frigate),
        (8, HullClass::LightCruiser),
        (10, HullClass::Cruiser),
    ],
);

const CAPITAL_CLASSES: Table<HullClass> = Table::new(10, &[(5, HullClass::Battlecruiser), (10, HullClass::GrandCruiser)]);

impl HullClass {
    pub fn name(&self) -> &'static str {
        match self {
            HullClass::Transport => "Transport",
            HullClass::Raider => "Raider",
            HullClass::Frigate => "Frigate",
            HullClass::LightCruiser => "Light Cruiser",
            HullClass::Cruiser => "Cruiser",
            HullClass::Battlecruiser => "Battlecruiser",
            HullClass::GrandCruiser => "Grand Cruiser",
        }
    }

    fn base_profile(&self) -> HullProfile {
        let (speed, manoeuvrability, detection, armour, hull_integrity, turret_rating, space, weapon_capacity) =
            match self {
                HullClass::Transport => (5, -10, 5, 12, 35, 1, 45, 2),
                HullClass::Raider => (9, 15, 10, 14, 32, 1, 40, 2),
                HullClass::Frigate => (7, 10, 10, 18, 35, 1, 40, 3),
                HullClass::LightCruiser => (7, 10, 20, 19, 60, 2, 60, 4),
                HullClass::Cruiser => (5, 10, 15, 20, 70, 2, 75, 5),
                HullClass::Battlecruiser => (5, 5, 15, 21, 75, 2, 80, 6),
                HullClass::GrandCruiser => (4, -5, 15, 21, 85, 3, 90, 7),
            };
        HullProfile {
            speed,
            manoeuvrability,
            detection,
            armour,
            hull_integrity,
            turret_rating,
            space,
            weapon_capacity,
        }
    }
}

impl fmt::Display for HullClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A natural 10 on the hull table rolls again for a capital class when
/// capital hulls are enabled.
pub fn roll_hull_class(config: &GeneratorConfig, rng: &mut impl RandomSource) -> HullClass {
    let (total, class) = HULL_CLASSES.roll_with_total(rng, 0);
    if total == 10 && config.books.battlefleet_koronus {
        return CAPITAL_CLASSES.roll(rng, 0);
    }
    class
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HullProfile {
    pub speed: i32,
    pub manoeuvrability: i32,
    pub detection: i32,
    pub armour: i32,
    pub hull_integrity: i32,
    pub turret_rating: i32,
    pub space: i32,
    pub weapon_capacity: i32,
}

impl HullProfile {
    fn adjusted(self, by: HullProfile) -> Self {
        Self {
            speed: (self.speed + by.speed).max(1),
            manoeuvrability: self.manoeuvrability + by.manoeuvrability,
            detection: self.detection + by.detection,
            armour: (self.armour + by.armour).max(1),
            hull_integrity: (self.hull_integrity + by.hull_integrity).max(1),
            turret_rating: self.turret_rating + by.turret_rating,
            space: self.space + by.space,
            weapon_capacity: self.weapon_capacity + by.weapon_capacity,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CrewRating {
    Incompetent,
    Competent,
    Crack,
    Veteran,
    Elite,
}

const CREW_RATINGS: Table<CrewRating> = Table::new(
    10,
    &[
        (2, CrewRating::Incompetent),
        (5, CrewRating::Competent),
        (8, CrewRating::Crack),
        (9, CrewRating::Veteran),
        (10, CrewRating::Elite),
    ],
);

impl CrewRating {
    pub fn value(&self) -> i32 {
        match self {
            CrewRating::Incompetent => 20,
            CrewRating::Competent => 30,
            CrewRating::Crack => 40,
            CrewRating::Veteran => 50,
            CrewRating::Elite => 60,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WreckCondition {
    IntactHulk,
    Damaged,
    Gutted,
    Stripped,
}

const WRECK_CONDITIONS: Table<WreckCondition> = Table::new(
    10,
    &[
        (2, WreckCondition::IntactHulk),
        (6, WreckCondition::Damaged),
        (8, WreckCondition::Gutted),
        (10, WreckCondition::Stripped),
    ],
);

impl WreckCondition {
    pub fn name(&self) -> &'static str {
        match self {
            WreckCondition::IntactHulk => "Intact Hulk",
            WreckCondition::Damaged => "Damaged",
            WreckCondition::Gutted => "Gutted",
            WreckCondition::Stripped => "Stripped",
        }
    }

    /// Percentage of hull integrity left before the d10 reduction.
    fn integrity_percent(&self) -> i32 {
        match self {
            WreckCondition::IntactHulk => 80,
            WreckCondition::Damaged => 55,
            WreckCondition::Gutted => 30,
            WreckCondition::Stripped => 15,
        }
    }

    /// d10 rolled for salvage abundance.
    fn salvage_dice(&self) -> u32 {
        match self {
            WreckCondition::IntactHulk => 4,
            WreckCondition::Damaged => 3,
            WreckCondition::Gutted => 2,
            WreckCondition::Stripped => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WreckState {
    pub condition: WreckCondition,
    pub remaining_integrity: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Starship {
    pub name: String,
    pub origin: ShipOrigin,
    pub hull_class: HullClass,
    pub profile: HullProfile,
    pub crew: CrewRating,
    #[serde(default)]
    pub wreck: Option<WreckState>,
}

impl Starship {
    pub fn is_wreck(&self) -> bool {
        self.wreck.is_some()
    }

    /// Salvage this hull adds to its surroundings. Intact vessels yield none.
    pub fn salvage(&self, rng: &mut impl RandomSource) -> Option<(ResourceKind, u32)> {
        let wreck = self.wreck?;
        let amount = roll_die(rng, 10, wreck.condition.salvage_dice()).max(1) as u32;
        Some((self.origin.salvage_kind(), amount))
    }
}

impl fmt::Display for Starship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {}, crew {})", self.name, self.origin, self.hull_class, self.crew.value())?;
        if let Some(wreck) = &self.wreck {
            write!(
                f,
                ", {} wreck, {}/{} integrity",
                wreck.condition.name(),
                wreck.remaining_integrity,
                self.profile.hull_integrity
            )?;
        }
        Ok(())
    }
}

fn build(origin: ShipOrigin, config: &GeneratorConfig, rng: &mut impl RandomSource) -> Starship {
    let hull_class = roll_hull_class(config, rng);
    let profile = hull_class.base_profile().adjusted(origin.adjustment());
    let crew = CREW_RATINGS.roll(rng, 0);
    let name = NameGenerator::ship_name(rng);
    Starship {
        name,
        origin,
        hull_class,
        profile,
        crew,
        wreck: None,
    }
}

/// A working vessel.
pub fn generate_starship(config: &GeneratorConfig, rng: &mut impl RandomSource) -> Starship {
    let origin = roll_origin(config, rng);
    let ship = build(origin, config, rng);
    tracing::debug!(name = %ship.name, origin = %ship.origin, class = %ship.hull_class, "generated starship");
    ship
}

/// A wrecked vessel. A configured dominant origin wins on d10 <= 6.
pub fn generate_wreck(config: &GeneratorConfig, rng: &mut impl RandomSource) -> Starship {
    let origin = match config.rules.dominant_wreck_origin {
        Some(dominant) if d10(rng) <= 6 => dominant,
        _ => roll_origin(config, rng),
    };
    let mut ship = build(origin, config, rng);

    let condition = WRECK_CONDITIONS.roll(rng, 0);
    let percent = (condition.integrity_percent() - d10(rng)).max(1);
    let remaining_integrity = (ship.profile.hull_integrity * percent / 100).max(1);
    ship.wreck = Some(WreckState {
        condition,
        remaining_integrity,
    });
    tracing::debug!(name = %ship.name, origin = %ship.origin, condition = condition.name(), "generated wreck");
    ship
}

/// Salvage ledger for a set of wrecks.
pub fn salvage_ledger(wrecks: &[Starship], rng: &mut impl RandomSource) -> ResourceLedger {
    let mut ledger = ResourceLedger::new();
    for wreck in wrecks {
        if let Some((kind, amount)) = wreck.salvage(rng) {
            ledger.deposit(kind, amount);
        }
    }
    ledger
}
