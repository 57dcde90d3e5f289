//! Star system generation.
//!
//! A system is a star, a handful of system features, and three orbital
//! zones filled with elements. Features are folded into a copy of the
//! creation rules before any body is built, so every planet sees the same
//! rules. Everything generated lands in one [`Arena`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::arena::{Arena, NodeId, NodeKind};
use super::body::OrbitalZone;
use super::context::BodyRequest;
use super::pipeline::{Planet, PlanetPipeline};
use super::resources::{mineral_ledger, roll_ruin_species, ResourceKind, ResourceLedger, XenosRuinSpecies};
use super::satellites::{attach_body, attach_satellite, generate_gas_giant_satellites};
use crate::config::{GeneratorConfig, SystemCreationRules};
use crate::dice::{choose_uniform, d10, d100, d5, roll_die, RandomSource};
use crate::naming::NameGenerator;
use crate::starship::{generate_wreck, salvage_ledger, ShipOrigin, Starship};
use crate::tables::Table;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarKind {
    Mighty,
    Vigorous,
    Luminous,
    Dull,
    Anomalous,
}

impl StarKind {
    pub fn name(&self) -> &'static str {
        match self {
            StarKind::Mighty => "Mighty",
            StarKind::Vigorous => "Vigorous",
            StarKind::Luminous => "Luminous",
            StarKind::Dull => "Dull",
            StarKind::Anomalous => "Anomalous",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StarRoll {
    Single(StarKind),
    Binary,
}

const STARS: Table<StarRoll> = Table::new(
    10,
    &[
        (1, StarRoll::Single(StarKind::Mighty)),
        (4, StarRoll::Single(StarKind::Vigorous)),
        (7, StarRoll::Single(StarKind::Luminous)),
        (8, StarRoll::Single(StarKind::Dull)),
        (9, StarRoll::Single(StarKind::Anomalous)),
        (10, StarRoll::Binary),
    ],
);

/// The system's star, or the first of a binary pair, and its zone influence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Star {
    pub kind: StarKind,
    #[serde(default)]
    pub companion: Option<StarKind>,
    #[serde(default)]
    pub dominant_zone: Option<OrbitalZone>,
    #[serde(default)]
    pub weak_zone: Option<OrbitalZone>,
}

impl Star {
    fn new(kind: StarKind, companion: Option<StarKind>, rng: &mut impl RandomSource) -> Self {
        let (dominant_zone, weak_zone) = match kind {
            StarKind::Mighty => (Some(OrbitalZone::InnerCauldron), Some(OrbitalZone::PrimaryBiosphere)),
            StarKind::Vigorous => (None, None),
            StarKind::Luminous => (None, Some(OrbitalZone::InnerCauldron)),
            StarKind::Dull => (Some(OrbitalZone::OuterReaches), None),
            StarKind::Anomalous => (Some(*choose_uniform(rng, &OrbitalZone::ALL)), None),
        };
        Self {
            kind,
            companion,
            dominant_zone,
            weak_zone,
        }
    }

    /// Element-count modifier the star applies to `zone`.
    pub fn zone_modifier(&self, zone: OrbitalZone) -> i32 {
        let mut modifier = 0;
        if self.dominant_zone == Some(zone) {
            modifier += 2;
        }
        if self.weak_zone == Some(zone) {
            modifier -= 2;
        }
        modifier
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.companion {
            Some(companion) => write!(f, "Binary ({} and {})", self.kind.name(), companion.name()),
            None => f.write_str(self.kind.name()),
        }
    }
}

pub fn roll_star(rng: &mut impl RandomSource) -> Star {
    match STARS.roll(rng, 0) {
        StarRoll::Single(kind) => Star::new(kind, None, rng),
        StarRoll::Binary => {
            let first = binary_component(rng);
            let second = binary_component(rng);
            Star::new(first, Some(second), rng)
        }
    }
}

/// Binary components are rolled on 1-9 so a pair never nests.
fn binary_component(rng: &mut impl RandomSource) -> StarKind {
    match STARS.resolve(roll_die(rng, 9, 1)) {
        StarRoll::Single(kind) => kind,
        StarRoll::Binary => StarKind::Anomalous,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SystemFeature {
    Bountiful,
    GravityTides,
    Haven,
    IllOmened,
    PirateDen,
    RuinedEmpire,
    Starfarers,
    StellarAnomaly,
    WarpStasis,
    WarpTurbulence,
}

impl SystemFeature {
    pub const ALL: [SystemFeature; 10] = [
        SystemFeature::Bountiful,
        SystemFeature::GravityTides,
        SystemFeature::Haven,
        SystemFeature::IllOmened,
        SystemFeature::PirateDen,
        SystemFeature::RuinedEmpire,
        SystemFeature::Starfarers,
        SystemFeature::StellarAnomaly,
        SystemFeature::WarpStasis,
        SystemFeature::WarpTurbulence,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SystemFeature::Bountiful => "Bountiful",
            SystemFeature::GravityTides => "Gravity Tides",
            SystemFeature::Haven => "Haven",
            SystemFeature::IllOmened => "Ill-Omened",
            SystemFeature::PirateDen => "Pirate Den",
            SystemFeature::RuinedEmpire => "Ruined Empire",
            SystemFeature::Starfarers => "Starfarers",
            SystemFeature::StellarAnomaly => "Stellar Anomaly",
            SystemFeature::WarpStasis => "Warp Stasis",
            SystemFeature::WarpTurbulence => "Warp Turbulence",
        }
    }
}

impl fmt::Display for SystemFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// d5-2 distinct features, at least one.
///
/// A d10 that lands on a feature already taken moves to the next free one.
pub fn roll_system_features(rng: &mut impl RandomSource) -> Vec<SystemFeature> {
    let count = (d5(rng) - 2).max(1) as usize;
    let mut features = Vec::with_capacity(count);
    for _ in 0..count {
        let mut index = (d10(rng) - 1) as usize;
        while features.contains(&SystemFeature::ALL[index]) {
            index = (index + 1) % SystemFeature::ALL.len();
        }
        features.push(SystemFeature::ALL[index]);
    }
    features
}

/// Fold feature effects into a copy of the configured rules.
pub fn apply_features(
    rules: &SystemCreationRules,
    features: &[SystemFeature],
    rng: &mut impl RandomSource,
) -> SystemCreationRules {
    let mut rules = rules.clone();
    for feature in features {
        match feature {
            SystemFeature::Bountiful => rules.extra_resources_per_planet += 1,
            SystemFeature::Haven => {
                rules.haven_thicker_atmospheres = true;
                rules.haven_better_habitability = true;
            }
            SystemFeature::RuinedEmpire => {
                let species = match rules.dominant_ruin_species {
                    Some(species) => species,
                    None => {
                        let species = roll_ruin_species(rng, None);
                        rules.dominant_ruin_species = Some(species);
                        species
                    }
                };
                if rules.dominant_wreck_origin.is_none() {
                    rules.dominant_wreck_origin = ShipOrigin::from_ruin_species(species);
                }
            }
            SystemFeature::Starfarers => rules.force_inhabitable_planet = true,
            SystemFeature::GravityTides
            | SystemFeature::IllOmened
            | SystemFeature::PirateDen
            | SystemFeature::StellarAnomaly
            | SystemFeature::WarpStasis
            | SystemFeature::WarpTurbulence => {}
        }
    }
    rules
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GasGiantClass {
    GasDwarf,
    GasGiant,
    MassiveGasGiant,
}

const GAS_GIANT_CLASSES: Table<GasGiantClass> = Table::new(
    10,
    &[
        (2, GasGiantClass::GasDwarf),
        (8, GasGiantClass::GasGiant),
        (10, GasGiantClass::MassiveGasGiant),
    ],
);

impl GasGiantClass {
    pub fn name(&self) -> &'static str {
        match self {
            GasGiantClass::GasDwarf => "Gas Dwarf",
            GasGiantClass::GasGiant => "Gas Giant",
            GasGiantClass::MassiveGasGiant => "Massive Gas Giant",
        }
    }

    /// Size ceiling for the giant's moons.
    pub fn body_value(&self) -> i32 {
        match self {
            GasGiantClass::GasDwarf => 6,
            GasGiantClass::GasGiant => 8,
            GasGiantClass::MassiveGasGiant => 10,
        }
    }

    fn roll_slots(&self, rng: &mut impl RandomSource) -> u32 {
        let bonus = match self {
            GasGiantClass::GasDwarf => 0,
            GasGiantClass::GasGiant => 2,
            GasGiantClass::MassiveGasGiant => 4,
        };
        (d5(rng) + bonus) as u32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasGiant {
    pub class: GasGiantClass,
    pub body_value: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StationOrigin {
    EgarianVoidMaze,
    EldarOrrery,
    EldarGate,
    OrkRok,
    StcDefenceStation,
    StcMonitorStation,
    XenosDefenceStation,
    XenosMonitorStation,
}

const STATION_ORIGINS: Table<StationOrigin> = Table::new(
    100,
    &[
        (10, StationOrigin::EgarianVoidMaze),
        (20, StationOrigin::EldarOrrery),
        (25, StationOrigin::EldarGate),
        (40, StationOrigin::OrkRok),
        (50, StationOrigin::StcDefenceStation),
        (65, StationOrigin::StcMonitorStation),
        (85, StationOrigin::XenosDefenceStation),
        (100, StationOrigin::XenosMonitorStation),
    ],
);

impl StationOrigin {
    pub fn name(&self) -> &'static str {
        match self {
            StationOrigin::EgarianVoidMaze => "Egarian Void-Maze",
            StationOrigin::EldarOrrery => "Eldar Orrery",
            StationOrigin::EldarGate => "Eldar Gate",
            StationOrigin::OrkRok => "Ork Rok",
            StationOrigin::StcDefenceStation => "STC Defence Station",
            StationOrigin::StcMonitorStation => "STC Monitor Station",
            StationOrigin::XenosDefenceStation => "Xenos Defence Station",
            StationOrigin::XenosMonitorStation => "Xenos Monitor Station",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerelictStation {
    pub origin: StationOrigin,
    pub resources: ResourceLedger,
}

pub fn generate_derelict_station(rules: &SystemCreationRules, rng: &mut impl RandomSource) -> DerelictStation {
    let origin = STATION_ORIGINS.roll(rng, 0);
    let kind = match origin {
        StationOrigin::EgarianVoidMaze => ResourceKind::XenosRuins(XenosRuinSpecies::Egarian),
        StationOrigin::EldarOrrery | StationOrigin::EldarGate => ResourceKind::XenosRuins(XenosRuinSpecies::Eldar),
        StationOrigin::OrkRok => ResourceKind::XenosRuins(XenosRuinSpecies::Ork),
        StationOrigin::StcDefenceStation | StationOrigin::StcMonitorStation => ResourceKind::Archeotech,
        StationOrigin::XenosDefenceStation | StationOrigin::XenosMonitorStation => {
            ResourceKind::XenosRuins(roll_ruin_species(rng, rules.dominant_ruin_species))
        }
    };
    let mut resources = ResourceLedger::new();
    resources.deposit(kind, (d100(rng) + 25) as u32);
    DerelictStation { origin, resources }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarshipGraveyard {
    pub wrecks: Vec<Starship>,
    pub resources: ResourceLedger,
}

/// d5+1 wrecks and their salvage.
pub fn generate_starship_graveyard(config: &GeneratorConfig, rng: &mut impl RandomSource) -> StarshipGraveyard {
    let count = d5(rng) + 1;
    let wrecks: Vec<Starship> = (0..count).map(|_| generate_wreck(config, rng)).collect();
    let resources = salvage_ledger(&wrecks, rng);
    StarshipGraveyard { wrecks, resources }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Element {
    AsteroidBelt,
    AsteroidCluster,
    DerelictStation,
    DustCloud,
    GasGiant,
    GravityRiptide,
    Planet,
    RadiationBursts,
    SolarFlares,
    StarshipGraveyard,
}

const INNER_CAULDRON_ELEMENTS: Table<Element> = Table::new(
    100,
    &[
        (20, Element::AsteroidCluster),
        (29, Element::DustCloud),
        (41, Element::GasGiant),
        (45, Element::GravityRiptide),
        (76, Element::Planet),
        (88, Element::RadiationBursts),
        (100, Element::SolarFlares),
    ],
);

const PRIMARY_BIOSPHERE_ELEMENTS: Table<Element> = Table::new(
    100,
    &[
        (20, Element::AsteroidBelt),
        (30, Element::AsteroidCluster),
        (41, Element::DerelictStation),
        (47, Element::DustCloud),
        (58, Element::GravityRiptide),
        (88, Element::Planet),
        (100, Element::StarshipGraveyard),
    ],
);

const OUTER_REACHES_ELEMENTS: Table<Element> = Table::new(
    100,
    &[
        (15, Element::AsteroidBelt),
        (28, Element::AsteroidCluster),
        (34, Element::DerelictStation),
        (44, Element::DustCloud),
        (68, Element::GasGiant),
        (72, Element::GravityRiptide),
        (93, Element::Planet),
        (100, Element::StarshipGraveyard),
    ],
);

fn element_table(zone: OrbitalZone) -> &'static Table<Element> {
    match zone {
        OrbitalZone::InnerCauldron => &INNER_CAULDRON_ELEMENTS,
        OrbitalZone::PrimaryBiosphere => &PRIMARY_BIOSPHERE_ELEMENTS,
        OrbitalZone::OuterReaches => &OUTER_REACHES_ELEMENTS,
    }
}

/// d5 elements, shifted by the star's influence on the zone.
fn roll_zone_elements(star: &Star, zone: OrbitalZone, rng: &mut impl RandomSource) -> Vec<Element> {
    let count = (d5(rng) + star.zone_modifier(zone)).max(0);
    let table = element_table(zone);
    (0..count).map(|_| table.roll(rng, 0)).collect()
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarSystem {
    pub name: String,
    pub star: Star,
    pub features: Vec<SystemFeature>,
    /// Configured rules with the system's features applied.
    pub rules: SystemCreationRules,
    pub arena: Arena,
}

impl StarSystem {
    pub fn root(&self) -> Option<NodeId> {
        self.arena.root()
    }

    pub fn zone_node(&self, zone: OrbitalZone) -> Option<NodeId> {
        let root = self.root()?;
        self.arena
            .children(root)
            .iter()
            .copied()
            .find(|id| matches!(self.arena.get(*id).map(|n| &n.kind), Some(NodeKind::Zone { zone: z }) if *z == zone))
    }

    /// Planets and moons anywhere in the system.
    pub fn planets(&self) -> impl Iterator<Item = &Planet> {
        self.arena.planets().map(|(_, planet)| planet)
    }

    pub fn has_feature(&self, feature: SystemFeature) -> bool {
        self.features.contains(&feature)
    }
}

/// Assigns roman numerals to planets and gas giants, innermost first.
struct Numbering<'a> {
    system: &'a str,
    next: usize,
}

impl Numbering<'_> {
    fn next_name(&mut self) -> String {
        self.next += 1;
        NameGenerator::planet_name(self.system, self.next)
    }
}

pub fn generate_system(config: &GeneratorConfig, rng: &mut impl RandomSource) -> StarSystem {
    let name = NameGenerator::system_name(rng);
    let star = roll_star(rng);
    let features = roll_system_features(rng);
    let rules = apply_features(&config.rules, &features, rng);
    let system_config = config.with_rules(rules.clone());

    let mut arena = Arena::new();
    let root = arena.insert(None, name.clone(), NodeKind::System);
    let mut numbering = Numbering {
        system: &name,
        next: 0,
    };
    let mut needs_inhabitable = rules.force_inhabitable_planet;

    for zone in OrbitalZone::ALL {
        let zone_id = arena.insert(Some(root), zone.name(), NodeKind::Zone { zone });
        let mut elements = roll_zone_elements(&star, zone, rng);
        if needs_inhabitable && zone == OrbitalZone::PrimaryBiosphere && !elements.contains(&Element::Planet) {
            tracing::debug!(system = %name, "adding a planet to host the forced inhabitable world");
            elements.push(Element::Planet);
        }

        for element in elements {
            match element {
                Element::Planet => {
                    let force = needs_inhabitable && zone == OrbitalZone::PrimaryBiosphere;
                    needs_inhabitable &= !force;
                    let request = BodyRequest::planet(numbering.next_name(), zone).force_inhabitable(force);
                    let body = PlanetPipeline::new(&system_config).generate(request, rng);
                    attach_body(&mut arena, zone_id, body);
                }
                Element::GasGiant => {
                    let class = GAS_GIANT_CLASSES.roll(rng, 0);
                    let giant = GasGiant {
                        class,
                        body_value: class.body_value(),
                    };
                    let giant_name = numbering.next_name();
                    let slots = class.roll_slots(rng);
                    let satellites =
                        generate_gas_giant_satellites(&system_config, &giant_name, zone, giant.body_value, slots, rng);
                    let giant_id = arena.insert(Some(zone_id), giant_name, NodeKind::GasGiant(giant));
                    for satellite in satellites {
                        attach_satellite(&mut arena, giant_id, satellite);
                    }
                }
                Element::AsteroidBelt => {
                    let count = d5(rng) as u32;
                    let resources = mineral_ledger(rng, count, 0);
                    arena.insert(Some(zone_id), "Asteroid Belt", NodeKind::AsteroidBelt { resources });
                }
                Element::AsteroidCluster => {
                    let count = d5(rng) as u32;
                    let resources = mineral_ledger(rng, count, 0);
                    arena.insert(Some(zone_id), "Asteroid Cluster", NodeKind::AsteroidCluster { resources });
                }
                Element::DerelictStation => {
                    let station = generate_derelict_station(&rules, rng);
                    arena.insert(Some(zone_id), station.origin.name(), NodeKind::DerelictStation(station));
                }
                Element::StarshipGraveyard => {
                    let graveyard = generate_starship_graveyard(&system_config, rng);
                    arena.insert(Some(zone_id), "Starship Graveyard", NodeKind::StarshipGraveyard(graveyard));
                }
                Element::DustCloud => {
                    arena.insert(Some(zone_id), "Dust Cloud", NodeKind::DustCloud);
                }
                Element::GravityRiptide => {
                    arena.insert(Some(zone_id), "Gravity Riptide", NodeKind::GravityRiptide);
                }
                Element::RadiationBursts => {
                    arena.insert(Some(zone_id), "Radiation Bursts", NodeKind::RadiationBursts);
                }
                Element::SolarFlares => {
                    arena.insert(Some(zone_id), "Solar Flares", NodeKind::SolarFlares);
                }
            }
        }
    }

    tracing::debug!(
        system = %name,
        star = %star,
        features = features.len(),
        nodes = arena.len(),
        "generated star system"
    );
    StarSystem {
        name,
        star,
        features,
        rules,
        arena,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedRolls;
    use crate::world::body::Habitability;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_star_influence() {
        let mut rng = ScriptedRolls::new([1]);
        let star = roll_star(&mut rng);
        assert_eq!(star.kind, StarKind::Mighty);
        assert_eq!(star.zone_modifier(OrbitalZone::InnerCauldron), 2);
        assert_eq!(star.zone_modifier(OrbitalZone::PrimaryBiosphere), -2);
        assert_eq!(star.zone_modifier(OrbitalZone::OuterReaches), 0);
    }

    #[test]
    fn test_binary_star_uses_first_component() {
        // Binary, then Dull (8) and Mighty (1)
        let mut rng = ScriptedRolls::new([10, 8, 1]);
        let star = roll_star(&mut rng);
        assert_eq!(star.kind, StarKind::Dull);
        assert_eq!(star.companion, Some(StarKind::Mighty));
        assert_eq!(star.dominant_zone, Some(OrbitalZone::OuterReaches));
        assert_eq!(star.to_string(), "Binary (Dull and Mighty)");
    }

    #[test]
    fn test_features_are_distinct() {
        // d5 = 5 gives three features, every d10 lands on the same face
        let mut rng = ScriptedRolls::new([5, 3, 3, 3]);
        let features = roll_system_features(&mut rng);
        assert_eq!(
            features,
            vec![SystemFeature::Haven, SystemFeature::IllOmened, SystemFeature::PirateDen]
        );
    }

    #[test]
    fn test_feature_count_at_least_one() {
        let mut rng = ScriptedRolls::always_min();
        assert_eq!(roll_system_features(&mut rng), vec![SystemFeature::Bountiful]);
    }

    #[test]
    fn test_apply_features() {
        let base = SystemCreationRules::default();
        let mut rng = ScriptedRolls::new([5]);
        let rules = apply_features(
            &base,
            &[SystemFeature::Bountiful, SystemFeature::Haven, SystemFeature::RuinedEmpire, SystemFeature::Starfarers],
            &mut rng,
        );
        assert_eq!(rules.extra_resources_per_planet, 1);
        assert!(rules.haven_thicker_atmospheres);
        assert!(rules.haven_better_habitability);
        assert!(rules.force_inhabitable_planet);
        assert_eq!(rules.dominant_ruin_species, Some(XenosRuinSpecies::Eldar));
        assert_eq!(rules.dominant_wreck_origin, Some(ShipOrigin::Eldar));
        assert_eq!(base, SystemCreationRules::default());
    }

    #[test]
    fn test_configured_ruin_species_kept() {
        let base = SystemCreationRules {
            dominant_ruin_species: Some(XenosRuinSpecies::Yuvath),
            ..SystemCreationRules::default()
        };
        let mut rng = ScriptedRolls::always_min();
        let rules = apply_features(&base, &[SystemFeature::RuinedEmpire], &mut rng);
        assert_eq!(rules.dominant_ruin_species, Some(XenosRuinSpecies::Yuvath));
        assert_eq!(rules.dominant_wreck_origin, None);
    }

    #[test]
    fn test_planets_numbered_inner_to_outer() {
        let config = GeneratorConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let system = generate_system(&config, &mut rng);

        let mut expected = 1;
        for zone in OrbitalZone::ALL {
            let zone_id = system.zone_node(zone).unwrap();
            for child in system.arena.children(zone_id) {
                let node = system.arena.get(*child).unwrap();
                if matches!(node.kind, NodeKind::Planet(_) | NodeKind::GasGiant(_)) {
                    assert_eq!(node.name, NameGenerator::planet_name(&system.name, expected));
                    expected += 1;
                }
            }
        }
    }

    #[test]
    fn test_every_node_sits_in_a_zone() {
        let config = GeneratorConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..10 {
            let system = generate_system(&config, &mut rng);
            let root = system.root().unwrap();
            assert_eq!(system.arena.children(root).len(), 3);
            for id in system.arena.descendants(root) {
                assert!(system.arena.enclosing_zone(id).is_some());
                assert_eq!(system.arena.enclosing_system(id), Some(root));
            }
        }
    }

    #[test]
    fn test_forced_inhabitable_planet() {
        let mut config = GeneratorConfig::default();
        config.rules.force_inhabitable_planet = true;
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..10 {
            let system = generate_system(&config, &mut rng);
            let primary = system.zone_node(OrbitalZone::PrimaryBiosphere).unwrap();
            let first = system
                .arena
                .children(primary)
                .iter()
                .find_map(|id| match &system.arena.get(*id).unwrap().kind {
                    NodeKind::Planet(planet) => Some(planet.as_ref()),
                    _ => None,
                })
                .unwrap();
            assert!(first.habitability >= Habitability::LimitedEcosystem);
        }
    }

    #[test]
    fn test_graveyard_wrecks() {
        let config = GeneratorConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let graveyard = generate_starship_graveyard(&config, &mut rng);
        assert!((2..=6).contains(&graveyard.wrecks.len()));
        assert!(graveyard.wrecks.iter().all(Starship::is_wreck));
        assert!(!graveyard.resources.is_empty());
    }

    #[test]
    fn test_same_seed_same_system() {
        let config = GeneratorConfig::default();
        let a = generate_system(&config, &mut ChaCha8Rng::seed_from_u64(42));
        let b = generate_system(&config, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
