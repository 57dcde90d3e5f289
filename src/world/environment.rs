//! Landmasses, territories, landmarks and notable species.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::body::{Climate, Habitability, SizeClass};
use super::context::GenerationContext;
use crate::creatures::{CreatureBlueprint, CreatureProfile, WorldType};
use crate::dice::{choose_uniform, d10, d5, RandomSource};
use crate::tables::{Outcome, RecursiveTable, Table};

/// Attempts at the exceptional landmark sub-roll before giving up.
pub const EXCEPTIONAL_LANDMARK_ATTEMPTS: u32 = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandmassCounts {
    pub continents: u32,
    pub islands: u32,
}

impl LandmassCounts {
    pub fn has_land(&self) -> bool {
        self.continents + self.islands > 0
    }
}

/// Landmass stage. `None` below Liquid Water; zero counts for an ocean world.
pub fn generate_landmasses(
    size: SizeClass,
    habitability: Habitability,
    rng: &mut impl RandomSource,
) -> Option<LandmassCounts> {
    if habitability < Habitability::LiquidWater {
        return None;
    }
    if d10(rng) <= 3 {
        return Some(LandmassCounts::default());
    }

    let mut continents = d5(rng) as u32;
    if size == SizeClass::Vast {
        continents += 1;
    }
    let islands = (d10(rng) + size.island_modifier() + habitability.island_modifier()).max(0) as u32;
    Some(LandmassCounts { continents, islands })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Terrain {
    Forest,
    Mountain,
    Plains,
    Swamp,
    Wasteland,
}

const TERRAIN: Table<Terrain> = Table::new(
    10,
    &[
        (2, Terrain::Forest),
        (4, Terrain::Mountain),
        (6, Terrain::Plains),
        (8, Terrain::Swamp),
        (10, Terrain::Wasteland),
    ],
);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TerritoryTrait {
    Boundary,
    BrokenGround,
    Desolate,
    ExoticNature,
    Expansive,
    ExtremeTemperature,
    Fertile,
    Foothills,
    NotableSpecies,
    Stagnant,
    Uneven,
    Virgin,
}

const TERRITORY_TRAITS: RecursiveTable<TerritoryTrait> = RecursiveTable::new(
    100,
    &[
        (8, Outcome::Value(TerritoryTrait::Boundary)),
        (16, Outcome::Value(TerritoryTrait::BrokenGround)),
        (24, Outcome::Value(TerritoryTrait::Desolate)),
        (32, Outcome::Value(TerritoryTrait::ExoticNature)),
        (40, Outcome::Value(TerritoryTrait::Expansive)),
        (48, Outcome::Value(TerritoryTrait::ExtremeTemperature)),
        (56, Outcome::Value(TerritoryTrait::Fertile)),
        (64, Outcome::Value(TerritoryTrait::Foothills)),
        (75, Outcome::Value(TerritoryTrait::NotableSpecies)),
        (82, Outcome::Value(TerritoryTrait::Stagnant)),
        (89, Outcome::Value(TerritoryTrait::Uneven)),
        (95, Outcome::Value(TerritoryTrait::Virgin)),
        (100, Outcome::Recurse(2)),
    ],
);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Landmark {
    Canyon,
    CaveNetwork,
    Crater,
    Mountain,
    Glacier,
    Volcano,
    InlandSea,
    PerpetualStorm,
    Reef,
    Whirlpool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LandmarkRoll {
    Common(Landmark),
    Exceptional,
}

const LANDMARKS: Table<LandmarkRoll> = Table::new(
    10,
    &[
        (2, LandmarkRoll::Common(Landmark::Canyon)),
        (4, LandmarkRoll::Common(Landmark::CaveNetwork)),
        (6, LandmarkRoll::Common(Landmark::Crater)),
        (8, LandmarkRoll::Common(Landmark::Mountain)),
        (10, LandmarkRoll::Exceptional),
    ],
);

const EXCEPTIONAL_LANDMARKS: Table<Landmark> = Table::new(
    10,
    &[
        (2, Landmark::Glacier),
        (4, Landmark::Volcano),
        (6, Landmark::InlandSea),
        (7, Landmark::PerpetualStorm),
        (9, Landmark::Reef),
        (10, Landmark::Whirlpool),
    ],
);

impl fmt::Display for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Landmark::Canyon => "Canyon",
            Landmark::CaveNetwork => "Cave Network",
            Landmark::Crater => "Crater",
            Landmark::Mountain => "Mountain",
            Landmark::Glacier => "Glacier",
            Landmark::Volcano => "Volcano",
            Landmark::InlandSea => "Inland Sea",
            Landmark::PerpetualStorm => "Perpetual Storm",
            Landmark::Reef => "Reef",
            Landmark::Whirlpool => "Whirlpool",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    pub terrain: Terrain,
    pub traits: BTreeMap<TerritoryTrait, u32>,
    pub landmarks: BTreeMap<Landmark, u32>,
    /// One profile per Notable Species intensity, when a creature book is on.
    #[serde(default)]
    pub notable_species: Vec<CreatureProfile>,
}

impl Territory {
    pub fn new(terrain: Terrain) -> Self {
        Self {
            terrain,
            traits: BTreeMap::new(),
            landmarks: BTreeMap::new(),
            notable_species: Vec::new(),
        }
    }

    pub fn trait_intensity(&self, territory_trait: TerritoryTrait) -> u32 {
        self.traits.get(&territory_trait).copied().unwrap_or(0)
    }

    pub fn landmark_count(&self, landmark: Landmark) -> u32 {
        self.landmarks.get(&landmark).copied().unwrap_or(0)
    }

    fn add_trait(&mut self, territory_trait: TerritoryTrait) {
        *self.traits.entry(territory_trait).or_insert(0) += 1;
    }

    fn add_landmark(&mut self, landmark: Landmark) {
        *self.landmarks.entry(landmark).or_insert(0) += 1;
    }

    /// Whether an exceptional landmark can form here.
    pub fn allows(&self, landmark: Landmark, climate: Climate) -> bool {
        match landmark {
            Landmark::Glacier => matches!(climate, Climate::ColdWorld | Climate::IceWorld),
            Landmark::Volcano => {
                self.terrain == Terrain::Mountain || self.trait_intensity(TerritoryTrait::BrokenGround) > 0
            }
            Landmark::InlandSea => {
                self.terrain == Terrain::Swamp || self.trait_intensity(TerritoryTrait::Expansive) > 0
            }
            Landmark::PerpetualStorm => self.trait_intensity(TerritoryTrait::ExtremeTemperature) > 0,
            Landmark::Reef => matches!(climate, Climate::HotWorld | Climate::TemperateWorld),
            Landmark::Whirlpool => self.landmark_count(Landmark::InlandSea) > 0,
            Landmark::Canyon | Landmark::CaveNetwork | Landmark::Crater | Landmark::Mountain => true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LandmassKind {
    Continent,
    Archipelago,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Landmass {
    pub kind: LandmassKind,
    /// Indices into [`Environment::territories`].
    pub territories: Vec<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub territories: Vec<Territory>,
    /// Empty when the world has no landmasses.
    pub landmasses: Vec<Landmass>,
}

impl Environment {
    pub fn has_trait(&self, territory_trait: TerritoryTrait) -> bool {
        self.territories.iter().any(|t| t.trait_intensity(territory_trait) > 0)
    }

    pub fn notable_species(&self) -> impl Iterator<Item = &CreatureProfile> {
        self.territories.iter().flat_map(|t| t.notable_species.iter())
    }
}

/// Roll one exceptional landmark that suits the territory.
///
/// Each attempt draws from the exceptional table; a draw whose condition is
/// not met is retried. Returns `None` after
/// [`EXCEPTIONAL_LANDMARK_ATTEMPTS`] failures.
pub fn roll_exceptional_landmark(
    territory: &Territory,
    climate: Climate,
    rng: &mut impl RandomSource,
) -> Option<Landmark> {
    for attempt in 1..=EXCEPTIONAL_LANDMARK_ATTEMPTS {
        let landmark = EXCEPTIONAL_LANDMARKS.roll(rng, 0);
        if territory.allows(landmark, climate) {
            return Some(landmark);
        }
        tracing::trace!(attempt, %landmark, "exceptional landmark does not fit, retrying");
    }
    tracing::debug!(terrain = ?territory.terrain, "no exceptional landmark fits this territory");
    None
}

fn roll_landmarks(territory: &mut Territory, climate: Climate, rng: &mut impl RandomSource) {
    let mut slots = d5(rng) - 3;
    if territory.trait_intensity(TerritoryTrait::Expansive) > 0 {
        slots += 1;
    }
    for _ in 0..slots.max(0) {
        let landmark = match LANDMARKS.roll(rng, 0) {
            LandmarkRoll::Common(landmark) => Some(landmark),
            LandmarkRoll::Exceptional => roll_exceptional_landmark(territory, climate, rng),
        };
        if let Some(landmark) = landmark {
            territory.add_landmark(landmark);
        }
    }
}

/// Creature world type for a finished surface.
pub fn classify_world(
    climate: Climate,
    habitability: Habitability,
    landmasses: Option<LandmassCounts>,
    exotic_nature: bool,
) -> WorldType {
    match climate {
        Climate::BurningWorld => return WorldType::VolcanicWorld,
        Climate::ColdWorld | Climate::IceWorld => return WorldType::IceWorld,
        _ => {}
    }
    if landmasses.is_some_and(|l| !l.has_land()) {
        return WorldType::OceanWorld;
    }
    if exotic_nature && habitability == Habitability::Verdant {
        return WorldType::DeathWorld;
    }
    match climate {
        Climate::HotWorld if habitability == Habitability::Verdant => WorldType::JungleWorld,
        Climate::HotWorld => WorldType::DesertWorld,
        _ => WorldType::TemperateWorld,
    }
}

/// Environment stage. `None` unless the body supports an ecosystem.
pub fn generate_environment(
    ctx: &GenerationContext<'_>,
    size: SizeClass,
    climate: Climate,
    habitability: Habitability,
    counts: Option<LandmassCounts>,
    rng: &mut impl RandomSource,
) -> Option<Environment> {
    if !habitability.has_ecosystem() {
        return None;
    }

    let count = (d5(rng) + size.territory_modifier() + habitability.territory_modifier()).max(1);
    let mut territories = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let mut territory = Territory::new(TERRAIN.roll(rng, 0));
        let slots = (d5(rng) - 2).max(0) as u32;
        for territory_trait in TERRITORY_TRAITS.roll_slots(rng, slots, 0) {
            territory.add_trait(territory_trait);
        }
        territories.push(territory);
    }

    for territory in &mut territories {
        roll_landmarks(territory, climate, rng);
    }

    let landmasses = group_landmasses(territories.len(), counts, rng);

    let exotic = territories.iter().any(|t| t.trait_intensity(TerritoryTrait::ExoticNature) > 0);
    let world = classify_world(climate, habitability, counts, exotic);
    for territory in &mut territories {
        let species = territory.trait_intensity(TerritoryTrait::NotableSpecies);
        for _ in 0..species {
            if let Some(blueprint) = CreatureBlueprint::for_notable_species(ctx.books(), world, rng) {
                territory.notable_species.push(blueprint.generate(rng));
            }
        }
    }

    Some(Environment {
        territories,
        landmasses,
    })
}

/// One group per continent plus an archipelago when there are islands; every
/// territory lands in exactly one group.
fn group_landmasses(
    territory_count: usize,
    counts: Option<LandmassCounts>,
    rng: &mut impl RandomSource,
) -> Vec<Landmass> {
    let Some(counts) = counts else {
        return Vec::new();
    };

    let mut groups: Vec<Landmass> = (0..counts.continents)
        .map(|_| Landmass {
            kind: LandmassKind::Continent,
            territories: Vec::new(),
        })
        .collect();
    if counts.islands > 0 {
        groups.push(Landmass {
            kind: LandmassKind::Archipelago,
            territories: Vec::new(),
        });
    }
    if groups.is_empty() {
        return groups;
    }

    let indices: Vec<usize> = (0..groups.len()).collect();
    for territory in 0..territory_count {
        let group = *choose_uniform(rng, &indices);
        groups[group].territories.push(territory);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GeneratorConfig, RuleSources};
    use crate::dice::ScriptedRolls;
    use crate::world::body::OrbitalZone;
    use crate::world::context::BodyRequest;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_no_land_below_liquid_water() {
        let mut rng = ScriptedRolls::always_max();
        assert_eq!(generate_landmasses(SizeClass::Vast, Habitability::TrappedWater, &mut rng), None);
    }

    #[test]
    fn test_ocean_world() {
        let mut rng = ScriptedRolls::new([3]);
        let counts = generate_landmasses(SizeClass::Large, Habitability::Verdant, &mut rng).unwrap();
        assert!(!counts.has_land());
    }

    #[test]
    fn test_islands_floor_at_zero() {
        // Land roll 4, d5 = 2 continents, island d10 = 1 - 5 - 2
        let mut rng = ScriptedRolls::new([4, 2, 1]);
        let counts = generate_landmasses(SizeClass::LowMass, Habitability::LiquidWater, &mut rng).unwrap();
        assert_eq!(counts, LandmassCounts { continents: 2, islands: 0 });
    }

    #[test]
    fn test_vast_adds_a_continent() {
        let mut rng = ScriptedRolls::new([10, 5, 10]);
        let counts = generate_landmasses(SizeClass::Vast, Habitability::Verdant, &mut rng).unwrap();
        assert_eq!(counts, LandmassCounts { continents: 6, islands: 12 });
    }

    #[test]
    fn test_exceptional_landmark_gives_up() {
        // A plains territory on a burning world suits nothing but the common
        // table: Glacier, Volcano, Inland Sea, Perpetual Storm and Reef all fail
        let territory = Territory::new(Terrain::Plains);
        let mut rng = ScriptedRolls::new([1, 3, 5, 7, 8]);
        assert_eq!(roll_exceptional_landmark(&territory, Climate::BurningWorld, &mut rng), None);
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_exceptional_landmark_retries_until_it_fits() {
        let territory = Territory::new(Terrain::Mountain);
        // Glacier fails on a hot world, Volcano fits the mountains
        let mut rng = ScriptedRolls::new([1, 3]);
        assert_eq!(
            roll_exceptional_landmark(&territory, Climate::HotWorld, &mut rng),
            Some(Landmark::Volcano)
        );
    }

    #[test]
    fn test_whirlpool_needs_inland_sea() {
        let mut territory = Territory::new(Terrain::Swamp);
        assert!(!territory.allows(Landmark::Whirlpool, Climate::TemperateWorld));
        territory.add_landmark(Landmark::InlandSea);
        assert!(territory.allows(Landmark::Whirlpool, Climate::TemperateWorld));
    }

    #[test]
    fn test_no_environment_without_ecosystem() {
        let config = GeneratorConfig::default();
        let ctx = GenerationContext::new(&config, &BodyRequest::planet("Test", OrbitalZone::PrimaryBiosphere));
        let mut rng = ScriptedRolls::always_max();
        for habitability in [Habitability::Inhospitable, Habitability::TrappedWater, Habitability::LiquidWater] {
            let environment = generate_environment(
                &ctx,
                SizeClass::Vast,
                Climate::TemperateWorld,
                habitability,
                None,
                &mut rng,
            );
            assert!(environment.is_none());
        }
    }

    #[test]
    fn test_every_territory_in_one_landmass() {
        let config = GeneratorConfig::default();
        let ctx = GenerationContext::new(&config, &BodyRequest::planet("Test", OrbitalZone::PrimaryBiosphere));
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let counts = Some(LandmassCounts { continents: 3, islands: 4 });

        for _ in 0..20 {
            let environment = generate_environment(
                &ctx,
                SizeClass::Vast,
                Climate::TemperateWorld,
                Habitability::Verdant,
                counts,
                &mut rng,
            )
            .unwrap();

            assert_eq!(environment.landmasses.len(), 4);
            let mut seen: Vec<usize> = environment
                .landmasses
                .iter()
                .flat_map(|l| l.territories.iter().copied())
                .collect();
            seen.sort_unstable();
            assert_eq!(seen, (0..environment.territories.len()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_notable_species_make_creatures() {
        let config = GeneratorConfig {
            books: RuleSources::all(),
            ..GeneratorConfig::default()
        };
        let ctx = GenerationContext::new(&config, &BodyRequest::planet("Test", OrbitalZone::PrimaryBiosphere));
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        for _ in 0..30 {
            let environment = generate_environment(
                &ctx,
                SizeClass::Large,
                Climate::HotWorld,
                Habitability::Verdant,
                None,
                &mut rng,
            )
            .unwrap();
            for territory in &environment.territories {
                assert_eq!(
                    territory.notable_species.len() as u32,
                    territory.trait_intensity(TerritoryTrait::NotableSpecies)
                );
            }
        }
    }

    #[test]
    fn test_world_classification() {
        let land = Some(LandmassCounts { continents: 2, islands: 0 });
        assert_eq!(
            classify_world(Climate::BurningWorld, Habitability::Verdant, land, false),
            WorldType::VolcanicWorld
        );
        assert_eq!(
            classify_world(Climate::TemperateWorld, Habitability::Verdant, Some(LandmassCounts::default()), false),
            WorldType::OceanWorld
        );
        assert_eq!(classify_world(Climate::HotWorld, Habitability::Verdant, land, false), WorldType::JungleWorld);
        assert_eq!(
            classify_world(Climate::HotWorld, Habitability::LimitedEcosystem, land, false),
            WorldType::DesertWorld
        );
        assert_eq!(
            classify_world(Climate::TemperateWorld, Habitability::Verdant, land, true),
            WorldType::DeathWorld
        );
    }
}
