//! Orbital features: asteroids, lesser moons, rings and full moons.
//!
//! A full moon is a planet built by re-entering the pipeline with the
//! parent's body value as its size ceiling. Moons never roll orbital
//! features of their own, and [`MAX_MOON_DEPTH`] bounds nesting outright.

use serde::{Deserialize, Serialize};

use super::arena::{Arena, NodeId, NodeKind};
use super::body::OrbitalZone;
use super::context::{BodyRequest, GenerationContext};
use super::pipeline::{Planet, PlanetPipeline};
use super::resources::{mineral_ledger, ResourceLedger};
use crate::config::GeneratorConfig;
use crate::dice::{d5, RandomSource};
use crate::naming::NameGenerator;
use crate::tables::Table;

/// Deepest nesting at which a full moon may still be generated.
pub const MAX_MOON_DEPTH: u32 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RingKind {
    Debris,
    Dust,
}

/// A satellite as produced by generation, before it is placed in an arena.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Satellite {
    Asteroid { name: String, resources: ResourceLedger },
    LesserMoon { name: String, resources: ResourceLedger },
    Moon(Box<GeneratedBody>),
    PlanetaryRings { name: String, kind: RingKind },
}

impl Satellite {
    pub fn name(&self) -> &str {
        match self {
            Satellite::Asteroid { name, .. }
            | Satellite::LesserMoon { name, .. }
            | Satellite::PlanetaryRings { name, .. } => name,
            Satellite::Moon(body) => &body.planet.name,
        }
    }
}

/// A planet and everything orbiting it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedBody {
    pub planet: Planet,
    pub satellites: Vec<Satellite>,
}

impl GeneratedBody {
    pub fn new(planet: Planet) -> Self {
        Self {
            planet,
            satellites: Vec::new(),
        }
    }

    /// Full moons orbiting this body.
    pub fn moons(&self) -> impl Iterator<Item = &GeneratedBody> {
        self.satellites.iter().filter_map(|s| match s {
            Satellite::Moon(body) => Some(body.as_ref()),
            _ => None,
        })
    }

    /// Nesting depth of the deepest moon below this body.
    pub fn moon_depth(&self) -> u32 {
        self.moons().map(|m| 1 + m.moon_depth()).max().unwrap_or(0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FeatureRoll {
    Nothing,
    Asteroid,
    LesserMoon,
    Moon,
    DebrisRings,
    DustRings,
}

/// Per-slot table for rocky planets, modified by the body's orbital modifier.
const PLANET_FEATURES: Table<FeatureRoll> = Table::new(
    100,
    &[
        (45, FeatureRoll::Nothing),
        (60, FeatureRoll::Asteroid),
        (90, FeatureRoll::LesserMoon),
        (100, FeatureRoll::Moon),
    ],
);

const GAS_GIANT_FEATURES: Table<FeatureRoll> = Table::new(
    100,
    &[
        (20, FeatureRoll::Nothing),
        (35, FeatureRoll::DebrisRings),
        (50, FeatureRoll::DustRings),
        (85, FeatureRoll::LesserMoon),
        (100, FeatureRoll::Moon),
    ],
);

/// Mineral deposits on a rock too small to be a planet.
pub fn minor_body_resources(rng: &mut impl RandomSource) -> ResourceLedger {
    let count = (d5(rng) - 2).max(0) as u32;
    mineral_ledger(rng, count, 0)
}

/// Where a set of satellites is being built.
struct Orbit<'a> {
    config: &'a GeneratorConfig,
    parent_name: &'a str,
    parent_value: i32,
    parent_depth: u32,
    zone: OrbitalZone,
}

impl Orbit<'_> {
    fn build(&self, table: &Table<FeatureRoll>, slots: u32, modifier: i32, rng: &mut impl RandomSource) -> Vec<Satellite> {
        let mut satellites = Vec::new();
        for _ in 0..slots {
            let roll = table.roll(rng, modifier);
            let name = NameGenerator::satellite_name(self.parent_name, satellites.len() + 1);
            let satellite = match roll {
                FeatureRoll::Nothing => continue,
                FeatureRoll::Asteroid => Satellite::Asteroid {
                    name,
                    resources: minor_body_resources(rng),
                },
                FeatureRoll::Moon if self.parent_depth < MAX_MOON_DEPTH => {
                    let request = BodyRequest::moon(name, self.zone, self.parent_value, self.parent_depth);
                    Satellite::Moon(Box::new(PlanetPipeline::new(self.config).generate(request, rng)))
                }
                FeatureRoll::Moon | FeatureRoll::LesserMoon => {
                    if roll == FeatureRoll::Moon {
                        tracing::debug!(parent = self.parent_name, "moon depth cap reached, using a lesser moon");
                    }
                    Satellite::LesserMoon {
                        name,
                        resources: minor_body_resources(rng),
                    }
                }
                FeatureRoll::DebrisRings => Satellite::PlanetaryRings {
                    name,
                    kind: RingKind::Debris,
                },
                FeatureRoll::DustRings => Satellite::PlanetaryRings {
                    name,
                    kind: RingKind::Dust,
                },
            };
            satellites.push(satellite);
        }
        satellites
    }
}

/// Orbital features stage for a rocky body.
pub fn generate_orbital_features(
    ctx: &GenerationContext<'_>,
    parent: &Planet,
    rng: &mut impl RandomSource,
) -> Vec<Satellite> {
    let orbit = Orbit {
        config: ctx.config,
        parent_name: &parent.name,
        parent_value: parent.body_value,
        parent_depth: ctx.depth,
        zone: ctx.zone,
    };
    orbit.build(&PLANET_FEATURES, ctx.feature_count, ctx.orbital_modifier, rng)
}

/// Satellites of a gas giant with the given body value.
pub fn generate_gas_giant_satellites(
    config: &GeneratorConfig,
    parent_name: &str,
    zone: OrbitalZone,
    body_value: i32,
    slots: u32,
    rng: &mut impl RandomSource,
) -> Vec<Satellite> {
    let orbit = Orbit {
        config,
        parent_name,
        parent_value: body_value,
        parent_depth: 0,
        zone,
    };
    orbit.build(&GAS_GIANT_FEATURES, slots, 0, rng)
}

/// Insert a satellite (and anything orbiting it) under `parent`.
pub fn attach_satellite(arena: &mut Arena, parent: NodeId, satellite: Satellite) -> NodeId {
    match satellite {
        Satellite::Asteroid { name, resources } => arena.insert(Some(parent), name, NodeKind::Asteroid { resources }),
        Satellite::LesserMoon { name, resources } => {
            arena.insert(Some(parent), name, NodeKind::LesserMoon { resources })
        }
        Satellite::PlanetaryRings { name, kind } => arena.insert(Some(parent), name, NodeKind::PlanetaryRings { kind }),
        Satellite::Moon(body) => attach_body(arena, parent, *body),
    }
}

/// Insert a generated planet and its satellites under `parent`.
pub fn attach_body(arena: &mut Arena, parent: NodeId, body: GeneratedBody) -> NodeId {
    let GeneratedBody { planet, satellites } = body;
    let name = planet.name.clone();
    let id = arena.insert(Some(parent), name, NodeKind::Planet(Box::new(planet)));
    for satellite in satellites {
        attach_satellite(arena, id, satellite);
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedRolls;

    #[test]
    fn test_satellite_names_follow_slot_order() {
        let config = GeneratorConfig::default();
        // Slot 1 nothing, slot 2 dust rings, slot 3 a lesser moon with d5 = 1 minerals
        let mut rng = ScriptedRolls::new([10, 50, 70, 1]);
        let satellites = generate_gas_giant_satellites(&config, "Vexis IV", OrbitalZone::OuterReaches, 8, 3, &mut rng);
        let names: Vec<&str> = satellites.iter().map(Satellite::name).collect();
        assert_eq!(names, vec!["Vexis IV a", "Vexis IV b"]);
        assert!(matches!(satellites[0], Satellite::PlanetaryRings { kind: RingKind::Dust, .. }));
    }

    #[test]
    fn test_moons_never_nest_past_the_cap() {
        let config = GeneratorConfig::default();
        let mut rng = ScriptedRolls::always_max();
        let satellites = generate_gas_giant_satellites(&config, "Giant", OrbitalZone::OuterReaches, 10, 3, &mut rng);
        assert_eq!(satellites.len(), 3);
        for satellite in &satellites {
            let Satellite::Moon(body) = satellite else {
                panic!("expected a moon, got {satellite:?}");
            };
            assert!(body.planet.is_moon);
            assert!(body.satellites.is_empty());
        }
    }

    #[test]
    fn test_moon_size_bounded_by_parent() {
        let config = GeneratorConfig::default();
        let mut rng = ScriptedRolls::always_max();
        let satellites = generate_gas_giant_satellites(&config, "Dwarf", OrbitalZone::InnerCauldron, 6, 1, &mut rng);
        let Satellite::Moon(body) = &satellites[0] else {
            panic!("expected a moon");
        };
        assert!(body.planet.body_value <= 6);
    }
}
