//! The staged planet pipeline.
//!
//! Stages run in [`Stage::ORDER`] over one [`GenerationContext`]. Each stage
//! reads what earlier stages wrote (to the context or the planet) and writes
//! its own result. Stage functions are public so a single stage can be driven
//! with scripted rolls.

use serde::{Deserialize, Serialize};

use super::body::{
    AtmosphereComposition, AtmospherePresence, Climate, Gravity, Habitability, OrbitalZone, SizeClass,
    ATMOSPHERE_COMPOSITION, ATMOSPHERE_PRESENCE, CLIMATE, GRAVITY, HABITABILITY, SIZE_CLASSES,
};
use super::context::{BodyRequest, GenerationContext};
use super::environment::{
    classify_world, generate_environment, generate_landmasses, Environment, LandmassCounts, TerritoryTrait,
};
use super::inhabitants::{generate_inhabitants, Inhabitants};
use super::resources::{generate_resources, ResourceLedger};
use super::satellites::{generate_orbital_features, GeneratedBody};
use crate::config::GeneratorConfig;
use crate::creatures::WorldType;
use crate::dice::{d10, d5, roll_die, RandomSource};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    Body,
    Gravity,
    OrbitalFeatures,
    AtmospherePresence,
    AtmosphereComposition,
    Climate,
    Habitability,
    Landmass,
    Environment,
    Resources,
    Inhabitants,
}

impl Stage {
    pub const ORDER: [Stage; 11] = [
        Stage::Body,
        Stage::Gravity,
        Stage::OrbitalFeatures,
        Stage::AtmospherePresence,
        Stage::AtmosphereComposition,
        Stage::Climate,
        Stage::Habitability,
        Stage::Landmass,
        Stage::Environment,
        Stage::Resources,
        Stage::Inhabitants,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Stage::Body => "body",
            Stage::Gravity => "gravity",
            Stage::OrbitalFeatures => "orbital features",
            Stage::AtmospherePresence => "atmosphere presence",
            Stage::AtmosphereComposition => "atmosphere composition",
            Stage::Climate => "climate",
            Stage::Habitability => "habitability",
            Stage::Landmass => "landmass",
            Stage::Environment => "environment",
            Stage::Resources => "resources",
            Stage::Inhabitants => "inhabitants",
        }
    }
}

/// A planet or moon.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    pub zone: OrbitalZone,
    pub is_moon: bool,
    /// The capped body roll; a moon's size ceiling.
    pub body_value: i32,
    pub size: SizeClass,
    pub gravity: Gravity,
    pub atmosphere: AtmospherePresence,
    pub composition: Option<AtmosphereComposition>,
    pub climate: Climate,
    pub habitability: Habitability,
    /// Life adapted to a hostile atmosphere.
    pub adapted_life: bool,
    pub landmasses: Option<LandmassCounts>,
    pub environment: Option<Environment>,
    pub resources: ResourceLedger,
    pub inhabitants: Option<Inhabitants>,
}

impl Planet {
    /// Creature world type for this surface.
    pub fn world_type(&self) -> WorldType {
        let exotic = self
            .environment
            .as_ref()
            .is_some_and(|e| e.has_trait(TerritoryTrait::ExoticNature));
        classify_world(self.climate, self.habitability, self.landmasses, exotic)
    }
}

pub struct PlanetPipeline<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> PlanetPipeline<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Run every stage for one body.
    pub fn generate(&self, request: BodyRequest, rng: &mut impl RandomSource) -> GeneratedBody {
        let mut ctx = GenerationContext::new(self.config, &request);
        let mut body = GeneratedBody::new(Planet {
            name: request.name,
            zone: request.zone,
            is_moon: request.depth > 0,
            ..Planet::default()
        });

        for stage in Stage::ORDER {
            tracing::trace!(stage = stage.name(), body = %body.planet.name, "running stage");
            run_stage(stage, &mut ctx, &mut body, rng);
        }

        tracing::debug!(
            name = %body.planet.name,
            size = %body.planet.size,
            habitability = %body.planet.habitability,
            satellites = body.satellites.len(),
            "generated body"
        );
        body
    }
}

pub fn run_stage(
    stage: Stage,
    ctx: &mut GenerationContext<'_>,
    body: &mut GeneratedBody,
    rng: &mut impl RandomSource,
) {
    match stage {
        Stage::Body => body_stage(ctx, &mut body.planet, rng),
        Stage::Gravity => gravity_stage(ctx, &mut body.planet, rng),
        Stage::OrbitalFeatures => body.satellites = generate_orbital_features(ctx, &body.planet, rng),
        Stage::AtmospherePresence => atmosphere_presence_stage(ctx, &mut body.planet, rng),
        Stage::AtmosphereComposition => atmosphere_composition_stage(ctx, &mut body.planet, rng),
        Stage::Climate => climate_stage(ctx, &mut body.planet, rng),
        Stage::Habitability => habitability_stage(ctx, &mut body.planet, rng),
        Stage::Landmass => {
            body.planet.landmasses = generate_landmasses(body.planet.size, body.planet.habitability, rng);
        }
        Stage::Environment => {
            let planet = &body.planet;
            let environment = generate_environment(
                ctx,
                planet.size,
                planet.climate,
                planet.habitability,
                planet.landmasses,
                rng,
            );
            body.planet.environment = environment;
        }
        Stage::Resources => {
            body.planet.resources = generate_resources(ctx, body.planet.size, body.planet.habitability, rng);
        }
        Stage::Inhabitants => {
            let planet = &mut body.planet;
            planet.inhabitants = generate_inhabitants(ctx, planet.habitability, &mut planet.resources, rng);
        }
    }
}

/// Size class, capped by the context's ceiling, and its modifiers.
pub fn body_stage(ctx: &mut GenerationContext<'_>, planet: &mut Planet, rng: &mut impl RandomSource) {
    let value = d10(rng).min(ctx.max_size);
    let size = SIZE_CLASSES.resolve(value);

    planet.body_value = value;
    planet.size = size;
    ctx.gravity_modifier = size.gravity_modifier();
    ctx.orbital_modifier = size.orbital_modifier();
    ctx.mineral_abundance_modifier = size.mineral_abundance_modifier();
}

/// Gravity class, orbital feature count and the atmosphere modifier.
pub fn gravity_stage(ctx: &mut GenerationContext<'_>, planet: &mut Planet, rng: &mut impl RandomSource) {
    let gravity = GRAVITY.roll(rng, ctx.gravity_modifier);
    planet.gravity = gravity;
    ctx.atmosphere_modifier = gravity.atmosphere_modifier();
    ctx.feature_count = if ctx.is_moon() {
        0
    } else {
        (d5(rng) + gravity.feature_modifier()).max(1) as u32
    };
}

pub fn atmosphere_presence_stage(ctx: &mut GenerationContext<'_>, planet: &mut Planet, rng: &mut impl RandomSource) {
    let mut modifier = ctx.atmosphere_modifier;
    if ctx.rules().haven_thicker_atmospheres && ctx.in_haven_zone() {
        modifier += 1;
    }
    planet.atmosphere = ATMOSPHERE_PRESENCE.roll(rng, modifier);
}

pub fn atmosphere_composition_stage(ctx: &mut GenerationContext<'_>, planet: &mut Planet, rng: &mut impl RandomSource) {
    if planet.atmosphere == AtmospherePresence::None {
        planet.composition = None;
        return;
    }
    let modifier = if ctx.rules().haven_thicker_atmospheres && ctx.in_haven_zone() {
        2
    } else {
        0
    };
    planet.composition = Some(ATMOSPHERE_COMPOSITION.roll(rng, modifier));
}

/// Climate, its habitability modifier and cap.
pub fn climate_stage(ctx: &mut GenerationContext<'_>, planet: &mut Planet, rng: &mut impl RandomSource) {
    let climate = if planet.atmosphere == AtmospherePresence::None {
        match ctx.zone {
            OrbitalZone::InnerCauldron => Climate::BurningWorld,
            OrbitalZone::OuterReaches => Climate::IceWorld,
            OrbitalZone::PrimaryBiosphere => {
                if d10(rng) <= 5 {
                    Climate::HotWorld
                } else {
                    Climate::ColdWorld
                }
            }
        }
    } else {
        CLIMATE.roll(rng, ctx.zone.climate_shift())
    };

    planet.climate = climate;
    ctx.habitability_modifier = climate.habitability_modifier();
    ctx.habitability_cap = climate.habitability_cap();
}

/// Habitability tier. The climate cap applies after every modifier.
pub fn habitability_stage(ctx: &mut GenerationContext<'_>, planet: &mut Planet, rng: &mut impl RandomSource) {
    let breathable = planet.composition.is_some_and(|c| c.supports_life());
    let adapted = !breathable && d10(rng) == 10;

    let mut tier = if breathable || adapted {
        let mut modifier = ctx.habitability_modifier
            + planet.atmosphere.habitability_modifier()
            + planet.composition.map_or(0, |c| c.habitability_modifier());
        if ctx.rules().haven_better_habitability && ctx.in_haven_zone() {
            modifier += 2;
        }

        let mut roll = roll_die(rng, 10, 1) + modifier;
        if !adapted {
            if let Some(cap) = ctx.habitability_cap {
                roll = roll.min(cap);
            }
        }
        HABITABILITY.resolve(roll)
    } else {
        Habitability::Inhospitable
    };

    if ctx.force_inhabitable && tier < Habitability::LimitedEcosystem {
        tracing::debug!(name = %planet.name, from = %tier, "forcing an inhabitable planet");
        tier = Habitability::LimitedEcosystem;
    }

    planet.adapted_life = adapted;
    planet.habitability = tier;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SystemCreationRules;
    use crate::dice::ScriptedRolls;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn context(config: &GeneratorConfig, zone: OrbitalZone) -> GenerationContext<'_> {
        GenerationContext::new(config, &BodyRequest::planet("Test", zone))
    }

    #[test]
    fn test_small_body_low_gravity() {
        let config = GeneratorConfig::default();
        let mut ctx = context(&config, OrbitalZone::PrimaryBiosphere);
        let mut planet = Planet::default();
        // Body 2 = Small (gravity -5); gravity d10 1 - 5 = Low; d5 = 1 - 3 clamps to 1
        let mut rng = ScriptedRolls::new([2, 1, 1]);

        body_stage(&mut ctx, &mut planet, &mut rng);
        gravity_stage(&mut ctx, &mut planet, &mut rng);

        assert_eq!(planet.size, SizeClass::Small);
        assert_eq!(planet.gravity, Gravity::Low);
        assert_eq!(ctx.feature_count, 1);
        assert_eq!(ctx.atmosphere_modifier, -2);
    }

    #[test]
    fn test_body_roll_capped() {
        let config = GeneratorConfig::default();
        let request = BodyRequest::moon("Test a", OrbitalZone::PrimaryBiosphere, 3, 0);
        let mut ctx = GenerationContext::new(&config, &request);
        let mut planet = Planet::default();
        let mut rng = ScriptedRolls::always_max();

        body_stage(&mut ctx, &mut planet, &mut rng);
        gravity_stage(&mut ctx, &mut planet, &mut rng);

        assert_eq!(planet.body_value, 3);
        assert_eq!(planet.size, SizeClass::Small);
        assert_eq!(ctx.feature_count, 0);
    }

    #[test]
    fn test_haven_only_in_primary_biosphere() {
        let config = GeneratorConfig::default().with_rules(SystemCreationRules {
            haven_thicker_atmospheres: true,
            ..SystemCreationRules::default()
        });
        let mut planet = Planet::default();

        // Presence roll 1 is None without help, Thin with it
        let mut ctx = context(&config, OrbitalZone::PrimaryBiosphere);
        atmosphere_presence_stage(&mut ctx, &mut planet, &mut ScriptedRolls::new([1]));
        assert_eq!(planet.atmosphere, AtmospherePresence::Thin);

        let mut ctx = context(&config, OrbitalZone::OuterReaches);
        atmosphere_presence_stage(&mut ctx, &mut planet, &mut ScriptedRolls::new([1]));
        assert_eq!(planet.atmosphere, AtmospherePresence::None);
    }

    #[test]
    fn test_haven_composition_and_habitability() {
        let config = GeneratorConfig::default().with_rules(SystemCreationRules {
            haven_thicker_atmospheres: true,
            haven_better_habitability: true,
            ..SystemCreationRules::default()
        });

        // Composition 5 is Toxic, 5 + 2 is Tainted
        let mut planet = Planet {
            atmosphere: AtmospherePresence::Moderate,
            ..Planet::default()
        };
        let mut ctx = context(&config, OrbitalZone::PrimaryBiosphere);
        atmosphere_composition_stage(&mut ctx, &mut planet, &mut ScriptedRolls::new([5]));
        assert_eq!(planet.composition, Some(AtmosphereComposition::Tainted));

        let mut ctx = context(&config, OrbitalZone::OuterReaches);
        atmosphere_composition_stage(&mut ctx, &mut planet, &mut ScriptedRolls::new([5]));
        assert_eq!(planet.composition, Some(AtmosphereComposition::Toxic));

        // Habitability 3 + 1 (moderate) is Liquid Water, + 2 more is Limited Ecosystem
        let tainted = Planet {
            atmosphere: AtmospherePresence::Moderate,
            composition: Some(AtmosphereComposition::Tainted),
            ..Planet::default()
        };
        for (zone, expected) in [
            (OrbitalZone::PrimaryBiosphere, Habitability::LimitedEcosystem),
            (OrbitalZone::OuterReaches, Habitability::LiquidWater),
        ] {
            let mut planet = tainted.clone();
            let mut ctx = context(&config, zone);
            ctx.habitability_modifier = 0;
            ctx.habitability_cap = None;
            habitability_stage(&mut ctx, &mut planet, &mut ScriptedRolls::new([3]));
            assert_eq!(planet.habitability, expected, "{zone:?}");
        }
    }

    #[test]
    fn test_airless_climates() {
        let config = GeneratorConfig::default();
        let mut planet = Planet::default();
        let mut ctx = context(&config, OrbitalZone::InnerCauldron);
        climate_stage(&mut ctx, &mut planet, &mut ScriptedRolls::always_max());
        assert_eq!(planet.climate, Climate::BurningWorld);
        assert_eq!(ctx.habitability_cap, Some(3));

        let mut ctx = context(&config, OrbitalZone::PrimaryBiosphere);
        climate_stage(&mut ctx, &mut planet, &mut ScriptedRolls::new([5]));
        assert_eq!(planet.climate, Climate::HotWorld);
    }

    #[test]
    fn test_ice_world_caps_habitability() {
        let config = GeneratorConfig::default();
        let mut ctx = context(&config, OrbitalZone::OuterReaches);
        let mut planet = Planet {
            atmosphere: AtmospherePresence::Moderate,
            composition: Some(AtmosphereComposition::Pure),
            ..Planet::default()
        };
        let mut rng = ScriptedRolls::always_max();

        climate_stage(&mut ctx, &mut planet, &mut rng);
        assert_eq!(planet.climate, Climate::IceWorld);
        assert_eq!(ctx.habitability_modifier, -7);

        habitability_stage(&mut ctx, &mut planet, &mut rng);
        assert_eq!(planet.habitability, Habitability::LiquidWater);
    }

    #[test]
    fn test_adapted_life_removes_cap() {
        let config = GeneratorConfig::default();
        let mut ctx = context(&config, OrbitalZone::PrimaryBiosphere);
        ctx.habitability_modifier = 0;
        ctx.habitability_cap = Some(3);
        let mut planet = Planet {
            atmosphere: AtmospherePresence::Moderate,
            composition: Some(AtmosphereComposition::Toxic),
            ..Planet::default()
        };
        // Adapted-life check 10, then 10 + 1 (moderate) = 11
        habitability_stage(&mut ctx, &mut planet, &mut ScriptedRolls::new([10, 10]));
        assert!(planet.adapted_life);
        assert_eq!(planet.habitability, Habitability::Verdant);
    }

    #[test]
    fn test_hostile_air_is_inhospitable() {
        let config = GeneratorConfig::default();
        let mut ctx = context(&config, OrbitalZone::PrimaryBiosphere);
        let mut planet = Planet {
            atmosphere: AtmospherePresence::Thin,
            composition: Some(AtmosphereComposition::Deadly),
            ..Planet::default()
        };
        habitability_stage(&mut ctx, &mut planet, &mut ScriptedRolls::new([9]));
        assert_eq!(planet.habitability, Habitability::Inhospitable);
    }

    #[test]
    fn test_force_inhabitable() {
        let config = GeneratorConfig::default();
        let request = BodyRequest::planet("Test", OrbitalZone::PrimaryBiosphere).force_inhabitable(true);
        let mut ctx = GenerationContext::new(&config, &request);
        let mut planet = Planet::default();
        habitability_stage(&mut ctx, &mut planet, &mut ScriptedRolls::always_min());
        assert_eq!(planet.habitability, Habitability::LimitedEcosystem);
    }

    #[test]
    fn test_full_pipeline_is_reproducible() {
        let config = GeneratorConfig::default();
        let pipeline = PlanetPipeline::new(&config);
        let request = BodyRequest::planet("Vexis II", OrbitalZone::PrimaryBiosphere);

        let a = pipeline.generate(request.clone(), &mut ChaCha8Rng::seed_from_u64(77));
        let b = pipeline.generate(request, &mut ChaCha8Rng::seed_from_u64(77));
        assert_eq!(a, b);
    }

    #[test]
    fn test_environment_only_with_ecosystem() {
        let config = GeneratorConfig::default();
        let pipeline = PlanetPipeline::new(&config);
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        for i in 0..200 {
            let body = pipeline.generate(BodyRequest::planet(format!("P{i}"), OrbitalZone::PrimaryBiosphere), &mut rng);
            let planet = &body.planet;
            assert_eq!(planet.environment.is_some(), planet.habitability.has_ecosystem(), "{}", planet.name);
            assert!(body.moon_depth() <= 1);
        }
    }
}
