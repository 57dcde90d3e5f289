//! Creature generation and the trait/stat composition engine.
//!
//! Each rulebook's creature tables are an independent [`GenerateCreature`]
//! strategy. Call sites pick one through [`CreatureBlueprint`]; the shared
//! statline maths lives in [`compose`] as free functions over a profile.

pub mod bestiary;
pub mod compose;
pub mod inequity;
pub mod primitive;
pub mod profile;
pub mod stats;
pub mod traits;
pub mod weapons;

use crate::config::RuleSources;
use crate::dice::{choose_uniform, RandomSource};
use crate::error::{GeneratorError, Result};

pub use bestiary::{FaunaGenerator, FloraGenerator, WorldType};
pub use compose::{ComposedProfile, Movement};
pub use inequity::{Archetype, InequityGenerator};
pub use primitive::PrimitiveGenerator;
pub use profile::{CreatureOrigin, CreatureProfile};
pub use stats::{Characteristic, Stats};
pub use traits::{CreatureSize, CreatureTrait, Traits};
pub use weapons::{DamageType, Weapon, WeaponClass, WeaponQuality};

/// A creature generation strategy.
pub trait GenerateCreature {
    fn generate(&self, rng: &mut impl RandomSource) -> CreatureProfile;
}

/// Which strategy to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreatureBlueprint {
    Inequity(Archetype),
    BestiaryFauna(WorldType),
    BestiaryFlora(WorldType),
    Primitive,
}

impl CreatureBlueprint {
    pub fn generate(&self, rng: &mut impl RandomSource) -> CreatureProfile {
        let profile = match self {
            CreatureBlueprint::Inequity(archetype) => InequityGenerator::new(*archetype).generate(rng),
            CreatureBlueprint::BestiaryFauna(world) => FaunaGenerator::new(*world).generate(rng),
            CreatureBlueprint::BestiaryFlora(world) => FloraGenerator::new(*world).generate(rng),
            CreatureBlueprint::Primitive => PrimitiveGenerator.generate(rng),
        };
        tracing::debug!(name = %profile.name, blueprint = ?self, "generated creature");
        profile
    }

    /// Blueprint for a notable species on a world, or `None` when no enabled
    /// book has creature tables.
    pub fn for_notable_species(
        books: &RuleSources,
        world: WorldType,
        rng: &mut impl RandomSource,
    ) -> Option<Self> {
        if books.the_koronus_bestiary {
            Some(CreatureBlueprint::BestiaryFauna(world))
        } else if books.stars_of_inequity {
            Some(CreatureBlueprint::Inequity(*choose_uniform(rng, &Archetype::ALL)))
        } else {
            None
        }
    }

    /// Parse a blueprint from a kind name plus an optional archetype or
    /// world-type name.
    ///
    /// Kinds: `inequity`, `fauna`, `flora`, `primitive`. Unknown world names
    /// fall back to a temperate world.
    pub fn parse(kind: &str, detail: Option<&str>, rng: &mut impl RandomSource) -> Result<Self> {
        match kind.to_ascii_lowercase().as_str() {
            "inequity" | "xenos" => {
                let archetype = match detail {
                    Some(name) => Archetype::from_name(name)
                        .ok_or_else(|| GeneratorError::UnknownArchetype(name.to_string()))?,
                    None => *choose_uniform(rng, &Archetype::ALL),
                };
                Ok(CreatureBlueprint::Inequity(archetype))
            }
            "fauna" => Ok(CreatureBlueprint::BestiaryFauna(
                detail.map(WorldType::from_name).unwrap_or(WorldType::TemperateWorld),
            )),
            "flora" => Ok(CreatureBlueprint::BestiaryFlora(
                detail.map(WorldType::from_name).unwrap_or(WorldType::TemperateWorld),
            )),
            "primitive" => Ok(CreatureBlueprint::Primitive),
            other => Err(GeneratorError::UnknownCreatureKind(other.to_string())),
        }
    }
}

/// Join a random prefix and suffix into one word ("Razorstalker").
pub(crate) fn compound_name(rng: &mut impl RandomSource, prefixes: &[&str], suffixes: &[&str]) -> String {
    let prefix = *choose_uniform(rng, prefixes);
    let suffix = *choose_uniform(rng, suffixes);
    format!("{}{}", prefix, suffix.to_lowercase())
}
