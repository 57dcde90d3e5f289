//! Rule-source flags and system creation rules.
//!
//! A [`GeneratorConfig`] is built once per request and passed by reference
//! into every generator; nothing in the crate reads configuration from
//! global state.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::starship::ShipOrigin;
use crate::world::resources::XenosRuinSpecies;

/// Which rulebooks may contribute tables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSources {
    /// Core system, planet and notable species tables.
    pub stars_of_inequity: bool,
    /// Bestiary fauna/flora generation for notable species.
    pub the_koronus_bestiary: bool,
    /// Dark Eldar inhabitants and vessels.
    pub the_soul_reaver: bool,
    /// Treasure craftsmanship rolls.
    pub into_the_storm: bool,
    /// Capital hull classes for starships.
    pub battlefleet_koronus: bool,
}

impl Default for RuleSources {
    fn default() -> Self {
        Self {
            stars_of_inequity: true,
            the_koronus_bestiary: false,
            the_soul_reaver: false,
            into_the_storm: false,
            battlefleet_koronus: false,
        }
    }
}

impl RuleSources {
    /// Every book enabled.
    pub fn all() -> Self {
        Self {
            stars_of_inequity: true,
            the_koronus_bestiary: true,
            the_soul_reaver: true,
            into_the_storm: true,
            battlefleet_koronus: true,
        }
    }
}

/// Numeric and boolean overrides threaded into the world pipeline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemCreationRules {
    /// Extra mineral deposits rolled on every planet.
    pub extra_minerals_per_planet: u32,
    /// Extra additional-resource slots rolled on every planet.
    pub extra_resources_per_planet: u32,
    /// +1 atmosphere presence, +2 composition in the Primary Biosphere.
    pub haven_thicker_atmospheres: bool,
    /// +2 habitability in the Primary Biosphere.
    pub haven_better_habitability: bool,
    /// Raise the first Primary Biosphere planet to at least Limited Ecosystem.
    pub force_inhabitable_planet: bool,
    /// Species favoured when rolling xenos ruins.
    pub dominant_ruin_species: Option<XenosRuinSpecies>,
    /// Origin favoured when rolling wrecked vessels.
    pub dominant_wreck_origin: Option<ShipOrigin>,
}

/// Complete configuration for a generation request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub books: RuleSources,
    pub rules: SystemCreationRules,
}

impl GeneratorConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Copy of this configuration with different rules.
    pub fn with_rules(&self, rules: SystemCreationRules) -> Self {
        Self {
            books: self.books.clone(),
            rules,
        }
    }
}
