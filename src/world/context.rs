//! Per-body generation context.
//!
//! Early stages write modifiers here and later stages read them. The context
//! lives for one pass of the pipeline; only the [`Planet`](super::Planet) it
//! fills in survives.

use super::body::OrbitalZone;
use crate::config::{GeneratorConfig, RuleSources, SystemCreationRules};

/// Largest body roll; a body with no parent ceiling uses this.
pub const MAX_BODY_VALUE: i32 = 10;

/// What the caller asks the pipeline to build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BodyRequest {
    pub name: String,
    pub zone: OrbitalZone,
    /// Ceiling on the body roll.
    pub max_size: i32,
    /// 0 for a planet, 1 for its moon.
    pub depth: u32,
    pub force_inhabitable: bool,
}

impl BodyRequest {
    pub fn planet(name: impl Into<String>, zone: OrbitalZone) -> Self {
        Self {
            name: name.into(),
            zone,
            max_size: MAX_BODY_VALUE,
            depth: 0,
            force_inhabitable: false,
        }
    }

    /// A moon orbiting a body whose body value is `parent_value`.
    pub fn moon(name: impl Into<String>, zone: OrbitalZone, parent_value: i32, parent_depth: u32) -> Self {
        Self {
            name: name.into(),
            zone,
            max_size: parent_value,
            depth: parent_depth + 1,
            force_inhabitable: false,
        }
    }

    pub fn force_inhabitable(mut self, force: bool) -> Self {
        self.force_inhabitable = force;
        self
    }
}

#[derive(Clone, Debug)]
pub struct GenerationContext<'a> {
    pub config: &'a GeneratorConfig,
    pub zone: OrbitalZone,
    pub max_size: i32,
    pub depth: u32,
    pub force_inhabitable: bool,

    // Body
    pub gravity_modifier: i32,
    pub orbital_modifier: i32,
    pub mineral_abundance_modifier: i32,

    // Gravity
    pub feature_count: u32,
    pub atmosphere_modifier: i32,

    // Atmosphere and climate
    pub habitability_modifier: i32,
    pub habitability_cap: Option<i32>,
}

impl<'a> GenerationContext<'a> {
    pub fn new(config: &'a GeneratorConfig, request: &BodyRequest) -> Self {
        Self {
            config,
            zone: request.zone,
            max_size: request.max_size.clamp(1, MAX_BODY_VALUE),
            depth: request.depth,
            force_inhabitable: request.force_inhabitable,
            gravity_modifier: 0,
            orbital_modifier: 0,
            mineral_abundance_modifier: 0,
            feature_count: 0,
            atmosphere_modifier: 0,
            habitability_modifier: 0,
            habitability_cap: None,
        }
    }

    pub fn is_moon(&self) -> bool {
        self.depth > 0
    }

    pub fn books(&self) -> &RuleSources {
        &self.config.books
    }

    pub fn rules(&self) -> &SystemCreationRules {
        &self.config.rules
    }

    /// Haven rules only act on bodies in the Primary Biosphere.
    pub fn in_haven_zone(&self) -> bool {
        self.zone == OrbitalZone::PrimaryBiosphere
    }
}
