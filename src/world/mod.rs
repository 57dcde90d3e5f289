//! World generation: star systems, the staged planet pipeline, and the
//! resource ledger planets carry.
//!
//! [`generate_system`] is the entry point. Individual bodies can be built
//! with [`PlanetPipeline`] directly.

pub mod arena;
pub mod body;
pub mod context;
pub mod environment;
pub mod inhabitants;
pub mod pipeline;
pub mod resources;
pub mod satellites;
pub mod system;

pub use arena::{Arena, Node, NodeId, NodeKind};
pub use body::{AtmosphereComposition, AtmospherePresence, Climate, Gravity, Habitability, OrbitalZone, SizeClass};
pub use context::{BodyRequest, GenerationContext};
pub use environment::{Environment, Landmark, LandmassCounts, Territory, TerritoryTrait};
pub use inhabitants::{Development, Inhabitants, Species};
pub use pipeline::{Planet, PlanetPipeline, Stage};
pub use resources::{Deposit, ResourceKind, ResourceLedger, XenosRuinSpecies};
pub use satellites::{GeneratedBody, Satellite};
pub use system::{generate_system, Star, StarSystem, SystemFeature};
