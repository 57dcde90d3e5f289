//! Procedural generator for Koronus Expanse star systems
//!
//! Re-exports modules for use by the binary and tests.

pub mod config;
pub mod creatures;
pub mod dice;
pub mod error;
pub mod naming;
pub mod seeds;
pub mod starship;
pub mod tables;
pub mod treasure;
pub mod world;

pub use config::{GeneratorConfig, RuleSources, SystemCreationRules};
pub use dice::{RandomSource, ScriptedRolls};
pub use error::{GeneratorError, Result};
pub use seeds::GenerationSeeds;
