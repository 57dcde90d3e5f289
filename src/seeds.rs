//! Seed management for generation requests
//!
//! Every kind of generated entity gets its own seed, derived from a master
//! seed, so a system and a creature rolled from the same master never share a
//! random stream.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeds for every generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationSeeds {
    /// Master seed (used for display/reference)
    pub master: u64,
    /// Star systems and everything inside them
    pub system: u64,
    /// Standalone creatures
    pub creatures: u64,
    /// Standalone starships
    pub starships: u64,
    /// Treasures
    pub treasure: u64,
}

impl GenerationSeeds {
    /// Create seeds from a master seed, deriving all sub-seeds deterministically.
    pub fn from_master(master: u64) -> Self {
        Self {
            master,
            system: derive_seed(master, "system"),
            creatures: derive_seed(master, "creatures"),
            starships: derive_seed(master, "starships"),
            treasure: derive_seed(master, "treasure"),
        }
    }

    /// Seeds for the `index`-th request of a batch.
    pub fn nth(&self, index: u64) -> Self {
        Self::from_master(derive_seed(self.master, &format!("batch-{index}")))
    }

    pub fn system_rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.system)
    }

    pub fn creature_rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.creatures)
    }

    pub fn starship_rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.starships)
    }

    pub fn treasure_rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.treasure)
    }
}

impl Default for GenerationSeeds {
    fn default() -> Self {
        Self::from_master(rand::random())
    }
}

/// Derive a sub-seed from a master seed and a label.
fn derive_seed(master: u64, label: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    master.hash(&mut hasher);
    label.hash(&mut hasher);
    hasher.finish()
}

impl std::fmt::Display for GenerationSeeds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GenerationSeeds {{ master: {}, system: {}, creatures: {}, starships: {}, treasure: {} }}",
            self.master, self.system, self.creatures, self.starships, self.treasure,
        )
    }
}
