//! Inhabitant species, development levels and the resources they consume.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::body::Habitability;
use super::context::GenerationContext;
use super::resources::{Depletion, ResourceLedger};
use crate::creatures::{CreatureBlueprint, CreatureProfile};
use crate::dice::{d10, RandomSource};
use crate::tables::Table;

/// Rerolls of the species table before the body is left uninhabited.
pub const MAX_SPECIES_REROLLS: u32 = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Species {
    Human,
    Ork,
    Eldar,
    Kroot,
    OtherXenos,
    DarkEldar,
}

const SPECIES: Table<Species> = Table::new(
    10,
    &[
        (4, Species::Human),
        (6, Species::Ork),
        (7, Species::Eldar),
        (8, Species::Kroot),
        (9, Species::OtherXenos),
        (10, Species::DarkEldar),
    ],
);

impl Species {
    pub fn name(&self) -> &'static str {
        match self {
            Species::Human => "Human",
            Species::Ork => "Ork",
            Species::Eldar => "Eldar",
            Species::Kroot => "Kroot",
            Species::OtherXenos => "Other Xenos",
            Species::DarkEldar => "Dark Eldar",
        }
    }

    /// Whether this species may settle the body.
    pub fn allowed(&self, ctx: &GenerationContext<'_>, habitability: Habitability) -> bool {
        match self {
            Species::Ork | Species::Kroot => habitability.has_ecosystem(),
            Species::DarkEldar => ctx.books().the_soul_reaver,
            Species::Human | Species::Eldar | Species::OtherXenos => true,
        }
    }

    fn development_table(&self) -> &'static Table<Development> {
        match self {
            Species::Human => &HUMAN_DEVELOPMENT,
            Species::Ork => &ORK_DEVELOPMENT,
            Species::Eldar => &ELDAR_DEVELOPMENT,
            Species::Kroot => &KROOT_DEVELOPMENT,
            Species::DarkEldar => &DARK_ELDAR_DEVELOPMENT,
            Species::OtherXenos => &OTHER_XENOS_DEVELOPMENT,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Development {
    AdvancedIndustry,
    BasicIndustry,
    Colony,
    OrbitalHabitation,
    PreIndustrial,
    PrimitiveClans,
    Voidfarers,
}

impl Development {
    pub fn name(&self) -> &'static str {
        match self {
            Development::AdvancedIndustry => "Advanced Industry",
            Development::BasicIndustry => "Basic Industry",
            Development::Colony => "Colony",
            Development::OrbitalHabitation => "Orbital Habitation",
            Development::PreIndustrial => "Pre-Industrial",
            Development::PrimitiveClans => "Primitive Clans",
            Development::Voidfarers => "Voidfarers",
        }
    }

    /// Draws this level makes against mineral and organic pools.
    pub fn depletion(&self) -> Option<Depletion> {
        match self {
            Development::AdvancedIndustry | Development::Voidfarers => Some(Depletion { pools: 3, dice: 3, bonus: 5 }),
            Development::BasicIndustry => Some(Depletion { pools: 2, dice: 2, bonus: 5 }),
            Development::Colony => Some(Depletion { pools: 1, dice: 1, bonus: 5 }),
            Development::PreIndustrial | Development::OrbitalHabitation => {
                Some(Depletion { pools: 1, dice: 1, bonus: 0 })
            }
            Development::PrimitiveClans => None,
        }
    }
}

impl fmt::Display for Development {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const HUMAN_DEVELOPMENT: Table<Development> = Table::new(
    10,
    &[
        (1, Development::AdvancedIndustry),
        (3, Development::BasicIndustry),
        (4, Development::Colony),
        (5, Development::OrbitalHabitation),
        (7, Development::PreIndustrial),
        (9, Development::PrimitiveClans),
        (10, Development::Voidfarers),
    ],
);

const ORK_DEVELOPMENT: Table<Development> = Table::new(
    10,
    &[
        (2, Development::AdvancedIndustry),
        (4, Development::BasicIndustry),
        (6, Development::Colony),
        (9, Development::PrimitiveClans),
        (10, Development::Voidfarers),
    ],
);

const ELDAR_DEVELOPMENT: Table<Development> = Table::new(
    10,
    &[
        (6, Development::PrimitiveClans),
        (8, Development::OrbitalHabitation),
        (10, Development::Voidfarers),
    ],
);

const KROOT_DEVELOPMENT: Table<Development> = Table::new(
    10,
    &[
        (6, Development::PrimitiveClans),
        (8, Development::Colony),
        (10, Development::Voidfarers),
    ],
);

const DARK_ELDAR_DEVELOPMENT: Table<Development> =
    Table::new(10, &[(6, Development::OrbitalHabitation), (10, Development::Voidfarers)]);

const OTHER_XENOS_DEVELOPMENT: Table<Development> =
    Table::new(10, &[(7, Development::PrimitiveClans), (10, Development::Colony)]);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inhabitants {
    pub species: Species,
    pub development: Development,
    /// Statline for primitive xenos.
    #[serde(default)]
    pub profile: Option<CreatureProfile>,
}

/// Roll the species table until an allowed species comes up.
///
/// Gives up after [`MAX_SPECIES_REROLLS`] rerolls.
pub fn roll_species(
    ctx: &GenerationContext<'_>,
    habitability: Habitability,
    rng: &mut impl RandomSource,
) -> Option<Species> {
    for _ in 0..=MAX_SPECIES_REROLLS {
        let species = SPECIES.roll(rng, 0);
        if species.allowed(ctx, habitability) {
            return Some(species);
        }
        tracing::trace!(%species, ?habitability, "species not allowed here, rerolling");
    }
    tracing::warn!(?habitability, rerolls = MAX_SPECIES_REROLLS, "no allowed species found, leaving body uninhabited");
    None
}

/// Inhabitants stage. Consumes resources according to the development level.
pub fn generate_inhabitants(
    ctx: &GenerationContext<'_>,
    habitability: Habitability,
    resources: &mut ResourceLedger,
    rng: &mut impl RandomSource,
) -> Option<Inhabitants> {
    if d10(rng) > habitability.inhabitant_threshold() {
        return None;
    }
    let species = roll_species(ctx, habitability, rng)?;
    let development = species.development_table().roll(rng, 0);

    if let Some(depletion) = development.depletion() {
        let removed = resources.deplete_weighted(rng, depletion);
        tracing::trace!(%species, %development, removed, "inhabitants depleted resources");
    }

    let profile = (species == Species::OtherXenos && development == Development::PrimitiveClans)
        .then(|| CreatureBlueprint::Primitive.generate(rng));

    Some(Inhabitants {
        species,
        development,
        profile,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GeneratorConfig, RuleSources};
    use crate::dice::ScriptedRolls;
    use crate::world::body::OrbitalZone;
    use crate::world::context::BodyRequest;
    use crate::world::resources::{MineralType, ResourceKind};

    fn request() -> BodyRequest {
        BodyRequest::planet("Test", OrbitalZone::PrimaryBiosphere)
    }

    #[test]
    fn test_ork_on_barren_world_rerolls() {
        let config = GeneratorConfig::default();
        let ctx = GenerationContext::new(&config, &request());
        // 5 = Ork (needs an ecosystem), 8 = Kroot (same), 10 = Dark Eldar (book off), 2 = Human
        let mut rng = ScriptedRolls::new([5, 8, 10, 2]);
        assert_eq!(roll_species(&ctx, Habitability::TrappedWater, &mut rng), Some(Species::Human));
    }

    #[test]
    fn test_all_gated_gives_up() {
        let config = GeneratorConfig::default();
        let ctx = GenerationContext::new(&config, &request());
        // Every roll is a 10, which is Dark Eldar without its book
        let mut rng = ScriptedRolls::always_max();
        assert_eq!(roll_species(&ctx, Habitability::Verdant, &mut rng), None);
    }

    #[test]
    fn test_dark_eldar_with_book() {
        let config = GeneratorConfig {
            books: RuleSources::all(),
            ..GeneratorConfig::default()
        };
        let ctx = GenerationContext::new(&config, &request());
        let mut rng = ScriptedRolls::always_max();
        assert_eq!(roll_species(&ctx, Habitability::Inhospitable, &mut rng), Some(Species::DarkEldar));
    }

    #[test]
    fn test_advanced_industry_depletes() {
        let config = GeneratorConfig::default();
        let ctx = GenerationContext::new(&config, &request());
        let metals = ResourceKind::Mineral(MineralType::IndustrialMetals);
        let mut resources = ResourceLedger::new();
        resources.deposit(metals, 100);

        // Present (1), Human (1), Advanced Industry (1), then three draws of
        // 3d10+5 with every die at 10
        let mut rng = ScriptedRolls::new([1, 1, 1, 1, 10, 10, 10, 1, 10, 10, 10, 1, 10, 10, 10]);
        let inhabitants = generate_inhabitants(&ctx, Habitability::Verdant, &mut resources, &mut rng).unwrap();

        assert_eq!(inhabitants.development, Development::AdvancedIndustry);
        assert_eq!(resources.abundance(metals), 0);
    }

    #[test]
    fn test_absent_inhabitants() {
        let config = GeneratorConfig::default();
        let ctx = GenerationContext::new(&config, &request());
        let mut resources = ResourceLedger::new();
        let mut rng = ScriptedRolls::new([3]);
        assert!(generate_inhabitants(&ctx, Habitability::Inhospitable, &mut resources, &mut rng).is_none());
    }

    #[test]
    fn test_primitive_xenos_get_a_profile() {
        let config = GeneratorConfig::default();
        let ctx = GenerationContext::new(&config, &request());
        let mut resources = ResourceLedger::new();
        // Present, Other Xenos (9), Primitive Clans (1)
        let mut rng = ScriptedRolls::new([1, 9, 1]);
        let inhabitants = generate_inhabitants(&ctx, Habitability::Verdant, &mut resources, &mut rng).unwrap();
        assert_eq!(inhabitants.species, Species::OtherXenos);
        assert!(inhabitants.profile.is_some());
    }
}
