//! Property tests over many seeds for the generation invariants.

use koronus_generator::creatures::{
    Archetype, CreatureBlueprint, CreatureOrigin, CreatureProfile, CreatureTrait, Stats, Traits, WorldType,
};
use koronus_generator::dice::ScriptedRolls;
use koronus_generator::treasure::generate_treasure;
use koronus_generator::world::environment::generate_landmasses;
use koronus_generator::world::resources::{Depletion, MineralType, OrganicType};
use koronus_generator::world::satellites::MAX_MOON_DEPTH;
use koronus_generator::world::{
    BodyRequest, GeneratedBody, Habitability, OrbitalZone, PlanetPipeline, ResourceKind, ResourceLedger, SizeClass,
};
use koronus_generator::GeneratorConfig;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn arb_size() -> impl Strategy<Value = SizeClass> {
    prop::sample::select(SizeClass::ALL.to_vec())
}

fn arb_habitability() -> impl Strategy<Value = Habitability> {
    prop::sample::select(Habitability::ALL.to_vec())
}

fn arb_zone() -> impl Strategy<Value = OrbitalZone> {
    prop::sample::select(OrbitalZone::ALL.to_vec())
}

fn arb_depletable() -> impl Strategy<Value = ResourceKind> {
    prop_oneof![
        Just(ResourceKind::Mineral(MineralType::IndustrialMetals)),
        Just(ResourceKind::Mineral(MineralType::Radioactives)),
        Just(ResourceKind::Organic(OrganicType::Curative)),
        Just(ResourceKind::Organic(OrganicType::Toxins)),
    ]
}

fn creature_with(strength: i32, traits: Traits) -> CreatureProfile {
    let stats = Stats::from_array([30, 30, strength, 30, 30, 30, 30, 30, 30]);
    CreatureProfile::new("Subject", CreatureOrigin::Custom, stats, 10).with_traits(traits)
}

/// Every body in the tree, moons included.
fn bodies(body: &GeneratedBody) -> Vec<&GeneratedBody> {
    let mut out = vec![body];
    for moon in body.moons() {
        out.extend(bodies(moon));
    }
    out
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Landmass counts exist only from Liquid Water up and stay within the
    /// die range after modifiers.
    #[test]
    fn landmass_counts_stay_in_range(seed in any::<u64>(), size in arb_size(), habitability in arb_habitability()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        match generate_landmasses(size, habitability, &mut rng) {
            None => prop_assert!(habitability < Habitability::LiquidWater),
            Some(counts) => {
                prop_assert!(habitability >= Habitability::LiquidWater);
                prop_assert!(counts.islands <= 12);
                prop_assert!(counts.continents <= 6);
            }
        }
    }

    /// The unnatural multiplier applies once to the base bonus, however the
    /// intensity was reached.
    #[test]
    fn unnatural_strength_multiplies_once(strength in 0i32..100, intensity in 0u32..5, apex in 0u32..4) {
        let traits = Traits::new()
            .with(CreatureTrait::UnnaturalStrength, intensity)
            .with(CreatureTrait::Apex, apex);
        let composed = creature_with(strength, traits).compose();

        let granted = u32::from(apex >= 2);
        let total_intensity = intensity + granted;
        prop_assert_eq!(composed.traits.intensity(CreatureTrait::UnnaturalStrength), total_intensity);
        prop_assert_eq!(composed.strength_bonus, (strength / 10) * (total_intensity as i32 + 1));
    }

    /// No territories below Limited Ecosystem, on planets or their moons.
    #[test]
    fn environment_needs_an_ecosystem(seed in any::<u64>(), zone in arb_zone()) {
        let config = GeneratorConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let body = PlanetPipeline::new(&config).generate(BodyRequest::planet("Prop", zone), &mut rng);

        for body in bodies(&body) {
            let planet = &body.planet;
            if planet.habitability < Habitability::LimitedEcosystem {
                prop_assert!(planet.environment.is_none(), "{} has territories at {}", planet.name, planet.habitability);
            }
        }
        prop_assert!(body.moon_depth() <= MAX_MOON_DEPTH);
    }

    /// Depletion removes at most what a deposit holds.
    #[test]
    fn depletion_floors_at_zero(
        seed in any::<u64>(),
        deposits in prop::collection::vec((arb_depletable(), 0u32..200), 0..6),
        pools in 0u32..6,
        dice in 0u32..4,
        bonus in -5i32..10,
    ) {
        let mut ledger = ResourceLedger::new();
        for (kind, amount) in &deposits {
            ledger.deposit(*kind, *amount);
        }
        let before = ledger.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let removed = ledger.deplete_weighted(&mut rng, Depletion { pools, dice, bonus });

        prop_assert_eq!(before.depletable_abundance() - ledger.depletable_abundance(), removed);
        for deposit in before.deposits() {
            prop_assert!(ledger.abundance(deposit.kind) <= deposit.abundance);
        }
    }

    /// Every creature strategy finishes for any seed.
    #[test]
    fn creature_tables_terminate(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for archetype in Archetype::ALL {
            let profile = CreatureBlueprint::Inequity(archetype).generate(&mut rng);
            prop_assert!(profile.compose().wounds > 0);
        }
        for world in WorldType::ALL {
            CreatureBlueprint::BestiaryFauna(world).generate(&mut rng);
            CreatureBlueprint::BestiaryFlora(world).generate(&mut rng);
        }
    }
}

#[test]
fn maximum_recursion_completes() {
    let config = GeneratorConfig::default();

    for archetype in Archetype::ALL {
        CreatureBlueprint::Inequity(archetype).generate(&mut ScriptedRolls::always_max());
    }
    for world in WorldType::ALL {
        CreatureBlueprint::BestiaryFauna(world).generate(&mut ScriptedRolls::always_max());
        CreatureBlueprint::BestiaryFlora(world).generate(&mut ScriptedRolls::always_max());
    }
    CreatureBlueprint::Primitive.generate(&mut ScriptedRolls::always_max());
    generate_treasure(&config, &mut ScriptedRolls::always_max());

    for zone in OrbitalZone::ALL {
        let body = PlanetPipeline::new(&config)
            .generate(BodyRequest::planet("Max", zone), &mut ScriptedRolls::always_max());
        assert!(body.moon_depth() <= MAX_MOON_DEPTH);
        for moon in body.moons() {
            assert!(moon.satellites.is_empty());
        }
    }
}
