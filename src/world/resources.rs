//! Resource pools and the depletion ledger.
//!
//! A ledger holds at most one deposit per [`ResourceKind`]. Rolling a kind
//! that is already present adds to its abundance; depletion never takes a
//! deposit below zero.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::body::{Habitability, SizeClass};
use super::context::GenerationContext;
use crate::dice::{d10, d100, d5, roll_die, weighted_choice, RandomSource};
use crate::tables::Table;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MineralType {
    IndustrialMetals,
    Ornamentals,
    Radioactives,
    ExoticMaterials,
}

const MINERALS: Table<MineralType> = Table::new(
    10,
    &[
        (4, MineralType::IndustrialMetals),
        (7, MineralType::Ornamentals),
        (9, MineralType::Radioactives),
        (10, MineralType::ExoticMaterials),
    ],
);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OrganicType {
    Curative,
    JuvenatCompounds,
    Toxins,
    VividAccessories,
    ExoticCompounds,
}

const ORGANICS: Table<OrganicType> = Table::new(
    10,
    &[
        (2, OrganicType::Curative),
        (4, OrganicType::JuvenatCompounds),
        (6, OrganicType::Toxins),
        (8, OrganicType::VividAccessories),
        (10, OrganicType::ExoticCompounds),
    ],
);

/// Builders of ruined xenos structures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum XenosRuinSpecies {
    Undiscovered,
    Eldar,
    Egarian,
    Yuvath,
    Ork,
    Kroot,
}

const RUIN_SPECIES: Table<XenosRuinSpecies> = Table::new(
    10,
    &[
        (4, XenosRuinSpecies::Undiscovered),
        (6, XenosRuinSpecies::Eldar),
        (7, XenosRuinSpecies::Egarian),
        (8, XenosRuinSpecies::Yuvath),
        (9, XenosRuinSpecies::Ork),
        (10, XenosRuinSpecies::Kroot),
    ],
);

impl XenosRuinSpecies {
    pub fn name(&self) -> &'static str {
        match self {
            XenosRuinSpecies::Undiscovered => "Undiscovered Species",
            XenosRuinSpecies::Eldar => "Eldar",
            XenosRuinSpecies::Egarian => "Egarian",
            XenosRuinSpecies::Yuvath => "Yu'vath",
            XenosRuinSpecies::Ork => "Ork",
            XenosRuinSpecies::Kroot => "Kroot",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceKind {
    Mineral(MineralType),
    Organic(OrganicType),
    Archeotech,
    XenosRuins(XenosRuinSpecies),
}

impl ResourceKind {
    /// Minerals and organics are consumed by inhabitants; relics are not.
    pub fn is_depletable(&self) -> bool {
        matches!(self, ResourceKind::Mineral(_) | ResourceKind::Organic(_))
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Mineral(mineral) => write!(f, "{mineral:?}"),
            ResourceKind::Organic(organic) => write!(f, "{organic:?}"),
            ResourceKind::Archeotech => f.write_str("Archeotech Cache"),
            ResourceKind::XenosRuins(species) => write!(f, "Xenos Ruins ({})", species.name()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposit {
    pub kind: ResourceKind,
    pub abundance: u32,
}

/// How hard a population draws on its world.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Depletion {
    /// Number of weighted draws.
    pub pools: u32,
    /// d10 rolled per draw.
    pub dice: u32,
    pub bonus: i32,
}

impl Depletion {
    pub fn roll_amount(&self, rng: &mut impl RandomSource) -> u32 {
        (roll_die(rng, 10, self.dice) + self.bonus).max(0) as u32
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceLedger {
    deposits: Vec<Deposit>,
}

impl ResourceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add abundance to a kind, creating the deposit if needed.
    pub fn deposit(&mut self, kind: ResourceKind, amount: u32) {
        match self.deposits.iter_mut().find(|d| d.kind == kind) {
            Some(existing) => existing.abundance = existing.abundance.saturating_add(amount),
            None => self.deposits.push(Deposit { kind, abundance: amount }),
        }
    }

    pub fn abundance(&self, kind: ResourceKind) -> u32 {
        self.deposits
            .iter()
            .find(|d| d.kind == kind)
            .map(|d| d.abundance)
            .unwrap_or(0)
    }

    pub fn deposits(&self) -> &[Deposit] {
        &self.deposits
    }

    pub fn len(&self) -> usize {
        self.deposits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deposits.is_empty()
    }

    /// Remove up to `amount` from a kind. Returns what was actually removed.
    pub fn deplete(&mut self, kind: ResourceKind, amount: u32) -> u32 {
        match self.deposits.iter_mut().find(|d| d.kind == kind) {
            Some(deposit) => {
                let taken = deposit.abundance.min(amount);
                deposit.abundance -= taken;
                taken
            }
            None => 0,
        }
    }

    /// Total abundance left in mineral and organic deposits.
    pub fn depletable_abundance(&self) -> u32 {
        self.deposits
            .iter()
            .filter(|d| d.kind.is_depletable())
            .map(|d| d.abundance)
            .sum()
    }

    /// Run `depletion.pools` draws, each picking a mineral or organic deposit
    /// weighted by its remaining abundance. A deposit may be drawn more than
    /// once. Returns the total removed.
    pub fn deplete_weighted(&mut self, rng: &mut impl RandomSource, depletion: Depletion) -> u32 {
        let mut removed = 0;
        for _ in 0..depletion.pools {
            let weights: Vec<(ResourceKind, u32)> = self
                .deposits
                .iter()
                .filter(|d| d.kind.is_depletable() && d.abundance > 0)
                .map(|d| (d.kind, d.abundance))
                .collect();
            if weights.is_empty() {
                break;
            }
            let kind = *weighted_choice(rng, &weights);
            let amount = depletion.roll_amount(rng);
            removed += self.deplete(kind, amount);
        }
        removed
    }
}

/// Roll one mineral deposit.
pub fn roll_mineral(rng: &mut impl RandomSource, abundance_modifier: i32) -> Deposit {
    let mineral = MINERALS.roll(rng, 0);
    let abundance = (d100(rng) + abundance_modifier).max(1) as u32;
    Deposit {
        kind: ResourceKind::Mineral(mineral),
        abundance,
    }
}

/// A ledger of `count` mineral deposits.
pub fn mineral_ledger(rng: &mut impl RandomSource, count: u32, abundance_modifier: i32) -> ResourceLedger {
    let mut ledger = ResourceLedger::new();
    for _ in 0..count {
        let deposit = roll_mineral(rng, abundance_modifier);
        ledger.deposit(deposit.kind, deposit.abundance);
    }
    ledger
}

pub fn roll_ruin_species(rng: &mut impl RandomSource, dominant: Option<XenosRuinSpecies>) -> XenosRuinSpecies {
    if let Some(species) = dominant {
        if d10(rng) <= 7 {
            return species;
        }
    }
    RUIN_SPECIES.roll(rng, 0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Branch {
    Archeotech,
    Mineral,
    Organic,
    XenosRuins,
}

const ADDITIONAL_RESOURCES: Table<Branch> = Table::new(
    10,
    &[
        (2, Branch::Archeotech),
        (5, Branch::Mineral),
        (8, Branch::Organic),
        (10, Branch::XenosRuins),
    ],
);

/// Resources stage: base minerals for the body's size plus additional slots.
pub fn generate_resources(
    ctx: &GenerationContext<'_>,
    size: SizeClass,
    habitability: Habitability,
    rng: &mut impl RandomSource,
) -> ResourceLedger {
    let rules = ctx.rules();
    let mineral_count = size.roll_base_minerals(rng) + rules.extra_minerals_per_planet;
    let mut ledger = mineral_ledger(rng, mineral_count, ctx.mineral_abundance_modifier);

    let additional = ((d5(rng) - 3).max(0) as u32) + rules.extra_resources_per_planet;
    for _ in 0..additional {
        let branch = loop {
            let branch = ADDITIONAL_RESOURCES.roll(rng, 0);
            if branch == Branch::Organic && !habitability.has_ecosystem() {
                continue;
            }
            break branch;
        };

        match branch {
            Branch::Archeotech => ledger.deposit(ResourceKind::Archeotech, d100(rng) as u32),
            Branch::Mineral => {
                let deposit = roll_mineral(rng, ctx.mineral_abundance_modifier);
                ledger.deposit(deposit.kind, deposit.abundance);
            }
            Branch::Organic => {
                let organic = ORGANICS.roll(rng, 0);
                ledger.deposit(ResourceKind::Organic(organic), d100(rng) as u32);
            }
            Branch::XenosRuins => {
                let species = roll_ruin_species(rng, rules.dominant_ruin_species);
                ledger.deposit(ResourceKind::XenosRuins(species), d100(rng) as u32);
            }
        }
    }
    ledger
}
