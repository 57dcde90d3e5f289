use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

use koronus_generator::creatures::CreatureBlueprint;
use koronus_generator::starship::{generate_starship, generate_wreck};
use koronus_generator::treasure::generate_treasure;
use koronus_generator::world::{generate_system, Arena, NodeId, NodeKind, StarSystem};
use koronus_generator::{GenerationSeeds, GeneratorConfig, Result};

#[derive(Parser, Debug)]
#[command(name = "koronus_generator")]
#[command(about = "Generate star systems, creatures, starships and treasures for the Koronus Expanse")]
struct Args {
    /// Random seed (uses random seed if not specified)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// TOML file with rule sources and system creation rules
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print the generated data as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate star systems
    System {
        /// Number of systems, generated in parallel
        #[arg(short = 'n', long, default_value = "1")]
        count: u64,
    },
    /// Generate a creature
    Creature {
        /// inequity, fauna, flora or primitive
        #[arg(default_value = "inequity")]
        kind: String,
        /// Archetype for inequity creatures, world type for fauna and flora
        detail: Option<String>,
    },
    /// Generate a starship
    Starship {
        /// Generate a wreck instead of a working vessel
        #[arg(long)]
        wreck: bool,
    },
    /// Generate a treasure
    Treasure,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("koronus_generator=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Args::parse()) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    let seeds = args.seed.map(GenerationSeeds::from_master).unwrap_or_default();
    tracing::info!(seed = seeds.master, "starting generation");

    match args.command {
        Command::System { count } => {
            let systems: Vec<StarSystem> = (0..count)
                .into_par_iter()
                .map(|index| {
                    let seeds = if index == 0 { seeds.clone() } else { seeds.nth(index) };
                    generate_system(&config, &mut seeds.system_rng())
                })
                .collect();
            tracing::info!(count = systems.len(), "generated systems");

            if args.json {
                println!("{}", serde_json::to_string_pretty(&systems)?);
            } else {
                for system in &systems {
                    print!("{}", render_system(system));
                }
            }
        }
        Command::Creature { kind, detail } => {
            let mut rng = seeds.creature_rng();
            let blueprint = CreatureBlueprint::parse(&kind, detail.as_deref(), &mut rng)?;
            let profile = blueprint.generate(&mut rng);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                let composed = profile.compose();
                println!("{}", composed.name);
                println!("  {}", composed.stats);
                println!(
                    "  Wounds {}  Armour {}  Movement {}",
                    composed.wounds,
                    composed.armour,
                    composed.movement_string()
                );
                println!("  Traits: {}", composed.trait_labels().join(", "));
                for weapon in composed.weapon_strings() {
                    println!("  {weapon}");
                }
                for note in &composed.notes {
                    println!("  * {note}");
                }
            }
        }
        Command::Starship { wreck } => {
            let mut rng = seeds.starship_rng();
            let ship = if wreck {
                generate_wreck(&config, &mut rng)
            } else {
                generate_starship(&config, &mut rng)
            };
            if args.json {
                println!("{}", serde_json::to_string_pretty(&ship)?);
            } else {
                println!("{ship}");
            }
        }
        Command::Treasure => {
            let treasure = generate_treasure(&config, &mut seeds.treasure_rng());
            if args.json {
                println!("{}", serde_json::to_string_pretty(&treasure)?);
            } else {
                println!("{treasure}");
            }
        }
    }
    Ok(())
}

/// Plain indented tree of a system.
fn render_system(system: &StarSystem) -> String {
    let mut out = String::new();
    let features: Vec<&str> = system.features.iter().map(|f| f.name()).collect();
    let _ = writeln!(out, "{} [{} star; {}]", system.name, system.star, features.join(", "));
    if let Some(root) = system.root() {
        for child in system.arena.children(root) {
            render_node(&system.arena, *child, 1, &mut out);
        }
    }
    out
}

fn render_node(arena: &Arena, id: NodeId, depth: usize, out: &mut String) {
    let Some(node) = arena.get(id) else {
        return;
    };
    let indent = "  ".repeat(depth);
    let detail = match &node.kind {
        NodeKind::Planet(planet) => {
            let mut detail = format!(
                "{}, {}, {}",
                planet.size,
                planet.climate.name(),
                planet.habitability
            );
            if let Some(inhabitants) = &planet.inhabitants {
                let _ = write!(detail, ", {} {}", inhabitants.species, inhabitants.development);
            }
            detail
        }
        NodeKind::GasGiant(giant) => giant.class.name().to_string(),
        NodeKind::StarshipGraveyard(graveyard) => format!("{} wrecks", graveyard.wrecks.len()),
        other => match other.resources() {
            Some(resources) if !resources.is_empty() => format!("{} deposits", resources.len()),
            _ => String::new(),
        },
    };
    if detail.is_empty() {
        let _ = writeln!(out, "{indent}{}: {}", node.kind.label(), node.name);
    } else {
        let _ = writeln!(out, "{indent}{}: {} ({detail})", node.kind.label(), node.name);
    }
    for child in arena.children(id) {
        render_node(arena, *child, depth + 1, out);
    }
}
