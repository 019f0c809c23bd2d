//! Game of Life CLI - Run simulations from JSON configuration.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::path::{Path, PathBuf};
use std::time::Instant;

use game_of_life::{
    compute::{GenerationStats, History},
    schema::{ConfigError, Seed, SimulationConfig},
};

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--example" {
        print_example_config();
        return;
    }

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [generations]", args[0]);
        eprintln!();
        eprintln!("Run a Game of Life simulation from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to simulation configuration file");
        eprintln!("  generations  Number of generations (default: from config)");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    let config_path = PathBuf::from(&args[1]);
    if let Err(e) = run(&config_path, args.get(2).map(String::as_str)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config_path: &Path, generations_arg: Option<&str>) -> Result<(), ConfigError> {
    let config = SimulationConfig::from_json_file(config_path)?;
    let generations = match generations_arg.map(str::parse::<u64>) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::warn!(
                "Ignoring generations argument ({}), using {} from config",
                e,
                config.generations
            );
            config.generations
        }
        None => config.generations,
    };

    // Load or create seed
    let seed_path = config_path.with_extension("seed.json");
    let seed = if seed_path.exists() {
        Seed::from_json_file(&seed_path)?
    } else {
        log::info!("No seed at {}, using default", seed_path.display());
        Seed::default()
    };

    println!("Game of Life Simulation");
    println!("=======================");
    println!("Grid: {}x{}", config.rows, config.columns);
    println!("Live count policy: {:?}", config.live_count);
    println!("Generations: {}", generations);
    println!();

    let mut history = History::from_seed(&seed, &config)?;
    let initial = GenerationStats::initial(history.latest());

    println!("Initial state:");
    println!("  Live cells: {}", initial.live_cells);
    println!();

    println!("Running simulation...");
    let start = Instant::now();
    let mut stable_at = None;

    for i in 0..generations {
        let stats = history.advance();
        if stable_at.is_none() && history.is_stable() {
            log::info!("Grid stable at generation {}", stats.generation);
            stable_at = Some(stats.generation);
        }

        // Print progress every 10%
        if (i + 1) % (generations / 10).max(1) == 0 {
            let elapsed = start.elapsed().as_secs_f32();
            println!(
                "  Generation {}/{}: live={}, born={}, died={}, {:.1} gen/s",
                stats.generation,
                generations,
                stats.live_cells,
                stats.births,
                stats.deaths,
                (i + 1) as f32 / elapsed
            );
        }
    }

    let elapsed = start.elapsed();
    let latest = history.latest();

    println!();
    println!("Final state:");
    println!("  Generation: {}", history.current_generation());
    println!("  Live cells: {}", latest.live_cells());
    match stable_at {
        Some(generation) => println!("  Stable since generation {}", generation),
        None => println!("  Not stable"),
    }
    println!();
    println!(
        "Time: {:.2}s ({:.1} gen/s)",
        elapsed.as_secs_f32(),
        generations as f32 / elapsed.as_secs_f32()
    );
    Ok(())
}

fn print_example_config() {
    let config = SimulationConfig::default();
    let seed = Seed::default();

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing config: {}", e),
    }
    println!();
    println!("Example seed (config.seed.json):");
    match serde_json::to_string_pretty(&seed) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing seed: {}", e),
    }
}
