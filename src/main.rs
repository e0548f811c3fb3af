//! Life Analyzer CLI - Run simulations from JSON configuration.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use life_analyzer::{
    compute::{AnalyticsReport, CellType, Environment, next_generation, par_next_generation},
    schema::{SeedSpec, SimulationConfig, load_seed},
};

/// Grids at most this wide are printed after the run.
const MAX_PRINT_WIDTH: usize = 120;

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let mut args: Vec<String> = std::env::args().collect();
    let parallel = take_flag(&mut args, "--parallel");

    if args.get(1).is_some_and(|a| a == "--example") {
        print_example_config();
        return;
    }

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [generations] [--parallel]", args[0]);
        eprintln!();
        eprintln!("Run a cellular automaton simulation from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to simulation configuration file");
        eprintln!("  generations  Number of generations to compute (default: 100)");
        eprintln!("  --parallel   Compute rows of each generation in parallel");
        eprintln!();
        eprintln!("Example configuration is printed with the --example flag.");
        std::process::exit(1);
    }

    let config_path = PathBuf::from(&args[1]);
    let generations: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);

    let config = SimulationConfig::load(&config_path).unwrap_or_else(|e| {
        eprintln!("Error loading config: {}", e);
        std::process::exit(1);
    });

    // Load or create seed
    let seed_path = config_path.with_extension("seed.json");
    let seed_spec = if seed_path.exists() {
        load_seed(&seed_path).unwrap_or_else(|e| {
            eprintln!("Error loading seed: {}", e);
            std::process::exit(1);
        })
    } else {
        SeedSpec::default()
    };
    if let Err(e) = config.validate_seed(&seed_spec) {
        eprintln!("Error placing seed: {}", e);
        std::process::exit(1);
    }

    let mut env = config.build_environment().unwrap_or_else(|e| {
        eprintln!("Error creating environment: {}", e);
        std::process::exit(1);
    });
    let (seed, origin) = seed_spec.resolve(config.width, config.height);
    seed.place(&mut env, origin);

    log::info!(
        "Running {} for {} generations on {}x{}",
        config.cell_type,
        generations,
        config.width,
        config.height
    );

    println!("Life Analyzer");
    println!("=============");
    println!("Grid: {}x{}", config.width, config.height);
    println!("Cell type: {}", config.cell_type);
    println!("Initial cells: {}", env.analytics().initial_cells());
    println!("Generations: {}", generations);
    println!();

    let step: fn(&mut Environment, CellType) = if parallel {
        par_next_generation
    } else {
        next_generation
    };

    println!("Running simulation...");
    let start = Instant::now();

    for i in 0..generations {
        step(&mut env, config.cell_type);

        // Print progress every 10%
        if (i + 1) % (generations / 10).max(1) == 0 {
            println!(
                "  Generation {}/{}: cells={}, alive={:.3}%, growth={:.1}%{}",
                i + 1,
                generations,
                env.analytics().total_cells(),
                env.percent_alive(),
                env.growth(),
                format_rate(i + 1, start.elapsed())
            );
        }
    }

    let elapsed = start.elapsed();

    println!();
    println!(
        "{}",
        AnalyticsReport::new(env.analytics(), env.area(), config.cell_type)
    );
    println!(
        "Time: {:.2}s{}",
        elapsed.as_secs_f32(),
        format_rate(generations, elapsed)
    );

    if env.width() <= MAX_PRINT_WIDTH {
        println!();
        println!("{}", env);
    }
}

/// Generations per second, or `None` when nothing was timed.
fn generation_rate(generations: u64, elapsed: Duration) -> Option<f32> {
    let secs = elapsed.as_secs_f32();
    (generations > 0 && secs > 0.0).then(|| generations as f32 / secs)
}

fn format_rate(generations: u64, elapsed: Duration) -> String {
    generation_rate(generations, elapsed)
        .map(|rate| format!(" ({rate:.1} gen/s)"))
        .unwrap_or_default()
}

fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    let before = args.len();
    args.retain(|a| a != flag);
    args.len() != before
}

fn print_example_config() {
    let config = SimulationConfig::default();
    let seed = SeedSpec::default();

    println!("// config.json");
    println!(
        "{}",
        serde_json::to_string_pretty(&config).expect("config serializes")
    );
    println!();
    println!("// config.seed.json");
    println!(
        "{}",
        serde_json::to_string_pretty(&seed).expect("seed serializes")
    );
}
