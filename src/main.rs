//! Terra Strategica - headless runner
//!
//! Starts a game from the menu, advances ticks until the budget runs out or
//! the game ends, and prints a summary.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use terra_strategica::core::config::GameConfig;
use terra_strategica::core::error::Result;
use terra_strategica::simulation::run_ticks;
use terra_strategica::world::GameState;

/// Run a headless Terra Strategica game
#[derive(Parser, Debug)]
#[command(name = "terra-strategica")]
#[command(about = "Simulate a territorial strategy game without a UI")]
struct Args {
    /// Random seed for world generation and AI decisions
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Maximum ticks to simulate
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// TOML file overriding balance constants
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the summary as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log filter directive, overriding RUST_LOG
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = match &args.log_level {
        Some(level) => EnvFilter::new(format!("terra_strategica={level}")),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("terra_strategica=info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    tracing::info!(seed = args.seed, ticks = args.ticks, "Terra Strategica starting...");

    let game = GameState::menu(Arc::new(config)).start_game(args.seed);
    let finished = run_ticks(&game, args.ticks);
    let summary = finished.summary();

    if args.json {
        println!("{}", summary.to_json()?);
    } else {
        print!("{summary}");
    }
    Ok(())
}
