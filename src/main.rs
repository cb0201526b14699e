//! Hangman - CLI
//!
//! Console and full-screen hangman, plus an autoplay benchmark.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman::{
    catalog::{Catalog, loader::load_from_file},
    commands::{Console, SimulationConfig, run_classic, run_simulation},
    core::{RandomSource, RngSource},
    interactive::{App, run_tui},
    output::{print_catalog, print_final_statistics, print_simulation_result},
    solver::StrategyType,
};
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman with categories, difficulty levels, hints and scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word catalog file (default: built-in animals, fruits and countries)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Seed for word and hint selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log level used when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Console game (default)
    Classic,

    /// Full-screen TUI game
    Play,

    /// Autoplay every catalog entry and report scores
    Simulate {
        /// Rounds per category and difficulty
        #[arg(short = 'n', long, default_value = "100")]
        rounds: usize,

        /// Strategy: frequency (default), english
        #[arg(short, long, default_value = "frequency")]
        strategy: String,

        /// Let the autoplayer use hints
        #[arg(long)]
        hints: bool,
    },

    /// List the word catalog
    Words,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let catalog = match &cli.words {
        Some(path) => load_from_file(path)?,
        None => Catalog::embedded(),
    };
    debug!(categories = catalog.len(), words = catalog.word_count(), "catalog ready");

    // Default to the console game if no command given
    let command = cli.command.unwrap_or(Commands::Classic);

    match command {
        Commands::Classic => match cli.seed {
            Some(seed) => run_classic_command(&catalog, RngSource::seeded(seed)),
            None => run_classic_command(&catalog, RngSource::thread()),
        },
        Commands::Play => match cli.seed {
            Some(seed) => run_play_command(&catalog, RngSource::seeded(seed)),
            None => run_play_command(&catalog, RngSource::thread()),
        },
        Commands::Simulate {
            rounds,
            strategy,
            hints,
        } => run_simulate_command(&catalog, &strategy, rounds, hints, cli.seed),
        Commands::Words => {
            print_catalog(&mut io::stdout(), &catalog)?;
            Ok(())
        }
    }
}

fn run_classic_command<S: RandomSource>(catalog: &Catalog, mut rng: S) -> Result<()> {
    let mut console = Console::stdio();
    run_classic(catalog, &mut console, &mut rng)?;
    Ok(())
}

fn run_play_command<S: RandomSource>(catalog: &Catalog, rng: S) -> Result<()> {
    let app = App::new(catalog, rng);
    let totals = run_tui(app)?;
    print_final_statistics(&mut io::stdout(), &totals)?;
    Ok(())
}

fn run_simulate_command(
    catalog: &Catalog,
    strategy_name: &str,
    rounds: usize,
    hints: bool,
    seed: Option<u64>,
) -> Result<()> {
    let strategy = StrategyType::from_name(strategy_name);
    let mut config = SimulationConfig::new(rounds, seed.unwrap_or_else(rand::random));
    config.use_hints = hints;
    config.show_progress = true;

    println!(
        "Simulating {rounds} rounds per entry with the {} strategy...",
        strategy.name()
    );
    let result = run_simulation(catalog, strategy, strategy.name(), config);
    print_simulation_result(&mut io::stdout(), &result)?;
    Ok(())
}
