//! Word Guess - CLI
//!
//! Guess a hidden word from its description, a few revealed letters and some
//! associated words. Play in a TUI, a plain prompt, over JSON lines, or let an
//! automated player run many games at once.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;
use word_guess::{
    commands::{SimulationConfig, run_serve, run_simple, run_simulation},
    core::{GameConfig, config::DEFAULT_WORD_LENGTH},
    engine::SessionTable,
    output::print_simulation_result,
    solver::StrategyType,
    wordlists::{AssociationTable, WordCatalog, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "word_guess",
    about = "Guess the hidden word from its description, letter hints and associations",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for word choice, hints and simulated players (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Attempts per game
    #[arg(short, long, global = true)]
    attempts: Option<u32>,

    /// Catalog file with `word|category|description` lines (default: built-in)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Most letters revealed per hint (two always stay hidden)
    #[arg(long, global = true)]
    letter_hints: Option<usize>,

    /// Automated player strategy for simulate: consistent (default), random
    #[arg(short, long, global = true, default_value = "consistent")]
    strategy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple prompt mode (no TUI)
    Simple {
        /// Word length of the first game
        #[arg(short, long, default_value_t = DEFAULT_WORD_LENGTH)]
        length: usize,
    },

    /// Answer JSON-line requests on stdin
    Serve,

    /// Let an automated player run many games in parallel
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Only play words of this length (default: every length in turn)
        #[arg(short, long)]
        length: Option<usize>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let catalog = load_catalog(cli.catalog.as_deref())?;
    let associations = AssociationTable::embedded();
    info!(
        words = catalog.len(),
        associations = associations.len(),
        "word lists ready"
    );

    let mut config = GameConfig::default();
    if let Some(attempts) = cli.attempts {
        config = config.with_starting_attempts(attempts);
    }
    if let Some(hints) = cli.letter_hints {
        config = config.with_max_letter_hints(hints);
    }

    let table = match cli.seed {
        Some(seed) => SessionTable::seeded(&catalog, &associations, config, seed),
        None => SessionTable::new(&catalog, &associations, config),
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&table),
        Commands::Simple { length } => run_simple(&table, length),
        Commands::Serve => run_serve_command(&table),
        Commands::Simulate { count, length } => {
            run_simulate_command(&table, &cli.strategy, count, length, cli.seed)
        }
    }
}

/// Built-in catalog, or the one at `path`
fn load_catalog(path: Option<&Path>) -> Result<WordCatalog> {
    let Some(path) = path else {
        return Ok(WordCatalog::embedded());
    };

    let catalog = load_from_file(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    anyhow::ensure!(
        !catalog.is_empty(),
        "catalog {} contains no valid words",
        path.display()
    );
    Ok(catalog)
}

fn run_play_command(table: &SessionTable) -> Result<()> {
    use word_guess::interactive::{App, run_tui};

    let app = App::new(table, DEFAULT_WORD_LENGTH);
    run_tui(app)
}

fn run_serve_command(table: &SessionTable) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stats = run_serve(table, stdin.lock(), stdout.lock())?;
    info!(
        requests = stats.requests,
        errors = stats.errors,
        "serve finished"
    );
    Ok(())
}

fn run_simulate_command(
    table: &SessionTable,
    strategy_name: &str,
    count: usize,
    length: Option<usize>,
    seed: Option<u64>,
) -> Result<()> {
    let strategy = StrategyType::from_name(strategy_name);

    match length {
        Some(length) => println!("Simulating {count} games of {length}-letter words..."),
        None => println!("Simulating {count} games across all word lengths..."),
    }

    let config = SimulationConfig {
        length,
        seed,
        ..SimulationConfig::new(count)
    };
    let result = run_simulation(table, &strategy, &config)?;
    print_simulation_result(&result, strategy.name());
    Ok(())
}
