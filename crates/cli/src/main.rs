//! Sift CLI: boolean keyword search over a data file.
//!
//! Two modes:
//! - **One-shot mode**: `sift --data FILE --query TERMS [--strategy S]`: run, print, exit
//! - **Menu mode**: `sift --data FILE`: numbered menu over stdin

mod commands;
mod format;
mod menu;
mod state;

use std::io;
use std::process;

use anyhow::{anyhow, Context};
use sift_core::{AllSeed, SearchOptions, Strategy};
use sift_search::Corpus;
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::OutputMode;
use state::SessionState;

fn main() {
    init_tracing();

    let matches = build_cli().get_matches();
    if let Err(e) = run(&matches) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default: warn).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Map command-line flags to search options, output mode and one-shot strategy.
///
/// The strategy defaults to ANY when `--strategy` is absent.
fn options_from(
    matches: &clap::ArgMatches,
) -> anyhow::Result<(SearchOptions, OutputMode, Strategy)> {
    let mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let options = SearchOptions::new().with_all_seed(if matches.get_flag("legacy-all") {
        AllSeed::Empty
    } else {
        AllSeed::Universe
    });

    let strategy = match matches.get_one::<String>("strategy") {
        Some(name) => name.parse::<Strategy>()?,
        None => Strategy::Any,
    };

    Ok((options, mode, strategy))
}

fn run(matches: &clap::ArgMatches) -> anyhow::Result<()> {
    let (options, mode, strategy) = options_from(matches)?;

    let path = matches
        .get_one::<String>("data")
        .ok_or_else(|| anyhow!("--data is required"))?;
    let corpus = Corpus::load(path, options)
        .with_context(|| format!("Failed to load data file {}", path))?;
    let state = SessionState::new(corpus, mode);

    if let Some(query) = matches.get_one::<String>("query") {
        println!("{}", one_shot(&state, query, strategy)?);
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run_menu(&state, stdin.lock(), stdout.lock()).context("Menu I/O failed")?;
    Ok(())
}

/// Run a single query and format the result.
fn one_shot(state: &SessionState, query: &str, strategy: Strategy) -> anyhow::Result<String> {
    let result = state.search(query, strategy)?;
    Ok(format::format_result(&result, state.mode()))
}
