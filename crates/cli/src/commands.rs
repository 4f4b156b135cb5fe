//! Clap command definition.

use clap::{Arg, ArgAction, Command};

/// Build the CLI command.
pub fn build_cli() -> Command {
    Command::new("sift")
        .about("Boolean keyword search over a line-oriented data file")
        .arg(
            Arg::new("data")
                .long("data")
                .value_name("FILE")
                .help("Data file to load, one record per line")
                .required(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("legacy-all")
                .long("legacy-all")
                .help("Seed ALL with the empty set (legacy behavior: ALL never matches)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("query")
                .long("query")
                .value_name("TERMS")
                .help("Run a single query and exit instead of starting the menu"),
        )
        .arg(
            Arg::new("strategy")
                .long("strategy")
                .value_name("STRATEGY")
                .help("Matching strategy for --query: ALL, ANY or NONE (default: ANY)")
                .requires("query"),
        )
}
