//! Numbered menu loop.
//!
//! Reads choices line by line from any `BufRead` and writes prompts and
//! results to any `Write`, so the same loop drives a terminal or a pipe.
//! End of input exits the loop the same way as choosing `0`.

use std::io::{self, BufRead, Write};

use sift_core::Strategy;
use tracing::debug;

use crate::format::format_error;
use crate::state::SessionState;

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    FindRecord,
    PrintAllRecords,
    Exit,
}

impl MenuOption {
    /// Menu order.
    pub const ALL: [MenuOption; 3] = [
        MenuOption::FindRecord,
        MenuOption::PrintAllRecords,
        MenuOption::Exit,
    ];

    /// Number typed to select this option.
    pub fn code(self) -> u32 {
        match self {
            MenuOption::FindRecord => 1,
            MenuOption::PrintAllRecords => 2,
            MenuOption::Exit => 0,
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            MenuOption::FindRecord => "Find a record",
            MenuOption::PrintAllRecords => "Print all records",
            MenuOption::Exit => "Exit",
        }
    }

    /// Parse a menu choice; `None` for anything that is not a listed code.
    pub fn parse(input: &str) -> Option<MenuOption> {
        let code: u32 = input.trim().parse().ok()?;
        MenuOption::ALL.into_iter().find(|opt| opt.code() == code)
    }
}

/// Render the menu block.
pub fn menu_text() -> String {
    let mut out = "=== Menu ===".to_string();
    for opt in MenuOption::ALL {
        out.push_str(&format!("\n{}. {}", opt.code(), opt.label()));
    }
    out
}

/// Strategy prompt listing every variant.
fn strategy_prompt() -> String {
    let names: Vec<&str> = Strategy::VARIANTS.iter().map(|s| s.name()).collect();
    format!("Select a matching strategy: {}", names.join(", "))
}

/// Read one line without its terminator. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Run the menu until the user exits or input ends.
pub fn run_menu<R: BufRead, W: Write>(
    state: &SessionState,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    loop {
        writeln!(output)?;
        writeln!(output, "{}", menu_text())?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            debug!("Input closed, leaving menu");
            return Ok(());
        };
        writeln!(output)?;

        match MenuOption::parse(&line) {
            Some(MenuOption::FindRecord) => {
                if !find_record(state, &mut input, &mut output)? {
                    return Ok(());
                }
            }
            Some(MenuOption::PrintAllRecords) => {
                writeln!(output, "{}", state.list_records())?;
            }
            Some(MenuOption::Exit) => {
                writeln!(output, "Bye!")?;
                return Ok(());
            }
            None => {
                writeln!(output, "Incorrect option! Try again.")?;
            }
        }
    }
}

/// Prompt for a strategy and a query, then print the matches.
///
/// Returns `false` when input ended mid-dialog.
fn find_record<R: BufRead, W: Write>(
    state: &SessionState,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    writeln!(output, "{}", strategy_prompt())?;
    output.flush()?;
    let Some(line) = read_line(input)? else {
        return Ok(false);
    };

    let strategy: Strategy = match line.parse() {
        Ok(strategy) => strategy,
        Err(e) => {
            writeln!(output, "{}", format_error(&e, state.mode()))?;
            return Ok(true);
        }
    };

    writeln!(output)?;
    writeln!(output, "Enter the query:")?;
    output.flush()?;
    let Some(query) = read_line(input)? else {
        return Ok(false);
    };

    writeln!(output, "{}", state.search_and_format(&query, strategy))?;
    writeln!(output)?;
    Ok(true)
}
