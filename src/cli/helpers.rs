//! Shared helper functions for CLI commands

use console::{style, StyledObject};
use std::io::{self, IsTerminal};
use tabled::settings::Style;
use tabled::{Table, Tabled};
use tracing::Level;

use crate::core::tolerance::{WeighingResult, WeighingStatus};
use crate::core::unit::Unit;

/// Check if stdin has piped input available
///
/// Returns `true` if stdin is not a terminal (i.e., data is being piped in).
pub fn stdin_has_data() -> bool {
    !io::stdin().is_terminal()
}

/// Map `-v`/`-q` flags to a log level
///
/// Warnings are shown by default.
pub fn log_level(verbose: u8, quiet: bool) -> Level {
    if quiet {
        return Level::ERROR;
    }
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Status text colored by outcome
pub fn styled_status(status: WeighingStatus) -> StyledObject<&'static str> {
    let label = style(status.label());
    match status {
        WeighingStatus::Pass => label.green().bold(),
        WeighingStatus::Fail => label.red().bold(),
        WeighingStatus::AwaitingInput => label.yellow(),
        WeighingStatus::Empty => label.dim(),
    }
}

#[derive(Tabled)]
struct ResultRow {
    #[tabled(rename = "FIELD")]
    field: &'static str,
    #[tabled(rename = "VALUE")]
    value: String,
}

/// Render a result as a two-column table (status excluded)
pub fn result_table(result: &WeighingResult, unit: Unit) -> String {
    let rows = vec![
        ResultRow {
            field: "Total theoretical weight",
            value: format!("{} {}", result.total_display(), unit),
        },
        ResultRow {
            field: "Acceptable range",
            value: format!("{} {}", result.range_display(), unit),
        },
    ];
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Print a result table followed by its status line
pub fn print_result(result: &WeighingResult, unit: Unit) {
    println!("{}", result_table(result, unit));
    println!("{}: {}", style("Status").bold(), styled_status(result.status));
}
