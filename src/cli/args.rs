//! Command-line argument definitions

use clap::{Parser, Subcommand};

use crate::cli::commands::assets::AssetsCommands;
use crate::cli::commands::calc::CalcArgs;
use crate::cli::commands::check::CheckArgs;
use crate::cli::commands::completions::CompletionsArgs;
use crate::cli::commands::config::ConfigCommands;
use crate::cli::commands::form::FormArgs;

pub use crate::core::format::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "weigh")]
#[command(version)]
#[command(about = "Weighing tolerance calculator - compute the ±2% acceptable range and check measured weights")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the tolerance range and check an actual weight
    Check(CheckArgs),

    /// Add or subtract two numbers without floating-point noise
    Calc(CalcArgs),

    /// Fill in the weighing form interactively (or line by line from stdin)
    Form(FormArgs),

    /// Inspect and verify the offline app-shell cache
    #[command(subcommand)]
    Assets(AssetsCommands),

    /// Show configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
