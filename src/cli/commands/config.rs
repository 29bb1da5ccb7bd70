//! `weigh config` command - show configuration

use clap::Subcommand;
use miette::{IntoDiagnostic, Result};

use crate::cli::output::print_structured;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::Config;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the path the configuration is read from
    Path,
}

pub fn run(cmd: ConfigCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ConfigCommands::Show => {
            let config = Config::try_load().into_diagnostic()?;
            let format = match global.format {
                OutputFormat::Json => OutputFormat::Json,
                _ => OutputFormat::Yaml,
            };
            print_structured(&config, format)?;
            Ok(())
        }
        ConfigCommands::Path => {
            match Config::path() {
                Some(path) => println!("{}", path.display()),
                None => eprintln!("No configuration directory available on this platform"),
            }
            Ok(())
        }
    }
}
