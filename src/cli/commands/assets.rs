//! `weigh assets` command - offline app-shell cache

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::PathBuf;

use crate::cli::output::{effective_format, print_structured};
use crate::cli::GlobalOpts;
use crate::core::assets::{AssetCache, AssetError, CacheStorage, DirFetcher};
use crate::core::Config;

#[derive(Subcommand, Debug)]
pub enum AssetsCommands {
    /// Show the cache name and precached files
    List,

    /// Verify a build directory serves every precached file
    Check(CheckDirArgs),
}

#[derive(clap::Args, Debug)]
pub struct CheckDirArgs {
    /// Directory the app is served from
    pub dir: PathBuf,
}

pub fn run(cmd: AssetsCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        AssetsCommands::List => run_list(global),
        AssetsCommands::Check(args) => run_check(args),
    }
}

fn run_list(global: &GlobalOpts) -> Result<()> {
    let config = Config::load().into_diagnostic()?;
    let format = effective_format(global.format, config.format);
    if print_structured(&config.cache, format)? {
        return Ok(());
    }

    println!("{}: {}", style("Cache").bold(), style(&config.cache.name).cyan());
    for url in &config.cache.precache {
        println!("  {}", url);
    }
    Ok(())
}

fn run_check(args: CheckDirArgs) -> Result<()> {
    if !args.dir.is_dir() {
        return Err(miette::miette!(
            "Not a directory: {}",
            args.dir.display()
        ));
    }

    let config = Config::load().into_diagnostic()?;
    let cache = AssetCache::new(config.cache);
    let fetcher = DirFetcher::new(&args.dir);
    let mut storage = CacheStorage::new();

    match cache.install(&mut storage, &fetcher) {
        Ok(count) => {
            println!(
                "{} All {} app-shell files present for {}",
                style("✓").green(),
                count,
                style(&cache.manifest().name).cyan()
            );
            Ok(())
        }
        Err(AssetError::Install { urls }) => {
            for url in &urls {
                eprintln!(
                    "{} missing: {} ({})",
                    style("✗").red(),
                    url,
                    fetcher.resolve(url).display()
                );
            }
            Err(miette::miette!(
                "{} of {} precached files missing from {}",
                urls.len(),
                cache.manifest().precache.len(),
                args.dir.display()
            ))
        }
        Err(e) => Err(e).into_diagnostic(),
    }
}
