use clap::Parser;
use miette::Result;
use weigh::cli::helpers::log_level;
use weigh::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.global.verbose, cli.global.quiet))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let global = cli.global;
    match cli.command {
        Commands::Check(args) => weigh::cli::commands::check::run(args, &global),
        Commands::Calc(args) => weigh::cli::commands::calc::run(args, &global),
        Commands::Form(args) => weigh::cli::commands::form::run(args, &global),
        Commands::Assets(cmd) => weigh::cli::commands::assets::run(cmd, &global),
        Commands::Config(cmd) => weigh::cli::commands::config::run(cmd, &global),
        Commands::Completions(args) => weigh::cli::commands::completions::run(args),
    }
}
