//! Stash CLI - repository management against a Stash server

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use stashifier::rest::RestError;
use stashifier::util::diagnostic;

fn main() {
    let cli = Cli::parse();
    let color = !cli.globals.no_color;

    if let Err(e) = run(cli) {
        match e.downcast_ref::<RestError>() {
            Some(rest_error) => diagnostic::emit(&rest_error.to_diagnostic(), color),
            None => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Set up logging
    let filter = if cli.globals.verbose {
        EnvFilter::new("stashifier=debug,stash=debug")
    } else {
        EnvFilter::new("stashifier=info,stash=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // Execute command
    match cli.command {
        Commands::Create(args) => commands::create::execute(args, &cli.globals),
        Commands::Delete(args) => commands::delete::execute(args, &cli.globals),
        Commands::Repos(args) => commands::repos::execute(args, &cli.globals),
        Commands::Prs(args) => commands::prs::execute(args, &cli.globals),
        Commands::Permissions(args) => commands::permissions::execute(args, &cli.globals),
        Commands::Info(args) => commands::info::execute(args),
        Commands::Metadata(args) => commands::metadata::execute(args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
