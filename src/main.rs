// ABOUTME: Entry point for the dockery CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use commands::lifecycle;
use dockery::config::Config;
use dockery::error::Result;
use dockery::output::Output;
use dockery::status::ActionKind;
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let result = run(cli).await;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::discover(&env::current_dir()?)?,
    };
    let output = Output::new(cli.output.into());

    match cli.command {
        Commands::List => commands::list(config, output).await,
        Commands::Inspect { name } => commands::inspect(config, &name, output).await,
        Commands::Watch { container } => commands::watch(config, container, output).await,
        Commands::Info => commands::info(config, output).await,
        Commands::Start { name } => lifecycle(config, ActionKind::Start, &name, output).await,
        Commands::Stop { name } => lifecycle(config, ActionKind::Stop, &name, output).await,
        Commands::Pause { name } => lifecycle(config, ActionKind::Pause, &name, output).await,
        Commands::Resume { name } => lifecycle(config, ActionKind::Resume, &name, output).await,
        Commands::Restart { name } => lifecycle(config, ActionKind::Restart, &name, output).await,
        Commands::Kill { name } => lifecycle(config, ActionKind::Kill, &name, output).await,
        Commands::Remove { name } => lifecycle(config, ActionKind::Remove, &name, output).await,
    }
}
