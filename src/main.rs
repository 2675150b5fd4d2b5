use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use bookshelf::cli::handlers::{self, CommandContext};
use bookshelf::cli::{Cli, Commands};
use bookshelf::config::BookshelfConfig;
use bookshelf::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Init { force } => handlers::handle_init(force),
        Commands::Serve { host, port } => {
            handlers::handle_serve(load_context(config_path)?, host, port)
        }
        Commands::Query { query, variables } => {
            handlers::handle_query(load_context(config_path)?, query, variables)
        }
        Commands::Mutate {
            mutation,
            variables,
        } => handlers::handle_mutate(load_context(config_path)?, mutation, variables),
        Commands::Schema => handlers::handle_schema(load_context(config_path)?),
    }
}

fn load_context(config_path: Option<&Path>) -> Result<CommandContext> {
    let cwd = std::env::current_dir()?;
    let config = BookshelfConfig::load(config_path, &cwd)
        .context("Failed to load bookshelf configuration")?;
    Ok(CommandContext::new(config))
}
