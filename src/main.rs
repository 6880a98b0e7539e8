use anyhow::{Context, Result};
use clap::Parser;

use gqlmock::cli::handlers::{
    CommandContext, handle_demo, handle_mutate, handle_query, handle_schema,
};
use gqlmock::cli::{Cli, Commands};
use gqlmock::config::GqlMockConfig;
use gqlmock::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let config = GqlMockConfig::load(&cwd, cli.config.as_deref())
        .context("Failed to load gqlmock configuration")?;

    logging::init(
        cli.verbose || config.logging.verbose,
        cli.log_file.or_else(|| config.logging.file.clone()),
    );

    let ctx = CommandContext::new(config);

    match cli.command.unwrap_or(Commands::Demo { all: false }) {
        Commands::Demo { all } => handle_demo(ctx, all),
        Commands::Query {
            query,
            variables,
            context,
        } => handle_query(ctx, query, variables, context),
        Commands::Mutate {
            mutation,
            variables,
            context,
        } => handle_mutate(ctx, mutation, variables, context),
        Commands::Schema => handle_schema(ctx),
    }
}
