mod cli;
mod commands;
mod config;
mod format;
mod style;
mod util;

use std::io;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use config::Config;
use util::AppContext;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle completions command early (before tracing init)
    if let Commands::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "wastesync", &mut io::stdout());
        return Ok(());
    }

    // When quiet mode is enabled, suppress info-level logging
    let filter = if cli.quiet {
        EnvFilter::new("warn")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let config = Config::load(Some(&config_path))
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    let ctx = AppContext::resolve(&cli, config);

    match cli.command {
        Commands::Load { kind, range } => commands::cmd_load(kind, range, &ctx).await,
        Commands::Create { kind, data } => commands::cmd_create(kind, &data, &ctx).await,
        Commands::Update { kind, data } => commands::cmd_update(kind, &data, &ctx).await,
        Commands::Delete { kind, id } => commands::cmd_delete(kind, id, &ctx).await,
        Commands::Assign { route, users } => commands::cmd_assign(route, users, &ctx).await,
        Commands::Sync => commands::cmd_sync(&ctx).await,
        Commands::Cache { action } => commands::cmd_cache(action, &ctx),
        Commands::Config { action } => commands::cmd_config(action, &config_path, &ctx),
        Commands::Completions { .. } => Ok(()),
    }
}
