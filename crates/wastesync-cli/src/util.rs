//! Utility functions for CLI operations.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::broadcast::error::RecvError;
use tracing::debug;
use wastesync_core::{ConnectivityMonitor, InMemoryRemote, SyncConfig, SyncCoordinator};
use wastesync_store::Store;

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::format::FormatOptions;

/// The coordinator as wired by the CLI.
pub type Coordinator = SyncCoordinator<InMemoryRemote>;

/// Settings resolved from flags, environment and the config file.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: Config,
    pub db_path: PathBuf,
    pub offline: bool,
    pub quiet: bool,
    pub format: OutputFormat,
    pub opts: FormatOptions,
    pub output: Option<PathBuf>,
}

impl AppContext {
    /// Merge command-line flags over the config file.
    pub fn resolve(cli: &Cli, config: Config) -> Self {
        let no_color = cli.no_color || config.no_color || cli.output.is_some();
        Self {
            db_path: config.resolve_db_path(cli.db.clone()),
            offline: cli.offline || config.offline,
            quiet: cli.quiet,
            format: cli.format,
            opts: FormatOptions::new(no_color).with_compact(cli.compact),
            output: cli.output.clone(),
            config,
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Print a notice on stderr unless quiet or emitting JSON.
    pub fn notice(&self, message: &str) {
        if !self.quiet && !self.is_json() {
            eprintln!("{}", message);
        }
    }

    /// Open the cache database, failing if it cannot be created.
    pub fn open_store(&self) -> Result<Store> {
        Store::open(&self.db_path)
            .with_context(|| format!("Failed to open cache at {}", self.db_path.display()))
    }

    /// Build a coordinator over the in-process remote and the cache.
    ///
    /// The store is opened lazily so that reads still reach the remote API
    /// when the cache is unusable.
    pub fn coordinator(&self) -> Result<Coordinator> {
        debug!(
            "Cache at {}, {}",
            self.db_path.display(),
            if self.offline { "offline" } else { "online" }
        );
        let config = SyncConfig::new().remote_timeout(self.config.remote_timeout());
        let sync = SyncCoordinator::with_config(
            Arc::new(InMemoryRemote::seeded()),
            Arc::new(Store::new(&self.db_path)),
            ConnectivityMonitor::new(Some(!self.offline)),
            config,
        )?;
        log_events(&sync);
        Ok(sync)
    }
}

/// Mirror sync events into the debug log until the coordinator is dropped.
fn log_events(sync: &Coordinator) {
    let mut events = sync.subscribe();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => debug!(?event, "sync event"),
                Err(RecvError::Lagged(missed)) => debug!("Missed {} sync events", missed),
                Err(RecvError::Closed) => break,
            }
        }
    });
}

/// Write output to file or stdout
pub fn write_output(output: Option<&PathBuf>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }
        None => {
            print!("{}", content);
            io::stdout().flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_flags_win_over_config() {
        let cli = Cli::try_parse_from(["wastesync", "--db", "flag.db", "sync"]).unwrap();
        let config = Config {
            offline: true,
            db_path: Some(PathBuf::from("config.db")),
            ..Config::default()
        };
        let ctx = AppContext::resolve(&cli, config);
        assert_eq!(ctx.db_path, PathBuf::from("flag.db"));
        // The config can force offline even without the flag.
        assert!(ctx.offline);
    }

    #[test]
    fn test_file_output_disables_color() {
        let cli = Cli::try_parse_from(["wastesync", "-o", "out.txt", "sync"]).unwrap();
        let ctx = AppContext::resolve(&cli, Config::default());
        assert!(ctx.opts.no_color);
    }

    #[tokio::test]
    async fn test_coordinator_follows_offline_flag() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("cache.db");
        let cli = Cli::try_parse_from([
            "wastesync",
            "--offline",
            "--db",
            db.to_str().unwrap(),
            "sync",
        ])
        .unwrap();
        let ctx = AppContext::resolve(&cli, Config::default());
        let sync = ctx.coordinator().unwrap();
        assert!(!sync.is_online());
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_output(Some(&path), "[]\n").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "[]\n");
    }
}
