//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use wastesync_types::{ResourceKind, TimeRange};

/// Output format for commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "wastesync")]
#[command(author, version, about = "Offline-first cache for the SmartWaste dashboard", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Treat the remote API as unreachable
    #[arg(long, global = true, env = "WASTESYNC_OFFLINE")]
    pub offline: bool,

    /// Cache database path (overrides config)
    #[arg(long, global = true, env = "WASTESYNC_DB")]
    pub db: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true, env = "WASTESYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output compact JSON (no pretty-printing)
    #[arg(long, global = true)]
    pub compact: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load records, from the remote API or the cache
    Load {
        /// Resource to load (users, routes, containers, sensors, logs, stats)
        kind: ResourceKind,

        /// Time range for dashboard statistics (24h, 7d, 30d, 90d)
        #[arg(short, long)]
        range: Option<TimeRange>,
    },

    /// Create a record from a JSON payload
    Create {
        /// Resource to create
        kind: ResourceKind,

        /// JSON create payload
        #[arg(short, long)]
        data: String,
    },

    /// Update a record from a full JSON record
    Update {
        /// Resource to update
        kind: ResourceKind,

        /// JSON record, including its id
        #[arg(short, long)]
        data: String,
    },

    /// Delete a record by id
    Delete {
        /// Resource to delete from
        kind: ResourceKind,

        /// Record id
        id: i64,
    },

    /// Replace the users assigned to a route
    Assign {
        /// Route id
        route: i64,

        /// User ids to assign (none clears the crew)
        users: Vec<i64>,
    },

    /// Refresh every resource type and report what was served
    Sync,

    /// Inspect the local cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Show or initialize the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum CacheAction {
    /// Show the database location and per-collection record counts
    Info,
    /// List cached records without contacting the remote API
    List {
        /// Resource to list
        kind: ResourceKind,
    },
    /// Remove cached records
    Clear {
        /// Resource to clear (all when omitted)
        kind: Option<ResourceKind>,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the config file path
    Path,
    /// Print the effective configuration
    Show,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
