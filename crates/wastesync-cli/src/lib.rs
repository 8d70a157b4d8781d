//! Command-line front end for the SmartWaste offline cache.
//!
//! The `wastesync` binary drives the sync coordinator the way the dashboard
//! views would: every read goes through the connectivity-aware read policy,
//! every write through the write policy, and the local cache can be
//! inspected directly.
//!
//! The remote API is the in-process seeded repository, so each invocation
//! starts from the reference dataset; only the local cache persists between
//! runs.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `load <kind>` | Load records (or `stats` with `--range`), falling back to the cache |
//! | `create <kind> --data` | Create a record; offline it is stored locally and flagged pending |
//! | `update <kind> --data` | Update a record (online only) |
//! | `delete <kind> <id>` | Delete a record (online only) |
//! | `assign <route> <users..>` | Replace a route's assigned users (online only) |
//! | `sync` | Refresh every collection and report the source of each |
//! | `cache info\|list\|clear` | Inspect the local database |
//! | `config path\|show\|init` | Manage the configuration file |
//! | `completions` | Generate shell completions |
//!
//! # Configuration
//!
//! The CLI reads `~/.config/wastesync/config.toml` (or platform equivalent):
//!
//! - `offline`: start with the remote API treated as unreachable
//! - `db_path`: cache database location
//! - `remote_timeout_secs`: bound on every remote call
//! - `default_range`: dashboard range when `--range` is omitted
//! - `no_color`: disable colored output
//!
//! # Environment Variables
//!
//! - `WASTESYNC_OFFLINE`, `WASTESYNC_DB`, `WASTESYNC_CONFIG`: same as the flags
//! - `NO_COLOR`: disable colored output when set
//! - `RUST_LOG`: log filter when neither `-v` nor `-q` is given
//!
//! # Examples
//!
//! ```bash
//! wastesync load containers
//! wastesync --offline load containers
//! wastesync --offline create logs --data '{"date":"2024-03-16T08:00:00Z","routeId":1,"containerIds":[1,4],"status":"pendiente","collectorName":"Raul Perez"}'
//! wastesync load stats --range 30d --format json
//! ```

// Re-export core dependencies for convenience
pub use wastesync_core;
pub use wastesync_types;
