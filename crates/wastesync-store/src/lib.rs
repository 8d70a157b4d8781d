//! Durable local store for the SmartWaste offline cache.
//!
//! This crate provides SQLite-based storage for the dashboard's records,
//! so the last data fetched from the server stays readable without a network
//! connection.
//!
//! # Features
//!
//! - One keyed collection per [`ResourceKind`](wastesync_types::ResourceKind)
//! - Lazy, idempotent initialization; creating the database never drops data
//! - Upsert by record id, point lookups, full scans, delete and clear
//! - A singleton dashboard snapshot under the key `"main"`
//!
//! # Example
//!
//! ```no_run
//! use wastesync_store::Store;
//! use wastesync_types::{Container, ResourceKind};
//!
//! let store = Store::open_default()?;
//!
//! let containers: Vec<Container> = store.get_all(ResourceKind::Container)?;
//! let first: Option<Container> = store.get(ResourceKind::Container, 1)?;
//! # Ok::<(), wastesync_store::Error>(())
//! ```

mod error;
mod models;
mod schema;
mod store;

pub use error::{Error, Result};
pub use models::{CollectionStats, RecordKey};
pub use schema::SCHEMA_VERSION;
pub use store::Store;

/// Default database path following platform conventions.
///
/// - Linux: `~/.local/share/wastesync/cache.db`
/// - macOS: `~/Library/Application Support/wastesync/cache.db`
/// - Windows: `C:\Users\<user>\AppData\Local\wastesync\cache.db`
pub fn default_db_path() -> std::path::PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("wastesync")
        .join("cache.db")
}
