//! Offline-first sync layer for the SmartWaste dashboard.
//!
//! This crate decides where every read and write of dashboard data goes:
//! to the remote API when it is reachable, to the local [`Store`] cache when
//! it is not, or to both.
//!
//! # Features
//!
//! - **Connectivity tracking**: [`ConnectivityMonitor`] holds the online flag and notifies subscribers
//! - **Cached reads**: Online loads are written through; failed or offline loads serve the cache
//! - **Offline creates**: Records are built locally with a fresh id and their relations joined
//! - **Dashboard snapshot**: The last statistics are kept and served for the same time range
//! - **Events**: [`SyncEvent`]s report degraded reads, pending writes and cache failures
//! - **In-memory remote**: [`InMemoryRemote`] stands in for the backend in tests and demos
//!
//! # Components
//!
//! | Component | Role |
//! |-----------|------|
//! | [`ConnectivityMonitor`] | Current online state and transitions |
//! | [`Store`] | Durable keyed collections (from `wastesync-store`) |
//! | [`SyncCoordinator`] | Read/write policy over the two |
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use wastesync_core::{ConnectivityMonitor, InMemoryRemote, SyncCoordinator};
//! use wastesync_store::Store;
//! use wastesync_types::{ActivityStatus, Container, NewContainer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(Store::open_in_memory()?);
//!     let monitor = ConnectivityMonitor::offline();
//!     let sync = SyncCoordinator::new(Arc::new(InMemoryRemote::seeded()), store, monitor);
//!
//!     let draft = NewContainer {
//!         location: "Calle 5 de Mayo".to_string(),
//!         capacity: 800,
//!         description: String::new(),
//!         status: ActivityStatus::Active,
//!         route_id: None,
//!     };
//!     let created = sync.create::<Container>(draft).await?;
//!     assert!(created.pending_sync);
//!     assert!(sync.pending_sync());
//!     Ok(())
//! }
//! ```
//!
//! [`Store`]: wastesync_store::Store

pub mod config;
pub mod connectivity;
pub mod coordinator;
pub mod error;
pub mod events;
pub mod ids;
pub mod mock;
pub mod relations;
pub mod remote;

pub use config::SyncConfig;
pub use connectivity::ConnectivityMonitor;
pub use coordinator::{
    LoadOutcome, LoadSummary, RefreshEntry, SnapshotOutcome, SyncCoordinator, WriteOutcome,
};
pub use error::{Error, Result};
pub use events::{EventDispatcher, EventReceiver, EventSender, SyncEvent};
pub use ids::{IdAllocator, TimestampIdAllocator};
pub use mock::InMemoryRemote;
pub use relations::{Materialize, RelationLookup};
pub use remote::{
    DashboardSource, RemoteApi, RemoteError, RemoteRepository, RemoteResult, RouteAssignment,
};

// Re-export the record and store crates so front ends can depend on core alone.
pub use wastesync_store as store;
pub use wastesync_types as types;
