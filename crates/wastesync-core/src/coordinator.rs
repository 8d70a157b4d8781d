//! Connectivity-aware read and write policy over the remote API and the local store.
//!
//! [`SyncCoordinator`] decides, per operation, whether to call the remote
//! API and mirror the result into the [`Store`], or to work from the store
//! alone. It keeps no state between operations apart from the session-wide
//! pending-sync flag.
//!
//! # Reads
//!
//! Online, the remote list is returned and written through to the cache. If
//! the remote call fails, or the monitor reports offline, the cached records
//! are served with `degraded = true`. An empty or unreadable cache is
//! [`Error::NoDataAvailable`].
//!
//! # Writes
//!
//! Online, the write goes to the remote API and its result is merged into the
//! cache; a remote failure is returned as is. Offline, a create is built
//! locally with a fresh id and joined details, stored, and flagged as pending.
//! Update and delete are not available offline.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use wastesync_store::Store;
use wastesync_types::{
    CollectionLog, Container, DashboardSnapshot, Resource, ResourceKind, Route, Sensor, TimeRange,
    User,
};

use crate::config::SyncConfig;
use crate::connectivity::ConnectivityMonitor;
use crate::error::{Error, Result};
use crate::events::{EventDispatcher, EventReceiver, SyncEvent};
use crate::ids::{IdAllocator, TimestampIdAllocator};
use crate::relations::Materialize;
use crate::remote::{RemoteApi, RemoteRepository, RemoteResult};

/// Records returned by a load.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome<R> {
    pub records: Vec<R>,
    /// `true` when the records came from the local cache.
    pub degraded: bool,
}

/// Dashboard statistics returned by a load.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotOutcome {
    pub snapshot: DashboardSnapshot,
    /// `true` when the snapshot came from the local cache.
    pub degraded: bool,
}

/// Result of an accepted write.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteOutcome<R> {
    pub record: R,
    /// `true` when the write was only applied locally.
    pub pending_sync: bool,
}

/// Per-type summary of a successful load in [`SyncCoordinator::refresh_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub records: usize,
    pub degraded: bool,
}

/// Outcome of refreshing one resource type.
#[derive(Debug)]
pub struct RefreshEntry {
    pub kind: ResourceKind,
    pub result: Result<LoadSummary>,
}

impl<R> From<&LoadOutcome<R>> for LoadSummary {
    fn from(outcome: &LoadOutcome<R>) -> Self {
        Self {
            records: outcome.records.len(),
            degraded: outcome.degraded,
        }
    }
}

/// Read/write policy for every resource type.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use wastesync_core::{ConnectivityMonitor, InMemoryRemote, SyncCoordinator};
/// use wastesync_store::Store;
/// use wastesync_types::Container;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = Arc::new(Store::open_in_memory()?);
///     let monitor = ConnectivityMonitor::online();
///     let sync = SyncCoordinator::new(Arc::new(InMemoryRemote::seeded()), store, monitor.clone());
///
///     // Online: fetched from the remote API and cached.
///     let online = sync.load::<Container>().await?;
///     assert!(!online.degraded);
///
///     // Offline: served from the cache.
///     monitor.set_online(false);
///     let cached = sync.load::<Container>().await?;
///     assert!(cached.degraded);
///     assert_eq!(cached.records.len(), online.records.len());
///     Ok(())
/// }
/// ```
pub struct SyncCoordinator<A> {
    remote: Arc<A>,
    store: Arc<Store>,
    connectivity: ConnectivityMonitor,
    ids: Arc<dyn IdAllocator>,
    events: EventDispatcher,
    config: SyncConfig,
    pending_sync: AtomicBool,
}

impl<A> fmt::Debug for SyncCoordinator<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncCoordinator")
            .field("store", &self.store)
            .field("online", &self.connectivity.is_online())
            .field("pending_sync", &self.pending_sync.load(Ordering::Relaxed))
            .field("config", &self.config)
            .finish()
    }
}

impl<A: RemoteApi> SyncCoordinator<A> {
    /// Create a coordinator with default options.
    pub fn new(remote: Arc<A>, store: Arc<Store>, connectivity: ConnectivityMonitor) -> Self {
        let config = SyncConfig::default();
        Self {
            remote,
            store,
            connectivity,
            ids: Arc::new(TimestampIdAllocator::new()),
            events: EventDispatcher::new(config.event_capacity),
            config,
            pending_sync: AtomicBool::new(false),
        }
    }

    /// Create a coordinator with custom options.
    pub fn with_config(
        remote: Arc<A>,
        store: Arc<Store>,
        connectivity: ConnectivityMonitor,
        config: SyncConfig,
    ) -> Result<Self> {
        config.validate()?;
        let mut coordinator = Self::new(remote, store, connectivity);
        coordinator.events = EventDispatcher::new(config.event_capacity);
        coordinator.config = config;
        Ok(coordinator)
    }

    /// Replace the allocator used for offline ids.
    pub fn with_id_allocator(mut self, ids: Arc<dyn IdAllocator>) -> Self {
        self.ids = ids;
        self
    }

    /// Whether the coordinator currently treats the remote as reachable.
    pub fn is_online(&self) -> bool {
        self.connectivity.is_online()
    }

    /// Whether a write has been accepted locally since the last successful online load.
    pub fn pending_sync(&self) -> bool {
        self.pending_sync.load(Ordering::Acquire)
    }

    /// Subscribe to sync events.
    pub fn subscribe(&self) -> EventReceiver {
        self.events.subscribe()
    }

    /// The connectivity monitor this coordinator follows.
    pub fn connectivity(&self) -> &ConnectivityMonitor {
        &self.connectivity
    }

    /// The local store.
    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    /// The remote API.
    pub fn remote(&self) -> &Arc<A> {
        &self.remote
    }

    /// The active options.
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Forward connectivity transitions as [`SyncEvent::ConnectivityChanged`].
    ///
    /// The task ends when every handle to the monitor is dropped.
    pub fn forward_connectivity(&self) -> JoinHandle<()> {
        let mut rx = self.connectivity.subscribe();
        let events = self.events.clone();
        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let online = *rx.borrow_and_update();
                events.send(SyncEvent::ConnectivityChanged { online });
            }
        })
    }

    /// Run a remote call under the configured timeout.
    async fn call_remote<T, F>(&self, kind: ResourceKind, operation: &str, call: F) -> Result<T>
    where
        F: std::future::Future<Output = RemoteResult<T>>,
    {
        let operation = format!("{} {}", operation, kind);
        match tokio::time::timeout(self.config.remote_timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(Error::from_remote(kind, operation, e)),
            Err(_) => Err(Error::timeout(operation, self.config.remote_timeout)),
        }
    }

    fn cache_write_failed(&self, kind: ResourceKind, err: &wastesync_store::Error) {
        warn!("Failed to update {} cache: {}", kind, err);
        self.events.send(SyncEvent::CacheWriteFailed {
            kind,
            error: err.to_string(),
        });
    }

    fn degraded(&self, kind: ResourceKind, reason: String) {
        self.events.send(SyncEvent::Degraded { kind, reason });
    }

    fn clear_pending(&self) {
        if self.pending_sync.swap(false, Ordering::AcqRel) {
            info!("Pending local writes cleared by a successful online load");
            self.events.send(SyncEvent::PendingSyncCleared);
        }
    }

    fn read_cache<R: Resource>(&self) -> Result<Vec<R>> {
        let kind = R::KIND;
        match self.store.get_all::<R>(kind) {
            Ok(records) if !records.is_empty() => Ok(records),
            Ok(_) => {
                debug!("No cached {} records", kind);
                Err(Error::NoDataAvailable { kind })
            }
            Err(e) => {
                warn!("Cannot read cached {} records: {}", kind, e);
                Err(Error::NoDataAvailable { kind })
            }
        }
    }

    /// Load every record of a resource type.
    pub async fn load<R>(&self) -> Result<LoadOutcome<R>>
    where
        R: Resource,
        A: RemoteRepository<R>,
    {
        let kind = R::KIND;

        let reason = if self.is_online() {
            let fetched = self
                .call_remote(kind, "list", <A as RemoteRepository<R>>::list(&*self.remote))
                .await;
            match fetched {
                Ok(records) => {
                    if let Err(e) = self.store.put_all(&records) {
                        self.cache_write_failed(kind, &e);
                    }
                    self.clear_pending();
                    debug!("Loaded {} {} records from remote", records.len(), kind);
                    return Ok(LoadOutcome {
                        records,
                        degraded: false,
                    });
                }
                Err(e) => {
                    warn!("Remote load of {} failed, serving cached data: {}", kind, e);
                    e.to_string()
                }
            }
        } else {
            "offline".to_string()
        };

        self.degraded(kind, reason);
        let records = self.read_cache::<R>()?;
        Ok(LoadOutcome {
            records,
            degraded: true,
        })
    }

    /// Load the dashboard statistics for a time range.
    ///
    /// Offline, the cached snapshot is only served when it was captured for
    /// exactly the requested range.
    pub async fn load_dashboard(&self, range: TimeRange) -> Result<SnapshotOutcome> {
        let kind = ResourceKind::DashboardStats;

        let reason = if self.is_online() {
            let fetched = self
                .call_remote(kind, "fetch", self.remote.dashboard_stats(range))
                .await;
            match fetched {
                Ok(stats) => {
                    let snapshot = DashboardSnapshot::capture(range, stats);
                    if let Err(e) = self.store.put_snapshot(&snapshot) {
                        self.cache_write_failed(kind, &e);
                    }
                    self.clear_pending();
                    return Ok(SnapshotOutcome {
                        snapshot,
                        degraded: false,
                    });
                }
                Err(e) => {
                    warn!("Remote dashboard fetch failed, serving cached data: {}", e);
                    e.to_string()
                }
            }
        } else {
            "offline".to_string()
        };

        self.degraded(kind, reason);
        match self.store.get_snapshot() {
            Ok(Some(snapshot)) if snapshot.matches(range) => Ok(SnapshotOutcome {
                snapshot,
                degraded: true,
            }),
            Ok(Some(snapshot)) => {
                debug!(
                    "Cached dashboard is for {}, requested {}",
                    snapshot.time_range, range
                );
                Err(Error::NoDataAvailable { kind })
            }
            Ok(None) => Err(Error::NoDataAvailable { kind }),
            Err(e) => {
                warn!("Cannot read cached dashboard: {}", e);
                Err(Error::NoDataAvailable { kind })
            }
        }
    }

    /// Create a record.
    ///
    /// Offline, the record is created locally only and the pending-sync flag
    /// is raised. It is not replayed against the remote API later.
    pub async fn create<R>(&self, draft: R::Draft) -> Result<WriteOutcome<R>>
    where
        R: Materialize,
        A: RemoteRepository<R>,
    {
        let kind = R::KIND;

        if self.is_online() {
            let record = self
                .call_remote(
                    kind,
                    "create",
                    <A as RemoteRepository<R>>::create(&*self.remote, draft),
                )
                .await?;
            if let Err(e) = self.store.put(&record) {
                self.cache_write_failed(kind, &e);
            }
            info!("Created {} {}", kind, record.id());
            return Ok(WriteOutcome {
                record,
                pending_sync: false,
            });
        }

        let id = self.allocate_id(kind)?;
        let record = R::materialize(id, draft, self.store.as_ref());
        self.store.put(&record)?;

        self.pending_sync.store(true, Ordering::Release);
        info!("Created {} {} locally; pending sync", kind, id);
        self.events.send(SyncEvent::PendingSyncRaised { kind, id });

        Ok(WriteOutcome {
            record,
            pending_sync: true,
        })
    }

    /// Update a record. Requires connectivity.
    pub async fn update<R>(&self, record: R) -> Result<WriteOutcome<R>>
    where
        R: Resource,
        A: RemoteRepository<R>,
    {
        let kind = R::KIND;
        if !self.is_online() {
            return Err(Error::OfflineWriteUnsupported {
                kind,
                operation: "update",
            });
        }

        let updated = self
            .call_remote(
                kind,
                "update",
                <A as RemoteRepository<R>>::update(&*self.remote, record),
            )
            .await?;
        if let Err(e) = self.store.put(&updated) {
            self.cache_write_failed(kind, &e);
        }
        info!("Updated {} {}", kind, updated.id());
        Ok(WriteOutcome {
            record: updated,
            pending_sync: false,
        })
    }

    /// Delete a record. Requires connectivity.
    pub async fn delete<R>(&self, id: i64) -> Result<()>
    where
        R: Resource,
        A: RemoteRepository<R>,
    {
        let kind = R::KIND;
        if !self.is_online() {
            return Err(Error::OfflineWriteUnsupported {
                kind,
                operation: "delete",
            });
        }

        self.call_remote(
            kind,
            "delete",
            <A as RemoteRepository<R>>::delete(&*self.remote, id),
        )
        .await?;
        if let Err(e) = self.store.delete(kind, id) {
            self.cache_write_failed(kind, &e);
        }
        info!("Deleted {} {}", kind, id);
        Ok(())
    }

    /// Replace the crew assigned to a route. Requires connectivity.
    pub async fn assign_route_users(
        &self,
        route_id: i64,
        user_ids: Vec<i64>,
    ) -> Result<WriteOutcome<Route>> {
        let kind = ResourceKind::Route;
        if !self.is_online() {
            return Err(Error::OfflineWriteUnsupported {
                kind,
                operation: "assign",
            });
        }

        let route = self
            .call_remote(kind, "assign", self.remote.assign_users(route_id, user_ids))
            .await?;
        if let Err(e) = self.store.put(&route) {
            self.cache_write_failed(kind, &e);
        }
        info!(
            "Assigned {} users to route {}",
            route.assigned_users.len(),
            route_id
        );
        Ok(WriteOutcome {
            record: route,
            pending_sync: false,
        })
    }

    /// Load every id-keyed resource type concurrently.
    ///
    /// Each type follows the read policy on its own; one failing type does
    /// not affect the others.
    pub async fn refresh_all(&self) -> Vec<RefreshEntry> {
        let (users, routes, containers, sensors, logs) = futures::join!(
            self.load::<User>(),
            self.load::<Route>(),
            self.load::<Container>(),
            self.load::<Sensor>(),
            self.load::<CollectionLog>(),
        );

        vec![
            entry(ResourceKind::User, users),
            entry(ResourceKind::Route, routes),
            entry(ResourceKind::Container, containers),
            entry(ResourceKind::Sensor, sensors),
            entry(ResourceKind::CollectionLog, logs),
        ]
    }

    /// A locally unique id, skipping any id already present in the collection.
    fn allocate_id(&self, kind: ResourceKind) -> Result<i64> {
        loop {
            let id = self.ids.next_id();
            if !self.store.contains(kind, id)? {
                return Ok(id);
            }
            debug!("Local id {} already used in {}, allocating another", id, kind);
        }
    }
}

fn entry<R>(kind: ResourceKind, result: Result<LoadOutcome<R>>) -> RefreshEntry {
    RefreshEntry {
        kind,
        result: result.map(|outcome| LoadSummary::from(&outcome)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    use time::macros::datetime;
    use wastesync_types::{ActivityStatus, CollectionStatus, NewCollectionLog, NewContainer};

    use crate::mock::InMemoryRemote;

    fn setup(online: bool) -> (SyncCoordinator<InMemoryRemote>, ConnectivityMonitor) {
        let store = Arc::new(Store::open_in_memory().unwrap());
        let monitor = ConnectivityMonitor::new(Some(online));
        let sync = SyncCoordinator::new(
            Arc::new(InMemoryRemote::seeded()),
            store,
            monitor.clone(),
        );
        (sync, monitor)
    }

    fn container_draft() -> NewContainer {
        NewContainer {
            location: "X".to_string(),
            capacity: 500,
            description: String::new(),
            status: ActivityStatus::Active,
            route_id: None,
        }
    }

    /// Hands out a fixed sequence of ids.
    #[derive(Debug)]
    struct FixedIds(Mutex<VecDeque<i64>>);

    impl IdAllocator for FixedIds {
        fn next_id(&self) -> i64 {
            self.0.lock().unwrap().pop_front().unwrap()
        }
    }

    #[tokio::test]
    async fn test_online_load_writes_through() {
        let (sync, _) = setup(true);
        let outcome = sync.load::<Route>().await.unwrap();
        assert!(!outcome.degraded);
        assert_eq!(outcome.records.len(), 3);

        let cached: Vec<Route> = sync.store().get_all(ResourceKind::Route).unwrap();
        assert_eq!(cached.len(), 3);
        for route in &outcome.records {
            assert!(cached.contains(route));
        }
    }

    #[tokio::test]
    async fn test_offline_load_with_empty_cache_is_no_data() {
        let (sync, _) = setup(false);
        let err = sync.load::<Sensor>().await.unwrap_err();
        assert!(matches!(
            err,
            Error::NoDataAvailable {
                kind: ResourceKind::Sensor
            }
        ));
        // Offline reads never touch the remote.
        assert_eq!(sync.remote().call_count(), 0);
    }

    #[tokio::test]
    async fn test_remote_failure_falls_back_to_cache() {
        let (sync, _) = setup(true);
        sync.load::<Sensor>().await.unwrap();

        sync.remote().set_should_fail(true, Some("boom")).await;
        let mut events = sync.subscribe();
        let outcome = sync.load::<Sensor>().await.unwrap();
        assert!(outcome.degraded);
        assert_eq!(outcome.records.len(), 6);

        match events.recv().await.unwrap() {
            SyncEvent::Degraded { kind, reason } => {
                assert_eq!(kind, ResourceKind::Sensor);
                assert!(reason.contains("boom"));
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_remote_times_out_into_cache() {
        let store = Arc::new(Store::open_in_memory().unwrap());
        let remote = Arc::new(InMemoryRemote::seeded());
        let sync = SyncCoordinator::with_config(
            Arc::clone(&remote),
            store,
            ConnectivityMonitor::online(),
            SyncConfig::new().remote_timeout(Duration::from_secs(2)),
        )
        .unwrap();
        sync.load::<User>().await.unwrap();

        remote.set_latency(Duration::from_secs(30));
        let outcome = sync.load::<User>().await.unwrap();
        assert!(outcome.degraded);
        assert_eq!(outcome.records.len(), 5);
    }

    #[tokio::test]
    async fn test_online_create_reaches_remote_and_cache() {
        let (sync, _) = setup(true);
        let outcome = sync.create::<Container>(container_draft()).await.unwrap();
        assert!(!outcome.pending_sync);
        assert_eq!(outcome.record.id, 6);
        assert!(!sync.pending_sync());

        let cached: Container = sync
            .store()
            .get(ResourceKind::Container, 6)
            .unwrap()
            .unwrap();
        assert_eq!(cached.capacity, 500);
    }

    #[tokio::test]
    async fn test_online_create_rejection_is_surfaced() {
        let (sync, _) = setup(true);
        sync.remote().set_should_fail(true, None).await;

        let err = sync.create::<Container>(container_draft()).await.unwrap_err();
        assert!(matches!(err, Error::RemoteUnavailable { .. }));
        assert!(!sync.pending_sync());
        assert_eq!(sync.store().count(ResourceKind::Container).unwrap(), 0);
    }

    #[tokio::test]
    async fn test_offline_create_is_local_and_pending() {
        let (sync, monitor) = setup(true);
        sync.load::<Route>().await.unwrap();
        sync.load::<Container>().await.unwrap();
        monitor.set_online(false);
        sync.remote().reset_call_count();

        let draft = NewCollectionLog {
            date: datetime!(2024-03-16 08:00 UTC),
            route_id: 1,
            container_ids: vec![1, 4],
            status: CollectionStatus::Pending,
            notes: String::new(),
            collector_name: "Juan Pérez".to_string(),
        };
        let outcome = sync.create::<CollectionLog>(draft).await.unwrap();

        assert!(outcome.pending_sync);
        assert!(sync.pending_sync());
        assert_eq!(sync.remote().call_count(), 0);
        assert_eq!(
            outcome.record.route_details.as_ref().unwrap().name,
            "Ruta Centro"
        );
        assert!(
            sync.store()
                .contains(ResourceKind::CollectionLog, outcome.record.id)
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_offline_id_skips_existing_keys() {
        let (sync, _) = setup(false);
        let sync = sync.with_id_allocator(Arc::new(FixedIds(Mutex::new(VecDeque::from([
            10, 10, 11,
        ])))));

        let first = sync.create::<Container>(container_draft()).await.unwrap();
        let second = sync.create::<Container>(container_draft()).await.unwrap();
        assert_eq!(first.record.id, 10);
        assert_eq!(second.record.id, 11);
    }

    #[tokio::test]
    async fn test_offline_update_and_delete_are_rejected() {
        let (sync, monitor) = setup(true);
        let routes = sync.load::<Route>().await.unwrap().records;
        monitor.set_online(false);

        let err = sync.update(routes[0].clone()).await.unwrap_err();
        assert!(matches!(
            err,
            Error::OfflineWriteUnsupported {
                operation: "update",
                ..
            }
        ));

        let err = sync.delete::<Route>(1).await.unwrap_err();
        assert!(matches!(
            err,
            Error::OfflineWriteUnsupported {
                operation: "delete",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_online_update_and_delete() {
        let (sync, _) = setup(true);
        let mut container = sync.load::<Container>().await.unwrap().records[0].clone();
        container.capacity = 1100;

        let outcome = sync.update(container).await.unwrap();
        assert_eq!(outcome.record.capacity, 1100);
        let cached: Container = sync
            .store()
            .get(ResourceKind::Container, outcome.record.id)
            .unwrap()
            .unwrap();
        assert_eq!(cached.capacity, 1100);

        sync.delete::<Container>(outcome.record.id).await.unwrap();
        assert!(
            !sync
                .store()
                .contains(ResourceKind::Container, outcome.record.id)
                .unwrap()
        );

        let err = sync.delete::<Container>(outcome.record.id).await.unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_dashboard_exact_range_match() {
        let (sync, monitor) = setup(true);
        let online = sync.load_dashboard(TimeRange::Week).await.unwrap();
        assert!(!online.degraded);
        assert_eq!(online.snapshot.stats.container_usage.len(), 7);

        monitor.set_online(false);
        let cached = sync.load_dashboard(TimeRange::Week).await.unwrap();
        assert!(cached.degraded);
        assert_eq!(cached.snapshot.time_range, TimeRange::Week);
        assert_eq!(cached.snapshot.stats.summary, online.snapshot.stats.summary);

        let err = sync.load_dashboard(TimeRange::Month).await.unwrap_err();
        assert!(matches!(
            err,
            Error::NoDataAvailable {
                kind: ResourceKind::DashboardStats
            }
        ));
    }

    #[tokio::test]
    async fn test_refresh_all_isolates_failures() {
        let (sync, _) = setup(true);
        sync.load::<Route>().await.unwrap();
        sync.remote().set_should_fail(true, None).await;

        let report = sync.refresh_all().await;
        assert_eq!(report.len(), 5);

        let route = report
            .iter()
            .find(|e| e.kind == ResourceKind::Route)
            .unwrap();
        assert_eq!(
            route.result.as_ref().unwrap(),
            &LoadSummary {
                records: 3,
                degraded: true
            }
        );

        let users = report.iter().find(|e| e.kind == ResourceKind::User).unwrap();
        assert!(matches!(users.result, Err(Error::NoDataAvailable { .. })));
    }

    #[tokio::test]
    async fn test_connectivity_events_are_forwarded() {
        let (sync, monitor) = setup(true);
        let mut events = sync.subscribe();
        let _forwarder = sync.forward_connectivity();

        monitor.set_online(false);
        let event = tokio::time::timeout(Duration::from_secs(1), events.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(event, SyncEvent::ConnectivityChanged { online: false });
    }

    #[test]
    fn test_with_config_validates() {
        let store = Arc::new(Store::open_in_memory().unwrap());
        let result = SyncCoordinator::with_config(
            Arc::new(InMemoryRemote::new()),
            store,
            ConnectivityMonitor::online(),
            SyncConfig::new().event_capacity(0),
        );
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }
}
