//! End-to-end tests for the sync coordinator against the in-memory remote.
//!
//! Each test wires a seeded [`InMemoryRemote`], a real SQLite store and a
//! connectivity monitor, then drives the public API the way a front end would.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use time::macros::datetime;
use wastesync_core::{
    ConnectivityMonitor, Error, InMemoryRemote, RemoteRepository, SyncConfig, SyncCoordinator,
    SyncEvent,
};
use wastesync_store::Store;
use wastesync_types::{
    ActivityStatus, CollectionLog, CollectionStatus, Container, ContainerSummary,
    NewCollectionLog, NewContainer, ResourceKind, Route, Sensor, TimeRange, User,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("wastesync_core=debug")
        .with_test_writer()
        .try_init();
}

struct Harness {
    remote: Arc<InMemoryRemote>,
    store: Arc<Store>,
    monitor: ConnectivityMonitor,
    sync: SyncCoordinator<InMemoryRemote>,
}

fn harness(config: SyncConfig) -> Harness {
    init_tracing();
    let remote = Arc::new(InMemoryRemote::seeded());
    let store = Arc::new(Store::open_in_memory().unwrap());
    let monitor = ConnectivityMonitor::online();
    let sync = SyncCoordinator::with_config(
        Arc::clone(&remote),
        Arc::clone(&store),
        monitor.clone(),
        config,
    )
    .unwrap();
    Harness {
        remote,
        store,
        monitor,
        sync,
    }
}

fn new_container(location: &str, capacity: u32) -> NewContainer {
    NewContainer {
        location: location.to_string(),
        capacity,
        description: String::new(),
        status: ActivityStatus::Active,
        route_id: None,
    }
}

#[tokio::test]
async fn online_loads_mirror_the_remote_into_the_cache() {
    let h = harness(SyncConfig::default());

    let users = h.sync.load::<User>().await.unwrap();
    let sensors = h.sync.load::<Sensor>().await.unwrap();
    assert!(!users.degraded && !sensors.degraded);

    let cached_users: Vec<User> = h.store.get_all(ResourceKind::User).unwrap();
    let cached_sensors: Vec<Sensor> = h.store.get_all(ResourceKind::Sensor).unwrap();
    assert_eq!(cached_users, users.records);
    assert_eq!(cached_sensors, sensors.records);
}

#[tokio::test]
async fn offline_reads_return_what_was_cached_while_online() {
    let h = harness(SyncConfig::default());
    let online = h.sync.load::<Route>().await.unwrap();

    h.monitor.set_online(false);
    h.remote.reset_call_count();
    let offline = h.sync.load::<Route>().await.unwrap();

    assert!(offline.degraded);
    assert_eq!(offline.records, online.records);
    assert_eq!(h.remote.call_count(), 0);
}

#[tokio::test]
async fn cache_survives_a_restart() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cache.db");

    {
        let store = Arc::new(Store::open(&path).unwrap());
        let sync = SyncCoordinator::new(
            Arc::new(InMemoryRemote::seeded()),
            store,
            ConnectivityMonitor::online(),
        );
        sync.load::<Container>().await.unwrap();
    }

    let store = Arc::new(Store::open(&path).unwrap());
    let sync = SyncCoordinator::new(
        Arc::new(InMemoryRemote::new()),
        store,
        ConnectivityMonitor::offline(),
    );
    let cached = sync.load::<Container>().await.unwrap();
    assert!(cached.degraded);
    assert_eq!(cached.records.len(), 5);
}

#[tokio::test]
async fn nothing_cached_and_offline_is_no_data() {
    let h = harness(SyncConfig::default());
    h.monitor.set_online(false);

    let err = h.sync.load::<CollectionLog>().await.unwrap_err();
    assert!(matches!(
        err,
        Error::NoDataAvailable {
            kind: ResourceKind::CollectionLog
        }
    ));
}

#[tokio::test]
async fn remote_failure_degrades_only_the_failing_read() {
    let h = harness(SyncConfig::default());
    h.sync.load::<Sensor>().await.unwrap();

    let mut events = h.sync.subscribe();
    h.remote.set_transient_failures(1);

    let sensors = h.sync.load::<Sensor>().await.unwrap();
    assert!(sensors.degraded);
    assert_eq!(sensors.records.len(), 6);

    // The next call succeeds again.
    let routes = h.sync.load::<Route>().await.unwrap();
    assert!(!routes.degraded);

    assert!(matches!(
        events.recv().await.unwrap(),
        SyncEvent::Degraded {
            kind: ResourceKind::Sensor,
            ..
        }
    ));
}

#[tokio::test(start_paused = true)]
async fn a_hanging_remote_is_cut_off_by_the_timeout() {
    let h = harness(SyncConfig::new().remote_timeout(Duration::from_millis(500)));
    h.sync.load::<Route>().await.unwrap();

    h.remote.set_latency(Duration::from_secs(60));
    let started = tokio::time::Instant::now();
    let routes = h.sync.load::<Route>().await.unwrap();

    assert!(routes.degraded);
    assert!(started.elapsed() < Duration::from_secs(60));

    let err = h
        .sync
        .create::<Container>(new_container("Z", 100))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::RemoteUnavailable { .. }));
}

#[tokio::test]
async fn online_create_is_visible_remotely_and_locally() {
    let h = harness(SyncConfig::default());

    let created = h
        .sync
        .create::<Container>(new_container("X", 500))
        .await
        .unwrap();
    assert!(!created.pending_sync);
    assert_eq!(created.record.fill_level, 0);

    let remote: Vec<Container> = RemoteRepository::<Container>::list(&*h.remote)
        .await
        .unwrap();
    assert!(
        remote
            .iter()
            .any(|c| c.id == created.record.id && c.location == "X" && c.capacity == 500)
    );

    let cached: Container = h
        .store
        .get(ResourceKind::Container, created.record.id)
        .unwrap()
        .unwrap();
    assert_eq!(cached.location, "X");
    assert_eq!(cached.capacity, 500);
}

#[tokio::test]
async fn offline_log_joins_cached_route_and_containers() {
    let h = harness(SyncConfig::default());
    h.sync.load::<Route>().await.unwrap();
    h.sync.load::<Container>().await.unwrap();
    h.monitor.set_online(false);

    let draft = NewCollectionLog {
        date: datetime!(2024-03-17 07:30 UTC),
        route_id: 1,
        container_ids: vec![1, 4],
        status: CollectionStatus::Pending,
        notes: String::new(),
        collector_name: "Raul Perez".to_string(),
    };
    let created = h.sync.create::<CollectionLog>(draft).await.unwrap();

    assert!(created.pending_sync);
    let log = created.record;
    assert_eq!(log.route_details.as_ref().unwrap().name, "Ruta Centro");
    assert_eq!(
        log.container_details,
        vec![
            Some(ContainerSummary {
                id: 1,
                location: "Av. Reforma #123, Centro".to_string(),
            }),
            Some(ContainerSummary {
                id: 4,
                location: "Plaza de Armas, Centro Histórico".to_string(),
            }),
        ]
    );

    let cached: CollectionLog = h
        .store
        .get(ResourceKind::CollectionLog, log.id)
        .unwrap()
        .unwrap();
    assert_eq!(cached, log);
}

#[tokio::test]
async fn offline_log_with_unknown_relations_keeps_empty_details() {
    let h = harness(SyncConfig::default());
    h.monitor.set_online(false);

    let draft = NewCollectionLog {
        date: datetime!(2024-03-17 07:30 UTC),
        route_id: 9,
        container_ids: vec![42],
        status: CollectionStatus::Pending,
        notes: String::new(),
        collector_name: String::new(),
    };
    let log = h.sync.create::<CollectionLog>(draft).await.unwrap().record;

    assert!(log.route_details.is_none());
    assert_eq!(log.container_details, vec![None]);
}

#[tokio::test]
async fn offline_creates_never_collide() {
    let h = harness(SyncConfig::default());
    h.sync.load::<Container>().await.unwrap();
    h.monitor.set_online(false);

    let mut ids: HashSet<i64> = HashSet::new();
    for i in 0..50 {
        let created = h
            .sync
            .create::<Container>(new_container(&format!("Punto {i}"), 300))
            .await
            .unwrap();
        assert!(ids.insert(created.record.id));
    }

    // Seeded ids are untouched and every local record is kept.
    assert_eq!(h.store.count(ResourceKind::Container).unwrap(), 55);
    for seeded in 1..=5 {
        assert!(!ids.contains(&seeded));
    }
}

#[tokio::test]
async fn pending_flag_lifecycle() {
    let h = harness(SyncConfig::default());
    let mut events = h.sync.subscribe();
    assert!(!h.sync.pending_sync());

    h.monitor.set_online(false);
    let created = h
        .sync
        .create::<Container>(new_container("Local", 200))
        .await
        .unwrap();
    assert!(h.sync.pending_sync());
    assert_eq!(
        events.recv().await.unwrap(),
        SyncEvent::PendingSyncRaised {
            kind: ResourceKind::Container,
            id: created.record.id,
        }
    );

    // A degraded read does not clear the flag.
    h.sync.load::<Container>().await.unwrap();
    assert!(h.sync.pending_sync());

    // A successful online read does, even for another resource type.
    h.monitor.set_online(true);
    h.sync.load::<User>().await.unwrap();
    assert!(!h.sync.pending_sync());

    let mut saw_cleared = false;
    while let Ok(event) = events.try_recv() {
        saw_cleared |= event == SyncEvent::PendingSyncCleared;
    }
    assert!(saw_cleared);
}

#[tokio::test]
async fn write_through_replaces_remote_records_but_keeps_local_ones() {
    let h = harness(SyncConfig::default());
    h.monitor.set_online(false);
    let local = h
        .sync
        .create::<Container>(new_container("Solo local", 250))
        .await
        .unwrap()
        .record;

    h.monitor.set_online(true);
    let online = h.sync.load::<Container>().await.unwrap();
    assert_eq!(online.records.len(), 5);

    // The locally created record was never sent to the remote, and stays cached.
    assert!(h.store.contains(ResourceKind::Container, local.id).unwrap());
    assert_eq!(h.store.count(ResourceKind::Container).unwrap(), 6);
}

#[tokio::test]
async fn dashboard_snapshot_is_served_for_the_same_range_only() {
    let h = harness(SyncConfig::default());
    let online = h.sync.load_dashboard(TimeRange::Month).await.unwrap();
    assert!(!online.degraded);
    assert_eq!(online.snapshot.stats.container_usage.len(), 30);
    assert_eq!(online.snapshot.stats.summary.total_users, 4);

    h.remote.set_should_fail(true, Some("502 Bad Gateway")).await;

    let same = h.sync.load_dashboard(TimeRange::Month).await.unwrap();
    assert!(same.degraded);
    assert_eq!(same.snapshot.time_range, TimeRange::Month);
    assert_eq!(same.snapshot.stats.summary, online.snapshot.stats.summary);

    let other = h.sync.load_dashboard(TimeRange::Week).await.unwrap_err();
    assert!(matches!(
        other,
        Error::NoDataAvailable {
            kind: ResourceKind::DashboardStats
        }
    ));
}

#[tokio::test]
async fn offline_update_and_delete_leave_the_cache_alone() {
    let h = harness(SyncConfig::default());
    let mut user = h.sync.load::<User>().await.unwrap().records[1].clone();
    h.monitor.set_online(false);

    user.name = "Otro Nombre".to_string();
    let err = h.sync.update(user.clone()).await.unwrap_err();
    assert!(matches!(err, Error::OfflineWriteUnsupported { .. }));
    assert!(h.sync.delete::<User>(user.id).await.is_err());

    let cached: User = h.store.get(ResourceKind::User, user.id).unwrap().unwrap();
    assert_ne!(cached.name, "Otro Nombre");
    assert!(!h.sync.pending_sync());
}

#[tokio::test]
async fn route_assignment_is_written_through() {
    let h = harness(SyncConfig::default());
    h.sync.load::<Route>().await.unwrap();

    let outcome = h.sync.assign_route_users(3, vec![2, 5]).await.unwrap();
    assert!(!outcome.pending_sync);
    assert_eq!(outcome.record.assigned_users_details.len(), 2);

    let cached: Route = h.store.get(ResourceKind::Route, 3).unwrap().unwrap();
    assert_eq!(cached.assigned_users, vec![2, 5]);
    assert_eq!(cached.assigned_users_details[1].name, "Ana Martínez");

    h.monitor.set_online(false);
    let err = h.sync.assign_route_users(3, vec![]).await.unwrap_err();
    assert!(matches!(
        err,
        Error::OfflineWriteUnsupported {
            kind: ResourceKind::Route,
            operation: "assign"
        }
    ));
    let cached: Route = h.store.get(ResourceKind::Route, 3).unwrap().unwrap();
    assert_eq!(cached.assigned_users, vec![2, 5]);
}

#[tokio::test]
async fn remote_rejections_reach_the_caller() {
    let h = harness(SyncConfig::default());
    let mut users = h.sync.load::<User>().await.unwrap().records;
    let mut second = users.remove(1);
    second.email = users[0].email.clone();

    let err = h.sync.update(second).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Rejected {
            kind: ResourceKind::User,
            ..
        }
    ));
}

#[tokio::test]
async fn refresh_all_reports_every_type() {
    let h = harness(SyncConfig::default());
    let report = h.sync.refresh_all().await;

    let kinds: Vec<ResourceKind> = report.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, ResourceKind::RECORDS.to_vec());
    for entry in &report {
        let summary = entry.result.as_ref().unwrap();
        assert!(!summary.degraded);
        assert!(summary.records > 0);
    }
}

#[tokio::test]
async fn store_failure_on_write_through_does_not_fail_the_read() {
    init_tracing();
    let blocker = tempfile::NamedTempFile::new().unwrap();
    // A directory path under a regular file can never be created.
    let store = Arc::new(Store::new(blocker.path().join("cache.db")));
    let sync = SyncCoordinator::new(
        Arc::new(InMemoryRemote::seeded()),
        store,
        ConnectivityMonitor::online(),
    );
    let mut events = sync.subscribe();

    let routes = sync.load::<Route>().await.unwrap();
    assert!(!routes.degraded);
    assert_eq!(routes.records.len(), 3);
    assert!(matches!(
        events.recv().await.unwrap(),
        SyncEvent::CacheWriteFailed {
            kind: ResourceKind::Route,
            ..
        }
    ));

    // Offline, the same broken store cannot accept a local create.
    sync.connectivity().set_online(false);
    let err = sync
        .create::<Container>(new_container("X", 1))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::StorageUnavailable(_)));
}

/// A store whose database directory sits under a regular file.
fn broken_store(blocker: &tempfile::NamedTempFile) -> Arc<Store> {
    Arc::new(Store::new(blocker.path().join("cache.db")))
}

#[tokio::test]
async fn unreadable_cache_while_offline_is_no_data() {
    init_tracing();
    let blocker = tempfile::NamedTempFile::new().unwrap();
    let sync = SyncCoordinator::new(
        Arc::new(InMemoryRemote::seeded()),
        broken_store(&blocker),
        ConnectivityMonitor::offline(),
    );

    let err = sync.load::<Container>().await.unwrap_err();
    assert!(matches!(
        err,
        Error::NoDataAvailable {
            kind: ResourceKind::Container
        }
    ));

    let err = sync.load_dashboard(TimeRange::Week).await.unwrap_err();
    assert!(matches!(
        err,
        Error::NoDataAvailable {
            kind: ResourceKind::DashboardStats
        }
    ));
}

#[tokio::test]
async fn failing_remote_and_unreadable_cache_is_no_data() {
    init_tracing();
    let blocker = tempfile::NamedTempFile::new().unwrap();
    let remote = Arc::new(InMemoryRemote::seeded());
    remote.set_should_fail(true, Some("API down")).await;
    let sync = SyncCoordinator::new(
        Arc::clone(&remote),
        broken_store(&blocker),
        ConnectivityMonitor::online(),
    );
    let mut events = sync.subscribe();

    let err = sync.load::<Sensor>().await.unwrap_err();
    assert!(matches!(
        err,
        Error::NoDataAvailable {
            kind: ResourceKind::Sensor
        }
    ));
    match events.recv().await.unwrap() {
        SyncEvent::Degraded { kind, reason } => {
            assert_eq!(kind, ResourceKind::Sensor);
            assert!(reason.contains("API down"));
        }
        other => panic!("unexpected event {other:?}"),
    }

    let err = sync.load_dashboard(TimeRange::Month).await.unwrap_err();
    assert!(matches!(
        err,
        Error::NoDataAvailable {
            kind: ResourceKind::DashboardStats
        }
    ));
    assert!(!sync.pending_sync());
}
