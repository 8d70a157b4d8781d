//! In-memory remote API for testing and demos.
//!
//! [`InMemoryRemote`] implements every [`RemoteRepository`] plus the
//! [`DashboardSource`] over plain vectors, with the same server-side rules
//! as the dashboard backend: `max + 1` ids, unique e-mails, joined detail
//! fields on list, and `NotFound` for unknown ids.
//!
//! # Features
//!
//! - **Seed data**: [`InMemoryRemote::seeded`] starts with the reference dataset
//! - **Failure injection**: Make every call fail, or only the next few
//! - **Latency simulation**: Add artificial delays to exercise timeouts

use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use time::macros::{date, datetime, format_description};
use time::{Date, OffsetDateTime};
use tokio::sync::RwLock;
use tracing::debug;

use wastesync_types::{
    ActivityStatus, CollectionLog, CollectionStatus, Container, ContainerStatusSlice,
    DashboardStats, NewCollectionLog, NewContainer, NewRoute, NewSensor, NewUser,
    RecentCollection, Resource, Route, RouteCapacity, RouteStatus, Sensor,
    SensorReadingSummary, SensorType, StatsSummary, TimeRange, UsagePoint, User, UserRole,
};

use crate::relations::{Materialize, RelationLookup};
use crate::remote::{
    DashboardSource, RemoteError, RemoteRepository, RemoteResult, RouteAssignment,
};

/// Server-side records, stored without their joined detail fields.
///
/// Passwords from user drafts are accepted but never kept or returned.
#[derive(Debug, Default)]
struct Dataset {
    users: Vec<User>,
    routes: Vec<Route>,
    containers: Vec<Container>,
    sensors: Vec<Sensor>,
    logs: Vec<CollectionLog>,
}

impl RelationLookup for Dataset {
    fn user(&self, id: i64) -> Option<User> {
        self.users.iter().find(|u| u.id == id).cloned()
    }

    fn route(&self, id: i64) -> Option<Route> {
        self.routes.iter().find(|r| r.id == id).cloned()
    }

    fn container(&self, id: i64) -> Option<Container> {
        self.containers.iter().find(|c| c.id == id).cloned()
    }
}

/// An in-process remote API.
///
/// # Example
///
/// ```
/// use wastesync_core::{InMemoryRemote, RemoteRepository};
/// use wastesync_types::Container;
///
/// #[tokio::main]
/// async fn main() {
///     let remote = InMemoryRemote::seeded();
///     let containers: Vec<Container> = remote.list().await.unwrap();
///     assert_eq!(containers.len(), 5);
/// }
/// ```
pub struct InMemoryRemote {
    data: RwLock<Dataset>,
    should_fail: AtomicBool,
    fail_message: RwLock<String>,
    /// Simulated latency per call in milliseconds (0 = no delay).
    latency_ms: AtomicU64,
    /// Number of calls left to fail before succeeding.
    remaining_failures: AtomicU32,
    call_count: AtomicU32,
}

impl std::fmt::Debug for InMemoryRemote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryRemote")
            .field("should_fail", &self.should_fail.load(Ordering::Relaxed))
            .field("call_count", &self.call_count.load(Ordering::Relaxed))
            .finish()
    }
}

impl Default for InMemoryRemote {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRemote {
    /// Create an empty remote.
    pub fn new() -> Self {
        Self::with_dataset(Dataset::default())
    }

    /// Create a remote holding the reference dataset: 5 users, 3 routes,
    /// 5 containers, 6 sensors and 5 collection logs.
    pub fn seeded() -> Self {
        Self::with_dataset(seed())
    }

    fn with_dataset(data: Dataset) -> Self {
        Self {
            data: RwLock::new(data),
            should_fail: AtomicBool::new(false),
            fail_message: RwLock::new("Mock failure".to_string()),
            latency_ms: AtomicU64::new(0),
            remaining_failures: AtomicU32::new(0),
            call_count: AtomicU32::new(0),
        }
    }

    async fn check_should_fail(&self) -> RemoteResult<()> {
        self.call_count.fetch_add(1, Ordering::Relaxed);

        let latency = self.latency_ms.load(Ordering::Relaxed);
        if latency > 0 {
            tokio::time::sleep(Duration::from_millis(latency)).await;
        }

        // Check for transient failures first
        if self.remaining_failures.load(Ordering::Relaxed) > 0 {
            self.remaining_failures.fetch_sub(1, Ordering::Relaxed);
            return Err(RemoteError::Unavailable(
                self.fail_message.read().await.clone(),
            ));
        }

        if self.should_fail.load(Ordering::Relaxed) {
            Err(RemoteError::Unavailable(
                self.fail_message.read().await.clone(),
            ))
        } else {
            Ok(())
        }
    }

    // --- Test control methods ---

    /// Make every call fail until reset.
    pub async fn set_should_fail(&self, fail: bool, message: Option<&str>) {
        self.should_fail.store(fail, Ordering::Relaxed);
        if let Some(msg) = message {
            *self.fail_message.write().await = msg.to_string();
        }
    }

    /// Set simulated latency.
    ///
    /// Each call will be delayed by this duration.
    /// Set to `Duration::ZERO` to disable latency simulation.
    pub fn set_latency(&self, latency: Duration) {
        self.latency_ms
            .store(latency.as_millis() as u64, Ordering::Relaxed);
    }

    /// Configure transient failures.
    ///
    /// The next `count` calls will fail, then calls succeed again.
    pub fn set_transient_failures(&self, count: u32) {
        self.remaining_failures.store(count, Ordering::Relaxed);
    }

    /// Number of calls received, successful or not.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Reset call count.
    pub fn reset_call_count(&self) {
        self.call_count.store(0, Ordering::Relaxed);
    }
}

fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().map_or(1, |max| max + 1)
}

fn position<R: Resource>(records: &[R], id: i64) -> RemoteResult<usize> {
    records
        .iter()
        .position(|r| r.id() == id)
        .ok_or(RemoteError::NotFound { kind: R::KIND, id })
}

#[async_trait]
impl RemoteRepository<User> for InMemoryRemote {
    async fn list(&self) -> RemoteResult<Vec<User>> {
        self.check_should_fail().await?;
        let data = self.data.read().await;
        Ok(data.users.clone())
    }

    async fn create(&self, draft: NewUser) -> RemoteResult<User> {
        self.check_should_fail().await?;
        let mut data = self.data.write().await;

        if data.users.iter().any(|u| u.email == draft.email) {
            return Err(RemoteError::Rejected(
                "El correo electrónico ya está registrado".to_string(),
            ));
        }

        let id = next_id(data.users.iter().map(|u| u.id));
        let user = User::materialize(id, draft, &*data);
        data.users.push(user.clone());
        debug!("Created user {}", id);
        Ok(user)
    }

    async fn update(&self, record: User) -> RemoteResult<User> {
        self.check_should_fail().await?;
        let mut data = self.data.write().await;

        let index = position(&data.users, record.id)?;

        if data
            .users
            .iter()
            .any(|u| u.email == record.email && u.id != record.id)
        {
            return Err(RemoteError::Rejected(
                "El correo electrónico ya está en uso".to_string(),
            ));
        }

        let user = &mut data.users[index];
        user.name = record.name;
        user.email = record.email;
        user.role = record.role;
        user.status = record.status;
        Ok(user.clone())
    }

    async fn delete(&self, id: i64) -> RemoteResult<()> {
        self.check_should_fail().await?;
        let mut data = self.data.write().await;
        let index = position(&data.users, id)?;
        data.users.remove(index);
        Ok(())
    }
}

#[async_trait]
impl RemoteRepository<Route> for InMemoryRemote {
    async fn list(&self) -> RemoteResult<Vec<Route>> {
        self.check_should_fail().await?;
        let data = self.data.read().await;
        Ok(data
            .routes
            .iter()
            .map(|r| r.clone().join(&*data))
            .collect())
    }

    async fn create(&self, draft: NewRoute) -> RemoteResult<Route> {
        self.check_should_fail().await?;
        let mut data = self.data.write().await;
        let id = next_id(data.routes.iter().map(|r| r.id));
        let route = Route::materialize(id, draft, &*data);
        data.routes.push(route.clone());
        debug!("Created route {}", id);
        Ok(route)
    }

    async fn update(&self, record: Route) -> RemoteResult<Route> {
        self.check_should_fail().await?;
        let mut data = self.data.write().await;
        let index = position(&data.routes, record.id)?;

        let route = &mut data.routes[index];
        route.name = record.name;
        route.description = record.description;
        route.status = record.status;
        let updated = route.clone();
        Ok(updated.join(&*data))
    }

    async fn delete(&self, id: i64) -> RemoteResult<()> {
        self.check_should_fail().await?;
        let mut data = self.data.write().await;
        let index = position(&data.routes, id)?;
        data.routes.remove(index);
        Ok(())
    }
}

#[async_trait]
impl RouteAssignment for InMemoryRemote {
    async fn assign_users(&self, route_id: i64, user_ids: Vec<i64>) -> RemoteResult<Route> {
        self.check_should_fail().await?;
        let mut data = self.data.write().await;
        let index = position(&data.routes, route_id)?;

        // Ids without a matching user are kept but never joined.
        let route = &mut data.routes[index];
        route.assigned_users = user_ids;
        let updated = route.clone();
        debug!(
            "Assigned {} users to route {}",
            updated.assigned_users.len(),
            route_id
        );
        Ok(updated.join(&*data))
    }
}

#[async_trait]
impl RemoteRepository<Container> for InMemoryRemote {
    async fn list(&self) -> RemoteResult<Vec<Container>> {
        self.check_should_fail().await?;
        let data = self.data.read().await;
        Ok(data
            .containers
            .iter()
            .map(|c| c.clone().join(&*data))
            .collect())
    }

    async fn create(&self, draft: NewContainer) -> RemoteResult<Container> {
        self.check_should_fail().await?;
        let mut data = self.data.write().await;
        let id = next_id(data.containers.iter().map(|c| c.id));
        let container = Container::materialize(id, draft, &*data);
        data.containers.push(container.without_details());
        debug!("Created container {}", id);
        Ok(container)
    }

    async fn update(&self, record: Container) -> RemoteResult<Container> {
        self.check_should_fail().await?;
        let mut data = self.data.write().await;
        let index = position(&data.containers, record.id)?;

        // Fill level is reported by the sensors, not edited.
        let container = &mut data.containers[index];
        container.location = record.location;
        container.capacity = record.capacity;
        container.description = record.description;
        container.status = record.status;
        container.route_id = record.route_id;
        let updated = container.clone();
        Ok(updated.join(&*data))
    }

    async fn delete(&self, id: i64) -> RemoteResult<()> {
        self.check_should_fail().await?;
        let mut data = self.data.write().await;
        let index = position(&data.containers, id)?;
        data.containers.remove(index);
        Ok(())
    }
}

#[async_trait]
impl RemoteRepository<Sensor> for InMemoryRemote {
    async fn list(&self) -> RemoteResult<Vec<Sensor>> {
        self.check_should_fail().await?;
        let data = self.data.read().await;
        Ok(data
            .sensors
            .iter()
            .map(|s| s.clone().join(&*data))
            .collect())
    }

    async fn create(&self, draft: NewSensor) -> RemoteResult<Sensor> {
        self.check_should_fail().await?;
        let mut data = self.data.write().await;
        let id = next_id(data.sensors.iter().map(|s| s.id));
        let sensor = Sensor::materialize(id, draft, &*data);
        data.sensors.push(Sensor {
            container_details: None,
            ..sensor.clone()
        });
        debug!("Created sensor {}", id);
        Ok(sensor)
    }

    async fn update(&self, record: Sensor) -> RemoteResult<Sensor> {
        self.check_should_fail().await?;
        let mut data = self.data.write().await;
        let index = position(&data.sensors, record.id)?;

        let sensor = &mut data.sensors[index];
        sensor.sensor_type = record.sensor_type;
        sensor.description = record.description;
        sensor.status = record.status;
        sensor.container_id = record.container_id;
        let updated = sensor.clone();
        Ok(updated.join(&*data))
    }

    async fn delete(&self, id: i64) -> RemoteResult<()> {
        self.check_should_fail().await?;
        let mut data = self.data.write().await;
        let index = position(&data.sensors, id)?;
        data.sensors.remove(index);
        Ok(())
    }
}

/// Server listings leave out containers that no longer exist.
fn listed_log(log: &CollectionLog, data: &Dataset) -> CollectionLog {
    let mut joined = log.clone().join(data);
    joined.container_details.retain(Option::is_some);
    joined
}

#[async_trait]
impl RemoteRepository<CollectionLog> for InMemoryRemote {
    async fn list(&self) -> RemoteResult<Vec<CollectionLog>> {
        self.check_should_fail().await?;
        let data = self.data.read().await;
        Ok(data.logs.iter().map(|l| listed_log(l, &data)).collect())
    }

    async fn create(&self, draft: NewCollectionLog) -> RemoteResult<CollectionLog> {
        self.check_should_fail().await?;
        let mut data = self.data.write().await;
        let id = next_id(data.logs.iter().map(|l| l.id));
        let log = CollectionLog::materialize(id, draft, &*data);
        data.logs.push(log.clone());
        debug!("Created collection log {}", id);
        Ok(listed_log(&log, &data))
    }

    async fn update(&self, record: CollectionLog) -> RemoteResult<CollectionLog> {
        self.check_should_fail().await?;
        let mut data = self.data.write().await;
        let index = position(&data.logs, record.id)?;

        // The route of a log is fixed once recorded.
        let log = &mut data.logs[index];
        log.date = record.date;
        log.status = record.status;
        log.notes = record.notes;
        log.collector_name = record.collector_name;
        log.container_ids = record.container_ids;
        let updated = log.clone();
        Ok(listed_log(&updated, &data))
    }

    async fn delete(&self, id: i64) -> RemoteResult<()> {
        self.check_should_fail().await?;
        let mut data = self.data.write().await;
        let index = position(&data.logs, id)?;
        data.logs.remove(index);
        Ok(())
    }
}

#[async_trait]
impl DashboardSource for InMemoryRemote {
    async fn dashboard_stats(&self, range: TimeRange) -> RemoteResult<DashboardStats> {
        self.check_should_fail().await?;
        let data = self.data.read().await;
        Ok(dashboard_stats(&data, range, OffsetDateTime::now_utc()))
    }
}

fn percent(part: u64, whole: u64) -> u8 {
    if whole == 0 {
        0
    } else {
        (part * 100 / whole).min(100) as u8
    }
}

fn dashboard_stats(data: &Dataset, range: TimeRange, now: OffsetDateTime) -> DashboardStats {
    let mut rng = rand::rng();

    let summary = StatsSummary {
        total_routes: data
            .routes
            .iter()
            .filter(|r| r.status == RouteStatus::Active)
            .count() as u32,
        active_containers: data
            .containers
            .iter()
            .filter(|c| c.status.is_active())
            .count() as u32,
        connected_sensors: data.sensors.iter().filter(|s| s.status.is_active()).count() as u32,
        total_users: data
            .users
            .iter()
            .filter(|u| u.status.is_active())
            .count() as u32,
    };

    // Capacity: share of the route's containers in service. Usage: mean fill level.
    let route_capacity = data
        .routes
        .iter()
        .map(|route| {
            let on_route: Vec<&Container> = data
                .containers
                .iter()
                .filter(|c| c.route_id == Some(route.id))
                .collect();
            let active = on_route.iter().filter(|c| c.status.is_active()).count() as u64;
            let fill: u64 = on_route.iter().map(|c| u64::from(c.fill_level)).sum();
            RouteCapacity {
                name: route.name.clone(),
                capacity: percent(active, on_route.len() as u64),
                usage: percent(fill, on_route.len() as u64 * 100),
            }
        })
        .collect();

    let day_format = format_description!("[month repr:short] [day padding:none]");
    let container_usage = (0..range.days())
        .rev()
        .map(|back| {
            let day: Date = (now - time::Duration::days(i64::from(back))).date();
            UsagePoint {
                day: day.format(day_format).unwrap_or_else(|_| day.to_string()),
                usage: rng.random_range(50..=90),
                collections: rng.random_range(2..=10),
            }
        })
        .collect();

    let mut logs: Vec<&CollectionLog> = data.logs.iter().collect();
    logs.sort_by(|a, b| b.date.cmp(&a.date));
    let recent_collections = logs
        .into_iter()
        .take(4)
        .map(|log| RecentCollection {
            id: log.id,
            route: data
                .route(log.route_id)
                .map_or_else(|| format!("Ruta {}", log.route_id), |r| r.name),
            container: log
                .container_ids
                .first()
                .and_then(|&id| data.container(id))
                .map(|c| c.location)
                .unwrap_or_default(),
            timestamp: log.date,
            status: log.status.as_str().to_string(),
        })
        .collect();

    let sensor_readings = data
        .sensors
        .iter()
        .filter(|s| s.status.is_active())
        .take(5)
        .enumerate()
        .map(|(i, sensor)| {
            let value = match sensor.sensor_type {
                SensorType::Level => sensor
                    .container_id
                    .and_then(|id| data.container(id))
                    .map_or(0.0, |c| f64::from(c.fill_level)),
                SensorType::Temperature => f64::from(rng.random_range(18..=30_i32)),
                SensorType::Humidity => f64::from(rng.random_range(40..=80_i32)),
                SensorType::Weight => f64::from(rng.random_range(300..=500_i32)),
            };
            let alert = sensor.sensor_type == SensorType::Level && value >= 85.0;
            SensorReadingSummary {
                id: sensor.id,
                sensor: format!("Sensor-{:03}", sensor.id),
                sensor_type: sensor.sensor_type.as_str().to_string(),
                value,
                unit: sensor.sensor_type.unit().to_string(),
                timestamp: now - time::Duration::minutes(30 + 15 * i as i64),
                status: if alert { "alerta" } else { "normal" }.to_string(),
            }
        })
        .collect();

    let bucket = |levels: std::ops::RangeInclusive<u8>| {
        data.containers
            .iter()
            .filter(|c| levels.contains(&c.fill_level))
            .count() as u32
    };
    let container_status = vec![
        ContainerStatusSlice {
            name: "Vacío (0-30%)".to_string(),
            value: bucket(0..=30),
            color: "#22c55e".to_string(),
        },
        ContainerStatusSlice {
            name: "Medio (31-70%)".to_string(),
            value: bucket(31..=70),
            color: "#eab308".to_string(),
        },
        ContainerStatusSlice {
            name: "Lleno (71-100%)".to_string(),
            value: bucket(71..=u8::MAX),
            color: "#ef4444".to_string(),
        },
    ];

    DashboardStats {
        summary,
        route_capacity,
        container_usage,
        recent_collections,
        sensor_readings,
        container_status,
    }
}

fn user(
    id: i64,
    email: &str,
    name: &str,
    role: UserRole,
    status: ActivityStatus,
    created_at: Date,
) -> User {
    User {
        id,
        email: email.to_string(),
        name: name.to_string(),
        role,
        status,
        created_at,
    }
}

fn route(
    id: i64,
    name: &str,
    description: &str,
    status: RouteStatus,
    created_at: Date,
    assigned_users: Vec<i64>,
) -> Route {
    Route {
        id,
        name: name.to_string(),
        description: description.to_string(),
        status,
        created_at,
        assigned_users,
        assigned_users_details: Vec::new(),
    }
}

#[allow(clippy::too_many_arguments)]
fn container(
    id: i64,
    location: &str,
    capacity: u32,
    description: &str,
    status: ActivityStatus,
    fill_level: u8,
    route_id: Option<i64>,
    created_at: Date,
) -> Container {
    Container {
        id,
        location: location.to_string(),
        capacity,
        description: description.to_string(),
        status,
        fill_level,
        route_id,
        created_at,
        route_details: None,
    }
}

fn sensor(
    id: i64,
    sensor_type: SensorType,
    description: &str,
    status: ActivityStatus,
    container_id: i64,
    created_at: Date,
) -> Sensor {
    Sensor {
        id,
        sensor_type,
        description: description.to_string(),
        status,
        container_id: Some(container_id),
        created_at,
        container_details: None,
    }
}

#[allow(clippy::too_many_arguments)]
fn log(
    id: i64,
    date: OffsetDateTime,
    route_id: i64,
    container_ids: Vec<i64>,
    status: CollectionStatus,
    notes: &str,
    collector_name: &str,
    created_at: OffsetDateTime,
) -> CollectionLog {
    CollectionLog {
        id,
        date,
        route_id,
        container_ids,
        status,
        notes: notes.to_string(),
        collector_name: collector_name.to_string(),
        created_at,
        route_details: None,
        container_details: Vec::new(),
    }
}

fn seed() -> Dataset {
    use ActivityStatus::{Active, Inactive};

    Dataset {
        users: vec![
            user(1, "admin@smartwaste.com", "Administrador Principal", UserRole::Admin, Active, date!(2024 - 01 - 15)),
            user(2, "usuario@smartwaste.com", "Lemuel Lira", UserRole::Staff, Active, date!(2024 - 02 - 10)),
            user(3, "chofer@smartwaste.com", "Raul Perez", UserRole::Driver, Active, date!(2024 - 02 - 15)),
            user(4, "carlos.lopez@smartwaste.com", "Carlos López", UserRole::Staff, Inactive, date!(2024 - 01 - 20)),
            user(5, "ana.martinez@smartwaste.com", "Ana Martínez", UserRole::Driver, Active, date!(2024 - 02 - 20)),
        ],
        routes: vec![
            route(1, "Ruta Centro", "Recolección en el centro histórico de la ciudad", RouteStatus::Active, date!(2024 - 01 - 10), vec![2, 3]),
            route(2, "Ruta Norte", "Zona residencial norte, incluye parques y escuelas", RouteStatus::Active, date!(2024 - 01 - 15), vec![5]),
            route(3, "Ruta Industrial", "Zona industrial y comercial", RouteStatus::Inactive, date!(2024 - 02 - 01), vec![]),
        ],
        containers: vec![
            container(1, "Av. Reforma #123, Centro", 1000, "Contenedor principal frente al banco", Active, 75, Some(1), date!(2024 - 01 - 10)),
            container(2, "Parque Central, Zona Norte", 800, "Contenedor en área recreativa", Active, 45, Some(2), date!(2024 - 01 - 15)),
            container(3, "Calle Industrial #456", 1500, "Contenedor para zona comercial", Inactive, 0, Some(3), date!(2024 - 02 - 01)),
            container(4, "Plaza de Armas, Centro Histórico", 600, "Contenedor turístico", Active, 90, Some(1), date!(2024 - 01 - 20)),
            container(5, "Mercado Municipal, Zona Sur", 1200, "Contenedor para residuos orgánicos", Active, 60, None, date!(2024 - 02 - 05)),
        ],
        sensors: vec![
            sensor(1, SensorType::Level, "Sensor ultrasónico de nivel de llenado", Active, 1, date!(2024 - 01 - 10)),
            sensor(2, SensorType::Temperature, "Sensor de temperatura ambiente", Active, 1, date!(2024 - 01 - 10)),
            sensor(3, SensorType::Level, "Sensor de nivel principal", Active, 2, date!(2024 - 01 - 15)),
            sensor(4, SensorType::Humidity, "Sensor de humedad relativa", Inactive, 3, date!(2024 - 02 - 01)),
            sensor(5, SensorType::Level, "Sensor ultrasónico avanzado", Active, 4, date!(2024 - 01 - 20)),
            sensor(6, SensorType::Weight, "Sensor de peso por carga", Active, 5, date!(2024 - 02 - 05)),
        ],
        logs: vec![
            log(1, datetime!(2024-03-15 08:00 UTC), 1, vec![1, 4], CollectionStatus::Completed, "Recolección normal, sin incidencias", "Juan Pérez", datetime!(2024-03-15 08:30 UTC)),
            log(2, datetime!(2024-03-15 09:30 UTC), 2, vec![2], CollectionStatus::Completed, "Contenedor en buen estado", "María García", datetime!(2024-03-15 10:00 UTC)),
            log(3, datetime!(2024-03-15 14:00 UTC), 1, vec![1], CollectionStatus::InProgress, "Recolección parcial, contenedor muy lleno", "Carlos López", datetime!(2024-03-15 14:15 UTC)),
            log(4, datetime!(2024-03-14 16:00 UTC), 2, vec![2, 5], CollectionStatus::Completed, "Ruta completada sin problemas", "Ana Martínez", datetime!(2024-03-14 17:00 UTC)),
            log(5, datetime!(2024-03-14 07:30 UTC), 3, vec![3], CollectionStatus::Cancelled, "Contenedor inaccesible por obras", "Pedro Sánchez", datetime!(2024-03-14 08:00 UTC)),
        ],
    }
}
