//! Trait abstractions for the remote dashboard API.
//!
//! The coordinator never talks to a concrete server; it is generic over
//! [`RemoteApi`], which bundles one [`RemoteRepository`] per resource type,
//! the [`DashboardSource`] and [`RouteAssignment`]. [`InMemoryRemote`](crate::mock::InMemoryRemote)
//! implements all of them for tests and for the command-line front end.

use async_trait::async_trait;
use thiserror::Error;

use wastesync_types::{
    CollectionLog, Container, DashboardStats, Resource, ResourceKind, Route, Sensor, TimeRange,
    User,
};

/// Failure reported by the remote API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RemoteError {
    /// The API could not be reached or failed internally.
    #[error("remote API unavailable: {0}")]
    Unavailable(String),

    /// The targeted id does not exist.
    #[error("{kind} {id} not found")]
    NotFound { kind: ResourceKind, id: i64 },

    /// The request was refused, with a human-readable message.
    #[error("{0}")]
    Rejected(String),
}

/// Result type for remote API calls.
pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

/// CRUD endpoints of one resource type.
///
/// # Example
///
/// ```ignore
/// use wastesync_core::RemoteRepository;
/// use wastesync_types::Container;
///
/// async fn count_containers<A: RemoteRepository<Container>>(api: &A) -> usize {
///     api.list().await.map(|c| c.len()).unwrap_or(0)
/// }
/// ```
#[async_trait]
pub trait RemoteRepository<R: Resource>: Send + Sync {
    /// All records, with their joined detail fields.
    async fn list(&self) -> RemoteResult<Vec<R>>;

    /// Create a record; the server assigns the id.
    async fn create(&self, draft: R::Draft) -> RemoteResult<R>;

    /// Replace the editable fields of an existing record and return the result.
    async fn update(&self, record: R) -> RemoteResult<R>;

    /// Remove a record.
    async fn delete(&self, id: i64) -> RemoteResult<()>;
}

/// Source of aggregated dashboard statistics.
#[async_trait]
pub trait DashboardSource: Send + Sync {
    /// Statistics computed for the given time range.
    async fn dashboard_stats(&self, range: TimeRange) -> RemoteResult<DashboardStats>;
}

/// Crew assignment for routes.
#[async_trait]
pub trait RouteAssignment: Send + Sync {
    /// Replace the users assigned to a route and return the joined route.
    async fn assign_users(&self, route_id: i64, user_ids: Vec<i64>) -> RemoteResult<Route>;
}

/// The complete remote API consumed by the sync coordinator.
///
/// Implemented automatically for any type providing every repository and
/// the dashboard source.
pub trait RemoteApi:
    RemoteRepository<User>
    + RemoteRepository<Route>
    + RemoteRepository<Container>
    + RemoteRepository<Sensor>
    + RemoteRepository<CollectionLog>
    + DashboardSource
    + RouteAssignment
    + 'static
{
}

impl<T> RemoteApi for T where
    T: RemoteRepository<User>
        + RemoteRepository<Route>
        + RemoteRepository<Container>
        + RemoteRepository<Sensor>
        + RemoteRepository<CollectionLog>
        + DashboardSource
        + RouteAssignment
        + 'static
{
}
