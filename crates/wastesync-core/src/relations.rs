//! Building records from create payloads and joining their detail fields.
//!
//! Records carry denormalized "details" of the records they reference (a
//! container carries its route, a collection log its route and container
//! summaries). Both the remote API and an offline create fill them from
//! whatever related records they can see through a [`RelationLookup`].

use time::OffsetDateTime;
use tracing::debug;

use wastesync_store::Store;
use wastesync_types::{
    CollectionLog, Container, ContainerSummary, NewCollectionLog, NewContainer, NewRoute,
    NewSensor, NewUser, Resource, ResourceKind, Route, Sensor, User, UserSummary,
};

/// Read access to the records other records refer to.
pub trait RelationLookup {
    fn user(&self, id: i64) -> Option<User>;
    fn route(&self, id: i64) -> Option<Route>;
    fn container(&self, id: i64) -> Option<Container>;
}

/// The local cache as a relation source.
///
/// A storage failure counts as the relation being absent; a missing detail
/// never fails an offline create.
impl RelationLookup for Store {
    fn user(&self, id: i64) -> Option<User> {
        lookup(self, ResourceKind::User, id)
    }

    fn route(&self, id: i64) -> Option<Route> {
        lookup(self, ResourceKind::Route, id)
    }

    fn container(&self, id: i64) -> Option<Container> {
        lookup(self, ResourceKind::Container, id)
    }
}

fn lookup<T: serde::de::DeserializeOwned>(store: &Store, kind: ResourceKind, id: i64) -> Option<T> {
    match store.get(kind, id) {
        Ok(found) => found,
        Err(e) => {
            debug!("Treating {} {} as absent: {}", kind, id, e);
            None
        }
    }
}

/// A resource that can be built locally from its create payload.
pub trait Materialize: Resource {
    /// Build the record with the given id, dated now, details joined from `relations`.
    fn materialize(id: i64, draft: Self::Draft, relations: &dyn RelationLookup) -> Self;

    /// Recompute the joined detail fields.
    fn join(self, relations: &dyn RelationLookup) -> Self;
}

fn today() -> time::Date {
    OffsetDateTime::now_utc().date()
}

impl Materialize for User {
    fn materialize(id: i64, draft: NewUser, _relations: &dyn RelationLookup) -> Self {
        User {
            id,
            email: draft.email,
            name: draft.name,
            role: draft.role,
            status: draft.status,
            created_at: today(),
        }
    }

    fn join(self, _relations: &dyn RelationLookup) -> Self {
        self
    }
}

impl Materialize for Route {
    fn materialize(id: i64, draft: NewRoute, _relations: &dyn RelationLookup) -> Self {
        Route {
            id,
            name: draft.name,
            description: draft.description,
            status: draft.status,
            created_at: today(),
            assigned_users: Vec::new(),
            assigned_users_details: Vec::new(),
        }
    }

    fn join(mut self, relations: &dyn RelationLookup) -> Self {
        // Unknown users are dropped rather than listed as null.
        self.assigned_users_details = self
            .assigned_users
            .iter()
            .filter_map(|&id| relations.user(id))
            .map(|user| UserSummary::from(&user))
            .collect();
        self
    }
}

impl Materialize for Container {
    fn materialize(id: i64, draft: NewContainer, relations: &dyn RelationLookup) -> Self {
        Container {
            id,
            location: draft.location,
            capacity: draft.capacity,
            description: draft.description,
            status: draft.status,
            fill_level: 0,
            route_id: draft.route_id,
            created_at: today(),
            route_details: None,
        }
        .join(relations)
    }

    fn join(mut self, relations: &dyn RelationLookup) -> Self {
        self.route_details = self
            .route_id
            .and_then(|id| relations.route(id))
            .map(|route| route.without_details());
        self
    }
}

impl Materialize for Sensor {
    fn materialize(id: i64, draft: NewSensor, relations: &dyn RelationLookup) -> Self {
        Sensor {
            id,
            sensor_type: draft.sensor_type,
            description: draft.description,
            status: draft.status,
            container_id: draft.container_id,
            created_at: today(),
            container_details: None,
        }
        .join(relations)
    }

    fn join(mut self, relations: &dyn RelationLookup) -> Self {
        self.container_details = self
            .container_id
            .and_then(|id| relations.container(id))
            .map(|container| container.without_details());
        self
    }
}

impl Materialize for CollectionLog {
    fn materialize(id: i64, draft: NewCollectionLog, relations: &dyn RelationLookup) -> Self {
        CollectionLog {
            id,
            date: draft.date,
            route_id: draft.route_id,
            container_ids: draft.container_ids,
            status: draft.status,
            notes: draft.notes,
            collector_name: draft.collector_name,
            created_at: OffsetDateTime::now_utc(),
            route_details: None,
            container_details: Vec::new(),
        }
        .join(relations)
    }

    fn join(mut self, relations: &dyn RelationLookup) -> Self {
        self.route_details = relations
            .route(self.route_id)
            .map(|route| route.without_details());
        // One entry per id, None where the container is unknown.
        self.container_details = self
            .container_ids
            .iter()
            .map(|&id| relations.container(id).map(|c| ContainerSummary::from(&c)))
            .collect();
        self
    }
}
