//! Resource record types for the SmartWaste offline cache.
//!
//! This crate holds the records the dashboard reads and writes (users,
//! routes, containers, sensors, collection logs and the dashboard statistics
//! snapshot), shared by the local store and the sync coordinator.
//!
//! # Features
//!
//! - Records serialize exactly like the remote API payloads
//! - [`ResourceKind`] names the collection each record lives in
//! - [`Resource`] ties a record type to its kind, key and create payload
//!
//! # Example
//!
//! ```
//! use wastesync_types::{Container, Resource, ResourceKind};
//!
//! assert_eq!(Container::KIND, ResourceKind::Container);
//! assert_eq!(Container::KIND.collection(), "containers");
//! ```

pub mod dashboard;
pub mod error;
pub mod resource;
pub mod types;

pub use dashboard::{
    ContainerStatusSlice, DashboardSnapshot, DashboardStats, RecentCollection, RouteCapacity,
    SNAPSHOT_KEY, SensorReadingSummary, StatsSummary, TimeRange, UsagePoint,
};
pub use error::{ParseError, ParseResult};
pub use resource::{Resource, ResourceKind};
pub use types::{
    ActivityStatus, CollectionLog, CollectionStatus, Container, ContainerSummary, NewCollectionLog,
    NewContainer, NewRoute, NewSensor, NewUser, Route, RouteStatus, Sensor, SensorType, User,
    UserRole, UserSummary,
};

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    fn sample_route() -> Route {
        Route {
            id: 1,
            name: "Ruta Centro".to_string(),
            description: "Centro histórico".to_string(),
            status: RouteStatus::Active,
            created_at: date!(2024 - 01 - 10),
            assigned_users: vec![2, 3],
            assigned_users_details: vec![],
        }
    }

    // --- ResourceKind tests ---

    #[test]
    fn test_resource_kind_collections_are_distinct() {
        let mut names: Vec<_> = ResourceKind::ALL.iter().map(|k| k.collection()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ResourceKind::ALL.len());
    }

    #[test]
    fn test_resource_kind_parse_variants() {
        assert_eq!("user".parse(), Ok(ResourceKind::User));
        assert_eq!("Routes".parse(), Ok(ResourceKind::Route));
        assert_eq!("collection_logs".parse(), Ok(ResourceKind::CollectionLog));
        assert_eq!("dashboard-stats".parse(), Ok(ResourceKind::DashboardStats));

        let err = "bins".parse::<ResourceKind>().unwrap_err();
        assert_eq!(err, ParseError::UnknownResourceKind("bins".to_string()));
    }

    #[test]
    fn test_resource_kind_display_roundtrips_through_parse() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.to_string().parse::<ResourceKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_only_stats_is_snapshot() {
        assert!(ResourceKind::DashboardStats.is_snapshot());
        assert!(ResourceKind::RECORDS.iter().all(|k| !k.is_snapshot()));
    }

    // --- TimeRange tests ---

    #[test]
    fn test_time_range_parse() {
        assert_eq!("30d".parse(), Ok(TimeRange::Month));
        assert_eq!(" 24h ".parse(), Ok(TimeRange::Day));
        assert!("1y".parse::<TimeRange>().is_err());
        assert_eq!(TimeRange::default(), TimeRange::Week);
    }

    #[test]
    fn test_time_range_serializes_as_label() {
        assert_eq!(serde_json::to_string(&TimeRange::Week).unwrap(), "\"7d\"");
        assert_eq!(serde_json::to_string(&TimeRange::Quarter).unwrap(), "\"90d\"");
    }

    // --- Snapshot tests ---

    #[test]
    fn test_snapshot_matches_exact_range_only() {
        let snapshot = DashboardSnapshot::capture(TimeRange::Week, DashboardStats::default());
        assert!(snapshot.matches(TimeRange::Week));
        assert!(!snapshot.matches(TimeRange::Month));
        assert!(!snapshot.matches(TimeRange::Day));
        assert_eq!(snapshot.id, SNAPSHOT_KEY);
    }

    #[test]
    fn test_snapshot_without_id_defaults_to_singleton_key() {
        let json = r#"{"timeRange":"7d","timestamp":"2024-03-15T10:30:00Z","stats":{"summary":{"totalRoutes":3,"activeContainers":4,"connectedSensors":5,"totalUsers":4}}}"#;
        let snapshot: DashboardSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.id, SNAPSHOT_KEY);
        assert_eq!(snapshot.stats.summary.total_routes, 3);
    }

    #[test]
    fn test_snapshot_serialization_uses_camel_case() {
        let snapshot = DashboardSnapshot {
            id: SNAPSHOT_KEY.to_string(),
            time_range: TimeRange::Day,
            timestamp: datetime!(2024-03-15 10:30:00 UTC),
            stats: DashboardStats::default(),
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"id\":\"main\""));
        assert!(json.contains("\"timeRange\":\"24h\""));
        assert!(json.contains("\"timestamp\":\"2024-03-15T10:30:00Z\""));
        assert!(json.contains("\"totalRoutes\":0"));
    }

    // --- Record serialization tests ---

    #[test]
    fn test_container_wire_format() {
        let json = r#"{
            "id": 1,
            "location": "Av. Reforma #123, Centro",
            "capacity": 1000,
            "description": "Contenedor principal",
            "status": "activo",
            "fillLevel": 75,
            "routeId": 1,
            "createdAt": "2024-01-10"
        }"#;

        let container: Container = serde_json::from_str(json).unwrap();
        assert_eq!(container.id, 1);
        assert_eq!(container.fill_level, 75);
        assert_eq!(container.route_id, Some(1));
        assert_eq!(container.created_at, date!(2024 - 01 - 10));
        assert!(container.route_details.is_none());

        let out = serde_json::to_string(&container).unwrap();
        assert!(out.contains("\"createdAt\":\"2024-01-10\""));
        assert!(out.contains("\"fillLevel\":75"));
        assert!(!out.contains("routeDetails"));
    }

    #[test]
    fn test_user_role_labels() {
        assert_eq!(serde_json::to_string(&UserRole::Driver).unwrap(), "\"CHOFER\"");
        assert_eq!(serde_json::to_string(&UserRole::Staff).unwrap(), "\"USUARIO\"");
        let role: UserRole = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }

    #[test]
    fn test_collection_status_labels() {
        let status: CollectionStatus = serde_json::from_str("\"en_progreso\"").unwrap();
        assert_eq!(status, CollectionStatus::InProgress);
        assert_eq!(
            serde_json::to_string(&CollectionStatus::Cancelled).unwrap(),
            "\"cancelada\""
        );
    }

    #[test]
    fn test_sensor_type_field_is_named_type() {
        let sensor = Sensor {
            id: 4,
            sensor_type: SensorType::Humidity,
            description: "Sensor de humedad relativa".to_string(),
            status: ActivityStatus::Inactive,
            container_id: Some(3),
            created_at: date!(2024 - 02 - 01),
            container_details: None,
        };
        let json = serde_json::to_string(&sensor).unwrap();
        assert!(json.contains("\"type\":\"humedad\""));
        assert!(json.contains("\"status\":\"inactivo\""));
        assert_eq!(SensorType::Humidity.unit(), "%");
    }

    #[test]
    fn test_collection_log_draft_defaults() {
        let json = r#"{"date":"2024-03-15T08:00:00Z","routeId":1,"collectorName":"Juan Pérez"}"#;
        let draft: NewCollectionLog = serde_json::from_str(json).unwrap();
        assert_eq!(draft.route_id, 1);
        assert!(draft.container_ids.is_empty());
        assert_eq!(draft.status, CollectionStatus::Pending);
        assert!(draft.notes.is_empty());
    }

    #[test]
    fn test_route_without_details() {
        let mut route = sample_route();
        route.assigned_users_details.push(UserSummary {
            id: 2,
            name: "Lemuel Lira".to_string(),
            role: UserRole::Staff,
        });
        let bare = route.without_details();
        assert!(bare.assigned_users_details.is_empty());
        assert_eq!(bare.assigned_users, vec![2, 3]);
    }

    #[test]
    fn test_resource_ids() {
        let route = sample_route();
        assert_eq!(Resource::id(&route), 1);
        assert_eq!(<Route as Resource>::KIND, ResourceKind::Route);
        assert_eq!(<CollectionLog as Resource>::KIND.collection(), "collectionLogs");
    }
}
