//! Resource records for the waste-collection dashboard.
//!
//! Field names serialize in camelCase and enum values use the labels the
//! remote API speaks (`"activo"`, `"en_progreso"`, ...), so cached records are
//! byte-compatible with what the server returns.

use core::fmt;

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::resource::{Resource, ResourceKind};

time::serde::format_description!(calendar_date, Date, "[year]-[month]-[day]");

/// Role of a dashboard user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    /// Full administrative access.
    #[serde(rename = "ADMIN")]
    Admin,
    /// Regular operator.
    #[serde(rename = "USUARIO")]
    Staff,
    /// Truck driver assigned to routes.
    #[serde(rename = "CHOFER")]
    Driver,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Admin => write!(f, "Admin"),
            UserRole::Staff => write!(f, "Staff"),
            UserRole::Driver => write!(f, "Driver"),
        }
    }
}

/// Active/inactive flag used by users, containers and sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActivityStatus {
    #[default]
    #[serde(rename = "activo")]
    Active,
    #[serde(rename = "inactivo")]
    Inactive,
}

impl ActivityStatus {
    /// Returns `true` for [`ActivityStatus::Active`].
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, ActivityStatus::Active)
    }
}

/// Status of a collection route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RouteStatus {
    #[default]
    #[serde(rename = "activa")]
    Active,
    #[serde(rename = "inactiva")]
    Inactive,
}

/// Kind of measurement a sensor produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorType {
    /// Fill level, in percent.
    #[serde(rename = "nivel")]
    Level,
    /// Ambient temperature, in degrees Celsius.
    #[serde(rename = "temperatura")]
    Temperature,
    /// Relative humidity, in percent.
    #[serde(rename = "humedad")]
    Humidity,
    /// Load weight, in kilograms.
    #[serde(rename = "peso")]
    Weight,
}

impl SensorType {
    /// The label used on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorType::Level => "nivel",
            SensorType::Temperature => "temperatura",
            SensorType::Humidity => "humedad",
            SensorType::Weight => "peso",
        }
    }

    /// Unit of the values this sensor reports.
    #[must_use]
    pub fn unit(&self) -> &'static str {
        match self {
            SensorType::Level | SensorType::Humidity => "%",
            SensorType::Temperature => "°C",
            SensorType::Weight => "kg",
        }
    }
}

/// Outcome of a collection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CollectionStatus {
    #[serde(rename = "completada")]
    Completed,
    #[serde(rename = "en_progreso")]
    InProgress,
    #[default]
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "cancelada")]
    Cancelled,
}

impl CollectionStatus {
    /// The label used on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionStatus::Completed => "completada",
            CollectionStatus::InProgress => "en_progreso",
            CollectionStatus::Pending => "pendiente",
            CollectionStatus::Cancelled => "cancelada",
        }
    }
}

/// A dashboard user as returned by the remote API (never includes a password).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub status: ActivityStatus,
    #[serde(with = "calendar_date")]
    pub created_at: Date,
}

/// Payload for creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: UserRole,
    #[serde(default)]
    pub status: ActivityStatus,
}

/// Short user reference embedded in route listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub role: UserRole,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            role: user.role,
        }
    }
}

/// A collection route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub status: RouteStatus,
    #[serde(with = "calendar_date")]
    pub created_at: Date,
    #[serde(default)]
    pub assigned_users: Vec<i64>,
    /// Joined from the user list; absent users are skipped.
    #[serde(default)]
    pub assigned_users_details: Vec<UserSummary>,
}

impl Route {
    /// Copy of this route without joined detail fields.
    #[must_use]
    pub fn without_details(&self) -> Route {
        Route {
            assigned_users_details: Vec::new(),
            ..self.clone()
        }
    }
}

/// Payload for creating a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoute {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub status: RouteStatus,
}

/// A street container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub id: i64,
    pub location: String,
    /// Capacity in litres.
    pub capacity: u32,
    pub description: String,
    pub status: ActivityStatus,
    /// Fill level in percent (0-100).
    pub fill_level: u8,
    pub route_id: Option<i64>,
    #[serde(with = "calendar_date")]
    pub created_at: Date,
    /// The route this container belongs to, if any and if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_details: Option<Route>,
}

impl Container {
    /// Copy of this container without joined detail fields.
    #[must_use]
    pub fn without_details(&self) -> Container {
        Container {
            route_details: None,
            ..self.clone()
        }
    }
}

/// Payload for creating a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContainer {
    pub location: String,
    pub capacity: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: ActivityStatus,
    #[serde(default)]
    pub route_id: Option<i64>,
}

/// Short container reference embedded in collection logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSummary {
    pub id: i64,
    pub location: String,
}

impl From<&Container> for ContainerSummary {
    fn from(container: &Container) -> Self {
        Self {
            id: container.id,
            location: container.location.clone(),
        }
    }
}

/// A sensor mounted on a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sensor {
    pub id: i64,
    #[serde(rename = "type")]
    pub sensor_type: SensorType,
    pub description: String,
    pub status: ActivityStatus,
    pub container_id: Option<i64>,
    #[serde(with = "calendar_date")]
    pub created_at: Date,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_details: Option<Container>,
}

/// Payload for creating a sensor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSensor {
    #[serde(rename = "type")]
    pub sensor_type: SensorType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: ActivityStatus,
    #[serde(default)]
    pub container_id: Option<i64>,
}

/// A record of one collection run along a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionLog {
    pub id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub route_id: i64,
    pub container_ids: Vec<i64>,
    pub status: CollectionStatus,
    #[serde(default)]
    pub notes: String,
    pub collector_name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// The route as known when the log was listed or created.
    #[serde(default)]
    pub route_details: Option<Route>,
    /// One entry per container id; `None` where the container was unknown.
    #[serde(default)]
    pub container_details: Vec<Option<ContainerSummary>>,
}

/// Payload for creating a collection log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCollectionLog {
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub route_id: i64,
    #[serde(default)]
    pub container_ids: Vec<i64>,
    #[serde(default)]
    pub status: CollectionStatus,
    #[serde(default)]
    pub notes: String,
    pub collector_name: String,
}

impl Resource for User {
    type Draft = NewUser;
    const KIND: ResourceKind = ResourceKind::User;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Route {
    type Draft = NewRoute;
    const KIND: ResourceKind = ResourceKind::Route;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Container {
    type Draft = NewContainer;
    const KIND: ResourceKind = ResourceKind::Container;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for Sensor {
    type Draft = NewSensor;
    const KIND: ResourceKind = ResourceKind::Sensor;

    fn id(&self) -> i64 {
        self.id
    }
}

impl Resource for CollectionLog {
    type Draft = NewCollectionLog;
    const KIND: ResourceKind = ResourceKind::CollectionLog;

    fn id(&self) -> i64 {
        self.id
    }
}
