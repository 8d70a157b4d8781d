//! Resource kinds and the [`Resource`] trait shared by every cached record.

use core::fmt;
use core::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// The logical collections kept by the dashboard.
///
/// Each kind maps to exactly one collection in the local store. The
/// collection names are stable because they are persisted on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKind {
    /// Dashboard operators and drivers.
    User,
    /// Collection routes.
    Route,
    /// Street containers.
    Container,
    /// Sensors mounted on containers.
    Sensor,
    /// Collection log entries.
    CollectionLog,
    /// The singleton dashboard statistics snapshot.
    DashboardStats,
}

impl ResourceKind {
    /// All kinds, in dependency order (referenced kinds first).
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::User,
        ResourceKind::Route,
        ResourceKind::Container,
        ResourceKind::Sensor,
        ResourceKind::CollectionLog,
        ResourceKind::DashboardStats,
    ];

    /// Kinds whose records are keyed by an integer id.
    pub const RECORDS: [ResourceKind; 5] = [
        ResourceKind::User,
        ResourceKind::Route,
        ResourceKind::Container,
        ResourceKind::Sensor,
        ResourceKind::CollectionLog,
    ];

    /// Name of the backing collection.
    ///
    /// ```
    /// use wastesync_types::ResourceKind;
    ///
    /// assert_eq!(ResourceKind::CollectionLog.collection(), "collectionLogs");
    /// assert_eq!(ResourceKind::DashboardStats.collection(), "stats");
    /// ```
    #[must_use]
    pub fn collection(&self) -> &'static str {
        match self {
            ResourceKind::User => "users",
            ResourceKind::Route => "routes",
            ResourceKind::Container => "containers",
            ResourceKind::Sensor => "sensors",
            ResourceKind::CollectionLog => "collectionLogs",
            ResourceKind::DashboardStats => "stats",
        }
    }

    /// Whether this kind is the singleton snapshot rather than an id-keyed collection.
    #[must_use]
    pub fn is_snapshot(&self) -> bool {
        matches!(self, ResourceKind::DashboardStats)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ResourceKind::User => "user",
            ResourceKind::Route => "route",
            ResourceKind::Container => "container",
            ResourceKind::Sensor => "sensor",
            ResourceKind::CollectionLog => "collection-log",
            ResourceKind::DashboardStats => "dashboard-stats",
        };
        f.write_str(label)
    }
}

impl FromStr for ResourceKind {
    type Err = ParseError;

    /// Parse a kind from user input.
    ///
    /// Singular, plural and collection spellings are accepted, case-insensitively.
    ///
    /// ```
    /// use wastesync_types::ResourceKind;
    ///
    /// assert_eq!("containers".parse(), Ok(ResourceKind::Container));
    /// assert_eq!("collection-log".parse(), Ok(ResourceKind::CollectionLog));
    /// assert_eq!("collectionLogs".parse(), Ok(ResourceKind::CollectionLog));
    /// assert_eq!("stats".parse(), Ok(ResourceKind::DashboardStats));
    /// assert!("trucks".parse::<ResourceKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "user" | "users" => Ok(ResourceKind::User),
            "route" | "routes" => Ok(ResourceKind::Route),
            "container" | "containers" => Ok(ResourceKind::Container),
            "sensor" | "sensors" => Ok(ResourceKind::Sensor),
            "log" | "logs" | "collectionlog" | "collectionlogs" => Ok(ResourceKind::CollectionLog),
            "stats" | "dashboard" | "dashboardstats" => Ok(ResourceKind::DashboardStats),
            _ => Err(ParseError::UnknownResourceKind(s.to_string())),
        }
    }
}

/// A record that lives in an id-keyed collection.
///
/// The record's own `id` is its store key; there are no secondary indexes.
/// `Draft` is the payload accepted by a create operation, before an id has
/// been assigned.
pub trait Resource:
    Serialize + DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static
{
    /// Create payload for this resource.
    type Draft: Serialize + DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static;

    /// The collection this resource belongs to.
    const KIND: ResourceKind;

    /// Stable identifier, used as the store key.
    fn id(&self) -> i64;
}
