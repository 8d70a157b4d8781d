//! Dashboard statistics and the cached snapshot wrapper.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::ParseError;

/// Store key of the single retained dashboard snapshot.
pub const SNAPSHOT_KEY: &str = "main";

/// Time window the dashboard statistics are computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeRange {
    /// Last 24 hours.
    #[serde(rename = "24h")]
    Day,
    /// Last 7 days.
    #[default]
    #[serde(rename = "7d")]
    Week,
    /// Last 30 days.
    #[serde(rename = "30d")]
    Month,
    /// Last 90 days.
    #[serde(rename = "90d")]
    Quarter,
}

impl TimeRange {
    /// Number of daily points in the usage series for this range.
    ///
    /// ```
    /// use wastesync_types::TimeRange;
    ///
    /// assert_eq!(TimeRange::Day.days(), 1);
    /// assert_eq!(TimeRange::Quarter.days(), 90);
    /// ```
    #[must_use]
    pub fn days(&self) -> u32 {
        match self {
            TimeRange::Day => 1,
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::Quarter => 90,
        }
    }

    /// The label used on the wire and in the UI.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::Day => "24h",
            TimeRange::Week => "7d",
            TimeRange::Month => "30d",
            TimeRange::Quarter => "90d",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeRange {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "24h" => Ok(TimeRange::Day),
            "7d" => Ok(TimeRange::Week),
            "30d" => Ok(TimeRange::Month),
            "90d" => Ok(TimeRange::Quarter),
            other => Err(ParseError::UnknownTimeRange(other.to_string())),
        }
    }
}

/// Headline counters shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total_routes: u32,
    pub active_containers: u32,
    pub connected_sensors: u32,
    pub total_users: u32,
}

/// Capacity versus current usage of one route, in percent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteCapacity {
    pub name: String,
    pub capacity: u8,
    pub usage: u8,
}

/// One point of the container usage series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsagePoint {
    /// Display label of the day (e.g. `"Mar 15"`).
    pub day: String,
    pub usage: u8,
    pub collections: u32,
}

/// A recent collection shown in the activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentCollection {
    pub id: i64,
    pub route: String,
    pub container: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub status: String,
}

/// A latest sensor value shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReadingSummary {
    pub id: i64,
    pub sensor: String,
    #[serde(rename = "type")]
    pub sensor_type: String,
    pub value: f64,
    pub unit: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub status: String,
}

/// Slice of the container fill-level distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerStatusSlice {
    pub name: String,
    pub value: u32,
    pub color: String,
}

/// Aggregated statistics for the dashboard landing page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub summary: StatsSummary,
    #[serde(default)]
    pub route_capacity: Vec<RouteCapacity>,
    #[serde(default)]
    pub container_usage: Vec<UsagePoint>,
    #[serde(default)]
    pub recent_collections: Vec<RecentCollection>,
    #[serde(default)]
    pub sensor_readings: Vec<SensorReadingSummary>,
    #[serde(default)]
    pub container_status: Vec<ContainerStatusSlice>,
}

/// The cached dashboard statistics, valid only for the range they were computed for.
///
/// Only one snapshot is retained; it is stored under [`SNAPSHOT_KEY`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    /// Always [`SNAPSHOT_KEY`].
    #[serde(default = "snapshot_id")]
    pub id: String,
    pub time_range: TimeRange,
    /// When the statistics were fetched from the remote API.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub stats: DashboardStats,
}

fn snapshot_id() -> String {
    SNAPSHOT_KEY.to_string()
}

impl DashboardSnapshot {
    /// Stamp freshly fetched statistics with their range and the capture time.
    pub fn capture(time_range: TimeRange, stats: DashboardStats) -> Self {
        Self {
            id: snapshot_id(),
            time_range,
            timestamp: OffsetDateTime::now_utc(),
            stats,
        }
    }

    /// Whether this snapshot may be served for `requested`.
    ///
    /// Only an exact range match counts; a snapshot for another range is
    /// never considered approximately right.
    #[must_use]
    pub fn matches(&self, requested: TimeRange) -> bool {
        self.time_range == requested
    }
}
