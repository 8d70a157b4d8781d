//! Output formatting utilities for text and JSON output.

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::builder::Builder;
use time::OffsetDateTime;
use time::macros::format_description;

use wastesync_core::RefreshEntry;
use wastesync_types::{CollectionLog, Container, DashboardSnapshot, Route, Sensor, User};

use crate::style;

/// Formatting options for output.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Disable colored output.
    pub no_color: bool,
    /// Use compact JSON output (no pretty-printing).
    pub compact: bool,
}

impl FormatOptions {
    pub fn new(no_color: bool) -> Self {
        Self {
            no_color,
            compact: false,
        }
    }

    /// Create with compact JSON option.
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Serialize value to JSON string, respecting compact option.
    pub fn as_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.compact {
            serde_json::to_string(value)?
        } else {
            serde_json::to_string_pretty(value)?
        };
        Ok(json + "\n")
    }
}

fn format_timestamp(ts: OffsetDateTime) -> String {
    ts.format(format_description!("[year]-[month]-[day] [hour]:[minute]"))
        .unwrap_or_else(|_| "Unknown".to_string())
}

fn or_dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

/// A record that can be shown as one table row.
pub trait Tabular {
    /// Table title.
    const TITLE: &'static str;

    fn headers() -> Vec<&'static str>;

    fn row(&self, opts: &FormatOptions) -> Vec<String>;
}

impl Tabular for User {
    const TITLE: &'static str = "Users";

    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Email", "Role", "Status", "Created"]
    }

    fn row(&self, opts: &FormatOptions) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.role.to_string(),
            style::format_activity(self.status, opts.no_color),
            self.created_at.to_string(),
        ]
    }
}

impl Tabular for Route {
    const TITLE: &'static str = "Routes";

    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Status", "Assigned", "Created"]
    }

    fn row(&self, opts: &FormatOptions) -> Vec<String> {
        // Fall back to bare ids when the user details were not joined.
        let assigned = if self.assigned_users_details.is_empty() {
            self.assigned_users
                .iter()
                .map(|id| format!("#{}", id))
                .collect::<Vec<_>>()
                .join(", ")
        } else {
            self.assigned_users_details
                .iter()
                .map(|u| u.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        vec![
            self.id.to_string(),
            self.name.clone(),
            style::format_route_status(self.status, opts.no_color),
            or_dash(Some(assigned).filter(|a| !a.is_empty())),
            self.created_at.to_string(),
        ]
    }
}

impl Tabular for Container {
    const TITLE: &'static str = "Containers";

    fn headers() -> Vec<&'static str> {
        vec!["ID", "Location", "Capacity", "Fill", "Route", "Status"]
    }

    fn row(&self, opts: &FormatOptions) -> Vec<String> {
        let route = self
            .route_details
            .as_ref()
            .map(|r| r.name.clone())
            .or_else(|| self.route_id.map(|id| format!("#{}", id)));
        vec![
            self.id.to_string(),
            self.location.clone(),
            format!("{} L", self.capacity),
            style::format_fill_level(self.fill_level, opts.no_color),
            or_dash(route),
            style::format_activity(self.status, opts.no_color),
        ]
    }
}

impl Tabular for Sensor {
    const TITLE: &'static str = "Sensors";

    fn headers() -> Vec<&'static str> {
        vec!["ID", "Type", "Description", "Container", "Status"]
    }

    fn row(&self, opts: &FormatOptions) -> Vec<String> {
        let container = self
            .container_details
            .as_ref()
            .map(|c| c.location.clone())
            .or_else(|| self.container_id.map(|id| format!("#{}", id)));
        vec![
            self.id.to_string(),
            self.sensor_type.as_str().to_string(),
            self.description.clone(),
            or_dash(container),
            style::format_activity(self.status, opts.no_color),
        ]
    }
}

impl Tabular for CollectionLog {
    const TITLE: &'static str = "Collection logs";

    fn headers() -> Vec<&'static str> {
        vec!["ID", "Date", "Route", "Containers", "Collector", "Status"]
    }

    fn row(&self, opts: &FormatOptions) -> Vec<String> {
        let route = self
            .route_details
            .as_ref()
            .map_or_else(|| format!("#{}", self.route_id), |r| r.name.clone());
        let containers = self
            .container_ids
            .iter()
            .zip(self.container_details.iter().map(Some).chain(std::iter::repeat(None)))
            .map(|(id, details)| match details {
                Some(Some(summary)) => summary.location.clone(),
                _ => format!("#{}", id),
            })
            .collect::<Vec<_>>()
            .join("; ");
        vec![
            self.id.to_string(),
            format_timestamp(self.date),
            route,
            or_dash(Some(containers).filter(|c| !c.is_empty())),
            or_dash(Some(self.collector_name.clone()).filter(|c| !c.is_empty())),
            style::format_collection_status(self.status, opts.no_color),
        ]
    }
}

// ============================================================================
// Record formatting
// ============================================================================

#[must_use]
pub fn format_records_text<R: Tabular>(records: &[R], opts: &FormatOptions) -> String {
    if records.is_empty() {
        return format!("No {} found.\n", R::TITLE.to_lowercase());
    }

    let mut builder = Builder::default();
    builder.push_record(R::headers());
    for record in records {
        builder.push_record(record.row(opts));
    }

    let mut table = builder.build();
    style::apply_table_style(&mut table, opts.no_color);

    let title = format!("{} ({})", R::TITLE, records.len());
    format!("{}\n{}\n", style::format_title(&title, opts.no_color), table)
}

#[must_use]
pub fn format_record_text<R: Tabular>(record: &R, opts: &FormatOptions) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (header, value) in R::headers().into_iter().zip(record.row(opts)) {
        builder.push_record([header.to_string(), value]);
    }
    let mut table = builder.build();
    style::apply_table_style(&mut table, opts.no_color);
    format!("{}\n", table)
}

// ============================================================================
// Dashboard formatting
// ============================================================================

#[must_use]
pub fn format_dashboard_text(snapshot: &DashboardSnapshot, opts: &FormatOptions) -> String {
    let stats = &snapshot.stats;
    let mut output = style::format_title(
        &format!("Dashboard ({})", snapshot.time_range),
        opts.no_color,
    );
    output.push('\n');
    output.push_str(&format!("Captured: {}\n\n", format_timestamp(snapshot.timestamp)));

    let mut summary = Builder::default();
    summary.push_record(["Active routes", "Active containers", "Connected sensors", "Active users"]);
    summary.push_record([
        stats.summary.total_routes.to_string(),
        stats.summary.active_containers.to_string(),
        stats.summary.connected_sensors.to_string(),
        stats.summary.total_users.to_string(),
    ]);
    let mut table = summary.build();
    style::apply_table_style(&mut table, opts.no_color);
    output.push_str(&format!("{}\n", table));

    if !stats.route_capacity.is_empty() {
        let mut routes = Builder::default();
        routes.push_record(["Route", "Capacity", "Usage"]);
        for route in &stats.route_capacity {
            routes.push_record([
                route.name.clone(),
                format!("{}%", route.capacity),
                style::format_fill_level(route.usage, opts.no_color),
            ]);
        }
        let mut table = routes.build();
        style::apply_table_style(&mut table, opts.no_color);
        output.push_str(&format!("\nRoute capacity\n{}\n", table));
    }

    if !stats.recent_collections.is_empty() {
        let mut recent = Builder::default();
        recent.push_record(["ID", "Route", "Container", "When", "Status"]);
        for c in &stats.recent_collections {
            recent.push_record([
                c.id.to_string(),
                c.route.clone(),
                c.container.clone(),
                format_timestamp(c.timestamp),
                c.status.clone(),
            ]);
        }
        let mut table = recent.build();
        style::apply_table_style(&mut table, opts.no_color);
        output.push_str(&format!("\nRecent collections\n{}\n", table));
    }

    if !stats.sensor_readings.is_empty() {
        let mut readings = Builder::default();
        readings.push_record(["Sensor", "Type", "Value", "Status"]);
        for r in &stats.sensor_readings {
            let status = if r.status == "normal" || opts.no_color {
                r.status.clone()
            } else {
                format!("{}", r.status.red())
            };
            readings.push_record([
                r.sensor.clone(),
                r.sensor_type.clone(),
                format!("{} {}", r.value, r.unit),
                status,
            ]);
        }
        let mut table = readings.build();
        style::apply_table_style(&mut table, opts.no_color);
        output.push_str(&format!("\nSensor readings\n{}\n", table));
    }

    if !stats.container_status.is_empty() {
        let breakdown = stats
            .container_status
            .iter()
            .map(|s| format!("{}: {}", s.name, s.value))
            .collect::<Vec<_>>()
            .join("  ");
        output.push_str(&format!("\nContainer fill: {}\n", breakdown));
    }

    output
}

// ============================================================================
// Sync report formatting
// ============================================================================

/// One line of the sync report, as printed in JSON mode.
#[derive(Debug, Serialize)]
pub struct RefreshRow {
    pub collection: &'static str,
    pub records: Option<usize>,
    pub degraded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[must_use]
pub fn refresh_rows(entries: &[RefreshEntry]) -> Vec<RefreshRow> {
    entries
        .iter()
        .map(|entry| match &entry.result {
            Ok(summary) => RefreshRow {
                collection: entry.kind.collection(),
                records: Some(summary.records),
                degraded: summary.degraded,
                error: None,
            },
            Err(e) => RefreshRow {
                collection: entry.kind.collection(),
                records: None,
                degraded: true,
                error: Some(e.to_string()),
            },
        })
        .collect()
}

#[must_use]
pub fn format_refresh_text(entries: &[RefreshEntry], opts: &FormatOptions) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Collection", "Records", "Source"]);
    for entry in entries {
        let (records, source) = match &entry.result {
            Ok(summary) if summary.degraded => {
                (summary.records.to_string(), cached_label(opts.no_color))
            }
            Ok(summary) => (summary.records.to_string(), "remote".to_string()),
            Err(e) => ("-".to_string(), e.to_string()),
        };
        builder.push_record([entry.kind.collection().to_string(), records, source]);
    }
    let mut table = builder.build();
    style::apply_table_style(&mut table, opts.no_color);
    format!("{}\n", table)
}

fn cached_label(no_color: bool) -> String {
    if no_color {
        "cache".to_string()
    } else {
        format!("{}", "cache".yellow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};
    use wastesync_types::{ActivityStatus, CollectionStatus, ContainerSummary};

    fn plain() -> FormatOptions {
        FormatOptions::new(true)
    }

    fn container(id: i64, route_id: Option<i64>) -> Container {
        Container {
            id,
            location: "Av. Reforma #123, Centro".to_string(),
            capacity: 1000,
            description: String::new(),
            status: ActivityStatus::Active,
            fill_level: 75,
            route_id,
            created_at: date!(2024 - 01 - 10),
            route_details: None,
        }
    }

    #[test]
    fn test_records_table_has_title_and_rows() {
        let text = format_records_text(&[container(1, Some(1)), container(2, None)], &plain());
        assert!(text.starts_with("Containers (2)"));
        assert!(text.contains("Av. Reforma #123, Centro"));
        assert!(text.contains("75%"));
        assert!(text.contains("#1"));
    }

    #[test]
    fn test_empty_records() {
        let text = format_records_text::<Sensor>(&[], &plain());
        assert_eq!(text, "No sensors found.\n");
    }

    #[test]
    fn test_log_row_marks_unknown_containers() {
        let log = CollectionLog {
            id: 7,
            date: datetime!(2024-03-16 08:00 UTC),
            route_id: 9,
            container_ids: vec![1, 42],
            status: CollectionStatus::Pending,
            notes: String::new(),
            collector_name: String::new(),
            created_at: datetime!(2024-03-16 08:05 UTC),
            route_details: None,
            container_details: vec![
                Some(ContainerSummary {
                    id: 1,
                    location: "Centro".to_string(),
                }),
                None,
            ],
        };
        let row = log.row(&plain());
        assert_eq!(row[1], "2024-03-16 08:00");
        assert_eq!(row[2], "#9");
        assert_eq!(row[3], "Centro; #42");
        assert_eq!(row[4], "-");
        assert_eq!(row[5], "pendiente");
    }

    #[test]
    fn test_compact_json() {
        let opts = plain().with_compact(true);
        let json = opts.as_json(&serde_json::json!({"a": 1})).unwrap();
        assert_eq!(json, "{\"a\":1}\n");
    }
}
