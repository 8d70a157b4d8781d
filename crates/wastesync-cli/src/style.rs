//! Visual styling utilities for the CLI.

use owo_colors::OwoColorize;
use tabled::Table;
use tabled::settings::Style;

use wastesync_types::{ActivityStatus, CollectionStatus, RouteStatus};

/// Format a success message.
pub fn format_success(message: &str, no_color: bool) -> String {
    if no_color {
        format!("[OK] {}", message)
    } else {
        format!("{} {}", "[OK]".green(), message)
    }
}

/// Format an info message.
pub fn format_info(message: &str, no_color: bool) -> String {
    if no_color {
        format!("[--] {}", message)
    } else {
        format!("{} {}", "[--]".cyan(), message)
    }
}

/// Format a warning message.
pub fn format_warning(message: &str, no_color: bool) -> String {
    if no_color {
        format!("[!!] {}", message)
    } else {
        format!("{} {}", "[!!]".yellow(), message)
    }
}

/// Format a title header.
pub fn format_title(title: &str, no_color: bool) -> String {
    let rule = "━".repeat(title.chars().count());
    if no_color {
        format!("{}\n{}", title, rule)
    } else {
        format!("{}\n{}", title.bold(), rule.dimmed())
    }
}

/// The notice shown above records served from the local cache.
pub fn degraded_notice(no_color: bool) -> String {
    format_warning(
        "Showing cached data: the remote API is unreachable",
        no_color,
    )
}

/// The notice shown after a write that only reached the local cache.
pub fn pending_notice(no_color: bool) -> String {
    format_info(
        "Saved locally; pending sync with the remote API",
        no_color,
    )
}

/// Color a fill level by how close the container is to full.
pub fn format_fill_level(percent: u8, no_color: bool) -> String {
    let text = format!("{}%", percent);
    if no_color {
        text
    } else if percent >= 85 {
        format!("{}", text.red())
    } else if percent >= 60 {
        format!("{}", text.yellow())
    } else {
        format!("{}", text.green())
    }
}

pub fn format_activity(status: ActivityStatus, no_color: bool) -> String {
    let label = if status.is_active() { "activo" } else { "inactivo" };
    paint_active(label, status.is_active(), no_color)
}

pub fn format_route_status(status: RouteStatus, no_color: bool) -> String {
    let active = status == RouteStatus::Active;
    paint_active(if active { "activa" } else { "inactiva" }, active, no_color)
}

pub fn format_collection_status(status: CollectionStatus, no_color: bool) -> String {
    let label = status.as_str();
    if no_color {
        return label.to_string();
    }
    match status {
        CollectionStatus::Completed => format!("{}", label.green()),
        CollectionStatus::InProgress => format!("{}", label.cyan()),
        CollectionStatus::Pending => format!("{}", label.yellow()),
        CollectionStatus::Cancelled => format!("{}", label.dimmed()),
    }
}

fn paint_active(label: &str, active: bool, no_color: bool) -> String {
    if no_color {
        label.to_string()
    } else if active {
        format!("{}", label.green())
    } else {
        format!("{}", label.dimmed())
    }
}

/// Apply the table style for the color mode.
pub fn apply_table_style(table: &mut Table, no_color: bool) {
    if no_color {
        table.with(Style::ascii());
    } else {
        table.with(Style::rounded());
    }
}
