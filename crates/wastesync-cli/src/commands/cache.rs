//! Cache command - inspect the local database directly.

use anyhow::{Context, Result};
use serde::Serialize;
use tabled::builder::Builder;
use time::format_description::well_known::Rfc3339;
use wastesync_store::Store;
use wastesync_types::{
    CollectionLog, Container, DashboardSnapshot, Resource, ResourceKind, Route, Sensor, User,
};

use crate::cli::CacheAction;
use crate::format::{Tabular, format_dashboard_text, format_records_text};
use crate::style;
use crate::util::{self, AppContext};

#[derive(Serialize)]
struct CollectionInfo {
    collection: &'static str,
    records: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_updated: Option<String>,
}

/// Execute the cache command.
pub fn cmd_cache(action: CacheAction, ctx: &AppContext) -> Result<()> {
    let store = ctx.open_store()?;

    let content = match action {
        CacheAction::Info => show_info(&store, ctx)?,
        CacheAction::List { kind } => match kind {
            ResourceKind::User => list_records::<User>(&store, ctx)?,
            ResourceKind::Route => list_records::<Route>(&store, ctx)?,
            ResourceKind::Container => list_records::<Container>(&store, ctx)?,
            ResourceKind::Sensor => list_records::<Sensor>(&store, ctx)?,
            ResourceKind::CollectionLog => list_records::<CollectionLog>(&store, ctx)?,
            ResourceKind::DashboardStats => show_snapshot(&store, ctx)?,
        },
        CacheAction::Clear { kind } => clear(&store, kind, ctx)?,
    };

    util::write_output(ctx.output.as_ref(), &content)
}

fn show_info(store: &Store, ctx: &AppContext) -> Result<String> {
    let stats = store.stats().context("Failed to read cache statistics")?;
    let rows: Vec<CollectionInfo> = stats
        .iter()
        .map(|s| CollectionInfo {
            collection: s.kind.collection(),
            records: s.records,
            last_updated: s.last_updated.and_then(|t| t.format(&Rfc3339).ok()),
        })
        .collect();

    if ctx.is_json() {
        return ctx.opts.as_json(&serde_json::json!({
            "path": ctx.db_path,
            "collections": rows,
        }));
    }

    let mut output = format!("Database path: {}\n", ctx.db_path.display());
    if let Ok(metadata) = std::fs::metadata(&ctx.db_path) {
        output.push_str(&format!("Database size: {} KB\n", metadata.len() / 1024));
    }

    let mut builder = Builder::default();
    builder.push_record(["Collection", "Records", "Last updated"]);
    for row in &rows {
        builder.push_record([
            row.collection.to_string(),
            row.records.to_string(),
            row.last_updated.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }
    let mut table = builder.build();
    style::apply_table_style(&mut table, ctx.opts.no_color);
    output.push_str(&format!("{}\n", table));
    Ok(output)
}

fn list_records<R: Resource + Tabular>(store: &Store, ctx: &AppContext) -> Result<String> {
    let records: Vec<R> = store
        .get_all(R::KIND)
        .with_context(|| format!("Failed to read cached {}", R::KIND.collection()))?;

    if ctx.is_json() {
        ctx.opts.as_json(&records)
    } else {
        Ok(format_records_text(&records, &ctx.opts))
    }
}

fn show_snapshot(store: &Store, ctx: &AppContext) -> Result<String> {
    let snapshot: Option<DashboardSnapshot> = store
        .get_snapshot()
        .context("Failed to read cached dashboard")?;

    match (snapshot, ctx.is_json()) {
        (Some(snapshot), true) => ctx.opts.as_json(&snapshot),
        (Some(snapshot), false) => Ok(format_dashboard_text(&snapshot, &ctx.opts)),
        (None, true) => ctx.opts.as_json(&serde_json::Value::Null),
        (None, false) => Ok("No dashboard snapshot cached.\n".to_string()),
    }
}

fn clear(store: &Store, kind: Option<ResourceKind>, ctx: &AppContext) -> Result<String> {
    let kinds: Vec<ResourceKind> = match kind {
        Some(kind) => vec![kind],
        None => ResourceKind::ALL.to_vec(),
    };

    let mut removed = 0;
    for kind in &kinds {
        removed += store
            .clear(*kind)
            .with_context(|| format!("Failed to clear {}", kind.collection()))?;
    }

    if ctx.is_json() {
        ctx.opts.as_json(&serde_json::json!({ "removed": removed }))
    } else {
        Ok(format!(
            "{}\n",
            style::format_success(
                &format!("Removed {} cached records", removed),
                ctx.opts.no_color
            )
        ))
    }
}
