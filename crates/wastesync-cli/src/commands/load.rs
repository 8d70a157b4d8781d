//! Load command - read through the sync coordinator.

use anyhow::{Context, Result};
use serde::Serialize;
use wastesync_core::{InMemoryRemote, RemoteRepository};
use wastesync_types::{
    CollectionLog, Container, DashboardSnapshot, Resource, ResourceKind, Route, Sensor, TimeRange,
    User,
};

use crate::format::{Tabular, format_dashboard_text, format_records_text};
use crate::style;
use crate::util::{self, AppContext, Coordinator};

#[derive(Serialize)]
struct LoadOutput<'a, T: Serialize> {
    degraded: bool,
    records: &'a [T],
}

#[derive(Serialize)]
struct DashboardOutput<'a> {
    degraded: bool,
    snapshot: &'a DashboardSnapshot,
}

/// Execute the load command.
pub async fn cmd_load(kind: ResourceKind, range: Option<TimeRange>, ctx: &AppContext) -> Result<()> {
    let sync = ctx.coordinator()?;

    let content = match kind {
        ResourceKind::User => load_records::<User>(&sync, ctx).await?,
        ResourceKind::Route => load_records::<Route>(&sync, ctx).await?,
        ResourceKind::Container => load_records::<Container>(&sync, ctx).await?,
        ResourceKind::Sensor => load_records::<Sensor>(&sync, ctx).await?,
        ResourceKind::CollectionLog => load_records::<CollectionLog>(&sync, ctx).await?,
        ResourceKind::DashboardStats => {
            load_dashboard(&sync, ctx.config.resolve_range(range), ctx).await?
        }
    };

    util::write_output(ctx.output.as_ref(), &content)
}

async fn load_records<R>(sync: &Coordinator, ctx: &AppContext) -> Result<String>
where
    R: Resource + Tabular,
    InMemoryRemote: RemoteRepository<R>,
{
    let outcome = sync
        .load::<R>()
        .await
        .with_context(|| format!("Failed to load {}", R::KIND.collection()))?;

    if outcome.degraded {
        ctx.notice(&style::degraded_notice(ctx.opts.no_color));
    }

    if ctx.is_json() {
        ctx.opts.as_json(&LoadOutput {
            degraded: outcome.degraded,
            records: &outcome.records,
        })
    } else {
        Ok(format_records_text(&outcome.records, &ctx.opts))
    }
}

async fn load_dashboard(sync: &Coordinator, range: TimeRange, ctx: &AppContext) -> Result<String> {
    let outcome = sync
        .load_dashboard(range)
        .await
        .with_context(|| format!("Failed to load dashboard statistics for {}", range))?;

    if outcome.degraded {
        ctx.notice(&style::degraded_notice(ctx.opts.no_color));
    }

    if ctx.is_json() {
        ctx.opts.as_json(&DashboardOutput {
            degraded: outcome.degraded,
            snapshot: &outcome.snapshot,
        })
    } else {
        Ok(format_dashboard_text(&outcome.snapshot, &ctx.opts))
    }
}
