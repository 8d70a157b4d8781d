//! Create, update, delete and assign commands - write through the sync coordinator.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use wastesync_core::{InMemoryRemote, Materialize, RemoteRepository};
use wastesync_types::{CollectionLog, Container, Resource, ResourceKind, Route, Sensor, User};

use crate::format::{Tabular, format_record_text};
use crate::style;
use crate::util::{self, AppContext, Coordinator};

#[derive(Serialize)]
struct WriteOutput<'a, T: Serialize> {
    pending_sync: bool,
    record: &'a T,
}

fn read_only(kind: ResourceKind) -> anyhow::Error {
    anyhow::anyhow!("{} is computed by the remote API and cannot be written", kind)
}

/// Execute the create command.
pub async fn cmd_create(kind: ResourceKind, data: &str, ctx: &AppContext) -> Result<()> {
    let sync = ctx.coordinator()?;

    let content = match kind {
        ResourceKind::User => create::<User>(&sync, data, ctx).await?,
        ResourceKind::Route => create::<Route>(&sync, data, ctx).await?,
        ResourceKind::Container => create::<Container>(&sync, data, ctx).await?,
        ResourceKind::Sensor => create::<Sensor>(&sync, data, ctx).await?,
        ResourceKind::CollectionLog => create::<CollectionLog>(&sync, data, ctx).await?,
        ResourceKind::DashboardStats => return Err(read_only(kind)),
    };

    util::write_output(ctx.output.as_ref(), &content)
}

/// Execute the update command.
pub async fn cmd_update(kind: ResourceKind, data: &str, ctx: &AppContext) -> Result<()> {
    let sync = ctx.coordinator()?;

    let content = match kind {
        ResourceKind::User => update::<User>(&sync, data, ctx).await?,
        ResourceKind::Route => update::<Route>(&sync, data, ctx).await?,
        ResourceKind::Container => update::<Container>(&sync, data, ctx).await?,
        ResourceKind::Sensor => update::<Sensor>(&sync, data, ctx).await?,
        ResourceKind::CollectionLog => update::<CollectionLog>(&sync, data, ctx).await?,
        ResourceKind::DashboardStats => return Err(read_only(kind)),
    };

    util::write_output(ctx.output.as_ref(), &content)
}

/// Execute the delete command.
pub async fn cmd_delete(kind: ResourceKind, id: i64, ctx: &AppContext) -> Result<()> {
    let sync = ctx.coordinator()?;

    match kind {
        ResourceKind::User => sync.delete::<User>(id).await,
        ResourceKind::Route => sync.delete::<Route>(id).await,
        ResourceKind::Container => sync.delete::<Container>(id).await,
        ResourceKind::Sensor => sync.delete::<Sensor>(id).await,
        ResourceKind::CollectionLog => sync.delete::<CollectionLog>(id).await,
        ResourceKind::DashboardStats => return Err(read_only(kind)),
    }
    .with_context(|| format!("Failed to delete {} {}", kind, id))?;

    let content = if ctx.is_json() {
        ctx.opts.as_json(&serde_json::json!({ "deleted": id, "kind": kind }))?
    } else {
        format!(
            "{}\n",
            style::format_success(&format!("Deleted {} {}", kind, id), ctx.opts.no_color)
        )
    };
    util::write_output(ctx.output.as_ref(), &content)
}

/// Execute the assign command.
pub async fn cmd_assign(route_id: i64, users: Vec<i64>, ctx: &AppContext) -> Result<()> {
    let sync = ctx.coordinator()?;
    let outcome = sync
        .assign_route_users(route_id, users)
        .await
        .with_context(|| format!("Failed to assign users to route {}", route_id))?;

    let content = render(&outcome.record, outcome.pending_sync, "Assigned users to", ctx)?;
    util::write_output(ctx.output.as_ref(), &content)
}

fn parse_payload<T: serde::de::DeserializeOwned>(kind: ResourceKind, data: &str) -> Result<T> {
    if data.trim().is_empty() {
        bail!("Empty --data payload for {}", kind);
    }
    serde_json::from_str(data).with_context(|| format!("Invalid JSON payload for {}", kind))
}

async fn create<R>(sync: &Coordinator, data: &str, ctx: &AppContext) -> Result<String>
where
    R: Materialize + Tabular,
    InMemoryRemote: RemoteRepository<R>,
{
    let draft: R::Draft = parse_payload(R::KIND, data)?;
    let outcome = sync
        .create::<R>(draft)
        .await
        .with_context(|| format!("Failed to create {}", R::KIND))?;

    if outcome.pending_sync {
        ctx.notice(&style::pending_notice(ctx.opts.no_color));
    }

    render(&outcome.record, outcome.pending_sync, "Created", ctx)
}

async fn update<R>(sync: &Coordinator, data: &str, ctx: &AppContext) -> Result<String>
where
    R: Resource + Tabular,
    InMemoryRemote: RemoteRepository<R>,
{
    let record: R = parse_payload(R::KIND, data)?;
    let id = record.id();
    let outcome = sync
        .update(record)
        .await
        .with_context(|| format!("Failed to update {} {}", R::KIND, id))?;

    render(&outcome.record, outcome.pending_sync, "Updated", ctx)
}

fn render<R: Resource + Tabular>(
    record: &R,
    pending_sync: bool,
    verb: &str,
    ctx: &AppContext,
) -> Result<String> {
    if ctx.is_json() {
        return ctx.opts.as_json(&WriteOutput {
            pending_sync,
            record,
        });
    }

    let headline = style::format_success(
        &format!("{} {} {}", verb, R::KIND, record.id()),
        ctx.opts.no_color,
    );
    Ok(format!("{}\n{}", headline, format_record_text(record, &ctx.opts)))
}
