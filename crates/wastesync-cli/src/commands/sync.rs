//! Sync command - refresh every collection and report where the data came from.

use anyhow::{Result, bail};
use tracing::info;

use crate::format::{format_refresh_text, refresh_rows};
use crate::style;
use crate::util::{self, AppContext};

/// Execute the sync command.
pub async fn cmd_sync(ctx: &AppContext) -> Result<()> {
    let sync = ctx.coordinator()?;

    let report = sync.refresh_all().await;
    let failed = report.iter().filter(|e| e.result.is_err()).count();
    let degraded = report
        .iter()
        .filter(|e| e.result.as_ref().is_ok_and(|s| s.degraded))
        .count();
    info!(
        "Refreshed {} collections ({} from cache, {} failed)",
        report.len(),
        degraded,
        failed
    );

    let content = if ctx.is_json() {
        ctx.opts.as_json(&refresh_rows(&report))?
    } else {
        format_refresh_text(&report, &ctx.opts)
    };
    util::write_output(ctx.output.as_ref(), &content)?;

    if degraded > 0 {
        ctx.notice(&style::degraded_notice(ctx.opts.no_color));
    }
    if failed == report.len() {
        bail!("No data available: the remote API is unreachable and the cache is empty");
    }
    Ok(())
}
