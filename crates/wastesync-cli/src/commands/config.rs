//! Config command - inspect or create the configuration file.

use std::path::Path;

use anyhow::{Result, bail};

use crate::cli::ConfigAction;
use crate::config::Config;
use crate::style;
use crate::util::{self, AppContext};

/// Execute the config command.
pub fn cmd_config(action: ConfigAction, path: &Path, ctx: &AppContext) -> Result<()> {
    let content = match action {
        ConfigAction::Path => format!("{}\n", path.display()),
        ConfigAction::Show => {
            if ctx.is_json() {
                ctx.opts.as_json(&ctx.config)?
            } else {
                toml::to_string_pretty(&ctx.config)?
            }
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                bail!(
                    "Config already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }
            Config::default().save(path)?;
            format!(
                "{}\n",
                style::format_success(
                    &format!("Wrote {}", path.display()),
                    ctx.opts.no_color
                )
            )
        }
    };

    util::write_output(ctx.output.as_ref(), &content)
}
