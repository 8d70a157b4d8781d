//! Command implementations for the CLI.

mod cache;
mod config;
mod load;
mod sync;
mod write;

pub use cache::cmd_cache;
pub use config::cmd_config;
pub use load::cmd_load;
pub use sync::cmd_sync;
pub use write::{cmd_assign, cmd_create, cmd_delete, cmd_update};
