//! Database schema and migrations.

use rusqlite::Connection;
use wastesync_types::ResourceKind;

use crate::error::Result;

/// Current schema version.
pub const SCHEMA_VERSION: i32 = 1;

/// Initialize the database schema.
///
/// Collections are only created when the stored version is behind
/// [`SCHEMA_VERSION`]; existing collections are never dropped.
pub fn initialize(conn: &Connection) -> Result<()> {
    let version = get_schema_version(conn)?;

    if version == 0 {
        create_schema_v1(conn)?;
        set_schema_version(conn, SCHEMA_VERSION)?;
    } else if version < SCHEMA_VERSION {
        migrate(conn, version)?;
    }

    Ok(())
}

/// Get the current schema version (0 for a fresh database).
pub(crate) fn get_schema_version(conn: &Connection) -> Result<i32> {
    let exists: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='schema_version'",
        [],
        |row| row.get(0),
    )?;

    if !exists {
        return Ok(0);
    }

    let version: i32 =
        conn.query_row("SELECT version FROM schema_version", [], |row| row.get(0))?;

    Ok(version)
}

fn set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO schema_version (id, version) VALUES (1, ?)",
        [version],
    )?;
    Ok(())
}

/// Quoted table name for a collection.
pub(crate) fn table(kind: ResourceKind) -> String {
    format!("\"{}\"", kind.collection())
}

/// Create the initial schema (version 1): one key/value table per collection.
fn create_schema_v1(conn: &Connection) -> Result<()> {
    let mut sql = String::from(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            version INTEGER NOT NULL
        );",
    );

    for kind in ResourceKind::ALL {
        sql.push_str(&format!(
            "CREATE TABLE IF NOT EXISTS {} (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            );",
            table(kind)
        ));
    }

    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(&sql)?;
    tx.commit()?;
    Ok(())
}

/// Run migrations from `old_version` to current.
fn migrate(conn: &Connection, old_version: i32) -> Result<()> {
    // Version 1 is the only schema so far; later versions add steps here.
    let _ = old_version;
    set_schema_version(conn, SCHEMA_VERSION)?;
    Ok(())
}
