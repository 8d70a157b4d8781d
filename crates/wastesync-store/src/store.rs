//! Main store implementation.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rusqlite::{Connection, OptionalExtension};
use serde::Serialize;
use serde::de::DeserializeOwned;
use time::OffsetDateTime;
use tracing::{debug, info};

use wastesync_types::{DashboardSnapshot, Resource, ResourceKind};

use crate::error::{Error, Result};
use crate::models::{CollectionStats, RecordKey};
use crate::schema;

/// Where the database lives.
#[derive(Debug, Clone)]
enum Location {
    File(PathBuf),
    Memory,
}

impl Location {
    fn connect(&self) -> Result<Connection> {
        let conn = match self {
            Location::File(path) => {
                if let Some(parent) = path.parent()
                    && !parent.as_os_str().is_empty()
                    && !parent.exists()
                {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        Error::unavailable(format!(
                            "cannot create database directory {}: {}",
                            parent.display(),
                            e
                        ))
                    })?;
                }

                info!("Opening local cache at {}", path.display());
                let conn = Connection::open(path)?;
                conn.execute_batch(
                    "PRAGMA journal_mode = WAL;
                     PRAGMA synchronous = NORMAL;",
                )?;
                conn
            }
            Location::Memory => Connection::open_in_memory()?,
        };

        schema::initialize(&conn)?;
        Ok(conn)
    }
}

/// SQLite-backed keyed store with one collection per [`ResourceKind`].
///
/// The connection is opened lazily by [`Store::init`], which every operation
/// calls first; once open, the same connection is reused for the lifetime of
/// the store. If opening fails, each call reports
/// [`Error::StorageUnavailable`] and the next call tries again.
pub struct Store {
    location: Location,
    conn: Mutex<Option<Connection>>,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = self.conn.lock().map(|c| c.is_some()).unwrap_or(false);
        f.debug_struct("Store")
            .field("location", &self.location)
            .field("open", &open)
            .finish()
    }
}

impl Store {
    /// Create a store for the database at `path` without touching the filesystem.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            location: Location::File(path.as_ref().to_path_buf()),
            conn: Mutex::new(None),
        }
    }

    /// Open or create a database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let store = Self::new(path);
        store.init()?;
        Ok(store)
    }

    /// Open the default database location.
    pub fn open_default() -> Result<Self> {
        Self::open(crate::default_db_path())
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let store = Self {
            location: Location::Memory,
            conn: Mutex::new(None),
        };
        store.init()?;
        Ok(store)
    }

    /// Path of the database file, if file-backed.
    pub fn path(&self) -> Option<&Path> {
        match &self.location {
            Location::File(path) => Some(path),
            Location::Memory => None,
        }
    }

    /// Open the database if it is not open yet.
    ///
    /// Safe to call repeatedly; the live connection is kept.
    pub fn init(&self) -> Result<()> {
        self.with_conn(|_| Ok(()))
    }

    fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let mut guard = self
            .conn
            .lock()
            .map_err(|_| Error::unavailable("connection lock poisoned"))?;

        if guard.is_none() {
            *guard = Some(self.location.connect()?);
        }

        let conn = guard
            .as_ref()
            .ok_or_else(|| Error::unavailable("database is not open"))?;
        f(conn)
    }
}

// Record operations
impl Store {
    /// Point lookup. A missing key is `Ok(None)`, not an error.
    pub fn get<T: DeserializeOwned>(
        &self,
        kind: ResourceKind,
        key: impl Into<RecordKey>,
    ) -> Result<Option<T>> {
        let key = key.into();
        let sql = format!("SELECT value FROM {} WHERE key = ?1", schema::table(kind));

        let raw: Option<String> = self.with_conn(|conn| {
            Ok(conn
                .query_row(&sql, [key.as_db_key()], |row| row.get(0))
                .optional()?)
        })?;

        debug!("get {}/{}: {}", kind.collection(), key, raw.is_some());
        raw.map(|value| serde_json::from_str(&value))
            .transpose()
            .map_err(Error::from)
    }

    /// Every record of a collection.
    pub fn get_all<T: DeserializeOwned>(&self, kind: ResourceKind) -> Result<Vec<T>> {
        let sql = format!("SELECT value FROM {} ORDER BY rowid", schema::table(kind));

        let rows: Vec<String> = self.with_conn(|conn| {
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map([], |row| row.get(0))?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })?;

        debug!("get_all {}: {} records", kind.collection(), rows.len());
        rows.iter()
            .map(|value| serde_json::from_str(value).map_err(Error::from))
            .collect()
    }

    /// Insert or replace a record under its own id.
    pub fn put<R: Resource>(&self, record: &R) -> Result<()> {
        self.put_keyed(R::KIND, record.id(), record)
    }

    /// Insert or replace a value under an explicit key.
    ///
    /// The write is a single statement, so a concurrent reader sees either
    /// the old or the new value.
    pub fn put_keyed<T: Serialize>(
        &self,
        kind: ResourceKind,
        key: impl Into<RecordKey>,
        value: &T,
    ) -> Result<()> {
        let key = key.into();
        let json = serde_json::to_string(value)?;
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let sql = upsert_sql(kind);

        self.with_conn(|conn| {
            conn.execute(&sql, rusqlite::params![key.as_db_key(), json, now])?;
            Ok(())
        })?;

        debug!("put {}/{}", kind.collection(), key);
        Ok(())
    }

    /// Insert or replace many records in one transaction.
    ///
    /// Either every record is written or none is.
    pub fn put_all<R: Resource>(&self, records: &[R]) -> Result<usize> {
        let encoded = records
            .iter()
            .map(|r| Ok((r.id().to_string(), serde_json::to_string(r)?)))
            .collect::<Result<Vec<_>>>()?;
        let now = OffsetDateTime::now_utc().unix_timestamp();
        let sql = upsert_sql(R::KIND);

        self.with_conn(|conn| {
            let tx = conn.unchecked_transaction()?;
            {
                let mut stmt = tx.prepare(&sql)?;
                for (key, json) in &encoded {
                    stmt.execute(rusqlite::params![key, json, now])?;
                }
            }
            tx.commit()?;
            Ok(())
        })?;

        info!("Cached {} {} records", encoded.len(), R::KIND.collection());
        Ok(encoded.len())
    }

    /// Remove a record. Returns whether anything was removed; a missing key is a no-op.
    pub fn delete(&self, kind: ResourceKind, key: impl Into<RecordKey>) -> Result<bool> {
        let key = key.into();
        let sql = format!("DELETE FROM {} WHERE key = ?1", schema::table(kind));

        let removed = self.with_conn(|conn| Ok(conn.execute(&sql, [key.as_db_key()])?))?;
        debug!("delete {}/{}: {} removed", kind.collection(), key, removed);
        Ok(removed > 0)
    }

    /// Remove every record of a collection, returning how many were removed.
    pub fn clear(&self, kind: ResourceKind) -> Result<usize> {
        let sql = format!("DELETE FROM {}", schema::table(kind));

        let removed = self.with_conn(|conn| Ok(conn.execute(&sql, [])?))?;
        info!("Cleared {} records from {}", removed, kind.collection());
        Ok(removed)
    }

    /// Whether a record with this key exists.
    pub fn contains(&self, kind: ResourceKind, key: impl Into<RecordKey>) -> Result<bool> {
        let key = key.into();
        let sql = format!("SELECT COUNT(*) > 0 FROM {} WHERE key = ?1", schema::table(kind));

        self.with_conn(|conn| Ok(conn.query_row(&sql, [key.as_db_key()], |row| row.get(0))?))
    }

    /// Number of records in a collection.
    pub fn count(&self, kind: ResourceKind) -> Result<u64> {
        let sql = format!("SELECT COUNT(*) FROM {}", schema::table(kind));

        let count: i64 = self.with_conn(|conn| Ok(conn.query_row(&sql, [], |row| row.get(0))?))?;
        Ok(count as u64)
    }

    /// Row count and last write time of every collection.
    pub fn stats(&self) -> Result<Vec<CollectionStats>> {
        self.with_conn(|conn| {
            ResourceKind::ALL
                .iter()
                .map(|&kind| {
                    let sql = format!(
                        "SELECT COUNT(*), MAX(updated_at) FROM {}",
                        schema::table(kind)
                    );
                    let (records, last): (i64, Option<i64>) =
                        conn.query_row(&sql, [], |row| Ok((row.get(0)?, row.get(1)?)))?;
                    Ok(CollectionStats {
                        kind,
                        records: records as u64,
                        last_updated: last
                            .and_then(|ts| OffsetDateTime::from_unix_timestamp(ts).ok()),
                    })
                })
                .collect()
        })
    }
}

// Dashboard snapshot operations
impl Store {
    /// Replace the single cached dashboard snapshot.
    pub fn put_snapshot(&self, snapshot: &DashboardSnapshot) -> Result<()> {
        self.put_keyed(ResourceKind::DashboardStats, RecordKey::snapshot(), snapshot)
    }

    /// The cached dashboard snapshot, whatever range it was captured for.
    pub fn get_snapshot(&self) -> Result<Option<DashboardSnapshot>> {
        self.get(ResourceKind::DashboardStats, RecordKey::snapshot())
    }
}

fn upsert_sql(kind: ResourceKind) -> String {
    format!(
        "INSERT INTO {} (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = excluded.updated_at",
        schema::table(kind)
    )
}
