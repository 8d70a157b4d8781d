//! Keys and summaries for stored data.

use core::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use wastesync_types::{ResourceKind, SNAPSHOT_KEY};

/// Key of a record within a collection.
///
/// Id-keyed resources use their integer id; the dashboard snapshot uses the
/// fixed text key `"main"`. Both are stored as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordKey {
    Id(i64),
    Name(String),
}

impl RecordKey {
    /// Key of the singleton dashboard snapshot.
    pub fn snapshot() -> Self {
        Self::Name(SNAPSHOT_KEY.to_string())
    }

    /// Text form used as the primary key column.
    pub fn as_db_key(&self) -> String {
        match self {
            Self::Id(id) => id.to_string(),
            Self::Name(name) => name.clone(),
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<i64> for RecordKey {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for RecordKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for RecordKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Row count and freshness of one collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionStats {
    /// The collection.
    pub kind: ResourceKind,
    /// Number of stored records.
    pub records: u64,
    /// Last time any record of this collection was written.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_updated: Option<OffsetDateTime>,
}
