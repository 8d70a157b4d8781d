//! Error types for wastesync-store.

/// Result type for wastesync-store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in wastesync-store.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The local database cannot be opened or written to.
    ///
    /// Covers a database directory that cannot be created, a file that
    /// cannot be opened, a full or read-only disk, a locked or corrupt
    /// database, and a poisoned connection lock.
    #[error("Local storage unavailable: {reason}")]
    StorageUnavailable { reason: String },

    /// Any other SQLite error.
    #[error("Database error: {0}")]
    Database(rusqlite::Error),

    /// A record could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a storage-unavailable error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::StorageUnavailable {
            reason: reason.into(),
        }
    }

    /// Whether the error means the store as a whole cannot be used.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::StorageUnavailable { .. })
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        use rusqlite::ErrorCode;

        if let rusqlite::Error::SqliteFailure(failure, _) = &err
            && matches!(
                failure.code,
                ErrorCode::CannotOpen
                    | ErrorCode::PermissionDenied
                    | ErrorCode::ReadOnly
                    | ErrorCode::DiskFull
                    | ErrorCode::DatabaseBusy
                    | ErrorCode::DatabaseLocked
                    | ErrorCode::SystemIoFailure
                    | ErrorCode::DatabaseCorrupt
                    | ErrorCode::NotADatabase
                    | ErrorCode::OutOfMemory
            )
        {
            return Self::StorageUnavailable {
                reason: err.to_string(),
            };
        }
        Self::Database(err)
    }
}
