//! Error types for wastesync-core.
//!
//! # Propagation
//!
//! | Error | During a read | During a write |
//! |-------|---------------|----------------|
//! | [`Error::RemoteUnavailable`] | Recovered by serving the cache (degraded) | Returned to the caller |
//! | [`Error::Rejected`] | Recovered by serving the cache (degraded) | Returned to the caller |
//! | [`Error::NotFound`] | n/a | Returned to the caller verbatim |
//! | [`Error::StorageUnavailable`] | Becomes [`Error::NoDataAvailable`] | Swallowed during write-through; returned for an offline create |
//! | [`Error::Storage`] | Becomes [`Error::NoDataAvailable`] | Swallowed during write-through; returned for an offline create |
//! | [`Error::NoDataAvailable`] | Terminal | n/a |
//! | [`Error::OfflineWriteUnsupported`] | n/a | Returned for update/delete while offline |
//!
//! Cache write-through failures never fail the surrounding operation; they
//! are logged and reported as a
//! [`SyncEvent::CacheWriteFailed`](crate::events::SyncEvent::CacheWriteFailed).

use std::time::Duration;

use thiserror::Error;
use wastesync_types::ResourceKind;

use crate::remote::RemoteError;

/// Errors surfaced by the sync coordinator.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The remote API could not be reached, failed, or did not answer in time.
    #[error("Remote API unavailable during '{operation}': {reason}")]
    RemoteUnavailable {
        /// The remote operation that failed.
        operation: String,
        /// What went wrong.
        reason: String,
    },

    /// The remote API refused the request.
    #[error("Remote API rejected {kind}: {message}")]
    Rejected {
        /// Resource type of the request.
        kind: ResourceKind,
        /// Human-readable message from the remote API.
        message: String,
    },

    /// The operation targets an id the remote API does not know.
    #[error("{kind} {id} not found")]
    NotFound {
        /// Resource type of the request.
        kind: ResourceKind,
        /// The missing id.
        id: i64,
    },

    /// The local store cannot be opened or written to.
    #[error(transparent)]
    StorageUnavailable(wastesync_store::Error),

    /// The local store is usable but the operation failed, for example a
    /// record that cannot be encoded.
    #[error("Local store error: {0}")]
    Storage(wastesync_store::Error),

    /// Neither the remote API nor the local cache produced data.
    #[error("No {kind} data available: remote unreachable and nothing usable is cached")]
    NoDataAvailable {
        /// Resource type that was requested.
        kind: ResourceKind,
    },

    /// Update and delete need a round trip to the remote API.
    #[error("Cannot {operation} {kind} while offline")]
    OfflineWriteUnsupported {
        /// Resource type of the request.
        kind: ResourceKind,
        /// `"update"`, `"delete"` or `"assign"`.
        operation: &'static str,
    },

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Map a remote API failure into the coordinator taxonomy.
    pub fn from_remote(kind: ResourceKind, operation: impl Into<String>, err: RemoteError) -> Self {
        match err {
            RemoteError::Unavailable(reason) => Self::RemoteUnavailable {
                operation: operation.into(),
                reason,
            },
            RemoteError::NotFound { kind, id } => Self::NotFound { kind, id },
            RemoteError::Rejected(message) => Self::Rejected { kind, message },
        }
    }

    /// Create a timeout error for a remote operation.
    pub fn timeout(operation: impl Into<String>, duration: Duration) -> Self {
        Self::RemoteUnavailable {
            operation: operation.into(),
            reason: format!("no response after {:?}", duration),
        }
    }

    /// Create a configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

impl From<wastesync_store::Error> for Error {
    fn from(err: wastesync_store::Error) -> Self {
        if err.is_unavailable() {
            Self::StorageUnavailable(err)
        } else {
            Self::Storage(err)
        }
    }
}

/// Result type alias using wastesync-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;
