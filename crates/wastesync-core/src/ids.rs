//! Local id allocation for records created while offline.
//!
//! The real id space is assigned by the server and unknown offline, so local
//! ids are millisecond timestamps: far above any server id, and strictly
//! increasing within a process. The coordinator additionally skips ids that
//! are already present in the target collection.

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use time::OffsetDateTime;

/// Source of identifiers for locally created records.
pub trait IdAllocator: fmt::Debug + Send + Sync {
    /// A fresh id. Must never repeat an id it returned before.
    fn next_id(&self) -> i64;
}

/// Hands out the current Unix time in milliseconds, bumped past the last
/// issued id when two calls land in the same millisecond.
///
/// ```
/// use wastesync_core::{IdAllocator, TimestampIdAllocator};
///
/// let ids = TimestampIdAllocator::new();
/// let a = ids.next_id();
/// let b = ids.next_id();
/// assert!(b > a);
/// ```
#[derive(Debug, Default)]
pub struct TimestampIdAllocator {
    last: AtomicI64,
}

impl TimestampIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdAllocator for TimestampIdAllocator {
    fn next_id(&self) -> i64 {
        let now = (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64;
        let mut last = self.last.load(Ordering::Acquire);
        loop {
            let next = now.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return next,
                Err(actual) => last = actual,
            }
        }
    }
}
