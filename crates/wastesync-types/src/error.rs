//! Error types for parsing resource identifiers in wastesync-types.

use thiserror::Error;

/// Errors that can occur when parsing resource kinds or query parameters.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The string does not name a known resource collection.
    #[error("Unknown resource kind: '{0}'")]
    UnknownResourceKind(String),

    /// The string is not a supported dashboard time range.
    #[error("Unknown time range: '{0}' (expected 24h, 7d, 30d or 90d)")]
    UnknownTimeRange(String),
}

/// Result type alias using wastesync-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
