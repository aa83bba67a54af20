//! Error types for siskin-captions organized by boundary stage.

use thiserror::Error;

/// Library error variants.
///
/// Assembly itself is total and never fails; errors only arise at the
/// recognizer-output boundary and in the opt-in strict offset check.
#[derive(Debug, Error)]
pub enum Error {
    /// Strict offset validation error
    #[error(transparent)]
    Offsets(#[from] OffsetError),

    /// Malformed recognizer JSON payload
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// IO error while reading recognizer output
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Offset validation errors (strict mode only).
#[derive(Debug, Error)]
pub enum OffsetError {
    /// Record span ends before it starts
    #[error("record {index}: span ends before it starts ({from}ms > {to}ms)")]
    Reversed { index: usize, from: i64, to: i64 },

    /// Record starts earlier than its predecessor
    #[error("record {index}: starts at {from}ms, before previous record start {prev}ms")]
    Decreasing { index: usize, from: i64, prev: i64 },
}

/// Result type alias for siskin-captions operations.
pub type Result<T> = std::result::Result<T, Error>;
