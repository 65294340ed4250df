//! Error types for status registry operations.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::status::TaskState;

/// Errors that can occur while reading or mutating the status registry.
///
/// Each variant carries the request id it concerns so callers can log
/// failures without extra bookkeeping.
///
/// # Examples
///
/// ```
/// use timesheet_tasks::error::TaskError;
///
/// let err = TaskError::NotFound { request_id: "req-7".to_string() };
/// assert!(err.to_string().contains("req-7"));
/// ```
#[derive(Error, Debug)]
pub enum TaskError {
    /// Attempted an invalid state machine transition.
    #[error("invalid transition from {from} to {to} for request {request_id}")]
    InvalidTransition {
        /// The request whose entry was being transitioned.
        request_id: String,
        /// The current state of the entry.
        from: TaskState,
        /// The target state that was rejected.
        to: TaskState,
    },

    /// No status entry exists for the given request id.
    #[error("no status entry for request {request_id}")]
    NotFound {
        /// The request id that was not found.
        request_id: String,
    },

    /// The entry has outlived its TTL; updates are no longer accepted.
    #[error("status entry for request {request_id} has expired")]
    Expired {
        /// The expired entry's request id.
        request_id: String,
        /// When the entry expired, if known.
        expired_at: Option<DateTime<Utc>>,
    },

    /// Backend storage failure (unused by the in-memory store, reserved
    /// for stores backed by external systems).
    #[error("store error: {0}")]
    Store(String),
}
