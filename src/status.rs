//! Task states and the per-request status entry.
//!
//! A status entry is created the instant a fill request is accepted and is
//! mutated exactly once more, to a terminal state, when the background run
//! finishes or fails. The state machine below enforces that shape.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TaskError;

/// Lifecycle state of one fill request.
///
/// # State Machine
///
/// ```text
/// InProgress -> Succeeded, Failed
/// Succeeded  -> (terminal, no transitions)
/// Failed     -> (terminal, no transitions)
/// ```
///
/// Terminal states reject all transitions; self-transitions are rejected.
///
/// # Examples
///
/// ```
/// use timesheet_tasks::status::TaskState;
///
/// assert!(!TaskState::InProgress.is_terminal());
/// assert!(TaskState::InProgress.can_transition_to(TaskState::Succeeded));
/// assert!(!TaskState::Succeeded.can_transition_to(TaskState::InProgress));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    /// The background run has been accepted and has not finished.
    InProgress,
    /// The run finished successfully (terminal).
    Succeeded,
    /// The run failed (terminal).
    Failed,
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in_progress"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

impl TaskState {
    /// Returns `true` if this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }

    /// Returns `true` if transitioning from this state to `next` is valid.
    ///
    /// Only `InProgress -> Succeeded` and `InProgress -> Failed` are
    /// allowed; everything else, including self-transitions, is rejected.
    pub fn can_transition_to(&self, next: Self) -> bool {
        match self {
            Self::InProgress => next.is_terminal(),
            Self::Succeeded | Self::Failed => false,
        }
    }

    /// Validates a transition from this state to `next`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::InvalidTransition`] with the rejected pair when
    /// the transition is not allowed.
    pub fn validate_transition(&self, request_id: &str, next: Self) -> Result<(), TaskError> {
        if self.can_transition_to(next) {
            Ok(())
        } else {
            Err(TaskError::InvalidTransition {
                request_id: request_id.to_string(),
                from: *self,
                to: next,
            })
        }
    }
}

/// One request's current status as held by the registry.
///
/// The `message` field is what status lookups return verbatim. Step-level
/// progress is never written here; it flows through the signal channel
/// instead, so polling reflects only coarse-grained state.
#[derive(Debug, Clone, Serialize)]
pub struct StatusEntry {
    /// The caller-supplied request id this entry belongs to.
    pub request_id: String,

    /// Current lifecycle state.
    pub state: TaskState,

    /// Human-readable description of the current state.
    pub message: String,

    /// When the entry was created.
    pub created_at: DateTime<Utc>,

    /// When the entry was last written.
    pub last_updated_at: DateTime<Utc>,

    /// Absolute expiry time computed from the store's TTL. `None` means
    /// the entry never expires.
    pub expires_at: Option<DateTime<Utc>>,
}

impl StatusEntry {
    /// Creates a fresh `InProgress` entry.
    ///
    /// `ttl_ms` is milliseconds from now; values that overflow the
    /// timestamp range are treated as "never expires".
    ///
    /// # Examples
    ///
    /// ```
    /// use timesheet_tasks::status::{StatusEntry, TaskState};
    ///
    /// let entry = StatusEntry::new("req-1", "accepted", Some(60_000));
    /// assert_eq!(entry.state, TaskState::InProgress);
    /// assert!(entry.expires_at.is_some());
    /// ```
    pub fn new(request_id: &str, message: &str, ttl_ms: Option<u64>) -> Self {
        let now = Utc::now();
        let expires_at = ttl_ms.and_then(|ms| {
            let ms = i64::try_from(ms).ok()?;
            let duration = Duration::try_milliseconds(ms)?;
            now.checked_add_signed(duration)
        });

        Self {
            request_id: request_id.to_string(),
            state: TaskState::InProgress,
            message: message.to_string(),
            created_at: now,
            last_updated_at: now,
            expires_at,
        }
    }

    /// Returns `true` if the entry has outlived its TTL.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expiry) => Utc::now() > expiry,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- TaskState tests ----

    #[test]
    fn display_matches_serde() {
        assert_eq!(TaskState::InProgress.to_string(), "in_progress");
        assert_eq!(TaskState::Succeeded.to_string(), "succeeded");
        assert_eq!(TaskState::Failed.to_string(), "failed");

        for state in [TaskState::InProgress, TaskState::Succeeded, TaskState::Failed] {
            let json = serde_json::to_value(state).unwrap();
            assert_eq!(json, state.to_string());
        }
    }

    #[test]
    fn terminal_states() {
        assert!(!TaskState::InProgress.is_terminal());
        assert!(TaskState::Succeeded.is_terminal());
        assert!(TaskState::Failed.is_terminal());
    }

    #[test]
    fn in_progress_transitions_to_terminal_only() {
        assert!(TaskState::InProgress.can_transition_to(TaskState::Succeeded));
        assert!(TaskState::InProgress.can_transition_to(TaskState::Failed));
        assert!(!TaskState::InProgress.can_transition_to(TaskState::InProgress));
    }

    #[test]
    fn terminal_states_reject_all_transitions() {
        for terminal in [TaskState::Succeeded, TaskState::Failed] {
            for target in [TaskState::InProgress, TaskState::Succeeded, TaskState::Failed] {
                assert!(
                    !terminal.can_transition_to(target),
                    "{terminal} should not transition to {target}"
                );
            }
        }
    }

    #[test]
    fn validate_transition_ok() {
        assert!(TaskState::InProgress
            .validate_transition("req-1", TaskState::Succeeded)
            .is_ok());
    }

    #[test]
    fn validate_transition_err_from_terminal() {
        let err = TaskState::Failed
            .validate_transition("req-1", TaskState::InProgress)
            .unwrap_err();
        assert!(err.to_string().contains("req-1"));
    }

    // ---- StatusEntry tests ----

    #[test]
    fn new_entry_is_in_progress() {
        let entry = StatusEntry::new("req-1", "accepted", None);
        assert_eq!(entry.state, TaskState::InProgress);
        assert_eq!(entry.message, "accepted");
        assert_eq!(entry.created_at, entry.last_updated_at);
    }

    #[test]
    fn new_entry_with_ttl_has_expiry() {
        let entry = StatusEntry::new("req-1", "accepted", Some(60_000));
        assert!(entry.expires_at.is_some());
        assert!(!entry.is_expired());
    }

    #[test]
    fn new_entry_without_ttl_never_expires() {
        let entry = StatusEntry::new("req-1", "accepted", None);
        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired());
    }

    #[test]
    fn oversized_ttl_treated_as_never_expires() {
        let entry = StatusEntry::new("req-1", "accepted", Some(u64::MAX));
        assert!(entry.expires_at.is_none());
    }

    #[test]
    fn past_expiry_is_expired() {
        let mut entry = StatusEntry::new("req-1", "accepted", Some(60_000));
        entry.expires_at = Some(Utc::now() - Duration::seconds(10));
        assert!(entry.is_expired());
    }
}
