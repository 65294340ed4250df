//! In-memory status store.
//!
//! [`InMemoryStatusStore`] keeps entries in a `DashMap<String, StatusEntry>`.
//! DashMap's shard locks make every per-key operation atomic, which is all
//! the registry needs: concurrent runs touch distinct keys, and a reader
//! polling an id that is being written sees either the old or the new entry,
//! never a torn one.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::error::TaskError;
use crate::status::{StatusEntry, TaskState};
use crate::store::{StatusStore, StoreConfig};

/// Thread-safe in-memory status registry.
///
/// # Construction
///
/// ```
/// use timesheet_tasks::store::{InMemoryStatusStore, StoreConfig};
///
/// let store = InMemoryStatusStore::new().with_config(StoreConfig {
///     default_ttl_ms: Some(3_600_000), // 1 hour
/// });
/// assert!(store.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStatusStore {
    entries: DashMap<String, StatusEntry>,
    config: StoreConfig,
}

impl InMemoryStatusStore {
    /// Creates an empty store with the default TTL policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the TTL policy.
    pub fn with_config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the number of entries held, including expired ones that
    /// have not been swept yet.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl StatusStore for InMemoryStatusStore {
    async fn create(&self, request_id: &str, message: &str) -> Result<StatusEntry, TaskError> {
        let entry = StatusEntry::new(request_id, message, self.config.default_ttl_ms);
        if self
            .entries
            .insert(request_id.to_string(), entry.clone())
            .is_some()
        {
            tracing::warn!(request_id, "overwriting existing status entry for reused id");
        }
        Ok(entry)
    }

    async fn get(&self, request_id: &str) -> Result<StatusEntry, TaskError> {
        self.entries
            .get(request_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| TaskError::NotFound {
                request_id: request_id.to_string(),
            })
    }

    async fn update_status(
        &self,
        request_id: &str,
        state: TaskState,
        message: &str,
    ) -> Result<StatusEntry, TaskError> {
        let mut entry = self
            .entries
            .get_mut(request_id)
            .ok_or_else(|| TaskError::NotFound {
                request_id: request_id.to_string(),
            })?;

        if entry.is_expired() {
            return Err(TaskError::Expired {
                request_id: request_id.to_string(),
                expired_at: entry.expires_at,
            });
        }

        entry.state.validate_transition(request_id, state)?;

        entry.state = state;
        entry.message = message.to_string();
        entry.last_updated_at = chrono::Utc::now();
        Ok(entry.clone())
    }

    async fn cleanup_expired(&self) -> Result<usize, TaskError> {
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| entry.value().is_expired())
            .map(|entry| entry.key().clone())
            .collect();
        for key in &expired {
            self.entries.remove(key);
        }
        Ok(expired.len())
    }

    fn config(&self) -> &StoreConfig {
        &self.config
    }
}
