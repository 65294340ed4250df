//! Status registry trait and the in-memory implementation.
//!
//! The registry is the only shared mutable structure in the crate: the
//! dispatch handler writes the initial entry, the background runner writes
//! the terminal entry, and status lookups read. It is injected as an
//! `Arc<dyn StatusStore>` rather than referenced as ambient global state.
//!
//! # Backends
//!
//! - [`InMemoryStatusStore`] -- thread-safe in-memory store on `DashMap`.
//!   The only backend in scope; entries do not survive a restart.
//!
//! # Eviction
//!
//! Entries carry a TTL from [`StoreConfig`]. Expired entries stay readable
//! (late pollers still see the outcome) but reject further status updates;
//! [`StatusStore::cleanup_expired`] removes them.

pub mod memory;

pub use memory::InMemoryStatusStore;

use async_trait::async_trait;

use crate::error::TaskError;
use crate::status::{StatusEntry, TaskState};

/// TTL policy applied to new entries.
///
/// # Examples
///
/// ```
/// use timesheet_tasks::store::StoreConfig;
///
/// let config = StoreConfig::default();
/// assert_eq!(config.default_ttl_ms, Some(86_400_000));
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// TTL in milliseconds applied when an entry is created. `None` means
    /// entries never expire.
    pub default_ttl_ms: Option<u64>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            default_ttl_ms: Some(86_400_000), // 24 hours
        }
    }
}

/// Type-erasure interface for the status registry.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the dispatch handler, runner,
/// and lookup path all hold clones of the same `Arc<dyn StatusStore>`.
/// Per-key reads and writes must be atomic -- a reader never observes a
/// torn message -- but no cross-key coordination is required.
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Inserts a fresh `InProgress` entry for `request_id`.
    ///
    /// Request ids are caller-supplied and not collision-checked: creating
    /// an entry for an id that already exists overwrites it (last write
    /// wins), restarting that id's lifecycle.
    ///
    /// # Errors
    ///
    /// - [`TaskError::Store`] on backend failures.
    async fn create(&self, request_id: &str, message: &str) -> Result<StatusEntry, TaskError>;

    /// Retrieves the entry for `request_id`.
    ///
    /// Expired entries are still returned; callers can check
    /// [`StatusEntry::is_expired`] if they care.
    ///
    /// # Errors
    ///
    /// - [`TaskError::NotFound`] if no entry exists for the id.
    /// - [`TaskError::Store`] on backend failures.
    async fn get(&self, request_id: &str) -> Result<StatusEntry, TaskError>;

    /// Transitions the entry to `state` with a new message.
    ///
    /// Validates the transition against the state machine before applying
    /// and refreshes `last_updated_at`. Once a terminal state is written
    /// the entry can never change again.
    ///
    /// # Errors
    ///
    /// - [`TaskError::NotFound`] if no entry exists for the id.
    /// - [`TaskError::Expired`] if the entry's TTL has elapsed.
    /// - [`TaskError::InvalidTransition`] if the state machine rejects the
    ///   transition (terminal or self transitions).
    /// - [`TaskError::Store`] on backend failures.
    async fn update_status(
        &self,
        request_id: &str,
        state: TaskState,
        message: &str,
    ) -> Result<StatusEntry, TaskError>;

    /// Removes expired entries, returning the count removed.
    ///
    /// # Errors
    ///
    /// - [`TaskError::Store`] on backend failures.
    async fn cleanup_expired(&self) -> Result<usize, TaskError>;

    /// Returns the store's TTL policy.
    fn config(&self) -> &StoreConfig;
}
