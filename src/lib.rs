//! Background task lifecycle for Workday timesheet automation.
//!
//! A timesheet fill takes minutes and many browser steps, far longer than a
//! request/response cycle. This crate lets a synchronous protocol front
//! that work: the dispatch entry point accepts a request, writes an
//! in-progress status entry, spawns the run detached, and returns an
//! acknowledgment immediately; callers then poll status by request id and
//! receive step-level progress over a per-request signal channel.
//!
//! # Overview
//!
//! A status entry progresses through a small state machine
//! (`in_progress` -> `succeeded`/`failed`); terminal states never change
//! again. Entries are held in a concurrency-safe registry with TTL-based
//! eviction. The long-running agent itself and the outer protocol server
//! are external collaborators, reached through the [`executor`] and
//! [`signal`] traits.
//!
//! # Module Organization
//!
//! - [`service`] - entry points: start a fill, look up status
//! - [`status`] - task states, state machine, status entries
//! - [`store`] - status registry trait and in-memory implementation
//! - `runner` - detached background execution (internal)
//! - [`progress`] - step-progress bridge to the signal channel
//! - [`executor`] - long-running agent contract
//! - [`signal`] - per-request notification channel contract
//! - [`request`] - fill parameters and task description building
//! - [`config`] / [`constants`] - Workday URL configuration
//! - [`error`] - registry error types
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use timesheet_tasks::store::InMemoryStatusStore;
//!
//! let store = Arc::new(InMemoryStatusStore::new());
//! assert!(store.is_empty());
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod executor;
pub mod progress;
pub mod request;
pub mod service;
pub mod signal;
pub mod status;
pub mod store;

mod runner;

// Re-exports for ergonomic access
pub use config::TimesheetConfig;
pub use error::TaskError;
pub use executor::{StepObserver, TimesheetExecutor};
pub use progress::StepReporter;
pub use request::FillRequest;
pub use service::TimesheetService;
pub use signal::{LoggingSignalChannel, SignalChannel};
pub use status::{StatusEntry, TaskState};
pub use store::{InMemoryStatusStore, StatusStore, StoreConfig};
