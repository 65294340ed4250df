//! Entry points invoked by the protocol layer.
//!
//! [`TimesheetService`] owns the status store, the executor, and the
//! configuration, and exposes the two operations the outer server wires
//! up: starting a fill (returns promptly, work continues in the
//! background) and looking up the status of an earlier request.

use std::sync::Arc;

use crate::config::TimesheetConfig;
use crate::constants::{FILL_IN_PROGRESS_MESSAGE, STATUS_RESOURCE_PREFIX};
use crate::error::TaskError;
use crate::executor::TimesheetExecutor;
use crate::request::FillRequest;
use crate::runner::TaskRunner;
use crate::signal::SignalChannel;
use crate::store::StatusStore;

/// Task lifecycle service for timesheet fill requests.
///
/// Cheap to share: hold it in an `Arc` and call it from every request
/// handler. All mutable state lives in the injected store.
pub struct TimesheetService {
    store: Arc<dyn StatusStore>,
    executor: Arc<dyn TimesheetExecutor>,
    config: TimesheetConfig,
}

impl TimesheetService {
    /// Creates a service with the default configuration.
    pub fn new(store: Arc<dyn StatusStore>, executor: Arc<dyn TimesheetExecutor>) -> Self {
        Self {
            store,
            executor,
            config: TimesheetConfig::default(),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: TimesheetConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the underlying status store.
    pub fn store(&self) -> &Arc<dyn StatusStore> {
        &self.store
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &TimesheetConfig {
        &self.config
    }

    /// Accepts a fill request and starts the background run.
    ///
    /// The status entry for `request_id` is guaranteed to exist by the
    /// time this returns, and the method returns before the run makes any
    /// progress: the runner is spawned detached, never awaited. The
    /// returned acknowledgment names the request id and where to poll.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Store`] only if the initial status write fails;
    /// the in-memory store never does.
    pub async fn fill_timesheet(
        &self,
        request_id: &str,
        request: FillRequest,
        channel: Arc<dyn SignalChannel>,
    ) -> Result<String, TaskError> {
        let task = request.task_description(&self.config.workday_url);

        self.store
            .create(request_id, FILL_IN_PROGRESS_MESSAGE)
            .await?;

        TaskRunner {
            store: Arc::clone(&self.store),
            executor: Arc::clone(&self.executor),
            channel,
            request_id: request_id.to_string(),
            week_start: request.week_start_date.clone(),
            task,
        }
        .spawn();

        Ok(format!(
            "Timesheet filling started for week of {}. You can check the status using the \
             resource URI: {STATUS_RESOURCE_PREFIX}{request_id}. This process may take a few \
             minutes.",
            request.week_start_date
        ))
    }

    /// Returns the current status message for `request_id`.
    ///
    /// Unknown ids are a normal negative result, reported as a fixed
    /// descriptive string rather than an error. No side effects.
    pub async fn timesheet_status(&self, request_id: &str) -> String {
        match self.store.get(request_id).await {
            Ok(entry) => entry.message,
            Err(TaskError::NotFound { .. }) => not_found_message(request_id),
            Err(err) => {
                tracing::warn!(request_id, error = %err, "status lookup failed");
                not_found_message(request_id)
            }
        }
    }
}

fn not_found_message(request_id: &str) -> String {
    format!("No timesheet filling request found for ID: {request_id}")
}
