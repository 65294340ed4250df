//! Background execution of one fill request.
//!
//! The runner owns everything that happens after the dispatch handler has
//! returned: announcing the executor strategy, driving the executor with a
//! step reporter, and recording exactly one terminal status. It is a
//! terminal boundary -- no error escapes a run; failures become a `Failed`
//! status plus an error signal, and nothing is retried.

use std::sync::Arc;

use crate::executor::TimesheetExecutor;
use crate::progress::StepReporter;
use crate::signal::SignalChannel;
use crate::status::TaskState;
use crate::store::StatusStore;

/// One background run, detached from the request-handling path.
pub(crate) struct TaskRunner {
    pub(crate) store: Arc<dyn StatusStore>,
    pub(crate) executor: Arc<dyn TimesheetExecutor>,
    pub(crate) channel: Arc<dyn SignalChannel>,
    pub(crate) request_id: String,
    pub(crate) week_start: String,
    pub(crate) task: String,
}

impl TaskRunner {
    /// Launches the run on the tokio runtime and returns immediately.
    ///
    /// The join handle is dropped on purpose: the run communicates only
    /// through the status store and the signal channel, never by joined
    /// result, and there is no cancellation path.
    pub(crate) fn spawn(self) {
        tokio::spawn(self.run());
    }

    async fn run(self) {
        tracing::debug!(request_id = %self.request_id, "timesheet run starting");

        let reporter: Arc<StepReporter> = Arc::new(StepReporter::new(
            self.request_id.clone(),
            Arc::clone(&self.channel),
        ));

        self.channel.info(&self.executor.strategy_notice()).await;

        match self
            .executor
            .execute(&self.task, reporter.clone(), true)
            .await
        {
            Ok(_result) => {
                let message = format!(
                    "Timesheet for week of {} has been successfully submitted.",
                    self.week_start
                );
                self.record_terminal(TaskState::Succeeded, &message).await;
                self.channel
                    .info("Timesheet has been successfully submitted!")
                    .await;
                tracing::debug!(
                    request_id = %self.request_id,
                    steps = reporter.steps_completed(),
                    "timesheet run succeeded"
                );
            }
            Err(err) => {
                let message = format!("Error filling timesheet: {err}");
                self.record_terminal(TaskState::Failed, &message).await;
                self.channel.error(&message).await;
                tracing::debug!(
                    request_id = %self.request_id,
                    steps = reporter.steps_completed(),
                    "timesheet run failed"
                );
            }
        }
    }

    /// Writes the terminal status, swallowing store failures.
    ///
    /// The entry may have been evicted or its id reused mid-run; neither
    /// must take the run down, so failures are logged and dropped here.
    async fn record_terminal(&self, state: TaskState, message: &str) {
        if let Err(err) = self
            .store
            .update_status(&self.request_id, state, message)
            .await
        {
            tracing::warn!(
                request_id = %self.request_id,
                error = %err,
                "failed to record terminal status"
            );
        }
    }
}
