//! Executor collaborator contracts.
//!
//! The long-running work (driving a browser through Workday) is performed
//! by an external agent. This module defines the seam the task lifecycle
//! talks through, without depending on any concrete automation stack.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

/// Callback contract invoked once per discrete step the executor completes.
///
/// The observer carries no payload; the step count is tracked on the
/// observer side (see [`StepReporter`](crate::progress::StepReporter)).
#[async_trait]
pub trait StepObserver: Send + Sync {
    /// Called after each completed step.
    async fn on_step(&self);
}

/// A long-running agent that can fill a timesheet from a task description.
///
/// Implementations are expected to suspend for minutes inside
/// [`execute`](TimesheetExecutor::execute); the task lifecycle never runs
/// them on a request-handling path.
#[async_trait]
pub trait TimesheetExecutor: Send + Sync {
    /// One-line announcement of which automation strategy this executor
    /// represents, emitted at the start of every run.
    ///
    /// The generic browser agent reports
    /// `"Specialized Workday agent not available, using generic browser
    /// agent"`; a future dedicated agent would report its own line. The
    /// selection point is the injected executor itself -- swapping the
    /// implementation swaps the strategy.
    fn strategy_notice(&self) -> String;

    /// Performs the multi-step operation described by `task`.
    ///
    /// `steps` is invoked once per completed step. `enable_memory` asks the
    /// agent to retain cross-step context for this single run.
    ///
    /// # Errors
    ///
    /// Any failure mode of the underlying agent, as an arbitrary error.
    /// The caller converts it into a terminal status; it is never retried.
    async fn execute(
        &self,
        task: &str,
        steps: Arc<dyn StepObserver>,
        enable_memory: bool,
    ) -> anyhow::Result<Value>;
}
