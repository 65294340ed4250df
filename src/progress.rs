//! Step-progress bridge between the executor and the signal channel.
//!
//! [`StepReporter`] adapts "step completed" callbacks from the executor
//! into an informational signal and a numeric progress signal. It never
//! writes to the status registry: polling reflects only coarse-grained
//! state, step counts flow through the channel alone.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::executor::StepObserver;
use crate::signal::SignalChannel;

/// Per-run step counter and signal fan-out.
///
/// Each background run constructs its own reporter, so sequence numbers
/// are scoped to one run: the first step observes 1 and every subsequent
/// step increments by exactly 1. Concurrent runs never share a counter.
///
/// # Thread Safety
///
/// The reporter is shared with the executor as `Arc<dyn StepObserver>`;
/// the counter sits behind a mutex so overlapping callbacks from a
/// misbehaving executor still produce distinct, ordered sequence numbers.
pub struct StepReporter {
    request_id: String,
    channel: Arc<dyn SignalChannel>,
    steps: Mutex<u64>,
}

impl StepReporter {
    /// Creates a reporter for one run, starting at step 0.
    pub fn new(request_id: impl Into<String>, channel: Arc<dyn SignalChannel>) -> Self {
        Self {
            request_id: request_id.into(),
            channel,
            steps: Mutex::new(0),
        }
    }

    /// Returns the number of steps observed so far.
    pub fn steps_completed(&self) -> u64 {
        *self.steps.lock()
    }
}

impl std::fmt::Debug for StepReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepReporter")
            .field("request_id", &self.request_id)
            .field("steps", &self.steps_completed())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl StepObserver for StepReporter {
    async fn on_step(&self) {
        // Take the next sequence number before any await so the guard is
        // not held across a suspension point.
        let n = {
            let mut steps = self.steps.lock();
            *steps += 1;
            *steps
        };

        self.channel
            .info(&format!("Timesheet step {n} completed"))
            .await;
        self.channel.report_progress(n as f64).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingChannel {
        infos: Mutex<Vec<String>>,
        progress: Mutex<Vec<f64>>,
    }

    #[async_trait]
    impl SignalChannel for RecordingChannel {
        async fn info(&self, message: &str) {
            self.infos.lock().push(message.to_string());
        }

        async fn error(&self, _message: &str) {}

        async fn report_progress(&self, progress: f64) {
            self.progress.lock().push(progress);
        }
    }

    #[tokio::test]
    async fn steps_count_from_one() {
        let channel = Arc::new(RecordingChannel::default());
        let reporter = StepReporter::new("req-1", channel.clone());

        reporter.on_step().await;
        reporter.on_step().await;
        reporter.on_step().await;

        assert_eq!(reporter.steps_completed(), 3);
        assert_eq!(
            *channel.infos.lock(),
            vec![
                "Timesheet step 1 completed",
                "Timesheet step 2 completed",
                "Timesheet step 3 completed",
            ]
        );
        assert_eq!(*channel.progress.lock(), vec![1.0, 2.0, 3.0]);
    }

    #[tokio::test]
    async fn reporters_do_not_share_counters() {
        let channel_a = Arc::new(RecordingChannel::default());
        let channel_b = Arc::new(RecordingChannel::default());
        let reporter_a = StepReporter::new("req-a", channel_a.clone());
        let reporter_b = StepReporter::new("req-b", channel_b.clone());

        reporter_a.on_step().await;
        reporter_a.on_step().await;
        reporter_b.on_step().await;

        assert_eq!(reporter_a.steps_completed(), 2);
        assert_eq!(reporter_b.steps_completed(), 1);
        assert_eq!(*channel_b.infos.lock(), vec!["Timesheet step 1 completed"]);
    }

    #[tokio::test]
    async fn overlapping_callbacks_produce_distinct_numbers() {
        let channel = Arc::new(RecordingChannel::default());
        let reporter = Arc::new(StepReporter::new("req-1", channel.clone()));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let reporter = Arc::clone(&reporter);
            handles.push(tokio::spawn(async move { reporter.on_step().await }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(reporter.steps_completed(), 8);
        let mut progress = channel.progress.lock().clone();
        progress.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(progress, (1..=8).map(f64::from).collect::<Vec<_>>());
    }
}
