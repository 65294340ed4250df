//! Outbound signal channel for a single request.
//!
//! The protocol layer owns the real transport (notifications tied to the
//! request id); this crate only needs a seam to emit through. Emission is
//! infallible at the trait level -- transport failures are the channel
//! implementation's concern, not the task lifecycle's.

use async_trait::async_trait;

/// Per-request notification sink.
///
/// One channel instance corresponds to one fill request; implementations
/// route everything to the identifier that owns the current run.
#[async_trait]
pub trait SignalChannel: Send + Sync {
    /// Emits an informational message.
    async fn info(&self, message: &str);

    /// Emits an error message.
    async fn error(&self, message: &str);

    /// Emits a numeric progress value (the completed step count).
    async fn report_progress(&self, progress: f64);
}

/// Signal channel that routes everything to the `tracing` subscriber.
///
/// Useful for headless runs and as a stand-in while the protocol layer is
/// not attached. Messages carry the request id as a structured field.
#[derive(Debug, Clone)]
pub struct LoggingSignalChannel {
    request_id: String,
}

impl LoggingSignalChannel {
    /// Creates a channel scoped to `request_id`.
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }
}

#[async_trait]
impl SignalChannel for LoggingSignalChannel {
    async fn info(&self, message: &str) {
        tracing::info!(request_id = %self.request_id, "{message}");
    }

    async fn error(&self, message: &str) {
        tracing::error!(request_id = %self.request_id, "{message}");
    }

    async fn report_progress(&self, progress: f64) {
        tracing::debug!(request_id = %self.request_id, progress, "progress");
    }
}
