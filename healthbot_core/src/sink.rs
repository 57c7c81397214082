//! Best-effort recording of queries nobody could answer.

use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait UnmatchedQuerySink: Send + Sync {
    async fn record(&self, query: &str) -> anyhow::Result<()>;
}

/// What happened to a fire-and-forget write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkOutcome {
    Recorded,
    Failed,
}

/// Hand a query to the sink and observe the outcome.
///
/// A failure is logged at debug level and never reaches the caller.
pub async fn record_best_effort(sink: &dyn UnmatchedQuerySink, query: &str) -> SinkOutcome {
    match sink.record(query).await {
        Ok(()) => SinkOutcome::Recorded,
        Err(e) => {
            debug!("Failed to record unmatched query: {e}");
            SinkOutcome::Failed
        }
    }
}
