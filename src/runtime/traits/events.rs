// ABOUTME: Event feed trait for container runtimes.
// ABOUTME: Streams container lifecycle events filtered server-side by action.

use super::shared_types::{EventAction, RuntimeEvent};
use async_trait::async_trait;
use futures::Stream;
use std::pin::Pin;

/// Long-lived stream of runtime events. Ends when the connection drops.
pub type EventStream = Pin<Box<dyn Stream<Item = Result<RuntimeEvent, EventError>> + Send>>;

/// Event feed operations.
#[async_trait]
pub trait EventOps: Send + Sync {
    /// Subscribe to container events whose action is one of `actions`.
    async fn container_events(&self, actions: &[EventAction]) -> Result<EventStream, EventError>;
}

/// Errors from event operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("stream error: {0}")]
    StreamError(String),
}
