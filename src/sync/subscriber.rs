// ABOUTME: Event subscriber: watches the runtime event feed on a background task.
// ABOUTME: Forwards relevant events as invalidation signals over a bounded channel.

use crate::config::EventsConfig;
use crate::runtime::{EventAction, EventOps, RuntimeEvent};
use crate::types::ContainerId;
use futures::StreamExt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;

/// A hint that cached container state is stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invalidation {
    /// Container the event was about.
    pub container: ContainerId,
    /// Lifecycle action that triggered the signal, when recognized.
    pub action: Option<EventAction>,
}

impl From<&RuntimeEvent> for Invalidation {
    fn from(event: &RuntimeEvent) -> Self {
        Self {
            container: event.actor_id.clone(),
            action: event.lifecycle_action(),
        }
    }
}

/// Spawns event listeners against a shared runtime.
pub struct EventSubscriber<R> {
    runtime: Arc<R>,
    config: EventsConfig,
}

impl<R> EventSubscriber<R>
where
    R: EventOps + 'static,
{
    pub fn new(runtime: Arc<R>, config: EventsConfig) -> Self {
        Self { runtime, config }
    }

    /// Start listening. With `container` set, only events whose actor id
    /// equals it are forwarded.
    ///
    /// Must be called from within a tokio runtime.
    pub fn subscribe(&self, container: Option<ContainerId>) -> Subscription {
        let (tx, rx) = mpsc::channel(self.config.buffer.max(1));
        let task = tokio::spawn(listen(
            Arc::clone(&self.runtime),
            container,
            self.config.clone(),
            tx,
        ));

        Subscription { receiver: rx, task }
    }
}

/// Receiving end of an event subscription.
///
/// Dropping the subscription stops its listener task.
pub struct Subscription {
    receiver: mpsc::Receiver<Invalidation>,
    task: JoinHandle<()>,
}

impl Subscription {
    /// Wait for the next signal. `None` once the listener has stopped.
    pub async fn next(&mut self) -> Option<Invalidation> {
        self.receiver.recv().await
    }

    /// Take a signal that is already queued, without waiting.
    pub fn try_next(&mut self) -> Option<Invalidation> {
        self.receiver.try_recv().ok()
    }

    /// Invoke `on_change` on the caller's task for every signal until the
    /// listener stops.
    pub async fn run<F>(mut self, mut on_change: F)
    where
        F: FnMut(Invalidation),
    {
        while let Some(signal) = self.next().await {
            on_change(signal);
        }
    }

    /// Stop the listener. Signals already queued can still be received.
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Doubling delay capped at a maximum.
#[derive(Debug, Clone)]
pub(crate) struct Backoff {
    initial: Duration,
    max: Duration,
    current: Duration,
}

impl Backoff {
    pub(crate) fn new(initial: Duration, max: Duration) -> Self {
        Self {
            initial,
            max,
            current: initial,
        }
    }

    pub(crate) fn next_delay(&mut self) -> Duration {
        let delay = self.current.min(self.max);
        self.current = self.current.saturating_mul(2).min(self.max);
        delay
    }

    pub(crate) fn reset(&mut self) {
        self.current = self.initial;
    }
}

fn matches(filter: Option<&ContainerId>, event: &RuntimeEvent) -> bool {
    filter.is_none_or(|id| *id == event.actor_id)
}

async fn listen<R: EventOps>(
    runtime: Arc<R>,
    filter: Option<ContainerId>,
    config: EventsConfig,
    tx: mpsc::Sender<Invalidation>,
) {
    let mut backoff = Backoff::new(config.initial_backoff, config.max_backoff);

    loop {
        match runtime.container_events(&EventAction::ALL).await {
            Ok(mut stream) => {
                tracing::debug!("subscribed to container events");
                while let Some(item) = stream.next().await {
                    let event = match item {
                        Ok(event) => event,
                        Err(e) => {
                            tracing::warn!("container event stream failed: {}", e);
                            break;
                        }
                    };

                    backoff.reset();

                    if !matches(filter.as_ref(), &event) {
                        continue;
                    }

                    tracing::debug!(
                        "container {} {}",
                        event.actor_name().unwrap_or(event.actor_id.short()),
                        event.action
                    );

                    match tx.try_send(Invalidation::from(&event)) {
                        Ok(()) => {}
                        // A queued signal already forces a reload.
                        Err(TrySendError::Full(_)) => {
                            tracing::debug!("invalidation queue full, coalescing");
                        }
                        Err(TrySendError::Closed(_)) => return,
                    }
                }
                tracing::warn!("container event stream ended");
            }
            Err(e) => tracing::warn!("failed to subscribe to container events: {}", e),
        }

        if !config.reconnect {
            return;
        }

        let delay = backoff.next_delay();
        tracing::debug!("reconnecting to event stream in {:?}", delay);
        tokio::select! {
            _ = tokio::time::sleep(delay) => {}
            _ = tx.closed() => return,
        }
    }
}
