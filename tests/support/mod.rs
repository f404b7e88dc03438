// ABOUTME: Test support utilities.
// ABOUTME: Provides tracing setup and an in-memory runtime double for integration tests.

use async_trait::async_trait;
use dockery::config::EventsConfig;
use dockery::runtime::{
    ContainerError, ContainerOps, ContainerRecord, EventAction, EventError, EventOps,
    EventStream, RuntimeEvent,
};
use futures::stream;
use parking_lot::Mutex;
use serde_json::json;
use std::collections::{HashSet, VecDeque};
use std::sync::Once;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for tests. Safe to call multiple times.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::from_default_env().add_directive("dockery=debug".parse().unwrap());
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// A minimal inspect document.
#[allow(dead_code)]
pub fn record(id: &str, name: &str, status: &str) -> ContainerRecord {
    ContainerRecord::new(json!({
        "Id": id,
        "Name": format!("/{name}"),
        "Created": "2024-03-01T10:20:30Z",
        "State": { "Status": status, "StartedAt": "0001-01-01T00:00:00Z" },
        "Config": { "Cmd": ["sleep", "infinity"], "Env": ["A=1"] },
        "HostConfig": { "RestartPolicy": { "Name": "" } }
    }))
    .with_image_tags(vec!["alpine:3.19".to_string()])
}

/// An event for `id` carrying its name attribute.
#[allow(dead_code)]
pub fn event(action: EventAction, id: &str) -> Result<RuntimeEvent, EventError> {
    let mut event = RuntimeEvent::container(action, id);
    event
        .attributes
        .insert("name".to_string(), format!("name-{id}"));
    Ok(event)
}

/// Event settings with short backoff for tests.
#[allow(dead_code)]
pub fn events_config(reconnect: bool) -> EventsConfig {
    EventsConfig {
        buffer: 16,
        reconnect,
        initial_backoff: Duration::from_millis(10),
        max_backoff: Duration::from_millis(40),
    }
}

/// In-memory runtime. Records every command it receives; event streams
/// are served from scripted batches, one batch per connection.
#[allow(dead_code)]
#[derive(Default)]
pub struct FakeRuntime {
    records: Mutex<Vec<ContainerRecord>>,
    calls: Mutex<Vec<String>>,
    failure: Mutex<Option<ContainerError>>,
    undecodable: Mutex<HashSet<String>>,
    batches: Mutex<VecDeque<Vec<Result<RuntimeEvent, EventError>>>>,
    keep_open: bool,
    connections: AtomicUsize,
}

#[allow(dead_code)]
impl FakeRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Streams stay open after their batch is drained instead of ending.
    pub fn keeping_streams_open() -> Self {
        Self {
            keep_open: true,
            ..Self::default()
        }
    }

    pub fn with_records(records: Vec<ContainerRecord>) -> Self {
        let runtime = Self::new();
        runtime.set_records(records);
        runtime
    }

    pub fn set_records(&self, records: Vec<ContainerRecord>) {
        *self.records.lock() = records;
    }

    /// Fail every container operation with `error` until cleared.
    pub fn fail_with(&self, error: Option<ContainerError>) {
        *self.failure.lock() = error;
    }

    /// Make inspecting `id` fail to decode. Listings then carry only the
    /// fields a list entry has, as the bollard runtime does.
    pub fn break_inspect(&self, id: &str) {
        self.undecodable.lock().insert(id.to_string());
    }

    pub fn push_events(&self, batch: Vec<Result<RuntimeEvent, EventError>>) {
        self.batches.lock().push_back(batch);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn connections(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }

    fn command(&self, call: String) -> Result<(), ContainerError> {
        self.calls.lock().push(call);
        match self.failure.lock().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ContainerOps for FakeRuntime {
    async fn list_containers(&self, all: bool) -> Result<Vec<ContainerRecord>, ContainerError> {
        self.command(format!("list all={all}"))?;
        let undecodable = self.undecodable.lock();
        let records = self
            .records
            .lock()
            .iter()
            .map(|r| {
                if undecodable.contains(r.id().as_str()) {
                    ContainerRecord::new(json!({
                        "Id": r.id().as_str(),
                        "Name": format!("/{}", r.name()),
                        "State": { "Status": r.status() }
                    }))
                    .with_image_tags(r.image_tags().to_vec())
                } else {
                    r.clone()
                }
            })
            .collect();
        Ok(records)
    }

    async fn inspect_container(&self, name: &str) -> Result<ContainerRecord, ContainerError> {
        self.command(format!("inspect {name}"))?;
        let record = self
            .records
            .lock()
            .iter()
            .find(|r| r.name() == name || r.id().as_str() == name)
            .cloned()
            .ok_or_else(|| ContainerError::NotFound(name.to_string()))?;
        if self.undecodable.lock().contains(record.id().as_str()) {
            return Err(ContainerError::Runtime(
                "unknown variant `stopping`".to_string(),
            ));
        }
        Ok(record)
    }

    async fn start_container(&self, name: &str) -> Result<(), ContainerError> {
        self.command(format!("start {name}"))
    }

    async fn stop_container(&self, name: &str) -> Result<(), ContainerError> {
        self.command(format!("stop {name}"))
    }

    async fn pause_container(&self, name: &str) -> Result<(), ContainerError> {
        self.command(format!("pause {name}"))
    }

    async fn unpause_container(&self, name: &str) -> Result<(), ContainerError> {
        self.command(format!("unpause {name}"))
    }

    async fn restart_container(&self, name: &str) -> Result<(), ContainerError> {
        self.command(format!("restart {name}"))
    }

    async fn kill_container(&self, name: &str) -> Result<(), ContainerError> {
        self.command(format!("kill {name}"))
    }

    async fn remove_container(&self, name: &str, force: bool) -> Result<(), ContainerError> {
        self.command(format!("remove {name} force={force}"))
    }
}

#[async_trait]
impl EventOps for FakeRuntime {
    async fn container_events(&self, _actions: &[EventAction]) -> Result<EventStream, EventError> {
        let Some(batch) = self.batches.lock().pop_front() else {
            return Err(EventError::ConnectionFailed("no scripted stream".to_string()));
        };
        self.connections.fetch_add(1, Ordering::SeqCst);

        let events = stream::iter(batch);
        if self.keep_open {
            Ok(Box::pin(futures::StreamExt::chain(events, stream::pending())))
        } else {
            Ok(Box::pin(events))
        }
    }
}
