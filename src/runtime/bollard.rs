// ABOUTME: Bollard-based container runtime implementation.
// ABOUTME: Supports both Docker and Podman via Docker-compatible API.

use crate::runtime::traits::{
    ContainerError, ContainerOps, ContainerRecord, EventAction, EventError, EventOps,
    EventStream, RuntimeEvent, RuntimeInfo, RuntimeInfoError, RuntimeMetadata,
};
use crate::runtime::types::RuntimeType;
use crate::types::{ContainerId, ImageId};
use async_trait::async_trait;
use bollard::Docker;
use bollard::models::{ContainerInspectResponse, ContainerSummary, EventMessage};
use bollard::query_parameters::{
    EventsOptions, InspectContainerOptions, KillContainerOptions, ListContainersOptions,
    RemoveContainerOptions, RestartContainerOptions, StartContainerOptions, StopContainerOptions,
};
use futures::StreamExt;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::time::Duration;

// =============================================================================
// Error Mapping Helpers
// =============================================================================

fn map_container_start_error(e: bollard::errors::Error) -> ContainerError {
    match &e {
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } if *status_code == 404 => ContainerError::NotFound(message.clone()),
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } if *status_code == 304 => ContainerError::AlreadyRunning(message.clone()),
        _ => ContainerError::Runtime(e.to_string()),
    }
}

fn map_container_stop_error(e: bollard::errors::Error) -> ContainerError {
    match &e {
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } if *status_code == 404 => ContainerError::NotFound(message.clone()),
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } if *status_code == 304 => ContainerError::NotRunning(message.clone()),
        _ => ContainerError::Runtime(e.to_string()),
    }
}

/// Pause, unpause, kill and remove answer 409 when the state forbids it.
fn map_container_conflict_error(e: bollard::errors::Error) -> ContainerError {
    match &e {
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } if *status_code == 404 => ContainerError::NotFound(message.clone()),
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } if *status_code == 409 => ContainerError::Conflict(message.clone()),
        _ => ContainerError::Runtime(e.to_string()),
    }
}

fn map_container_not_found_error(e: bollard::errors::Error) -> ContainerError {
    match &e {
        bollard::errors::Error::DockerResponseServerError {
            status_code,
            message,
        } if *status_code == 404 => ContainerError::NotFound(message.clone()),
        _ => ContainerError::Runtime(e.to_string()),
    }
}

/// Podman reports "stopping" (and sometimes "stopped") as a container state,
/// which bollard's state enums do not know, so decoding fails.
fn is_transient_state_error(message: &str) -> bool {
    message.contains("unknown variant `stopping`") || message.contains("unknown variant `stopped`")
}

/// Inspect-shaped document built from a list summary. Used when the full
/// inspect document cannot be decoded; absent fields fall back to defaults.
fn summary_record(summary: &ContainerSummary) -> Option<ContainerRecord> {
    let value = serde_json::to_value(summary).ok()?;
    let field = |key: &str| value.get(key).cloned().unwrap_or(Value::Null);
    let name = value
        .get("Names")
        .and_then(|names| names.get(0))
        .cloned()
        .unwrap_or(Value::Null);
    let tags = summary.image.iter().filter(|image| !image.is_empty()).cloned().collect();
    Some(
        ContainerRecord::new(json!({
            "Id": field("Id"),
            "Name": name,
            "Image": field("ImageID"),
            "State": { "Status": field("State") },
        }))
        .with_image_tags(tags),
    )
}

/// Whole seconds for the client timeout, rounded up so that a sub-second
/// value never becomes zero.
fn client_timeout_secs(timeout: Duration) -> u64 {
    let secs = timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0);
    secs.max(1)
}

fn map_event_message(message: EventMessage) -> RuntimeEvent {
    let actor = message.actor.unwrap_or_default();
    RuntimeEvent {
        kind: message.typ.map(|t| t.to_string()).unwrap_or_default(),
        action: message.action.unwrap_or_default(),
        actor_id: ContainerId::new(actor.id.unwrap_or_default()),
        attributes: actor.attributes.unwrap_or_default(),
        time: message.time,
    }
}

// =============================================================================
// BollardRuntime
// =============================================================================

/// Container runtime implementation using bollard.
///
/// Supports both Docker and Podman via Docker-compatible API.
pub struct BollardRuntime {
    client: Docker,
    runtime_type: RuntimeType,
}

impl BollardRuntime {
    /// Create a new BollardRuntime from a Docker client.
    pub fn new(client: Docker, runtime_type: RuntimeType) -> Self {
        Self {
            client,
            runtime_type,
        }
    }

    /// Connect to a container runtime using detected runtime info.
    ///
    /// Use with `detect_local()` to find the socket. `timeout` bounds every
    /// request except the event stream, which stays open indefinitely.
    pub fn connect(
        info: &super::types::RuntimeInfo,
        timeout: Duration,
    ) -> Result<Self, RuntimeInfoError> {
        let client = Docker::connect_with_unix(
            &info.socket_path,
            client_timeout_secs(timeout),
            bollard::API_DEFAULT_VERSION,
        )
        .map_err(|e| RuntimeInfoError::ConnectionFailed(e.to_string()))?;
        Ok(Self::new(client, info.runtime_type))
    }

    /// Get the runtime type (Docker or Podman).
    pub fn runtime_type(&self) -> RuntimeType {
        self.runtime_type
    }

    /// Look up the tags of an image, empty when the image is gone or untagged.
    async fn image_tags(&self, image: &ImageId) -> Vec<String> {
        match self.client.inspect_image(image.as_str()).await {
            Ok(details) => details.repo_tags.unwrap_or_default(),
            Err(e) => {
                tracing::debug!("no tags for image {}: {}", image.short(), e);
                Vec::new()
            }
        }
    }

    async fn inspect_raw(&self, name: &str) -> Result<ContainerInspectResponse, ContainerError> {
        let mut attempt = 0;
        loop {
            match self
                .client
                .inspect_container(name, None::<InspectContainerOptions>)
                .await
            {
                Ok(details) => return Ok(details),
                Err(e) if attempt < 2 && is_transient_state_error(&e.to_string()) => {
                    attempt += 1;
                    tokio::time::sleep(Duration::from_millis(500)).await;
                }
                Err(e) => return Err(map_container_not_found_error(e)),
            }
        }
    }

    /// Turn an inspect response into a record, resolving image tags through
    /// `tag_cache` so that containers sharing an image cost one lookup.
    async fn to_record(
        &self,
        details: ContainerInspectResponse,
        tag_cache: &mut HashMap<ImageId, Vec<String>>,
    ) -> Result<ContainerRecord, ContainerError> {
        let attrs = serde_json::to_value(&details)
            .map_err(|e| ContainerError::Runtime(format!("failed to encode record: {}", e)))?;
        let record = ContainerRecord::new(attrs);

        let tags = match record.image_id() {
            Some(image) => match tag_cache.get(&image) {
                Some(tags) => tags.clone(),
                None => {
                    let tags = self.image_tags(&image).await;
                    tag_cache.insert(image, tags.clone());
                    tags
                }
            },
            None => Vec::new(),
        };

        Ok(record.with_image_tags(tags))
    }
}

#[async_trait]
impl RuntimeInfo for BollardRuntime {
    async fn info(&self) -> Result<RuntimeMetadata, RuntimeInfoError> {
        let info = self
            .client
            .info()
            .await
            .map_err(|e| RuntimeInfoError::ConnectionFailed(e.to_string()))?;

        let name = match self.runtime_type {
            RuntimeType::Docker => "Docker".to_string(),
            RuntimeType::Podman => "Podman".to_string(),
        };

        Ok(RuntimeMetadata {
            name,
            version: info.server_version.unwrap_or_default(),
            api_version: bollard::API_DEFAULT_VERSION.to_string(),
            os: info.operating_system.unwrap_or_default(),
            arch: info.architecture.unwrap_or_default(),
        })
    }

    async fn ping(&self) -> Result<(), RuntimeInfoError> {
        self.client
            .ping()
            .await
            .map_err(|e| RuntimeInfoError::ConnectionFailed(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl ContainerOps for BollardRuntime {
    async fn list_containers(&self, all: bool) -> Result<Vec<ContainerRecord>, ContainerError> {
        let opts = ListContainersOptions {
            all,
            ..Default::default()
        };

        // Podman reports "stopping" as a container state during shutdown, but bollard
        // doesn't recognize it and fails deserialization. Retry after a short delay
        // since "stopping" is a transient state.
        let mut summaries = None;
        let mut last_error = None;
        for attempt in 0..3 {
            match self.client.list_containers(Some(opts.clone())).await {
                Ok(found) => {
                    summaries = Some(found);
                    break;
                }
                Err(e) => {
                    let err_str = e.to_string();
                    if is_transient_state_error(&err_str) && attempt < 2 {
                        tokio::time::sleep(Duration::from_millis(500)).await;
                        last_error = Some(err_str);
                        continue;
                    }
                    return Err(ContainerError::Runtime(err_str));
                }
            }
        }

        let summaries = summaries.ok_or_else(|| {
            ContainerError::Runtime(
                last_error.unwrap_or_else(|| "list_containers failed".to_string()),
            )
        })?;

        let mut tag_cache = HashMap::new();
        let mut records = Vec::with_capacity(summaries.len());
        for summary in summaries {
            let Some(id) = summary.id.clone() else { continue };

            // The container may be destroyed between the list and the inspect.
            let details = match self.inspect_raw(&id).await {
                Ok(details) => details,
                Err(ContainerError::NotFound(_)) => {
                    tracing::debug!("container {} vanished during listing", id);
                    continue;
                }
                Err(ContainerError::Runtime(message)) if is_transient_state_error(&message) => {
                    tracing::debug!("container {} could not be decoded, using its list entry", id);
                    records.extend(summary_record(&summary));
                    continue;
                }
                Err(e) => return Err(e),
            };

            records.push(self.to_record(details, &mut tag_cache).await?);
        }

        Ok(records)
    }

    async fn inspect_container(&self, name: &str) -> Result<ContainerRecord, ContainerError> {
        let details = self.inspect_raw(name).await?;
        self.to_record(details, &mut HashMap::new()).await
    }

    async fn start_container(&self, name: &str) -> Result<(), ContainerError> {
        self.client
            .start_container(name, None::<StartContainerOptions>)
            .await
            .map_err(map_container_start_error)
    }

    async fn stop_container(&self, name: &str) -> Result<(), ContainerError> {
        self.client
            .stop_container(name, None::<StopContainerOptions>)
            .await
            .map_err(map_container_stop_error)
    }

    async fn pause_container(&self, name: &str) -> Result<(), ContainerError> {
        self.client
            .pause_container(name)
            .await
            .map_err(map_container_conflict_error)
    }

    async fn unpause_container(&self, name: &str) -> Result<(), ContainerError> {
        self.client
            .unpause_container(name)
            .await
            .map_err(map_container_conflict_error)
    }

    async fn restart_container(&self, name: &str) -> Result<(), ContainerError> {
        self.client
            .restart_container(name, None::<RestartContainerOptions>)
            .await
            .map_err(map_container_not_found_error)
    }

    async fn kill_container(&self, name: &str) -> Result<(), ContainerError> {
        self.client
            .kill_container(name, None::<KillContainerOptions>)
            .await
            .map_err(map_container_conflict_error)
    }

    async fn remove_container(&self, name: &str, force: bool) -> Result<(), ContainerError> {
        let opts = RemoveContainerOptions {
            force,
            ..Default::default()
        };

        self.client
            .remove_container(name, Some(opts))
            .await
            .map_err(map_container_conflict_error)
    }
}

#[async_trait]
impl EventOps for BollardRuntime {
    async fn container_events(&self, actions: &[EventAction]) -> Result<EventStream, EventError> {
        let mut filters: HashMap<String, Vec<String>> = HashMap::new();
        filters.insert("type".to_string(), vec!["container".to_string()]);
        filters.insert(
            "event".to_string(),
            actions.iter().map(|a| a.as_str().to_string()).collect(),
        );

        let opts = EventsOptions {
            filters: Some(filters),
            ..Default::default()
        };

        let stream = self.client.events(Some(opts)).map(|result| {
            result
                .map(map_event_message)
                .map_err(|e| EventError::StreamError(e.to_string()))
        });

        Ok(Box::pin(stream))
    }
}
