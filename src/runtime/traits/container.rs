// ABOUTME: Container operations trait for container runtimes.
// ABOUTME: List, inspect, and drive the lifecycle of containers by name.

use super::shared_types::ContainerRecord;
use async_trait::async_trait;

/// Container queries and lifecycle commands.
///
/// Every method takes a container name or id; the runtime resolves either.
#[async_trait]
pub trait ContainerOps: Send + Sync {
    /// List containers, including stopped ones when `all` is set.
    async fn list_containers(&self, all: bool) -> Result<Vec<ContainerRecord>, ContainerError>;

    /// Get the full record of a single container.
    async fn inspect_container(&self, name: &str) -> Result<ContainerRecord, ContainerError>;

    /// Start a created or stopped container.
    async fn start_container(&self, name: &str) -> Result<(), ContainerError>;

    /// Stop a running container using the runtime's default grace period.
    async fn stop_container(&self, name: &str) -> Result<(), ContainerError>;

    /// Freeze all processes in a container.
    async fn pause_container(&self, name: &str) -> Result<(), ContainerError>;

    /// Resume a paused container.
    async fn unpause_container(&self, name: &str) -> Result<(), ContainerError>;

    /// Restart a container.
    async fn restart_container(&self, name: &str) -> Result<(), ContainerError>;

    /// Send SIGKILL to a container.
    async fn kill_container(&self, name: &str) -> Result<(), ContainerError>;

    /// Remove a container.
    async fn remove_container(&self, name: &str, force: bool) -> Result<(), ContainerError>;
}

/// Errors from container operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContainerError {
    #[error("container not found: {0}")]
    NotFound(String),

    #[error("container not running: {0}")]
    NotRunning(String),

    #[error("container already running: {0}")]
    AlreadyRunning(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}
