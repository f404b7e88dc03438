// ABOUTME: Lifecycle command dispatcher.
// ABOUTME: One runtime call per command; runtime errors are returned unchanged.

use crate::config::RemoveMode;
use crate::runtime::{ContainerError, ContainerOps};
use crate::status::ActionKind;
use std::sync::Arc;

pub struct CommandDispatcher<R> {
    runtime: Arc<R>,
    remove_mode: RemoveMode,
}

impl<R: ContainerOps> CommandDispatcher<R> {
    pub fn new(runtime: Arc<R>, remove_mode: RemoveMode) -> Self {
        Self {
            runtime,
            remove_mode,
        }
    }

    pub fn remove_mode(&self) -> RemoveMode {
        self.remove_mode
    }

    /// Issue `action` against the named container and wait for the runtime
    /// to acknowledge it. No retries.
    pub async fn dispatch(&self, action: ActionKind, name: &str) -> Result<(), ContainerError> {
        tracing::info!("{} {}", action, name);

        let result = match action {
            ActionKind::Start => self.runtime.start_container(name).await,
            ActionKind::Stop => self.runtime.stop_container(name).await,
            ActionKind::Pause => self.runtime.pause_container(name).await,
            ActionKind::Resume => self.runtime.unpause_container(name).await,
            ActionKind::Restart => self.runtime.restart_container(name).await,
            ActionKind::Kill => self.runtime.kill_container(name).await,
            ActionKind::Remove => match self.remove_mode {
                RemoveMode::Kill => self.runtime.kill_container(name).await,
                RemoveMode::Remove => self.runtime.remove_container(name, true).await,
            },
        };

        if let Err(e) = &result {
            tracing::warn!("{} {} failed: {}", action, name, e);
        }
        result
    }

    pub async fn start(&self, name: &str) -> Result<(), ContainerError> {
        self.dispatch(ActionKind::Start, name).await
    }

    pub async fn stop(&self, name: &str) -> Result<(), ContainerError> {
        self.dispatch(ActionKind::Stop, name).await
    }

    pub async fn pause(&self, name: &str) -> Result<(), ContainerError> {
        self.dispatch(ActionKind::Pause, name).await
    }

    pub async fn resume(&self, name: &str) -> Result<(), ContainerError> {
        self.dispatch(ActionKind::Resume, name).await
    }

    pub async fn restart(&self, name: &str) -> Result<(), ContainerError> {
        self.dispatch(ActionKind::Restart, name).await
    }

    pub async fn kill(&self, name: &str) -> Result<(), ContainerError> {
        self.dispatch(ActionKind::Kill, name).await
    }

    /// Remove the container according to the configured [`RemoveMode`].
    pub async fn remove(&self, name: &str) -> Result<(), ContainerError> {
        self.dispatch(ActionKind::Remove, name).await
    }
}
