// ABOUTME: Shared types used across runtime trait definitions.
// ABOUTME: ContainerRecord, RuntimeEvent, EventAction, RuntimeMetadata.

use crate::extract;
use crate::types::{ContainerId, ImageId};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Raw container record as the runtime reports it.
///
/// `attrs` is the inspect document (`Id`, `Name`, `State`, `Config`,
/// `HostConfig`, `Mounts`, `NetworkSettings`, ...) kept as nested JSON so
/// that missing or oddly shaped fields never fail decoding. The image's
/// tags live outside the inspect document and are carried separately.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerRecord {
    attrs: Value,
    image_tags: Vec<String>,
}

impl ContainerRecord {
    pub fn new(attrs: Value) -> Self {
        Self {
            attrs,
            image_tags: Vec::new(),
        }
    }

    pub fn with_image_tags(mut self, tags: Vec<String>) -> Self {
        self.image_tags = tags;
        self
    }

    pub fn attrs(&self) -> &Value {
        &self.attrs
    }

    pub fn image_tags(&self) -> &[String] {
        &self.image_tags
    }

    pub fn id(&self) -> ContainerId {
        ContainerId::new(extract::str_attribute(&self.attrs, "Id").unwrap_or_default())
    }

    /// Container name without the leading `/` the engine prefixes.
    pub fn name(&self) -> String {
        extract::str_attribute(&self.attrs, "Name")
            .unwrap_or_default()
            .trim_start_matches('/')
            .to_string()
    }

    /// Engine status string (`running`, `exited`, ...), empty when absent.
    pub fn status(&self) -> &str {
        extract::str_attribute(&self.attrs, "State.Status").unwrap_or_default()
    }

    /// Id of the image the container was created from.
    pub fn image_id(&self) -> Option<ImageId> {
        extract::str_attribute(&self.attrs, "Image")
            .filter(|s| !s.is_empty())
            .map(ImageId::new)
    }
}

/// Lifecycle-affecting container event actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventAction {
    Start,
    Stop,
    Die,
    Pause,
    Unpause,
    Restart,
    Destroy,
}

impl EventAction {
    /// Every action that can change what a container listing shows.
    pub const ALL: [EventAction; 7] = [
        EventAction::Start,
        EventAction::Stop,
        EventAction::Die,
        EventAction::Pause,
        EventAction::Unpause,
        EventAction::Restart,
        EventAction::Destroy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventAction::Start => "start",
            EventAction::Stop => "stop",
            EventAction::Die => "die",
            EventAction::Pause => "pause",
            EventAction::Unpause => "unpause",
            EventAction::Restart => "restart",
            EventAction::Destroy => "destroy",
        }
    }
}

impl fmt::Display for EventAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventAction::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| format!("unknown event action: {}", s))
    }
}

/// A single event from the runtime's event feed.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeEvent {
    /// Object type (`container`, `image`, ...).
    pub kind: String,
    /// Raw action string (`start`, `die`, ...).
    pub action: String,
    /// Id of the object the event is about.
    pub actor_id: ContainerId,
    /// Actor attributes (`name`, `image`, labels).
    pub attributes: HashMap<String, String>,
    /// Unix timestamp in seconds.
    pub time: Option<i64>,
}

impl RuntimeEvent {
    pub fn container(action: EventAction, actor_id: impl Into<String>) -> Self {
        Self {
            kind: "container".to_string(),
            action: action.as_str().to_string(),
            actor_id: ContainerId::new(actor_id),
            attributes: HashMap::new(),
            time: None,
        }
    }

    /// The lifecycle action, if the raw action is one we track.
    pub fn lifecycle_action(&self) -> Option<EventAction> {
        self.action.parse().ok()
    }

    /// Container name from the actor attributes.
    pub fn actor_name(&self) -> Option<&str> {
        self.attributes.get("name").map(String::as_str)
    }
}

/// Runtime metadata.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RuntimeMetadata {
    /// Runtime name (e.g., "Docker", "Podman").
    pub name: String,
    /// Runtime version.
    pub version: String,
    /// API version.
    pub api_version: String,
    /// Operating system.
    pub os: String,
    /// Architecture.
    pub arch: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_name_strips_leading_slash() {
        let record = ContainerRecord::new(json!({ "Name": "/web" }));
        assert_eq!(record.name(), "web");
    }

    #[test]
    fn record_accessors_default_when_missing() {
        let record = ContainerRecord::new(json!({}));
        assert!(record.id().is_empty());
        assert_eq!(record.name(), "");
        assert_eq!(record.status(), "");
        assert!(record.image_id().is_none());
    }

    #[test]
    fn event_action_parses_known_actions() {
        for action in EventAction::ALL {
            assert_eq!(action.as_str().parse::<EventAction>(), Ok(action));
        }
        assert!("exec_start".parse::<EventAction>().is_err());
    }

    #[test]
    fn event_exposes_actor_name() {
        let mut event = RuntimeEvent::container(EventAction::Die, "abc");
        event
            .attributes
            .insert("name".to_string(), "web".to_string());
        assert_eq!(event.actor_name(), Some("web"));
        assert_eq!(event.lifecycle_action(), Some(EventAction::Die));
    }
}
