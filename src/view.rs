// ABOUTME: ContainerView, the read-only display snapshot of one container.
// ABOUTME: Built deterministically from a raw record; missing fields become defaults.

use crate::extract;
use crate::runtime::ContainerRecord;
use crate::status::{self, ActionKind, LifecycleState};
use crate::types::{ContainerId, RestartPolicy};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerView {
    pub id: ContainerId,
    pub name: String,
    /// First image tag, empty when untagged.
    pub image: String,
    /// Parsed lifecycle state, `None` for statuses outside the table.
    pub state: Option<LifecycleState>,
    /// Raw engine status string.
    pub status: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub created_at: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub command: Option<String>,
    pub entrypoint: Option<String>,
    pub restart_policy: RestartPolicy,
    pub environment: BTreeMap<String, String>,
    /// Volume name (or source path) to humanized access mode.
    pub mounts: BTreeMap<String, String>,
    /// Network name to IP address.
    pub networks: BTreeMap<String, String>,
    /// Container port spec to bound host ports.
    pub ports: BTreeMap<String, Vec<String>>,
}

impl ContainerView {
    pub fn from_record(record: &ContainerRecord) -> Self {
        let attrs = record.attrs();
        let status = record.status().to_string();
        let state = LifecycleState::parse(&status);

        Self {
            id: record.id(),
            name: record.name(),
            image: extract::image_tag(record),
            state,
            status,
            status_label: status::status_label(state),
            status_class: status::status_class(state),
            created_at: extract::created_at(attrs),
            started_at: extract::started_at(attrs),
            command: extract::cmd(attrs),
            entrypoint: extract::entrypoint(attrs),
            restart_policy: extract::restart_policy(attrs),
            environment: extract::environment(attrs),
            mounts: extract::mounts(attrs),
            networks: extract::networks(attrs),
            ports: extract::ports(attrs),
        }
    }

    /// Permitted actions in priority order.
    pub fn actions(&self) -> &'static [ActionKind] {
        status::actions(self.state)
    }

    pub fn next_action(&self) -> Option<ActionKind> {
        status::next_action(self.state)
    }

    pub fn is_permitted(&self, action: ActionKind) -> bool {
        self.actions().contains(&action)
    }

    pub fn created_local(&self) -> Option<String> {
        self.created_at.as_ref().map(extract::to_local)
    }

    pub fn started_local(&self) -> Option<String> {
        self.started_at.as_ref().map(extract::to_local)
    }
}

/// Build views for a whole listing, sorted running-first.
pub fn build_views(records: &[ContainerRecord]) -> Vec<ContainerView> {
    let mut views: Vec<ContainerView> = records.iter().map(ContainerView::from_record).collect();
    status::sort_containers(&mut views, |v| v.state);
    views
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn nginx_record() -> ContainerRecord {
        ContainerRecord::new(json!({
            "Id": "4f1c2a9e8b7d",
            "Name": "/web",
            "Image": "sha256:0123",
            "Created": "2024-03-01T10:20:30.123456789Z",
            "State": { "Status": "running", "StartedAt": "2024-03-01T10:20:31Z" },
            "Config": {
                "Cmd": ["nginx", "-g", "daemon off;"],
                "Entrypoint": ["/docker-entrypoint.sh"],
                "Env": ["PATH=/usr/local/bin", "NGINX_VERSION=1.25.3"]
            },
            "HostConfig": {
                "RestartPolicy": { "Name": "always" },
                "PortBindings": { "80/tcp": [{ "HostPort": "8080" }] }
            },
            "Mounts": [{ "Name": "html", "Source": "/var/lib/docker/volumes/html", "Mode": "ro" }],
            "NetworkSettings": { "Networks": { "bridge": { "IPAddress": "172.17.0.2" } } }
        }))
        .with_image_tags(vec!["nginx:1.25".to_string()])
    }

    #[test]
    fn builds_every_field() {
        let view = ContainerView::from_record(&nginx_record());

        assert_eq!(view.id.as_str(), "4f1c2a9e8b7d");
        assert_eq!(view.name, "web");
        assert_eq!(view.image, "nginx:1.25");
        assert_eq!(view.state, Some(LifecycleState::Running));
        assert_eq!(view.status_label, "Running");
        assert_eq!(view.status_class, "green");
        assert!(view.created_at.is_some());
        assert!(view.started_at.is_some());
        assert_eq!(view.command.as_deref(), Some("nginx -g daemon off;"));
        assert_eq!(view.entrypoint.as_deref(), Some("/docker-entrypoint.sh"));
        assert_eq!(view.restart_policy, RestartPolicy::Always);
        assert_eq!(view.environment["NGINX_VERSION"], "1.25.3");
        assert_eq!(view.mounts["html"], "Read-only");
        assert_eq!(view.networks["bridge"], "172.17.0.2");
        assert_eq!(view.ports["80/tcp"], vec!["8080"]);
        assert!(view.is_permitted(ActionKind::Pause));
        assert!(!view.is_permitted(ActionKind::Start));
    }

    #[test]
    fn empty_record_yields_defaults() {
        let view = ContainerView::from_record(&ContainerRecord::new(json!({})));

        assert!(view.id.is_empty());
        assert_eq!(view.name, "");
        assert_eq!(view.image, "");
        assert!(view.state.is_none());
        assert_eq!(view.status_label, "");
        assert_eq!(view.restart_policy, RestartPolicy::No);
        assert!(view.environment.is_empty());
        assert!(view.mounts.is_empty());
        assert!(view.networks.is_empty());
        assert!(view.ports.is_empty());
        assert!(view.actions().is_empty());
    }

    #[test]
    fn serializes_state_and_policy_as_strings() {
        let view = ContainerView::from_record(&nginx_record());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["state"], "running");
        assert_eq!(json["restart_policy"], "always");
        assert_eq!(json["status_class"], "green");
    }
}
