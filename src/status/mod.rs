// ABOUTME: Status policy table: lifecycle state to label, style and permitted actions.
// ABOUTME: Also defines the order containers are listed in.

mod action;

pub use action::ActionKind;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Engine-reported run status of a container.
///
/// Variants are declared in listing order: running first, dead last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleState {
    Running,
    Paused,
    Restarting,
    Created,
    Exited,
    Dead,
}

/// Badge colour for a lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusStyle {
    Green,
    Blue,
    Red,
    Gray,
    Orange,
    Black,
}

/// Presentation policy for one lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPolicy {
    pub label: &'static str,
    pub style: StatusStyle,
    /// Permitted actions, most relevant first.
    pub actions: &'static [ActionKind],
}

const RUNNING: StatusPolicy = StatusPolicy {
    label: "Running",
    style: StatusStyle::Green,
    actions: &[
        ActionKind::Stop,
        ActionKind::Pause,
        ActionKind::Restart,
        ActionKind::Kill,
    ],
};

const PAUSED: StatusPolicy = StatusPolicy {
    label: "Paused",
    style: StatusStyle::Blue,
    actions: &[ActionKind::Resume, ActionKind::Stop, ActionKind::Kill],
};

const RESTARTING: StatusPolicy = StatusPolicy {
    label: "Restarting",
    style: StatusStyle::Red,
    actions: &[ActionKind::Stop, ActionKind::Kill],
};

const CREATED: StatusPolicy = StatusPolicy {
    label: "Created",
    style: StatusStyle::Gray,
    actions: &[ActionKind::Start, ActionKind::Remove],
};

const EXITED: StatusPolicy = StatusPolicy {
    label: "Exited",
    style: StatusStyle::Orange,
    actions: &[ActionKind::Start, ActionKind::Remove],
};

const DEAD: StatusPolicy = StatusPolicy {
    label: "Dead",
    style: StatusStyle::Black,
    actions: &[],
};

impl LifecycleState {
    /// All states in listing order.
    pub const ALL: [LifecycleState; 6] = [
        LifecycleState::Running,
        LifecycleState::Paused,
        LifecycleState::Restarting,
        LifecycleState::Created,
        LifecycleState::Exited,
        LifecycleState::Dead,
    ];

    /// Parse an engine status string. `stopped` is accepted as `exited`.
    pub fn parse(status: &str) -> Option<Self> {
        match status {
            "running" => Some(LifecycleState::Running),
            "paused" => Some(LifecycleState::Paused),
            "restarting" => Some(LifecycleState::Restarting),
            "created" => Some(LifecycleState::Created),
            "exited" | "stopped" => Some(LifecycleState::Exited),
            "dead" => Some(LifecycleState::Dead),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LifecycleState::Running => "running",
            LifecycleState::Paused => "paused",
            LifecycleState::Restarting => "restarting",
            LifecycleState::Created => "created",
            LifecycleState::Exited => "exited",
            LifecycleState::Dead => "dead",
        }
    }

    pub fn policy(self) -> &'static StatusPolicy {
        match self {
            LifecycleState::Running => &RUNNING,
            LifecycleState::Paused => &PAUSED,
            LifecycleState::Restarting => &RESTARTING,
            LifecycleState::Created => &CREATED,
            LifecycleState::Exited => &EXITED,
            LifecycleState::Dead => &DEAD,
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LifecycleState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LifecycleState::parse(s).ok_or_else(|| format!("unknown lifecycle state: {}", s))
    }
}

impl StatusStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusStyle::Green => "green",
            StatusStyle::Blue => "blue",
            StatusStyle::Red => "red",
            StatusStyle::Gray => "gray",
            StatusStyle::Orange => "orange",
            StatusStyle::Black => "black",
        }
    }

    /// Badge CSS class, e.g. `tag-green`.
    pub fn css_class(self) -> String {
        format!("tag-{}", self.as_str())
    }
}

impl fmt::Display for StatusStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display label, empty for unknown states.
pub fn status_label(state: Option<LifecycleState>) -> &'static str {
    state.map(|s| s.policy().label).unwrap_or("")
}

/// Style class, empty for unknown states.
pub fn status_class(state: Option<LifecycleState>) -> &'static str {
    state.map(|s| s.policy().style.as_str()).unwrap_or("")
}

/// Permitted actions in priority order, empty for unknown states.
pub fn actions(state: Option<LifecycleState>) -> &'static [ActionKind] {
    state.map(|s| s.policy().actions).unwrap_or(&[])
}

/// The single most relevant action, if any.
pub fn next_action(state: Option<LifecycleState>) -> Option<ActionKind> {
    actions(state).first().copied()
}

/// Position in the listing order; unknown states sort after all known ones.
pub fn sort_rank(state: Option<LifecycleState>) -> usize {
    state
        .and_then(|s| LifecycleState::ALL.iter().position(|known| *known == s))
        .unwrap_or(LifecycleState::ALL.len())
}

/// Stable sort by listing order. Items with equal rank keep their relative
/// order.
pub fn sort_containers<T, F>(items: &mut [T], state_of: F)
where
    F: Fn(&T) -> Option<LifecycleState>,
{
    items.sort_by_key(|item| sort_rank(state_of(item)));
}
