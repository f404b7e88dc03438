// ABOUTME: Lifecycle actions a user can take on a container.
// ABOUTME: Each action carries a display label and an icon name.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Start,
    Stop,
    Pause,
    Resume,
    Restart,
    Kill,
    Remove,
}

impl ActionKind {
    pub const ALL: [ActionKind; 7] = [
        ActionKind::Start,
        ActionKind::Stop,
        ActionKind::Pause,
        ActionKind::Resume,
        ActionKind::Restart,
        ActionKind::Kill,
        ActionKind::Remove,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::Start => "start",
            ActionKind::Stop => "stop",
            ActionKind::Pause => "pause",
            ActionKind::Resume => "resume",
            ActionKind::Restart => "restart",
            ActionKind::Kill => "kill",
            ActionKind::Remove => "remove",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActionKind::Start => "Start",
            ActionKind::Stop => "Stop",
            ActionKind::Pause => "Pause",
            ActionKind::Resume => "Resume",
            ActionKind::Restart => "Restart",
            ActionKind::Kill => "Kill",
            ActionKind::Remove => "Remove",
        }
    }

    /// Icon resource name used by graphical front ends.
    pub fn icon(self) -> &'static str {
        match self {
            ActionKind::Start => "play.svg",
            ActionKind::Stop => "circle-crossed.svg",
            ActionKind::Pause => "pause.svg",
            ActionKind::Resume => "arrow-pointing-away.svg",
            ActionKind::Restart => "reload.svg",
            ActionKind::Kill => "cross.svg",
            ActionKind::Remove => "trash.svg",
        }
    }

    /// Past-tense verb for confirmations ("Stopped web").
    pub fn past_tense(self) -> &'static str {
        match self {
            ActionKind::Start => "Started",
            ActionKind::Stop => "Stopped",
            ActionKind::Pause => "Paused",
            ActionKind::Resume => "Resumed",
            ActionKind::Restart => "Restarted",
            ActionKind::Kill => "Killed",
            ActionKind::Remove => "Removed",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            // Engine vocabulary for resume.
            "unpause" => Ok(ActionKind::Resume),
            _ => ActionKind::ALL
                .into_iter()
                .find(|a| a.as_str() == s)
                .ok_or_else(|| format!("unknown action: {}", s)),
        }
    }
}
