// ABOUTME: What the remove action sends to the runtime.
// ABOUTME: kill (historical behavior) or a forced removal.

use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoveMode {
    /// Kill the container and leave it in place.
    #[default]
    Kill,
    /// Force-remove the container.
    Remove,
}

impl fmt::Display for RemoveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoveMode::Kill => write!(f, "kill"),
            RemoveMode::Remove => write!(f, "remove"),
        }
    }
}
