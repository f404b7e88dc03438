// ABOUTME: Event subscription settings.
// ABOUTME: Channel capacity and reconnect backoff for the runtime event feed.

use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventsConfig {
    /// Capacity of the channel between the listener task and its consumer.
    #[serde(default = "default_buffer")]
    pub buffer: usize,

    /// Reopen the event feed after it drops.
    #[serde(default = "default_reconnect")]
    pub reconnect: bool,

    #[serde(default = "default_initial_backoff", with = "humantime_serde")]
    pub initial_backoff: Duration,

    #[serde(default = "default_max_backoff", with = "humantime_serde")]
    pub max_backoff: Duration,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            buffer: default_buffer(),
            reconnect: default_reconnect(),
            initial_backoff: default_initial_backoff(),
            max_backoff: default_max_backoff(),
        }
    }
}

impl EventsConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.buffer == 0 {
            return Err("events.buffer must be at least 1".to_string());
        }
        if self.initial_backoff > self.max_backoff {
            return Err(format!(
                "events.initial_backoff ({:?}) exceeds events.max_backoff ({:?})",
                self.initial_backoff, self.max_backoff
            ));
        }
        Ok(())
    }
}

fn default_buffer() -> usize {
    16
}

fn default_reconnect() -> bool {
    true
}

fn default_initial_backoff() -> Duration {
    Duration::from_secs(1)
}

fn default_max_backoff() -> Duration {
    Duration::from_secs(30)
}
