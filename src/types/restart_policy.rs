// ABOUTME: Container restart policy as reported by the runtime.
// ABOUTME: Renders as the bare policy name; the on-failure retry limit is kept separately.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RestartPolicy {
    #[default]
    No,
    Always,
    UnlessStopped,
    OnFailure {
        max_retries: Option<u32>,
    },
    /// A policy name this crate does not know about, kept verbatim.
    Other(String),
}

impl RestartPolicy {
    /// Build a policy from the runtime's `Name` and `MaximumRetryCount` pair.
    ///
    /// Never fails: an empty name means `no`, unknown names are kept as
    /// [`RestartPolicy::Other`].
    pub fn from_runtime(name: &str, maximum_retry_count: Option<i64>) -> Self {
        match name {
            "" | "no" => RestartPolicy::No,
            "on-failure" => RestartPolicy::OnFailure {
                max_retries: maximum_retry_count
                    .filter(|n| *n > 0)
                    .and_then(|n| u32::try_from(n).ok()),
            },
            other => other
                .parse()
                .unwrap_or_else(|_| RestartPolicy::Other(other.to_string())),
        }
    }

    /// The policy name as the runtime reports it (`on-failure`, never
    /// `on-failure:5`).
    pub fn name(&self) -> &str {
        match self {
            RestartPolicy::No => "no",
            RestartPolicy::Always => "always",
            RestartPolicy::UnlessStopped => "unless-stopped",
            RestartPolicy::OnFailure { .. } => "on-failure",
            RestartPolicy::Other(name) => name,
        }
    }

    /// Retry limit of an `on-failure` policy.
    pub fn max_retries(&self) -> Option<u32> {
        match self {
            RestartPolicy::OnFailure { max_retries } => *max_retries,
            _ => None,
        }
    }
}

impl FromStr for RestartPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no" => Ok(RestartPolicy::No),
            "always" => Ok(RestartPolicy::Always),
            "unless-stopped" => Ok(RestartPolicy::UnlessStopped),
            "on-failure" => Ok(RestartPolicy::OnFailure { max_retries: None }),
            s if s.starts_with("on-failure:") => {
                let retries_str = &s["on-failure:".len()..];
                let retries = retries_str
                    .parse::<u32>()
                    .map_err(|_| format!("invalid max retries: {}", retries_str))?;
                Ok(RestartPolicy::OnFailure {
                    max_retries: Some(retries),
                })
            }
            _ => Err(format!("unknown restart policy: {}", s)),
        }
    }
}

impl fmt::Display for RestartPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for RestartPolicy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_means_no() {
        assert_eq!(RestartPolicy::from_runtime("", None), RestartPolicy::No);
    }

    #[test]
    fn on_failure_carries_retry_count() {
        assert_eq!(
            RestartPolicy::from_runtime("on-failure", Some(5)),
            RestartPolicy::OnFailure {
                max_retries: Some(5)
            }
        );
        assert_eq!(
            RestartPolicy::from_runtime("on-failure", Some(0)),
            RestartPolicy::OnFailure { max_retries: None }
        );
    }

    #[test]
    fn on_failure_renders_name_only() {
        let policy = RestartPolicy::from_runtime("on-failure", Some(5));
        assert_eq!(policy.to_string(), "on-failure");
        assert_eq!(policy.max_retries(), Some(5));
        assert_eq!(serde_json::to_value(&policy).unwrap(), "on-failure");
    }

    #[test]
    fn unknown_name_is_kept() {
        let policy = RestartPolicy::from_runtime("sometimes", None);
        assert_eq!(policy, RestartPolicy::Other("sometimes".to_string()));
        assert_eq!(policy.to_string(), "sometimes");
    }

    #[test]
    fn parse_rejects_bad_retry_count() {
        assert!("on-failure:lots".parse::<RestartPolicy>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for name in ["no", "always", "unless-stopped", "on-failure"] {
            let policy: RestartPolicy = name.parse().unwrap();
            assert_eq!(policy.to_string(), name);
        }
        let limited: RestartPolicy = "on-failure:3".parse().unwrap();
        assert_eq!(limited.max_retries(), Some(3));
        assert_eq!(limited.to_string(), "on-failure");
    }
}
