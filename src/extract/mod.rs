// ABOUTME: Pure extractors from raw container records to display fields.
// ABOUTME: Every extractor tolerates missing or oddly shaped fields and never fails.

mod mount_mode;
mod timestamp;

pub use mount_mode::humanize_mount_mode;
pub use timestamp::{parse_timestamp, to_local};

use crate::runtime::ContainerRecord;
use crate::types::RestartPolicy;
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::BTreeMap;

/// Walk a dotted path (`"State.StartedAt"`) through nested mappings.
///
/// Returns `None` as soon as a segment is missing or the value at that
/// point is not a mapping.
pub fn attribute<'a>(attrs: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(attrs, |current, key| current.as_object()?.get(key))
}

/// [`attribute`] with a caller-supplied fallback.
pub fn attribute_or<'a>(attrs: &'a Value, path: &str, default: &'a Value) -> &'a Value {
    attribute(attrs, path).unwrap_or(default)
}

/// [`attribute`] narrowed to a string value.
pub fn str_attribute<'a>(attrs: &'a Value, path: &str) -> Option<&'a str> {
    attribute(attrs, path).and_then(Value::as_str)
}

/// First tag of the container's image, empty when the image is untagged.
pub fn image_tag(record: &ContainerRecord) -> String {
    record.image_tags().first().cloned().unwrap_or_default()
}

/// Render a command-like field: lists are joined with single spaces,
/// strings pass through, anything else (or an empty value) is absent.
pub fn command_line(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(tokens) if !tokens.is_empty() => Some(
            tokens
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(" "),
        ),
        _ => None,
    }
}

pub fn cmd(attrs: &Value) -> Option<String> {
    command_line(attribute(attrs, "Config.Cmd"))
}

pub fn entrypoint(attrs: &Value) -> Option<String> {
    command_line(attribute(attrs, "Config.Entrypoint"))
}

/// Restart policy from `HostConfig.RestartPolicy`, `no` when absent.
pub fn restart_policy(attrs: &Value) -> RestartPolicy {
    let name = str_attribute(attrs, "HostConfig.RestartPolicy.Name").unwrap_or("no");
    let retries = attribute(attrs, "HostConfig.RestartPolicy.MaximumRetryCount")
        .and_then(Value::as_i64);
    RestartPolicy::from_runtime(name, retries)
}

/// Parse `KEY=VALUE` entries, splitting on the first `=` only.
///
/// Entries without `=` are dropped. Later duplicates win.
pub fn parse_env<I, S>(entries: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries
        .into_iter()
        .filter_map(|entry| {
            let (key, value) = entry.as_ref().split_once('=')?;
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Environment variables from `Config.Env`.
pub fn environment(attrs: &Value) -> BTreeMap<String, String> {
    match attribute(attrs, "Config.Env") {
        Some(Value::Array(entries)) => parse_env(entries.iter().filter_map(Value::as_str)),
        _ => BTreeMap::new(),
    }
}

/// Mounts keyed by volume name (or source path), valued by humanized mode.
pub fn mounts(attrs: &Value) -> BTreeMap<String, String> {
    let Some(Value::Array(items)) = attribute(attrs, "Mounts") else {
        return BTreeMap::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let name = [str_attribute(item, "Name"), str_attribute(item, "Source")]
                .into_iter()
                .flatten()
                .find(|s| !s.is_empty())?;
            let mode = humanize_mount_mode(str_attribute(item, "Mode"));
            Some((name.to_string(), mode))
        })
        .collect()
}

/// Network name to IP address; networks without an address are omitted.
pub fn networks(attrs: &Value) -> BTreeMap<String, String> {
    let Some(Value::Object(nets)) = attribute(attrs, "NetworkSettings.Networks") else {
        return BTreeMap::new();
    };

    nets.iter()
        .filter_map(|(name, endpoint)| {
            let ip = str_attribute(endpoint, "IPAddress").filter(|ip| !ip.is_empty())?;
            Some((name.clone(), ip.to_string()))
        })
        .collect()
}

/// Container port spec (`"80/tcp"`) to the host ports bound to it, in the
/// order the runtime reports them. A binding without a host port shows `-`.
pub fn ports(attrs: &Value) -> BTreeMap<String, Vec<String>> {
    let Some(Value::Object(bindings)) = attribute(attrs, "HostConfig.PortBindings") else {
        return BTreeMap::new();
    };

    bindings
        .iter()
        .map(|(port, items)| {
            let hosts = items
                .as_array()
                .map(|items| {
                    items
                        .iter()
                        .map(|binding| {
                            str_attribute(binding, "HostPort")
                                .filter(|p| !p.is_empty())
                                .unwrap_or("-")
                                .to_string()
                        })
                        .collect()
                })
                .unwrap_or_default();
            (port.clone(), hosts)
        })
        .collect()
}

/// Host ports joined for display (`"8080, 8081"`).
pub fn ports_display(hosts: &[String]) -> String {
    hosts.join(", ")
}

pub fn created_at(attrs: &Value) -> Option<DateTime<Utc>> {
    str_attribute(attrs, "Created").and_then(parse_timestamp)
}

pub fn started_at(attrs: &Value) -> Option<DateTime<Utc>> {
    str_attribute(attrs, "State.StartedAt").and_then(parse_timestamp)
}
