// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Supports normal, quiet (names only), and JSON output modes.

use crate::extract;
use crate::runtime::RuntimeMetadata;
use crate::view::ContainerView;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Instant;

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-friendly tables and progress messages
    Normal,
    /// Minimal output for scripts (names and final results only)
    Quiet,
    /// JSON lines
    Json,
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
    start_time: Option<Instant>,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            start_time: None,
        }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Start timing an operation.
    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Get elapsed time since timer started.
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    /// Print a progress message (suppressed in quiet/json mode).
    pub fn progress(&self, message: &str) {
        if self.mode == OutputMode::Normal {
            println!("{message}");
        }
    }

    /// Print a success message with optional timing.
    pub fn success(&self, message: &str) {
        match self.mode {
            OutputMode::Normal => {
                let elapsed = self.elapsed_secs();
                if elapsed > 0.0 {
                    println!("{message} ({:.1}s)", elapsed);
                } else {
                    println!("{message}");
                }
            }
            OutputMode::Quiet => println!("{message}"),
            OutputMode::Json => self.emit_json("success", message, false),
        }
    }

    /// Print a warning (suppressed in quiet mode).
    pub fn warning(&self, message: &str) {
        match self.mode {
            OutputMode::Normal => eprintln!("Warning: {message}"),
            OutputMode::Quiet => {}
            OutputMode::Json => self.emit_json("warning", message, true),
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => eprintln!("Error: {message}"),
            OutputMode::Json => self.emit_json("error", message, true),
        }
    }

    /// Print a container listing.
    pub fn containers(&self, views: &[ContainerView]) {
        match self.mode {
            OutputMode::Normal => {
                println!(
                    "{:<24} {:<32} {:<12} {:<28} PORTS",
                    "NAME", "IMAGE", "STATUS", "ACTIONS"
                );
                for view in views {
                    println!(
                        "{:<24} {:<32} {:<12} {:<28} {}",
                        view.name,
                        or_dash(&view.image),
                        or_dash(view.status_label),
                        action_list(view),
                        port_summary(view)
                    );
                }
            }
            OutputMode::Quiet => {
                for view in views {
                    println!("{}", view.name);
                }
            }
            OutputMode::Json => {
                for view in views {
                    print_json(view);
                }
            }
        }
    }

    /// Print the full detail of one container.
    pub fn container(&self, view: &ContainerView) {
        match self.mode {
            OutputMode::Normal => {
                println!("Name:        {}", view.name);
                println!("Id:          {}", view.id.short());
                println!("Image:       {}", or_dash(&view.image));
                println!("Status:      {}", or_dash(view.status_label));
                println!(
                    "Created:     {}",
                    view.created_local().unwrap_or_else(|| "-".to_string())
                );
                println!(
                    "Started:     {}",
                    view.started_local().unwrap_or_else(|| "-".to_string())
                );
                println!("Command:     {}", view.command.as_deref().unwrap_or("-"));
                println!("Entrypoint:  {}", view.entrypoint.as_deref().unwrap_or("-"));
                match view.restart_policy.max_retries() {
                    Some(n) => println!("Restart:     {} (max {} retries)", view.restart_policy, n),
                    None => println!("Restart:     {}", view.restart_policy),
                }
                println!("Actions:     {}", action_list(view));

                section(
                    "Ports",
                    view.ports
                        .iter()
                        .map(|(port, hosts)| (port.as_str(), extract::ports_display(hosts))),
                );
                section("Mounts", pairs(&view.mounts));
                section("Networks", pairs(&view.networks));
                section("Environment", pairs(&view.environment));
            }
            OutputMode::Quiet => println!("{}", view.status),
            OutputMode::Json => print_json(view),
        }
    }

    /// Print runtime metadata.
    pub fn runtime_info(&self, info: &RuntimeMetadata) {
        match self.mode {
            OutputMode::Normal => {
                println!("Runtime:      {}", info.name);
                println!("Version:      {}", info.version);
                println!("API version:  {}", info.api_version);
                println!("Platform:     {}/{}", info.os, info.arch);
            }
            OutputMode::Quiet => println!("{}", info.version),
            OutputMode::Json => print_json(info),
        }
    }

    fn emit_json(&self, event: &str, message: &str, stderr: bool) {
        let event = JsonEvent {
            event,
            message,
            duration_secs: self.start_time.map(|_| self.elapsed_secs()),
        };
        if let Ok(json) = serde_json::to_string(&event) {
            if stderr {
                eprintln!("{json}");
            } else {
                println!("{json}");
            }
        }
    }
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_secs: Option<f64>,
}

fn print_json<T: Serialize>(value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        println!("{json}");
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn action_list(view: &ContainerView) -> String {
    let actions: Vec<&str> = view.actions().iter().map(|a| a.as_str()).collect();
    if actions.is_empty() {
        "-".to_string()
    } else {
        actions.join(",")
    }
}

fn port_summary(view: &ContainerView) -> String {
    if view.ports.is_empty() {
        return "-".to_string();
    }
    view.ports
        .iter()
        .map(|(port, hosts)| {
            if hosts.is_empty() {
                port.clone()
            } else {
                format!("{}->{}", extract::ports_display(hosts), port)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn pairs(map: &BTreeMap<String, String>) -> impl Iterator<Item = (&str, String)> {
    map.iter().map(|(k, v)| (k.as_str(), v.clone()))
}

fn section<'a>(title: &str, rows: impl Iterator<Item = (&'a str, String)>) {
    let rows: Vec<_> = rows.collect();
    if rows.is_empty() {
        return;
    }
    println!("{title}:");
    for (key, value) in rows {
        println!("  {key}: {value}");
    }
}
