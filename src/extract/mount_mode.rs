// ABOUTME: Human-readable rendering of a mount's mode flag string.
// ABOUTME: Covers access (ro/rw), SELinux relabeling (z/Z) and propagation flags.

use std::collections::HashSet;

/// Render a mount mode such as `"ro,z"` for display.
///
/// ```
/// use dockery::extract::humanize_mount_mode;
///
/// assert_eq!(humanize_mount_mode(None), "Read-write");
/// assert_eq!(humanize_mount_mode(Some("ro,z")), "Read-only (shared (SELinux))");
/// ```
pub fn humanize_mount_mode(mode: Option<&str>) -> String {
    let Some(mode) = mode.filter(|m| !m.is_empty()) else {
        return "Read-write".to_string();
    };

    let flags: HashSet<&str> = mode.split(',').map(str::trim).collect();

    let access = if flags.contains("ro") {
        "Read-only"
    } else {
        "Read-write"
    };

    let mut extras = Vec::new();

    if flags.contains("z") {
        extras.push("shared (SELinux)");
    } else if flags.contains("Z") {
        extras.push("private (SELinux)");
    }

    if flags.contains("rshared") {
        extras.push("shared");
    } else if flags.contains("rslave") {
        extras.push("slave");
    } else if flags.contains("rprivate") {
        extras.push("private");
    }

    if extras.is_empty() {
        access.to_string()
    } else {
        format!("{} ({})", access, extras.join(", "))
    }
}
