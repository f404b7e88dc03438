// ABOUTME: Shared helper for connecting to the local container runtime.
// ABOUTME: Detection plus client construction, used by every command.

use dockery::config::Config;
use dockery::error::Result;
use dockery::output::Output;
use dockery::runtime::{BollardRuntime, RuntimeError, detect_local};
use std::sync::Arc;

/// Detect the local runtime from configuration and connect to it.
pub fn connect_local(config: &Config, output: &Output) -> Result<Arc<BollardRuntime>> {
    let runtime_info =
        detect_local(Some(&config.runtime_config())).map_err(RuntimeError::from)?;

    tracing::debug!(
        "found {} at {}",
        runtime_info.runtime_type,
        runtime_info.socket_path
    );
    output.progress(&format!(
        "→ Using {} at {}",
        runtime_info.runtime_type, runtime_info.socket_path
    ));

    let runtime =
        BollardRuntime::connect(&runtime_info, config.timeout).map_err(RuntimeError::from)?;

    Ok(Arc::new(runtime))
}
