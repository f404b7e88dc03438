// ABOUTME: List and inspect command implementations.
// ABOUTME: Reads container views through the cache.

use super::connect_local;
use dockery::config::Config;
use dockery::error::Result;
use dockery::output::Output;
use dockery::sync::ContainerCache;

/// Print every container, running first.
pub async fn list(config: Config, output: Output) -> Result<()> {
    let runtime = connect_local(&config, &output)?;
    let cache = ContainerCache::new(runtime);

    cache.reload().await?;
    output.containers(&cache.views());
    Ok(())
}

/// Print the full detail of one container, queried fresh.
pub async fn inspect(config: Config, name: &str, output: Output) -> Result<()> {
    let runtime = connect_local(&config, &output)?;
    let cache = ContainerCache::new(runtime);

    let view = cache.get(name).await?;
    output.container(&view);
    Ok(())
}
