// ABOUTME: Watch command implementation.
// ABOUTME: Reprints the container list whenever runtime events invalidate it.

use super::connect_local;
use dockery::config::Config;
use dockery::error::Result;
use dockery::output::{Output, OutputMode};
use dockery::sync::{ContainerCache, EventSubscriber};
use dockery::types::ContainerId;
use std::sync::Arc;

/// Follow runtime events until interrupted or the event stream closes.
pub async fn watch(config: Config, container: Option<String>, output: Output) -> Result<()> {
    let runtime = connect_local(&config, &output)?;
    let cache = Arc::new(ContainerCache::new(Arc::clone(&runtime)));

    let mode = output.mode();
    let weak = Arc::downgrade(&cache);
    cache.observe(move || {
        if let Some(cache) = weak.upgrade() {
            if mode == OutputMode::Normal {
                println!();
            }
            Output::new(mode).containers(&cache.views());
        }
    });

    let subscriber = EventSubscriber::new(runtime, config.events.clone());
    let mut subscription = subscriber.subscribe(container.map(ContainerId::new));

    cache.reload().await?;

    tokio::select! {
        _ = cache.follow(&mut subscription) => {
            output.warning("event stream closed");
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::debug!("interrupted");
        }
    }

    Ok(())
}
