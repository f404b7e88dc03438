// ABOUTME: Lifecycle command implementation.
// ABOUTME: Sends one start/stop/pause/resume/restart/kill/remove to a container.

use super::connect_local;
use dockery::config::Config;
use dockery::error::Result;
use dockery::output::Output;
use dockery::status::ActionKind;
use dockery::sync::CommandDispatcher;

pub async fn lifecycle(
    config: Config,
    action: ActionKind,
    name: &str,
    mut output: Output,
) -> Result<()> {
    let runtime = connect_local(&config, &output)?;
    let dispatcher = CommandDispatcher::new(runtime, config.remove);

    output.start_timer();
    output.progress(&format!("→ {} {}...", action.label(), name));
    dispatcher.dispatch(action, name).await?;
    output.success(&format!("{} {}", action.past_tense(), name));
    Ok(())
}
