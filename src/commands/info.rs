// ABOUTME: Info command implementation.
// ABOUTME: Checks connectivity and prints runtime version details.

use super::connect_local;
use dockery::config::Config;
use dockery::error::Result;
use dockery::output::Output;
use dockery::runtime::RuntimeInfoTrait;

pub async fn info(config: Config, output: Output) -> Result<()> {
    let runtime = connect_local(&config, &output)?;

    runtime.ping().await?;
    let metadata = runtime.info().await?;
    output.runtime_info(&metadata);
    Ok(())
}
