//! Default sink volume via wpctl

use crate::config::ToolCommand;
use crate::error::Result;
use crate::utils::command::CommandRunner;

/// The tool's output is shown as-is, e.g. `Volume: 0.45 [MUTED]`
pub async fn collect_volume<R: CommandRunner>(runner: &R, tool: &ToolCommand) -> Result<String> {
    runner.run(tool).await.map(|out| out.trim().to_string())
}
