//! Screen brightness via brightnessctl

use crate::config::{Style, ToolCommand};
use crate::error::Result;
use crate::utils::command::CommandRunner;
use crate::utils::parsing::{extract_integer, extract_parenthesized_percentage};

/// Raw style expects the bare value of `get`, the others the percentage from `info`
pub async fn collect_brightness<R: CommandRunner>(
    runner: &R,
    tool: &ToolCommand,
    style: Style,
) -> Result<String> {
    let output = runner.run(tool).await?;
    match style {
        Style::Raw => extract_integer(&output),
        Style::Bare | Style::Labeled => extract_parenthesized_percentage(&output),
    }
}
