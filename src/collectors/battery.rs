//! Battery charge and state via upower

use crate::config::ToolCommand;
use crate::data::BatteryReading;
use crate::error::StatusError;
use crate::utils::command::CommandRunner;
use crate::utils::parsing::{extract_percentage, extract_state};

/// Query the battery tool once and pull both values out of its report
pub async fn collect_battery<R: CommandRunner>(
    runner: &R,
    tool: &ToolCommand,
) -> BatteryReading {
    match runner.run(tool).await {
        Ok(output) => BatteryReading {
            percentage: extract_percentage(&output),
            state: extract_state(&output),
        },
        Err(err) => {
            let message = err.to_string();
            BatteryReading {
                percentage: Err(err),
                state: Err(StatusError::QueryFailed(message)),
            }
        }
    }
}
