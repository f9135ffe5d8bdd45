//! swiftstatus library
//!
//! Builds a one-line system status (date, battery, volume, brightness) from
//! the output of common desktop utilities.

pub mod cli;
pub mod collectors;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod refresh;
pub mod utils;

#[cfg(test)]
mod testing;

pub use collectors::clock::{Clock, LocalClock};
pub use collectors::Collector;
pub use config::{Config, Style, ToolCommand};
pub use error::{Result, StatusError};
pub use utils::command::{CommandRunner, SystemRunner};

use tracing::warn;

/// Collector wired to real processes and the local clock
pub fn system_collector(config: Config) -> Collector<SystemRunner, LocalClock> {
    for program in config.programs() {
        if !utils::command::command_exists(program) {
            warn!(program, "tool not found; its field will show as unknown");
        }
    }
    Collector::new(config, SystemRunner, LocalClock)
}
