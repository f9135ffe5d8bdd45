//! Command-line interface

use crate::config::{
    brightness_command, Config, Style, ToolCommand, DEFAULT_BATTERY_DEVICE, DEFAULT_PERIOD_SECS,
    DEFAULT_SINK,
};
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(
    name = "swiftstatus",
    version,
    about = "Print a one-line system status and keep it fresh"
)]
pub struct Cli {
    /// Print the status line once and exit
    #[arg(long)]
    pub notick: bool,

    /// Refresh interval in seconds
    #[arg(
        long,
        value_name = "SECONDS",
        default_value_t = DEFAULT_PERIOD_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub period: u64,

    /// Status line layout
    #[arg(long, value_enum, default_value_t = Style::Labeled)]
    pub style: Style,

    /// UPower object path of the battery
    #[arg(long, value_name = "PATH", default_value = DEFAULT_BATTERY_DEVICE)]
    pub battery_device: String,

    /// Audio sink passed to wpctl
    #[arg(long, value_name = "NAME", default_value = DEFAULT_SINK)]
    pub sink: String,

    /// Program used for the battery query
    #[arg(long, value_name = "PROGRAM", default_value = "upower")]
    pub upower: String,

    /// Program used for the volume query
    #[arg(long, value_name = "PROGRAM", default_value = "wpctl")]
    pub wpctl: String,

    /// Program used for the brightness query
    #[arg(long, value_name = "PROGRAM", default_value = "brightnessctl")]
    pub brightnessctl: String,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            period: Duration::from_secs(self.period),
            notick: self.notick,
            style: self.style,
            battery: ToolCommand::new(&self.upower, &["-i", self.battery_device.as_str()]),
            volume: ToolCommand::new(&self.wpctl, &["get-volume", self.sink.as_str()]),
            brightness: brightness_command(&self.brightnessctl, self.style),
        }
    }
}
