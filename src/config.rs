use std::time::Duration;

pub const DEFAULT_PERIOD_SECS: u64 = 20;
pub const DEFAULT_BATTERY_DEVICE: &str = "/org/freedesktop/UPower/devices/battery_BAT0";
pub const DEFAULT_SINK: &str = "@DEFAULT_SINK@";

/// Layout of the status line, one per historical variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Style {
    /// Raw backlight value from `brightnessctl get`, shown as `Brightness: <n>%`
    Raw,
    /// Backlight percentage without a label
    Bare,
    /// Backlight percentage as `Brightness: <n>%`
    #[default]
    Labeled,
}

/// A program and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: shellexpand::tilde(program).to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub period: Duration,
    pub notick: bool,
    pub style: Style,
    pub battery: ToolCommand,
    pub volume: ToolCommand,
    pub brightness: ToolCommand,
}

impl Config {
    /// Default tool set for the given style
    pub fn with_style(style: Style) -> Self {
        Self {
            period: Duration::from_secs(DEFAULT_PERIOD_SECS),
            notick: false,
            style,
            battery: ToolCommand::new("upower", &["-i", DEFAULT_BATTERY_DEVICE]),
            volume: ToolCommand::new("wpctl", &["get-volume", DEFAULT_SINK]),
            brightness: brightness_command("brightnessctl", style),
        }
    }

    /// Programs that should be installed for every field to resolve
    pub fn programs(&self) -> [&str; 3] {
        [
            self.battery.program.as_str(),
            self.volume.program.as_str(),
            self.brightness.program.as_str(),
        ]
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_style(Style::default())
    }
}

/// `brightnessctl get` prints the raw value, `info` includes the percentage
pub fn brightness_command(program: &str, style: Style) -> ToolCommand {
    match style {
        Style::Raw => ToolCommand::new(program, &["get"]),
        Style::Bare | Style::Labeled => ToolCommand::new(program, &["info"]),
    }
}
