//! Test doubles for tools and the wall clock

use crate::collectors::clock::Clock;
use crate::config::ToolCommand;
use crate::error::{Result, StatusError};
use crate::utils::command::CommandRunner;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};
use tokio::time::Instant;

pub const UPOWER_CHARGING: &str = "  native-path:          BAT0
  battery
    present:             yes
    state:               charging
    percentage:          87%
";

pub const UPOWER_DISCHARGING: &str = "  battery
    state:               discharging
    percentage:          42%
";

pub const BRIGHTNESSCTL_INFO: &str = "Device 'intel_backlight' of class 'backlight':
\tCurrent brightness: 9600 (50%)
\tMax brightness: 19200
";

/// Replies with canned output per program; unknown programs fail.
#[derive(Default)]
pub struct ScriptedRunner {
    replies: HashMap<String, String>,
    calls: Mutex<Vec<(ToolCommand, Instant)>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(mut self, program: &str, output: &str) -> Self {
        self.replies.insert(program.to_string(), output.to_string());
        self
    }

    /// Replies for the stock tool names
    pub fn stock(battery: &str, volume: &str, brightness: &str) -> Self {
        Self::new()
            .reply("upower", battery)
            .reply("wpctl", volume)
            .reply("brightnessctl", brightness)
    }

    pub fn calls(&self) -> Vec<(ToolCommand, Instant)> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    async fn run(&self, tool: &ToolCommand) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((tool.clone(), Instant::now()));
        match self.replies.get(&tool.program) {
            Some(out) if out.trim().is_empty() => Err(StatusError::EmptyOutput {
                program: tool.program.clone(),
            }),
            Some(out) => Ok(out.trim().to_string()),
            None => Err(StatusError::CommandFailed {
                program: tool.program.clone(),
                code: Some(127),
            }),
        }
    }
}

/// A tool that never answers
pub struct HangingRunner;

impl CommandRunner for HangingRunner {
    async fn run(&self, _tool: &ToolCommand) -> Result<String> {
        std::future::pending().await
    }
}

pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> Self {
        let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        Self(date.and_hms_opt(h, min, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Shared sink for log output written during a test
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Route `warn` and above into a buffer for as long as the guard lives
pub fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    (buffer, tracing::subscriber::set_default(subscriber))
}
