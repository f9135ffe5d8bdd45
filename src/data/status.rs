//! Values gathered for one status line

use crate::error::Result;

/// Everything needed to render one status line.
///
/// Field queries keep their `Result` so the renderer decides how a failure
/// looks; nothing here can abort a render.
#[derive(Debug)]
pub struct StatusLine {
    /// Already formatted, e.g. `Date: 2024-03-01 | Time: 09:30`
    pub timestamp: String,
    pub battery: BatteryReading,
    pub volume: Result<String>,
    pub brightness: Result<String>,
}

/// Percentage and charge state read from one battery query
#[derive(Debug)]
pub struct BatteryReading {
    pub percentage: Result<String>,
    pub state: Result<String>,
}

impl BatteryReading {
    pub const DISCHARGING: &'static str = "discharging";

    pub fn is_discharging(&self) -> bool {
        matches!(&self.state, Ok(state) if state == Self::DISCHARGING)
    }
}
