//! Status line rendering

use crate::config::Style;
use crate::data::{BatteryReading, StatusLine};
use crate::error::Result;
use std::io::Write;

pub const SEPARATOR: &str = " | ";
pub const PLACEHOLDER: &str = "unknown";
/// Cursor home, then erase the whole screen
pub const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

fn or_placeholder(value: &Result<String>) -> &str {
    value.as_deref().unwrap_or(PLACEHOLDER)
}

/// `Battery: 87%(charging)`; no annotation while discharging or when the
/// percentage itself is unknown
pub fn format_battery(battery: &BatteryReading) -> String {
    let mut field = format!("Battery: {}", or_placeholder(&battery.percentage));
    if battery.percentage.is_ok() && !battery.is_discharging() {
        field.push('(');
        field.push_str(or_placeholder(&battery.state));
        field.push(')');
    }
    field
}

pub fn format_brightness(brightness: &Result<String>, style: Style) -> String {
    let value = or_placeholder(brightness);
    match style {
        Style::Raw if brightness.is_ok() => format!("Brightness: {}%", value),
        Style::Raw | Style::Labeled => format!("Brightness: {}", value),
        Style::Bare => value.to_string(),
    }
}

/// Join all fields in their fixed order
pub fn format_status_line(line: &StatusLine, style: Style) -> String {
    let fields = [
        line.timestamp.clone(),
        format_battery(&line.battery),
        or_placeholder(&line.volume).to_string(),
        format_brightness(&line.brightness, style),
    ];
    fields.join(SEPARATOR)
}

/// Print one status line, optionally clearing the terminal first
pub fn write_status<W: Write>(out: &mut W, text: &str, clear: bool) -> Result<()> {
    if clear {
        out.write_all(CLEAR_SCREEN.as_bytes())?;
    }
    writeln!(out, "{}", text)?;
    out.flush()?;
    Ok(())
}
