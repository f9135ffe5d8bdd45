//! Date and time field

use chrono::{Local, NaiveDateTime};

const TIMESTAMP_FORMAT: &str = "Date: %Y-%m-%d | Time: %H:%M";

/// Source of the current local time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

pub fn format_timestamp(now: NaiveDateTime) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}
