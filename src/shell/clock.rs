use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Taskbar refresh period
pub const CLOCK_INTERVAL_MS: u64 = 1000;

/// Two-digit hour and minute, as shown in the taskbar
pub fn taskbar_clock<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.format("%H:%M").to_string()
}
