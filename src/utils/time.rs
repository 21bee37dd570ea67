//! Time utilities: HH:MM parsing, hour/minute to minute-of-day conversion,
//! formatting minute values back into clock strings.

use crate::errors::{AppError, AppResult};
use crate::models::TimePoint;
use chrono::{NaiveTime, Timelike};

/// `hour * 60 + minute`, unchecked.
pub fn to_minutes(hour: i64, minute: i64) -> TimePoint {
    TimePoint(hour * 60 + minute)
}

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Parse a wall-clock `H:MM` / `HH:MM` into a minute-of-day point.
pub fn parse_time_point(t: &str) -> AppResult<TimePoint> {
    let time = parse_time(t.trim()).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
    Ok(to_minutes(time.hour() as i64, time.minute() as i64))
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

pub fn format_time_point(t: TimePoint) -> String {
    format_minutes(t.minutes())
}
