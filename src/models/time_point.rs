use serde::Serialize;
use std::fmt;
use std::ops::{Add, Sub};

/// Minutes since midnight.
///
/// Values outside 0..=1439 are legitimate: subtracting travel time from an
/// early activity yields a negative point, adding it to a late one goes past
/// midnight. They are kept as-is and never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TimePoint(pub i64);

impl TimePoint {
    pub fn minutes(self) -> i64 {
        self.0
    }
}

impl From<i64> for TimePoint {
    fn from(minutes: i64) -> Self {
        TimePoint(minutes)
    }
}

/// Shift by a number of minutes.
impl Add<i64> for TimePoint {
    type Output = TimePoint;

    fn add(self, rhs: i64) -> TimePoint {
        TimePoint(self.0 + rhs)
    }
}

impl Sub<i64> for TimePoint {
    type Output = TimePoint;

    fn sub(self, rhs: i64) -> TimePoint {
        TimePoint(self.0 - rhs)
    }
}

/// Distance in minutes between two points.
impl Sub<TimePoint> for TimePoint {
    type Output = i64;

    fn sub(self, rhs: TimePoint) -> i64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::utils::time::format_time_point(*self))
    }
}
