use crate::models::time_point::TimePoint;
use serde::Serialize;

/// A span during which a suspect was observably busy somewhere
/// `travel_minutes` away from the crime scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Activity {
    pub start: TimePoint,
    pub end: TimePoint,
    pub travel_minutes: i64,
}

impl Activity {
    pub fn new(start: TimePoint, end: TimePoint, travel_minutes: i64) -> Self {
        Self {
            start,
            end,
            travel_minutes,
        }
    }
}
