//! Turns a suspect's activities into the spans during which they could not
//! have been at the crime scene.

use crate::models::{Activity, TimePoint};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnavailabilityInterval {
    pub from: TimePoint,
    pub to: TimePoint,
}

impl UnavailabilityInterval {
    /// From raw minute values.
    pub fn new(from: i64, to: i64) -> Self {
        Self {
            from: TimePoint(from),
            to: TimePoint(to),
        }
    }

    /// Activity padded by the trip there and back.
    pub fn from_activity(activity: &Activity) -> Self {
        Self {
            from: activity.start - activity.travel_minutes,
            to: activity.end + activity.travel_minutes,
        }
    }
}

/// One interval per activity, same order as the input.
pub fn build_intervals(activities: &[Activity]) -> Vec<UnavailabilityInterval> {
    activities
        .iter()
        .map(UnavailabilityInterval::from_activity)
        .collect()
}
