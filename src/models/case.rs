use crate::models::activity::Activity;
use crate::models::time_point::TimePoint;
use serde::Serialize;

/// When the crime happened and how long it took at minimum.
///
/// `start <= end` is not checked here; adapters validate before building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CrimeWindow {
    pub start: TimePoint,
    pub end: TimePoint,
    pub min_duration: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Suspect {
    /// In the order given, not necessarily chronological.
    pub activities: Vec<Activity>,
}

impl Suspect {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Case {
    pub crime: CrimeWindow,
    pub suspects: Vec<Suspect>,
}
