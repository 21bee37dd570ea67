//! Module responsible for scanning a merged timeline for free spans long
//! enough to commit the crime, and deciding the alibi flag from them.

use crate::core::calculator::intervals::UnavailabilityInterval;
use crate::errors::{AppError, AppResult};
use crate::models::{CrimeWindow, TimePoint};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GapKind {
    BeforeFirst,
    Between,
    AfterLast,
}

impl GapKind {
    pub fn describe(&self) -> &'static str {
        match self {
            GapKind::BeforeFirst => "before first activity",
            GapKind::Between => "between activities",
            GapKind::AfterLast => "after last activity",
        }
    }
}

/// A free span that satisfied one of the boundary checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gap {
    pub kind: GapKind,
    pub from: TimePoint,
    pub to: TimePoint,
}

impl Gap {
    pub fn duration_minutes(&self) -> i64 {
        self.to - self.from
    }
}

/// Run every boundary check against `merged` and collect the ones that fire,
/// in timeline order.
///
/// Outer edges compare strictly, lengths inclusively: a gap of exactly
/// `min_duration` counts.
pub fn scan_gaps(merged: &[UnavailabilityInterval], crime: &CrimeWindow) -> AppResult<Vec<Gap>> {
    let (first, last) = match (merged.first(), merged.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            return Err(AppError::InvariantViolation(
                "gap scan requires at least one merged interval".into(),
            ));
        }
    };

    let mut gaps = Vec::new();

    // -----------------------------
    // Before the first interval
    // -----------------------------
    if first.from > crime.start && first.from - crime.min_duration >= crime.start {
        gaps.push(Gap {
            kind: GapKind::BeforeFirst,
            from: crime.start,
            to: first.from,
        });
    }

    // -----------------------------
    // Between consecutive intervals
    // -----------------------------
    for w in merged.windows(2) {
        let (prev, next) = (&w[0], &w[1]);

        if prev.to >= crime.start
            && next.from <= crime.end
            && next.from - prev.to >= crime.min_duration
        {
            gaps.push(Gap {
                kind: GapKind::Between,
                from: prev.to,
                to: next.from,
            });
        }
    }

    // -----------------------------
    // After the last interval
    // -----------------------------
    if last.to < crime.end && last.to + crime.min_duration <= crime.end {
        gaps.push(Gap {
            kind: GapKind::AfterLast,
            from: last.to,
            to: crime.end,
        });
    }

    Ok(gaps)
}

/// `true` when none of the boundary checks found a qualifying gap.
pub fn has_alibi(merged: &[UnavailabilityInterval], crime: &CrimeWindow) -> AppResult<bool> {
    Ok(scan_gaps(merged, crime)?.is_empty())
}
