use crate::core::calculator::intervals::UnavailabilityInterval;
use crate::errors::{AppError, AppResult};

/// Coalesce overlapping or touching intervals.
///
/// The result is sorted by `from` and strictly disjoint:
/// `out[i].to < out[i + 1].from`. An empty input is a caller bug.
pub fn merge(intervals: &[UnavailabilityInterval]) -> AppResult<Vec<UnavailabilityInterval>> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|iv| iv.from);

    let mut iter = sorted.into_iter();
    let mut current = iter.next().ok_or_else(|| {
        AppError::InvariantViolation("cannot merge an empty interval list".into())
    })?;

    let mut merged = Vec::new();

    for next in iter {
        if next.from <= current.to {
            current.to = current.to.max(next.to);
        } else {
            merged.push(current);
            current = next;
        }
    }
    merged.push(current);

    Ok(merged)
}
