// src/export/model.rs

use crate::models::{AlibiVerdict, Case};
use serde::Serialize;

/// Flat per-suspect row for CSV / JSON export.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct VerdictExport {
    pub suspect: usize,
    pub activities: usize,
    pub has_alibi: bool,
    pub alibi: String,
}

/// CSV column names, in `VerdictExport` field order.
pub(crate) fn get_headers() -> [&'static str; 4] {
    ["suspect", "activities", "has_alibi", "alibi"]
}

/// Pair each verdict with its suspect; rows follow suspect order.
pub(crate) fn verdicts_to_rows(case: &Case, verdicts: &[AlibiVerdict]) -> Vec<VerdictExport> {
    case.suspects
        .iter()
        .zip(verdicts)
        .map(|(s, v)| VerdictExport {
            suspect: v.suspect_index,
            activities: s.activities.len(),
            has_alibi: v.has_alibi,
            alibi: v.label().to_string(),
        })
        .collect()
}
