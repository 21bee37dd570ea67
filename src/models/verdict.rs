use crate::core::calculator::gaps::Gap;
use crate::core::calculator::intervals::UnavailabilityInterval;
use serde::Serialize;

/// Per-suspect outcome, in suspect order.
///
/// `has_alibi` is true when no boundary check found a free gap of at least
/// the crime's minimum duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlibiVerdict {
    /// 1-based position of the suspect in the case.
    pub suspect_index: usize,
    pub has_alibi: bool,
}

impl AlibiVerdict {
    pub fn label(&self) -> &'static str {
        if self.has_alibi { "YES" } else { "NO" }
    }
}

/// Verdict plus the intermediate timeline it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuspectEvaluation {
    pub verdict: AlibiVerdict,
    /// Empty for a suspect with no activities.
    pub merged: Vec<UnavailabilityInterval>,
    pub gaps: Vec<Gap>,
}
