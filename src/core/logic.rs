use crate::core::calculator::{gaps, intervals, merge};
use crate::errors::AppResult;
use crate::models::{AlibiVerdict, Case, CrimeWindow, Suspect, SuspectEvaluation};

pub struct Core;

impl Core {
    /// One verdict per suspect, in suspect order. Fails as a whole if any
    /// suspect cannot be evaluated.
    pub fn evaluate_case(case: &Case) -> AppResult<Vec<AlibiVerdict>> {
        Ok(Self::evaluate_case_detailed(case)?
            .into_iter()
            .map(|e| e.verdict)
            .collect())
    }

    /// Same as `evaluate_case`, keeping the merged timeline and the gaps
    /// found for each suspect.
    pub fn evaluate_case_detailed(case: &Case) -> AppResult<Vec<SuspectEvaluation>> {
        case.suspects
            .iter()
            .enumerate()
            .map(|(i, suspect)| Self::evaluate_suspect(i + 1, suspect, &case.crime))
            .collect()
    }

    pub fn evaluate_suspect(
        suspect_index: usize,
        suspect: &Suspect,
        crime: &CrimeWindow,
    ) -> AppResult<SuspectEvaluation> {
        let raw = intervals::build_intervals(&suspect.activities);

        // Nothing observed: no unavailability at all, reported as alibi
        // without touching merge/scan.
        if raw.is_empty() {
            return Ok(SuspectEvaluation {
                verdict: AlibiVerdict {
                    suspect_index,
                    has_alibi: true,
                },
                merged: Vec::new(),
                gaps: Vec::new(),
            });
        }

        let merged = merge::merge(&raw)?;
        let gaps = gaps::scan_gaps(&merged, crime)?;

        Ok(SuspectEvaluation {
            verdict: AlibiVerdict {
                suspect_index,
                has_alibi: gaps.is_empty(),
            },
            merged,
            gaps,
        })
    }
}
