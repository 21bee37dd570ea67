// src/input/json.rs

use crate::errors::AppResult;
use crate::models::{Activity, Case, CrimeWindow, Suspect};
use crate::utils::time::parse_time_point;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CaseFile {
    crime: CrimeFile,
    #[serde(default)]
    suspects: Vec<SuspectFile>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CrimeFile {
    start: String,
    end: String,
    min_duration: u32,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SuspectFile {
    #[serde(default)]
    activities: Vec<ActivityFile>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ActivityFile {
    start: String,
    end: String,
    travel: u32,
}

/// Parse a JSON case document. Times are `HH:MM` strings, minute fields
/// non-negative integers.
pub fn parse_case_json(content: &str) -> AppResult<Case> {
    let file: CaseFile = serde_json::from_str(content)?;

    let crime = CrimeWindow {
        start: parse_time_point(&file.crime.start)?,
        end: parse_time_point(&file.crime.end)?,
        min_duration: i64::from(file.crime.min_duration),
    };

    let suspects = file
        .suspects
        .iter()
        .map(|s| {
            s.activities
                .iter()
                .map(|a| {
                    Ok(Activity::new(
                        parse_time_point(&a.start)?,
                        parse_time_point(&a.end)?,
                        i64::from(a.travel),
                    ))
                })
                .collect::<AppResult<Vec<_>>>()
                .map(Suspect::new)
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(Case { crime, suspects })
}
