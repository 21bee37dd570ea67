// src/input/text.rs

use crate::errors::{AppError, AppResult};
use crate::models::{Activity, Case, CrimeWindow, Suspect, TimePoint};
use crate::utils::time::parse_time_point;

/// Non-blank, trimmed lines together with their 1-based position in the
/// raw input.
struct Lines<'a> {
    inner: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
    last_line: usize,
}

impl<'a> Lines<'a> {
    fn new(content: &'a str) -> Self {
        let last_line = content.lines().count();
        let inner = content
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty());

        Self {
            inner: Box::new(inner),
            last_line,
        }
    }

    fn next(&mut self, expected: &str) -> AppResult<(usize, Vec<&'a str>)> {
        match self.inner.next() {
            Some((n, line)) => Ok((n, line.split_whitespace().collect())),
            None => Err(AppError::parse(
                self.last_line + 1,
                format!("unexpected end of input, expected {expected}"),
            )),
        }
    }
}

fn time_field(line: usize, raw: &str) -> AppResult<TimePoint> {
    parse_time_point(raw).map_err(|_| AppError::parse(line, format!("invalid time '{raw}'")))
}

fn minutes_field(line: usize, raw: &str, what: &str) -> AppResult<i64> {
    raw.parse::<u32>()
        .map(i64::from)
        .map_err(|_| AppError::parse(line, format!("invalid {what} '{raw}'")))
}

fn count_field(line: usize, fields: &[&str], what: &str) -> AppResult<usize> {
    match fields {
        [raw] => raw
            .parse::<usize>()
            .map_err(|_| AppError::parse(line, format!("invalid {what} '{raw}'"))),
        _ => Err(AppError::parse(
            line,
            format!("expected a single {what}, found {} fields", fields.len()),
        )),
    }
}

/// `HH:MM HH:MM N` triplet shared by the crime line and activity lines.
fn span_fields(line: usize, fields: &[&str], what: &str) -> AppResult<(TimePoint, TimePoint, i64)> {
    match fields {
        [start, end, minutes] => Ok((
            time_field(line, start)?,
            time_field(line, end)?,
            minutes_field(line, minutes, what)?,
        )),
        _ => Err(AppError::parse(
            line,
            format!(
                "expected 'HH:MM HH:MM {what}', found {} fields",
                fields.len()
            ),
        )),
    }
}

/// Parse the line-oriented case format:
///
/// ```text
/// 13:00 14:00 30      crime start, end, minimum duration
/// 2                   number of suspects
/// 1                   activities of suspect 1
/// 12:50 13:10 5       start, end, travel minutes
/// 0                   activities of suspect 2
/// ```
pub fn parse_case_text(content: &str) -> AppResult<Case> {
    let mut lines = Lines::new(content);

    let (n, fields) = lines.next("crime line")?;
    let (start, end, min_duration) = span_fields(n, &fields, "duration")?;
    let crime = CrimeWindow {
        start,
        end,
        min_duration,
    };

    let (n, fields) = lines.next("number of suspects")?;
    let suspect_count = count_field(n, &fields, "number of suspects")?;

    let mut suspects = Vec::new();
    for s in 1..=suspect_count {
        let (n, fields) = lines.next(&format!("activity count for suspect {s}"))?;
        let activity_count = count_field(n, &fields, "activity count")?;

        let mut activities = Vec::new();
        for a in 1..=activity_count {
            let (n, fields) = lines.next(&format!("activity {a} of suspect {s}"))?;
            let (start, end, travel) = span_fields(n, &fields, "travel minutes")?;
            activities.push(Activity::new(start, end, travel));
        }

        suspects.push(Suspect::new(activities));
    }

    if let Ok((n, _)) = lines.next("") {
        return Err(AppError::parse(n, "unexpected trailing content"));
    }

    Ok(Case { crime, suspects })
}
