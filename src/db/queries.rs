use crate::errors::AppResult;
use crate::models::{AlibiVerdict, Case};
use chrono::Local;
use rusqlite::{Connection, Row, params};

/// A stored `check` run.
#[derive(Debug, Clone)]
pub struct EvaluationRecord {
    pub id: i64,
    pub created_at: String,
    pub source: String,
    pub suspects: i64,
    pub crime_start: String,
    pub crime_end: String,
    pub min_duration: i64,
    /// `1:YES,2:NO,...`
    pub verdicts: String,
}

/// Compact `index:YES|NO` list used in the `verdicts` column.
pub fn encode_verdicts(verdicts: &[AlibiVerdict]) -> String {
    verdicts
        .iter()
        .map(|v| format!("{}:{}", v.suspect_index, v.label()))
        .collect::<Vec<_>>()
        .join(",")
}

pub fn insert_evaluation(
    conn: &Connection,
    source: &str,
    case: &Case,
    verdicts: &[AlibiVerdict],
) -> AppResult<i64> {
    let now = Local::now().to_rfc3339();

    conn.execute(
        "INSERT INTO evaluations
            (created_at, source, suspects, crime_start, crime_end, min_duration, verdicts)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            now,
            source,
            case.suspects.len() as i64,
            case.crime.start.to_string(),
            case.crime.end.to_string(),
            case.crime.min_duration,
            encode_verdicts(verdicts),
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

fn map_evaluation(row: &Row) -> rusqlite::Result<EvaluationRecord> {
    Ok(EvaluationRecord {
        id: row.get("id")?,
        created_at: row.get("created_at")?,
        source: row.get("source")?,
        suspects: row.get("suspects")?,
        crime_start: row.get("crime_start")?,
        crime_end: row.get("crime_end")?,
        min_duration: row.get("min_duration")?,
        verdicts: row.get("verdicts")?,
    })
}

pub fn load_evaluations(conn: &Connection) -> AppResult<Vec<EvaluationRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, created_at, source, suspects, crime_start, crime_end, min_duration, verdicts
         FROM evaluations
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], map_evaluation)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
