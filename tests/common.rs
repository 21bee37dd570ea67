#![allow(dead_code)]
use alibi::models::{Activity, Case, CrimeWindow, Suspect};
use alibi::utils::time::to_minutes;
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn alibi() -> Command {
    cargo_bin_cmd!("alibi")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_alibi.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_alibi_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write case content to a temp file and return its path
pub fn write_case(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_alibi_case.txt", name));
    fs::write(&path, content).expect("write case file");
    path.to_string_lossy().to_string()
}

/// Crime 13:00-14:00, at least 30 minutes
pub fn crime_13_14() -> CrimeWindow {
    CrimeWindow {
        start: to_minutes(13, 0),
        end: to_minutes(14, 0),
        min_duration: 30,
    }
}

/// Activity from raw minute values
pub fn act(start: i64, end: i64, travel: i64) -> Activity {
    Activity::new(start.into(), end.into(), travel)
}

pub fn case_of(crime: CrimeWindow, suspects: Vec<Vec<Activity>>) -> Case {
    Case {
        crime,
        suspects: suspects.into_iter().map(Suspect::new).collect(),
    }
}

/// Two suspects: one with a free stretch after 13:15, one who has no activities
pub const SAMPLE_CASE: &str = "\
13:00 14:00 30
2
1
12:50 13:10 5
0
";

pub const SAMPLE_CASE_JSON: &str = r#"{
  "crime": { "start": "13:00", "end": "14:00", "min_duration": 30 },
  "suspects": [
    { "activities": [ { "start": "12:00", "end": "15:00", "travel": 0 } ] },
    { "activities": [ { "start": "12:50", "end": "13:10", "travel": 5 } ] }
  ]
}"#;
