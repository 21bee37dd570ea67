use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, ends_with, starts_with};
use std::fs;

mod common;
use common::{SAMPLE_CASE, SAMPLE_CASE_JSON, alibi, setup_test_db, temp_out, write_case};

#[test]
fn test_check_text_file() {
    let db_path = setup_test_db("check_text_file");
    let case = write_case("check_text_file", SAMPLE_CASE);

    alibi()
        .args(["--db", &db_path, "check", &case])
        .assert()
        .success()
        .stdout(contains(
            "Crime happened between 13:00 and 14:00, lasting at least 30 minutes.",
        ))
        .stdout(contains("Suspect 1 - 1 activities:"))
        .stdout(contains("ALIBI -- NO"))
        .stdout(contains("ALIBI -- YES"));

    // no init → nothing is created behind the user's back
    assert!(!std::path::Path::new(&db_path).exists());
}

#[test]
fn test_check_from_stdin() {
    let db_path = setup_test_db("check_stdin");

    alibi()
        .args(["--db", &db_path, "check"])
        .write_stdin("13:00 14:00 30\n1\n1\n12:00 15:00 0\n")
        .assert()
        .success()
        .stdout(contains("ALIBI -- YES"))
        .stdout(contains("ALIBI -- NO").not());
}

#[test]
fn test_check_json_with_details() {
    let db_path = setup_test_db("check_json_details");
    let case = write_case("check_json_details", SAMPLE_CASE_JSON);

    alibi()
        .args(["--db", &db_path, "check", &case, "--format", "json", "--details"])
        .assert()
        .success()
        .stdout(contains("Unavailable: 12:00-15:00"))
        .stdout(contains("Free gap after last activity: 13:15-14:00 (45 min)"));
}

#[test]
fn test_check_malformed_input_fails() {
    let db_path = setup_test_db("check_malformed");

    alibi()
        .args(["--db", &db_path, "check", "-"])
        .write_stdin("13:00 14:00 30\n1\n1\n12:50 13:10\n")
        .assert()
        .failure()
        .stderr(contains("Parse error at line 4"));
}

#[test]
fn test_init_check_and_log() {
    let db_path = setup_test_db("init_check_log");
    let case = write_case("init_check_log", SAMPLE_CASE);

    alibi()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Migration applied: 20260301_0001_create_evaluations"))
        .stdout(contains("Database initialized"));

    alibi()
        .args(["--db", &db_path, "check", &case])
        .assert()
        .success();

    alibi()
        .args(["--db", &db_path, "log", "--evaluations"])
        .assert()
        .success()
        .stdout(contains("1:NO,2:YES"))
        .stdout(contains("13:00-14:00"));

    alibi()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("check"))
        .stdout(contains("evaluation #1: 1:NO,2:YES"));
}

#[test]
fn test_check_no_log_skips_recording() {
    let db_path = setup_test_db("check_no_log");
    let case = write_case("check_no_log", SAMPLE_CASE);

    alibi()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    alibi()
        .args(["--db", &db_path, "check", &case, "--no-log"])
        .assert()
        .success();

    alibi()
        .args(["--db", &db_path, "log", "--evaluations"])
        .assert()
        .success()
        .stdout(contains("No evaluations recorded yet."));
}

#[test]
fn test_check_migrates_existing_empty_db_quietly() {
    let db_path = setup_test_db("check_empty_db");
    fs::write(&db_path, "").expect("create empty db file");

    alibi()
        .args(["--db", &db_path, "check", "-"])
        .write_stdin(SAMPLE_CASE)
        .assert()
        .success()
        .stdout(starts_with(
            "Crime happened between 13:00 and 14:00, lasting at least 30 minutes.\n",
        ))
        .stdout(contains("ALIBI -- YES\n"))
        .stdout(ends_with("|\n"))
        .stdout(contains("Migration").not())
        .stdout(contains("\x1b[").not());

    alibi()
        .args(["--db", &db_path, "log", "--evaluations"])
        .assert()
        .success()
        .stdout(contains("1:NO,2:YES"));
}

#[test]
fn test_export_no_log_skips_recording() {
    let db_path = setup_test_db("export_no_log");
    let case = write_case("export_no_log", SAMPLE_CASE);
    let out = temp_out("export_no_log", "csv");

    alibi()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    alibi()
        .args(["--db", &db_path, "export", &case, "--file", &out, "-f", "--no-log"])
        .assert()
        .success();

    alibi()
        .args(["--db", &db_path, "log", "--evaluations"])
        .assert()
        .success()
        .stdout(contains("No evaluations recorded yet."));

    alibi()
        .args(["--db", &db_path, "export", &case, "--file", &out, "-f"])
        .assert()
        .success();

    alibi()
        .args(["--db", &db_path, "log", "--evaluations"])
        .assert()
        .success()
        .stdout(contains("1:NO,2:YES"));
}

#[test]
fn test_log_requires_init() {
    let db_path = setup_test_db("log_requires_init");

    alibi()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .failure()
        .stderr(contains("run `alibi init` first"));
}

#[test]
fn test_export_csv() {
    let db_path = setup_test_db("export_csv");
    let case = write_case("export_csv", SAMPLE_CASE);
    let out = temp_out("export_csv", "csv");

    alibi()
        .args([
            "--db", &db_path, "export", &case, "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "suspect,activities,has_alibi,alibi",
            "1,1,false,NO",
            "2,0,true,YES"
        ]
    );
}

#[test]
fn test_export_csv_no_suspects() {
    let db_path = setup_test_db("export_csv_empty");
    let out = temp_out("export_csv_empty", "csv");

    alibi()
        .args(["--db", &db_path, "export", "-", "--file", &out, "-f"])
        .write_stdin("13:00 14:00 30\n0\n")
        .assert()
        .success()
        .stderr(contains("no suspects"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert_eq!(content, "suspect,activities,has_alibi,alibi\n");
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    let case = write_case("export_json", SAMPLE_CASE_JSON);
    let out = temp_out("export_json", "json");

    alibi()
        .args([
            "--db", &db_path, "export", &case, "--format", "json", "--file", &out, "-f",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(rows[0]["suspect"], 1);
    assert_eq!(rows[0]["alibi"], "YES");
    assert_eq!(rows[1]["has_alibi"], false);
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    let case = write_case("export_relative", SAMPLE_CASE);

    alibi()
        .args(["--db", &db_path, "export", &case, "--file", "verdicts.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}
