mod common;
use alibi::Core;
use alibi::input::parse_case_text;
use alibi::ui::report::{ReportOptions, render_case};
use common::SAMPLE_CASE;

#[test]
fn test_render_plain_report() {
    let case = parse_case_text(SAMPLE_CASE).unwrap();
    let evals = Core::evaluate_case_detailed(&case).unwrap();

    let out = render_case(&case, &evals, &ReportOptions::default());

    let expected = "\
Crime happened between 13:00 and 14:00, lasting at least 30 minutes.

Number of suspects: 2

Suspect 1 - 1 activities:
  - Activity 1: From 12:50 to 13:10, 5 min away

|------------|
ALIBI -- NO
|------------|

Suspect 2 - 0 activities:

|------------|
ALIBI -- YES
|------------|
";
    assert_eq!(out, expected);
}

#[test]
fn test_render_details() {
    let case = parse_case_text(SAMPLE_CASE).unwrap();
    let evals = Core::evaluate_case_detailed(&case).unwrap();

    let opts = ReportOptions {
        details: true,
        ..ReportOptions::default()
    };
    let out = render_case(&case, &evals, &opts);

    assert!(out.contains("  Unavailable: 12:45-13:15\n"));
    assert!(out.contains("  Free gap after last activity: 13:15-14:00 (45 min)\n"));
    assert!(out.contains("  Unavailable: none\n"));
    assert!(out.contains("  No qualifying free gap\n"));
}

#[test]
fn test_render_custom_separator_and_color() {
    let case = parse_case_text("13:00 14:00 30\n1\n1\n12:00 15:00 0\n").unwrap();
    let evals = Core::evaluate_case_detailed(&case).unwrap();

    let opts = ReportOptions {
        details: false,
        color: true,
        separator_char: "=".to_string(),
    };
    let out = render_case(&case, &evals, &opts);

    assert!(out.contains("|============|"));
    assert!(out.contains("ALIBI -- \x1b[32mYES\x1b[0m"));
}

#[test]
fn test_render_out_of_day_intervals() {
    let case = parse_case_text("0:00 1:00 10\n1\n1\n0:05 0:10 20\n").unwrap();
    let evals = Core::evaluate_case_detailed(&case).unwrap();

    let opts = ReportOptions {
        details: true,
        ..ReportOptions::default()
    };
    let out = render_case(&case, &evals, &opts);

    assert!(out.contains("Unavailable: -00:15-00:30"), "{out}");
}
