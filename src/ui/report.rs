//! Human-readable case report: the case as read, followed by an
//! `ALIBI -- YES/NO` block per suspect.

use crate::models::{AlibiVerdict, Case, SuspectEvaluation};
use crate::utils::colors::{GREEN, RED, RESET};
use crate::utils::formatting::bold;

#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Also list merged unavailability and the gaps that were found.
    pub details: bool,
    pub color: bool,
    pub separator_char: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            details: false,
            color: false,
            separator_char: "-".to_string(),
        }
    }
}

fn separator_line(opts: &ReportOptions) -> String {
    let ch = opts.separator_char.chars().next().unwrap_or('-');
    format!("|{}|", ch.to_string().repeat(12))
}

fn alibi_line(verdict: &AlibiVerdict, opts: &ReportOptions) -> String {
    let label = verdict.label();
    if opts.color {
        let color = if verdict.has_alibi { GREEN } else { RED };
        format!("ALIBI -- {color}{label}{RESET}")
    } else {
        format!("ALIBI -- {label}")
    }
}

fn render_details(eval: &SuspectEvaluation, out: &mut String) {
    if eval.merged.is_empty() {
        out.push_str("  Unavailable: none\n");
    } else {
        let spans: Vec<String> = eval
            .merged
            .iter()
            .map(|iv| format!("{}-{}", iv.from, iv.to))
            .collect();
        out.push_str(&format!("  Unavailable: {}\n", spans.join(", ")));
    }

    if eval.gaps.is_empty() {
        out.push_str("  No qualifying free gap\n");
    }
    for gap in &eval.gaps {
        out.push_str(&format!(
            "  Free gap {}: {}-{} ({} min)\n",
            gap.kind.describe(),
            gap.from,
            gap.to,
            gap.duration_minutes()
        ));
    }
}

/// Render the case and its per-suspect evaluations.
///
/// `evaluations` is expected in suspect order, as returned by
/// `Core::evaluate_case_detailed`.
pub fn render_case(case: &Case, evaluations: &[SuspectEvaluation], opts: &ReportOptions) -> String {
    let crime = &case.crime;

    let heading = format!(
        "Crime happened between {} and {}, lasting at least {} minutes.",
        crime.start, crime.end, crime.min_duration
    );
    let mut out = if opts.color { bold(&heading) } else { heading };
    out.push_str("\n\n");

    out.push_str(&format!("Number of suspects: {}\n", case.suspects.len()));

    let sep = separator_line(opts);

    for (i, (suspect, eval)) in case.suspects.iter().zip(evaluations).enumerate() {
        out.push_str(&format!(
            "\nSuspect {} - {} activities:\n",
            i + 1,
            suspect.activities.len()
        ));

        for (j, a) in suspect.activities.iter().enumerate() {
            out.push_str(&format!(
                "  - Activity {}: From {} to {}, {} min away\n",
                j + 1,
                a.start,
                a.end,
                a.travel_minutes
            ));
        }

        if opts.details {
            render_details(eval, &mut out);
        }

        out.push_str(&format!(
            "\n{sep}\n{}\n{sep}\n",
            alibi_line(&eval.verdict, opts)
        ));
    }

    out
}
