use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::db::queries::load_evaluations;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI pattern"));

const MAX_OP_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Colour of the operation column
fn color_for_operation(op: &str) -> Colour {
    match op {
        "check" => Colour::Green,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

/// Visible width, ignoring escape sequences.
fn visible_len(s: &str) -> usize {
    strip_ansi(s).chars().count()
}

fn truncate_visible(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut t: String = s.chars().take(max.saturating_sub(3)).collect();
    t.push_str("...");
    t
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        // Only the operation word gets coloured; truncation works on the plain text
        let op_targets: Vec<String> = entries
            .iter()
            .map(|e| {
                let plain = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                let plain = truncate_visible(&plain, MAX_OP_WIDTH);
                let color = color_for_operation(&e.operation);

                match plain.split_once(' ') {
                    Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                    None => color.paint(plain.as_str()).to_string(),
                }
            })
            .collect();

        let op_w = op_targets
            .iter()
            .map(|s| visible_len(s))
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        println!("📜 Internal log:\n");

        for (e, op_target) in entries.iter().zip(&op_targets) {
            let padding = " ".repeat(op_w.saturating_sub(visible_len(op_target)));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                op_target,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }

    pub fn print_evaluations(pool: &mut DbPool) -> AppResult<()> {
        let records = load_evaluations(&pool.conn)?;

        if records.is_empty() {
            info("No evaluations recorded yet.");
            return Ok(());
        }

        println!("🔎 Recorded evaluations:\n");

        for r in records {
            println!(
                "{:>4}: {} | {} | crime {}-{} ≥{} min | {} suspects | {}",
                r.id,
                r.created_at,
                r.source,
                r.crime_start,
                r.crime_end,
                r.min_duration,
                r.suspects,
                r.verdicts
            );
        }

        Ok(())
    }
}
