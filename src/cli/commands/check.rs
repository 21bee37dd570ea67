use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::HistoryLogic;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::input;
use crate::ui::messages::warning;
use crate::ui::report::{ReportOptions, render_case};
use std::io::IsTerminal;

/// Handle the `check` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check {
        file,
        format,
        details,
        no_color,
        no_log,
    } = cmd
    {
        let content = input::read_source(file.as_deref())?;
        let case = input::parse_case(&content, format.unwrap_or(cfg.default_input_format))?;

        let evaluations = Core::evaluate_case_detailed(&case)?;

        let opts = ReportOptions {
            details: *details,
            color: cfg.color && !*no_color && std::io::stdout().is_terminal(),
            separator_char: cfg.separator_char.clone(),
        };
        print!("{}", render_case(&case, &evaluations, &opts));

        if !*no_log {
            let verdicts: Vec<_> = evaluations.iter().map(|e| e.verdict).collect();
            let source = input::source_label(file.as_deref());

            // non-blocking: the report is already out
            if let Err(e) = HistoryLogic::record(cfg, "check", &source, &case, &verdicts) {
                warning(format!("Failed to record evaluation: {e}"));
            }
        }
    }

    Ok(())
}
