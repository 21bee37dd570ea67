use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::HistoryLogic;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::input;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        input: source,
        input_format,
        format,
        file,
        force,
        no_log,
    } = cmd
    {
        let content = input::read_source(source.as_deref())?;
        let case = input::parse_case(&content, input_format.unwrap_or(cfg.default_input_format))?;

        let verdicts = Core::evaluate_case(&case)?;
        ExportLogic::export(&case, &verdicts, *format, file, *force)?;

        if !*no_log {
            let target = format!("{} → {}", format.as_str(), file);
            if let Err(e) = HistoryLogic::record(cfg, "export", &target, &case, &verdicts) {
                warning(format!("Failed to record evaluation: {e}"));
            }
        }
    }
    Ok(())
}
