// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::verdicts_to_rows;
use crate::models::{AlibiVerdict, Case};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write one row per suspect verdict.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute output path (`~/` is expanded)
    /// - `force`: overwrite without asking
    pub fn export(
        case: &Case,
        verdicts: &[AlibiVerdict],
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(&path, force)?;

        let rows = verdicts_to_rows(case, verdicts);

        if rows.is_empty() {
            warning("Case has no suspects, exporting an empty list.");
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(())
    }
}
