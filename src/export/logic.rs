// src/export/logic.rs

use crate::config::Config;
use crate::core::LedgerAggregator;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::{DayExport, ExportFormat};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::date::parse_range;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the enriched days of `range`.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None` or `"all"` for everything, otherwise a period
    ///   expression (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `A:B`)
    ///
    /// Returns the number of exported days.
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let bounds = match range {
            None => None,
            Some(r) if r.trim().eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let enriched = Core::enriched_records(&pool.conn, cfg, bounds)?;

        if enriched.is_empty() {
            warning("No records found for selected range.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        let days: Vec<DayExport> = enriched.iter().map(DayExport::from).collect();
        tracing::info!(format = format.as_str(), count = days.len(), file, "exporting");

        match format {
            ExportFormat::Csv => export_csv(&days, path)?,
            ExportFormat::Json => export_json(&days, path)?,
            ExportFormat::Xlsx => {
                let summary = LedgerAggregator::summarize(&enriched);
                export_xlsx(&days, &summary, path)?
            }
        }

        Ok(days.len())
    }
}
