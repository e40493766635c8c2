// src/export/logic.rs

use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::segments_to_rows;
use crate::models::OverlapReport;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the overlap segments of `report` to `file`.
    ///
    /// An existing file is only replaced with `force` or after confirmation.
    pub fn export(
        report: &OverlapReport,
        format: ExportFormat,
        file: &Path,
        force: bool,
        cfg: &Config,
    ) -> AppResult<()> {
        ensure_writable(file, force)?;

        if report.segments.is_empty() {
            warning("No overlap found: the export will contain no rows.");
        }

        let rows = segments_to_rows(&report.segments, &cfg.timestamp_format);
        tracing::debug!(format = format.as_str(), rows = rows.len(), path = %file.display(), "exporting");

        match format {
            ExportFormat::Csv => export_csv(&rows, file),
            ExportFormat::Json => export_json(&rows, file),
        }
    }
}
