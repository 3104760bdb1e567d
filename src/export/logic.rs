// src/export/logic.rs

use crate::config::Config;
use crate::core::{AllTimeTables, ListeningHistory, WrappedTables};
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ExportTable;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, ExportView};
use crate::ui::messages::warning;
use crate::utils::path::{expand_tilde, is_absolute};
use std::path::PathBuf;

/// What to export and where.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub view: ExportView,
    pub format: ExportFormat,
    pub file: String,
    /// Wrapped views only; defaults to the first configured year.
    pub year: Option<i32>,
    /// All-time views only.
    pub search: Option<String>,
    pub force: bool,
}

/// High-level export flow.
pub struct ExportLogic;

impl ExportLogic {
    /// Build the table for `req.view` from `history`.
    pub fn build_table(
        history: &ListeningHistory,
        cfg: &Config,
        req: &ExportRequest,
    ) -> AppResult<ExportTable> {
        let query = req.search.as_deref().unwrap_or("");

        if !query.is_empty() && !req.view.is_all_time() {
            warning("--search only applies to the tracks, artists and albums views; ignored.");
        }
        if req.year.is_some() && !req.view.is_wrapped() {
            warning("--year only applies to the wrapped views; ignored.");
        }

        let table = match req.view {
            ExportView::Tracks | ExportView::Artists | ExportView::Albums => {
                let all = AllTimeTables::build(&history.events).filtered(query);
                let t = match req.view {
                    ExportView::Tracks => &all.tracks,
                    ExportView::Artists => &all.artists,
                    _ => &all.albums,
                };
                ExportTable::from_aggregate(t.group_by.title(), t)
            }
            ExportView::WrappedTracks | ExportView::WrappedArtists => {
                let year = match req.year {
                    Some(y) => y,
                    None => cfg.default_wrapped_year()?,
                };
                let wrapped = WrappedTables::build(&history.events, year, &cfg.wrapped_years);
                let (t, what) = if req.view == ExportView::WrappedTracks {
                    (&wrapped.tracks, "tracks")
                } else {
                    (&wrapped.artists, "artists")
                };
                ExportTable::from_aggregate(&format!("Wrapped {year} - top {what}"), t)
            }
            ExportView::Plays => ExportTable::from_events("Plays", &history.events),
        };

        Ok(table)
    }

    /// Export one view of `history` to `req.file`.
    ///
    /// The path must be absolute once `~/` is expanded.
    pub fn export(
        history: &ListeningHistory,
        cfg: &Config,
        req: &ExportRequest,
    ) -> AppResult<PathBuf> {
        if !is_absolute(&req.file) {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {}",
                req.file
            )));
        }
        let path = expand_tilde(&req.file);

        ensure_writable(&path, req.force)?;

        let table = Self::build_table(history, cfg, req)?;

        if table.rows.is_empty() {
            warning("No rows for the selected view.");
        }

        match req.format {
            ExportFormat::Csv => export_csv(&table, &path)?,
            ExportFormat::Json => export_json(&table, &path)?,
            ExportFormat::Xlsx => export_xlsx(&table, &path)?,
            ExportFormat::Pdf => export_pdf(&table, &path)?,
        }

        Ok(path)
    }
}
