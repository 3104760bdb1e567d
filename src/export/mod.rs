// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
pub mod model;
mod pdf;
mod pdf_export;
mod xlsx;

pub use logic::ExportLogic;
pub use model::{CellValue, ExportTable};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every format.
pub(crate) fn notify_export_success(label: &str, rows: usize, path: &Path) {
    success(format!(
        "{label} export completed ({rows} rows): {}",
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// Which table gets exported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportView {
    Tracks,
    Artists,
    Albums,
    WrappedTracks,
    WrappedArtists,
    /// The normalized play events themselves
    Plays,
}

impl ExportView {
    pub fn is_wrapped(&self) -> bool {
        matches!(self, ExportView::WrappedTracks | ExportView::WrappedArtists)
    }

    pub fn is_all_time(&self) -> bool {
        matches!(
            self,
            ExportView::Tracks | ExportView::Artists | ExportView::Albums
        )
    }
}
