// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::pdf::PdfTable;
use crate::export::{ExportTable, notify_export_success};
use crate::ui::messages::info;
use std::path::Path;

/// Export PDF: one paginated table under the table title.
pub(crate) fn export_pdf(table: &ExportTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut pdf = PdfTable::new();
    pdf.write_table(&table.title, &table.headers, &table.display_rows(true));

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", table.rows.len(), path);
    Ok(())
}
