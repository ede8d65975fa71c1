// src/export.rs
use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;
use std::{fs, path::Path};
use tracing::{debug, info, instrument};

use crate::table::Table;

/// Write `table` to an `.xlsx` workbook at `path`, replacing any existing
/// file. Row 0 holds the column headers; each table row follows, with no
/// index column.
///
/// Cell values that parse as a number are written as spreadsheet numbers,
/// everything else as text.
#[instrument(level = "info", skip(table, path), fields(path = %path.as_ref().display()))]
pub fn write_xlsx<P: AsRef<Path>>(table: &Table, path: P) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, name) in table.column_names().iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *name)
            .with_context(|| format!("writing header '{}'", name))?;
    }

    for (i, row) in table.rows().enumerate() {
        let row_idx = (i + 1) as u32;
        for (col, value) in row.iter().enumerate() {
            let col_idx = col as u16;
            if let Ok(n) = value.parse::<f64>() {
                worksheet
                    .write_number(row_idx, col_idx, n)
                    .with_context(|| format!("writing cell ({}, {})", row_idx, col_idx))?;
            } else {
                worksheet
                    .write_string(row_idx, col_idx, *value)
                    .with_context(|| format!("writing cell ({}, {})", row_idx, col_idx))?;
            }
        }
    }

    workbook
        .save(path.as_ref())
        .with_context(|| format!("saving workbook {:?}", path.as_ref()))?;

    let bytes = fs::metadata(path.as_ref()).map(|m| m.len()).unwrap_or(0);
    debug!(bytes, "workbook saved");
    info!(
        rows = table.num_rows(),
        columns = table.columns().len(),
        "exported table"
    );
    Ok(())
}
