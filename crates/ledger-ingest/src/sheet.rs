//! CSV-backed sheet access.
//!
//! Both sheets follow the spreadsheet convention: row 1 is the header, data
//! starts at row 2. Cells are trimmed and BOM-stripped on the way in and
//! carried as plain strings; the ledger forbids type coercion, so nothing
//! here parses numbers or dates.

use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use tracing::warn;

use ledger_model::{CompletedCredit, SourceRecord};

#[derive(Debug, Clone, Default)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a sheet from a CSV file. The first non-blank row is the header;
/// fully blank rows are dropped; ragged data rows are padded to the header
/// width so positional access stays in bounds.
pub fn read_sheet(path: &Path) -> Result<SheetTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read sheet: {}", path.display()))?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Ok(SheetTable::default());
    }
    let headers = raw_rows.remove(0);
    let mut rows = Vec::with_capacity(raw_rows.len());
    for record in raw_rows {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len().max(record.len()) {
            let value = record.get(idx).map(String::as_str).unwrap_or("");
            row.push(value.to_string());
        }
        rows.push(row);
    }
    Ok(SheetTable { headers, rows })
}

/// Read a sheet, treating a missing file as an empty table with the given
/// headers. The ledger starts out this way on a first run.
pub fn read_sheet_or_empty(path: &Path, headers: &[&str]) -> Result<SheetTable> {
    if !path.exists() {
        warn!(path = %path.display(), "sheet not found, starting from an empty table");
        return Ok(SheetTable {
            headers: headers.iter().map(|header| (*header).to_string()).collect(),
            rows: Vec::new(),
        });
    }
    read_sheet(path)
}

/// Write header and rows back to a CSV file, replacing its contents.
pub fn write_sheet(path: &Path, table: &SheetTable) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("write sheet: {}", path.display()))?;
    writer
        .write_record(&table.headers)
        .context("write header row")?;
    for row in &table.rows {
        writer
            .write_record(row)
            .with_context(|| format!("write row: {}", path.display()))?;
    }
    writer.flush().context("flush sheet")?;
    Ok(())
}

/// Interpret a sheet as source records, one per data row.
pub fn source_records(table: &SheetTable) -> Vec<SourceRecord> {
    table
        .rows
        .iter()
        .map(|row| SourceRecord::from_row(row))
        .collect()
}

/// Interpret a sheet as ledger records, one per data row.
pub fn ledger_records(table: &SheetTable) -> Vec<CompletedCredit> {
    table
        .rows
        .iter()
        .map(|row| CompletedCredit::from_row(row))
        .collect()
}

/// Render ledger records as a writable sheet.
pub fn ledger_table(records: &[CompletedCredit]) -> SheetTable {
    SheetTable {
        headers: ledger_model::LEDGER_HEADERS
            .iter()
            .map(|header| (*header).to_string())
            .collect(),
        rows: records.iter().map(CompletedCredit::to_row).collect(),
    }
}
