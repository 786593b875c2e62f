//! Spreadsheet decoding via calamine.

use std::io::Cursor;

use calamine::{Data, Reader};

use crate::errors::PipelineError;
use crate::tabular::Table;

/// Decode workbook bytes into a [`Table`].
///
/// The first worksheet becomes the table; no schema validation happens beyond
/// the content being a well-formed workbook with at least one sheet. A sheet
/// with zero rows is a valid, empty table.
pub fn parse_workbook(data: &[u8]) -> Result<Table, PipelineError> {
    let cursor = Cursor::new(data);
    let mut workbook = calamine::open_workbook_auto_from_rs(cursor)
        .map_err(|e| PipelineError::Parse(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| PipelineError::Parse("workbook contains no sheets".to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| PipelineError::Parse(e.to_string()))?;

    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect();

    Ok(Table::from_rows(rows))
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        other => other.to_string(),
    }
}
