// ============================================================================
// Result-Set Formatting
// Applies per-column formatting to whole query results for display
// ============================================================================

use super::number::format_number;
use crate::domain::{CellValue, Row};

/// Default cap on rows rendered for display.
pub const DEFAULT_MAX_ROWS: usize = 100;

/// Render one cell for display.
///
/// Numeric cells go through [`format_number`] with the column name as the
/// hint source. Text that is not a disguised number and date cells render
/// as themselves; reports need customer names and invoice dates intact.
pub fn format_cell(cell: &CellValue, column_name: &str) -> String {
    match cell {
        CellValue::Text(s) if cell.as_f64().is_none() => s.clone(),
        CellValue::Date(_) | CellValue::Timestamp(_) => cell.to_string(),
        _ => format_number(cell, column_name),
    }
}

/// Render every cell of a row, keeping select-list order.
pub fn format_row(row: &Row) -> Vec<(String, String)> {
    row.iter()
        .map(|(column, cell)| (column.clone(), format_cell(cell, column)))
        .collect()
}

/// Render a result set for display, capped at `max_rows`.
///
/// Truncation is logged rather than signalled: display callers only want
/// the visible slice, and operators can see in the log that a query
/// returned more than fits on screen.
pub fn format_rows(rows: &[Row], max_rows: usize) -> Vec<Vec<(String, String)>> {
    if rows.len() > max_rows {
        tracing::warn!(
            shown = max_rows,
            total = rows.len(),
            "result set truncated for display"
        );
    }

    rows.iter().take(max_rows).map(format_row).collect()
}
