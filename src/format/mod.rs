// ============================================================================
// Format Module
// Colombian-locale display formatting for query results
// ============================================================================
//
// This module provides:
// - FormatHint: semantic column classification (explicit or name-inferred)
// - format_number / format_with_hint: single-value rendering
// - format_currency / format_percentage / format_integer: explicit renderings
// - format_rows / format_row / format_cell: whole-result-set rendering
//
// Design principles:
// - Formatting is total: NULL and uncoercible input yield "-", never a panic
// - Output strings only; field names steer classification, never display
// - Locale is fixed: "." thousands separator, "," decimal separator

mod hint;
mod number;
mod table;

pub use hint::FormatHint;
pub use number::{
    format_currency, format_integer, format_number, format_percentage, format_with_hint,
    PLACEHOLDER,
};
pub use table::{format_cell, format_row, format_rows, DEFAULT_MAX_ROWS};
