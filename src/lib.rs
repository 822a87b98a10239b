// ============================================================================
// Reporting Engine Library
// Deterministic Colombian-locale formatting and retry core for sales reports
// ============================================================================

//! # Reporting Engine
//!
//! The numeric formatting and resilience layer of a sales-reporting tool for
//! a Colombian business database.
//!
//! ## Features
//!
//! - **Colombian-locale formatting**: "." thousands separator, "," decimal
//!   separator, "$" currency prefix; NULL and garbage input render as "-",
//!   never a panic
//! - **Column-name classification** with an explicit [`FormatHint`]
//!   override for callers that know better
//! - **Safe aggregation math**: division and margin helpers that absorb
//!   zero denominators and invalid operands
//! - **Bounded retry with exponential backoff** around flaky database and
//!   AI-provider calls
//!
//! [`FormatHint`]: format::FormatHint
//!
//! ## Example
//!
//! ```rust
//! use reporting_engine::prelude::*;
//! use std::time::Duration;
//!
//! // One invoice line as it comes back from the sales database.
//! let rows: Vec<Row> = vec![vec![
//!     ("NombreCliente".to_string(), CellValue::from("Acme Ltda")),
//!     ("TotalMasIva".to_string(), CellValue::from(1_234_567.0)),
//!     ("TotalSinIva".to_string(), CellValue::from(1_037_451.0)),
//!     ("ValorCosto".to_string(), CellValue::from(622_470.0)),
//! ]];
//!
//! // Aggregate KPIs, then render them for the report.
//! let summary = FinancialSummary::from_rows(&rows);
//! let report = summary.formatted();
//! assert_eq!(report[0], ("Facturacion_Total", "$1.234.567".to_string()));
//!
//! // Guard a flaky fetch with bounded retry.
//! let policy = RetryPolicy::new(3).with_initial_delay(Duration::ZERO);
//! let fetched: Result<&str, _> = with_retry(&policy, || Ok::<_, &str>("rows"));
//! assert_eq!(fetched.unwrap(), "rows");
//! ```

pub mod analysis;
pub mod domain;
pub mod format;
pub mod numeric;
pub mod retry;

// Re-exports for convenience
pub mod prelude {
    pub use crate::analysis::FinancialSummary;
    pub use crate::domain::{extract_f64, extract_value, CellValue, Row};
    pub use crate::format::{
        format_cell, format_currency, format_integer, format_number, format_percentage,
        format_row, format_rows, format_with_hint, FormatHint,
    };
    pub use crate::numeric::{profit_margin_pct, round_to, safe_divide};
    pub use crate::retry::{with_retry, RetryError, RetryPolicy};
}
