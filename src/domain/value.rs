// ============================================================================
// Result-Set Values
// Typed cells and rows as delivered by the sales database
// ============================================================================

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single cell from a query result set.
///
/// The sales database returns a mix of SQL money columns (as decimals),
/// counters, free text, and invoice dates. `CellValue` carries any of them
/// through the formatting layer without losing the original type.
///
/// # Example
/// ```
/// use reporting_engine::domain::CellValue;
///
/// let cell = CellValue::from("1234.5");
/// assert_eq!(cell.as_f64(), Some(1234.5));
///
/// let cell = CellValue::from("Acme Ltda");
/// assert_eq!(cell.as_f64(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellValue {
    /// SQL NULL or a missing column
    Null,
    /// Whole-number cell (counts, identifiers)
    Integer(i64),
    /// Floating-point cell (ratios, pre-computed percentages)
    Float(f64),
    /// Money cell (pymssql-style exact decimal)
    Decimal(Decimal),
    /// Free-text cell (customer names, product descriptions)
    Text(String),
    /// Calendar date (invoice date)
    Date(NaiveDate),
    /// Full timestamp
    Timestamp(DateTime<Utc>),
}

impl CellValue {
    /// Coerce the cell to a number, if it represents one.
    ///
    /// Numeric text coerces (the database sometimes stores amounts in
    /// varchar columns); non-numeric text, dates, and non-finite floats do
    /// not. `None` is the "treat as null" signal for the formatter.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Null => None,
            CellValue::Integer(i) => Some(*i as f64),
            CellValue::Float(f) => f.is_finite().then_some(*f),
            CellValue::Decimal(d) => d.to_f64().filter(|f| f.is_finite()),
            CellValue::Text(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
            CellValue::Date(_) | CellValue::Timestamp(_) => None,
        }
    }

    /// Check if the cell is NULL.
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, "-"),
            CellValue::Integer(i) => write!(f, "{}", i),
            CellValue::Float(v) => write!(f, "{}", v),
            CellValue::Decimal(d) => write!(f, "{}", d),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CellValue::Timestamp(t) => write!(f, "{}", t.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<i64> for CellValue {
    #[inline]
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<f64> for CellValue {
    #[inline]
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<Decimal> for CellValue {
    #[inline]
    fn from(value: Decimal) -> Self {
        CellValue::Decimal(value)
    }
}

impl From<&str> for CellValue {
    #[inline]
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    #[inline]
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<NaiveDate> for CellValue {
    #[inline]
    fn from(value: NaiveDate) -> Self {
        CellValue::Date(value)
    }
}

impl From<DateTime<Utc>> for CellValue {
    #[inline]
    fn from(value: DateTime<Utc>) -> Self {
        CellValue::Timestamp(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => CellValue::Null,
        }
    }
}

impl From<&CellValue> for CellValue {
    #[inline]
    fn from(value: &CellValue) -> Self {
        value.clone()
    }
}

// ============================================================================
// Rows
// ============================================================================

/// One result-set row: column names paired with cell values, in select-list
/// order.
pub type Row = Vec<(String, CellValue)>;

/// Find the first non-null value stored under any of the candidate column
/// names, in order.
///
/// The database mixes Spanish and English column names across views
/// (`TercerosNombres` vs `customer_name`), so metric extraction probes a
/// candidate list rather than a single key.
pub fn extract_value<'a>(row: &'a Row, candidates: &[&str]) -> Option<&'a CellValue> {
    for key in candidates {
        if let Some((_, value)) = row.iter().find(|(col, _)| col == key) {
            if !value.is_null() {
                return Some(value);
            }
        }
    }
    None
}

/// Like [`extract_value`], but coerced to a number.
pub fn extract_f64(row: &Row, candidates: &[&str]) -> Option<f64> {
    extract_value(row, candidates).and_then(CellValue::as_f64)
}
