// ============================================================================
// Domain Module
// Typed values and rows flowing out of the sales database
// ============================================================================

mod value;

pub use value::{extract_f64, extract_value, CellValue, Row};
