// ============================================================================
// Format Hint
// Semantic classification of a result-set column for display
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Known money columns across the sales views. Exact matches beat keyword
// scanning, so ambiguous names like "Margen" classify reliably.
const CURRENCY_COLUMNS: &[&str] = &[
    "TotalMasIva",
    "TotalSinIva",
    "ValorCosto",
    "Facturacion_Total",
    "Revenue",
    "Ganancia",
    "Ganancia_Neta",
    "total_revenue",
    "Ticket_Promedio",
    "Revenue_Neto",
    "Precio",
    "Costo",
];

// Known percentage columns.
const PERCENTAGE_COLUMNS: &[&str] = &[
    "Margen_Promedio_Pct",
    "profit_margin_pct",
    "Margen",
    "margin_pct",
    "percentage",
];

// Keyword fallbacks, matched case-insensitively anywhere in the name.
// Currency keywords are scanned before percentage keywords; a name carrying
// both (e.g. "total_margin") reads as money.
const CURRENCY_KEYWORDS: &[&str] = &[
    "revenue",
    "ganancia",
    "facturacion",
    "total",
    "costo",
    "precio",
    "valor",
    "ingreso",
    "profit",
    "cost",
    "iva",
];

const PERCENTAGE_KEYWORDS: &[&str] = &["margen", "margin", "pct", "porcentaje", "%"];

const QUANTITY_KEYWORDS: &[&str] = &["cantidad", "unidades", "units", "qty"];

/// How a value should be rendered for display.
///
/// The explicit hint is the primary contract: callers that know what a value
/// is pass a `FormatHint` directly. [`FormatHint::infer`] exists as a
/// convenience default for code that only has the column name in hand — a
/// heuristic, not a guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FormatHint {
    /// Colombian pesos: "$" prefix, "." thousands grouping, no decimals
    Currency,
    /// One decimal with "," separator, "%" suffix
    Percentage,
    /// Whole count with "." thousands grouping
    Quantity,
    /// Default rendering: rounded integer with "." thousands grouping
    Plain,
}

impl FormatHint {
    /// Classify a column by its name.
    ///
    /// Priority order:
    /// 1. Exact match against the known currency/percentage column sets
    /// 2. Case-insensitive keyword containment (currency, percentage,
    ///    quantity)
    /// 3. `Plain` for everything else
    pub fn infer(column_name: &str) -> Self {
        if CURRENCY_COLUMNS.contains(&column_name) {
            return FormatHint::Currency;
        }
        if PERCENTAGE_COLUMNS.contains(&column_name) {
            return FormatHint::Percentage;
        }

        let lower = column_name.to_lowercase();

        if CURRENCY_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            return FormatHint::Currency;
        }
        if PERCENTAGE_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            return FormatHint::Percentage;
        }
        if QUANTITY_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            return FormatHint::Quantity;
        }

        FormatHint::Plain
    }

    /// Stable lowercase name, for logging and diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            FormatHint::Currency => "currency",
            FormatHint::Percentage => "percentage",
            FormatHint::Quantity => "quantity",
            FormatHint::Plain => "plain",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_columns_win() {
        assert_eq!(FormatHint::infer("TotalMasIva"), FormatHint::Currency);
        assert_eq!(FormatHint::infer("Ticket_Promedio"), FormatHint::Currency);
        assert_eq!(
            FormatHint::infer("Margen_Promedio_Pct"),
            FormatHint::Percentage
        );
        // "Margen" is in the explicit percentage set even though a keyword
        // scan alone would also land on percentage.
        assert_eq!(FormatHint::infer("Margen"), FormatHint::Percentage);
    }

    #[test]
    fn test_keyword_fallback() {
        assert_eq!(FormatHint::infer("ingresos_mes"), FormatHint::Currency);
        assert_eq!(FormatHint::infer("PrecioUnitario"), FormatHint::Currency);
        assert_eq!(FormatHint::infer("growth_pct"), FormatHint::Percentage);
        assert_eq!(FormatHint::infer("Cantidad"), FormatHint::Quantity);
        assert_eq!(FormatHint::infer("units_sold"), FormatHint::Quantity);
    }

    #[test]
    fn test_currency_keywords_scan_first() {
        // Carries both "total" and "margin"; money wins.
        assert_eq!(FormatHint::infer("total_margin"), FormatHint::Currency);
    }

    #[test]
    fn test_unmatched_defaults_to_plain() {
        assert_eq!(FormatHint::infer("NombreCliente"), FormatHint::Plain);
        assert_eq!(FormatHint::infer(""), FormatHint::Plain);
    }

    #[test]
    fn test_as_str() {
        assert_eq!(FormatHint::Currency.as_str(), "currency");
        assert_eq!(FormatHint::Plain.as_str(), "plain");
    }
}
