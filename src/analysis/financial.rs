// ============================================================================
// Financial Summary
// Revenue, cost, and margin KPIs aggregated over a result set
// ============================================================================

use crate::domain::{extract_f64, Row};
use crate::format::{format_currency, format_percentage};
use crate::numeric::{profit_margin_pct, round_to, safe_divide};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Candidate column names per metric. The sales views disagree on naming, so
// each metric probes a list (see `extract_value`).
const REVENUE_WITH_IVA: &[&str] = &["TotalMasIva", "PrecioTotal", "precio_total_iva"];
const REVENUE_WITHOUT_IVA: &[&str] = &["TotalSinIva", "PrecioUnitario", "precio_total"];
const COST: &[&str] = &["ValorCosto", "CostoUnitario", "cost", "costo"];

/// Financial KPIs computed over one query result.
///
/// All published values are rounded to 2 decimals. The profit fields are
/// `None` when the result set carries no net-revenue or no cost columns —
/// a summary without cost data reports revenue only, it does not invent a
/// margin.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FinancialSummary {
    /// Rows aggregated
    pub row_count: usize,
    /// Sum of gross revenue (IVA included)
    pub total_revenue_with_iva: f64,
    /// Sum of net revenue (IVA excluded)
    pub total_revenue_without_iva: f64,
    /// Mean gross revenue per row
    pub average_order_value: f64,
    /// Median gross revenue per row
    pub median_order_value: f64,
    /// Sum of costs
    pub total_cost: f64,
    /// Mean cost per row carrying a cost column
    pub average_cost: f64,
    /// Net revenue minus cost, when both are present
    pub gross_profit: Option<f64>,
    /// Gross profit as % of net revenue, clamped at 0 (losses report as 0%)
    pub gross_margin_pct: Option<f64>,
}

impl FinancialSummary {
    /// Aggregate KPIs over a result set.
    ///
    /// Rows missing a metric's columns simply don't contribute to that
    /// metric; an empty result set produces an all-zero summary.
    pub fn from_rows(rows: &[Row]) -> Self {
        let with_iva: Vec<f64> = rows
            .iter()
            .filter_map(|row| extract_f64(row, REVENUE_WITH_IVA))
            .collect();
        let without_iva: Vec<f64> = rows
            .iter()
            .filter_map(|row| extract_f64(row, REVENUE_WITHOUT_IVA))
            .collect();
        let costs: Vec<f64> = rows
            .iter()
            .filter_map(|row| extract_f64(row, COST))
            .collect();

        let total_with_iva: f64 = with_iva.iter().sum();
        let total_without_iva: f64 = without_iva.iter().sum();
        let total_cost: f64 = costs.iter().sum();

        let (gross_profit, gross_margin_pct) = if !without_iva.is_empty() && !costs.is_empty() {
            let profit = total_without_iva - total_cost;
            (
                Some(round_to(profit, 2)),
                Some(round_to(profit_margin_pct(profit, total_without_iva), 2)),
            )
        } else {
            (None, None)
        };

        Self {
            row_count: rows.len(),
            total_revenue_with_iva: round_to(total_with_iva, 2),
            total_revenue_without_iva: round_to(total_without_iva, 2),
            average_order_value: round_to(
                safe_divide(total_with_iva, with_iva.len() as f64, 0.0),
                2,
            ),
            median_order_value: round_to(median(&with_iva), 2),
            total_cost: round_to(total_cost, 2),
            average_cost: round_to(safe_divide(total_cost, costs.len() as f64, 0.0), 2),
            gross_profit,
            gross_margin_pct,
        }
    }

    /// Render every KPI as a display string, labelled with the column names
    /// the report generator uses.
    pub fn formatted(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Facturacion_Total", format_currency(self.total_revenue_with_iva, 0)),
            ("Revenue_Neto", format_currency(self.total_revenue_without_iva, 0)),
            ("Ticket_Promedio", format_currency(self.average_order_value, 0)),
            ("Mediana_Orden", format_currency(self.median_order_value, 0)),
            ("Costo_Total", format_currency(self.total_cost, 0)),
            ("Ganancia_Neta", format_currency(self.gross_profit, 0)),
            (
                "Margen_Promedio_Pct",
                format_percentage(self.gross_margin_pct, 1),
            ),
        ]
    }
}

/// Median of an unsorted slice. Empty input yields 0.
fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
