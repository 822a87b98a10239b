// ============================================================================
// Analysis Module
// Aggregate KPIs computed over query results
// ============================================================================

mod financial;

pub use financial::FinancialSummary;
