// ============================================================================
// Basic Usage Example
// ============================================================================

use reporting_engine::prelude::*;
use std::time::Duration;

fn main() {
    println!("=== Reporting Engine Example ===\n");

    // Simulate a flaky database fetch: two dropped connections, then rows.
    let policy = RetryPolicy::new(3).with_initial_delay(Duration::from_millis(200));
    let mut attempts = 0;

    let rows = with_retry(&policy, || {
        attempts += 1;
        if attempts < 3 {
            Err("connection reset by peer")
        } else {
            Ok(sample_rows())
        }
    })
    .expect("fetch succeeds within the retry budget");

    println!("Fetched {} rows after {} attempt(s)\n", rows.len(), attempts);

    // Render the raw result set the way the report does.
    println!("=== Ventas ===");
    for row in format_rows(&rows, 10) {
        let line: Vec<String> = row
            .into_iter()
            .map(|(column, value)| format!("{}: {}", column, value))
            .collect();
        println!("  {}", line.join(" | "));
    }

    // Aggregate KPIs over the same rows.
    let summary = FinancialSummary::from_rows(&rows);

    println!("\n=== Resumen Financiero ===");
    for (label, value) in summary.formatted() {
        println!("  {:<20} {}", label, value);
    }

    // Explicit hints, for callers that know what a value is.
    println!("\n=== Explicit hints ===");
    println!(
        "  growth as percentage: {}",
        format_with_hint(12.34, FormatHint::Percentage)
    );
    println!(
        "  order count as quantity: {}",
        format_with_hint(98_765.0, FormatHint::Quantity)
    );
}

fn sample_rows() -> Vec<Row> {
    vec![
        vec![
            ("NombreCliente".to_string(), CellValue::from("Acme Ltda")),
            ("TotalMasIva".to_string(), CellValue::from(1_190_000.0)),
            ("TotalSinIva".to_string(), CellValue::from(1_000_000.0)),
            ("ValorCosto".to_string(), CellValue::from(600_000.0)),
            ("Cantidad".to_string(), CellValue::from(1_250_i64)),
        ],
        vec![
            ("NombreCliente".to_string(), CellValue::from("Surtitodo SAS")),
            ("TotalMasIva".to_string(), CellValue::from(2_380_000.0)),
            ("TotalSinIva".to_string(), CellValue::from(2_000_000.0)),
            ("ValorCosto".to_string(), CellValue::from(1_450_000.0)),
            ("Cantidad".to_string(), CellValue::from(3_400_i64)),
        ],
        vec![
            ("NombreCliente".to_string(), CellValue::from("Distribuciones El Valle")),
            ("TotalMasIva".to_string(), CellValue::from(595_000.0)),
            ("TotalSinIva".to_string(), CellValue::from(500_000.0)),
            ("ValorCosto".to_string(), CellValue::Null),
            ("Cantidad".to_string(), CellValue::from(820_i64)),
        ],
    ]
}
