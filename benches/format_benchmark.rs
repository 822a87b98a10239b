// ============================================================================
// Formatting Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Hint Inference - column-name classification on its own
// 2. Single Cell - one value through the full format path
// 3. Result Set - whole-table formatting across result sizes
// 4. Summary - KPI aggregation over rows
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use reporting_engine::prelude::*;

// ============================================================================
// Hint Inference Benchmarks
// ============================================================================

fn benchmark_hint_inference(c: &mut Criterion) {
    let mut group = c.benchmark_group("hint_inference");

    // Explicit set hit, keyword fallback hit, and the full-scan miss.
    for column in ["TotalMasIva", "ingresos_mes", "NombreCliente"].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(column), column, |b, column| {
            b.iter(|| black_box(FormatHint::infer(column)));
        });
    }

    group.finish();
}

// ============================================================================
// Single Cell Benchmarks
// ============================================================================

fn benchmark_format_number(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_number");

    group.bench_function("currency", |b| {
        b.iter(|| black_box(format_number(black_box(1_234_567.0), "TotalMasIva")));
    });

    group.bench_function("percentage", |b| {
        b.iter(|| black_box(format_number(black_box(45.6), "Margen_Promedio_Pct")));
    });

    group.bench_function("null", |b| {
        b.iter(|| black_box(format_number(None::<f64>, "TotalMasIva")));
    });

    group.finish();
}

// ============================================================================
// Result Set Benchmarks
// ============================================================================

fn sample_rows(count: usize) -> Vec<Row> {
    (0..count)
        .map(|i| {
            vec![
                (
                    "NombreCliente".to_string(),
                    CellValue::from(format!("Cliente {}", i)),
                ),
                (
                    "TotalMasIva".to_string(),
                    CellValue::from(1190.0 * (i + 1) as f64),
                ),
                (
                    "TotalSinIva".to_string(),
                    CellValue::from(1000.0 * (i + 1) as f64),
                ),
                (
                    "ValorCosto".to_string(),
                    CellValue::from(600.0 * (i + 1) as f64),
                ),
                ("Cantidad".to_string(), CellValue::from((i + 1) as i64)),
            ]
        })
        .collect()
}

fn benchmark_format_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_rows");

    for size in [10, 100, 1000].iter() {
        let rows = sample_rows(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &rows, |b, rows| {
            b.iter(|| black_box(format_rows(rows, usize::MAX)));
        });
    }

    group.finish();
}

fn benchmark_financial_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("financial_summary");

    for size in [100, 1000].iter() {
        let rows = sample_rows(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &rows, |b, rows| {
            b.iter(|| black_box(FinancialSummary::from_rows(rows)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_hint_inference,
    benchmark_format_number,
    benchmark_format_rows,
    benchmark_financial_summary
);
criterion_main!(benches);
