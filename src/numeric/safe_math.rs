// ============================================================================
// Safe Math
// Division and rounding helpers that never panic on bad query data
// ============================================================================

/// Divide without surprises.
///
/// Returns `default` when the denominator is zero or either operand is not a
/// finite number. Ratio and margin calculations run over aggregates that can
/// legitimately be zero (no sales in a period), so the degenerate case is an
/// expected input, not an error.
///
/// # Example
/// ```
/// use reporting_engine::numeric::safe_divide;
///
/// assert_eq!(safe_divide(10.0, 4.0, 0.0), 2.5);
/// assert_eq!(safe_divide(100.0, 0.0, 0.0), 0.0);
/// assert_eq!(safe_divide(100.0, 0.0, -1.0), -1.0);
/// ```
#[inline]
pub fn safe_divide(numerator: f64, denominator: f64, default: f64) -> f64 {
    if denominator == 0.0 || !numerator.is_finite() || !denominator.is_finite() {
        return default;
    }
    numerator / denominator
}

/// Profit margin as a percentage of revenue, clamped at zero.
///
/// Business convention: losses report as 0%, never negative. Every margin
/// published by the analyzers goes through this (or applies the same clamp).
#[inline]
pub fn profit_margin_pct(profit: f64, revenue: f64) -> f64 {
    (safe_divide(profit, revenue, 0.0) * 100.0).max(0.0)
}

/// Round to `decimals` places, half away from zero.
///
/// Used when publishing metric values; display formatting does its own
/// rounding.
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}
