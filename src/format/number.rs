// ============================================================================
// Number Formatting
// Colombian-locale renderings: "." thousands, "," decimals, "$" prefix
// ============================================================================

use super::hint::FormatHint;
use crate::domain::CellValue;

/// Rendering for NULL and uncoercible values.
pub const PLACEHOLDER: &str = "-";

/// Format a value by column name.
///
/// Classification runs through [`FormatHint::infer`]; see
/// [`format_with_hint`] for the explicit-hint variant. Total over its
/// inputs: NULL and anything that does not coerce to a number comes back as
/// `"-"`, and the function never panics.
///
/// # Example
/// ```
/// use reporting_engine::format::format_number;
///
/// assert_eq!(format_number(1_234_567.0, "TotalMasIva"), "$1.234.567");
/// assert_eq!(format_number(45.6, "Margen_Promedio_Pct"), "45,6%");
/// assert_eq!(format_number(1234.0, "Cantidad"), "1.234");
/// assert_eq!(format_number(None::<f64>, "TotalMasIva"), "-");
/// ```
pub fn format_number(value: impl Into<CellValue>, column_name: &str) -> String {
    format_with_hint(value, FormatHint::infer(column_name))
}

/// Format a value with an explicit hint, bypassing name-based inference.
pub fn format_with_hint(value: impl Into<CellValue>, hint: FormatHint) -> String {
    // Nulls first, unconditionally: a NULL money cell is "-", not "$0".
    let num = match value.into().as_f64() {
        Some(n) => n,
        None => return PLACEHOLDER.to_string(),
    };

    match hint {
        FormatHint::Currency => format!("${}", render_grouped(num, 0)),
        FormatHint::Percentage => format!("{}%", render_grouped(num, 1)),
        FormatHint::Quantity | FormatHint::Plain => render_grouped(num, 0),
    }
}

/// Format as Colombian currency with an explicit decimal count.
///
/// `format_currency(1234567.0, 0)` → `"$1.234.567"`;
/// `format_currency(1234.5, 2)` → `"$1.234,50"`.
pub fn format_currency(value: impl Into<CellValue>, decimals: u32) -> String {
    match value.into().as_f64() {
        Some(n) => format!("${}", render_grouped(n, decimals)),
        None => PLACEHOLDER.to_string(),
    }
}

/// Format as a percentage with an explicit decimal count.
///
/// `format_percentage(45.6, 1)` → `"45,6%"`.
pub fn format_percentage(value: impl Into<CellValue>, decimals: u32) -> String {
    match value.into().as_f64() {
        Some(n) => format!("{}%", render_grouped(n, decimals)),
        None => PLACEHOLDER.to_string(),
    }
}

/// Format as a whole number with thousands grouping.
///
/// `format_integer(1234.0)` → `"1.234"`.
pub fn format_integer(value: impl Into<CellValue>) -> String {
    match value.into().as_f64() {
        Some(n) => render_grouped(n, 0),
        None => PLACEHOLDER.to_string(),
    }
}

// ============================================================================
// Rendering
// ============================================================================

// Decimal counts beyond money precision are a caller bug; clamp so the u64
// scale below cannot overflow.
const MAX_DECIMALS: u32 = 9;

/// Render a finite number with "." thousands grouping and `decimals` digits
/// after a "," separator. Rounds half away from zero.
///
/// The sign lands before the digits, so currency callers produce "$-1.234"
/// for negatives.
fn render_grouped(value: f64, decimals: u32) -> String {
    let decimals = decimals.min(MAX_DECIMALS);
    let scale = 10u64.pow(decimals);
    let scaled = (value * scale as f64).round();

    // `as` saturates, so even absurd magnitudes produce a string instead of
    // a panic.
    let negative = scaled < 0.0;
    let scaled = scaled.abs() as u128;
    let int_part = scaled / scale as u128;
    let frac_part = scaled % scale as u128;

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(&int_part.to_string()));
    if decimals > 0 {
        out.push(',');
        out.push_str(&format!("{:0>width$}", frac_part, width = decimals as usize));
    }
    out
}

/// Insert "." every three digits from the right of an unsigned digit string.
fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_currency_by_column_name() {
        assert_eq!(format_number(1_234_567.0, "TotalMasIva"), "$1.234.567");
        assert_eq!(format_number(1_234_567i64, "Revenue"), "$1.234.567");
        assert_eq!(format_number(999.0, "Precio"), "$999");
    }

    #[test]
    fn test_percentage_by_column_name() {
        assert_eq!(format_number(45.6, "Margen_Promedio_Pct"), "45,6%");
        assert_eq!(format_number(7.0, "margin_pct"), "7,0%");
        // Out-of-range values pass through; the caller owns the range.
        assert_eq!(format_number(-3.2, "margin_pct"), "-3,2%");
        assert_eq!(format_number(150.0, "margin_pct"), "150,0%");
    }

    #[test]
    fn test_quantity_and_plain() {
        assert_eq!(format_number(1234.0, "Cantidad"), "1.234");
        assert_eq!(format_number(1234.0, "SomeUnknownColumn"), "1.234");
        // Plain rounds fractional values to the nearest whole unit.
        assert_eq!(format_number(1234.6, "SomeUnknownColumn"), "1.235");
    }

    #[test]
    fn test_null_always_placeholder() {
        assert_eq!(format_number(None::<f64>, "TotalMasIva"), "-");
        assert_eq!(format_number(None::<f64>, "Margen"), "-");
        assert_eq!(format_number(None::<f64>, ""), "-");
    }

    #[test]
    fn test_uncoercible_is_placeholder() {
        assert_eq!(format_number("Acme Ltda", "NombreCliente"), "-");
        assert_eq!(format_number(f64::NAN, "TotalMasIva"), "-");
        assert_eq!(format_number(f64::INFINITY, "Cantidad"), "-");
    }

    #[test]
    fn test_currency_rounds_to_whole_units() {
        assert_eq!(format_number(1234.49, "TotalMasIva"), "$1.234");
        assert_eq!(format_number(1234.5, "TotalMasIva"), "$1.235");
    }

    #[test]
    fn test_negative_currency_sign_after_symbol() {
        assert_eq!(format_number(-1_234_567.0, "Ganancia"), "$-1.234.567");
    }

    #[test]
    fn test_explicit_hint_overrides_inference() {
        // By name this would be currency; the explicit hint wins.
        assert_eq!(
            format_with_hint(1234.0, FormatHint::Quantity),
            "1.234"
        );
        assert_eq!(
            format_with_hint(45.6, FormatHint::Percentage),
            "45,6%"
        );
    }

    #[test]
    fn test_explicit_decimals() {
        assert_eq!(format_currency(1234.5, 2), "$1.234,50");
        assert_eq!(format_currency(1_000_000.0, 0), "$1.000.000");
        assert_eq!(format_percentage(45.0, 0), "45%");
        assert_eq!(format_percentage(0.456, 2), "0,46%");
        assert_eq!(format_integer(1234.0), "1.234");
        assert_eq!(format_currency(None::<f64>, 2), "-");
    }

    #[test]
    fn test_small_negative_keeps_sign() {
        assert_eq!(format_percentage(-0.5, 1), "-0,5%");
    }

    #[test]
    fn test_grouping_boundaries() {
        assert_eq!(format_integer(0.0), "0");
        assert_eq!(format_integer(999.0), "999");
        assert_eq!(format_integer(1000.0), "1.000");
        assert_eq!(format_integer(999_999.0), "999.999");
        assert_eq!(format_integer(1_000_000.0), "1.000.000");
    }

    #[test]
    fn test_idempotent() {
        let a = format_number(45.6, "Margen_Promedio_Pct");
        let b = format_number(45.6, "Margen_Promedio_Pct");
        assert_eq!(a, b);
    }

    proptest! {
        // Total over every f64 bit pattern, every hint.
        #[test]
        fn prop_format_never_panics(bits: u64, column in "\\PC*") {
            let value = f64::from_bits(bits);
            let rendered = format_number(value, &column);
            prop_assert!(!rendered.is_empty());
        }

        // Finite values never fall back to the placeholder.
        #[test]
        fn prop_finite_values_render(value in -1e12f64..1e12f64) {
            prop_assert_ne!(format_number(value, "TotalMasIva"), "-");
        }
    }
}
