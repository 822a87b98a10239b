// ============================================================================
// Numeric Module
// Panic-free arithmetic helpers for aggregate metrics
// ============================================================================
//
// This module provides:
// - safe_divide: division that absorbs zero/invalid denominators
// - profit_margin_pct: margin percentage with the clamp-at-zero convention
// - round_to: half-away-from-zero rounding for published metrics
//
// Design principles:
// - Every function is total: no Result, no panic; degenerate input maps to
//   a caller-supplied or conventional default

mod safe_math;

pub use safe_math::{profit_margin_pct, round_to, safe_divide};
