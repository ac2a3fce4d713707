//! Ratio computation.

use tracing::debug;

use super::types::RatioSet;
use crate::input::FinancialStatement;

/// Denominators with a smaller magnitude are replaced by this value.
pub const SAFE_DIVISION_EPSILON: f64 = 1e-9;

/// Divides `numerator` by `denominator`, substituting [`SAFE_DIVISION_EPSILON`]
/// when `|denominator| <= SAFE_DIVISION_EPSILON`.
///
/// The substitute is always positive, whatever the sign of the original
/// denominator. The quotient is saturated to `±f64::MAX`, so a non-NaN
/// numerator always yields a finite result.
#[must_use]
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    let denominator = if is_degenerate(denominator) {
        SAFE_DIVISION_EPSILON
    } else {
        denominator
    };
    (numerator / denominator).clamp(-f64::MAX, f64::MAX)
}

fn is_degenerate(denominator: f64) -> bool {
    denominator.abs() <= SAFE_DIVISION_EPSILON
}

/// Computes the ratio set for a statement.
///
/// Total over its input: a zero revenue or zero equity produces a
/// large-magnitude value, never an error. Every ratio is finite, including
/// when intermediate sums such as `ebit` overflow. Negative equity is passed through,
/// yielding a negative `debt_to_equity`.
#[must_use]
pub fn compute_ratios(statement: &FinancialStatement) -> RatioSet {
    let gross_profit = statement.revenue - statement.cogs;
    let ebit = gross_profit - statement.operating_expenses;

    for (label, denominator) in [
        ("revenue", statement.revenue),
        ("liabilities_current", statement.liabilities_current),
        ("assets_total", statement.assets_total),
        ("equity", statement.equity),
    ] {
        if is_degenerate(denominator) {
            debug!(denominator = label, "Degenerate denominator, substituting epsilon");
        }
    }

    RatioSet {
        gross_margin: safe_div(gross_profit, statement.revenue),
        ebit_margin: safe_div(ebit, statement.revenue),
        current_ratio: safe_div(statement.assets_current, statement.liabilities_current),
        debt_to_assets: safe_div(statement.liabilities_total, statement.assets_total),
        debt_to_equity: safe_div(statement.liabilities_total, statement.equity),
        opex_ratio: safe_div(statement.operating_expenses, statement.revenue),
    }
}
