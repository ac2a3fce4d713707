//! Display formatting for amounts and ratios.
//!
//! Rounding is half away from zero, applied to the shortest decimal
//! representation of the `f64` (`0.125 -> "0.13"`, `1.005 -> "1.01"`).
//! A value that rounds to zero is printed without a minus sign. Values outside
//! the `Decimal` range fall back to plain float formatting, keeping the
//! grouping rules of each format.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a fraction as a percentage with one decimal place.
///
/// `0.1234 -> "12.3%"`, `-0.005 -> "-0.5%"`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    let digits = to_decimal(value)
        .and_then(|d| d.checked_mul(Decimal::ONE_HUNDRED))
        .map_or_else(|| format!("{:.1}", scale_percent(value)), |d| fixed(d, 1));
    format!("{digits}%")
}

/// `value * 100`, saturated so a finite fraction never prints as `inf%`.
fn scale_percent(value: f64) -> f64 {
    let scaled = value * 100.0;
    if value.is_finite() {
        scaled.clamp(-f64::MAX, f64::MAX)
    } else {
        scaled
    }
}

/// Formats an amount in Brazilian reais.
///
/// Formats with `,` thousands and `.` decimal grouping first, then swaps the two
/// separators: `1234.5 -> "R$ 1.234,50"`, `0 -> "R$ 0,00"`.
#[must_use]
pub fn format_currency(value: f64) -> String {
    let digits = to_decimal(value).map_or_else(|| format!("{value:.2}"), |d| fixed(d, 2));
    let grouped = group_thousands(&digits);
    let swapped: String = grouped
        .chars()
        .map(|c| match c {
            ',' => '.',
            '.' => ',',
            other => other,
        })
        .collect();
    format!("R$ {swapped}")
}

/// Formats a plain ratio with two decimal places and no grouping.
#[must_use]
pub fn format_ratio(value: f64) -> String {
    to_decimal(value).map_or_else(|| format!("{value:.2}"), |d| fixed(d, 2))
}

/// Parses the shortest round-trip representation of `value`.
fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    value.to_string().parse().ok()
}

fn fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    format!("{rounded:.prec$}", prec = dp as usize)
}

/// Inserts `,` every three digits of the integer part of a fixed-point string.
fn group_thousands(number: &str) -> String {
    let (sign, unsigned) = number
        .strip_prefix('-')
        .map_or(("", number), |rest| ("-", rest));
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}
