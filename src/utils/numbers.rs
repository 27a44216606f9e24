//! Lenient number handling for values read from and written to form
//! controls.
//!
//! Form values are free text. Integers and prices are taken from the
//! longest numeric prefix (`"12 cameras"` reads as `12`) and anything
//! without one reads as absent.

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use std::sync::LazyLock;

static INT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("valid integer pattern"));

static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").expect("valid float pattern")
});

/// Leading decimal integer of `input`, if any.
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    INT_PREFIX
        .captures(input)
        .and_then(|caps| caps[1].parse::<i64>().ok())
}

/// Leading decimal number of `input`, if any.
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    FLOAT_PREFIX
        .captures(input)
        .and_then(|caps| caps[1].parse::<f64>().ok())
}

/// Optional id or count for a quote: missing, unparseable and zero all map
/// to `None`.
pub fn optional_count(input: &str) -> Option<i64> {
    parse_int_prefix(input).filter(|value| *value != 0)
}

/// Exactly two decimals, as shown in the price displays.
///
/// Rounds the exact binary value half away from zero: `0.125` shows as
/// `0.13` while `1.005` (stored just below) stays `1.00`.
pub fn format_amount(value: f64) -> String {
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.2}", rounded)
        }
        None => format!("{:.2}", value),
    }
}

/// Shortest rendering of a price, without a trailing `.0` for whole values.
pub fn format_price_label(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
