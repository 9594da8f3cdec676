//! Display text <-> `f64` conversion
//!
//! The display only ever holds text produced by typing digits and a single
//! point, or by [`format_number`]. [`parse_number`] accepts exactly that
//! grammar, so it never fails on a reachable display.

use crate::core::{CalcError, CalcResult};

/// Display text for positive infinity
pub const INFINITY: &str = "Infinity";
/// Display text for negative infinity
pub const NEG_INFINITY: &str = "-Infinity";
/// Display text for NaN
pub const NAN: &str = "NaN";

/// Magnitudes in `[MIN_PLAIN, MAX_PLAIN)` are written positionally,
/// everything else in exponent form.
const MIN_PLAIN: f64 = 1e-7;
const MAX_PLAIN: f64 = 1e21;

/// Parses display text into a number.
///
/// Accepts an optional leading `-`, digits with at most one `.` (a trailing
/// point is allowed), an optional exponent, and the non-finite forms
/// `Infinity`, `-Infinity` and `NaN`.
pub fn parse_number(text: &str) -> CalcResult<f64> {
    match text {
        INFINITY => return Ok(f64::INFINITY),
        NEG_INFINITY => return Ok(f64::NEG_INFINITY),
        NAN => return Ok(f64::NAN),
        _ => {}
    }

    if !is_decimal_literal(text) {
        return Err(CalcError::InvalidNumber(text.to_string()));
    }

    text.parse::<f64>()
        .map_err(|_| CalcError::InvalidNumber(text.to_string()))
}

/// Formats a number as the shortest text that parses back to it.
///
/// No fixed-decimal padding: `2.5` stays `"2.5"` and `20.0` is `"20"`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return NAN.to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            INFINITY
        } else {
            NEG_INFINITY
        };
        return text.to_string();
    }
    // -0 shows as 0
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (MIN_PLAIN..MAX_PLAIN).contains(&magnitude) {
        format!("{value}")
    } else {
        format!("{value:e}")
    }
}

/// Counts the digits typed into a display literal, ignoring sign and point.
///
/// The `0` placed in front of a leading point (`"0.5"`) is not counted.
#[must_use]
pub fn digit_count(text: &str) -> usize {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let typed = unsigned.strip_prefix("0.").unwrap_or(unsigned);
    typed.chars().filter(char::is_ascii_digit).count()
}

/// Whether `text` is a number being typed: digits with at most one `.`,
/// no sign and no exponent.
#[must_use]
pub fn is_typed_literal(text: &str) -> bool {
    let (integer, fraction) = text.split_once('.').unwrap_or((text, ""));
    !integer.is_empty() && all_digits(integer) && all_digits(fraction)
}

fn is_decimal_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let (mantissa, exponent) = match unsigned.split_once(|c: char| c == 'e' || c == 'E') {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };

    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let mantissa_ok = !integer.is_empty() && all_digits(integer) && all_digits(fraction);

    let exponent_ok = exponent.map_or(true, |exp| {
        let digits = exp
            .strip_prefix('-')
            .or_else(|| exp.strip_prefix('+'))
            .unwrap_or(exp);
        !digits.is_empty() && all_digits(digits)
    });

    mantissa_ok && exponent_ok
}

fn all_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}
