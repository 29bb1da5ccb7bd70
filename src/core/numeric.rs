//! Lenient numeric parsing for form-style text input
//!
//! Form fields hand us whatever the user typed. Numbers are taken from the
//! longest valid numeric prefix after leading whitespace, and anything without
//! such a prefix has no value. Callers decide what "no value" means; the
//! weighing calculator treats it as zero.

/// Parse the longest floating-point prefix of `text`
///
/// Accepts an optional sign, digits with an optional fraction, an optional
/// exponent, or `Infinity`. Returns `None` if no prefix is a number.
pub fn parse_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    if s[i..].starts_with("Infinity") {
        let sign = if bytes.first() == Some(&b'-') { -1.0 } else { 1.0 };
        return Some(sign * f64::INFINITY);
    }

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        frac_digits = count_digits(&bytes[i + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(&bytes[j..]);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    s[..i].parse::<f64>().ok()
}

/// Parse the longest base-10 integer prefix of `text`
///
/// `"2.9"` gives 2 and `"1e3"` gives 1. Values beyond the `i64` range saturate.
pub fn parse_int(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let (negative, start) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    let digits = count_digits(&bytes[start..]);
    if digits == 0 {
        return None;
    }

    let magnitude = bytes[start..start + digits]
        .iter()
        .fold(0i64, |acc, b| {
            acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
        });

    Some(if negative { -magnitude } else { magnitude })
}

/// Parse a float, treating missing or NaN values as zero
pub fn float_or_zero(text: &str) -> f64 {
    match parse_float(text) {
        Some(v) if !v.is_nan() => v,
        _ => 0.0,
    }
}

/// Parse an integer, treating a missing value as zero
pub fn int_or_zero(text: &str) -> i64 {
    parse_int(text).unwrap_or(0)
}

/// Whether a field counts as empty (whitespace only)
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
