//! Decimal rendering of `f64` values
//!
//! Rounding works on the exact decimal expansion of the binary value, and
//! exact halfway cases round away from zero. This is the rounding browsers use
//! for `toFixed`/`toPrecision`, which differs from the ties-to-even rule of
//! Rust's `{:.N}` formatting.

/// Enough fractional digits to hold the exact expansion of any `f64`
const EXACT_DIGITS: usize = 1100;

/// Fixed-point text with exactly `precision` fractional digits
///
/// Values below zero keep their sign even when they round to zero
/// (`-0.0001` at 2 places is `-0.00`).
pub fn format_fixed(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return number_text(value);
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits = to_digits(int_part);
    let kept = frac_part.len().min(precision);
    digits.extend(to_digits(&frac_part[..kept]));
    digits.resize(int_part.len() + precision, 0);

    if frac_part.as_bytes().get(precision).is_some_and(|b| *b >= b'5') {
        increment(&mut digits);
    }

    let int_len = digits.len() - precision;
    let mut text = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        text.push('-');
    }
    text.extend(digits[..int_len].iter().map(|d| char::from(b'0' + d)));
    if precision > 0 {
        text.push('.');
        text.extend(digits[int_len..].iter().map(|d| char::from(b'0' + d)));
    }
    text
}

/// Round to `significant` significant digits
pub fn round_significant(value: f64, significant: usize) -> f64 {
    if !value.is_finite() || value == 0.0 || significant == 0 {
        return value;
    }

    let exact = format!("{:.*e}", EXACT_DIGITS, value.abs());
    let Some((mantissa, exponent)) = exact.split_once('e') else {
        return value;
    };
    let Ok(mut exponent) = exponent.parse::<i32>() else {
        return value;
    };

    let all = to_digits(&mantissa.replace('.', ""));
    let round_up = all.get(significant).is_some_and(|d| *d >= 5);
    let mut digits: Vec<u8> = all.into_iter().take(significant).collect();
    digits.resize(significant, 0);

    if round_up && increment(&mut digits) {
        digits.truncate(significant);
        exponent += 1;
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let head = char::from(b'0' + digits[0]);
    let tail: String = digits[1..].iter().map(|d| char::from(b'0' + d)).collect();
    format!("{sign}{head}.{tail}0e{exponent}")
        .parse()
        .unwrap_or(value)
}

/// Shortest text that reads back as `value`, laid out as browsers print numbers
///
/// Plain decimal notation for magnitudes in `[1e-6, 1e21)`, exponent notation
/// (`1e-7`, `1.5e+21`) outside it, and `Infinity`/`NaN` for non-finite values.
pub fn number_text(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // `{:e}` gives the shortest round-tripping digits
    let shortest = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = shortest.split_once('e') else {
        return shortest;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return shortest;
    };
    let digits = mantissa.replace('.', "");
    let k = digits.len() as i32;
    let n = exponent + 1;
    let sign = if value < 0.0 { "-" } else { "" };

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        format!("{}.{}", &digits[..n as usize], &digits[n as usize..])
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let exp_sign = if n - 1 < 0 { '-' } else { '+' };
        let exp = (n - 1).abs();
        if k == 1 {
            format!("{}e{}{}", digits, exp_sign, exp)
        } else {
            format!("{}.{}e{}{}", &digits[..1], &digits[1..], exp_sign, exp)
        }
    };
    format!("{sign}{body}")
}

fn to_digits(text: &str) -> Vec<u8> {
    text.bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

/// Add one in the last place. Returns `true` when the carry added a new
/// leading digit.
fn increment(digits: &mut Vec<u8>) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return false;
        }
    }
    digits.insert(0, 1);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fixed_plain() {
        assert_eq!(format_fixed(4.126, 4), "4.1260");
        assert_eq!(format_fixed(4.04348, 4), "4.0435");
        assert_eq!(format_fixed(0.0, 4), "0.0000");
        assert_eq!(format_fixed(12.5, 0), "13");
    }

    #[test]
    fn test_format_fixed_exact_tie_rounds_up() {
        // 1.03125 is exact in binary, so this is a true halfway case
        assert_eq!(format_fixed(1.03125, 4), "1.0313");
        assert_eq!(format_fixed(0.125, 2), "0.13");
        assert_eq!(format_fixed(-0.125, 2), "-0.13");
    }

    #[test]
    fn test_format_fixed_carries() {
        assert_eq!(format_fixed(0.49, 8), "0.49000000");
        assert_eq!(format_fixed(99.5, 0), "100");
    }

    #[test]
    fn test_format_fixed_binary_value_decides() {
        // 1.005 is stored just below 1.005
        assert_eq!(format_fixed(1.005, 2), "1.00");
    }

    #[test]
    fn test_format_fixed_negative_keeps_sign() {
        assert_eq!(format_fixed(-0.0001, 2), "-0.00");
        assert_eq!(format_fixed(-4.5, 1), "-4.5");
    }

    #[test]
    fn test_round_significant_ties_away_from_zero() {
        assert_eq!(round_significant(123456789012344.5, 15), 123456789012345.0);
        assert_eq!(round_significant(1000000000000005.0, 15), 1000000000000010.0);
        assert_eq!(round_significant(-1000000000000005.0, 15), -1000000000000010.0);
    }

    #[test]
    fn test_round_significant_removes_noise() {
        assert_eq!(round_significant(0.1 + 0.2, 15), 0.3);
        assert_eq!(round_significant(999999999999999.9, 15), 1e15);
    }

    #[test]
    fn test_number_text() {
        assert_eq!(number_text(0.3), "0.3");
        assert_eq!(number_text(5.0), "5");
        assert_eq!(number_text(-1.5), "-1.5");
        assert_eq!(number_text(1e-7), "1e-7");
        assert_eq!(number_text(0.000001), "0.000001");
        assert_eq!(number_text(1.5e-7), "1.5e-7");
        assert_eq!(number_text(1e21), "1e+21");
        assert_eq!(number_text(123e18), "123000000000000000000");
        assert_eq!(number_text(f64::INFINITY), "Infinity");
        assert_eq!(number_text(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(number_text(f64::NAN), "NaN");
        assert_eq!(number_text(0.0), "0");
    }
}
