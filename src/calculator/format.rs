//! Number formatting for calculation results.

/// Format a value as the shortest decimal that round-trips, without exponent.
///
/// `14.0` becomes `14`, `0.1` stays `0.1`. Non-finite values are written
/// `+Inf`, `-Inf` and `NaN`.
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() { "+Inf" } else { "-Inf" }.to_string()
    } else {
        format!("{}", value)
    }
}

/// Format a value for display with thousand separators on the integer part.
pub fn format_display(value: f64) -> String {
    let plain = format_result(value);
    if !value.is_finite() {
        return plain;
    }

    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(dot_pos) => unsigned.split_at(dot_pos),
        None => (unsigned, ""),
    };

    format!("{}{}{}", sign, format_with_separators(int_part), frac_part)
}

/// Insert a comma every three digits, counting from the right.
fn format_with_separators(digits: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_formatting() {
        assert_eq!(format_result(14.0), "14");
        assert_eq!(format_result(2.5), "2.5");
        assert_eq!(format_result(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_result(1e21), "1000000000000000000000");
        assert_eq!(format_result(-3.0), "-3");
    }

    #[test]
    fn test_thousand_separators() {
        assert_eq!(format_display(1_000_000.0), "1,000,000");
        assert_eq!(format_display(999.0), "999");
        assert_eq!(format_display(-1234.5), "-1,234.5");
        assert_eq!(format_display(0.125), "0.125");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(format_result(f64::INFINITY), "+Inf");
        assert_eq!(format_result(f64::NEG_INFINITY), "-Inf");
        assert_eq!(format_result(f64::NAN), "NaN");
        assert_eq!(format_display(f64::INFINITY), "+Inf");
        assert_eq!(format_display(f64::NEG_INFINITY), "-Inf");
    }
}
