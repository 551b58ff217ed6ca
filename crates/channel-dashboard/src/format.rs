//! Value formatters used by axis ticks and tooltips.

/// Maximum fraction digits kept by `format_number`.
const MAX_FRACTION_DIGITS: usize = 3;

/// Format with `,` thousands separators and at most three fraction digits,
/// trailing zeros trimmed: `1234567.5` -> `1,234,567.5`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + 4);
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }

    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Dollar-prefixed number: `1234` -> `$1,234`, `-50` -> `$-50`.
pub fn format_currency(value: f64) -> String {
    format!("${}", format_number(value))
}

/// Fixed-decimal percentage: `(12.345, 1)` -> `12.3%`.
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_grouping() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(26033.0), "26,033");
        assert_eq!(format_number(1924276.0), "1,924,276");
        assert_eq!(format_number(1234567.5), "1,234,567.5");
    }

    #[test]
    fn test_format_number_fraction_digits() {
        assert_eq!(format_number(3.5999999999999996), "3.6");
        assert_eq!(format_number(0.1234), "0.123");
        assert_eq!(format_number(2.0006), "2.001");
        assert_eq!(format_number(19.199999999999996), "19.2");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(-7.199999999999999), "-7.2");
        assert_eq!(format_number(-1500.0), "-1,500");
        // Rounds to zero, no sign
        assert_eq!(format_number(-0.0001), "0");
    }

    #[test]
    fn test_format_number_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "∞");
        assert_eq!(format_number(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(198589.0), "$198,589");
        assert_eq!(format_currency(-2.0), "$-2");
        assert_eq!(format_currency(f64::NAN), "$NaN");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(26.0, 0), "26%");
        assert_eq!(format_percent(3.5999999999999996, 1), "3.6%");
        assert_eq!(format_percent(-11.200000000000001, 1), "-11.2%");
    }
}
