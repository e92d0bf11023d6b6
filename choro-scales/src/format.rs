const UNROUNDED_MAGNITUDE: f64 = 1e15;

/// Format a legend boundary value.
///
/// Values are rounded to at most two decimal places, with halves rounded up
/// toward positive infinity, then printed in their shortest exact decimal form:
/// `3.10` prints as `"3.1"` and `3.0` as `"3"`. Negative zero prints as `"0"`.
///
/// Rounding works on the binary value, so `1.005`, stored just below the
/// half, prints as `"1"`. Magnitudes from `1e15` up have no fractional digits
/// to round and print as they are.
pub fn format_number(value: f64) -> String {
    if value.abs() >= UNROUNDED_MAGNITUDE {
        return value.to_string();
    }
    let rounded = (value * 100.0 + 0.5).floor() / 100.0;
    // Adding zero turns -0.0 into 0.0
    (rounded + 0.0).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(3.0, "3")]
    #[case(3.1, "3.1")]
    #[case(3.10, "3.1")]
    #[case(3.14159, "3.14")]
    #[case(2.5, "2.5")]
    #[case(0.125, "0.13")]
    #[case(-0.005, "0")]
    #[case(-0.001, "0")]
    #[case(-0.015, "-0.01")]
    #[case(-2.75, "-2.75")]
    #[case(1234567.891, "1234567.89")]
    #[case(0.0, "0")]
    #[case(1.005, "1")]
    #[case(1e15, "1000000000000000")]
    fn test_format_number(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_number(value), expected);
    }

    #[rstest]
    #[case(1.7e307)]
    #[case(-1.7e307)]
    #[case(f64::MAX)]
    #[case(f64::MIN)]
    fn test_format_huge_values_stay_finite(#[case] value: f64) {
        let formatted = format_number(value);
        assert_eq!(formatted, value.to_string());
        assert_eq!(formatted.parse::<f64>().unwrap(), value);
    }
}
