/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_INT: f64 = 9_007_199_254_740_991.0;

/// Formats a number the way scripts print it.
///
/// Integral values within the safe integer range print without a fractional
/// part, and negative zero keeps its sign. Everything else, including
/// infinities and NaN, uses Rust's shortest round-trip representation.
///
/// ## Example
/// ```
/// use kestrel::util::num::format_number;
///
/// assert_eq!(format_number(13.0), "13");
/// assert_eq!(format_number(-0.5), "-0.5");
/// assert_eq!(format_number(-0.0), "-0");
/// assert_eq!(format_number(f64::INFINITY), "inf");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INT && !is_negative_zero(value) {
        // Exact: the value is integral and below 2^53.
        #[allow(clippy::cast_possible_truncation)]
        let int = value as i64;
        return int.to_string();
    }
    value.to_string()
}

fn is_negative_zero(value: f64) -> bool {
    value == 0.0 && value.is_sign_negative()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn integral_values_drop_the_fraction() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-12.0), "-12");
        assert_eq!(format_number(MAX_SAFE_INT), "9007199254740991");
    }

    #[test]
    fn negative_zero_keeps_its_sign() {
        assert_eq!(format_number(-0.0), "-0");
        assert_eq!(format_number(0.0 * -1.0), "-0");
    }

    #[test]
    fn large_and_special_values_use_the_float_form() {
        assert_eq!(format_number(1.0e16), "10000000000000000");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }
}
