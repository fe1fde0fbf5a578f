//! Monetary amounts in minor currency units.
//!
//! Every amount in the engine is an integer count of cents. Conversion to
//! major units happens only when a message is rendered for a person to read.

use rust_decimal::Decimal;

/// An amount of money in the currency's minor unit (cents).
pub type MinorUnits = u64;

/// Renders a minor-unit amount in major units, prefixed by `symbol`.
///
/// The amount is divided by 100 and trailing fractional zeros are dropped,
/// so whole amounts print without a decimal point.
///
/// # Examples
///
/// ```
/// use dojo_pricing::models::format_major_units;
///
/// assert_eq!(format_major_units(6000, "R"), "R60");
/// assert_eq!(format_major_units(6050, "R"), "R60.5");
/// assert_eq!(format_major_units(6005, "R"), "R60.05");
/// ```
pub fn format_major_units(amount: MinorUnits, symbol: &str) -> String {
    let major = Decimal::from_i128_with_scale(i128::from(amount), 2).normalize();
    format!("{}{}", symbol, major)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_amount_has_no_fraction() {
        assert_eq!(format_major_units(48000, "R"), "R480");
    }

    #[test]
    fn test_single_cent_keeps_both_digits() {
        assert_eq!(format_major_units(1, "R"), "R0.01");
    }

    #[test]
    fn test_zero_amount() {
        assert_eq!(format_major_units(0, "R"), "R0");
    }

    #[test]
    fn test_trailing_zero_is_trimmed() {
        assert_eq!(format_major_units(12340, "$"), "$123.4");
    }

    #[test]
    fn test_empty_symbol() {
        assert_eq!(format_major_units(250, ""), "2.5");
    }

    #[test]
    fn test_largest_amount_is_exact() {
        assert_eq!(
            format_major_units(u64::MAX, "R"),
            "R184467440737095516.15"
        );
    }
}
