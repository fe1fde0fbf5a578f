//! December blackout rule.
//!
//! The school does not take same-day payments in December; members must pay
//! in advance for that month.

use chrono::Datelike;

use crate::models::ValidationResult;

/// The calendar month (1-based) in which same-day payment is refused.
pub const BLACKOUT_MONTH: u32 = 12;

/// Message returned for a same-day payment during the blackout month.
pub const BLACKOUT_MESSAGE: &str =
    "Same-day payments are not accepted in December: advance payment required";

/// Checks whether same-day payment is allowed on `date`.
///
/// `date` is the caller's local calendar date. Any [`Datelike`] value works,
/// so callers may pass a `NaiveDate` or a zoned `DateTime`; only its month is
/// read.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use dojo_pricing::calculation::validate_december_blackout;
///
/// let december = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();
/// let november = NaiveDate::from_ymd_opt(2024, 11, 15).unwrap();
///
/// assert!(!validate_december_blackout(&december).is_valid());
/// assert!(validate_december_blackout(&november).is_valid());
/// ```
pub fn validate_december_blackout<D: Datelike>(date: &D) -> ValidationResult {
    if date.month() == BLACKOUT_MONTH {
        ValidationResult::invalid(BLACKOUT_MESSAGE)
    } else {
        ValidationResult::Valid
    }
}
