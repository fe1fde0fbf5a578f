//! Calculation logic for the pricing engine.
//!
//! One module per pricing rule: monthly fees, late payment fees, debt
//! collection interest, late cancellation fees, payment amount validation,
//! the December blackout rule, and the dues statement that combines them.

mod debt_collection;
mod december_blackout;
mod dues_statement;
mod late_cancellation;
mod late_fee;
mod monthly_fee;
mod payment_validation;

pub use debt_collection::{
    DebtCollectionResult, calculate_debt_collection, is_debt_collection_eligible,
};
pub use december_blackout::{BLACKOUT_MESSAGE, BLACKOUT_MONTH, validate_december_blackout};
pub use dues_statement::build_dues_statement;
pub use late_cancellation::{LateCancellationResult, calculate_late_cancellation_fee};
pub use late_fee::{LateFeeResult, calculate_late_fee};
pub use monthly_fee::{MonthlyFeeResult, calculate_monthly_fee};
pub use payment_validation::validate_payment_amount;

/// Formats a day count for audit reasoning, e.g. "1 day" or "3 days".
fn format_days(days: impl Into<i128>) -> String {
    let days = days.into();
    if days.abs() == 1 {
        format!("{} day", days)
    } else {
        format!("{} days", days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_days_singular_and_plural() {
        assert_eq!(format_days(1u64), "1 day");
        assert_eq!(format_days(-1i64), "-1 day");
        assert_eq!(format_days(0u32), "0 days");
        assert_eq!(format_days(3u32), "3 days");
    }
}
