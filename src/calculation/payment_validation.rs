//! Payment amount validation.
//!
//! Checks a proposed payment against the package's session price or
//! monthly fee before the booking flow submits it.

use crate::models::{
    FinancialPolicy, MinorUnits, PaymentType, TrainingPackage, ValidationResult,
    format_major_units,
};

/// Checks that `amount` covers the minimum for the package and payment type.
///
/// - [`PaymentType::Session`]: valid when `amount` is at least the session
///   price.
/// - [`PaymentType::Monthly`]: valid when `amount` is at least the monthly
///   fee. The message also states the minimum weekly session count. A
///   package whose monthly fee does not fit in [`MinorUnits`] accepts no
///   monthly payment.
///
/// An insufficient amount produces [`ValidationResult::Invalid`] with a
/// message quoting the minimum in major units.
///
/// # Examples
///
/// ```
/// use dojo_pricing::calculation::validate_payment_amount;
/// use dojo_pricing::config::PricingConfig;
/// use dojo_pricing::models::{PackageKey, PaymentType};
///
/// let config = PricingConfig::builtin();
/// let package = config.catalog().get(PackageKey::QiGong);
///
/// let result = validate_payment_amount(
///     5000,
///     PaymentType::Session,
///     package,
///     config.policy(),
/// );
/// assert!(!result.is_valid());
/// assert!(result.message().unwrap().contains("R60"));
/// ```
pub fn validate_payment_amount(
    amount: MinorUnits,
    payment_type: PaymentType,
    package: &TrainingPackage,
    policy: &FinancialPolicy,
) -> ValidationResult {
    let symbol = &policy.currency_symbol;

    match payment_type {
        PaymentType::Session => {
            if amount >= package.price_per_session {
                ValidationResult::Valid
            } else {
                ValidationResult::invalid(format!(
                    "Minimum payment for {} is {} per session",
                    package.name,
                    format_major_units(package.price_per_session, symbol)
                ))
            }
        }
        PaymentType::Monthly => {
            let Some(monthly_fee) = package.monthly_fee() else {
                return ValidationResult::invalid(format!(
                    "Monthly payments are not available for {}",
                    package.name
                ));
            };
            if amount >= monthly_fee {
                ValidationResult::Valid
            } else {
                ValidationResult::invalid(format!(
                    "Minimum monthly payment for {} is {} ({} sessions per week minimum)",
                    package.name,
                    format_major_units(monthly_fee, symbol),
                    package.min_sessions_per_week
                ))
            }
        }
    }
}
