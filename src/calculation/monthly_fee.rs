//! Monthly fee calculation.
//!
//! A month is billed as four weeks of the package's minimum weekly sessions.

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, MinorUnits, PackageKey, TrainingPackage, WEEKS_PER_MONTH, format_major_units,
};

/// The result of calculating a package's monthly fee.
#[derive(Debug, Clone)]
pub struct MonthlyFeeResult {
    /// The monthly fee in minor units.
    pub fee: MinorUnits,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the minimum a member pays per month for a package.
///
/// The fee is `price_per_session x min_sessions_per_week x 4`, computed on
/// whole minor units (see [`TrainingPackage::monthly_fee`]).
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] if the fee does not fit in
/// [`MinorUnits`].
///
/// # Examples
///
/// ```
/// use dojo_pricing::calculation::calculate_monthly_fee;
/// use dojo_pricing::models::{PackageKey, TrainingPackage};
///
/// let package = TrainingPackage {
///     name: "Qi Gong".to_string(),
///     price_per_session: 6000,
///     schedule: "Tuesday & Thursday".to_string(),
///     min_sessions_per_week: 2,
///     is_outdoor: false,
///     location: None,
/// };
///
/// let result = calculate_monthly_fee(PackageKey::QiGong, &package, "R", 1).unwrap();
/// assert_eq!(result.fee, 48000);
/// ```
pub fn calculate_monthly_fee(
    key: PackageKey,
    package: &TrainingPackage,
    currency_symbol: &str,
    step_number: u32,
) -> EngineResult<MonthlyFeeResult> {
    let fee = package
        .monthly_fee()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("monthly fee for {} overflows", key),
        })?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "monthly_fee".to_string(),
        rule_name: "Monthly Fee".to_string(),
        policy_ref: format!("packages.{}", key),
        input: serde_json::json!({
            "package": key,
            "price_per_session": package.price_per_session,
            "min_sessions_per_week": package.min_sessions_per_week,
            "weeks_per_month": WEEKS_PER_MONTH
        }),
        output: serde_json::json!({
            "monthly_fee": fee
        }),
        reasoning: format!(
            "{} x {} sessions/week x {} weeks = {}",
            format_major_units(package.price_per_session, currency_symbol),
            package.min_sessions_per_week,
            WEEKS_PER_MONTH,
            format_major_units(fee, currency_symbol)
        ),
    };

    Ok(MonthlyFeeResult { fee, audit_step })
}
