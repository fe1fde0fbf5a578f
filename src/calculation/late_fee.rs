//! Late payment fee calculation.

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, FinancialPolicy, MinorUnits, format_major_units};

use super::format_days;

/// The result of calculating a late payment fee.
#[derive(Debug, Clone)]
pub struct LateFeeResult {
    /// The penalty in minor units.
    pub fee: MinorUnits,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the penalty for paying `days_late` days after the due date.
///
/// The fee is `late_payment_fee_per_day x days_late`, so a payment on time
/// costs nothing and the fee never decreases as the delay grows.
///
/// # Errors
///
/// - [`EngineError::InvalidArgument`] if `days_late` is negative. A negative
///   delay means the caller computed the due date wrong; it is not treated
///   as zero.
/// - [`EngineError::CalculationError`] if the fee does not fit in `u64`.
///
/// # Examples
///
/// ```
/// use dojo_pricing::calculation::calculate_late_fee;
/// use dojo_pricing::config::PricingConfig;
///
/// let config = PricingConfig::builtin();
/// let result = calculate_late_fee(3, config.policy(), 1).unwrap();
/// assert_eq!(result.fee, 15000);
///
/// assert!(calculate_late_fee(-1, config.policy(), 1).is_err());
/// ```
pub fn calculate_late_fee(
    days_late: i64,
    policy: &FinancialPolicy,
    step_number: u32,
) -> EngineResult<LateFeeResult> {
    let days = u64::try_from(days_late).map_err(|_| EngineError::InvalidArgument {
        argument: "days_late".to_string(),
        message: format!("must not be negative (got {})", days_late),
    })?;

    let fee = policy
        .late_payment_fee_per_day
        .checked_mul(days)
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("late fee for {} days overflows", days),
        })?;

    let symbol = &policy.currency_symbol;
    let reasoning = if days == 0 {
        "Paid on time - no late fee".to_string()
    } else {
        format!(
            "{} x {}/day = {}",
            format_days(days),
            format_major_units(policy.late_payment_fee_per_day, symbol),
            format_major_units(fee, symbol)
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "late_payment_fee".to_string(),
        rule_name: "Late Payment Fee".to_string(),
        policy_ref: "policy.late_payment_fee_per_day".to_string(),
        input: serde_json::json!({
            "days_late": days,
            "fee_per_day": policy.late_payment_fee_per_day
        }),
        output: serde_json::json!({
            "late_fee": fee
        }),
        reasoning,
    };

    Ok(LateFeeResult { fee, audit_step })
}
