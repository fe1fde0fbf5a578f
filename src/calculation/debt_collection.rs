//! Debt collection interest.
//!
//! Whether a debt is old enough for collection is decided by the caller with
//! [`is_debt_collection_eligible`]; [`calculate_debt_collection`] only prices
//! the debt.

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, FinancialPolicy, MinorUnits, format_major_units};

/// The result of adding collection interest to a debt.
#[derive(Debug, Clone)]
pub struct DebtCollectionResult {
    /// The interest added, rounded down to whole minor units.
    pub interest: MinorUnits,
    /// The debt plus interest.
    pub total: MinorUnits,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns true once a debt is `days_overdue` days or more past the
/// collection threshold.
///
/// # Examples
///
/// ```
/// use dojo_pricing::calculation::is_debt_collection_eligible;
/// use dojo_pricing::config::PricingConfig;
///
/// let config = PricingConfig::builtin();
/// assert!(!is_debt_collection_eligible(89, config.policy()));
/// assert!(is_debt_collection_eligible(90, config.policy()));
/// ```
pub fn is_debt_collection_eligible(days_overdue: u32, policy: &FinancialPolicy) -> bool {
    days_overdue >= policy.debt_collection_threshold_days
}

/// Adds the collection interest to `base_amount`.
///
/// The total is `base + floor(base x interest_percent / 100)`. The product is
/// taken in 128-bit arithmetic, so only a total above `u64::MAX` can fail.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] if the total does not fit in
/// `u64`.
///
/// # Examples
///
/// ```
/// use dojo_pricing::calculation::calculate_debt_collection;
/// use dojo_pricing::config::PricingConfig;
///
/// let config = PricingConfig::builtin();
/// let result = calculate_debt_collection(100000, config.policy(), 1).unwrap();
/// assert_eq!(result.interest, 35000);
/// assert_eq!(result.total, 135000);
/// ```
pub fn calculate_debt_collection(
    base_amount: MinorUnits,
    policy: &FinancialPolicy,
    step_number: u32,
) -> EngineResult<DebtCollectionResult> {
    let percent = policy.debt_collection_interest_percent;
    let interest = u128::from(base_amount) * u128::from(percent) / 100;

    let overflow = || EngineError::CalculationError {
        message: format!("collection total for {} overflows", base_amount),
    };
    let interest = MinorUnits::try_from(interest).map_err(|_| overflow())?;
    let total = base_amount.checked_add(interest).ok_or_else(overflow)?;

    let symbol = &policy.currency_symbol;
    let audit_step = AuditStep {
        step_number,
        rule_id: "debt_collection_interest".to_string(),
        rule_name: "Debt Collection Interest".to_string(),
        policy_ref: "policy.debt_collection_interest_percent".to_string(),
        input: serde_json::json!({
            "base_amount": base_amount,
            "interest_percent": percent
        }),
        output: serde_json::json!({
            "interest": interest,
            "total": total
        }),
        reasoning: format!(
            "{} + {}% interest ({}) = {}",
            format_major_units(base_amount, symbol),
            percent,
            format_major_units(interest, symbol),
            format_major_units(total, symbol)
        ),
    };

    Ok(DebtCollectionResult {
        interest,
        total,
        audit_step,
    })
}
