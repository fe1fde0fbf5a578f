//! Dues statement assembly.
//!
//! Combines the package minimum, the late payment fee and, for debts past
//! the collection threshold, collection interest into the figures shown on a
//! member's dues page.

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditStep, DuesStatement, FinancialPolicy, MinorUnits, PackageKey, PaymentType,
    TrainingPackage, format_major_units,
};

use super::debt_collection::{calculate_debt_collection, is_debt_collection_eligible};
use super::format_days;
use super::late_fee::calculate_late_fee;
use super::monthly_fee::calculate_monthly_fee;

/// Builds the dues statement for a member's outstanding balance.
///
/// 1. The minimum due is the session price or the monthly fee.
/// 2. The late fee is charged for `days_overdue`.
/// 3. Once the debt reaches the collection threshold, interest is added to
///    the outstanding balance plus the late fee.
///
/// # Errors
///
/// Returns [`EngineError::CalculationError`] if the monthly fee or any total
/// overflows.
///
/// # Examples
///
/// ```
/// use dojo_pricing::calculation::build_dues_statement;
/// use dojo_pricing::config::PricingConfig;
/// use dojo_pricing::models::{PackageKey, PaymentType};
///
/// let config = PricingConfig::builtin();
/// let statement = build_dues_statement(
///     PackageKey::QiGong,
///     config.catalog().get(PackageKey::QiGong),
///     PaymentType::Monthly,
///     48000,
///     2,
///     config.policy(),
/// )
/// .unwrap();
///
/// assert_eq!(statement.minimum_due, 48000);
/// assert_eq!(statement.late_fee, 10000);
/// assert_eq!(statement.total_due, 58000);
/// assert!(!statement.sent_to_collection);
/// ```
pub fn build_dues_statement(
    key: PackageKey,
    package: &TrainingPackage,
    payment_type: PaymentType,
    outstanding: MinorUnits,
    days_overdue: u32,
    policy: &FinancialPolicy,
) -> EngineResult<DuesStatement> {
    let symbol = &policy.currency_symbol;
    let mut steps: Vec<AuditStep> = Vec::new();
    let mut step_number: u32 = 1;

    let minimum_due = match payment_type {
        PaymentType::Monthly => {
            let result = calculate_monthly_fee(key, package, symbol, step_number)?;
            steps.push(result.audit_step);
            result.fee
        }
        PaymentType::Session => {
            steps.push(AuditStep {
                step_number,
                rule_id: "session_price".to_string(),
                rule_name: "Session Price".to_string(),
                policy_ref: format!("packages.{}.price_per_session", key),
                input: serde_json::json!({ "package": key }),
                output: serde_json::json!({ "price_per_session": package.price_per_session }),
                reasoning: format!(
                    "{} costs {} per session",
                    package.name,
                    format_major_units(package.price_per_session, symbol)
                ),
            });
            package.price_per_session
        }
    };
    step_number += 1;

    let late_fee = calculate_late_fee(i64::from(days_overdue), policy, step_number)?;
    steps.push(late_fee.audit_step);
    step_number += 1;

    let subtotal = outstanding
        .checked_add(late_fee.fee)
        .ok_or_else(|| EngineError::CalculationError {
            message: "outstanding balance plus late fee overflows".to_string(),
        })?;

    let sent_to_collection = is_debt_collection_eligible(days_overdue, policy);
    steps.push(AuditStep {
        step_number,
        rule_id: "debt_collection_threshold".to_string(),
        rule_name: "Debt Collection Threshold".to_string(),
        policy_ref: "policy.debt_collection_threshold_days".to_string(),
        input: serde_json::json!({
            "days_overdue": days_overdue,
            "threshold_days": policy.debt_collection_threshold_days
        }),
        output: serde_json::json!({ "eligible": sent_to_collection }),
        reasoning: if sent_to_collection {
            format!(
                "{} overdue reaches the {}-day threshold - debt goes to collection",
                format_days(days_overdue),
                policy.debt_collection_threshold_days
            )
        } else {
            format!(
                "{} overdue is below the {}-day threshold",
                format_days(days_overdue),
                policy.debt_collection_threshold_days
            )
        },
    });
    step_number += 1;

    let (collection_interest, total_due) = if sent_to_collection {
        let collection = calculate_debt_collection(subtotal, policy, step_number)?;
        steps.push(collection.audit_step);
        (collection.interest, collection.total)
    } else {
        (0, subtotal)
    };

    Ok(DuesStatement {
        package: key,
        payment_type,
        minimum_due,
        outstanding,
        days_overdue,
        late_fee: late_fee.fee,
        collection_interest,
        sent_to_collection,
        total_due,
        steps,
    })
}
