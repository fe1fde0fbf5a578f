//! Audit records for pricing calculations.

use serde::{Deserialize, Serialize};

/// A single step in a pricing calculation.
///
/// Each step records which rule was applied, the inputs it saw, what it
/// produced, and a short explanation a member or bookkeeper can read.
///
/// # Example
///
/// ```
/// use dojo_pricing::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "late_payment_fee".to_string(),
///     rule_name: "Late Payment Fee".to_string(),
///     policy_ref: "late_payment_fee_per_day".to_string(),
///     input: serde_json::json!({ "days_late": 3 }),
///     output: serde_json::json!({ "fee": 15000 }),
///     reasoning: "3 days x R50 = R150".to_string(),
/// };
/// assert_eq!(step.rule_id, "late_payment_fee");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The policy or package field the rule reads its constant from.
    pub policy_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}
