//! Late cancellation fee calculation.
//!
//! Members who cancel a booked session with less than the required notice
//! are charged a flat fee.

use chrono::NaiveDate;

use crate::models::{AuditStep, FinancialPolicy, MinorUnits, format_major_units};

use super::format_days;

/// The result of checking a cancellation against the notice period.
#[derive(Debug, Clone)]
pub struct LateCancellationResult {
    /// Whole days between the cancellation and the session.
    pub notice_days: i64,
    /// The fee charged; zero when enough notice was given.
    pub fee: MinorUnits,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the fee for cancelling the session on `session_date` on the
/// day `cancelled_on`.
///
/// Notice is counted in whole calendar days. Giving at least
/// `cancellation_notice_days` of notice is free; anything less, including
/// cancelling after the session, costs `late_cancellation_fee`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use dojo_pricing::calculation::calculate_late_cancellation_fee;
/// use dojo_pricing::config::PricingConfig;
///
/// let config = PricingConfig::builtin();
/// let session = NaiveDate::from_ymd_opt(2025, 3, 11).unwrap();
///
/// let same_day = calculate_late_cancellation_fee(session, session, config.policy(), 1);
/// assert_eq!(same_day.fee, 10000);
///
/// let day_before = session.pred_opt().unwrap();
/// let early = calculate_late_cancellation_fee(session, day_before, config.policy(), 1);
/// assert_eq!(early.fee, 0);
/// ```
pub fn calculate_late_cancellation_fee(
    session_date: NaiveDate,
    cancelled_on: NaiveDate,
    policy: &FinancialPolicy,
    step_number: u32,
) -> LateCancellationResult {
    let notice_days = (session_date - cancelled_on).num_days();
    let required = i64::from(policy.cancellation_notice_days);
    let is_late = notice_days < required;
    let fee = if is_late {
        policy.late_cancellation_fee
    } else {
        0
    };

    let reasoning = if is_late {
        format!(
            "{} of notice given, {} required - late cancellation fee {}",
            format_days(notice_days),
            format_days(required),
            format_major_units(fee, &policy.currency_symbol)
        )
    } else {
        format!(
            "{} of notice given, {} required - no fee",
            format_days(notice_days),
            format_days(required)
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "late_cancellation_fee".to_string(),
        rule_name: "Late Cancellation Fee".to_string(),
        policy_ref: "policy.cancellation_notice_days".to_string(),
        input: serde_json::json!({
            "session_date": session_date,
            "cancelled_on": cancelled_on,
            "required_notice_days": required
        }),
        output: serde_json::json!({
            "notice_days": notice_days,
            "fee": fee
        }),
        reasoning,
    };

    LateCancellationResult {
        notice_days,
        fee,
        audit_step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PricingConfig;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn cancel(
        session_date: NaiveDate,
        cancelled_on: NaiveDate,
        notice_days: u32,
        step_number: u32,
    ) -> LateCancellationResult {
        let mut policy = PricingConfig::builtin().policy().clone();
        policy.cancellation_notice_days = notice_days;
        calculate_late_cancellation_fee(session_date, cancelled_on, &policy, step_number)
    }

    #[test]
    fn test_same_day_cancellation_is_charged() {
        let result = cancel(date(2025, 3, 11), date(2025, 3, 11), 1, 1);

        assert_eq!(result.notice_days, 0);
        assert_eq!(result.fee, 10000);
        assert_eq!(
            result.audit_step.reasoning,
            "0 days of notice given, 1 day required - late cancellation fee R100"
        );
    }

    #[test]
    fn test_exact_notice_is_free() {
        let result = cancel(date(2025, 3, 11), date(2025, 3, 9), 2, 1);

        assert_eq!(result.notice_days, 2);
        assert_eq!(result.fee, 0);
        assert_eq!(
            result.audit_step.reasoning,
            "2 days of notice given, 2 days required - no fee"
        );
    }

    #[test]
    fn test_one_day_short_is_charged() {
        let result = cancel(date(2025, 3, 11), date(2025, 3, 10), 2, 1);

        assert_eq!(result.fee, 10000);
        assert!(result.audit_step.reasoning.contains("R100"));
    }

    #[test]
    fn test_cancelling_after_session_is_charged() {
        let result = cancel(date(2025, 3, 11), date(2025, 3, 12), 1, 1);

        assert_eq!(result.notice_days, -1);
        assert_eq!(result.fee, 10000);
    }

    #[test]
    fn test_zero_notice_policy_never_charges_before_session() {
        let result = cancel(date(2025, 3, 11), date(2025, 3, 11), 0, 1);
        assert_eq!(result.fee, 0);
    }

    #[test]
    fn test_notice_across_year_boundary() {
        let result = cancel(date(2025, 1, 2), date(2024, 12, 30), 1, 1);

        assert_eq!(result.notice_days, 3);
        assert_eq!(result.fee, 0);
    }

    #[test]
    fn test_audit_step_records_dates() {
        let result = cancel(date(2025, 3, 11), date(2025, 3, 11), 1, 6);

        assert_eq!(result.audit_step.step_number, 6);
        assert_eq!(result.audit_step.rule_id, "late_cancellation_fee");
        assert_eq!(result.audit_step.input["session_date"], "2025-03-11");
        assert_eq!(result.audit_step.output["fee"], 10000);
    }
}
