//! The school's financial policy constants.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::MinorUnits;

fn default_currency_symbol() -> String {
    "R".to_string()
}

/// Fees, penalties and notice periods applied to all packages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialPolicy {
    /// Flat fee for cancelling a session without enough notice.
    pub late_cancellation_fee: MinorUnits,
    /// Penalty charged for each day a payment is overdue.
    pub late_payment_fee_per_day: MinorUnits,
    /// Days overdue after which a debt may be sent to collection.
    pub debt_collection_threshold_days: u32,
    /// Interest percentage added to a debt sent to collection (0 to 100).
    pub debt_collection_interest_percent: u8,
    /// Minimum days of notice that avoid the late-cancellation fee.
    pub cancellation_notice_days: u32,
    /// Currency symbol used in messages shown to members.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl FinancialPolicy {
    /// Checks the invariants that cannot be expressed in the field types.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] when the interest percentage
    /// exceeds 100.
    pub fn validate(&self) -> EngineResult<()> {
        if self.debt_collection_interest_percent > 100 {
            return Err(EngineError::InvalidConfig {
                field: "policy.debt_collection_interest_percent".to_string(),
                message: format!(
                    "must be between 0 and 100 (got {})",
                    self.debt_collection_interest_percent
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(interest: u8) -> FinancialPolicy {
        FinancialPolicy {
            late_cancellation_fee: 10000,
            late_payment_fee_per_day: 5000,
            debt_collection_threshold_days: 90,
            debt_collection_interest_percent: interest,
            cancellation_notice_days: 1,
            currency_symbol: "R".to_string(),
        }
    }

    #[test]
    fn test_interest_bounds_are_inclusive() {
        assert!(policy(0).validate().is_ok());
        assert!(policy(100).validate().is_ok());
    }

    #[test]
    fn test_interest_above_100_is_rejected() {
        match policy(101).validate() {
            Err(EngineError::InvalidConfig { field, message }) => {
                assert_eq!(field, "policy.debt_collection_interest_percent");
                assert!(message.contains("101"));
            }
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_currency_symbol_defaults_to_rand() {
        let yaml = r#"
late_cancellation_fee: 10000
late_payment_fee_per_day: 5000
debt_collection_threshold_days: 90
debt_collection_interest_percent: 35
cancellation_notice_days: 1
"#;
        let policy: FinancialPolicy = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(policy.currency_symbol, "R");
        assert_eq!(policy.debt_collection_interest_percent, 35);
    }

    #[test]
    fn test_negative_fee_does_not_deserialize() {
        let yaml = r#"
late_cancellation_fee: -1
late_payment_fee_per_day: 5000
debt_collection_threshold_days: 90
debt_collection_interest_percent: 35
cancellation_notice_days: 1
"#;
        assert!(serde_yaml::from_str::<FinancialPolicy>(yaml).is_err());
    }
}
