//! Payment types and validation outcomes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// How a member is paying for a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    /// Paying for a single session.
    Session,
    /// Paying the monthly fee.
    Monthly,
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentType::Session => write!(f, "session"),
            PaymentType::Monthly => write!(f, "monthly"),
        }
    }
}

impl FromStr for PaymentType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "session" => Ok(PaymentType::Session),
            "monthly" => Ok(PaymentType::Monthly),
            other => Err(EngineError::InvalidArgument {
                argument: "payment_type".to_string(),
                message: format!("expected 'session' or 'monthly', got '{}'", other),
            }),
        }
    }
}

/// The outcome of checking a payment against the school's rules.
///
/// An invalid outcome is ordinary data for the caller to show to the member,
/// not an error. It serializes as `{"valid": true}` or
/// `{"valid": false, "message": "..."}`.
///
/// # Example
///
/// ```
/// use dojo_pricing::models::ValidationResult;
///
/// let result = ValidationResult::invalid("Minimum payment is R60");
/// assert!(!result.is_valid());
/// assert_eq!(result.message(), Some("Minimum payment is R60"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ValidationOutcome", into = "ValidationOutcome")]
pub enum ValidationResult {
    /// The payment is acceptable.
    Valid,
    /// The payment breaks a rule.
    Invalid {
        /// Explanation for the member.
        message: String,
    },
}

/// Wire shape of [`ValidationResult`].
#[derive(Serialize, Deserialize)]
struct ValidationOutcome {
    valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl From<ValidationResult> for ValidationOutcome {
    fn from(result: ValidationResult) -> Self {
        match result {
            ValidationResult::Valid => ValidationOutcome {
                valid: true,
                message: None,
            },
            ValidationResult::Invalid { message } => ValidationOutcome {
                valid: false,
                message: Some(message),
            },
        }
    }
}

impl From<ValidationOutcome> for ValidationResult {
    fn from(outcome: ValidationOutcome) -> Self {
        if outcome.valid {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid {
                message: outcome.message.unwrap_or_default(),
            }
        }
    }
}

impl ValidationResult {
    /// Creates an invalid outcome with the given message.
    pub fn invalid(message: impl Into<String>) -> Self {
        ValidationResult::Invalid {
            message: message.into(),
        }
    }

    /// Returns true if the payment is acceptable.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Returns the explanation for an invalid outcome.
    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid { message } => Some(message.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_type_parses_both_variants() {
        assert_eq!("session".parse::<PaymentType>().unwrap(), PaymentType::Session);
        assert_eq!("monthly".parse::<PaymentType>().unwrap(), PaymentType::Monthly);
    }

    #[test]
    fn test_payment_type_rejects_unknown() {
        match "weekly".parse::<PaymentType>() {
            Err(EngineError::InvalidArgument { argument, message }) => {
                assert_eq!(argument, "payment_type");
                assert!(message.contains("weekly"));
            }
            other => panic!("Expected InvalidArgument error, got {:?}", other),
        }
    }

    #[test]
    fn test_payment_type_serialization() {
        assert_eq!(
            serde_json::to_string(&PaymentType::Session).unwrap(),
            "\"session\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentType::Monthly).unwrap(),
            "\"monthly\""
        );
    }

    #[test]
    fn test_valid_has_no_message() {
        assert!(ValidationResult::Valid.is_valid());
        assert_eq!(ValidationResult::Valid.message(), None);
    }

    #[test]
    fn test_validation_result_serialization() {
        let valid = serde_json::to_value(ValidationResult::Valid).unwrap();
        assert_eq!(valid, serde_json::json!({ "valid": true }));

        let invalid = serde_json::to_value(ValidationResult::invalid("too low")).unwrap();
        assert_eq!(
            invalid,
            serde_json::json!({ "valid": false, "message": "too low" })
        );
    }

    #[test]
    fn test_validation_result_deserialization() {
        let valid: ValidationResult =
            serde_json::from_value(serde_json::json!({ "valid": true })).unwrap();
        assert_eq!(valid, ValidationResult::Valid);

        let invalid: ValidationResult = serde_json::from_value(
            serde_json::json!({ "valid": false, "message": "advance payment required" }),
        )
        .unwrap();
        assert_eq!(invalid.message(), Some("advance payment required"));
    }
}
