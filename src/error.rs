//! Error types for the pricing engine.
//!
//! Policy violations (an amount below the minimum, a same-day payment in
//! December) are not errors: they are reported as
//! [`ValidationResult`](crate::models::ValidationResult) values. The variants
//! below cover configuration problems and caller defects only.

use thiserror::Error;

/// The main error type for the pricing engine.
///
/// # Example
///
/// ```
/// use dojo_pricing::error::EngineError;
///
/// let error = EngineError::UnknownPackage {
///     key: "karate".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown training package: karate");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but violates a pricing invariant.
    #[error("Invalid configuration '{field}': {message}")]
    InvalidConfig {
        /// The offending configuration field.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// A package key string did not name one of the school's packages.
    #[error("Unknown training package: {key}")]
    UnknownPackage {
        /// The key that failed to resolve.
        key: String,
    },

    /// A caller passed an argument outside the operation's contract.
    #[error("Invalid argument '{argument}': {message}")]
    InvalidArgument {
        /// The argument name.
        argument: String,
        /// A description of the violation.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/packages.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/packages.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/policy.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/policy.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_config_displays_field_and_message() {
        let error = EngineError::InvalidConfig {
            field: "debt_collection_interest_percent".to_string(),
            message: "must be between 0 and 100".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid configuration 'debt_collection_interest_percent': must be between 0 and 100"
        );
    }

    #[test]
    fn test_unknown_package_displays_key() {
        let error = EngineError::UnknownPackage {
            key: "tai_chi".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown training package: tai_chi");
    }

    #[test]
    fn test_invalid_argument_displays_argument_and_message() {
        let error = EngineError::InvalidArgument {
            argument: "days_late".to_string(),
            message: "must not be negative (got -2)".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid argument 'days_late': must not be negative (got -2)"
        );
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "late fee overflow".to_string(),
        };
        assert_eq!(error.to_string(), "Calculation error: late fee overflow");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unknown_package() -> EngineResult<()> {
            Err(EngineError::UnknownPackage {
                key: "boxing".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unknown_package()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
