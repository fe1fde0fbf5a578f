//! The pricing engine facade.
//!
//! [`PricingEngine`] binds a validated [`PricingConfig`] to the calculation
//! rules and is what booking, registration and billing code calls.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::calculation::{
    build_dues_statement, calculate_debt_collection, calculate_late_cancellation_fee,
    calculate_late_fee, is_debt_collection_eligible, validate_december_blackout,
    validate_payment_amount,
};
use crate::config::PricingConfig;
use crate::error::EngineResult;
use crate::models::{
    DuesStatement, FinancialPolicy, MinorUnits, PackageKey, PaymentType, TrainingPackage,
    ValidationResult,
};

/// Prices packages and validates payments against the school's policy.
///
/// The engine holds only immutable configuration, so clones are cheap and
/// may be shared freely across threads.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use dojo_pricing::PricingEngine;
/// use dojo_pricing::models::{PackageKey, PaymentType};
///
/// let engine = PricingEngine::builtin();
///
/// assert_eq!(engine.monthly_fee(PackageKey::QiGong), 48000);
/// assert_eq!(engine.late_fee(3).unwrap(), 15000);
/// assert_eq!(engine.debt_collection_amount(100000).unwrap(), 135000);
///
/// let result = engine.validate_payment_amount(5000, PaymentType::Session, PackageKey::QiGong);
/// assert!(result.message().unwrap().contains("R60"));
///
/// let december = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();
/// assert!(!engine.validate_december_blackout(&december).is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct PricingEngine {
    config: Arc<PricingConfig>,
}

impl PricingEngine {
    /// Creates an engine over the given configuration.
    pub fn new(config: PricingConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Creates an engine over the school's built-in price list.
    pub fn builtin() -> Self {
        Self::new(PricingConfig::builtin())
    }

    /// Returns the configuration the engine prices with.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Returns the financial policy.
    pub fn policy(&self) -> &FinancialPolicy {
        self.config.policy()
    }

    /// Returns the package for `key`.
    pub fn package(&self, key: PackageKey) -> &TrainingPackage {
        self.config.catalog().get(key)
    }

    /// Iterates over all packages in catalog order.
    pub fn packages(&self) -> impl Iterator<Item = (PackageKey, &TrainingPackage)> {
        self.config.catalog().iter()
    }

    /// Returns the monthly fee for a package in minor units.
    pub fn monthly_fee(&self, key: PackageKey) -> MinorUnits {
        let fee = self.config.catalog().monthly_fee(key);
        debug!(package = %key, monthly_fee = fee, "Calculated monthly fee");
        fee
    }

    /// Returns the late payment fee for `days_late` days.
    ///
    /// # Errors
    ///
    /// Fails with [`EngineError::InvalidArgument`](crate::error::EngineError::InvalidArgument)
    /// for a negative `days_late`.
    pub fn late_fee(&self, days_late: i64) -> EngineResult<MinorUnits> {
        let result = calculate_late_fee(days_late, self.policy(), 1).inspect_err(|err| {
            warn!(days_late, error = %err, "Rejected late fee request");
        })?;
        debug!(days_late, late_fee = result.fee, "Calculated late fee");
        Ok(result.fee)
    }

    /// Returns `base_amount` plus debt collection interest.
    ///
    /// The collection threshold is not checked here; see
    /// [`is_debt_collection_eligible`](Self::is_debt_collection_eligible).
    ///
    /// # Errors
    ///
    /// Fails with [`EngineError::CalculationError`](crate::error::EngineError::CalculationError)
    /// if the total overflows.
    pub fn debt_collection_amount(&self, base_amount: MinorUnits) -> EngineResult<MinorUnits> {
        let result = calculate_debt_collection(base_amount, self.policy(), 1).inspect_err(|err| {
            warn!(base_amount, error = %err, "Rejected debt collection request");
        })?;
        debug!(
            base_amount,
            interest = result.interest,
            total = result.total,
            "Calculated debt collection amount"
        );
        Ok(result.total)
    }

    /// Returns true when a debt `days_overdue` days old may go to collection.
    pub fn is_debt_collection_eligible(&self, days_overdue: u32) -> bool {
        is_debt_collection_eligible(days_overdue, self.policy())
    }

    /// Returns the fee for cancelling the session on `session_date` on the
    /// day `cancelled_on`.
    pub fn late_cancellation_fee(
        &self,
        session_date: NaiveDate,
        cancelled_on: NaiveDate,
    ) -> MinorUnits {
        let result =
            calculate_late_cancellation_fee(session_date, cancelled_on, self.policy(), 1);
        debug!(
            %session_date,
            %cancelled_on,
            notice_days = result.notice_days,
            fee = result.fee,
            "Calculated late cancellation fee"
        );
        result.fee
    }

    /// Checks a proposed payment against the package minimum.
    pub fn validate_payment_amount(
        &self,
        amount: MinorUnits,
        payment_type: PaymentType,
        key: PackageKey,
    ) -> ValidationResult {
        let result =
            validate_payment_amount(amount, payment_type, self.package(key), self.policy());
        if let ValidationResult::Invalid { message } = &result {
            warn!(
                package = %key,
                %payment_type,
                amount,
                reason = %message,
                "Payment amount rejected"
            );
        }
        result
    }

    /// Checks whether same-day payment is allowed on the caller's `date`.
    pub fn validate_december_blackout<D: Datelike>(&self, date: &D) -> ValidationResult {
        let result = validate_december_blackout(date);
        if !result.is_valid() {
            warn!(
                year = date.year(),
                month = date.month(),
                day = date.day(),
                "Same-day payment refused during blackout month"
            );
        }
        result
    }

    /// Builds the dues statement for a member's outstanding balance.
    pub fn dues_statement(
        &self,
        key: PackageKey,
        payment_type: PaymentType,
        outstanding: MinorUnits,
        days_overdue: u32,
    ) -> EngineResult<DuesStatement> {
        let statement = build_dues_statement(
            key,
            self.package(key),
            payment_type,
            outstanding,
            days_overdue,
            self.policy(),
        )
        .inspect_err(|err| {
            warn!(
                package = %key,
                %payment_type,
                outstanding,
                days_overdue,
                error = %err,
                "Rejected dues statement request"
            );
        })?;
        debug!(
            package = %key,
            %payment_type,
            outstanding,
            days_overdue,
            total_due = statement.total_due,
            sent_to_collection = statement.sent_to_collection,
            "Built dues statement"
        );
        Ok(statement)
    }
}
