//! Configuration types for the pricing engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus the school's
//! built-in defaults.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::EngineResult;
use crate::models::{FinancialPolicy, PackageCatalog, PackageKey, TrainingPackage};

/// Metadata about the school the configuration belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct SchoolMetadata {
    /// The school's display name.
    pub name: String,
    /// ISO 4217 code of the currency all amounts are expressed in.
    pub currency: String,
    /// The version or effective date of the price list.
    pub version: String,
}

/// Packages configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PackagesConfig {
    /// Map of package key to package details.
    pub packages: HashMap<PackageKey, TrainingPackage>,
}

/// Policy configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyConfig {
    /// The financial policy.
    pub policy: FinancialPolicy,
}

/// The complete, validated pricing configuration.
#[derive(Debug, Clone)]
pub struct PricingConfig {
    metadata: SchoolMetadata,
    catalog: PackageCatalog,
    policy: FinancialPolicy,
}

impl PricingConfig {
    /// Creates a configuration from its component parts.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`](crate::error::EngineError::InvalidConfig)
    /// if the catalog is incomplete or any package or policy value breaks a
    /// pricing invariant.
    pub fn new(
        metadata: SchoolMetadata,
        packages: HashMap<PackageKey, TrainingPackage>,
        policy: FinancialPolicy,
    ) -> EngineResult<Self> {
        let catalog = PackageCatalog::new(packages)?;
        policy.validate()?;
        Ok(Self {
            metadata,
            catalog,
            policy,
        })
    }

    /// Returns the price list the school ships with.
    ///
    /// # Example
    ///
    /// ```
    /// use dojo_pricing::config::PricingConfig;
    /// use dojo_pricing::models::PackageKey;
    ///
    /// let config = PricingConfig::builtin();
    /// assert_eq!(config.catalog().get(PackageKey::QiGong).price_per_session, 6000);
    /// assert_eq!(config.policy().debt_collection_interest_percent, 35);
    /// ```
    pub fn builtin() -> Self {
        let catalog = PackageCatalog::from_packages(
            TrainingPackage {
                name: "Qi Gong".to_string(),
                price_per_session: 6000,
                schedule: "Tuesday & Thursday".to_string(),
                min_sessions_per_week: 2,
                is_outdoor: false,
                location: None,
            },
            TrainingPackage {
                name: "Kung Fu".to_string(),
                price_per_session: 8000,
                schedule: "Monday & Wednesday".to_string(),
                min_sessions_per_week: 2,
                is_outdoor: false,
                location: None,
            },
            TrainingPackage {
                name: "Outdoor Weekend Training".to_string(),
                price_per_session: 5000,
                schedule: "Saturday".to_string(),
                min_sessions_per_week: 1,
                is_outdoor: true,
                location: Some("Botanical Gardens".to_string()),
            },
        );

        Self {
            metadata: SchoolMetadata {
                name: "Dojo Martial Arts Academy".to_string(),
                currency: "ZAR".to_string(),
                version: "2025-01-01".to_string(),
            },
            catalog,
            policy: FinancialPolicy {
                late_cancellation_fee: 10000,
                late_payment_fee_per_day: 5000,
                debt_collection_threshold_days: 90,
                debt_collection_interest_percent: 35,
                cancellation_notice_days: 1,
                currency_symbol: "R".to_string(),
            },
        }
    }

    /// Returns the school metadata.
    pub fn school(&self) -> &SchoolMetadata {
        &self.metadata
    }

    /// Returns the package catalog.
    pub fn catalog(&self) -> &PackageCatalog {
        &self.catalog
    }

    /// Returns the financial policy.
    pub fn policy(&self) -> &FinancialPolicy {
        &self.policy
    }
}
