//! Training packages and the package catalog.
//!
//! The school offers a fixed set of packages. Each is identified by a
//! [`PackageKey`], which stays stable even when the display name changes.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::MinorUnits;

/// Number of weeks a billing month is assumed to contain.
pub const WEEKS_PER_MONTH: u64 = 4;

/// Stable identifier of one of the school's training packages.
///
/// # Example
///
/// ```
/// use dojo_pricing::models::PackageKey;
///
/// let key: PackageKey = "qi_gong".parse().unwrap();
/// assert_eq!(key, PackageKey::QiGong);
/// assert!("karate".parse::<PackageKey>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageKey {
    /// Twice-weekly low-impact package.
    QiGong,
    /// Twice-weekly higher-intensity package.
    KungFu,
    /// Once-weekly outdoor package held on weekends.
    OutdoorWeekend,
}

impl PackageKey {
    /// Every package key, in catalog order.
    pub const ALL: [PackageKey; 3] = [
        PackageKey::QiGong,
        PackageKey::KungFu,
        PackageKey::OutdoorWeekend,
    ];

    /// Returns the key as it appears in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageKey::QiGong => "qi_gong",
            PackageKey::KungFu => "kung_fu",
            PackageKey::OutdoorWeekend => "outdoor_weekend",
        }
    }

    fn index(self) -> usize {
        match self {
            PackageKey::QiGong => 0,
            PackageKey::KungFu => 1,
            PackageKey::OutdoorWeekend => 2,
        }
    }
}

impl fmt::Display for PackageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageKey {
    type Err = EngineError;

    /// Parses a package key.
    ///
    /// An unrecognised key is a defect in the calling code, so it is reported
    /// as [`EngineError::UnknownPackage`] rather than mapped to a fallback.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PackageKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| EngineError::UnknownPackage { key: s.to_string() })
    }
}

fn default_min_sessions_per_week() -> u32 {
    1
}

/// A training package offered by the school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingPackage {
    /// Human-readable label.
    pub name: String,
    /// Price of a single session in minor units.
    pub price_per_session: MinorUnits,
    /// Which weekdays the package runs, for display.
    pub schedule: String,
    /// Minimum sessions per week used for the monthly fee.
    #[serde(default = "default_min_sessions_per_week")]
    pub min_sessions_per_week: u32,
    /// Whether classes are held outdoors.
    #[serde(default)]
    pub is_outdoor: bool,
    /// Where classes are held.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl TrainingPackage {
    /// Returns `price_per_session x min_sessions_per_week x 4`, or `None` if
    /// the fee does not fit in [`MinorUnits`].
    ///
    /// Packages held by a [`PackageCatalog`] always have a fee; use
    /// [`PackageCatalog::monthly_fee`] for those.
    pub fn monthly_fee(&self) -> Option<MinorUnits> {
        let sessions_per_month = u64::from(self.min_sessions_per_week) * WEEKS_PER_MONTH;
        self.price_per_session.checked_mul(sessions_per_month)
    }

    fn validate(&self, key: PackageKey) -> EngineResult<()> {
        if self.price_per_session == 0 {
            return Err(EngineError::InvalidConfig {
                field: format!("packages.{}.price_per_session", key),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.min_sessions_per_week == 0 {
            return Err(EngineError::InvalidConfig {
                field: format!("packages.{}.min_sessions_per_week", key),
                message: "must be at least 1".to_string(),
            });
        }
        if self.monthly_fee().is_none() {
            return Err(EngineError::InvalidConfig {
                field: format!("packages.{}", key),
                message: "monthly fee does not fit in minor units".to_string(),
            });
        }
        Ok(())
    }
}

/// The complete, validated set of training packages.
///
/// A catalog always holds exactly one package per [`PackageKey`], so lookups
/// cannot fail once the catalog exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageCatalog {
    packages: [TrainingPackage; 3],
}

impl PackageCatalog {
    /// Builds a catalog from one package per key.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if a key is missing, a price is
    /// zero, a minimum session count is zero, or a package's monthly fee
    /// would overflow.
    pub fn new(mut packages: HashMap<PackageKey, TrainingPackage>) -> EngineResult<Self> {
        let mut take = |key: PackageKey| -> EngineResult<TrainingPackage> {
            let package = packages
                .remove(&key)
                .ok_or_else(|| EngineError::InvalidConfig {
                    field: format!("packages.{}", key),
                    message: "package is missing from the catalog".to_string(),
                })?;
            package.validate(key)?;
            Ok(package)
        };

        Ok(Self {
            packages: [
                take(PackageKey::QiGong)?,
                take(PackageKey::KungFu)?,
                take(PackageKey::OutdoorWeekend)?,
            ],
        })
    }

    /// Builds a catalog from known-good constants, one argument per key.
    pub(crate) fn from_packages(
        qi_gong: TrainingPackage,
        kung_fu: TrainingPackage,
        outdoor_weekend: TrainingPackage,
    ) -> Self {
        Self {
            packages: [qi_gong, kung_fu, outdoor_weekend],
        }
    }

    /// Returns the package for `key`.
    pub fn get(&self, key: PackageKey) -> &TrainingPackage {
        &self.packages[key.index()]
    }

    /// Returns the monthly fee for `key`.
    pub fn monthly_fee(&self, key: PackageKey) -> MinorUnits {
        // Every catalog package was checked for overflow when the catalog was built.
        self.get(key).monthly_fee().unwrap_or(MinorUnits::MAX)
    }

    /// Iterates over all packages in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (PackageKey, &TrainingPackage)> {
        PackageKey::ALL.into_iter().zip(self.packages.iter())
    }
}
