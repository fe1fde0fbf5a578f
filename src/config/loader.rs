//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading pricing
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{PackagesConfig, PolicyConfig, PricingConfig, SchoolMetadata};

/// Loads pricing configuration from disk.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/dojo/
/// ├── school.yaml     # School metadata
/// ├── packages.yaml   # One entry per package key
/// └── policy.yaml     # Fees, penalties and notice periods
/// ```
///
/// # Example
///
/// ```no_run
/// use dojo_pricing::config::ConfigLoader;
/// use dojo_pricing::models::PackageKey;
///
/// let config = ConfigLoader::load("./config/dojo")?;
/// let qi_gong = config.catalog().get(PackageKey::QiGong);
/// println!("{} costs {} cents per session", qi_gong.name, qi_gong.price_per_session);
/// # Ok::<(), dojo_pricing::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any required file is missing ([`EngineError::ConfigNotFound`])
    /// - Any file contains invalid YAML or an unknown package key
    ///   ([`EngineError::ConfigParseError`])
    /// - The values break a pricing invariant ([`EngineError::InvalidConfig`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<PricingConfig> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<SchoolMetadata>(&path.join("school.yaml"))?;
        let packages = Self::load_yaml::<PackagesConfig>(&path.join("packages.yaml"))?;
        let policy = Self::load_yaml::<PolicyConfig>(&path.join("policy.yaml"))?;

        let config = PricingConfig::new(metadata, packages.packages, policy.policy)?;

        info!(
            school = %config.school().name,
            version = %config.school().version,
            path = %path.display(),
            "Loaded pricing configuration"
        );

        Ok(config)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
