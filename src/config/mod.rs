//! Configuration loading and management for the pricing engine.
//!
//! Pricing configuration is either the school's built-in price list or a set
//! of YAML files describing the school, its packages, and its financial
//! policy. Both are validated once, when the configuration is built.
//!
//! # Example
//!
//! ```no_run
//! use dojo_pricing::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/dojo").unwrap();
//! println!("Loaded price list: {}", config.school().version);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PackagesConfig, PolicyConfig, PricingConfig, SchoolMetadata};
