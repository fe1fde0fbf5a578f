//! Core data models for the pricing engine.
//!
//! This module contains the package catalog, the financial policy, and the
//! value types returned by calculations.

mod audit;
mod dues_statement;
mod money;
mod package;
mod policy;
mod validation;

pub use audit::AuditStep;
pub use dues_statement::DuesStatement;
pub use money::{MinorUnits, format_major_units};
pub use package::{PackageCatalog, PackageKey, TrainingPackage, WEEKS_PER_MONTH};
pub use policy::FinancialPolicy;
pub use validation::{PaymentType, ValidationResult};
