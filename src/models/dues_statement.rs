//! The amounts shown to a member on their dues page.

use serde::{Deserialize, Serialize};

use super::{AuditStep, MinorUnits, PackageKey, PaymentType};

/// A member's current dues for one package, with the steps that produced them.
///
/// All amounts are minor units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuesStatement {
    /// The package the dues relate to.
    pub package: PackageKey,
    /// Whether the member pays per session or monthly.
    pub payment_type: PaymentType,
    /// The smallest payment the package accepts for this payment type.
    pub minimum_due: MinorUnits,
    /// Unpaid balance before penalties.
    pub outstanding: MinorUnits,
    /// Days the balance is overdue.
    pub days_overdue: u32,
    /// Penalty accrued for paying late.
    pub late_fee: MinorUnits,
    /// Interest added because the debt went to collection.
    pub collection_interest: MinorUnits,
    /// Whether the debt has passed the collection threshold.
    pub sent_to_collection: bool,
    /// Everything the member owes.
    pub total_due: MinorUnits,
    /// The calculation steps, in order.
    pub steps: Vec<AuditStep>,
}
