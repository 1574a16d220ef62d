use serde::Serialize;

use x12_types::{TransactionType, VersionFamily};

use crate::error::EnvelopeResult;

/// Envelope codes for one transaction type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EnvelopeSpec {
    pub transaction: TransactionType,
    /// `GS01` functional identifier code.
    pub functional_id: &'static str,
    /// `ST01` transaction set identifier code.
    pub set_id: &'static str,
    /// `GS08` version / release / industry identifier.
    pub version: &'static str,
    pub family: VersionFamily,
}

impl EnvelopeSpec {
    pub const fn for_type(transaction: TransactionType) -> Self {
        let (functional_id, set_id, version, family) = match transaction {
            TransactionType::PurchaseOrder => ("PO", "850", "004010", VersionFamily::V4010),
            TransactionType::Invoice => ("IN", "810", "004010", VersionFamily::V4010),
            TransactionType::ShipNotice => ("SH", "856", "004010", VersionFamily::V4010),
            TransactionType::FunctionalAck => ("FA", "997", "004010", VersionFamily::V4010),
            TransactionType::ProfessionalClaim => {
                ("HC", "837", "005010X222A1", VersionFamily::V5010)
            }
            TransactionType::ClaimPayment => ("HP", "835", "005010X221A1", VersionFamily::V5010),
            TransactionType::EligibilityInquiry => {
                ("HS", "270", "005010X279A1", VersionFamily::V5010)
            }
        };
        Self {
            transaction,
            functional_id,
            set_id,
            version,
            family,
        }
    }

    /// Resolve a transaction-type key such as `"850"`.
    pub fn lookup(key: &str) -> EnvelopeResult<Self> {
        let transaction: TransactionType = key.parse()?;
        Ok(Self::for_type(transaction))
    }

    /// Every entry, in [`TransactionType::ALL`] order.
    pub fn table() -> [Self; 7] {
        TransactionType::ALL.map(Self::for_type)
    }

    /// Find the transaction type acknowledged under a `GS01` code.
    pub fn by_functional_id(functional_id: &str) -> Option<Self> {
        Self::table()
            .into_iter()
            .find(|s| s.functional_id == functional_id)
    }
}
