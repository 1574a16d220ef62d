use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::delimiters::Delimiters;
use crate::error::TypeError;

/// Interchange conventions shared by a group of transaction types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VersionFamily {
    /// Commercial 004010 transactions.
    V4010,
    /// HIPAA 005010 healthcare transactions.
    V5010,
}

impl VersionFamily {
    /// `ISA12` interchange control version number.
    pub fn isa_version(self) -> &'static str {
        match self {
            Self::V4010 => "00401",
            Self::V5010 => "00501",
        }
    }

    /// Delimiters every document of this family is rendered with.
    pub fn delimiters(self) -> Delimiters {
        match self {
            Self::V4010 => Delimiters::X12_4010,
            Self::V5010 => Delimiters::X12_5010,
        }
    }
}

/// The closed set of transaction sets x12gen can synthesize.
///
/// Each variant is keyed by its X12 transaction set identifier. Adding a
/// variant forces every `match` over the set (envelope table, generator
/// dispatch) to be extended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TransactionType {
    PurchaseOrder,
    Invoice,
    ShipNotice,
    FunctionalAck,
    ProfessionalClaim,
    ClaimPayment,
    EligibilityInquiry,
}

impl TransactionType {
    /// Every supported transaction type, in batch order.
    pub const ALL: [Self; 7] = [
        Self::PurchaseOrder,
        Self::Invoice,
        Self::ShipNotice,
        Self::FunctionalAck,
        Self::ProfessionalClaim,
        Self::ClaimPayment,
        Self::EligibilityInquiry,
    ];

    /// The lookup key, which is also the `ST01` identifier code.
    pub fn key(self) -> &'static str {
        match self {
            Self::PurchaseOrder => "850",
            Self::Invoice => "810",
            Self::ShipNotice => "856",
            Self::FunctionalAck => "997",
            Self::ProfessionalClaim => "837",
            Self::ClaimPayment => "835",
            Self::EligibilityInquiry => "270",
        }
    }

    /// Human-readable name.
    pub fn description(self) -> &'static str {
        match self {
            Self::PurchaseOrder => "Purchase Order",
            Self::Invoice => "Invoice",
            Self::ShipNotice => "Advance Ship Notice",
            Self::FunctionalAck => "Functional Acknowledgment",
            Self::ProfessionalClaim => "Health Care Claim: Professional",
            Self::ClaimPayment => "Health Care Claim Payment/Advice",
            Self::EligibilityInquiry => "Eligibility Inquiry",
        }
    }

    pub fn family(self) -> VersionFamily {
        match self {
            Self::PurchaseOrder | Self::Invoice | Self::ShipNotice | Self::FunctionalAck => {
                VersionFamily::V4010
            }
            Self::ProfessionalClaim | Self::ClaimPayment | Self::EligibilityInquiry => {
                VersionFamily::V5010
            }
        }
    }

    /// Comma-separated list of valid keys, for error messages.
    pub fn valid_keys() -> String {
        Self::ALL.map(Self::key).join(", ")
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for TransactionType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.key() == key)
            .ok_or_else(|| TypeError::UnknownTransactionType {
                key: s.to_string(),
                valid: Self::valid_keys(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_roundtrip() {
        for t in TransactionType::ALL {
            assert_eq!(t.key().parse::<TransactionType>(), Ok(t));
        }
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<_> = TransactionType::ALL.iter().map(|t| t.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), TransactionType::ALL.len());
    }

    #[test]
    fn unknown_key_lists_valid_keys() {
        let err = "999".parse::<TransactionType>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported transaction type: 999. Supported: 850, 810, 856, 997, 837, 835, 270"
        );
    }

    #[test]
    fn healthcare_types_use_5010() {
        assert_eq!(TransactionType::ProfessionalClaim.family(), VersionFamily::V5010);
        assert_eq!(TransactionType::ClaimPayment.family(), VersionFamily::V5010);
        assert_eq!(TransactionType::PurchaseOrder.family(), VersionFamily::V4010);
    }

    #[test]
    fn family_delimiters() {
        assert_eq!(VersionFamily::V4010.delimiters().sub_element, ':');
        assert_eq!(VersionFamily::V5010.delimiters().sub_element, '^');
        assert_eq!(VersionFamily::V5010.isa_version(), "00501");
    }

    #[test]
    fn display_is_key() {
        assert_eq!(TransactionType::ShipNotice.to_string(), "856");
        assert_eq!(TransactionType::ShipNotice.description(), "Advance Ship Notice");
    }
}
