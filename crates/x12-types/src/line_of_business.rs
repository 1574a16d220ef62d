use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Restricts the healthcare sample pools to one line of business.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineOfBusiness {
    Commercial,
    Medicare,
    Medicaid,
}

impl LineOfBusiness {
    /// Every line of business, in display order.
    pub const ALL: [Self; 3] = [Self::Commercial, Self::Medicare, Self::Medicaid];

    pub fn key(self) -> &'static str {
        match self {
            Self::Commercial => "commercial",
            Self::Medicare => "medicare",
            Self::Medicaid => "medicaid",
        }
    }

    /// `SBR09` claim filing indicator code.
    pub fn claim_filing_code(self) -> &'static str {
        match self {
            Self::Commercial => "CI",
            Self::Medicare => "MB",
            Self::Medicaid => "MC",
        }
    }
}

impl fmt::Display for LineOfBusiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for LineOfBusiness {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lob| lob.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| TypeError::UnknownLineOfBusiness {
                key: s.to_string(),
                valid: Self::ALL.map(Self::key).join(", "),
            })
    }
}
