use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Width of `ISA06` / `ISA08`.
pub const INTERCHANGE_ID_WIDTH: usize = 15;

/// Left-align `value` in a field of exactly `width` characters, padding with
/// spaces or truncating as needed.
pub fn fixed_width(value: &str, width: usize) -> String {
    let mut out: String = value.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}

/// `ISA15`: whether the interchange carries test or production data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageIndicator {
    #[default]
    Test,
    Production,
}

impl UsageIndicator {
    pub fn code(self) -> &'static str {
        match self {
            Self::Test => "T",
            Self::Production => "P",
        }
    }
}

impl fmt::Display for UsageIndicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for UsageIndicator {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "t" | "test" => Ok(Self::Test),
            "p" | "production" => Ok(Self::Production),
            _ => Err(TypeError::UnknownUsageIndicator(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_values() {
        assert_eq!(fixed_width("ACMECORP", 15), "ACMECORP       ");
        assert_eq!(fixed_width("", 10), "          ");
    }

    #[test]
    fn truncates_long_values() {
        assert_eq!(fixed_width("WAYNEENTERPRISES", 15), "WAYNEENTERPRISE");
    }

    #[test]
    fn exact_width_unchanged() {
        assert_eq!(fixed_width("ABCDEFGHIJKLMNO", 15), "ABCDEFGHIJKLMNO");
    }

    #[test]
    fn usage_codes() {
        assert_eq!(UsageIndicator::Test.code(), "T");
        assert_eq!(UsageIndicator::Production.to_string(), "P");
        assert_eq!(UsageIndicator::default(), UsageIndicator::Test);
    }

    #[test]
    fn usage_parse() {
        assert_eq!("P".parse::<UsageIndicator>(), Ok(UsageIndicator::Production));
        assert_eq!("test".parse::<UsageIndicator>(), Ok(UsageIndicator::Test));
        assert!("X".parse::<UsageIndicator>().is_err());
    }
}
