use std::path::Path;

use chrono::{Local, NaiveDateTime};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use x12_envelope::EnvelopeOptions;
use x12_txn::DataPool;
use x12_types::{LineOfBusiness, UsageIndicator};

use crate::error::{SdkError, SdkResult};

/// Settings for one generation run.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```toml
/// usage = "production"
/// line_of_business = "medicare"
/// seed = 42
/// timestamp = "2024-01-02T13:45:00"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// `ISA15` test or production indicator.
    pub usage: UsageIndicator,
    pub sender_qualifier: String,
    pub receiver_qualifier: String,
    /// Restrict healthcare payers to one line of business.
    pub line_of_business: Option<LineOfBusiness>,
    /// Reject element values containing the element separator or segment
    /// terminator.
    pub strict_delimiters: bool,
    /// Put each segment on its own line.
    pub pretty: bool,
    /// Seed for the random source. Unseeded runs draw from OS entropy.
    pub seed: Option<u64>,
    /// Generation instant stamped into the envelope and body dates. Defaults
    /// to the local clock when the run starts.
    pub timestamp: Option<NaiveDateTime>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            usage: UsageIndicator::Test,
            sender_qualifier: "ZZ".into(),
            receiver_qualifier: "ZZ".into(),
            line_of_business: None,
            strict_delimiters: false,
            pretty: false,
            seed: None,
            timestamp: None,
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(text: &str) -> SdkResult<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> SdkResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| SdkError::io(path, e))?;
        Self::from_toml_str(&text)
    }

    pub fn envelope_options(&self) -> EnvelopeOptions {
        EnvelopeOptions {
            usage: self.usage,
            sender_qualifier: self.sender_qualifier.clone(),
            receiver_qualifier: self.receiver_qualifier.clone(),
            strict_delimiters: self.strict_delimiters,
        }
    }

    pub fn data_pool(&self) -> DataPool {
        DataPool::new(self.line_of_business)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// The configured instant, or the local time now.
    pub fn instant(&self) -> NaiveDateTime {
        self.timestamp
            .unwrap_or_else(|| Local::now().naive_local())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::Rng;

    #[test]
    fn default_config() {
        let c = GeneratorConfig::default();
        assert_eq!(c.usage, UsageIndicator::Test);
        assert_eq!(c.sender_qualifier, "ZZ");
        assert_eq!(c.receiver_qualifier, "ZZ");
        assert!(c.line_of_business.is_none());
        assert!(!c.strict_delimiters);
        assert!(!c.pretty);
        assert!(c.seed.is_none());
        assert!(c.timestamp.is_none());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = GeneratorConfig::from_toml_str(
            r#"
            usage = "production"
            line_of_business = "medicare"
            seed = 42
            timestamp = "2024-01-02T13:45:00"
            "#,
        )
        .unwrap();
        assert_eq!(c.usage, UsageIndicator::Production);
        assert_eq!(c.line_of_business, Some(LineOfBusiness::Medicare));
        assert_eq!(c.seed, Some(42));
        assert_eq!(
            c.timestamp,
            NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(13, 45, 0)
        );
        assert_eq!(c.sender_qualifier, "ZZ");
    }

    #[test]
    fn unknown_line_of_business_is_rejected() {
        let err = GeneratorConfig::from_toml_str(r#"line_of_business = "dental""#).unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x12gen.toml");
        std::fs::write(&path, "pretty = true\nstrict_delimiters = true\n").unwrap();
        let c = GeneratorConfig::load(&path).unwrap();
        assert!(c.pretty);
        assert!(c.envelope_options().strict_delimiters);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = GeneratorConfig::load("/nonexistent/x12gen.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/x12gen.toml"));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let c = GeneratorConfig {
            seed: Some(7),
            ..Default::default()
        };
        assert_eq!(c.rng().gen::<u64>(), c.rng().gen::<u64>());
    }

    #[test]
    fn pinned_instant_wins() {
        let at = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let c = GeneratorConfig {
            timestamp: Some(at),
            ..Default::default()
        };
        assert_eq!(c.instant(), at);
    }

    #[test]
    fn pool_follows_line_of_business() {
        let c = GeneratorConfig {
            line_of_business: Some(LineOfBusiness::Commercial),
            ..Default::default()
        };
        assert_eq!(c.data_pool().line_of_business(), Some(LineOfBusiness::Commercial));
    }
}
