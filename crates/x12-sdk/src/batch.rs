use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use x12_types::TransactionType;

use crate::error::{SdkError, SdkResult};
use crate::generator::Generator;

/// What a batch does when one transaction type fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchMode {
    /// Stop at the first failure and return its error.
    #[default]
    Abort,
    /// Record the failure and continue with the next type.
    Skip,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WrittenFile {
    pub transaction: TransactionType,
    pub description: &'static str,
    pub path: PathBuf,
    pub bytes: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SkippedType {
    pub transaction: TransactionType,
    pub error: String,
}

/// Outcome of [`Generator::generate_batch`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub written: Vec<WrittenFile>,
    pub skipped: Vec<SkippedType>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// `sample_<key>.edi`.
pub fn sample_file_name(transaction: TransactionType) -> String {
    format!("sample_{}.edi", transaction.key())
}

/// Write a rendered document, creating parent directories. Pretty output gets
/// a trailing newline. Returns the number of bytes written.
pub fn write_document(path: &Path, text: &str, pretty: bool) -> SdkResult<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SdkError::io(parent, e))?;
    }
    let mut contents = text.to_string();
    if pretty {
        contents.push('\n');
    }
    fs::write(path, &contents).map_err(|e| SdkError::io(path, e))?;
    Ok(contents.len())
}

impl Generator {
    /// Write one document per supported transaction type into `dir`.
    pub fn generate_batch(
        &mut self,
        dir: &Path,
        count: Option<usize>,
        mode: BatchMode,
    ) -> SdkResult<BatchReport> {
        fs::create_dir_all(dir).map_err(|e| SdkError::io(dir, e))?;
        let mut report = BatchReport::default();
        for transaction in TransactionType::ALL {
            match self.write_one(dir, transaction, count) {
                Ok(file) => {
                    info!(
                        transaction = %transaction,
                        path = %file.path.display(),
                        bytes = file.bytes,
                        "wrote sample"
                    );
                    report.written.push(file);
                }
                Err(err) if mode == BatchMode::Skip => {
                    warn!(transaction = %transaction, error = %err, "skipping transaction type");
                    report.skipped.push(SkippedType {
                        transaction,
                        error: err.to_string(),
                    });
                }
                Err(err) => return Err(err),
            }
        }
        Ok(report)
    }

    fn write_one(
        &mut self,
        dir: &Path,
        transaction: TransactionType,
        count: Option<usize>,
    ) -> SdkResult<WrittenFile> {
        let doc = self.generate(transaction, count)?;
        let path = dir.join(sample_file_name(transaction));
        let bytes = write_document(&path, &doc.text, self.config().pretty)?;
        Ok(WrittenFile {
            transaction,
            description: doc.description,
            path,
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use chrono::NaiveDate;
    use x12_envelope::EnvelopeReport;

    fn generator(pretty: bool) -> Generator {
        Generator::new(GeneratorConfig {
            seed: Some(99),
            pretty,
            timestamp: NaiveDate::from_ymd_opt(2024, 10, 1).unwrap().and_hms_opt(7, 15, 0),
            ..GeneratorConfig::default()
        })
    }

    #[test]
    fn writes_one_file_per_type() {
        let dir = tempfile::tempdir().unwrap();
        let report = generator(false)
            .generate_batch(dir.path(), None, BatchMode::Abort)
            .unwrap();
        assert!(report.is_complete());
        assert_eq!(report.written.len(), TransactionType::ALL.len());
        for tt in TransactionType::ALL {
            let path = dir.path().join(sample_file_name(tt));
            let text = fs::read_to_string(&path).unwrap();
            assert!(!text.ends_with('\n'));
            let verified = EnvelopeReport::inspect(&text).unwrap();
            assert!(verified.is_valid(), "{tt}");
            assert_eq!(verified.transaction_sets[0].set_id, tt.key());
        }
    }

    #[test]
    fn pretty_files_end_with_newline() {
        let dir = tempfile::tempdir().unwrap();
        let report = generator(true)
            .generate_batch(dir.path(), Some(2), BatchMode::Abort)
            .unwrap();
        for file in &report.written {
            let text = fs::read_to_string(&file.path).unwrap();
            assert!(text.ends_with("~\n"));
            assert_eq!(text.len(), file.bytes);
        }
    }

    #[test]
    fn creates_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("edi");
        generator(false)
            .generate_batch(&nested, Some(1), BatchMode::Abort)
            .unwrap();
        assert!(nested.join("sample_270.edi").exists());
    }

    #[test]
    fn abort_stops_at_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the 810 file should go makes that write fail.
        fs::create_dir(dir.path().join("sample_810.edi")).unwrap();
        let err = generator(false)
            .generate_batch(dir.path(), None, BatchMode::Abort)
            .unwrap_err();
        assert!(matches!(err, SdkError::Io { .. }));
        assert!(dir.path().join("sample_850.edi").exists());
        assert!(!dir.path().join("sample_856.edi").exists());
    }

    #[test]
    fn skip_reports_and_continues() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sample_810.edi")).unwrap();
        let report = generator(false)
            .generate_batch(dir.path(), None, BatchMode::Skip)
            .unwrap();
        assert!(!report.is_complete());
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].transaction, TransactionType::Invoice);
        assert_eq!(report.written.len(), TransactionType::ALL.len() - 1);
    }

    #[test]
    fn write_document_into_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("doc.edi");
        let bytes = write_document(&path, "ISA*~", true).unwrap();
        assert_eq!(bytes, 6);
        assert_eq!(fs::read_to_string(&path).unwrap(), "ISA*~\n");
    }
}
