use std::path::PathBuf;

use thiserror::Error;

use x12_envelope::EnvelopeError;
use x12_txn::TxnError;
use x12_types::TypeError;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error(transparent)]
    Type(#[from] TypeError),

    #[error("envelope error: {0}")]
    Envelope(#[from] EnvelopeError),

    #[error("generation error: {0}")]
    Generation(#[from] TxnError),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SdkError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type SdkResult<T> = Result<T, SdkError>;
