use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("unsupported transaction type: {key}. Supported: {valid}")]
    UnknownTransactionType { key: String, valid: String },

    #[error("unknown line of business: {key}. Supported: {valid}")]
    UnknownLineOfBusiness { key: String, valid: String },

    #[error("unknown usage indicator: {0} (expected T or P)")]
    UnknownUsageIndicator(String),

    #[error("invalid delimiters: {0}")]
    InvalidDelimiters(String),

    #[error("control number {value} does not fit in {width} digits")]
    ControlNumberOverflow { value: u64, width: usize },
}

pub type TypeResult<T> = Result<T, TypeError>;
