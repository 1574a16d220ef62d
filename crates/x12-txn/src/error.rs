use thiserror::Error;

use x12_hl::HlError;
use x12_types::TypeError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TxnError {
    #[error(transparent)]
    Type(#[from] TypeError),

    #[error("hierarchy error: {0}")]
    Hierarchy(#[from] HlError),

    #[error("sample pool {0} is empty")]
    EmptyPool(&'static str),
}

pub type TxnResult<T> = Result<T, TxnError>;
