use thiserror::Error;

use x12_types::TypeError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvelopeError {
    #[error(transparent)]
    Type(#[from] TypeError),

    #[error("{segment}{position:02} value {value:?} contains a reserved delimiter")]
    DelimiterCollision {
        segment: String,
        position: usize,
        value: String,
    },

    #[error("malformed interchange: {0}")]
    Malformed(String),
}

pub type EnvelopeResult<T> = Result<T, EnvelopeError>;
