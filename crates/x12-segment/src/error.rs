use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SegmentError {
    #[error("insert position {index} is past the end of a {len}-segment document")]
    InsertOutOfBounds { index: usize, len: usize },
}

pub type SegmentResult<T> = Result<T, SegmentError>;
