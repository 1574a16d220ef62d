use crate::level::HlId;

/// Errors produced by HL bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HlError {
    /// The parent was never opened in this tracker.
    #[error("parent HL {parent} has not been opened (next id would be {next})")]
    UnknownParent { parent: HlId, next: HlId },

    /// An identifier was requested that this tracker never assigned.
    #[error("HL {0} was never opened")]
    UnknownLevel(HlId),

    /// The tracker ran out of identifiers.
    #[error("HL identifier space exhausted")]
    Exhausted,
}

/// Convenience alias for HL results.
pub type HlResult<T> = Result<T, HlError>;
