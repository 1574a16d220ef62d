use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};

/// The envelope layer a control number belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ControlNumberKind {
    /// `ISA13` / `IEA02`.
    Interchange,
    /// `GS06` / `GE02`.
    Group,
    /// `ST02` / `SE02`.
    TransactionSet,
}

impl ControlNumberKind {
    /// Rendered width in digits. Downstream systems key off field length.
    pub const fn width(self) -> usize {
        match self {
            Self::Interchange => 9,
            Self::Group | Self::TransactionSet => 4,
        }
    }

    /// Largest value that fits the width.
    pub const fn max_value(self) -> u32 {
        match self {
            Self::Interchange => 999_999_999,
            Self::Group | Self::TransactionSet => 9_999,
        }
    }
}

impl fmt::Display for ControlNumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interchange => write!(f, "interchange"),
            Self::Group => write!(f, "group"),
            Self::TransactionSet => write!(f, "transaction-set"),
        }
    }
}

/// A control number shared by one header/trailer pair.
///
/// Always rendered zero-padded to the full width of its kind, so `42` as an
/// interchange control number renders as `000000042`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ControlNumber {
    kind: ControlNumberKind,
    value: u32,
}

impl ControlNumber {
    /// Create a control number, rejecting values wider than the kind allows.
    pub fn new(kind: ControlNumberKind, value: u32) -> TypeResult<Self> {
        if value > kind.max_value() {
            return Err(TypeError::ControlNumberOverflow {
                value: u64::from(value),
                width: kind.width(),
            });
        }
        Ok(Self { kind, value })
    }

    /// Create a control number, clamping `value` into the kind's range.
    pub fn saturating(kind: ControlNumberKind, value: u32) -> Self {
        Self {
            kind,
            value: value.min(kind.max_value()),
        }
    }

    pub fn kind(&self) -> ControlNumberKind {
        self.kind
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

impl fmt::Debug for ControlNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ControlNumber({} {})", self.kind, self)
    }
}

impl fmt::Display for ControlNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.value, width = self.kind.width())
    }
}
