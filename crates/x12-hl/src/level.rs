use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of one hierarchical level. Always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HlId(u32);

impl HlId {
    /// The first identifier of every transaction set.
    pub const FIRST: Self = Self(1);

    pub(crate) fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index + 1).ok().map(Self)
    }

    pub(crate) fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for HlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `HL03` hierarchical level code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelCode {
    /// `S`: shipment (856).
    Shipment,
    /// `O`: order (856).
    Order,
    /// `P`: pack (856).
    Pack,
    /// `I`: item (856).
    Item,
    /// `20`: information source (billing provider, payer).
    InformationSource,
    /// `21`: information receiver.
    InformationReceiver,
    /// `22`: subscriber.
    Subscriber,
    /// `23`: dependent / patient.
    Dependent,
}

impl LevelCode {
    pub fn code(self) -> &'static str {
        match self {
            Self::Shipment => "S",
            Self::Order => "O",
            Self::Pack => "P",
            Self::Item => "I",
            Self::InformationSource => "20",
            Self::InformationReceiver => "21",
            Self::Subscriber => "22",
            Self::Dependent => "23",
        }
    }
}

impl fmt::Display for LevelCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_start_at_one() {
        assert_eq!(HlId::from_index(0), Some(HlId::FIRST));
        assert_eq!(HlId::FIRST.get(), 1);
        assert_eq!(HlId::FIRST.index(), 0);
    }

    #[test]
    fn level_codes() {
        assert_eq!(LevelCode::Shipment.code(), "S");
        assert_eq!(LevelCode::Subscriber.to_string(), "22");
        assert_eq!(LevelCode::InformationSource.code(), "20");
    }
}
