use rand::Rng;
use serde::Serialize;

use x12_types::{ControlNumber, ControlNumberKind};

use crate::error::EnvelopeResult;

/// The three control numbers of one interchange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ControlNumbers {
    /// `ISA13` / `IEA02`.
    pub interchange: ControlNumber,
    /// `GS06` / `GE02`.
    pub group: ControlNumber,
    /// `ST02` / `SE02`.
    pub transaction_set: ControlNumber,
}

impl ControlNumbers {
    /// Draw fresh control numbers. The transaction-set number is redrawn until
    /// it differs from the group number.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let interchange = draw(rng, ControlNumberKind::Interchange);
        let group = draw(rng, ControlNumberKind::Group);
        let mut transaction_set = draw(rng, ControlNumberKind::TransactionSet);
        while transaction_set.value() == group.value() {
            transaction_set = draw(rng, ControlNumberKind::TransactionSet);
        }
        Self {
            interchange,
            group,
            transaction_set,
        }
    }

    /// Build from explicit values.
    pub fn new(interchange: u32, group: u32, transaction_set: u32) -> EnvelopeResult<Self> {
        Ok(Self {
            interchange: ControlNumber::new(ControlNumberKind::Interchange, interchange)?,
            group: ControlNumber::new(ControlNumberKind::Group, group)?,
            transaction_set: ControlNumber::new(ControlNumberKind::TransactionSet, transaction_set)?,
        })
    }
}

fn draw<R: Rng + ?Sized>(rng: &mut R, kind: ControlNumberKind) -> ControlNumber {
    ControlNumber::saturating(kind, rng.gen_range(1..=kind.max_value()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generated_widths() {
        let mut rng = StdRng::seed_from_u64(7);
        let c = ControlNumbers::generate(&mut rng);
        assert_eq!(c.interchange.to_string().len(), 9);
        assert_eq!(c.group.to_string().len(), 4);
        assert_eq!(c.transaction_set.to_string().len(), 4);
    }

    #[test]
    fn never_zero_and_group_differs_from_set() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..2_000 {
            let c = ControlNumbers::generate(&mut rng);
            assert!(c.interchange.value() >= 1);
            assert!(c.group.value() >= 1);
            assert_ne!(c.group.value(), c.transaction_set.value());
        }
    }

    #[test]
    fn same_seed_same_numbers() {
        let a = ControlNumbers::generate(&mut StdRng::seed_from_u64(3));
        let b = ControlNumbers::generate(&mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn fresh_values_per_call() {
        let mut rng = StdRng::seed_from_u64(5);
        let a = ControlNumbers::generate(&mut rng);
        let b = ControlNumbers::generate(&mut rng);
        assert_ne!(a.interchange, b.interchange);
    }

    #[test]
    fn explicit_values_validated() {
        let c = ControlNumbers::new(1, 2, 3).unwrap();
        assert_eq!(c.interchange.to_string(), "000000001");
        assert!(ControlNumbers::new(1, 10_000, 3).is_err());
    }
}
