//! Interchange enveloping for x12gen.
//!
//! [`EnvelopeBuilder`] wraps an ordered transaction-set body in the three
//! nested envelopes of an X12 interchange and threads the control numbers and
//! counts through the matching trailers. [`EnvelopeReport`] checks the same
//! invariants on rendered text.
//!
//! # Invariants
//!
//! - `SE01` equals the number of segments from `ST` through `SE` inclusive.
//! - `GE01` is the number of transaction sets in the group (always 1 here).
//! - `IEA01` is the number of groups in the interchange (always 1 here).
//! - `ISA13`/`IEA02`, `GS06`/`GE02` and `ST02`/`SE02` each share one control
//!   number.

pub mod builder;
pub mod control;
pub mod error;
pub mod report;
pub mod table;

pub use builder::{EnvelopeBuilder, EnvelopeOptions, Interchange};
pub use control::ControlNumbers;
pub use error::{EnvelopeError, EnvelopeResult};
pub use report::{
    detect_delimiters, split_segments, EnvelopeReport, EnvelopeViolation, EnvelopeViolationKind,
    TransactionSetSummary,
};
pub use table::EnvelopeSpec;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use x12_types::{Segment, TransactionType};

    fn builder() -> EnvelopeBuilder {
        let at = NaiveDate::from_ymd_opt(2025, 6, 30)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap();
        EnvelopeBuilder::new(EnvelopeOptions::default(), at)
    }

    fn body_strategy() -> impl Strategy<Value = Vec<Segment>> {
        prop::collection::vec(
            ("[A-Z][A-Z0-9]{1,2}", prop::collection::vec("[A-Z0-9 .-]{0,12}", 0..8)),
            0..40,
        )
        .prop_map(|segs| {
            segs.into_iter()
                .filter(|(id, _)| !matches!(id.as_str(), "ISA" | "GS" | "ST" | "SE" | "GE" | "IEA" | "HL"))
                .map(|(id, els)| Segment::with_elements(id, els))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn envelope_always_verifies(
            body in body_strategy(),
            seed in any::<u64>(),
            index in 0usize..TransactionType::ALL.len(),
        ) {
            let key = TransactionType::ALL[index].key();
            let mut rng = StdRng::seed_from_u64(seed);
            let ix = builder().build_envelope("SENDER", "RECEIVER", key, &body, &mut rng).unwrap();
            prop_assert_eq!(ix.transaction_segment_count, body.len() + 2);
            prop_assert_eq!(ix.segment_count(), body.len() + 6);

            let report = EnvelopeReport::inspect(&ix.render(false)).unwrap();
            prop_assert!(report.is_valid(), "{:?}", report.violations);
            prop_assert_eq!(report.transaction_sets[0].segment_count, body.len() + 2);
            prop_assert_eq!(report.interchange_control, ix.controls.interchange.to_string());
        }

        #[test]
        fn pretty_and_compact_agree(body in body_strategy(), seed in any::<u64>()) {
            let a = builder()
                .build_envelope("S", "R", "850", &body, &mut StdRng::seed_from_u64(seed))
                .unwrap();
            let b = builder()
                .build_envelope("S", "R", "850", &body, &mut StdRng::seed_from_u64(seed))
                .unwrap();
            prop_assert_eq!(a.render(true).replace('\n', ""), b.render(false));
        }
    }
}
