use chrono::NaiveDateTime;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use x12_segment::{Document, SegmentEncoder};
use x12_types::datetime::{ccyymmdd, hhmm, isa_date};
use x12_types::{fixed_width, Delimiters, Segment, UsageIndicator, INTERCHANGE_ID_WIDTH};

use crate::control::ControlNumbers;
use crate::error::{EnvelopeError, EnvelopeResult};
use crate::table::EnvelopeSpec;

/// Interchange-level settings that do not vary per transaction type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvelopeOptions {
    /// `ISA15`.
    pub usage: UsageIndicator,
    /// `ISA05`.
    pub sender_qualifier: String,
    /// `ISA07`.
    pub receiver_qualifier: String,
    /// Reject element values containing the element separator or segment
    /// terminator instead of passing them through.
    pub strict_delimiters: bool,
}

impl Default for EnvelopeOptions {
    fn default() -> Self {
        Self {
            usage: UsageIndicator::Test,
            sender_qualifier: "ZZ".into(),
            receiver_qualifier: "ZZ".into(),
            strict_delimiters: false,
        }
    }
}

/// A fully enveloped document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interchange {
    pub spec: EnvelopeSpec,
    pub controls: ControlNumbers,
    pub delimiters: Delimiters,
    /// `SE01`: segments from `ST` through `SE` inclusive.
    pub transaction_segment_count: usize,
    document: Document,
}

impl Interchange {
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Total segments, `ISA` through `IEA`.
    pub fn segment_count(&self) -> usize {
        self.document.len()
    }

    pub fn render(&self, pretty: bool) -> String {
        self.document.render(pretty)
    }
}

/// Wraps a transaction-set body in `ISA`/`GS`/`ST` ... `SE`/`GE`/`IEA`.
#[derive(Clone, Debug)]
pub struct EnvelopeBuilder {
    options: EnvelopeOptions,
    at: NaiveDateTime,
}

impl EnvelopeBuilder {
    /// Create a builder that stamps envelopes with `at`.
    pub fn new(options: EnvelopeOptions, at: NaiveDateTime) -> Self {
        Self { options, at }
    }

    pub fn options(&self) -> &EnvelopeOptions {
        &self.options
    }

    /// Envelope `body` for the transaction type named by `key`, drawing fresh
    /// control numbers from `rng`.
    ///
    /// An unknown key fails before any control number is drawn or any segment
    /// is emitted.
    pub fn build_envelope<R: Rng + ?Sized>(
        &self,
        sender_id: &str,
        receiver_id: &str,
        key: &str,
        body: &[Segment],
        rng: &mut R,
    ) -> EnvelopeResult<Interchange> {
        let spec = EnvelopeSpec::lookup(key)?;
        let controls = ControlNumbers::generate(rng);
        self.assemble(spec, controls, sender_id, receiver_id, body)
    }

    /// Envelope `body` with explicit control numbers.
    pub fn assemble(
        &self,
        spec: EnvelopeSpec,
        controls: ControlNumbers,
        sender_id: &str,
        receiver_id: &str,
        body: &[Segment],
    ) -> EnvelopeResult<Interchange> {
        let delimiters = spec.family.delimiters();
        if self.options.strict_delimiters {
            check_delimiters(&delimiters, sender_id, receiver_id, body)?;
        }

        let encoder = SegmentEncoder::new(delimiters);
        let mut doc = Document::new();
        let mut emit = |seg: &Segment| doc.append(encoder.encode(seg));

        emit(&self.isa(&spec, &controls, &delimiters, sender_id, receiver_id));
        emit(
            &Segment::new("GS")
                .element(spec.functional_id)
                .element(sender_id)
                .element(receiver_id)
                .element(ccyymmdd(&self.at))
                .element(hhmm(&self.at))
                .element(controls.group)
                .element("X")
                .element(spec.version),
        );
        emit(&Segment::new("ST").element(spec.set_id).element(controls.transaction_set));
        for seg in body {
            emit(seg);
        }
        let se_count = body.len() + 2;
        emit(&Segment::new("SE").element(se_count).element(controls.transaction_set));
        emit(&Segment::new("GE").element(1).element(controls.group));
        emit(&Segment::new("IEA").element(1).element(controls.interchange));

        debug!(
            set = spec.set_id,
            isa = %controls.interchange,
            gs = %controls.group,
            st = %controls.transaction_set,
            se_count,
            "assembled interchange"
        );

        Ok(Interchange {
            spec,
            controls,
            delimiters,
            transaction_segment_count: se_count,
            document: doc,
        })
    }

    fn isa(
        &self,
        spec: &EnvelopeSpec,
        controls: &ControlNumbers,
        delimiters: &Delimiters,
        sender_id: &str,
        receiver_id: &str,
    ) -> Segment {
        Segment::new("ISA")
            .element("00")
            .element(fixed_width("", 10))
            .element("00")
            .element(fixed_width("", 10))
            .element(fixed_width(&self.options.sender_qualifier, 2))
            .element(fixed_width(sender_id, INTERCHANGE_ID_WIDTH))
            .element(fixed_width(&self.options.receiver_qualifier, 2))
            .element(fixed_width(receiver_id, INTERCHANGE_ID_WIDTH))
            .element(isa_date(&self.at))
            .element(hhmm(&self.at))
            .element("U")
            .element(spec.family.isa_version())
            .element(controls.interchange)
            .element("0")
            .element(self.options.usage)
            .element(delimiters.sub_element)
    }
}

fn check_delimiters(
    delimiters: &Delimiters,
    sender_id: &str,
    receiver_id: &str,
    body: &[Segment],
) -> EnvelopeResult<()> {
    for (position, value) in [(6, sender_id), (8, receiver_id)] {
        if delimiters.collides_with(value) {
            return Err(EnvelopeError::DelimiterCollision {
                segment: "ISA".into(),
                position,
                value: value.to_string(),
            });
        }
    }
    for seg in body {
        if delimiters.collides_with(seg.id()) {
            return Err(EnvelopeError::DelimiterCollision {
                segment: seg.id().to_string(),
                position: 0,
                value: seg.id().to_string(),
            });
        }
        for (i, value) in seg.elements().iter().enumerate() {
            if delimiters.collides_with(value) {
                return Err(EnvelopeError::DelimiterCollision {
                    segment: seg.id().to_string(),
                    position: i + 1,
                    value: value.clone(),
                });
            }
        }
    }
    Ok(())
}
