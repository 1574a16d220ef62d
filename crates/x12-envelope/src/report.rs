//! Structural verification of a rendered interchange.
//!
//! [`EnvelopeReport::inspect`] reads the delimiters from the fixed-width `ISA`
//! segment, splits the text back into segments and checks every counting and
//! control-number invariant of the envelope, plus the HL forest of each
//! transaction set.

use serde::Serialize;

use x12_hl::{ForestReport, HierarchyValidator};
use x12_types::{Delimiters, Segment};

use crate::error::{EnvelopeError, EnvelopeResult};

/// Number of element separators inside an `ISA` segment.
const ISA_ELEMENTS: usize = 16;

/// Summary of one `ST`..`SE` transaction set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TransactionSetSummary {
    pub set_id: String,
    pub control: String,
    /// Segments from `ST` through `SE` inclusive, as counted.
    pub segment_count: usize,
    pub hl_levels: usize,
    pub hl_roots: usize,
    #[serde(skip)]
    pub hierarchy: ForestReport,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum EnvelopeViolationKind {
    /// Segment out of place, e.g. `ST` outside a group.
    Structure,
    /// `SE01` differs from the counted segments.
    SegmentCount,
    /// `GE01` differs from the number of transaction sets.
    TransactionSetCount,
    /// `IEA01` differs from the number of groups.
    GroupCount,
    /// Header and trailer control numbers differ.
    ControlMismatch,
    /// An envelope was opened but never closed.
    Unclosed,
    /// The HL structure of a transaction set is invalid.
    Hierarchy,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EnvelopeViolation {
    /// Zero-based index of the offending segment.
    pub segment_index: usize,
    pub kind: EnvelopeViolationKind,
    pub description: String,
}

/// Result of [`EnvelopeReport::inspect`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EnvelopeReport {
    pub delimiters: Delimiters,
    pub segment_count: usize,
    pub interchange_control: String,
    pub group_controls: Vec<String>,
    pub transaction_sets: Vec<TransactionSetSummary>,
    pub violations: Vec<EnvelopeViolation>,
}

impl EnvelopeReport {
    /// Returns `true` if all checks passed.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Parse and check `text`. Fails only when the text cannot be split into
    /// segments at all; invariant breaches are reported as violations.
    pub fn inspect(text: &str) -> EnvelopeResult<Self> {
        let text = text.trim_start();
        let delimiters = detect_delimiters(text)?;
        let segments = split_segments(text, &delimiters);
        let mut checker = Checker::default();
        for (index, seg) in segments.iter().enumerate() {
            checker.visit(index, seg, &segments);
        }
        checker.close(segments.len());

        Ok(Self {
            delimiters,
            segment_count: segments.len(),
            interchange_control: checker.isa_control.unwrap_or_default(),
            group_controls: checker.group_controls,
            transaction_sets: checker.sets,
            violations: checker.violations,
        })
    }
}

/// Read the delimiters from the `ISA` header: the element separator follows
/// `ISA`, `ISA16` is the sub-element separator and the next character is the
/// segment terminator.
pub fn detect_delimiters(text: &str) -> EnvelopeResult<Delimiters> {
    let text = text.trim_start();
    if !text.starts_with("ISA") {
        return Err(EnvelopeError::Malformed("document does not start with ISA".into()));
    }
    let mut chars = text.chars().skip(3);
    let element = chars
        .next()
        .ok_or_else(|| EnvelopeError::Malformed("truncated ISA".into()))?;
    let mut seen = 1;
    for c in chars.by_ref() {
        if c == element {
            seen += 1;
            if seen == ISA_ELEMENTS {
                break;
            }
        }
    }
    if seen < ISA_ELEMENTS {
        return Err(EnvelopeError::Malformed(format!(
            "ISA has {seen} elements, expected {ISA_ELEMENTS}"
        )));
    }
    let sub_element = chars
        .next()
        .ok_or_else(|| EnvelopeError::Malformed("ISA16 missing".into()))?;
    let segment = chars
        .next()
        .ok_or_else(|| EnvelopeError::Malformed("segment terminator missing".into()))?;
    Ok(Delimiters::new(element, segment, sub_element)?)
}

/// Split rendered text back into segments. Newlines between segments (pretty
/// mode) are ignored.
pub fn split_segments(text: &str, delimiters: &Delimiters) -> Vec<Segment> {
    text.split(delimiters.segment)
        .map(|raw| raw.trim_matches(|c| c == '\n' || c == '\r'))
        .filter(|raw| !raw.is_empty())
        .map(|raw| {
            let mut parts = raw.split(delimiters.element);
            let id = parts.next().unwrap_or_default();
            Segment::with_elements(id, parts)
        })
        .collect()
}

#[derive(Default)]
struct Checker {
    isa_control: Option<String>,
    isa_open: bool,
    groups_closed: usize,
    group: Option<OpenGroup>,
    set: Option<OpenSet>,
    group_controls: Vec<String>,
    sets: Vec<TransactionSetSummary>,
    violations: Vec<EnvelopeViolation>,
}

struct OpenGroup {
    index: usize,
    control: String,
    sets: usize,
}

struct OpenSet {
    index: usize,
    set_id: String,
    control: String,
}

impl Checker {
    fn violation(&mut self, segment_index: usize, kind: EnvelopeViolationKind, description: String) {
        self.violations.push(EnvelopeViolation {
            segment_index,
            kind,
            description,
        });
    }

    fn visit(&mut self, index: usize, seg: &Segment, all: &[Segment]) {
        use EnvelopeViolationKind as K;
        let el = |n: usize| seg.get(n).unwrap_or_default().to_string();

        match seg.id() {
            "ISA" => {
                if self.isa_open || index != 0 {
                    self.violation(index, K::Structure, "unexpected ISA".into());
                }
                self.isa_open = true;
                self.isa_control = Some(el(13));
            }
            "GS" => {
                if !self.isa_open || self.group.is_some() {
                    self.violation(index, K::Structure, "GS outside an interchange".into());
                }
                self.group_controls.push(el(6));
                self.group = Some(OpenGroup {
                    index,
                    control: el(6),
                    sets: 0,
                });
            }
            "ST" => {
                if self.group.is_none() || self.set.is_some() {
                    self.violation(index, K::Structure, "ST outside a group".into());
                }
                self.set = Some(OpenSet {
                    index,
                    set_id: el(1),
                    control: el(2),
                });
            }
            "SE" => {
                let Some(open) = self.set.take() else {
                    self.violation(index, K::Structure, "SE without ST".into());
                    return;
                };
                let counted = index - open.index + 1;
                if el(1) != counted.to_string() {
                    self.violation(
                        index,
                        K::SegmentCount,
                        format!("SE01 is {}, counted {counted}", el(1)),
                    );
                }
                if el(2) != open.control {
                    self.violation(
                        index,
                        K::ControlMismatch,
                        format!("ST02 {} does not match SE02 {}", open.control, el(2)),
                    );
                }
                let hierarchy = HierarchyValidator::validate(&all[open.index..=index]);
                for v in &hierarchy.violations {
                    self.violation(index, K::Hierarchy, v.description.clone());
                }
                if let Some(group) = self.group.as_mut() {
                    group.sets += 1;
                }
                self.sets.push(TransactionSetSummary {
                    set_id: open.set_id,
                    control: open.control,
                    segment_count: counted,
                    hl_levels: hierarchy.level_count,
                    hl_roots: hierarchy.root_count,
                    hierarchy,
                });
            }
            "GE" => {
                let Some(group) = self.group.take() else {
                    self.violation(index, K::Structure, "GE without GS".into());
                    return;
                };
                if self.set.is_some() {
                    self.violation(index, K::Unclosed, "GE before SE".into());
                }
                if el(1) != group.sets.to_string() {
                    self.violation(
                        index,
                        K::TransactionSetCount,
                        format!("GE01 is {}, group holds {} sets", el(1), group.sets),
                    );
                }
                if el(2) != group.control {
                    self.violation(
                        index,
                        K::ControlMismatch,
                        format!("GS06 {} does not match GE02 {}", group.control, el(2)),
                    );
                }
                self.groups_closed += 1;
            }
            "IEA" => {
                if !self.isa_open {
                    self.violation(index, K::Structure, "IEA without ISA".into());
                }
                if self.group.is_some() {
                    self.violation(index, K::Unclosed, "IEA before GE".into());
                }
                if el(1) != self.groups_closed.to_string() {
                    self.violation(
                        index,
                        K::GroupCount,
                        format!("IEA01 is {}, interchange holds {} groups", el(1), self.groups_closed),
                    );
                }
                let isa = self.isa_control.clone().unwrap_or_default();
                if el(2) != isa {
                    self.violation(
                        index,
                        K::ControlMismatch,
                        format!("ISA13 {isa} does not match IEA02 {}", el(2)),
                    );
                }
                self.isa_open = false;
            }
            _ => {
                if self.set.is_none() {
                    self.violation(
                        index,
                        K::Structure,
                        format!("{} outside a transaction set", seg.id()),
                    );
                }
            }
        }
    }

    fn close(&mut self, len: usize) {
        if let Some(set) = self.set.take() {
            self.violation(set.index, EnvelopeViolationKind::Unclosed, "ST never closed".into());
        }
        if let Some(group) = self.group.take() {
            self.violation(group.index, EnvelopeViolationKind::Unclosed, "GS never closed".into());
        }
        if self.isa_open {
            self.violation(len, EnvelopeViolationKind::Unclosed, "ISA never closed".into());
        }
    }
}
