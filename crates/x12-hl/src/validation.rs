use std::collections::{HashMap, HashSet};

use x12_types::Segment;

/// Result of checking the `HL` segments of one transaction set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForestReport {
    pub level_count: usize,
    pub root_count: usize,
    pub violations: Vec<HlViolation>,
}

impl ForestReport {
    /// Returns `true` if all checks passed.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// A specific problem found in the HL structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HlViolation {
    /// One-based position of the offending `HL` among all `HL` segments.
    pub ordinal: usize,
    pub kind: HlViolationKind,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HlViolationKind {
    MalformedId,
    SequenceGap,
    ForwardParent,
    MissingLevelCode,
    ChildFlagMismatch,
}

/// Checks rendered `HL` segments against the forest invariants.
pub struct HierarchyValidator;

impl HierarchyValidator {
    /// Validate the `HL` segments found in `segments`; other segments are
    /// ignored.
    pub fn validate(segments: &[Segment]) -> ForestReport {
        let mut violations = Vec::new();
        let mut root_count = 0;
        let mut child_counts: HashMap<u32, u32> = HashMap::new();
        let mut emitted: HashSet<u32> = HashSet::new();
        let mut declared: Vec<(usize, u32, Option<bool>)> = Vec::new();

        let hl_segments = segments.iter().filter(|s| s.id() == "HL");
        for (index, seg) in hl_segments.enumerate() {
            let ordinal = index + 1;
            let expected = ordinal as u32;

            let id = match seg.get(1).and_then(|v| v.parse::<u32>().ok()) {
                Some(id) => id,
                None => {
                    violations.push(HlViolation {
                        ordinal,
                        kind: HlViolationKind::MalformedId,
                        description: format!("HL01 {:?} is not a number", seg.get(1)),
                    });
                    continue;
                }
            };
            if id != expected {
                violations.push(HlViolation {
                    ordinal,
                    kind: HlViolationKind::SequenceGap,
                    description: format!("expected HL {expected}, got {id}"),
                });
            }

            match seg.get(2).filter(|p| !p.is_empty()) {
                None => root_count += 1,
                Some(raw) => match raw.parse::<u32>() {
                    Ok(parent) if parent < id && emitted.contains(&parent) => {
                        *child_counts.entry(parent).or_default() += 1;
                    }
                    _ => violations.push(HlViolation {
                        ordinal,
                        kind: HlViolationKind::ForwardParent,
                        description: format!(
                            "HL {id} names parent {raw}, which was not emitted earlier"
                        ),
                    }),
                },
            }

            if seg.get(3).map_or(true, str::is_empty) {
                violations.push(HlViolation {
                    ordinal,
                    kind: HlViolationKind::MissingLevelCode,
                    description: format!("HL {id} has no level code"),
                });
            }

            emitted.insert(id);

            let flag = match seg.get(4) {
                Some("1") => Some(true),
                Some("0") => Some(false),
                _ => None,
            };
            declared.push((ordinal, id, flag));
        }

        // HL04 is optional; only check it where present.
        for (ordinal, id, flag) in declared.iter().copied() {
            let Some(flag) = flag else { continue };
            let actual = child_counts.contains_key(&id);
            if flag != actual {
                violations.push(HlViolation {
                    ordinal,
                    kind: HlViolationKind::ChildFlagMismatch,
                    description: format!("HL {id} declares children={flag}, actual={actual}"),
                });
            }
        }

        ForestReport {
            level_count: declared.len(),
            root_count,
            violations,
        }
    }
}
