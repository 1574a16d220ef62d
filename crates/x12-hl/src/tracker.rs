use serde::{Deserialize, Serialize};
use tracing::debug;

use x12_types::Segment;

use crate::error::{HlError, HlResult};
use crate::level::{HlId, LevelCode};

/// Snapshot of one hierarchical level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HlRecord {
    pub id: HlId,
    pub parent: Option<HlId>,
    pub level: LevelCode,
    /// Whether any level opened so far names this one as its parent.
    pub has_children: bool,
}

impl HlRecord {
    /// Render as `HL*id*parent*level*child-flag`. A root renders an empty
    /// parent element rather than omitting it.
    pub fn to_segment(&self) -> Segment {
        Segment::new("HL")
            .element(self.id)
            .element(self.parent.map(|p| p.to_string()).unwrap_or_default())
            .element(self.level)
            .element(if self.has_children { "1" } else { "0" })
    }
}

#[derive(Clone, Debug)]
struct Level {
    parent: Option<HlId>,
    level: LevelCode,
    children: u32,
}

/// Assigns HL identifiers for one transaction set.
///
/// Identifiers are dense and strictly increasing from 1. A parent must have
/// been opened by this tracker before it can be referenced, so the recorded
/// levels always form a forest. Create a fresh tracker per transaction set.
#[derive(Clone, Debug, Default)]
pub struct HlTracker {
    levels: Vec<Level>,
}

impl HlTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new level beneath `parent` (or as a root) and return its id.
    pub fn open_level(&mut self, parent: Option<HlId>, level: LevelCode) -> HlResult<HlId> {
        let id = HlId::from_index(self.levels.len()).ok_or(HlError::Exhausted)?;
        if let Some(p) = parent {
            let entry = self
                .levels
                .get_mut(p.index())
                .ok_or(HlError::UnknownParent { parent: p, next: id })?;
            entry.children += 1;
        }
        self.levels.push(Level {
            parent,
            level,
            children: 0,
        });
        debug!(hl = %id, parent = ?parent.map(HlId::get), level = %level, "opened HL level");
        Ok(id)
    }

    /// Number of levels opened so far.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Returns `true` if no level has been opened.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Parent of a level, `Ok(None)` for roots.
    pub fn parent(&self, id: HlId) -> HlResult<Option<HlId>> {
        self.level(id).map(|l| l.parent)
    }

    pub fn has_children(&self, id: HlId) -> HlResult<bool> {
        self.level(id).map(|l| l.children > 0)
    }

    /// Snapshot of a single level.
    pub fn record(&self, id: HlId) -> HlResult<HlRecord> {
        let l = self.level(id)?;
        Ok(HlRecord {
            id,
            parent: l.parent,
            level: l.level,
            has_children: l.children > 0,
        })
    }

    /// Snapshots of every level in id order.
    pub fn records(&self) -> Vec<HlRecord> {
        self.levels
            .iter()
            .enumerate()
            .filter_map(|(i, l)| {
                HlId::from_index(i).map(|id| HlRecord {
                    id,
                    parent: l.parent,
                    level: l.level,
                    has_children: l.children > 0,
                })
            })
            .collect()
    }

    /// `HL` segments for every level, in id order.
    pub fn segments(&self) -> Vec<Segment> {
        self.records().iter().map(HlRecord::to_segment).collect()
    }

    fn level(&self, id: HlId) -> HlResult<&Level> {
        self.levels.get(id.index()).ok_or(HlError::UnknownLevel(id))
    }
}
