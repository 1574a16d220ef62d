use crate::error::{SegmentError, SegmentResult};

/// Ordered list of already-rendered segments.
///
/// Each entry carries its own terminator, so [`render`](Document::render)
/// only chooses between a compact join and a newline join for readability.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    segments: Vec<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rendered segment.
    pub fn append(&mut self, rendered: String) {
        self.segments.push(rendered);
    }

    /// Insert a rendered segment before position `index`. `index == len()`
    /// appends.
    pub fn insert_at(&mut self, index: usize, rendered: String) -> SegmentResult<()> {
        if index > self.segments.len() {
            return Err(SegmentError::InsertOutOfBounds {
                index,
                len: self.segments.len(),
            });
        }
        self.segments.insert(index, rendered);
        Ok(())
    }

    /// Number of segments appended so far.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Join every segment. Pretty mode puts a newline between segments; the
    /// output carries no trailing newline in either mode.
    pub fn render(&self, pretty: bool) -> String {
        self.segments.join(if pretty { "\n" } else { "" })
    }
}
