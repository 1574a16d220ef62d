use x12_types::{Delimiters, Segment};

/// Renders segments as `ID*E1*E2*...*En~`.
///
/// Empty elements render as zero-length fields so positions are preserved.
/// Values are written verbatim: a value containing a delimiter produces
/// malformed output. Callers that need a guarantee check
/// [`Delimiters::collides_with`] first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SegmentEncoder {
    delimiters: Delimiters,
}

impl SegmentEncoder {
    pub fn new(delimiters: Delimiters) -> Self {
        Self { delimiters }
    }

    pub fn delimiters(&self) -> Delimiters {
        self.delimiters
    }

    /// Encode a segment, terminator included.
    pub fn encode(&self, segment: &Segment) -> String {
        self.encode_parts(segment.id(), segment.elements())
    }

    /// Encode an identifier and element values without building a [`Segment`].
    pub fn encode_parts<S: AsRef<str>>(&self, id: &str, elements: &[S]) -> String {
        let len = id.len() + elements.iter().map(|e| e.as_ref().len() + 1).sum::<usize>() + 1;
        let mut out = String::with_capacity(len);
        out.push_str(id);
        for element in elements {
            out.push(self.delimiters.element);
            out.push_str(element.as_ref());
        }
        out.push(self.delimiters.segment);
        out
    }
}
