use std::fmt;

use serde::{Deserialize, Serialize};

/// One semantic X12 segment: an identifier plus positional element values.
///
/// Element positions are load-bearing in X12, so an absent optional element is
/// stored as an empty string rather than dropped. Element 1 is the first value
/// after the identifier (`BEG01`), matching the way X12 references positions.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    id: String,
    elements: Vec<String>,
}

impl Segment {
    /// Create a segment with no elements.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            elements: Vec::new(),
        }
    }

    /// Create a segment from an identifier and an iterator of element values.
    pub fn with_elements<I, S>(id: impl Into<String>, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        Self {
            id: id.into(),
            elements: elements.into_iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Append an element value, builder style.
    pub fn element(mut self, value: impl ToString) -> Self {
        self.elements.push(value.to_string());
        self
    }

    /// Append an element value in place.
    pub fn push(&mut self, value: impl ToString) {
        self.elements.push(value.to_string());
    }

    /// The segment identifier (`ISA`, `GS`, `HL`, ...).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// All element values after the identifier.
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    /// Element at a one-based X12 position. Returns `None` when out of range.
    pub fn get(&self, position: usize) -> Option<&str> {
        position
            .checked_sub(1)
            .and_then(|i| self.elements.get(i))
            .map(String::as_str)
    }

    /// Number of elements, not counting the identifier.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the segment carries no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl fmt::Debug for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segment({}", self.id)?;
        for e in &self.elements {
            write!(f, "|{e}")?;
        }
        write!(f, ")")
    }
}

/// Build a [`Segment`] from an identifier and element expressions.
///
/// ```
/// use x12_types::segment;
///
/// let seg = segment!("REF", "DP", 1234);
/// assert_eq!(seg.get(2), Some("1234"));
/// ```
#[macro_export]
macro_rules! segment {
    ($id:expr $(, $el:expr)* $(,)?) => {
        $crate::Segment::new($id)$(.element($el))*
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_order() {
        let seg = Segment::new("N4").element("CHICAGO").element("IL").element("60601");
        assert_eq!(seg.id(), "N4");
        assert_eq!(seg.elements(), ["CHICAGO", "IL", "60601"]);
    }

    #[test]
    fn empty_elements_are_kept() {
        let seg = segment!("PID", "F", "", "", "", "WIDGET");
        assert_eq!(seg.len(), 5);
        assert_eq!(seg.get(2), Some(""));
        assert_eq!(seg.get(5), Some("WIDGET"));
    }

    #[test]
    fn positions_are_one_based() {
        let seg = segment!("SE", 5, "0001");
        assert_eq!(seg.get(0), None);
        assert_eq!(seg.get(1), Some("5"));
        assert_eq!(seg.get(2), Some("0001"));
        assert_eq!(seg.get(3), None);
    }

    #[test]
    fn with_elements_converts_values() {
        let seg = Segment::with_elements("AK9", ["A", "1", "1", "1"]);
        assert_eq!(seg.len(), 4);
        let seg = Segment::with_elements("CTT", [3u32]);
        assert_eq!(seg.get(1), Some("3"));
    }

    #[test]
    fn segment_without_elements() {
        let seg = segment!("LX");
        assert!(seg.is_empty());
    }

    #[test]
    fn debug_format() {
        let seg = segment!("HL", 2, 1, "O", 1);
        assert_eq!(format!("{seg:?}"), "Segment(HL|2|1|O|1)");
    }

    #[test]
    fn serde_roundtrip() {
        let seg = segment!("BEG", "00", "NE", "PO-1234567", "", "20240102");
        let json = serde_json::to_string(&seg).unwrap();
        let parsed: Segment = serde_json::from_str(&json).unwrap();
        assert_eq!(seg, parsed);
    }
}
