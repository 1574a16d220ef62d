use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};

/// The three delimiter characters fixed for one document.
///
/// All three must be mutually distinct and must not be alphanumeric or a space,
/// since either would be indistinguishable from element data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Delimiters {
    /// Separates elements within a segment (`*`).
    pub element: char,
    /// Terminates each segment (`~`).
    pub segment: char,
    /// Separates components of a composite element (`:` or `^`).
    pub sub_element: char,
}

impl Delimiters {
    /// Conventional 4010 delimiters: `*`, `~`, `:`.
    pub const X12_4010: Self = Self {
        element: '*',
        segment: '~',
        sub_element: ':',
    };

    /// Delimiters used by the 5010 healthcare family: `*`, `~`, `^`.
    pub const X12_5010: Self = Self {
        element: '*',
        segment: '~',
        sub_element: '^',
    };

    /// Create a validated delimiter set.
    pub fn new(element: char, segment: char, sub_element: char) -> TypeResult<Self> {
        if element == segment || element == sub_element || segment == sub_element {
            return Err(TypeError::InvalidDelimiters(format!(
                "delimiters must be distinct: {element:?} {segment:?} {sub_element:?}"
            )));
        }
        for c in [element, segment, sub_element] {
            if c.is_alphanumeric() || c == ' ' {
                return Err(TypeError::InvalidDelimiters(format!(
                    "{c:?} cannot be used as a delimiter"
                )));
            }
        }
        Ok(Self {
            element,
            segment,
            sub_element,
        })
    }

    /// Join composite components with the sub-element separator.
    pub fn composite<S: AsRef<str>>(&self, parts: &[S]) -> String {
        let mut out = String::new();
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                out.push(self.sub_element);
            }
            out.push_str(part.as_ref());
        }
        out
    }

    /// Returns `true` if `value` contains the element separator or the segment
    /// terminator. The sub-element separator is legal inside composites.
    pub fn collides_with(&self, value: &str) -> bool {
        value.contains(self.element) || value.contains(self.segment)
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Self::X12_4010
    }
}
