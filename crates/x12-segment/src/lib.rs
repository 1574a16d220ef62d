//! Segment encoding and document accumulation.
//!
//! - [`SegmentEncoder`]: renders one [`Segment`](x12_types::Segment) into
//!   delimited text
//! - [`Document`]: ordered list of rendered segments with positional insert
//! - [`Body`]: ordered list of body entries whose deferred segments and `HL`
//!   child flags are resolved in one final pass

pub mod body;
pub mod document;
pub mod encoder;
pub mod error;

pub use body::{format_cents, Body, Totals};
pub use document::Document;
pub use encoder::SegmentEncoder;
pub use error::{SegmentError, SegmentResult};
