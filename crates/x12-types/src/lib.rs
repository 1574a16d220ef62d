//! Foundation types for x12gen.
//!
//! This crate provides the structural vocabulary shared by every other x12gen
//! crate. It knows nothing about envelopes or rendering; it only describes
//! what a segment, a delimiter set or a control number *is*.
//!
//! # Key Types
//!
//! - [`Segment`]: Identifier plus positional element values
//! - [`Delimiters`]: Element separator, segment terminator, sub-element separator
//! - [`ControlNumber`]: Fixed-width, zero-padded envelope control number
//! - [`TransactionType`]: Closed set of supported transaction sets
//! - [`VersionFamily`]: 4010 or 5010 interchange conventions
//! - [`LineOfBusiness`]: Optional restriction of the healthcare data pools
//! - [`UsageIndicator`]: Test or production interchange

pub mod control;
pub mod datetime;
pub mod delimiters;
pub mod error;
pub mod interchange;
pub mod line_of_business;
pub mod segment;
pub mod transaction;

pub use control::{ControlNumber, ControlNumberKind};
pub use delimiters::Delimiters;
pub use error::{TypeError, TypeResult};
pub use interchange::{fixed_width, UsageIndicator, INTERCHANGE_ID_WIDTH};
pub use line_of_business::LineOfBusiness;
pub use segment::Segment;
pub use transaction::{TransactionType, VersionFamily};
