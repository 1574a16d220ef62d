//! Hierarchical level (HL) loop bookkeeping.
//!
//! Several transaction sets express parent/child structure through `HL`
//! segments: a shipment owns orders which own items, a billing provider owns
//! subscribers which own patients. [`HlTracker`] hands out the identifiers for
//! those levels and remembers who their parents are; [`HierarchyValidator`]
//! checks a rendered segment list for the same invariants after the fact.
//!
//! # Invariants
//!
//! - Identifiers are dense and strictly increasing from 1 within a
//!   transaction set.
//! - A parent reference always names a level opened earlier, so the levels
//!   form a forest and never a cycle.

pub mod error;
pub mod level;
pub mod tracker;
pub mod validation;

pub use error::{HlError, HlResult};
pub use level::{HlId, LevelCode};
pub use tracker::{HlRecord, HlTracker};
pub use validation::{ForestReport, HierarchyValidator, HlViolation, HlViolationKind};
