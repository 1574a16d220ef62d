//! High-level API for x12gen.
//!
//! Ties the body generators to the envelope builder under one
//! [`GeneratorConfig`]. This is the entry point for applications and for the
//! `x12gen` command line.

pub mod batch;
pub mod config;
pub mod error;
pub mod generator;

pub use batch::{sample_file_name, write_document, BatchMode, BatchReport, SkippedType, WrittenFile};
pub use config::GeneratorConfig;
pub use error::{SdkError, SdkResult};
pub use generator::{generate_document, GeneratedDocument, Generator};

// Re-export key types
pub use x12_envelope::{ControlNumbers, EnvelopeReport, EnvelopeSpec};
pub use x12_types::{LineOfBusiness, TransactionType, UsageIndicator};
