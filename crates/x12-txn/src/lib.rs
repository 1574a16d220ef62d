//! Transaction-set body generators for x12gen.
//!
//! Each supported [`TransactionType`](x12_types::TransactionType) has a
//! generator that walks a small random domain model (an order, a shipment, a
//! batch of claims) and emits the ordered body segments plus the interchange
//! parties. Generators never see the envelope; [`generate_body`] is the single
//! dispatch point and the caller hands the result to the envelope builder.
//!
//! # Key Types
//!
//! - [`GenContext`]: the random source, clock and data pool for one document
//! - [`DataPool`]: sample data, optionally restricted to one line of business
//! - [`GeneratedBody`]: segments plus sender and receiver identifiers

pub mod context;
pub mod error;
pub mod generators;
pub mod pool;

pub use context::{party_id, GenContext};
pub use error::{TxnError, TxnResult};
pub use generators::{generate_body, GeneratedBody};
pub use pool::DataPool;
