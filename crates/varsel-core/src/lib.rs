//! Varsel Core - event decoding, aggregation state, and the event processor.
//!
//! This crate contains the processing logic for the varsel weather station
//! pipeline: decoding raw JSON event records into typed events, maintaining
//! running high/low temperature aggregates per station, and producing
//! snapshot/reset reports. It performs no I/O.

pub mod error;
pub mod event;
pub mod processor;
pub mod report;
pub mod store;

// Re-exports for convenience
pub use error::ProcessError;
pub use event::{Command, Event};
pub use processor::{process_events, Reports};
pub use report::Report;
pub use store::{AggregateStore, StationMetrics};
