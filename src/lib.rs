//! Penhub: Grouped Handwriting-Stroke Aggregation
//!
//! An in-memory store that collects stroke-point batches from classroom
//! devices, organized by group and by student, and serves them back by
//! student, by group, or as one flat list.

pub mod cli;
pub mod config;
pub mod error;
pub mod hub;
pub mod logging;
pub mod payload;
pub mod session;
pub mod store;
pub mod types;

pub use hub::StrokeHub;
pub use store::{IgnoreReason, IngestOutcome, JoinOutcome, StrokeStore, StudentStrokeRecord};
pub use types::GroupKey;
