//! Event report generation.
//!
//! Three reports are produced for an event:
//! - Kits: one row per athlete kit, for pickup lists
//! - Circuit: one row per order, in the route-planner import layout
//! - Orders: one row per order, with its resolved delivery zone
//!
//! Data is read through [`ReportDataSource`], so the same pipeline runs
//! against the database or the in-memory store used by tests.

pub mod assemblers;
pub mod error;
pub mod format;
pub mod memory;
pub mod service;
pub mod source;
pub mod types;

pub use error::ReportError;
pub use memory::InMemorySource;
pub use service::ReportService;
pub use source::ReportDataSource;
pub use types::*;

#[cfg(test)]
mod service_tests;
