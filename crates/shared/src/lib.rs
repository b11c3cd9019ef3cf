//! Shared types, errors, and configuration for KitRoute.
//!
//! This crate provides common types used across all other crates:
//! - BRL money formatting with decimal precision
//! - Application-wide error types
//! - Configuration management, including report export settings

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, CsvQuoting, PdfLayout, ReportsConfig};
pub use error::{AppError, AppResult};
pub use types::Money;
