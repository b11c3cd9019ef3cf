//! Core logic for KitRoute.
//!
//! This crate has no web or database dependencies. Records are read through
//! the [`reports::ReportDataSource`] trait, which the `kitroute-db` crate
//! implements over Postgres.
//!
//! # Modules
//!
//! - `zones` - CEP parsing and delivery zone resolution
//! - `reports` - Kits, Circuit and Orders report assembly
//! - `export` - Excel, CSV and PDF encoders

pub mod export;
pub mod reports;
pub mod zones;
