//! Delivery zones keyed by CEP ranges.
//!
//! This module is a leaf: it depends on nothing else in the crate, so report
//! assemblers and the pricing lookup both import it directly.

pub mod catalog;
pub mod error;
pub mod resolver;
pub mod types;

#[cfg(test)]
mod props;

pub use catalog::ZoneCatalog;
pub use error::ZoneError;
pub use resolver::{UNIDENTIFIED_ZONE, resolve, resolve_cep};
pub use types::{Cep, CepRange, ZoneDefinition};
