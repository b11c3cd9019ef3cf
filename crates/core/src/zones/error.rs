//! Zone error types.

use thiserror::Error;

use super::types::Cep;

/// Errors raised while reading zone data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ZoneError {
    /// Value is not an eight-digit CEP.
    #[error("Invalid CEP: {0:?}")]
    InvalidCep(String),

    /// Range start is greater than range end.
    #[error("Invalid CEP range: start {start} is after end {end}")]
    InvertedRange {
        /// Start bound.
        start: Cep,
        /// End bound.
        end: Cep,
    },

    /// Priority is below [`ZoneDefinition::HIGHEST_PRIORITY`].
    ///
    /// [`ZoneDefinition::HIGHEST_PRIORITY`]: super::ZoneDefinition::HIGHEST_PRIORITY
    #[error("Invalid zone priority {0}: must be 1 or greater")]
    InvalidPriority(i32),
}
