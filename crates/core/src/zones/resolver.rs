//! Postal-code to zone resolution.
//!
//! A CEP resolves to the active zone covering it with the lowest priority
//! value. Ties on priority fall back to the zone name, then the zone ID, so
//! the result never depends on the order zones were fetched in.

use std::cmp::Ordering;

use super::types::{Cep, ZoneDefinition};

/// Label rendered when no active zone covers a CEP.
pub const UNIDENTIFIED_ZONE: &str = "Não identificada";

/// Resolves a raw postal code against a set of zones.
///
/// Returns `None` when the code is not a valid CEP or when no active zone
/// covers it.
#[must_use]
pub fn resolve<'a>(zip_code: &str, zones: &'a [ZoneDefinition]) -> Option<&'a ZoneDefinition> {
    let cep = Cep::parse(zip_code).ok()?;
    resolve_cep(cep, zones)
}

/// Resolves an already parsed CEP against a set of zones.
#[must_use]
pub fn resolve_cep(cep: Cep, zones: &[ZoneDefinition]) -> Option<&ZoneDefinition> {
    zones
        .iter()
        .filter(|zone| zone.covers(cep))
        .min_by(|a, b| precedence(a, b))
}

/// Orders zones by how strongly they claim a CEP: priority, then name, then ID.
pub(crate) fn precedence(a: &ZoneDefinition, b: &ZoneDefinition) -> Ordering {
    a.priority
        .cmp(&b.priority)
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}
