//! Frozen zone snapshot used for one report run.

use std::sync::Arc;

use uuid::Uuid;

use super::resolver::{UNIDENTIFIED_ZONE, precedence, resolve};
use super::types::ZoneDefinition;

/// A read-only snapshot of every zone definition.
///
/// Load one per report call and share it by reference (or by cheap clone)
/// with every resolution in that call; zone edits made after the snapshot was
/// taken are not visible through it.
#[derive(Debug, Clone, Default)]
pub struct ZoneCatalog {
    zones: Arc<[ZoneDefinition]>,
}

impl ZoneCatalog {
    /// Freezes a list of zones into a catalog, ordered by precedence.
    #[must_use]
    pub fn new(mut zones: Vec<ZoneDefinition>) -> Self {
        zones.sort_by(precedence);
        Self {
            zones: zones.into(),
        }
    }

    /// Resolves a postal code to its zone.
    #[must_use]
    pub fn resolve(&self, zip_code: &str) -> Option<&ZoneDefinition> {
        resolve(zip_code, &self.zones)
    }

    /// Resolves a postal code to a zone name, or "Não identificada".
    #[must_use]
    pub fn zone_label(&self, zip_code: &str) -> &str {
        self.resolve(zip_code)
            .map_or(UNIDENTIFIED_ZONE, |zone| zone.name.as_str())
    }

    /// Returns the resolved zone ID if it is one of `zone_ids`.
    #[must_use]
    pub fn resolves_into(&self, zip_code: &str, zone_ids: &[Uuid]) -> bool {
        self.resolve(zip_code)
            .is_some_and(|zone| zone_ids.contains(&zone.id))
    }

    /// Returns all zones in precedence order, inactive ones included.
    #[must_use]
    pub fn zones(&self) -> &[ZoneDefinition] {
        &self.zones
    }

    /// Returns the number of zones in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Returns true if the snapshot holds no zones.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
