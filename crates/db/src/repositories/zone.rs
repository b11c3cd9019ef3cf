//! CEP zone repository.

use kitroute_core::zones::{CepRange, ZoneDefinition, ZoneError};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set, TransactionTrait,
};
use tracing::warn;
use uuid::Uuid;

use crate::entities::{cep_zone_ranges, cep_zones};

/// Error types for zone operations.
#[derive(Debug, thiserror::Error)]
pub enum ZoneStoreError {
    /// Priority below 1, a range bound that is not a CEP, or an inverted range.
    #[error(transparent)]
    Invalid(#[from] ZoneError),

    /// Zone not found.
    #[error("Zone not found: {0}")]
    NotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for creating a zone.
#[derive(Debug, Clone)]
pub struct CreateZoneInput {
    /// Display name.
    pub name: String,
    /// Lower value wins when ranges overlap.
    pub priority: i32,
    /// Inactive zones never match.
    pub active: bool,
    /// Inclusive `(start, end)` CEP bounds.
    pub ranges: Vec<(String, String)>,
}

/// Zone repository.
#[derive(Debug, Clone)]
pub struct ZoneRepository {
    db: DatabaseConnection,
}

impl ZoneRepository {
    /// Creates a new zone repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a zone with its ranges.
    ///
    /// Priority and ranges are validated before anything is written.
    pub async fn create(&self, input: CreateZoneInput) -> Result<ZoneDefinition, ZoneStoreError> {
        let ranges = validate_input(&input)?;

        let txn = self.db.begin().await?;
        let zone_id = Uuid::new_v4();

        cep_zones::ActiveModel {
            id: Set(zone_id),
            name: Set(input.name.clone()),
            priority: Set(input.priority),
            active: Set(input.active),
            created_at: Set(chrono::Utc::now().into()),
        }
        .insert(&txn)
        .await?;

        for range in &ranges {
            cep_zone_ranges::ActiveModel {
                id: Set(Uuid::new_v4()),
                zone_id: Set(zone_id),
                start_cep: Set(range.start.to_string()),
                end_cep: Set(range.end.to_string()),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(ZoneDefinition {
            id: zone_id,
            name: input.name,
            priority: input.priority,
            active: input.active,
            ranges,
        })
    }

    /// Activates or deactivates a zone.
    pub async fn set_active(&self, zone_id: Uuid, active: bool) -> Result<(), ZoneStoreError> {
        let zone = cep_zones::Entity::find_by_id(zone_id)
            .one(&self.db)
            .await?
            .ok_or(ZoneStoreError::NotFound(zone_id))?;

        let mut zone: cep_zones::ActiveModel = zone.into();
        zone.active = Set(active);
        zone.update(&self.db).await?;
        Ok(())
    }

    /// Loads every zone with its ranges.
    ///
    /// Ranges with unparseable or inverted bounds are skipped with a warning;
    /// the rest of the zone is kept.
    pub async fn load_definitions(&self) -> Result<Vec<ZoneDefinition>, DbErr> {
        let zones = cep_zones::Entity::find()
            .order_by_asc(cep_zones::Column::Id)
            .find_with_related(cep_zone_ranges::Entity)
            .all(&self.db)
            .await?;

        Ok(zones
            .into_iter()
            .map(|(zone, ranges)| to_definition(zone, ranges))
            .collect())
    }
}

/// Checks the priority and parses the ranges of a new zone.
fn validate_input(input: &CreateZoneInput) -> Result<Vec<CepRange>, ZoneError> {
    ZoneDefinition::check_priority(input.priority)?;
    input
        .ranges
        .iter()
        .map(|(start, end)| CepRange::parse(start, end))
        .collect()
}

/// Converts stored rows, dropping malformed ranges.
pub(crate) fn to_definition(
    zone: cep_zones::Model,
    ranges: Vec<cep_zone_ranges::Model>,
) -> ZoneDefinition {
    let ranges = ranges
        .into_iter()
        .filter_map(|range| match CepRange::parse(&range.start_cep, &range.end_cep) {
            Ok(parsed) => Some(parsed),
            Err(error) => {
                warn!(
                    zone_id = %zone.id,
                    zone = %zone.name,
                    range_id = %range.id,
                    %error,
                    "Skipping malformed CEP range"
                );
                None
            }
        })
        .collect();

    ZoneDefinition {
        id: zone.id,
        name: zone.name,
        priority: zone.priority,
        active: zone.active,
        ranges,
    }
}
