//! CEP delivery zones and their ranges.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(CEP_ZONES_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "DROP TABLE IF EXISTS cep_zone_ranges CASCADE; DROP TABLE IF EXISTS cep_zones CASCADE;",
        )
        .await?;
        Ok(())
    }
}

const CEP_ZONES_SQL: &str = r"
CREATE TABLE cep_zones (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(255) NOT NULL,
    -- Lower value wins when ranges overlap
    priority INTEGER NOT NULL DEFAULT 1 CHECK (priority >= 1),
    active BOOLEAN NOT NULL DEFAULT TRUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

-- Bounds are parsed when zones are loaded; malformed rows are skipped
CREATE TABLE cep_zone_ranges (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    zone_id UUID NOT NULL REFERENCES cep_zones(id) ON DELETE CASCADE,
    start_cep VARCHAR(16) NOT NULL,
    end_cep VARCHAR(16) NOT NULL
);

CREATE INDEX idx_cep_zone_ranges_zone ON cep_zone_ranges(zone_id);
";
