//! `SeaORM` Entity for cep_zone_ranges table.
//!
//! Bounds are stored as entered; they are parsed when zones are loaded.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "cep_zone_ranges")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub zone_id: Uuid,
    pub start_cep: String,
    pub end_cep: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cep_zones::Entity",
        from = "Column::ZoneId",
        to = "super::cep_zones::Column::Id"
    )]
    CepZones,
}

impl Related<super::cep_zones::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CepZones.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
