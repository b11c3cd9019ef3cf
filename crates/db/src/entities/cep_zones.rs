//! `SeaORM` Entity for cep_zones table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "cep_zones")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub priority: i32,
    pub active: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::cep_zone_ranges::Entity")]
    CepZoneRanges,
}

impl Related<super::cep_zone_ranges::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CepZoneRanges.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
