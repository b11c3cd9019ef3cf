//! `SeaORM` entity definitions.

pub mod addresses;
pub mod cep_zone_ranges;
pub mod cep_zones;
pub mod customers;
pub mod events;
pub mod kits;
pub mod orders;
pub mod sea_orm_active_enums;
