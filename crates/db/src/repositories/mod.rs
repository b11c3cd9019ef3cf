//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod order;
pub mod report_store;
pub mod zone;

pub use order::{
    CreateCustomerInput, CreateKitInput, CreateOrderInput, CreatedCustomer, OrderRepository,
};
pub use report_store::{ReportStore, order_condition};
pub use zone::{CreateZoneInput, ZoneRepository, ZoneStoreError};
