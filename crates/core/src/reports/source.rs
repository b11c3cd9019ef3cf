//! Read-only data access consumed by the report pipeline.

use async_trait::async_trait;
use uuid::Uuid;

use super::error::ReportError;
use super::types::{Address, Customer, Event, Kit, Order, OrderQuery};
use crate::zones::ZoneDefinition;

/// Source of the records a report is built from.
///
/// Implementations only read. All methods may be called concurrently.
#[async_trait]
pub trait ReportDataSource: Send + Sync {
    /// Looks up an event.
    async fn get_event(&self, event_id: Uuid) -> Result<Option<Event>, ReportError>;

    /// Lists the orders matching `query`, ordered by order number.
    async fn list_orders(&self, query: &OrderQuery) -> Result<Vec<Order>, ReportError>;

    /// Lists the kits of an order in insertion order.
    async fn list_kits(&self, order_id: Uuid) -> Result<Vec<Kit>, ReportError>;

    /// Looks up an address.
    async fn get_address(&self, address_id: Uuid) -> Result<Option<Address>, ReportError>;

    /// Looks up a customer.
    async fn get_customer(&self, customer_id: Uuid) -> Result<Option<Customer>, ReportError>;

    /// Lists every zone definition, active or not.
    async fn list_zones(&self) -> Result<Vec<ZoneDefinition>, ReportError>;
}
