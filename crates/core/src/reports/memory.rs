//! In-memory report data source.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::error::ReportError;
use super::source::ReportDataSource;
use super::types::{Address, Customer, Event, Kit, Order, OrderQuery};
use crate::zones::ZoneDefinition;

#[derive(Default)]
struct Records {
    events: HashMap<Uuid, Event>,
    orders: Vec<Order>,
    kits: Vec<Kit>,
    addresses: HashMap<Uuid, Address>,
    customers: HashMap<Uuid, Customer>,
    zones: Vec<ZoneDefinition>,
}

/// In-memory data source for testing and demos.
///
/// Provides the same interface as the database-backed store.
#[derive(Clone, Default)]
pub struct InMemorySource {
    records: Arc<RwLock<Records>>,
    zone_loads: Arc<AtomicUsize>,
}

impl InMemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an event.
    pub async fn insert_event(&self, event: Event) {
        self.records.write().await.events.insert(event.id, event);
    }

    /// Adds an order.
    pub async fn insert_order(&self, order: Order) {
        self.records.write().await.orders.push(order);
    }

    /// Adds a kit.
    pub async fn insert_kit(&self, kit: Kit) {
        self.records.write().await.kits.push(kit);
    }

    /// Adds an address under `id`.
    pub async fn insert_address(&self, id: Uuid, address: Address) {
        self.records.write().await.addresses.insert(id, address);
    }

    /// Adds a customer under `id`.
    pub async fn insert_customer(&self, id: Uuid, customer: Customer) {
        self.records.write().await.customers.insert(id, customer);
    }

    /// Adds a zone.
    pub async fn insert_zone(&self, zone: ZoneDefinition) {
        self.records.write().await.zones.push(zone);
    }

    /// Sets the active flag of a zone.
    pub async fn set_zone_active(&self, zone_id: Uuid, active: bool) {
        let mut records = self.records.write().await;
        if let Some(zone) = records.zones.iter_mut().find(|z| z.id == zone_id) {
            zone.active = active;
        }
    }

    /// Returns how many times the zone list was loaded.
    pub fn zone_loads(&self) -> usize {
        self.zone_loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReportDataSource for InMemorySource {
    async fn get_event(&self, event_id: Uuid) -> Result<Option<Event>, ReportError> {
        Ok(self.records.read().await.events.get(&event_id).cloned())
    }

    async fn list_orders(&self, query: &OrderQuery) -> Result<Vec<Order>, ReportError> {
        let records = self.records.read().await;
        let mut orders: Vec<Order> = records
            .orders
            .iter()
            .filter(|order| query.matches(order))
            .cloned()
            .collect();
        orders.sort_by(|a, b| a.order_number.cmp(&b.order_number));
        Ok(orders)
    }

    async fn list_kits(&self, order_id: Uuid) -> Result<Vec<Kit>, ReportError> {
        Ok(self
            .records
            .read()
            .await
            .kits
            .iter()
            .filter(|kit| kit.order_id == order_id)
            .cloned()
            .collect())
    }

    async fn get_address(&self, address_id: Uuid) -> Result<Option<Address>, ReportError> {
        Ok(self.records.read().await.addresses.get(&address_id).cloned())
    }

    async fn get_customer(&self, customer_id: Uuid) -> Result<Option<Customer>, ReportError> {
        Ok(self.records.read().await.customers.get(&customer_id).cloned())
    }

    async fn list_zones(&self) -> Result<Vec<ZoneDefinition>, ReportError> {
        self.zone_loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.read().await.zones.clone())
    }
}
