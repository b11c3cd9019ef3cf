//! Database-backed report data source.

use async_trait::async_trait;
use chrono::Utc;
use kitroute_core::reports::{
    Address, Customer, Event, Kit, Order, OrderQuery, ReportDataSource, ReportError,
};
use kitroute_core::zones::ZoneDefinition;
use kitroute_shared::Money;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use super::zone::ZoneRepository;
use crate::entities::{
    addresses, customers, events, kits, orders, sea_orm_active_enums::OrderStatus,
};

/// Reads report records from Postgres.
#[derive(Debug, Clone)]
pub struct ReportStore {
    db: DatabaseConnection,
    zones: ZoneRepository,
}

impl ReportStore {
    /// Creates a new report store.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            zones: ZoneRepository::new(db.clone()),
            db,
        }
    }
}

/// Builds the single predicate for an order query.
pub fn order_condition(query: &OrderQuery) -> Condition {
    Condition::all()
        .add(orders::Column::EventId.eq(query.event_id))
        .add_option(query.statuses.as_ref().map(|statuses| {
            orders::Column::Status.is_in(statuses.iter().copied().map(OrderStatus::from))
        }))
}

#[async_trait]
impl ReportDataSource for ReportStore {
    async fn get_event(&self, event_id: Uuid) -> Result<Option<Event>, ReportError> {
        let event = events::Entity::find_by_id(event_id)
            .one(&self.db)
            .await
            .map_err(ReportError::data_access)?;

        Ok(event.map(|e| Event {
            id: e.id,
            name: e.name,
        }))
    }

    async fn list_orders(&self, query: &OrderQuery) -> Result<Vec<Order>, ReportError> {
        let orders = orders::Entity::find()
            .filter(order_condition(query))
            .order_by_asc(orders::Column::OrderNumber)
            .all(&self.db)
            .await
            .map_err(ReportError::data_access)?;

        Ok(orders.into_iter().map(to_order).collect())
    }

    async fn list_kits(&self, order_id: Uuid) -> Result<Vec<Kit>, ReportError> {
        let kits = kits::Entity::find()
            .filter(kits::Column::OrderId.eq(order_id))
            .order_by_asc(kits::Column::CreatedAt)
            .order_by_asc(kits::Column::Id)
            .all(&self.db)
            .await
            .map_err(ReportError::data_access)?;

        Ok(kits
            .into_iter()
            .map(|k| Kit {
                order_id: k.order_id,
                athlete_name: k.athlete_name,
                cpf: k.cpf,
                shirt_size: k.shirt_size,
            })
            .collect())
    }

    async fn get_address(&self, address_id: Uuid) -> Result<Option<Address>, ReportError> {
        let address = addresses::Entity::find_by_id(address_id)
            .one(&self.db)
            .await
            .map_err(ReportError::data_access)?;

        Ok(address.map(|a| Address {
            street: a.street,
            number: a.number,
            complement: a.complement,
            neighborhood: a.neighborhood,
            city: a.city,
            state: a.state,
            zip_code: a.zip_code,
        }))
    }

    async fn get_customer(&self, customer_id: Uuid) -> Result<Option<Customer>, ReportError> {
        let customer = customers::Entity::find_by_id(customer_id)
            .one(&self.db)
            .await
            .map_err(ReportError::data_access)?;

        Ok(customer.map(|c| Customer {
            name: c.name,
            cpf: c.cpf,
        }))
    }

    async fn list_zones(&self) -> Result<Vec<ZoneDefinition>, ReportError> {
        self.zones
            .load_definitions()
            .await
            .map_err(ReportError::data_access)
    }
}

fn to_order(model: orders::Model) -> Order {
    Order {
        id: model.id,
        order_number: model.order_number,
        event_id: model.event_id,
        customer_id: model.customer_id,
        address_id: model.address_id,
        status: model.status.into(),
        total_cost: Money::new(model.total_cost),
        payment_method: model.payment_method.into(),
        created_at: model.created_at.with_timezone(&Utc),
    }
}
