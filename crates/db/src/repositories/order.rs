//! Event, customer and order writes.
//!
//! Reports only read; these are used by the seeder and by integration tests.

use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set, TransactionTrait};
use uuid::Uuid;

use crate::entities::{
    addresses, customers, events, kits, orders,
    sea_orm_active_enums::{OrderStatus, PaymentMethod},
};

/// Input for creating a customer with a delivery address.
#[derive(Debug, Clone)]
pub struct CreateCustomerInput {
    /// Full name.
    pub name: String,
    /// CPF, digits only or formatted.
    pub cpf: String,
    /// Street name.
    pub street: String,
    /// House number.
    pub number: String,
    /// Apartment, block, etc.
    pub complement: Option<String>,
    /// Neighborhood.
    pub neighborhood: String,
    /// City.
    pub city: String,
    /// Two-letter state code.
    pub state: String,
    /// CEP as entered.
    pub zip_code: String,
}

/// Input for one athlete kit.
#[derive(Debug, Clone)]
pub struct CreateKitInput {
    /// Athlete name.
    pub athlete_name: String,
    /// Athlete CPF.
    pub cpf: String,
    /// Shirt size label.
    pub shirt_size: String,
}

/// Input for creating an order with its kits.
#[derive(Debug, Clone)]
pub struct CreateOrderInput {
    /// Human-readable number, unique.
    pub order_number: String,
    /// Event.
    pub event_id: Uuid,
    /// Paying customer.
    pub customer_id: Uuid,
    /// Delivery address.
    pub address_id: Uuid,
    /// Initial status.
    pub status: OrderStatus,
    /// Order total.
    pub total_cost: Decimal,
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Kits in the order.
    pub kits: Vec<CreateKitInput>,
}

/// Customer and address IDs created together.
#[derive(Debug, Clone, Copy)]
pub struct CreatedCustomer {
    /// Customer ID.
    pub customer_id: Uuid,
    /// Address ID.
    pub address_id: Uuid,
}

/// Order repository.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    db: DatabaseConnection,
}

impl OrderRepository {
    /// Creates a new order repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an event.
    pub async fn create_event(&self, name: &str) -> Result<events::Model, DbErr> {
        events::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            created_at: Set(chrono::Utc::now().into()),
        }
        .insert(&self.db)
        .await
    }

    /// Creates a customer and their delivery address.
    pub async fn create_customer(
        &self,
        input: CreateCustomerInput,
    ) -> Result<CreatedCustomer, DbErr> {
        let txn = self.db.begin().await?;
        let now = chrono::Utc::now().into();
        let customer_id = Uuid::new_v4();
        let address_id = Uuid::new_v4();

        customers::ActiveModel {
            id: Set(customer_id),
            name: Set(input.name),
            cpf: Set(input.cpf),
            created_at: Set(now),
        }
        .insert(&txn)
        .await?;

        addresses::ActiveModel {
            id: Set(address_id),
            customer_id: Set(customer_id),
            street: Set(input.street),
            number: Set(input.number),
            complement: Set(input.complement),
            neighborhood: Set(input.neighborhood),
            city: Set(input.city),
            state: Set(input.state),
            zip_code: Set(input.zip_code),
            created_at: Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(CreatedCustomer {
            customer_id,
            address_id,
        })
    }

    /// Creates an order and its kits in one transaction.
    pub async fn create_order(&self, input: CreateOrderInput) -> Result<orders::Model, DbErr> {
        let txn = self.db.begin().await?;
        let now = chrono::Utc::now();
        let order_id = Uuid::new_v4();

        let order = orders::ActiveModel {
            id: Set(order_id),
            order_number: Set(input.order_number),
            event_id: Set(input.event_id),
            customer_id: Set(input.customer_id),
            address_id: Set(input.address_id),
            status: Set(input.status),
            total_cost: Set(input.total_cost),
            payment_method: Set(input.payment_method),
            created_at: Set(now.into()),
        }
        .insert(&txn)
        .await?;

        // Kits keep insertion order through created_at
        for (offset, kit) in (0i64..).zip(input.kits) {
            kits::ActiveModel {
                id: Set(Uuid::new_v4()),
                order_id: Set(order_id),
                athlete_name: Set(kit.athlete_name),
                cpf: Set(kit.cpf),
                shirt_size: Set(kit.shirt_size),
                created_at: Set((now + chrono::Duration::microseconds(offset)).into()),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(order)
    }
}
