//! Demo data seeder for KitRoute development.
//!
//! Seeds a demo event with delivery zones, customers and orders so every
//! report has rows to show.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use kitroute_db::entities::events;
use kitroute_db::entities::sea_orm_active_enums::{OrderStatus, PaymentMethod};
use kitroute_db::repositories::{
    CreateCustomerInput, CreateKitInput, CreateOrderInput, CreateZoneInput,
};
use kitroute_db::{OrderRepository, ZoneRepository};

const DEMO_EVENT: &str = "Corrida de São João 2025";

/// Price of one kit delivery.
const KIT_PRICE_CENTS: i64 = 8990;

/// (name, priority, active, ranges)
const ZONES: &[(&str, i32, bool, &[(&str, &str)])] = &[
    ("Centro", 1, true, &[("58010-000", "58019-999")]),
    ("Orla", 1, true, &[("58030-000", "58039-999"), ("58045-000", "58045-999")]),
    ("Zona Sul", 2, true, &[("58000-000", "58099-999")]),
    ("Cabedelo", 3, false, &[("58100-000", "58109-999")]),
];

struct DemoOrder {
    customer: &'static str,
    cpf: &'static str,
    street: &'static str,
    neighborhood: &'static str,
    zip_code: &'static str,
    status: OrderStatus,
    payment: PaymentMethod,
    athletes: &'static [(&'static str, &'static str)],
}

const ORDERS: &[DemoOrder] = &[
    DemoOrder {
        customer: "Carlos Pereira",
        cpf: "12345678901",
        street: "Rua das Trincheiras",
        neighborhood: "Centro",
        zip_code: "58011-000",
        status: OrderStatus::Confirmado,
        payment: PaymentMethod::Pix,
        athletes: &[("Ana Souza", "P"), ("Bruno Lima", "M")],
    },
    DemoOrder {
        customer: "Mariana Costa",
        cpf: "23456789012",
        street: "Av. Cabo Branco",
        neighborhood: "Cabo Branco",
        zip_code: "58045-010",
        status: OrderStatus::EmSeparacao,
        payment: PaymentMethod::CartaoCredito,
        athletes: &[("Mariana Costa", "P")],
    },
    DemoOrder {
        customer: "José \"Zé\" Alves",
        cpf: "34567890123",
        street: "Av. Epitácio Pessoa",
        neighborhood: "Tambaú",
        zip_code: "58039-000",
        status: OrderStatus::EmTransito,
        payment: PaymentMethod::Boleto,
        athletes: &[("José Alves", "G"), ("Luiza Alves", "PP"), ("Pedro Alves", "M")],
    },
    DemoOrder {
        customer: "Fernanda Ribeiro",
        cpf: "45678901234",
        street: "Rua Josefa Taveira",
        neighborhood: "Mangabeira",
        zip_code: "58055-000",
        status: OrderStatus::Entregue,
        payment: PaymentMethod::Pix,
        athletes: &[("Fernanda Ribeiro", "M")],
    },
    DemoOrder {
        customer: "Ricardo Nunes",
        cpf: "56789012345",
        street: "Rua Beira Rio",
        neighborhood: "Camboinha",
        zip_code: "58100-500",
        status: OrderStatus::AguardandoPagamento,
        payment: PaymentMethod::Dinheiro,
        athletes: &[("Ricardo Nunes", "GG")],
    },
    DemoOrder {
        customer: "Patrícia Gomes",
        cpf: "67890123456",
        street: "Rua Desembargador Souto Maior",
        neighborhood: "Centro",
        zip_code: "58013-200",
        status: OrderStatus::Cancelado,
        payment: PaymentMethod::Pix,
        athletes: &[("Patrícia Gomes", "P")],
    },
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

    println!("Connecting to database...");
    let db = kitroute_db::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    if demo_event_exists(&db).await? {
        println!("  Demo event already exists, skipping...");
        return Ok(());
    }

    println!("Seeding zones...");
    seed_zones(&db).await?;

    println!("Seeding demo event and orders...");
    seed_orders(&db).await?;

    println!("Seeding complete!");
    Ok(())
}

async fn demo_event_exists(db: &DatabaseConnection) -> anyhow::Result<bool> {
    let existing = events::Entity::find()
        .filter(events::Column::Name.eq(DEMO_EVENT))
        .one(db)
        .await?;
    Ok(existing.is_some())
}

async fn seed_zones(db: &DatabaseConnection) -> anyhow::Result<()> {
    let repo = ZoneRepository::new(db.clone());

    for &(name, priority, active, ranges) in ZONES {
        repo.create(CreateZoneInput {
            name: name.to_string(),
            priority,
            active,
            ranges: ranges
                .iter()
                .map(|&(start, end)| (start.to_string(), end.to_string()))
                .collect(),
        })
        .await
        .with_context(|| format!("Failed to create zone {name}"))?;
        println!("  Zone {name} (priority {priority})");
    }

    Ok(())
}

async fn seed_orders(db: &DatabaseConnection) -> anyhow::Result<()> {
    let repo = OrderRepository::new(db.clone());
    let event = repo.create_event(DEMO_EVENT).await?;

    for (number, demo) in (1..).zip(ORDERS) {
        let customer = repo
            .create_customer(CreateCustomerInput {
                name: demo.customer.to_string(),
                cpf: demo.cpf.to_string(),
                street: demo.street.to_string(),
                number: (100 * number).to_string(),
                complement: None,
                neighborhood: demo.neighborhood.to_string(),
                city: "João Pessoa".to_string(),
                state: "PB".to_string(),
                zip_code: demo.zip_code.to_string(),
            })
            .await?;

        let kit_count = i64::try_from(demo.athletes.len())?;
        let order = repo
            .create_order(CreateOrderInput {
                order_number: format!("KR25-{number:04}"),
                event_id: event.id,
                customer_id: customer.customer_id,
                address_id: customer.address_id,
                status: demo.status,
                total_cost: Decimal::new(KIT_PRICE_CENTS * kit_count, 2),
                payment_method: demo.payment,
                kits: demo
                    .athletes
                    .iter()
                    .map(|&(name, size)| CreateKitInput {
                        athlete_name: name.to_string(),
                        cpf: demo.cpf.to_string(),
                        shirt_size: size.to_string(),
                    })
                    .collect(),
            })
            .await?;
        println!("  Order {} ({} kits)", order.order_number, demo.athletes.len());
    }

    println!("  Event {} ({})", event.name, event.id);
    Ok(())
}
