//! Kits report: one row per kit.

use tracing::debug;

use super::{AssemblyContext, fetch_address, fetch_customer, for_each_order};
use crate::reports::error::ReportError;
use crate::reports::format::{format_cpf, single_line_address};
use crate::reports::types::KitReportRow;

/// Prefix of the product column.
pub const KIT_PRODUCT_PREFIX: &str = "[Retirada do Kit] ";

/// Builds the Kits report rows, sorted by order number.
///
/// The zone filter does not apply to this report. Kits keep their insertion
/// order within an order because the sort is stable.
pub async fn assemble_kits(ctx: &AssemblyContext<'_>) -> Result<Vec<KitReportRow>, ReportError> {
    let orders = ctx.load_orders().await?;
    let product_label = format!("{KIT_PRODUCT_PREFIX}{}", ctx.event.name);
    let product_label = product_label.as_str();

    let per_order = for_each_order(&orders, ctx.concurrency, |order| async move {
        let kits = ctx.source.list_kits(order.id).await?;
        if kits.is_empty() {
            return Ok(Vec::new());
        }

        let customer = fetch_customer(ctx.source, order).await?;
        let delivery_address = single_line_address(&fetch_address(ctx.source, order).await?);

        Ok(kits
            .into_iter()
            .map(|kit| KitReportRow {
                order_number: order.order_number.clone(),
                athlete_name: kit.athlete_name,
                cpf: format_cpf(&kit.cpf),
                shirt_size: kit.shirt_size,
                product_label: product_label.to_string(),
                customer_name: customer.name.clone(),
                delivery_address: delivery_address.clone(),
            })
            .collect::<Vec<_>>())
    })
    .await?;

    let mut rows: Vec<KitReportRow> = per_order.into_iter().flatten().collect();
    rows.sort_by(|a, b| a.order_number.cmp(&b.order_number));

    debug!(orders = orders.len(), kits = rows.len(), "Assembled kits report");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::assemblers::fixtures::Seeded;
    use crate::reports::types::{OrderStatus, ReportFilters};
    use crate::zones::ZoneCatalog;

    async fn run(seeded: &Seeded, filters: &ReportFilters, concurrency: usize) -> Vec<KitReportRow> {
        let catalog = ZoneCatalog::default();
        let ctx = AssemblyContext {
            source: &seeded.source,
            event: &seeded.event,
            filters,
            catalog: &catalog,
            concurrency,
        };
        assemble_kits(&ctx).await.unwrap()
    }

    #[tokio::test]
    async fn test_status_filter_keeps_only_matching_kits() {
        let seeded = Seeded::new().await;
        seeded
            .order(
                "KR25-0001",
                OrderStatus::Confirmado,
                "58010000",
                &[("Ana Souza", "P"), ("Bruno Lima", "G")],
            )
            .await;
        seeded
            .order(
                "KR25-0002",
                OrderStatus::Cancelado,
                "58010000",
                &[("Carla Dias", "M")],
            )
            .await;

        let filters = ReportFilters::new().with_statuses([OrderStatus::Confirmado]);
        let rows = run(&seeded, &filters, 4).await;

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.order_number == "KR25-0001"));
    }

    #[tokio::test]
    async fn test_one_row_per_kit_sorted_by_order_number() {
        let seeded = Seeded::new().await;
        seeded
            .order("KR25-0003", OrderStatus::Confirmado, "58010000", &[("Davi", "M")])
            .await;
        seeded
            .order(
                "KR25-0001",
                OrderStatus::Confirmado,
                "58010000",
                &[("Ana", "P"), ("Ana", "P")],
            )
            .await;
        seeded
            .order("KR25-0002", OrderStatus::EmTransito, "58010000", &[])
            .await;

        let rows = run(&seeded, &ReportFilters::new(), 1).await;

        let numbers: Vec<_> = rows.iter().map(|r| r.order_number.as_str()).collect();
        assert_eq!(numbers, vec!["KR25-0001", "KR25-0001", "KR25-0003"]);
    }

    #[tokio::test]
    async fn test_row_fields_are_formatted() {
        let seeded = Seeded::new().await;
        seeded
            .order("KR25-0001", OrderStatus::Confirmado, "58010000", &[("Ana Souza", "P")])
            .await;

        let rows = run(&seeded, &ReportFilters::new(), 2).await;
        let row = &rows[0];

        assert_eq!(row.cpf, "987.654.321-00");
        assert_eq!(row.product_label, "[Retirada do Kit] Corrida de São João");
        assert_eq!(row.customer_name, "Cliente KR25-0001");
        assert_eq!(
            row.delivery_address,
            "Rua das Trincheiras, 120 - Centro, João Pessoa/PB"
        );
    }

    #[tokio::test]
    async fn test_concurrency_does_not_change_output() {
        let seeded = Seeded::new().await;
        for i in (1..=12).rev() {
            seeded
                .order(
                    &format!("KR25-{i:04}"),
                    OrderStatus::Confirmado,
                    "58010000",
                    &[("Atleta A", "P"), ("Atleta B", "M")],
                )
                .await;
        }

        let sequential = run(&seeded, &ReportFilters::new(), 1).await;
        let parallel = run(&seeded, &ReportFilters::new(), 8).await;

        assert_eq!(sequential.len(), 24);
        assert_eq!(sequential, parallel);
    }

    #[tokio::test]
    async fn test_missing_address_is_fatal() {
        let seeded = Seeded::new().await;
        let mut order = seeded
            .order("KR25-0001", OrderStatus::Confirmado, "58010000", &[("Ana", "P")])
            .await;
        order.order_number = "KR25-0009".to_string();
        order.id = uuid::Uuid::new_v4();
        order.address_id = uuid::Uuid::new_v4();
        seeded.source.insert_order(order.clone()).await;
        seeded
            .source
            .insert_kit(crate::reports::types::Kit {
                order_id: order.id,
                athlete_name: "Órfão".to_string(),
                cpf: String::new(),
                shirt_size: "M".to_string(),
            })
            .await;

        let catalog = ZoneCatalog::default();
        let filters = ReportFilters::new();
        let ctx = AssemblyContext {
            source: &seeded.source,
            event: &seeded.event,
            filters: &filters,
            catalog: &catalog,
            concurrency: 1,
        };
        let err = assemble_kits(&ctx).await.unwrap_err();

        assert!(matches!(
            err,
            ReportError::MissingRecord { entity: "address", ref order_number, .. }
                if order_number == "KR25-0009"
        ));
    }
}
