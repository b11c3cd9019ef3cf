//! Orders report: one row per order, with its resolved zone.

use tracing::debug;

use super::{AssemblyContext, fetch_address, fetch_customer, for_each_order};
use crate::reports::error::ReportError;
use crate::reports::format::{format_cpf, kits_summary, single_line_address};
use crate::reports::types::OrderReportRow;
use crate::zones::UNIDENTIFIED_ZONE;

/// Builds the Orders report rows, sorted by order number.
pub async fn assemble_orders(
    ctx: &AssemblyContext<'_>,
) -> Result<Vec<OrderReportRow>, ReportError> {
    let orders = ctx.load_orders().await?;
    let zone_ids = ctx.filters.zone_ids.as_deref();

    let maybe_rows = for_each_order(&orders, ctx.concurrency, |order| async move {
        let address = fetch_address(ctx.source, order).await?;
        let zone = ctx.catalog.resolve(&address.zip_code);

        if let Some(zone_ids) = zone_ids
            && !zone.is_some_and(|z| zone_ids.contains(&z.id))
        {
            return Ok(None);
        }

        let kits = ctx.source.list_kits(order.id).await?;
        let customer = fetch_customer(ctx.source, order).await?;

        Ok(Some(OrderReportRow {
            order_id: order.id,
            order_number: order.order_number.clone(),
            customer_name: customer.name,
            customer_cpf: format_cpf(&customer.cpf),
            status: order.status.label().to_string(),
            total_value: order.total_cost,
            cep_zone_name: zone.map_or(UNIDENTIFIED_ZONE, |z| z.name.as_str()).to_string(),
            kits_summary: kits_summary(&kits),
            address: single_line_address(&address),
            order_date: order.created_at.date_naive(),
            payment_method: order.payment_method.label().to_string(),
        }))
    })
    .await?;

    let mut rows: Vec<OrderReportRow> = maybe_rows.into_iter().flatten().collect();
    rows.sort_by(|a, b| a.order_number.cmp(&b.order_number));

    debug!(orders = orders.len(), kept = rows.len(), "Assembled orders report");
    Ok(rows)
}
