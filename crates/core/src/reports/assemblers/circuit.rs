//! Circuit report: one delivery stop per order, for route planning import.

use tracing::debug;

use super::{AssemblyContext, fetch_address, for_each_order};
use crate::reports::error::ReportError;
use crate::reports::format::address_line1;
use crate::reports::types::CircuitReportRow;
use crate::zones::Cep;

/// Builds the Circuit report rows in order-number order.
pub async fn assemble_circuit(
    ctx: &AssemblyContext<'_>,
) -> Result<Vec<CircuitReportRow>, ReportError> {
    let orders = ctx.load_orders().await?;

    let stops = for_each_order(&orders, ctx.concurrency, |order| async move {
        let address = fetch_address(ctx.source, order).await?;
        if !ctx.passes_zone_filter(&address) {
            return Ok(None);
        }

        let postal_code = Cep::parse(&address.zip_code)
            .map_or_else(|_| address.zip_code.clone(), Cep::formatted);

        Ok(Some(CircuitReportRow {
            order_id: order.id,
            address_line1: address_line1(&address),
            city: address.city,
            state: address.state,
            postal_code,
            extra_info: format!("Pedido - {}", order.order_number),
        }))
    })
    .await?;

    let rows: Vec<CircuitReportRow> = stops.into_iter().flatten().collect();
    debug!(orders = orders.len(), stops = rows.len(), "Assembled circuit report");
    Ok(rows)
}
