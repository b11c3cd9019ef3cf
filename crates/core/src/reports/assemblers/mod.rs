//! Report row assemblers.
//!
//! Each assembler reads the orders of one event through a
//! [`ReportDataSource`], applies the status and zone filters and emits the rows
//! of its report type. Zone filters are always evaluated against the catalog
//! snapshot carried by the [`AssemblyContext`], never against stored
//! assignments.

mod circuit;
mod kits;
mod orders;

pub use circuit::assemble_circuit;
pub use kits::assemble_kits;
pub use orders::assemble_orders;

use std::future::Future;

use futures::{StreamExt, TryStreamExt, stream};

use super::error::ReportError;
use super::source::ReportDataSource;
use super::types::{Address, Customer, Event, Order, OrderQuery, ReportFilters};
use crate::zones::ZoneCatalog;

/// Everything an assembler needs for one report call.
#[derive(Clone, Copy)]
pub struct AssemblyContext<'a> {
    /// Where records come from.
    pub source: &'a dyn ReportDataSource,
    /// Validated event.
    pub event: &'a Event,
    /// Status and zone filters.
    pub filters: &'a ReportFilters,
    /// Zone snapshot for this call.
    pub catalog: &'a ZoneCatalog,
    /// Maximum per-order fetches in flight. 1 fetches sequentially.
    pub concurrency: usize,
}

impl AssemblyContext<'_> {
    /// Loads the event's orders with the status filter folded into the query.
    async fn load_orders(&self) -> Result<Vec<Order>, ReportError> {
        let query =
            OrderQuery::for_event(self.event.id).with_statuses(self.filters.statuses.as_deref());
        self.source.list_orders(&query).await
    }

    /// Returns true if the order's address passes the zone filter.
    fn passes_zone_filter(&self, address: &Address) -> bool {
        self.filters
            .zone_ids
            .as_deref()
            .is_none_or(|zone_ids| self.catalog.resolves_into(&address.zip_code, zone_ids))
    }
}

/// Runs `f` for every order with bounded concurrency, keeping input order.
async fn for_each_order<'o, T, F, Fut>(
    orders: &'o [Order],
    concurrency: usize,
    f: F,
) -> Result<Vec<T>, ReportError>
where
    F: FnMut(&'o Order) -> Fut + Send + 'o,
    Fut: Future<Output = Result<T, ReportError>> + Send + 'o,
    T: Send + 'o,
{
    stream::iter(orders)
        .map(f)
        .buffered(concurrency.max(1))
        .boxed()
        .try_collect()
        .await
}

async fn fetch_address(
    source: &dyn ReportDataSource,
    order: &Order,
) -> Result<Address, ReportError> {
    source
        .get_address(order.address_id)
        .await?
        .ok_or_else(|| ReportError::MissingRecord {
            entity: "address",
            id: order.address_id,
            order_number: order.order_number.clone(),
        })
}

async fn fetch_customer(
    source: &dyn ReportDataSource,
    order: &Order,
) -> Result<Customer, ReportError> {
    source
        .get_customer(order.customer_id)
        .await?
        .ok_or_else(|| ReportError::MissingRecord {
            entity: "customer",
            id: order.customer_id,
            order_number: order.order_number.clone(),
        })
}
