//! Report data types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use kitroute_shared::Money;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Source records (owned by the CRUD subsystems, read-only here)
// ============================================================================

/// Event a set of orders belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event ID.
    pub id: Uuid,
    /// Event name.
    pub name: String,
}

/// Business state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Waiting for payment confirmation.
    AguardandoPagamento,
    /// Paid and confirmed.
    Confirmado,
    /// Kits being picked up at the event venue.
    EmSeparacao,
    /// Out for delivery.
    EmTransito,
    /// Delivered to the customer.
    Entregue,
    /// Cancelled.
    Cancelado,
}

impl OrderStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [Self; 6] = [
        Self::AguardandoPagamento,
        Self::Confirmado,
        Self::EmSeparacao,
        Self::EmTransito,
        Self::Entregue,
        Self::Cancelado,
    ];

    /// Stored value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AguardandoPagamento => "aguardando_pagamento",
            Self::Confirmado => "confirmado",
            Self::EmSeparacao => "em_separacao",
            Self::EmTransito => "em_transito",
            Self::Entregue => "entregue",
            Self::Cancelado => "cancelado",
        }
    }

    /// Label shown in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AguardandoPagamento => "Aguardando Pagamento",
            Self::Confirmado => "Confirmado",
            Self::EmSeparacao => "Em Separação",
            Self::EmTransito => "Em Trânsito",
            Self::Entregue => "Entregue",
            Self::Cancelado => "Cancelado",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| format!("Unknown order status: {s}"))
    }
}

/// How an order was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Instant bank transfer.
    Pix,
    /// Credit card.
    CartaoCredito,
    /// Bank slip.
    Boleto,
    /// Cash on pickup.
    Dinheiro,
}

impl PaymentMethod {
    /// Stored value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pix => "pix",
            Self::CartaoCredito => "cartao_credito",
            Self::Boleto => "boleto",
            Self::Dinheiro => "dinheiro",
        }
    }

    /// Label shown in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pix => "PIX",
            Self::CartaoCredito => "Cartão de Crédito",
            Self::Boleto => "Boleto",
            Self::Dinheiro => "Dinheiro",
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pix" => Ok(Self::Pix),
            "cartao_credito" => Ok(Self::CartaoCredito),
            "boleto" => Ok(Self::Boleto),
            "dinheiro" => Ok(Self::Dinheiro),
            _ => Err(format!("Unknown payment method: {s}")),
        }
    }
}

/// An order placed for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Order ID.
    pub id: Uuid,
    /// Display number, e.g. `KR25-0001`.
    pub order_number: String,
    /// Event ID.
    pub event_id: Uuid,
    /// Customer ID.
    pub customer_id: Uuid,
    /// Delivery address ID.
    pub address_id: Uuid,
    /// Current status.
    pub status: OrderStatus,
    /// Total charged.
    pub total_cost: Money,
    /// Payment method.
    pub payment_method: PaymentMethod,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A race kit inside an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kit {
    /// Order ID.
    pub order_id: Uuid,
    /// Athlete name.
    pub athlete_name: String,
    /// Athlete CPF, digits or formatted.
    pub cpf: String,
    /// Shirt size.
    pub shirt_size: String,
}

/// Delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street.
    pub street: String,
    /// House number.
    pub number: String,
    /// Complement (apartment, block).
    pub complement: Option<String>,
    /// Neighborhood.
    pub neighborhood: String,
    /// City.
    pub city: String,
    /// State abbreviation.
    pub state: String,
    /// CEP.
    pub zip_code: String,
}

/// Customer who placed an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Full name.
    pub name: String,
    /// CPF, digits or formatted.
    pub cpf: String,
}

// ============================================================================
// Requests
// ============================================================================

/// Kind of report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    /// One row per kit, for the pickup desk.
    Kits,
    /// One row per delivery stop, for route planning tools.
    Circuit,
    /// One row per order, for the back office.
    Orders,
}

impl ReportType {
    /// Identifier used in URLs and file names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kits => "kits",
            Self::Circuit => "circuit",
            Self::Orders => "orders",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kits" => Ok(Self::Kits),
            "circuit" => Ok(Self::Circuit),
            "orders" => Ok(Self::Orders),
            _ => Err(format!("Unknown report type: {s}")),
        }
    }
}

/// Output encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Office Open XML spreadsheet.
    Excel,
    /// Comma-separated values.
    Csv,
    /// Portable Document Format.
    Pdf,
}

impl ExportFormat {
    /// Identifier used in URLs and messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excel => "excel",
            Self::Csv => "csv",
            Self::Pdf => "pdf",
        }
    }

    /// MIME type of the encoded buffer.
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Excel => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            Self::Csv => "text/csv; charset=utf-8",
            Self::Pdf => "application/pdf",
        }
    }

    /// File extension, without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Excel => "xlsx",
            Self::Csv => "csv",
            Self::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "excel" | "xlsx" => Ok(Self::Excel),
            "csv" => Ok(Self::Csv),
            "pdf" => Ok(Self::Pdf),
            _ => Err(format!("Unknown export format: {s}")),
        }
    }
}

/// Optional filters applied by the assemblers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilters {
    /// Keep only orders in one of these statuses. `None` keeps all.
    pub statuses: Option<Vec<OrderStatus>>,
    /// Keep only orders whose CEP currently resolves to one of these zones.
    /// `None` keeps all. Ignored by the Kits report.
    pub zone_ids: Option<Vec<Uuid>>,
}

impl ReportFilters {
    /// Creates an empty filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to the given statuses.
    #[must_use]
    pub fn with_statuses(mut self, statuses: impl IntoIterator<Item = OrderStatus>) -> Self {
        self.statuses = Some(statuses.into_iter().collect());
        self
    }

    /// Restricts to the given zones.
    #[must_use]
    pub fn with_zones(mut self, zone_ids: impl IntoIterator<Item = Uuid>) -> Self {
        self.zone_ids = Some(zone_ids.into_iter().collect());
        self
    }
}

/// Which orders to load, turned into one query predicate by
/// the data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderQuery {
    /// Event the orders belong to.
    pub event_id: Uuid,
    /// Status membership filter. `None` matches every status.
    pub statuses: Option<Vec<OrderStatus>>,
}

impl OrderQuery {
    /// Matches every order of an event.
    #[must_use]
    pub const fn for_event(event_id: Uuid) -> Self {
        Self {
            event_id,
            statuses: None,
        }
    }

    /// Adds a status membership filter when one is given.
    #[must_use]
    pub fn with_statuses(mut self, statuses: Option<&[OrderStatus]>) -> Self {
        self.statuses = statuses.map(<[OrderStatus]>::to_vec);
        self
    }

    /// Returns true if `order` satisfies the query.
    #[must_use]
    pub fn matches(&self, order: &Order) -> bool {
        order.event_id == self.event_id
            && self
                .statuses
                .as_ref()
                .is_none_or(|statuses| statuses.contains(&order.status))
    }
}

// ============================================================================
// Report rows (transient, one set per call)
// ============================================================================

/// Row of the Kits report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KitReportRow {
    /// Order display number.
    pub order_number: String,
    /// Athlete name.
    pub athlete_name: String,
    /// Formatted CPF.
    pub cpf: String,
    /// Shirt size.
    pub shirt_size: String,
    /// `[Retirada do Kit] <event name>`.
    pub product_label: String,
    /// Customer who placed the order.
    pub customer_name: String,
    /// Single-line delivery address.
    pub delivery_address: String,
}

/// Row of the Circuit report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CircuitReportRow {
    /// Order the stop belongs to.
    #[serde(skip)]
    pub order_id: Uuid,
    /// `street, number[, complement]`.
    pub address_line1: String,
    /// City.
    pub city: String,
    /// State.
    pub state: String,
    /// CEP.
    pub postal_code: String,
    /// `Pedido - <order number>`.
    pub extra_info: String,
}

/// Row of the Orders report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderReportRow {
    /// Order the row describes.
    #[serde(skip)]
    pub order_id: Uuid,
    /// Order display number.
    pub order_number: String,
    /// Customer name.
    pub customer_name: String,
    /// Formatted customer CPF.
    pub customer_cpf: String,
    /// Status label.
    pub status: String,
    /// Total value.
    pub total_value: Money,
    /// Resolved zone name, or "Não identificada".
    pub cep_zone_name: String,
    /// `name (size)` per kit, comma-separated.
    pub kits_summary: String,
    /// Single-line address.
    pub address: String,
    /// Date the order was placed.
    pub order_date: NaiveDate,
    /// Payment method label.
    pub payment_method: String,
}

/// Rows produced by one assembler run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportRows {
    /// Kits report rows.
    Kits(Vec<KitReportRow>),
    /// Circuit report rows.
    Circuit(Vec<CircuitReportRow>),
    /// Orders report rows.
    Orders(Vec<OrderReportRow>),
}

impl ReportRows {
    /// Report type the rows belong to.
    #[must_use]
    pub const fn report_type(&self) -> ReportType {
        match self {
            Self::Kits(_) => ReportType::Kits,
            Self::Circuit(_) => ReportType::Circuit,
            Self::Orders(_) => ReportType::Orders,
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Kits(rows) => rows.len(),
            Self::Circuit(rows) => rows.len(),
            Self::Orders(rows) => rows.len(),
        }
    }

    /// Returns true if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Encoded report ready to be sent to a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFile {
    /// Encoded bytes.
    pub bytes: Vec<u8>,
    /// MIME type.
    pub content_type: &'static str,
    /// Suggested download name.
    pub file_name: String,
}
