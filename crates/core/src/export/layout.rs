//! Column layouts per report type and format.
//!
//! The set of `(report type, format)` pairs with a layout is exactly the set
//! of supported exports.

use kitroute_shared::Money;

use crate::reports::format::format_date;
use crate::reports::types::{
    CircuitReportRow, ExportFormat, KitReportRow, OrderReportRow, ReportRows, ReportType,
};

/// A value a report row can expose as a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Order display number.
    OrderNumber,
    /// Athlete name.
    AthleteName,
    /// Athlete CPF.
    AthleteCpf,
    /// Shirt size.
    ShirtSize,
    /// Product label.
    Product,
    /// Customer name.
    CustomerName,
    /// Customer CPF.
    CustomerCpf,
    /// Single-line address.
    Address,
    /// `street, number[, complement]`.
    AddressLine1,
    /// City.
    City,
    /// State.
    State,
    /// CEP.
    PostalCode,
    /// Circuit extra info.
    ExtraInfo,
    /// Order status label.
    Status,
    /// Order total.
    TotalValue,
    /// Resolved zone name.
    ZoneName,
    /// Kits summary.
    Kits,
    /// Order date.
    OrderDate,
    /// Payment method label.
    PaymentMethod,
}

/// A single output column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    /// Header text.
    pub header: &'static str,
    /// Row value shown in the column.
    pub field: Field,
    /// Width: characters for Excel, points for PDF, unused for CSV.
    pub width: f32,
}

impl Column {
    const fn new(header: &'static str, field: Field, width: f32) -> Self {
        Self {
            header,
            field,
            width,
        }
    }

    /// Returns true for person names, which PDF output truncates.
    #[must_use]
    pub const fn is_name(&self) -> bool {
        matches!(self.field, Field::AthleteName | Field::CustomerName)
    }
}

/// Background treatment of data rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowShading {
    /// No fill.
    None,
    /// Toggle between two fills every time the order number changes.
    OrderGroups,
    /// Fill every other row.
    Alternate,
}

/// Full description of one export.
#[derive(Debug, PartialEq)]
pub struct Layout {
    /// Report type.
    pub report_type: ReportType,
    /// Output format.
    pub format: ExportFormat,
    /// Title prefix, also used as the sheet name.
    pub title: &'static str,
    /// Columns, in output order.
    pub columns: &'static [Column],
    /// Row background treatment.
    pub shading: RowShading,
}

const KITS_FULL: &[Column] = &[
    Column::new("Nº Pedido", Field::OrderNumber, 15.0),
    Column::new("Nome do Atleta", Field::AthleteName, 35.0),
    Column::new("CPF", Field::AthleteCpf, 18.0),
    Column::new("Camisa", Field::ShirtSize, 10.0),
    Column::new("Produto", Field::Product, 45.0),
    Column::new("Cliente Responsável", Field::CustomerName, 35.0),
    Column::new("Endereço de Entrega", Field::Address, 60.0),
];

const KITS_CSV: &[Column] = &[
    Column::new("Nº Pedido", Field::OrderNumber, 0.0),
    Column::new("Nome do Atleta", Field::AthleteName, 0.0),
    Column::new("CPF", Field::AthleteCpf, 0.0),
    Column::new("Camisa", Field::ShirtSize, 0.0),
];

const KITS_PDF: &[Column] = &[
    Column::new("Nº Pedido", Field::OrderNumber, 90.0),
    Column::new("Nome do Atleta", Field::AthleteName, 215.0),
    Column::new("CPF", Field::AthleteCpf, 120.0),
    Column::new("Camisa", Field::ShirtSize, 90.0),
];

const CIRCUIT_EXCEL: &[Column] = &[
    Column::new("Address Line 1", Field::AddressLine1, 50.0),
    Column::new("City", Field::City, 25.0),
    Column::new("State", Field::State, 10.0),
    Column::new("Postal Code", Field::PostalCode, 15.0),
    Column::new("Extra Info", Field::ExtraInfo, 25.0),
];

const ORDERS_FULL: &[Column] = &[
    Column::new("Nº Pedido", Field::OrderNumber, 15.0),
    Column::new("Cliente", Field::CustomerName, 30.0),
    Column::new("CPF", Field::CustomerCpf, 18.0),
    Column::new("Status", Field::Status, 20.0),
    Column::new("Valor Total", Field::TotalValue, 15.0),
    Column::new("Zona CEP", Field::ZoneName, 20.0),
    Column::new("Kits", Field::Kits, 50.0),
    Column::new("Endereço", Field::Address, 60.0),
    Column::new("Data do Pedido", Field::OrderDate, 15.0),
    Column::new("Pagamento", Field::PaymentMethod, 20.0),
];

const ORDERS_PDF: &[Column] = &[
    Column::new("Pedido", Field::OrderNumber, 80.0),
    Column::new("Cliente", Field::CustomerName, 165.0),
    Column::new("Status", Field::Status, 90.0),
    Column::new("Valor", Field::TotalValue, 80.0),
    Column::new("Zona CEP", Field::ZoneName, 100.0),
];

static LAYOUTS: &[Layout] = &[
    Layout {
        report_type: ReportType::Kits,
        format: ExportFormat::Excel,
        title: "Relatório de Kits",
        columns: KITS_FULL,
        shading: RowShading::OrderGroups,
    },
    Layout {
        report_type: ReportType::Kits,
        format: ExportFormat::Csv,
        title: "Relatório de Kits",
        columns: KITS_CSV,
        shading: RowShading::None,
    },
    Layout {
        report_type: ReportType::Kits,
        format: ExportFormat::Pdf,
        title: "Relatório de Kits",
        columns: KITS_PDF,
        shading: RowShading::Alternate,
    },
    Layout {
        report_type: ReportType::Circuit,
        format: ExportFormat::Excel,
        title: "Circuit",
        columns: CIRCUIT_EXCEL,
        shading: RowShading::None,
    },
    Layout {
        report_type: ReportType::Orders,
        format: ExportFormat::Excel,
        title: "Relatório de Pedidos",
        columns: ORDERS_FULL,
        shading: RowShading::None,
    },
    Layout {
        report_type: ReportType::Orders,
        format: ExportFormat::Csv,
        title: "Relatório de Pedidos",
        columns: ORDERS_FULL,
        shading: RowShading::None,
    },
    Layout {
        report_type: ReportType::Orders,
        format: ExportFormat::Pdf,
        title: "Relatório de Pedidos",
        columns: ORDERS_PDF,
        shading: RowShading::None,
    },
];

/// Looks up the layout of an export, or `None` if the pair is unsupported.
#[must_use]
pub fn layout_for(report_type: ReportType, format: ExportFormat) -> Option<&'static Layout> {
    LAYOUTS
        .iter()
        .find(|layout| layout.report_type == report_type && layout.format == format)
}

/// A cell value before encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Plain text.
    Text(String),
    /// Amount; numeric in spreadsheets, `R$ x.xx` elsewhere.
    Money(Money),
}

impl Cell {
    /// Text rendering used by CSV and PDF.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Money(money) => money.to_string(),
        }
    }
}

/// A row projected onto a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Cells in column order.
    pub cells: Vec<Cell>,
    /// Order number, used for group shading.
    pub group: String,
}

/// Rows projected onto a layout, ready for an encoder.
#[derive(Debug)]
pub struct Table {
    /// Layout being rendered.
    pub layout: &'static Layout,
    /// Document title.
    pub title: String,
    /// Data rows.
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Projects report rows onto `layout`.
    #[must_use]
    pub fn build(layout: &'static Layout, rows: &ReportRows, event_name: &str) -> Self {
        let rows = match rows {
            ReportRows::Kits(rows) => project(layout, rows),
            ReportRows::Circuit(rows) => project(layout, rows),
            ReportRows::Orders(rows) => project(layout, rows),
        };
        Self {
            layout,
            title: format!("{} - {event_name}", layout.title),
            rows,
        }
    }

    /// Header texts in column order.
    pub fn headers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.layout.columns.iter().map(|column| column.header)
    }
}

fn project<R: RowFields>(layout: &Layout, rows: &[R]) -> Vec<TableRow> {
    rows.iter()
        .map(|row| TableRow {
            cells: layout
                .columns
                .iter()
                .map(|column| row.field(column.field))
                .collect(),
            group: row.group().to_string(),
        })
        .collect()
}

/// Exposes a report row's values by field.
trait RowFields {
    fn field(&self, field: Field) -> Cell;
    fn group(&self) -> &str;
}

fn text(value: &str) -> Cell {
    Cell::Text(value.to_string())
}

impl RowFields for KitReportRow {
    fn field(&self, field: Field) -> Cell {
        match field {
            Field::OrderNumber => text(&self.order_number),
            Field::AthleteName => text(&self.athlete_name),
            Field::AthleteCpf => text(&self.cpf),
            Field::ShirtSize => text(&self.shirt_size),
            Field::Product => text(&self.product_label),
            Field::CustomerName => text(&self.customer_name),
            Field::Address => text(&self.delivery_address),
            _ => Cell::Text(String::new()),
        }
    }

    fn group(&self) -> &str {
        &self.order_number
    }
}

impl RowFields for CircuitReportRow {
    fn field(&self, field: Field) -> Cell {
        match field {
            Field::AddressLine1 => text(&self.address_line1),
            Field::City => text(&self.city),
            Field::State => text(&self.state),
            Field::PostalCode => text(&self.postal_code),
            Field::ExtraInfo => text(&self.extra_info),
            _ => Cell::Text(String::new()),
        }
    }

    fn group(&self) -> &str {
        &self.extra_info
    }
}

impl RowFields for OrderReportRow {
    fn field(&self, field: Field) -> Cell {
        match field {
            Field::OrderNumber => text(&self.order_number),
            Field::CustomerName => text(&self.customer_name),
            Field::CustomerCpf => text(&self.customer_cpf),
            Field::Status => text(&self.status),
            Field::TotalValue => Cell::Money(self.total_value),
            Field::ZoneName => text(&self.cep_zone_name),
            Field::Kits => text(&self.kits_summary),
            Field::Address => text(&self.address),
            Field::OrderDate => Cell::Text(format_date(self.order_date)),
            Field::PaymentMethod => text(&self.payment_method),
            _ => Cell::Text(String::new()),
        }
    }

    fn group(&self) -> &str {
        &self.order_number
    }
}
