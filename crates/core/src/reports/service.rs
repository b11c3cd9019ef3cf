//! Report generation service.

use std::sync::Arc;

use kitroute_shared::{CsvQuoting, ReportsConfig};
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use super::assemblers::{AssemblyContext, assemble_circuit, assemble_kits, assemble_orders};
use super::error::ReportError;
use super::format::slugify;
use super::source::ReportDataSource;
use super::types::{Event, ExportFormat, ReportFile, ReportFilters, ReportRows, ReportType};
use crate::export::{self, Table, layout_for};
use crate::zones::ZoneCatalog;

/// Service for generating event reports.
#[derive(Clone)]
pub struct ReportService {
    source: Arc<dyn ReportDataSource>,
    settings: ReportsConfig,
}

impl ReportService {
    /// Creates a service reading from `source`.
    pub fn new(source: Arc<dyn ReportDataSource>, settings: ReportsConfig) -> Self {
        Self { source, settings }
    }

    /// The data source this service reads from.
    pub fn source(&self) -> &Arc<dyn ReportDataSource> {
        &self.source
    }

    /// Loads the event or fails with [`ReportError::EventNotFound`].
    pub async fn validate_event(&self, event_id: Uuid) -> Result<Event, ReportError> {
        self.source
            .get_event(event_id)
            .await?
            .ok_or(ReportError::EventNotFound(event_id))
    }

    /// Generates one report file for an event.
    ///
    /// The event is validated and the format checked before any order is
    /// read. Zones are loaded once and shared by every resolution of the call.
    pub async fn generate(
        &self,
        event_id: Uuid,
        report_type: ReportType,
        format: ExportFormat,
        filters: &ReportFilters,
    ) -> Result<ReportFile, ReportError> {
        let span = info_span!(
            "generate_report",
            %event_id,
            report_type = %report_type,
            format = %format,
        );

        async move {
            let event = self.validate_event(event_id).await?;
            let layout = layout_for(report_type, format).ok_or(ReportError::UnsupportedFormat {
                report_type,
                format,
            })?;

            let catalog = ZoneCatalog::new(self.source.list_zones().await?);
            let ctx = AssemblyContext {
                source: self.source.as_ref(),
                event: &event,
                filters,
                catalog: &catalog,
                concurrency: self.settings.fetch_concurrency,
            };
            let rows = self.dispatch(report_type, &ctx).await?;

            let table = Table::build(layout, &rows, &event.name);
            let bytes = self.encode(&table, format)?;

            info!(rows = rows.len(), bytes = bytes.len(), "Report generated");

            Ok(ReportFile {
                bytes,
                content_type: format.content_type(),
                file_name: file_name(report_type, &event.name, format),
            })
        }
        .instrument(span)
        .await
    }

    async fn dispatch(
        &self,
        report_type: ReportType,
        ctx: &AssemblyContext<'_>,
    ) -> Result<ReportRows, ReportError> {
        Ok(match report_type {
            ReportType::Kits => ReportRows::Kits(assemble_kits(ctx).await?),
            ReportType::Circuit => ReportRows::Circuit(assemble_circuit(ctx).await?),
            ReportType::Orders => ReportRows::Orders(assemble_orders(ctx).await?),
        })
    }

    fn encode(&self, table: &Table, format: ExportFormat) -> Result<Vec<u8>, ReportError> {
        Ok(match format {
            ExportFormat::Excel => export::excel::encode(table)?,
            ExportFormat::Csv => export::csv::encode(table, self.csv_quoting()),
            ExportFormat::Pdf => export::pdf::encode(table, &self.settings.pdf)?,
        })
    }

    fn csv_quoting(&self) -> CsvQuoting {
        self.settings.csv_quoting
    }
}

/// Download name, e.g. `relatorio-kits-corrida-de-sao-joao.xlsx`.
pub fn file_name(report_type: ReportType, event_name: &str, format: ExportFormat) -> String {
    format!(
        "relatorio-{}-{}.{}",
        report_type.as_str(),
        slugify(event_name),
        format.extension()
    )
}
