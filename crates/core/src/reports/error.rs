//! Report error types.

use thiserror::Error;
use uuid::Uuid;

use super::types::{ExportFormat, ReportType};
use crate::export::ExportError;

/// Boxed error raised by a data source implementation.
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Event not found.
    #[error("Evento não encontrado")]
    EventNotFound(Uuid),

    /// Format not implemented for the report type.
    #[error("Formato '{format}' não suportado para o relatório '{report_type}'")]
    UnsupportedFormat {
        /// Requested report type.
        report_type: ReportType,
        /// Requested format.
        format: ExportFormat,
    },

    /// An order references a record that does not exist.
    #[error("{entity} {id} referenced by order {order_number} not found")]
    MissingRecord {
        /// Kind of record, e.g. "address".
        entity: &'static str,
        /// Missing record ID.
        id: Uuid,
        /// Order holding the reference.
        order_number: String,
    },

    /// Data source failure.
    #[error("Data access failed: {0}")]
    DataAccess(#[source] SourceError),

    /// Encoder failure.
    #[error(transparent)]
    Export(#[from] ExportError),
}

impl ReportError {
    /// Wraps a data source error.
    pub fn data_access(err: impl Into<SourceError>) -> Self {
        Self::DataAccess(err.into())
    }
}

impl From<ReportError> for kitroute_shared::AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::EventNotFound(_) => Self::NotFound(err.to_string()),
            ReportError::UnsupportedFormat { .. } => Self::UnsupportedFormat(err.to_string()),
            ReportError::DataAccess(_) => Self::Database(err.to_string()),
            ReportError::MissingRecord { .. } | ReportError::Export(_) => {
                Self::Internal(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitroute_shared::AppError;

    #[test]
    fn test_not_found_message() {
        let err = ReportError::EventNotFound(Uuid::nil());
        assert_eq!(err.to_string(), "Evento não encontrado");

        let app: AppError = err.into();
        assert_eq!(app.status_code(), 404);
        assert_eq!(app.message(), "Evento não encontrado");
    }

    #[test]
    fn test_unsupported_format_names_format() {
        let err = ReportError::UnsupportedFormat {
            report_type: ReportType::Circuit,
            format: ExportFormat::Pdf,
        };
        assert!(err.to_string().contains("pdf"));
        assert!(err.to_string().contains("circuit"));

        let app: AppError = err.into();
        assert_eq!(app.error_code(), "UNSUPPORTED_FORMAT");
    }

    #[test]
    fn test_missing_record_is_internal() {
        let err = ReportError::MissingRecord {
            entity: "address",
            id: Uuid::nil(),
            order_number: "KR25-0001".to_string(),
        };
        assert!(err.to_string().contains("KR25-0001"));

        let app: AppError = err.into();
        assert_eq!(app.status_code(), 500);
    }
}
