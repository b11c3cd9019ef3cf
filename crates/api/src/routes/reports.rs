//! Report download routes.

use std::str::FromStr;

use axum::{
    Router,
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use kitroute_core::reports::{ExportFormat, OrderStatus, ReportFilters, ReportType};
use serde::Deserialize;
use uuid::Uuid;

use crate::AppState;
use crate::error::{ApiError, validation};

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/events/{event_id}/reports/{report_type}",
        get(download_report),
    )
}

/// Query parameters for a report download.
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    /// `excel`, `xlsx`, `csv` or `pdf`. Defaults to Excel.
    pub format: Option<String>,
    /// Order statuses (comma-separated).
    pub status: Option<String>,
    /// Zone IDs (comma-separated).
    pub zones: Option<String>,
}

/// GET `/events/{event_id}/reports/{report_type}` - Download a report file.
async fn download_report(
    State(state): State<AppState>,
    Path((event_id, report_type)): Path<(Uuid, String)>,
    Query(query): Query<ReportQuery>,
) -> Result<Response, ApiError> {
    let report_type = ReportType::from_str(&report_type).map_err(validation)?;
    let format = match query.format.as_deref() {
        Some(raw) => ExportFormat::from_str(raw).map_err(validation)?,
        None => ExportFormat::Excel,
    };
    let filters = parse_filters(&query)?;

    let file = state
        .reports
        .generate(event_id, report_type, format, &filters)
        .await?;

    let disposition = format!("attachment; filename=\"{}\"", file.file_name);
    Ok((
        [
            (header::CONTENT_TYPE, file.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.bytes,
    )
        .into_response())
}

/// Builds report filters; empty lists mean no filter.
fn parse_filters(query: &ReportQuery) -> Result<ReportFilters, ApiError> {
    let mut filters = ReportFilters::new();

    let statuses = split_list(query.status.as_deref())
        .map(OrderStatus::from_str)
        .collect::<Result<Vec<_>, _>>()
        .map_err(validation)?;
    if !statuses.is_empty() {
        filters = filters.with_statuses(statuses);
    }

    let zone_ids = split_list(query.zones.as_deref())
        .map(|part| {
            Uuid::parse_str(part).map_err(|_| validation(format!("Invalid zone ID: {part}")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if !zone_ids.is_empty() {
        filters = filters.with_zones(zone_ids);
    }

    Ok(filters)
}

/// Splits a comma-separated parameter, skipping blank parts.
fn split_list(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn query(status: Option<&str>, zones: Option<&str>) -> ReportQuery {
        ReportQuery {
            format: None,
            status: status.map(str::to_string),
            zones: zones.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_filters_empty() {
        let filters = parse_filters(&query(None, Some(" , "))).unwrap();
        assert_eq!(filters, ReportFilters::new());
    }

    #[test]
    fn test_parse_filters_statuses() {
        let filters = parse_filters(&query(Some("confirmado, EM_TRANSITO"), None)).unwrap();
        assert_eq!(
            filters.statuses,
            Some(vec![OrderStatus::Confirmado, OrderStatus::EmTransito])
        );
        assert_eq!(filters.zone_ids, None);
    }

    #[rstest]
    #[case("confirmado,pago")]
    #[case("paid")]
    #[case("confirmado;entregue")]
    fn test_parse_filters_rejects_unknown_status(#[case] status: &str) {
        assert!(parse_filters(&query(Some(status), None)).is_err());
    }

    #[test]
    fn test_parse_filters_zones() {
        let id = Uuid::new_v4();
        let filters = parse_filters(&query(None, Some(&id.to_string()))).unwrap();
        assert_eq!(filters.zone_ids, Some(vec![id]));

        assert!(parse_filters(&query(None, Some("not-a-uuid"))).is_err());
    }
}
