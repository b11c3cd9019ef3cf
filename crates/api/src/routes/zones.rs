//! CEP zone lookup.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use kitroute_core::zones::{Cep, UNIDENTIFIED_ZONE, ZoneCatalog};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::AppState;
use crate::error::{ApiError, validation};

/// Creates the zone routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/zones/resolve", get(resolve_zone))
}

/// Query parameters for zone resolution.
#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    /// CEP, with or without separators.
    pub cep: Option<String>,
}

/// Resolved zone.
#[derive(Debug, Serialize)]
pub struct ZoneResponse {
    /// Zone ID.
    pub id: Uuid,
    /// Zone name.
    pub name: String,
    /// Zone priority.
    pub priority: i32,
}

/// Response for zone resolution.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    /// Normalized eight-digit CEP.
    pub cep: String,
    /// Winning zone, if any.
    pub zone: Option<ZoneResponse>,
    /// Zone name or the unidentified label.
    pub label: String,
}

/// GET `/zones/resolve?cep=` - Resolve a CEP to its delivery zone.
async fn resolve_zone(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> Result<Json<ResolveResponse>, ApiError> {
    let raw = query
        .cep
        .ok_or_else(|| validation("Parâmetro 'cep' é obrigatório"))?;
    let cep = Cep::parse(&raw).map_err(|e| validation(e.to_string()))?;

    let catalog = ZoneCatalog::new(state.reports.source().list_zones().await?);
    let zone = catalog.resolve(&cep.to_string());

    Ok(Json(ResolveResponse {
        cep: cep.to_string(),
        label: zone.map_or(UNIDENTIFIED_ZONE, |z| z.name.as_str()).to_string(),
        zone: zone.map(|z| ZoneResponse {
            id: z.id,
            name: z.name.clone(),
            priority: z.priority,
        }),
    }))
}
