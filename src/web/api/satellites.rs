use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::catalog::SatelliteFix;
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct SatelliteListResponse {
    pub satellites: Vec<SatelliteFix>,
}

#[utoipa::path(
    get,
    path = "/api/satellites",
    tag = "satellites",
    responses(
        (status = 200, description = "Configured satellites", body = SatelliteListResponse)
    )
)]
pub async fn list_satellites(State(state): State<AppState>) -> Json<SatelliteListResponse> {
    Json(SatelliteListResponse {
        satellites: state.catalog.satellites().to_vec(),
    })
}

#[utoipa::path(
    get,
    path = "/api/satellites/{id}",
    tag = "satellites",
    params(
        ("id" = String, Path, description = "Satellite id")
    ),
    responses(
        (status = 200, description = "Satellite", body = SatelliteFix),
        (status = 404, description = "Unknown satellite", body = ErrorResponse)
    )
)]
pub async fn get_satellite(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SatelliteFix>> {
    state
        .catalog
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound("satellite_not_found"))
}
