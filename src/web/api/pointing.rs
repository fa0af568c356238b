use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::pointing::{build_report, GeoPoint, PointingReport, SatellitePointing};
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct PointingQuery {
    pub lat: f64,
    pub lon: f64,
    pub include_hidden: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ObserverQuery {
    pub lat: f64,
    pub lon: f64,
}

#[utoipa::path(
    get,
    path = "/api/pointing",
    tag = "pointing",
    params(
        ("lat" = f64, Query, description = "Observer latitude (degrees)"),
        ("lon" = f64, Query, description = "Observer longitude (degrees)"),
        ("include_hidden" = Option<bool>, Query, description = "Include satellites below the poor threshold")
    ),
    responses(
        (status = 200, description = "Pointing angles for every satellite", body = PointingReport),
        (status = 400, description = "Invalid observer", body = ErrorResponse)
    )
)]
pub async fn pointing_report(
    State(state): State<AppState>,
    Query(query): Query<PointingQuery>,
) -> ApiResult<Json<PointingReport>> {
    let observer = observer_from(query.lat, query.lon)?;
    let report = build_report(&observer, &state.catalog, &state.config.visibility);

    let include_hidden = query.include_hidden.unwrap_or(state.config.show_hidden);
    log::debug!(
        "Pointing report for {} ({} satellites, include_hidden={})",
        observer,
        report.satellites.len(),
        include_hidden
    );

    Ok(Json(if include_hidden {
        report
    } else {
        report.visible()
    }))
}

#[utoipa::path(
    get,
    path = "/api/pointing/{id}",
    tag = "pointing",
    params(
        ("id" = String, Path, description = "Satellite id"),
        ("lat" = f64, Query, description = "Observer latitude (degrees)"),
        ("lon" = f64, Query, description = "Observer longitude (degrees)")
    ),
    responses(
        (status = 200, description = "Pointing angles for one satellite", body = SatellitePointing),
        (status = 400, description = "Invalid observer", body = ErrorResponse),
        (status = 404, description = "Unknown satellite", body = ErrorResponse)
    )
)]
pub async fn satellite_pointing(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ObserverQuery>,
) -> ApiResult<Json<SatellitePointing>> {
    let observer = observer_from(query.lat, query.lon)?;
    let satellite = state
        .catalog
        .get(&id)
        .ok_or(ApiError::NotFound("satellite_not_found"))?;

    Ok(Json(SatellitePointing::compute(
        &observer,
        satellite,
        &state.config.visibility,
    )))
}

/// The core accepts any finite value; requests are held to real coordinates.
fn observer_from(lat: f64, lon: f64) -> ApiResult<GeoPoint> {
    let observer = GeoPoint::new(lat, lon);
    if !observer.is_on_earth() {
        return Err(ApiError::Validation(format!(
            "observer {},{} is outside [-90,90] x [-180,180]",
            lat, lon
        )));
    }
    Ok(observer)
}
