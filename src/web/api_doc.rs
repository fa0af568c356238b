use utoipa::OpenApi;

use super::api::error::ErrorResponse;
use super::api::pointing::{ObserverQuery, PointingQuery};
use super::api::satellites::SatelliteListResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::satellites::list_satellites,
        super::api::satellites::get_satellite,
        super::api::pointing::pointing_report,
        super::api::pointing::satellite_pointing,
    ),
    components(
        schemas(
            SatelliteListResponse,
            PointingQuery,
            ObserverQuery,
            ErrorResponse,
            crate::catalog::SatelliteFix,
            crate::pointing::GeoPoint,
            crate::pointing::PointingReport,
            crate::pointing::SatellitePointing,
            crate::pointing::VisibilityThresholds,
            crate::pointing::VisibilityTier,
        )
    ),
    info(
        title = "Sat-Pointer API",
        description = "Antenna pointing angles toward geostationary satellites",
        version = "0.1.0"
    ),
    tags(
        (name = "satellites", description = "Satellite catalog"),
        (name = "pointing", description = "Elevation, azimuth and visibility")
    )
)]
pub struct ApiDoc;
