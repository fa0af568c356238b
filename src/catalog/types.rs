use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::pointing::{compute_pointing_angles, GeoPoint, PointingAngles};

pub const GEOSTATIONARY_ALTITUDE_KM: f64 = 35_786.0;

/// A satellite at a fixed sub-satellite point.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SatelliteFix {
    pub id: String,
    pub name: String,
    pub position: GeoPoint,
    pub altitude_km: f64,
}

impl SatelliteFix {
    pub fn geostationary(id: &str, name: &str, longitude_deg: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            position: GeoPoint::new(0.0, longitude_deg),
            altitude_km: GEOSTATIONARY_ALTITUDE_KM,
        }
    }

    pub fn pointing_from(&self, observer: &GeoPoint) -> PointingAngles {
        compute_pointing_angles(observer, &self.position, self.altitude_km)
    }
}

/// On-disk form of a catalog entry.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct SatelliteEntry {
    pub id: String,
    pub name: String,
    pub longitude_deg: f64,
    #[serde(default)]
    pub latitude_deg: f64,
    #[serde(default = "default_altitude_km")]
    pub altitude_km: f64,
}

fn default_altitude_km() -> f64 {
    GEOSTATIONARY_ALTITUDE_KM
}

#[derive(Debug, Deserialize)]
pub(super) struct CatalogFile {
    pub satellites: Vec<SatelliteEntry>,
}

impl From<SatelliteEntry> for SatelliteFix {
    fn from(entry: SatelliteEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            position: GeoPoint::new(entry.latitude_deg, entry.longitude_deg),
            altitude_km: entry.altitude_km,
        }
    }
}
