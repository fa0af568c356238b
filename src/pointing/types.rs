use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A position on a spherical Earth, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize, ToSchema)]
pub struct GeoPoint {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

impl GeoPoint {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Parses `"lat,lon"`. Values are not range-checked.
    pub fn from_coordinates(coordinates: &str) -> Option<Self> {
        let parts: Vec<_> = coordinates.split(',').map(|s| s.trim()).collect();
        if parts.len() != 2 {
            return None;
        }
        let lat: f64 = parts[0].parse().ok()?;
        let lon: f64 = parts[1].parse().ok()?;
        if !lat.is_finite() || !lon.is_finite() {
            return None;
        }
        Some(Self::new(lat, lon))
    }

    pub fn lat_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn lon_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }

    pub fn is_on_earth(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude_deg)
            && (-180.0..=180.0).contains(&self.longitude_deg)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4},{:.4}", self.latitude_deg, self.longitude_deg)
    }
}

/// Look angles from an observer toward a satellite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct PointingAngles {
    /// Degrees above the local horizon. Negative below it.
    pub elevation_deg: f64,
    /// Compass bearing, always in [0, 360).
    pub azimuth_deg: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coordinate_pair() {
        let point = GeoPoint::from_coordinates(" 38.0, -97.0 ").unwrap();
        assert_eq!(point, GeoPoint::new(38.0, -97.0));
    }

    #[test]
    fn rejects_malformed_coordinates() {
        assert!(GeoPoint::from_coordinates("38.0").is_none());
        assert!(GeoPoint::from_coordinates("38.0,-97.0,12").is_none());
        assert!(GeoPoint::from_coordinates("north,west").is_none());
        assert!(GeoPoint::from_coordinates("NaN,0").is_none());
    }

    #[test]
    fn on_earth_bounds() {
        assert!(GeoPoint::new(90.0, -180.0).is_on_earth());
        assert!(!GeoPoint::new(90.5, 0.0).is_on_earth());
        assert!(!GeoPoint::new(0.0, 181.0).is_on_earth());
    }
}
