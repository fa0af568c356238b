use super::types::{GeoPoint, PointingAngles};

/// Mean radius of the spherical Earth model.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Elevation and azimuth from `observer` toward a satellite whose
/// sub-satellite point is `satellite`, `altitude_km` above the surface.
pub fn compute_pointing_angles(
    observer: &GeoPoint,
    satellite: &GeoPoint,
    altitude_km: f64,
) -> PointingAngles {
    compute_pointing_angles_with_radius(observer, satellite, altitude_km, EARTH_RADIUS_KM)
}

pub fn compute_pointing_angles_with_radius(
    observer: &GeoPoint,
    satellite: &GeoPoint,
    altitude_km: f64,
    earth_radius_km: f64,
) -> PointingAngles {
    let lat1 = observer.lat_rad();
    let lat2 = satellite.lat_rad();
    let d_lon = satellite.lon_rad() - observer.lon_rad();

    let (sin_lat1, cos_lat1) = lat1.sin_cos();
    let (sin_lat2, cos_lat2) = lat2.sin_cos();
    let (sin_dlon, cos_dlon) = d_lon.sin_cos();

    PointingAngles {
        elevation_deg: elevation_deg(
            central_angle(sin_lat1, cos_lat1, sin_lat2, cos_lat2, cos_dlon),
            altitude_km,
            earth_radius_km,
        ),
        azimuth_deg: azimuth_deg(sin_lat1, cos_lat1, sin_lat2, cos_lat2, sin_dlon, cos_dlon),
    }
}

/// Great-circle separation in radians (spherical law of cosines).
fn central_angle(sin_lat1: f64, cos_lat1: f64, sin_lat2: f64, cos_lat2: f64, cos_dlon: f64) -> f64 {
    // Rounding can push coincident points just past 1.0.
    let inner = (sin_lat1 * sin_lat2 + cos_lat1 * cos_lat2 * cos_dlon).clamp(-1.0, 1.0);
    inner.acos()
}

fn elevation_deg(central: f64, altitude_km: f64, earth_radius_km: f64) -> f64 {
    let distance = earth_radius_km + altitude_km;
    let (sin_c, cos_c) = central.sin_cos();
    (cos_c * distance - earth_radius_km)
        .atan2(sin_c * distance)
        .to_degrees()
}

fn azimuth_deg(
    sin_lat1: f64,
    cos_lat1: f64,
    sin_lat2: f64,
    cos_lat2: f64,
    sin_dlon: f64,
    cos_dlon: f64,
) -> f64 {
    let y = sin_dlon * cos_lat2;
    let x = cos_lat1 * sin_lat2 - sin_lat1 * cos_lat2 * cos_dlon;
    let azimuth = y.atan2(x).to_degrees().rem_euclid(360.0);
    // rem_euclid of a tiny negative rounds up to exactly 360.
    if azimuth >= 360.0 {
        0.0
    } else {
        azimuth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const GEO_ALTITUDE_KM: f64 = 35_786.0;

    #[test]
    fn coincident_point_is_overhead() {
        let origin = GeoPoint::new(0.0, 0.0);
        let angles = compute_pointing_angles(&origin, &origin, GEO_ALTITUDE_KM);
        assert_abs_diff_eq!(angles.elevation_deg, 90.0, epsilon = 1e-12);
        assert_eq!(angles.azimuth_deg, 0.0);

        let kansas = GeoPoint::new(38.0, -97.0);
        let angles = compute_pointing_angles(&kansas, &kansas, 550.0);
        assert_abs_diff_eq!(angles.elevation_deg, 90.0, epsilon = 1e-5);
    }

    #[test]
    fn kansas_toward_100_west() {
        let observer = GeoPoint::new(38.0, -97.0);
        let satellite = GeoPoint::new(0.0, -100.0);
        let angles = compute_pointing_angles(&observer, &satellite, GEO_ALTITUDE_KM);

        assert_abs_diff_eq!(angles.elevation_deg, 45.86, epsilon = 0.05);
        assert_abs_diff_eq!(angles.azimuth_deg, 184.87, epsilon = 0.05);
    }

    #[test]
    fn due_south_on_same_meridian() {
        let observer = GeoPoint::new(40.0, -100.0);
        let satellite = GeoPoint::new(0.0, -100.0);
        let angles = compute_pointing_angles(&observer, &satellite, GEO_ALTITUDE_KM);
        assert_abs_diff_eq!(angles.azimuth_deg, 180.0, epsilon = 1e-9);
        assert!(angles.elevation_deg > 0.0 && angles.elevation_deg < 90.0);
    }

    #[test]
    fn antipode_is_straight_down() {
        let observer = GeoPoint::new(0.0, 0.0);
        let antipode = GeoPoint::new(0.0, 180.0);
        let angles = compute_pointing_angles(&observer, &antipode, GEO_ALTITUDE_KM);
        assert_abs_diff_eq!(angles.elevation_deg, -90.0, epsilon = 1e-6);

        let nearby = GeoPoint::new(0.0, 170.0);
        let other = compute_pointing_angles(&observer, &nearby, GEO_ALTITUDE_KM);
        assert!(angles.elevation_deg < other.elevation_deg);
    }

    #[test]
    fn below_horizon_is_not_clamped() {
        let observer = GeoPoint::new(51.5, 0.0);
        let satellite = GeoPoint::new(0.0, 110.0);
        let angles = compute_pointing_angles(&observer, &satellite, GEO_ALTITUDE_KM);
        assert!(angles.elevation_deg < 0.0);
    }

    #[test]
    fn azimuth_stays_in_range() {
        let satellites = [
            GeoPoint::new(0.0, -177.0),
            GeoPoint::new(0.0, -15.5),
            GeoPoint::new(0.0, 75.0),
            GeoPoint::new(0.0, 170.0),
        ];
        for lat in (-90..=90).step_by(15) {
            for lon in (-180..=180).step_by(20) {
                let observer = GeoPoint::new(lat as f64, lon as f64);
                for satellite in &satellites {
                    let angles = compute_pointing_angles(&observer, satellite, GEO_ALTITUDE_KM);
                    assert!(
                        (0.0..360.0).contains(&angles.azimuth_deg),
                        "azimuth {} out of range for {}",
                        angles.azimuth_deg,
                        observer
                    );
                }
            }
        }
    }

    #[test]
    fn earth_radius_only_moves_elevation() {
        let observer = GeoPoint::new(-33.9, 18.4);
        let satellite = GeoPoint::new(0.0, -15.5);
        let mean = compute_pointing_angles(&observer, &satellite, GEO_ALTITUDE_KM);
        let equatorial =
            compute_pointing_angles_with_radius(&observer, &satellite, GEO_ALTITUDE_KM, 6378.137);

        assert_eq!(mean.azimuth_deg, equatorial.azimuth_deg);
        assert_ne!(mean.elevation_deg, equatorial.elevation_deg);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let observer = GeoPoint::new(21.3, -157.8);
        let satellite = GeoPoint::new(0.0, -177.0);
        let first = compute_pointing_angles(&observer, &satellite, GEO_ALTITUDE_KM);
        let second = compute_pointing_angles(&observer, &satellite, GEO_ALTITUDE_KM);
        assert_eq!(first.elevation_deg.to_bits(), second.elevation_deg.to_bits());
        assert_eq!(first.azimuth_deg.to_bits(), second.azimuth_deg.to_bits());
    }
}
