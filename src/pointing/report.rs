use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::catalog::{Catalog, SatelliteFix};
use crate::pointing::{classify_visibility, GeoPoint, VisibilityThresholds, VisibilityTier};

/// Pointing solution for one satellite.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SatellitePointing {
    pub id: String,
    pub name: String,
    pub longitude_deg: f64,
    pub altitude_km: f64,
    pub elevation_deg: f64,
    pub azimuth_deg: f64,
    pub tier: VisibilityTier,
}

impl SatellitePointing {
    pub fn compute(
        observer: &GeoPoint,
        satellite: &SatelliteFix,
        thresholds: &VisibilityThresholds,
    ) -> Self {
        let angles = satellite.pointing_from(observer);
        Self {
            id: satellite.id.clone(),
            name: satellite.name.clone(),
            longitude_deg: satellite.position.longitude_deg,
            altitude_km: satellite.altitude_km,
            elevation_deg: angles.elevation_deg,
            azimuth_deg: angles.azimuth_deg,
            tier: classify_visibility(angles.elevation_deg, thresholds),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PointingReport {
    pub observer: GeoPoint,
    pub thresholds: VisibilityThresholds,
    pub computed_at: DateTime<Utc>,
    pub satellites: Vec<SatellitePointing>,
}

impl PointingReport {
    /// Drops satellites classified as hidden.
    pub fn visible(mut self) -> Self {
        self.satellites.retain(|s| s.tier != VisibilityTier::Hidden);
        self
    }
}

/// One row per catalog satellite, in catalog order.
pub fn build_report(
    observer: &GeoPoint,
    catalog: &Catalog,
    thresholds: &VisibilityThresholds,
) -> PointingReport {
    let satellites = catalog
        .satellites()
        .iter()
        .map(|sat| SatellitePointing::compute(observer, sat, thresholds))
        .collect();

    PointingReport {
        observer: *observer,
        thresholds: *thresholds,
        computed_at: Utc::now(),
        satellites,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn kansas_report() -> PointingReport {
        build_report(
            &GeoPoint::new(38.0, -97.0),
            &Catalog::default_constellation(),
            &VisibilityThresholds::default(),
        )
    }

    #[test]
    fn rows_follow_catalog_order() {
        let report = kansas_report();
        let ids: Vec<_> = report.satellites.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            ["muos-2", "muos-5", "muos-3", "muos-4", "alt-2", "alt-3", "alt-1", "alt-4"]
        );
    }

    #[test]
    fn tiers_for_kansas() {
        let report = kansas_report();
        let tier = |id: &str| {
            report
                .satellites
                .iter()
                .find(|s| s.id == id)
                .map(|s| s.tier)
                .unwrap()
        };

        assert_eq!(tier("muos-5"), VisibilityTier::Good);
        assert_eq!(tier("alt-2"), VisibilityTier::Good);
        assert_eq!(tier("alt-3"), VisibilityTier::Poor);
        assert_eq!(tier("muos-3"), VisibilityTier::Hidden);
        assert_eq!(tier("muos-4"), VisibilityTier::Hidden);

        let muos5 = &report.satellites[1];
        assert_abs_diff_eq!(muos5.elevation_deg, 45.86, epsilon = 0.05);
    }

    #[test]
    fn visible_drops_hidden_rows() {
        let visible = kansas_report().visible();
        let ids: Vec<_> = visible.satellites.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["muos-5", "alt-2", "alt-3"]);
    }

    #[test]
    fn thresholds_change_tiers_not_angles() {
        let observer = GeoPoint::new(38.0, -97.0);
        let catalog = Catalog::default_constellation();
        let strict = VisibilityThresholds {
            poor_deg: 5.0,
            good_deg: 20.0,
        };

        let default_report = build_report(&observer, &catalog, &VisibilityThresholds::default());
        let strict_report = build_report(&observer, &catalog, &strict);

        let alt3_default = &default_report.satellites[5];
        let alt3_strict = &strict_report.satellites[5];
        assert_eq!(alt3_default.elevation_deg, alt3_strict.elevation_deg);
        assert_eq!(alt3_default.tier, VisibilityTier::Poor);
        assert_eq!(alt3_strict.tier, VisibilityTier::Hidden);
    }
}
