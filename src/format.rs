use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::pointing::{PointingReport, SatellitePointing, VisibilityTier};

pub const KM_TO_MILES: f64 = 0.621371;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ToSchema, strum_macros::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn distance_from_km(self, km: f64) -> f64 {
        match self {
            Units::Metric => km,
            Units::Imperial => km * KM_TO_MILES,
        }
    }

    pub fn distance_suffix(self) -> &'static str {
        match self {
            Units::Metric => "km",
            Units::Imperial => "mi",
        }
    }
}

/// Non-negative angles get a leading space so columns align with negatives.
pub fn format_angle(angle_deg: f64, precision: usize) -> String {
    let value = format!("{:.*}°", precision, angle_deg);
    if angle_deg >= 0.0 {
        format!(" {}", value)
    } else {
        value
    }
}

pub fn format_distance(km: f64, units: Units, precision: usize) -> String {
    format!(
        "{:.*} {}",
        precision,
        units.distance_from_km(km),
        units.distance_suffix()
    )
}

pub fn format_table(rows: &[SatellitePointing], units: Units) -> String {
    let mut out = format!(
        "{:<10} {:>9} {:>9} {:>12}  {}\n",
        "SATELLITE", "EL", "AZ", "ALTITUDE", "TIER"
    );
    for row in rows {
        out.push_str(&format!(
            "{:<10} {:>9} {:>9} {:>12}  {}\n",
            row.name,
            format_angle(row.elevation_deg, 1),
            format_angle(row.azimuth_deg, 1),
            format_distance(row.altitude_km, units, 0),
            row.tier
        ));
    }
    out
}

/// Warns about satellites that are up but below the good threshold.
pub fn low_elevation_notice(report: &PointingReport) -> Option<String> {
    let low: Vec<_> = report
        .satellites
        .iter()
        .filter(|s| s.tier != VisibilityTier::Hidden && !report.thresholds.is_good(s.elevation_deg))
        .map(|s| s.name.as_str())
        .collect();
    if low.is_empty() {
        return None;
    }
    Some(format!(
        "Low elevation (<{}°) may give poor signal quality: {}",
        report.thresholds.good_deg,
        low.join(", ")
    ))
}
