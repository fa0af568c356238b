mod angles;
mod report;
mod types;
mod visibility;

pub use angles::compute_pointing_angles;
pub use report::{build_report, PointingReport, SatellitePointing};
pub use types::{GeoPoint, PointingAngles};
pub use visibility::{classify_visibility, ThresholdError, VisibilityThresholds, VisibilityTier};
