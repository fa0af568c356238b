use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema, strum_macros::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VisibilityTier {
    Good,
    Poor,
    Hidden,
}

#[derive(Debug, Error, PartialEq)]
pub enum ThresholdError {
    #[error("visibility thresholds must be finite")]
    NotFinite,
    #[error("poor threshold ({poor_deg}°) must be below good threshold ({good_deg}°)")]
    Inverted { poor_deg: f64, good_deg: f64 },
}

/// Elevation boundaries between tiers, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct VisibilityThresholds {
    #[serde(default = "default_poor_deg")]
    pub poor_deg: f64,
    #[serde(default = "default_good_deg")]
    pub good_deg: f64,
}

fn default_poor_deg() -> f64 {
    0.0
}

fn default_good_deg() -> f64 {
    10.0
}

impl Default for VisibilityThresholds {
    fn default() -> Self {
        Self {
            poor_deg: default_poor_deg(),
            good_deg: default_good_deg(),
        }
    }
}

impl VisibilityThresholds {
    pub fn validate(&self) -> Result<(), ThresholdError> {
        if !self.poor_deg.is_finite() || !self.good_deg.is_finite() {
            return Err(ThresholdError::NotFinite);
        }
        if self.poor_deg >= self.good_deg {
            return Err(ThresholdError::Inverted {
                poor_deg: self.poor_deg,
                good_deg: self.good_deg,
            });
        }
        Ok(())
    }

    pub fn is_good(&self, elevation_deg: f64) -> bool {
        elevation_deg >= self.good_deg
    }
}

/// Maps an elevation to its display tier. NaN is `Hidden`.
pub fn classify_visibility(elevation_deg: f64, thresholds: &VisibilityThresholds) -> VisibilityTier {
    if elevation_deg >= thresholds.good_deg {
        VisibilityTier::Good
    } else if elevation_deg > thresholds.poor_deg {
        VisibilityTier::Poor
    } else {
        VisibilityTier::Hidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_twenty() -> VisibilityThresholds {
        VisibilityThresholds {
            poor_deg: 5.0,
            good_deg: 20.0,
        }
    }

    #[test]
    fn classifies_each_tier() {
        let thresholds = five_twenty();
        assert_eq!(classify_visibility(25.0, &thresholds), VisibilityTier::Good);
        assert_eq!(classify_visibility(10.0, &thresholds), VisibilityTier::Poor);
        assert_eq!(classify_visibility(-2.0, &thresholds), VisibilityTier::Hidden);
    }

    #[test]
    fn boundaries() {
        let thresholds = five_twenty();
        assert_eq!(classify_visibility(20.0, &thresholds), VisibilityTier::Good);
        assert_eq!(classify_visibility(5.0, &thresholds), VisibilityTier::Hidden);
        assert_eq!(classify_visibility(5.000_1, &thresholds), VisibilityTier::Poor);
    }

    #[test]
    fn nan_is_hidden() {
        let thresholds = VisibilityThresholds::default();
        assert_eq!(classify_visibility(f64::NAN, &thresholds), VisibilityTier::Hidden);
        assert!(!thresholds.is_good(f64::NAN));
    }

    #[test]
    fn default_is_zero_ten() {
        let thresholds = VisibilityThresholds::default();
        assert_eq!(thresholds.poor_deg, 0.0);
        assert_eq!(thresholds.good_deg, 10.0);
        assert_eq!(classify_visibility(0.0, &thresholds), VisibilityTier::Hidden);
        assert_eq!(classify_visibility(9.9, &thresholds), VisibilityTier::Poor);
        assert!(thresholds.is_good(10.0));
    }

    #[test]
    fn rejects_bad_thresholds() {
        let flat = VisibilityThresholds {
            poor_deg: 10.0,
            good_deg: 10.0,
        };
        assert_eq!(
            flat.validate(),
            Err(ThresholdError::Inverted {
                poor_deg: 10.0,
                good_deg: 10.0
            })
        );
        let undefined = VisibilityThresholds {
            poor_deg: f64::NAN,
            good_deg: 10.0,
        };
        assert_eq!(undefined.validate(), Err(ThresholdError::NotFinite));
        assert_eq!(five_twenty().validate(), Ok(()));
    }

    #[test]
    fn tier_renders_snake_case() {
        assert_eq!(VisibilityTier::Hidden.to_string(), "hidden");
        assert_eq!(
            serde_json::to_string(&VisibilityTier::Good).unwrap(),
            "\"good\""
        );
    }
}
