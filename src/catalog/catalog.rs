use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::catalog::error::CatalogError;
use crate::catalog::types::{CatalogFile, SatelliteFix};

/// The fixed set of satellites an observer can point at.
#[derive(Debug, Clone)]
pub struct Catalog {
    satellites: Vec<SatelliteFix>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::default_constellation()
    }
}

impl Catalog {
    /// MUOS and ALT geostationary slots.
    pub fn default_constellation() -> Self {
        Self {
            satellites: vec![
                SatelliteFix::geostationary("muos-2", "MUOS-2", -177.0),
                SatelliteFix::geostationary("muos-5", "MUOS-5", -100.0),
                SatelliteFix::geostationary("muos-3", "MUOS-3", -15.5),
                SatelliteFix::geostationary("muos-4", "MUOS-4", 75.0),
                SatelliteFix::geostationary("alt-2", "ALT-2", -127.0),
                SatelliteFix::geostationary("alt-3", "ALT-3", -24.0),
                SatelliteFix::geostationary("alt-1", "ALT-1", 110.0),
                SatelliteFix::geostationary("alt-4", "ALT-4", 170.0),
            ],
        }
    }

    pub fn new(satellites: Vec<SatelliteFix>) -> Result<Self, CatalogError> {
        if satellites.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for sat in &satellites {
            if !seen.insert(sat.id.as_str()) {
                return Err(CatalogError::DuplicateId(sat.id.clone()));
            }
            validate_satellite(sat)?;
        }

        Ok(Self { satellites })
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        Self::new(file.satellites.into_iter().map(SatelliteFix::from).collect())
    }

    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_yaml_str(&content)?;
        log::info!(
            "Loaded {} satellites from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn satellites(&self) -> &[SatelliteFix] {
        &self.satellites
    }

    pub fn get(&self, id: &str) -> Option<&SatelliteFix> {
        self.satellites.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.satellites.len()
    }
}

fn validate_satellite(sat: &SatelliteFix) -> Result<(), CatalogError> {
    let invalid = |message: &str| CatalogError::InvalidSatellite {
        id: sat.id.clone(),
        message: message.to_string(),
    };

    if sat.id.trim().is_empty() {
        return Err(invalid("id must not be empty"));
    }
    if !sat.position.latitude_deg.is_finite() || !sat.position.longitude_deg.is_finite() {
        return Err(invalid("coordinates must be finite"));
    }
    if !sat.altitude_km.is_finite() || sat.altitude_km <= 0.0 {
        return Err(invalid("altitude must be positive"));
    }
    Ok(())
}
