use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::catalog::{Catalog, CatalogError};
use crate::format::Units;
use crate::pointing::{GeoPoint, ThresholdError, VisibilityThresholds};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid visibility thresholds: {0}")]
    Thresholds(#[from] ThresholdError),
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("invalid observer coordinates: {0}")]
    Observer(String),
    #[error("invalid refresh interval: {0}")]
    Interval(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub observer: Option<ObserverConfig>,
    #[serde(default)]
    pub visibility: VisibilityThresholds,
    #[serde(default)]
    pub units: Units,
    #[serde(default = "default_show_hidden")]
    pub show_hidden: bool,
    pub catalog: Option<PathBuf>,
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval: String,
    #[serde(default)]
    pub web: WebConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            observer: None,
            visibility: VisibilityThresholds::default(),
            units: Units::default(),
            show_hidden: default_show_hidden(),
            catalog: None,
            refresh_interval: default_refresh_interval(),
            web: WebConfig::default(),
        }
    }
}

fn default_show_hidden() -> bool {
    true
}

fn default_refresh_interval() -> String {
    "5s".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ObserverConfig {
    pub coordinates: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // Empty or comment-only documents parse to null, not an empty mapping.
        let value: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        let config: Config = if value.is_null() {
            Config::default()
        } else {
            serde_yaml::from_value(value)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.visibility.validate()?;
        self.observer()?;
        self.refresh_interval()?;
        Ok(())
    }

    pub fn observer(&self) -> Result<Option<GeoPoint>, ConfigError> {
        match &self.observer {
            None => Ok(None),
            Some(o) => GeoPoint::from_coordinates(&o.coordinates)
                .map(Some)
                .ok_or_else(|| ConfigError::Observer(o.coordinates.clone())),
        }
    }

    pub fn refresh_interval(&self) -> Result<Duration, ConfigError> {
        let interval = humantime::parse_duration(self.refresh_interval.trim())
            .map_err(|e| ConfigError::Interval(e.to_string()))?;
        if interval.is_zero() {
            return Err(ConfigError::Interval("must be greater than zero".into()));
        }
        Ok(interval)
    }

    /// The configured catalog file, or the built-in constellation.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        match &self.catalog {
            Some(path) => Ok(Catalog::from_file(path)?),
            None => Ok(Catalog::default_constellation()),
        }
    }
}
