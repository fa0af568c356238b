use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file read error: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("invalid catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("catalog contains no satellites")]
    Empty,
    #[error("duplicate satellite id: {0}")]
    DuplicateId(String),
    #[error("satellite {id}: {message}")]
    InvalidSatellite { id: String, message: String },
}
