mod catalog;
mod error;
mod types;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use types::SatelliteFix;
