pub mod error;
pub mod pointing;
pub mod satellites;
