//! Error types for the engine, the dataset loader, and configuration.

mod config_error;
mod dataset_error;
mod network_error;

pub use config_error::ConfigError;
pub use dataset_error::DatasetError;
pub use network_error::NetworkError;
