pub mod address;
pub mod app_config;
pub mod config;
pub mod query_mode;

pub use address::{NormalizedAddress, ObjectType};
pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use query_mode::{split_terms, QueryMode, DEFAULT_TOWNS};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid query mode \"{0}\": expected 1/postcode or 2/town")]
    InvalidQueryMode(String),
}
