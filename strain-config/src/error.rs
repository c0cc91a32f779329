//! Errors raised while loading or validating a [`StrainConfig`]
//!
//! [`StrainConfig`]: crate::StrainConfig

use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read configuration file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Invalid YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A `STRAIN_*` override could not be parsed
    #[error("Bad environment override: {0}")]
    EnvError(String),

    /// A value failed its domain's validation rules
    #[error("Invalid {domain} configuration: {message}")]
    DomainError { domain: String, message: String },
}
