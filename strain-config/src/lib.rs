//! Domain-driven configuration management for Strain
//!
//! This crate provides modular configuration split by functional domains,
//! with validation, defaults, and environment variable support.

pub mod domains;
pub mod error;
pub mod loader;
pub mod validation;

// Re-export main types
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
pub use validation::Validatable;

// Re-export domain configurations
pub use domains::{
    execution::ExecutionConfig,
    logging::{LogFormat, LogLevel, LoggingConfig},
    server::ServerConfig,
    workloads::{
        MatrixLimits, ParallelLimits, PrimeLimits, RecursiveLimits, SortLimits, WorkloadsConfig,
    },
    StrainConfig,
};

// Re-export utilities
pub use domains::utils::serde_duration;
