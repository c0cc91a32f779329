//! Structured logging infrastructure for Strain
//!
//! Thin wrapper over `tracing-subscriber` driven by the `logging` config
//! domain. Every crate logs through `tracing` macros; this crate only decides
//! where and how those events are rendered.

pub mod init;

pub use init::{build_env_filter, init_logging_from_config, init_simple_tracing};
pub use strain_config::{LogFormat, LogLevel, LoggingConfig};
