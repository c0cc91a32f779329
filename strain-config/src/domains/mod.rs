//! Configuration sections, one module per concern

pub mod execution;
pub mod logging;
pub mod server;
pub mod utils;
pub mod workloads;

use crate::error::ConfigResult;
use crate::validation::Validatable;
use serde::{Deserialize, Serialize};

/// Complete service configuration. Every section is optional in a config
/// file and falls back to its defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StrainConfig {
    pub server: server::ServerConfig,
    pub logging: logging::LoggingConfig,
    /// Compute pool sizing and job timeout
    pub execution: execution::ExecutionConfig,
    /// Per-workload defaults and clamps
    pub workloads: workloads::WorkloadsConfig,
}

impl StrainConfig {
    /// Validate every section, stopping at the first failure
    pub fn validate_all(&self) -> ConfigResult<()> {
        let sections: [&dyn Validatable; 4] =
            [&self.server, &self.logging, &self.execution, &self.workloads];
        sections.iter().try_for_each(|section| section.validate())
    }

    /// The default configuration rendered as YAML
    pub fn generate_sample() -> String {
        serde_yaml::to_string(&StrainConfig::default())
            .unwrap_or_else(|e| format!("# could not render sample configuration: {}\n", e))
    }
}
