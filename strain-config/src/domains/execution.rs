//! Compute pool configuration

use crate::error::ConfigResult;
use crate::validation::{validate_positive, Validatable};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Compute pool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionConfig {
    /// Maximum number of CPU workloads running at once
    #[serde(default = "default_compute_threads")]
    pub compute_threads: usize,

    /// How long a request waits for its workload before giving up.
    /// The computation itself is not interrupted.
    #[serde(with = "crate::domains::utils::serde_duration", default = "default_job_timeout")]
    pub job_timeout: Duration,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            compute_threads: default_compute_threads(),
            job_timeout: default_job_timeout(),
        }
    }
}

impl Validatable for ExecutionConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_positive(self.compute_threads, "compute_threads", self.domain_name())?;
        validate_positive(self.job_timeout.as_secs(), "job_timeout", self.domain_name())?;
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "execution"
    }
}

fn default_compute_threads() -> usize {
    num_cpus::get().max(1)
}

fn default_job_timeout() -> Duration {
    Duration::from_secs(300) // 5 minutes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_config_defaults() {
        let config = ExecutionConfig::default();
        assert!(config.compute_threads >= 1);
        assert_eq!(config.job_timeout, Duration::from_secs(300));
    }

    #[test]
    fn test_execution_config_validation() {
        let mut config = ExecutionConfig::default();
        assert!(config.validate().is_ok());

        config.compute_threads = 0;
        assert!(config.validate().is_err());

        config.compute_threads = 2;
        config.job_timeout = Duration::from_secs(0);
        assert!(config.validate().is_err());
    }
}
