//! Configuration loading and `STRAIN_*` environment overrides

use crate::domains::StrainConfig;
use crate::error::{ConfigError, ConfigResult};
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// Default prefix for environment overrides
pub const ENV_PREFIX: &str = "STRAIN";

/// Loads `StrainConfig` from a file and/or the environment
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    prefix: String,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::with_prefix(ENV_PREFIX)
    }

    /// Use a custom environment prefix (tests mostly)
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Load a YAML file, or JSON when the extension is `.json`, then apply
    /// environment overrides and validate.
    pub fn from_file(&self, path: impl AsRef<Path>) -> ConfigResult<StrainConfig> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let mut config: StrainConfig = if is_json {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };

        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Defaults plus environment overrides
    pub fn from_env(&self) -> ConfigResult<StrainConfig> {
        let mut config = StrainConfig::default();
        self.apply_env_overrides(&mut config)?;
        config.validate_all()?;
        Ok(config)
    }

    pub fn load(&self, config_path: Option<impl AsRef<Path>>) -> ConfigResult<StrainConfig> {
        match config_path {
            Some(path) => self.from_file(path),
            None => self.from_env(),
        }
    }

    fn apply_env_overrides(&self, config: &mut StrainConfig) -> ConfigResult<()> {
        if let Some(bind) = self.env_string("SERVER_BIND_ADDRESS") {
            config.server.bind_address = bind;
        }
        if let Some(port) = self.env_parsed::<u16>("SERVER_PORT")? {
            config.server.port = port;
        }

        if let Some(level) = self.env_parsed("LOG_LEVEL")? {
            config.logging.level = level;
        }
        if let Some(format) = self.env_parsed("LOG_FORMAT")? {
            config.logging.format = format;
        }

        if let Some(threads) = self.env_parsed::<usize>("COMPUTE_THREADS")? {
            config.execution.compute_threads = threads;
        }
        if let Some(seconds) = self.env_parsed::<u64>("JOB_TIMEOUT_SECONDS")? {
            config.execution.job_timeout = Duration::from_secs(seconds);
        }

        Ok(())
    }

    fn var_name(&self, name: &str) -> String {
        format!("{}_{}", self.prefix, name)
    }

    fn env_string(&self, name: &str) -> Option<String> {
        std::env::var(self.var_name(name)).ok()
    }

    fn env_parsed<T>(&self, name: &str) -> ConfigResult<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let Some(raw) = self.env_string(name) else {
            return Ok(None);
        };

        raw.trim().parse::<T>().map(Some).map_err(|e| {
            ConfigError::EnvError(format!("Invalid {}: {} ({})", self.var_name(name), raw, e))
        })
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
