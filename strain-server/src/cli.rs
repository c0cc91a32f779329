//! Command line interface

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;
use strain_config::{ConfigLoader, LogLevel, StrainConfig};

#[derive(Debug, Parser)]
#[command(author, version, about = "Synthetic CPU load generator", long_about = None)]
pub struct Cli {
    /// Configuration file (YAML, or JSON with a .json extension)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Bind address, overrides the config file and STRAIN_SERVER_BIND_ADDRESS
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Port, overrides the config file and STRAIN_SERVER_PORT
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// File and environment first, then command line flags, then validation
    pub fn load_config(&self) -> Result<StrainConfig> {
        let mut config = ConfigLoader::new()
            .load(self.config.as_ref())
            .context("Failed to load configuration")?;

        self.apply_overrides(&mut config)?;
        config
            .validate_all()
            .context("Invalid configuration after command line overrides")?;

        Ok(config)
    }

    fn apply_overrides(&self, config: &mut StrainConfig) -> Result<()> {
        if let Some(bind) = &self.bind {
            config.server.bind_address = bind.clone();
        }

        if let Some(port) = self.port {
            config.server.port = port;
        }

        if let Some(level) = &self.log_level {
            config.logging.level = LogLevel::from_str(level).map_err(anyhow::Error::msg)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use temp_env::with_vars;

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "server:\n  port: 9000\nlogging:\n  level: warn").unwrap();

        let cli = Cli::try_parse_from([
            "strain",
            "--config",
            file.path().to_str().unwrap(),
            "--port",
            "9100",
            "--log-level",
            "debug",
        ])
        .unwrap();

        with_vars(vec![("STRAIN_SERVER_PORT", None::<&str>), ("STRAIN_LOG_LEVEL", None)], || {
            let config = cli.load_config().unwrap();
            assert_eq!(config.server.port, 9100);
            assert_eq!(config.logging.level, LogLevel::Debug);
        });
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let cli = Cli::try_parse_from(["strain", "--log-level", "chatty"]).unwrap();
        with_vars(vec![("STRAIN_LOG_LEVEL", None::<&str>)], || {
            assert!(cli.load_config().is_err());
        });
    }

    #[test]
    fn test_invalid_bind_address_rejected() {
        let cli = Cli::try_parse_from(["strain", "--bind", "not-an-ip"]).unwrap();
        with_vars(vec![("STRAIN_SERVER_BIND_ADDRESS", None::<&str>)], || {
            assert!(cli.load_config().is_err());
        });
    }
}
