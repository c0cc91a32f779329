//! Per-section validation and the field checks the sections share

use crate::error::{ConfigError, ConfigResult};
use std::fmt::Display;

/// A configuration section that can check its own values
pub trait Validatable {
    fn validate(&self) -> ConfigResult<()>;

    /// Section name used in error messages
    fn domain_name(&self) -> &'static str;

    fn validation_error(&self, message: impl Into<String>) -> ConfigError
    where
        Self: Sized,
    {
        domain_error(self.domain_name(), message)
    }
}

fn domain_error(domain: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::DomainError {
        domain: domain.to_string(),
        message: message.into(),
    }
}

/// Blank or whitespace-only strings are rejected
pub fn validate_required_string(value: &str, field_name: &str, domain: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(domain_error(domain, format!("{} must not be blank", field_name)));
    }
    Ok(())
}

/// `value` must be strictly greater than `T::default()`
pub fn validate_positive<T>(value: T, field_name: &str, domain: &str) -> ConfigResult<()>
where
    T: PartialOrd + Default + Display,
{
    if value > T::default() {
        return Ok(());
    }
    Err(domain_error(
        domain,
        format!("{} must be positive (got {})", field_name, value),
    ))
}

/// `lower <= upper` for a pair of bounds
pub fn validate_ordered<T>(
    lower: T,
    lower_name: &str,
    upper: T,
    upper_name: &str,
    domain: &str,
) -> ConfigResult<()>
where
    T: PartialOrd + Display,
{
    if lower <= upper {
        return Ok(());
    }
    Err(domain_error(
        domain,
        format!(
            "{} ({}) must not exceed {} ({})",
            lower_name, lower, upper_name, upper
        ),
    ))
}

/// Port 0 is rejected; privileged ports only draw a warning
pub fn validate_port_range(port: u16, field_name: &str, domain: &str) -> ConfigResult<()> {
    match port {
        0 => Err(domain_error(domain, format!("{} must be between 1 and 65535", field_name))),
        1..=1023 => {
            log::warn!("{} {} is a privileged port", field_name, port);
            Ok(())
        }
        _ => Ok(()),
    }
}
