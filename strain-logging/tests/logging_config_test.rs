use strain_logging::{init_logging_from_config, init_simple_tracing, LogFormat, LogLevel, LoggingConfig};

#[test]
fn test_logging_config_from_yaml() {
    let yaml_config = r#"
level: trace
format: pretty
include_location: true
directives: "hyper=info"
"#;

    let config: LoggingConfig = serde_yaml::from_str(yaml_config).unwrap();
    assert_eq!(config.level, LogLevel::Trace);
    assert_eq!(config.format, LogFormat::Pretty);
    assert!(config.include_location);
    assert_eq!(config.filter_directive(), "trace,hyper=info");
}

#[test]
fn test_minimal_logging_config() {
    let config: LoggingConfig = serde_yaml::from_str("{}").unwrap();
    assert_eq!(config.level, LogLevel::Info);
    assert_eq!(config.format, LogFormat::Text);
    assert!(!config.include_location);
}

#[test]
fn test_repeated_initialization_is_harmless() {
    let config = LoggingConfig {
        format: LogFormat::Json,
        ..LoggingConfig::default()
    };

    assert!(init_logging_from_config(&config).is_ok());
    assert!(init_logging_from_config(&LoggingConfig::default()).is_ok());
    assert!(init_simple_tracing("debug").is_ok());

    tracing::info!(workload = "primes", duration_ns = 42u64, "logged after init");
}
