//! Tests for logging setup.

use sonic_dna::{LoggingConfig, init_logging};

#[test]
fn test_default_directive() {
    assert_eq!(LoggingConfig::default().default_directive(), "info");
    assert_eq!(
        LoggingConfig::default().with_verbose(true).default_directive(),
        "debug"
    );
}

#[test]
fn test_logging_installs_once() {
    let config = LoggingConfig::default().with_json_logs(true);

    assert!(init_logging(config).is_ok());
    assert!(init_logging(config).is_err());
}

#[test]
fn test_setters_chain() {
    let config = LoggingConfig::default()
        .with_verbose(true)
        .with_json_logs(true);

    assert!(config.verbose);
    assert!(config.json_logs);
    assert_eq!(config.with_verbose(false).default_directive(), "info");
}
