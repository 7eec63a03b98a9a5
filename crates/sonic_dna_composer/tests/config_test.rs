//! Tests for composer configuration loading.

use sonic_dna_composer::{ComposerConfig, SonicDnaConfig};
use std::io::Write;
use tempfile::Builder;

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(temp_file, "{}", contents).unwrap();
    temp_file
}

#[test]
fn test_load_bundled_defaults() {
    let config = SonicDnaConfig::load().unwrap();

    assert_eq!(*config.composer.max_prompt_length(), 498);
    assert_eq!(*config.composer.max_influences(), 3);
    assert_eq!(*config.composer.trimmed_instrumentation(), 2);
}

#[test]
fn test_default_matches_bundled() {
    assert_eq!(SonicDnaConfig::default(), SonicDnaConfig::load().unwrap());
}

#[test]
fn test_config_from_file() {
    let temp_file = config_file(
        r#"
[composer]
max_prompt_length = 300
max_influences = 2
trimmed_instrumentation = 1
"#,
    );

    let config = SonicDnaConfig::from_file(temp_file.path()).unwrap();
    assert_eq!(*config.composer.max_prompt_length(), 300);
    assert_eq!(*config.composer.max_influences(), 2);
    assert_eq!(*config.composer.trimmed_instrumentation(), 1);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let temp_file = config_file(
        r#"
[composer]
max_influences = 5
"#,
    );

    let config = SonicDnaConfig::from_file(temp_file.path()).unwrap();
    assert_eq!(*config.composer.max_influences(), 5);
    assert_eq!(*config.composer.max_prompt_length(), 498);
    assert_eq!(*config.composer.trimmed_instrumentation(), 2);
}

#[test]
fn test_invalid_values_rejected() {
    let temp_file = config_file(
        r#"
[composer]
max_prompt_length = 3
"#,
    );

    let err = SonicDnaConfig::from_file(temp_file.path()).unwrap_err();
    assert!(format!("{}", err).contains("max_prompt_length"));
}

#[test]
fn test_missing_file_is_error() {
    assert!(SonicDnaConfig::from_file("/nonexistent/sonic_dna.toml").is_err());
}

#[test]
fn test_validate() {
    assert!(ComposerConfig::default().validate().is_ok());
    assert!(
        ComposerConfig::default()
            .with_max_prompt_length(3)
            .validate()
            .is_err()
    );
    assert!(
        ComposerConfig::default()
            .with_max_influences(0)
            .validate()
            .is_err()
    );
}

#[test]
fn test_builder_fills_defaults() {
    let config = ComposerConfig::builder()
        .max_prompt_length(250usize)
        .build()
        .unwrap();

    assert_eq!(*config.max_prompt_length(), 250);
    assert_eq!(*config.max_influences(), 3);
}
