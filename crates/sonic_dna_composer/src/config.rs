//! Configuration for the prompt composer.
//!
//! Settings are read from TOML with the same layering everywhere:
//! - Bundled defaults (include_str! from sonic_dna.toml)
//! - User overrides (~/.config/sonic_dna/sonic_dna.toml, then ./sonic_dna.toml)
//! - Later sources win, missing user files are skipped

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use sonic_dna_error::{ConfigError, SonicDnaError, SonicDnaResult};
use tracing::{debug, instrument};

/// Default hard character budget for a prompt.
pub const DEFAULT_MAX_PROMPT_LENGTH: usize = 498;

/// Default number of artist references kept in a prompt.
pub const DEFAULT_MAX_INFLUENCES: usize = 3;

/// Default number of instrumentation entries kept when trimming.
pub const DEFAULT_TRIMMED_INSTRUMENTATION: usize = 2;

fn default_max_prompt_length() -> usize {
    DEFAULT_MAX_PROMPT_LENGTH
}

fn default_max_influences() -> usize {
    DEFAULT_MAX_INFLUENCES
}

fn default_trimmed_instrumentation() -> usize {
    DEFAULT_TRIMMED_INSTRUMENTATION
}

/// Tunable limits for prompt composition.
///
/// # Examples
///
/// ```
/// use sonic_dna_composer::ComposerConfig;
///
/// let config = ComposerConfig::default().with_max_influences(2);
/// assert_eq!(*config.max_influences(), 2);
/// assert_eq!(*config.max_prompt_length(), 498);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
#[builder(default)]
pub struct ComposerConfig {
    /// Hard character budget for side A
    #[serde(default = "default_max_prompt_length")]
    max_prompt_length: usize,

    /// Maximum artist references in the influence list
    #[serde(default = "default_max_influences")]
    max_influences: usize,

    /// Instrumentation entries kept by the trimming step
    #[serde(default = "default_trimmed_instrumentation")]
    trimmed_instrumentation: usize,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            max_prompt_length: DEFAULT_MAX_PROMPT_LENGTH,
            max_influences: DEFAULT_MAX_INFLUENCES,
            trimmed_instrumentation: DEFAULT_TRIMMED_INSTRUMENTATION,
        }
    }
}

impl ComposerConfig {
    /// Creates a new config builder.
    pub fn builder() -> ComposerConfigBuilder {
        ComposerConfigBuilder::default()
    }

    /// Checks that the limits can produce a usable prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_prompt_length` cannot fit the `...` marker
    /// plus one character, or if `max_influences` is zero.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_prompt_length < 4 {
            return Err(ConfigError::new(format!(
                "max_prompt_length must be at least 4, got {}",
                self.max_prompt_length
            )));
        }
        if self.max_influences == 0 {
            return Err(ConfigError::new("max_influences must be at least 1"));
        }
        Ok(())
    }
}

/// Top-level Sonic DNA configuration.
///
/// # Example
///
/// ```no_run
/// use sonic_dna_composer::SonicDnaConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = SonicDnaConfig::load()?;
/// println!("Budget: {}", config.composer.max_prompt_length());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
pub struct SonicDnaConfig {
    /// Composer limits
    #[serde(default)]
    pub composer: ComposerConfig,
}

impl SonicDnaConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> SonicDnaResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                SonicDnaError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                SonicDnaError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.composer.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: current dir > home dir > bundled default.
    ///
    /// User config files are optional and silently skipped when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed or the merged
    /// values fail validation.
    #[instrument]
    pub fn load() -> SonicDnaResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../sonic_dna.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/sonic_dna/sonic_dna.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("sonic_dna").required(false));

        let config: Self = builder
            .build()
            .map_err(|e| {
                SonicDnaError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                SonicDnaError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.composer.validate()?;
        debug!(composer = ?config.composer, "Configuration loaded");
        Ok(config)
    }
}
