//! Top-level error wrapper types.

use crate::{ComposerError, ConfigError, JsonError, TableError, TrackError};

/// Every error condition the Sonic DNA crates can raise.
///
/// # Examples
///
/// ```
/// use sonic_dna_error::{ConfigError, SonicDnaError};
///
/// let err: SonicDnaError = ConfigError::new("bad value").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum SonicDnaErrorKind {
    /// Prompt composition error
    #[from(ComposerError)]
    Composer(ComposerError),
    /// Reference table error
    #[from(TableError)]
    Table(TableError),
    /// Track backend error
    #[from(TrackError)]
    Track(TrackError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON rendering error
    #[from(JsonError)]
    Json(JsonError),
}

/// Sonic DNA error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Sonic DNA Error: {}", _0)]
pub struct SonicDnaError(Box<SonicDnaErrorKind>);

impl SonicDnaError {
    /// Create a new error from a kind.
    pub fn new(kind: SonicDnaErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SonicDnaErrorKind {
        &self.0
    }
}

impl<T> From<T> for SonicDnaError
where
    T: Into<SonicDnaErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Sonic DNA operations.
pub type SonicDnaResult<T> = std::result::Result<T, SonicDnaError>;
