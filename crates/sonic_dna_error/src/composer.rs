//! Prompt composer error types.

/// Specific error conditions for prompt composition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ComposerErrorKind {
    /// The requested archetype identifier has no table entry
    #[display("Archetype '{}' not found", _0)]
    ArchetypeNotFound(String),
    /// A substitution pattern failed to compile
    #[display("Invalid substitution pattern: {}", _0)]
    InvalidPattern(String),
    /// The request could not be assembled
    #[display("Invalid prompt input: {}", _0)]
    InvalidInput(String),
}

/// Error type for prompt composition.
///
/// # Examples
///
/// ```
/// use sonic_dna_error::{ComposerError, ComposerErrorKind};
///
/// let err = ComposerError::new(ComposerErrorKind::ArchetypeNotFound("unknown-xyz".into()));
/// assert!(format!("{}", err).contains("unknown-xyz"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Composer Error: {} at line {} in {}", kind, line, file)]
pub struct ComposerError {
    /// The specific error condition
    pub kind: ComposerErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ComposerError {
    /// Create a new ComposerError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ComposerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ComposerErrorKind {
        &self.kind
    }
}
