//! Reference table error types.

/// Kinds of reference table errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TableErrorKind {
    /// Instrumentation category key is outside the fixed category set
    #[display("Invalid instrumentation category: {}", _0)]
    InvalidCategory(String),
}

/// Reference table error with location tracking.
///
/// # Examples
///
/// ```
/// use sonic_dna_error::{TableError, TableErrorKind};
///
/// let err = TableError::new(TableErrorKind::InvalidCategory("kazoo".to_string()));
/// assert!(format!("{}", err).contains("kazoo"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Table Error: {} at line {} in {}", kind, line, file)]
pub struct TableError {
    /// The kind of error that occurred
    pub kind: TableErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TableError {
    /// Create a new table error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TableErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TableErrorKind {
        &self.kind
    }
}
