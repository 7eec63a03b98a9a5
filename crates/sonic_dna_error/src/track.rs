//! Track backend error types.

/// Specific error conditions for track generation requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TrackErrorKind {
    /// Prompt text is empty or whitespace
    #[display("Missing required field: prompt")]
    EmptyPrompt,
    /// Artist identifier is empty or whitespace
    #[display("Missing required field: artistId")]
    MissingArtist,
    /// Prompt exceeds the backend character budget
    #[display("Prompt is {} characters, maximum is {}", length, max)]
    PromptTooLong {
        /// Actual prompt length in characters
        length: usize,
        /// Maximum accepted length
        max: usize,
    },
    /// Backend reported a failed generation
    #[display("Generation failed: {}", _0)]
    GenerationFailed(String),
}

/// Track backend error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Track Error: {} at line {} in {}", kind, line, file)]
pub struct TrackError {
    /// The kind of error that occurred
    pub kind: TrackErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TrackError {
    /// Create a new track error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TrackErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TrackErrorKind {
        &self.kind
    }
}
