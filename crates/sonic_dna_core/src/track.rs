//! Contract with the downstream music generation backend.

use serde::{Deserialize, Serialize};
use sonic_dna_error::{TrackError, TrackErrorKind};

/// Largest prompt the generation backend accepts, in characters.
pub const MAX_TRACK_PROMPT_LENGTH: usize = 498;

/// A validated request to generate a track from a prompt.
///
/// # Examples
///
/// ```
/// use sonic_dna_core::TrackRequest;
///
/// let request = TrackRequest::new("Pop track. clean vocals.", vec!["Pop".into()], "artist-1").unwrap();
/// assert_eq!(request.artist_id(), "artist-1");
///
/// assert!(TrackRequest::new("   ", Vec::new(), "artist-1").is_err());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
#[serde(rename_all = "camelCase")]
pub struct TrackRequest {
    /// Prompt text, at most [`MAX_TRACK_PROMPT_LENGTH`] characters
    prompt: String,
    /// Optional style tags
    #[serde(default)]
    tags: Vec<String>,
    /// Artist the track is generated for
    artist_id: String,
}

impl TrackRequest {
    /// Validates and creates a request.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt or artist id is blank, or the prompt is
    /// longer than [`MAX_TRACK_PROMPT_LENGTH`] characters.
    #[track_caller]
    pub fn new(
        prompt: impl Into<String>,
        tags: Vec<String>,
        artist_id: impl Into<String>,
    ) -> Result<Self, TrackError> {
        let prompt = prompt.into();
        let artist_id = artist_id.into();

        if prompt.trim().is_empty() {
            return Err(TrackError::new(TrackErrorKind::EmptyPrompt));
        }
        if artist_id.trim().is_empty() {
            return Err(TrackError::new(TrackErrorKind::MissingArtist));
        }
        let length = prompt.chars().count();
        if length > MAX_TRACK_PROMPT_LENGTH {
            return Err(TrackError::new(TrackErrorKind::PromptTooLong {
                length,
                max: MAX_TRACK_PROMPT_LENGTH,
            }));
        }

        Ok(Self {
            prompt,
            tags,
            artist_id,
        })
    }
}

/// Lifecycle state of a generated track.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum TrackStatus {
    /// Queued or still generating
    #[serde(alias = "queued")]
    #[display("processing")]
    Processing,
    /// Audio is ready
    #[display("completed")]
    Completed,
    /// Generation failed
    #[display("failed")]
    Failed,
}

/// A track returned by the generation backend.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct GeneratedTrack {
    /// Backend identifier
    id: String,
    /// Track title
    title: String,
    /// Reference to the audio asset
    audio_url: String,
    /// Reference to the cover image
    image_url: String,
    /// Current status
    status: TrackStatus,
}

impl GeneratedTrack {
    /// Creates a new track builder.
    pub fn builder() -> GeneratedTrackBuilder {
        GeneratedTrackBuilder::default()
    }
}

/// A service that turns prompts into tracks.
pub trait TrackBackend {
    /// Submits a request and returns the resulting track.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the request or generation fails.
    fn submit(&self, request: &TrackRequest) -> Result<GeneratedTrack, TrackError>;
}
