//! In-process stand-in for the track generation service.

use sonic_dna_core::{GeneratedTrack, TrackBackend, TrackRequest, TrackStatus};
use sonic_dna_error::{TrackError, TrackErrorKind};
use tracing::{info, instrument};
use uuid::Uuid;

/// Asset location used by [`MockTrackBackend::default`].
pub const DEFAULT_ASSET_BASE_URL: &str = "https://assets.sonic-dna.local/tracks";

/// A backend that completes every request immediately.
///
/// No audio is produced; the returned track points at `<base>/<id>.mp3` and
/// `<base>/<id>.jpg`.
///
/// # Examples
///
/// ```
/// use sonic_dna::{MockTrackBackend, TrackBackend, TrackRequest, TrackStatus};
///
/// let backend = MockTrackBackend::new("https://cdn.example.com");
/// let request = TrackRequest::new("Pop track. clean vocals.", Vec::new(), "artist-1").unwrap();
/// let track = backend.submit(&request).unwrap();
///
/// assert_eq!(*track.status(), TrackStatus::Completed);
/// assert!(track.audio_url().starts_with("https://cdn.example.com/"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockTrackBackend {
    base_url: String,
}

impl MockTrackBackend {
    /// Creates a backend serving assets under `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Base URL for generated assets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for MockTrackBackend {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_BASE_URL)
    }
}

impl TrackBackend for MockTrackBackend {
    #[instrument(skip(self, request), fields(artist = %request.artist_id()))]
    fn submit(&self, request: &TrackRequest) -> Result<GeneratedTrack, TrackError> {
        let id = Uuid::new_v4().to_string();
        let short = id.split('-').next().unwrap_or(&id);

        let track = GeneratedTrack::builder()
            .title(format!("Track {}", short))
            .audio_url(format!("{}/{}.mp3", self.base_url, id))
            .image_url(format!("{}/{}.jpg", self.base_url, id))
            .status(TrackStatus::Completed)
            .id(id.clone())
            .build()
            .map_err(|e| TrackError::new(TrackErrorKind::GenerationFailed(e.to_string())))?;

        info!(track_id = %track.id(), "Mock track generated");
        Ok(track)
    }
}
