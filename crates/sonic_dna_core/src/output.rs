//! Composer output types.

use serde::Serialize;

/// Which segment values went into a generated prompt.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct PromptBreakdown {
    /// Selected genre, possibly with a mood suffix
    genre: String,
    /// Stylized artist references, at most the configured limit
    influences: Vec<String>,
    /// Tag string of the selected vocal texture
    vocal_texture: String,
    /// Instrumentation entries used in the draft
    instrumentation: Vec<String>,
    /// Raw formula of the selected plot twist
    plot_twist: String,
    /// Genre tags plus the user vibe
    tags: Vec<String>,
}

impl PromptBreakdown {
    /// Creates a breakdown from its segment values.
    pub fn new(
        genre: impl Into<String>,
        influences: Vec<String>,
        vocal_texture: impl Into<String>,
        instrumentation: Vec<String>,
        plot_twist: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            genre: genre.into(),
            influences,
            vocal_texture: vocal_texture.into(),
            instrumentation,
            plot_twist: plot_twist.into(),
            tags,
        }
    }

    /// Creates a new breakdown builder.
    pub fn builder() -> PromptBreakdownBuilder {
        PromptBreakdownBuilder::default()
    }
}

/// Tonal mode of the suggested key.
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
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum MusicalMode {
    /// Major mode
    #[display("major")]
    Major,
    /// Minor mode
    #[display("minor")]
    Minor,
}

/// Best-effort musical parameters derived from the genre and archetype.
///
/// These are estimates for display and are never sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalParameters {
    /// Tempo estimate in beats per minute
    tempo_bpm: u16,
    /// Tonic of the suggested key
    key: String,
    /// Mode of the suggested key
    mode: MusicalMode,
}

impl TechnicalParameters {
    /// Creates a parameter estimate.
    pub fn new(tempo_bpm: u16, key: impl Into<String>, mode: MusicalMode) -> Self {
        Self {
            tempo_bpm,
            key: key.into(),
            mode,
        }
    }
}

/// The composer's output for one request.
///
/// `prompt` and `side_a` are the same text; `character_count` is its length
/// in characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_getters::Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPrompt {
    /// Length-enforced prompt text
    prompt: String,
    /// Number of characters in `prompt`
    character_count: usize,
    /// Segment values that built the prompt
    breakdown: PromptBreakdown,
    /// Primary variant, identical to `prompt`
    side_a: String,
    /// Derived "remix" variant
    side_b: String,
    /// Derived tempo, key and mode
    #[serde(skip_serializing_if = "Option::is_none")]
    technical: Option<TechnicalParameters>,
}

impl GeneratedPrompt {
    /// Bundles a finished prompt, counting its characters and copying it to side A.
    pub fn new(
        prompt: String,
        breakdown: PromptBreakdown,
        side_b: String,
        technical: Option<TechnicalParameters>,
    ) -> Self {
        Self {
            character_count: prompt.chars().count(),
            side_a: prompt.clone(),
            prompt,
            breakdown,
            side_b,
            technical,
        }
    }
}
