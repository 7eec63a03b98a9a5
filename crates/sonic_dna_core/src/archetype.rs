//! Artist persona templates.

use serde::Serialize;

/// A reusable artist persona template.
///
/// Archetypes live in a static table, so every field borrows `'static` data.
/// Consumers rely on at least one default genre and one vocal-texture preset.
///
/// # Examples
///
/// ```
/// use sonic_dna_core::Archetype;
///
/// let archetype = Archetype {
///     id: "lofiMonk",
///     name: "Lo-Fi Monk",
///     description: "Tape hiss and patience",
///     default_genres: &["Lo-Fi", "Ambient"],
///     vocal_texture_presets: &["soft"],
///     instrumentation_tags: &["lo-fi drums", "rhodes piano"],
/// };
///
/// assert_eq!(archetype.primary_genre(), Some("Lo-Fi"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Archetype {
    /// Unique identifier within the archetype table
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// One-line description of the persona
    pub description: &'static str,
    /// Default genres, most representative first
    pub default_genres: &'static [&'static str],
    /// Vocal-texture preset identifiers, preferred first
    pub vocal_texture_presets: &'static [&'static str],
    /// Instrumentation tags used when the caller supplies none
    pub instrumentation_tags: &'static [&'static str],
}

impl Archetype {
    /// The first default genre, if any.
    pub fn primary_genre(&self) -> Option<&'static str> {
        self.default_genres.first().copied()
    }

    /// The preferred vocal-texture preset identifier, if any.
    pub fn primary_vocal_preset(&self) -> Option<&'static str> {
        self.vocal_texture_presets.first().copied()
    }
}
