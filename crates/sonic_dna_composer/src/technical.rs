//! Tempo and key estimates.

use sonic_dna_core::{MusicalMode, TechnicalParameters};

/// Tempo used when no genre keyword matches.
pub const DEFAULT_TEMPO_BPM: u16 = 120;

/// Genre keywords and their tempo, checked in order.
const TEMPO_RULES: &[(&[&str], u16)] = &[
    (&["trap", "hip hop"], 140),
    (&["pop"], 120),
    (&["afrobeat"], 105),
    (&["r&b", "rnb"], 90),
    (&["ballad"], 70),
];

const KEYS: [&str; 7] = ["C", "D", "E", "F", "G", "A", "B"];

/// Estimates a tempo from genre keywords.
///
/// # Examples
///
/// ```
/// use sonic_dna_composer::estimate_tempo;
///
/// assert_eq!(estimate_tempo("Trap Soul, melancholic"), 140);
/// assert_eq!(estimate_tempo("Afrobeats"), 105);
/// assert_eq!(estimate_tempo("Synthwave"), 120);
/// ```
pub fn estimate_tempo(genre: &str) -> u16 {
    let genre = genre.to_lowercase();
    TEMPO_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| genre.contains(keyword)))
        .map(|(_, bpm)| *bpm)
        .unwrap_or(DEFAULT_TEMPO_BPM)
}

/// Picks a tonic from the archetype identifier.
pub fn estimate_key(archetype_id: &str) -> &'static str {
    KEYS[archetype_id.chars().count() % KEYS.len()]
}

/// Derives display-only musical parameters.
pub fn estimate_technical(genre: &str, archetype_id: &str) -> TechnicalParameters {
    TechnicalParameters::new(
        estimate_tempo(genre),
        estimate_key(archetype_id),
        MusicalMode::Minor,
    )
}
