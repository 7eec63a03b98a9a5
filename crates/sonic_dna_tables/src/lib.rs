//! Static reference tables for the Sonic DNA prompt generator.
//!
//! Five immutable tables back the composer: archetypes, vocal textures, the
//! instrumentation catalog, the leet dictionary and plot twists. All lookups
//! are pure reads that preserve declared order. Random draws take a
//! caller-supplied [`RandomSource`].
//!
//! # Example
//!
//! ```
//! use sonic_dna_tables::{archetype_by_id, vocal_texture_by_id};
//!
//! let archetype = archetype_by_id("trapSoulKing").unwrap();
//! assert_eq!(archetype.default_genres[0], "Trap Soul");
//!
//! let texture = vocal_texture_by_id(archetype.vocal_texture_presets[0]).unwrap();
//! assert!(texture.tag.starts_with("autotuned vocals"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod archetypes;
mod instrumentation;
mod leet_dictionary;
mod plot_twists;
mod vocal_textures;

pub use archetypes::ARCHETYPES;
pub use instrumentation::category_tags;
pub use leet_dictionary::{LEET_DICTIONARY, RETROWAVE_NAMES};
pub use plot_twists::PLOT_TWISTS;
pub use vocal_textures::VOCAL_TEXTURES;

use sonic_dna_core::{
    Archetype, InstrumentationCategory, LeetReference, PlotTwist, RandomSource, VocalTexture,
};
use sonic_dna_error::TableError;
use strum::IntoEnumIterator;

/// All archetypes in declared order.
pub fn archetypes() -> &'static [Archetype] {
    ARCHETYPES
}

/// Looks up an archetype by identifier.
pub fn archetype_by_id(id: &str) -> Option<&'static Archetype> {
    ARCHETYPES.iter().find(|archetype| archetype.id == id)
}

/// All vocal textures in declared order.
pub fn vocal_textures() -> &'static [VocalTexture] {
    VOCAL_TEXTURES
}

/// Looks up a vocal texture by identifier.
pub fn vocal_texture_by_id(id: &str) -> Option<&'static VocalTexture> {
    VOCAL_TEXTURES.iter().find(|texture| texture.id == id)
}

/// Draws a vocal texture uniformly from the full table.
pub fn random_vocal_texture(rng: &mut impl RandomSource) -> &'static VocalTexture {
    &VOCAL_TEXTURES[rng.next_index(VOCAL_TEXTURES.len()) % VOCAL_TEXTURES.len()]
}

/// Every instrumentation tag, category by category in catalog order.
///
/// Tags listed under more than one category appear once per category.
pub fn instrumentation_tags_flat() -> Vec<&'static str> {
    InstrumentationCategory::iter()
        .flat_map(|category| category_tags(category).iter().copied())
        .collect()
}

/// Samples `count` tags without replacement from the flattened catalog.
///
/// Positions are drawn uniformly with a partial Fisher-Yates shuffle, so no
/// catalog position is picked twice. `count` is clamped to the catalog size.
#[tracing::instrument(skip(rng))]
pub fn random_instrumentation(rng: &mut impl RandomSource, count: usize) -> Vec<&'static str> {
    let mut pool = instrumentation_tags_flat();
    let count = count.min(pool.len());

    for i in 0..count {
        let remaining = pool.len() - i;
        let j = i + rng.next_index(remaining) % remaining;
        pool.swap(i, j);
    }

    pool.truncate(count);
    tracing::debug!(picked = ?pool, "Sampled instrumentation");
    pool
}

/// Tags for a category given by its lower-case key.
///
/// # Errors
///
/// Returns `InvalidCategory` if the key is not one of the catalog categories.
///
/// # Example
///
/// ```
/// use sonic_dna_tables::instrumentation_by_category;
///
/// assert_eq!(instrumentation_by_category("brass").unwrap()[0], "trumpet");
/// assert!(instrumentation_by_category("kazoo").is_err());
/// ```
#[track_caller]
pub fn instrumentation_by_category(key: &str) -> Result<&'static [&'static str], TableError> {
    let category: InstrumentationCategory = key.parse()?;
    Ok(category_tags(category))
}

/// All plot twists in declared order.
pub fn plot_twists() -> &'static [PlotTwist] {
    PLOT_TWISTS
}

/// Looks up a plot twist by identifier.
pub fn plot_twist_by_id(id: &str) -> Option<&'static PlotTwist> {
    PLOT_TWISTS.iter().find(|twist| twist.id == id)
}

/// Draws a plot twist uniformly from the full table.
pub fn random_plot_twist(rng: &mut impl RandomSource) -> &'static PlotTwist {
    &PLOT_TWISTS[rng.next_index(PLOT_TWISTS.len()) % PLOT_TWISTS.len()]
}

/// The leet dictionary in application order.
pub fn leet_dictionary() -> &'static [LeetReference] {
    LEET_DICTIONARY
}

/// The retrowave name table.
pub fn retrowave_names() -> &'static [(&'static str, &'static str)] {
    RETROWAVE_NAMES
}
