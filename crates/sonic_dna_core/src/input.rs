//! Composer request type.

use serde::{Deserialize, Serialize};

/// A request to the prompt composer.
///
/// Only the archetype identifier is required; everything else refines or
/// overrides what the archetype would pick on its own.
///
/// # Examples
///
/// ```
/// use sonic_dna_core::PromptInput;
///
/// let input = PromptInput::builder()
///     .archetype_id("trapSoulKing")
///     .user_vibe("sad and emotional")
///     .custom_influences(["Drake".to_string(), "The Weeknd".to_string()])
///     .build()
///     .unwrap();
///
/// assert_eq!(input.archetype_id(), "trapSoulKing");
/// assert_eq!(input.custom_influences().len(), 2);
/// assert!(input.plot_twist_id().is_none());
/// ```
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
pub struct PromptInput {
    /// Archetype identifier; must name a known archetype
    archetype_id: String,
    /// Free-text mood description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    user_vibe: Option<String>,
    /// Artist names to reference, in caller order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    custom_influences: Vec<String>,
    /// Plot twist to apply instead of a random one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    plot_twist_id: Option<String>,
    /// Instrumentation override; empty means use the archetype's tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    custom_instrumentation: Vec<String>,
    /// Song the plot twist should riff on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    reference_song: Option<String>,
}

impl PromptInput {
    /// Creates a request for an archetype with no overrides.
    pub fn new(archetype_id: impl Into<String>) -> Self {
        Self {
            archetype_id: archetype_id.into(),
            user_vibe: None,
            custom_influences: Vec::new(),
            plot_twist_id: None,
            custom_instrumentation: Vec::new(),
            reference_song: None,
        }
    }

    /// Creates a new request builder.
    pub fn builder() -> PromptInputBuilder {
        PromptInputBuilder::default()
    }
}
