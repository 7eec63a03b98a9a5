//! Prompt composition for the Sonic DNA generator.
//!
//! This crate turns an archetype and optional user input into a
//! character-bounded music-generation prompt plus an alternate "side B".
//!
//! # Pipeline
//!
//! - Resolve genre, influences, vocal texture, instrumentation and a plot twist
//! - Assemble the prompt formula
//! - Enforce the character budget ([`LengthBudget`])
//! - Derive side B ([`derive_side_b`]) and technical estimates
//!
//! # Example
//!
//! ```
//! use sonic_dna_composer::{ComposerConfig, PromptComposer};
//! use sonic_dna_core::{PromptInput, SequenceRandom};
//!
//! let composer = PromptComposer::new(ComposerConfig::default());
//! let input = PromptInput::builder()
//!     .archetype_id("trapSoulKing")
//!     .user_vibe("sad and emotional")
//!     .build()
//!     .unwrap();
//!
//! let prompt = composer.generate(&input, &mut SequenceRandom::new([0, 1])).unwrap();
//! assert_eq!(prompt.breakdown().genre(), "Trap Soul, melancholic");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod composer;
mod config;
mod leet;
mod length;
mod plot_twist;
mod technical;
mod variant;

pub use composer::{
    PromptComposer, PromptDraft, PromptDraftBuilder, PromptDraftBuilderError, generate_prompt,
    select_genre,
};
pub use config::{
    ComposerConfig, ComposerConfigBuilder, ComposerConfigBuilderError, DEFAULT_MAX_INFLUENCES,
    DEFAULT_MAX_PROMPT_LENGTH, DEFAULT_TRIMMED_INSTRUMENTATION, SonicDnaConfig,
};
pub use leet::{
    LeetTranslator, RETROWAVE_SUFFIX, destylize_leet, find_by_category, find_by_tags,
    retrowave_style, translate_to_leet,
};
pub use length::{ELLIPSIS, LengthBudget, LengthReport, enforce_length};
pub use plot_twist::{
    TwistContext, TwistContextBuilder, TwistContextBuilderError, apply_plot_twist,
    select_plot_twist,
};
pub use technical::{DEFAULT_TEMPO_BPM, estimate_key, estimate_technical, estimate_tempo};
pub use variant::{SIDE_B_MARKER, derive_side_b};
