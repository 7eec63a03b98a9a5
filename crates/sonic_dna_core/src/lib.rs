//! Core data types for the Sonic DNA prompt generator.
//!
//! This crate provides the value records shared by the reference tables, the
//! prompt composer, and downstream track backends.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod archetype;
mod input;
mod instrumentation;
mod leet;
mod output;
mod plot_twist;
mod random;
mod track;
mod vocal;

pub use archetype::Archetype;
pub use input::{PromptInput, PromptInputBuilder, PromptInputBuilderError};
pub use instrumentation::InstrumentationCategory;
pub use leet::{LeetCategory, LeetReference};
pub use output::{
    GeneratedPrompt, MusicalMode, PromptBreakdown, PromptBreakdownBuilder,
    PromptBreakdownBuilderError, TechnicalParameters,
};
pub use plot_twist::PlotTwist;
pub use random::{RandomSource, SeededRandom, SequenceRandom, ThreadRandom};
pub use track::{
    GeneratedTrack, GeneratedTrackBuilder, GeneratedTrackBuilderError, MAX_TRACK_PROMPT_LENGTH,
    TrackBackend, TrackRequest, TrackStatus,
};
pub use vocal::VocalTexture;
