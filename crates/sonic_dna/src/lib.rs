//! Sonic DNA - archetype-driven music prompt generation
//!
//! Sonic DNA turns an artist archetype plus optional user input into a
//! character-bounded prompt for a music-generation backend, with
//! leet-stylized artist references and an alternate "side B" remix.
//!
//! # Quick Start
//!
//! ```
//! use sonic_dna::{PromptComposer, PromptInput, SeededRandom};
//!
//! let input = PromptInput::builder()
//!     .archetype_id("trapSoulKing")
//!     .user_vibe("sad and emotional")
//!     .custom_influences(vec!["Drake".to_string()])
//!     .build()
//!     .unwrap();
//!
//! let prompt = PromptComposer::default()
//!     .generate(&input, &mut SeededRandom::new(7))
//!     .unwrap();
//!
//! assert!(prompt.prompt().contains("Dr4k3"));
//! assert!(*prompt.character_count() <= 498);
//! ```
//!
//! # Architecture
//!
//! - `sonic_dna_error` - Error types
//! - `sonic_dna_core` - Shared records, request/response types, random sources
//! - `sonic_dna_tables` - Static reference tables
//! - `sonic_dna_composer` - Leet translator, plot twists, prompt pipeline
//!
//! This crate re-exports everything for convenience and adds a mock track
//! backend and logging setup for the `sonic_dna` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod telemetry;

pub use sonic_dna_composer::*;
pub use sonic_dna_core::*;
pub use sonic_dna_error::*;
pub use sonic_dna_tables::*;

pub use backend::{DEFAULT_ASSET_BASE_URL, MockTrackBackend};
pub use telemetry::{LoggingConfig, init_logging};
