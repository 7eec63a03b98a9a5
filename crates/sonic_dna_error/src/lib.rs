//! Error types for the Sonic DNA prompt generator.
//!
//! This crate provides the error types used throughout the Sonic DNA workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use sonic_dna_error::{ComposerError, ComposerErrorKind, SonicDnaResult};
//!
//! fn resolve(id: &str) -> SonicDnaResult<()> {
//!     Err(ComposerError::new(ComposerErrorKind::ArchetypeNotFound(id.to_string())))?
//! }
//!
//! match resolve("unknown-xyz") {
//!     Ok(()) => println!("resolved"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod composer;
mod config;
mod error;
mod json;
mod table;
mod track;

pub use composer::{ComposerError, ComposerErrorKind};
pub use config::ConfigError;
pub use error::{SonicDnaError, SonicDnaErrorKind, SonicDnaResult};
pub use json::JsonError;
pub use table::{TableError, TableErrorKind};
pub use track::{TrackError, TrackErrorKind};
