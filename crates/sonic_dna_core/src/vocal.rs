//! Vocal delivery styles.

use serde::Serialize;

/// A named vocal-delivery style.
///
/// Only [`VocalTexture::tag`] reaches the generated prompt; the other fields
/// are for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VocalTexture {
    /// Unique identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Descriptor string consumed by the generation backend
    pub tag: &'static str,
}
