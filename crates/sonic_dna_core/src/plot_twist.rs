//! Narrative transformation templates.

use serde::Serialize;

/// A narrative transformation template.
///
/// The formula contains bracketed placeholders such as `[Genre A]` that are
/// substituted by exact string match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PlotTwist {
    /// Unique identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Template text with bracketed placeholders
    pub formula: &'static str,
    /// Filled-in example for display
    pub example: &'static str,
}

impl PlotTwist {
    /// Returns true if the formula still contains the given placeholder token.
    pub fn has_placeholder(&self, token: &str) -> bool {
        self.formula.contains(token)
    }
}
