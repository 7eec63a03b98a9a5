//! Character budget enforcement for assembled prompts.
//!
//! Over-budget text is shortened in three escalating steps, re-checking the
//! length before each one:
//!
//! 1. drop every `Tags: ... .` segment
//! 2. keep only the first few `Instrumentation:` entries
//! 3. hard-truncate and append [`ELLIPSIS`]
//!
//! Lengths are counted in characters, never bytes.

use crate::config::{DEFAULT_MAX_PROMPT_LENGTH, DEFAULT_TRIMMED_INSTRUMENTATION};
use regex::{Captures, Regex};
use std::sync::LazyLock;
use tracing::{debug, instrument};

/// Marker appended to hard-truncated text.
pub const ELLIPSIS: &str = "...";

static TAGS_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Tags:.*?\.").expect("Valid tags segment regex"));

/// An `Instrumentation:` list up to the first following period.
pub(crate) static INSTRUMENTATION_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Instrumentation: (.+?)\.").expect("Valid instrumentation segment regex")
});

/// Which enforcement steps changed the text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct LengthReport {
    /// Length before enforcement
    original_length: usize,
    /// Length after enforcement
    final_length: usize,
    /// Tag segments were removed
    tags_removed: bool,
    /// Instrumentation lists were trimmed
    instrumentation_trimmed: bool,
    /// The text was cut and given an ellipsis
    truncated: bool,
}

impl LengthReport {
    /// Returns true if no step ran.
    pub fn untouched(&self) -> bool {
        !self.tags_removed && !self.instrumentation_trimmed && !self.truncated
    }
}

/// A character budget and the trimming policy used to meet it.
///
/// # Examples
///
/// ```
/// use sonic_dna_composer::LengthBudget;
///
/// let budget = LengthBudget::new(20, 2);
/// let (text, report) = budget.enforce("Pop track. Tags: Pop, Dance.");
///
/// assert_eq!(text, "Pop track. ");
/// assert!(*report.tags_removed());
/// assert!(!*report.truncated());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_getters::Getters)]
pub struct LengthBudget {
    /// Maximum characters allowed
    max_length: usize,
    /// Instrumentation entries kept by the trimming step
    trimmed_instrumentation: usize,
}

impl Default for LengthBudget {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PROMPT_LENGTH, DEFAULT_TRIMMED_INSTRUMENTATION)
    }
}

impl LengthBudget {
    /// Creates a budget.
    pub fn new(max_length: usize, trimmed_instrumentation: usize) -> Self {
        Self {
            max_length,
            trimmed_instrumentation,
        }
    }

    /// Returns true if `text` is within budget.
    pub fn fits(&self, text: &str) -> bool {
        text.chars().count() <= self.max_length
    }

    /// Shortens `text` until it fits, reporting which steps ran.
    ///
    /// Text already within budget is returned unchanged.
    #[instrument(skip(self, text), fields(max = self.max_length, length = text.chars().count()))]
    pub fn enforce(&self, text: &str) -> (String, LengthReport) {
        let mut report = LengthReport {
            original_length: text.chars().count(),
            ..LengthReport::default()
        };
        let mut result = text.to_string();

        if !self.fits(&result) {
            result = TAGS_SEGMENT.replace_all(&result, "").into_owned();
            report.tags_removed = true;
            debug!(length = result.chars().count(), "Removed tag segments");
        }

        if !self.fits(&result) {
            let keep = self.trimmed_instrumentation;
            result = INSTRUMENTATION_SEGMENT
                .replace_all(&result, |caps: &Captures| {
                    let kept: Vec<&str> = caps[1].split(", ").take(keep).collect();
                    format!("Instrumentation: {}.", kept.join(", "))
                })
                .into_owned();
            report.instrumentation_trimmed = true;
            debug!(length = result.chars().count(), "Trimmed instrumentation");
        }

        if !self.fits(&result) {
            result = truncate_with_ellipsis(&result, self.max_length);
            report.truncated = true;
            debug!(length = result.chars().count(), "Truncated prompt");
        }

        report.final_length = result.chars().count();
        (result, report)
    }
}

/// Cuts `text` to `max` characters, ending in [`ELLIPSIS`] when there is room.
fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    let marker = ELLIPSIS.chars().count();
    if max < marker {
        return text.chars().take(max).collect();
    }
    let mut cut: String = text.chars().take(max - marker).collect();
    cut.push_str(ELLIPSIS);
    cut
}

/// Enforces `max` characters with the default instrumentation trim.
///
/// # Examples
///
/// ```
/// use sonic_dna_composer::enforce_length;
///
/// assert_eq!(enforce_length("short", 498), "short");
/// assert_eq!(enforce_length("abcdefghij", 8), "abcde...");
/// ```
pub fn enforce_length(text: &str, max: usize) -> String {
    LengthBudget::new(max, DEFAULT_TRIMMED_INSTRUMENTATION)
        .enforce(text)
        .0
}
