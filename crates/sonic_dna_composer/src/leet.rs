//! Leet-speak stylization of artist and song names.
//!
//! Translation walks the dictionary top to bottom and rewrites the running
//! text with every entry in turn. Later entries see earlier output, so
//! rewrites can compound; callers rely on that exact behaviour.

use regex::{NoExpand, Regex, RegexBuilder};
use sonic_dna_core::{LeetCategory, LeetReference};
use sonic_dna_error::{ComposerError, ComposerErrorKind};
use sonic_dna_tables::{leet_dictionary, retrowave_names};
use std::sync::LazyLock;

/// Suffix appended to names without a retrowave table entry.
pub const RETROWAVE_SUFFIX: &str = " (Retrowave Ver)";

static BUNDLED: LazyLock<LeetTranslator> = LazyLock::new(|| {
    LeetTranslator::new(leet_dictionary()).expect("Escaped dictionary entries are valid regex")
});

/// Compiled substitution patterns for a leet dictionary.
///
/// Each entry's `original` is matched literally and without regard to case.
/// The replacement is inserted verbatim, so `$` in a stylized name is never
/// read as a capture reference.
///
/// # Examples
///
/// ```
/// use sonic_dna_composer::LeetTranslator;
///
/// let translator = LeetTranslator::bundled();
/// assert_eq!(translator.translate("drake"), "Dr4k3");
/// assert_eq!(translator.translate("Nobody Famous"), "Nobody Famous");
/// ```
#[derive(Debug, Clone)]
pub struct LeetTranslator {
    patterns: Vec<(Regex, &'static str)>,
}

impl LeetTranslator {
    /// Compiles a translator for the given dictionary, preserving its order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPattern` if an entry cannot be compiled.
    #[track_caller]
    pub fn new(dictionary: &[LeetReference]) -> Result<Self, ComposerError> {
        let mut patterns = Vec::with_capacity(dictionary.len());
        for reference in dictionary {
            let regex = RegexBuilder::new(&regex::escape(reference.original))
                .case_insensitive(true)
                .build()
                .map_err(|e| {
                    ComposerError::new(ComposerErrorKind::InvalidPattern(format!(
                        "'{}': {}",
                        reference.original, e
                    )))
                })?;
            patterns.push((regex, reference.leet));
        }
        Ok(Self { patterns })
    }

    /// The process-wide translator for the bundled dictionary.
    pub fn bundled() -> &'static LeetTranslator {
        &BUNDLED
    }

    /// Number of compiled entries.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true if the translator has no entries.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Rewrites every dictionary match in `text`.
    pub fn translate(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (regex, leet) in &self.patterns {
            if regex.is_match(&result) {
                result = regex.replace_all(&result, NoExpand(*leet)).into_owned();
            }
        }
        result
    }
}

/// Translates text with the bundled dictionary.
///
/// # Examples
///
/// ```
/// use sonic_dna_composer::translate_to_leet;
///
/// assert_eq!(translate_to_leet("The Weeknd"), "Th3 W33knd");
/// ```
pub fn translate_to_leet(text: &str) -> String {
    LeetTranslator::bundled().translate(text)
}

/// Dictionary entries with a tag containing any of the query tags.
///
/// Matching ignores case; results keep dictionary order.
pub fn find_by_tags<S: AsRef<str>>(tags: &[S]) -> Vec<&'static LeetReference> {
    leet_dictionary()
        .iter()
        .filter(|reference| reference.matches_any_tag(tags))
        .collect()
}

/// Dictionary entries of one category, in dictionary order.
pub fn find_by_category(category: LeetCategory) -> Vec<&'static LeetReference> {
    leet_dictionary()
        .iter()
        .filter(|reference| reference.category == category)
        .collect()
}

/// Retrowave stylization of an artist name.
///
/// Known names use the retrowave table. Anything else is leet-translated and
/// tagged with [`RETROWAVE_SUFFIX`].
///
/// # Examples
///
/// ```
/// use sonic_dna_composer::retrowave_style;
///
/// assert_eq!(retrowave_style("drake"), "Dr. Ake (Synthwave Ver)");
/// assert_eq!(retrowave_style("Nobody"), "Nobody (Retrowave Ver)");
/// ```
pub fn retrowave_style(name: &str) -> String {
    let lowered = name.to_lowercase();
    match retrowave_names()
        .iter()
        .find(|(original, _)| original.to_lowercase() == lowered)
    {
        Some((_, styled)) => (*styled).to_string(),
        None => format!("{}{}", translate_to_leet(name), RETROWAVE_SUFFIX),
    }
}

/// Maps leet glyphs back to plain letters.
///
/// The mapping is lossy: digits that were digits to begin with are rewritten
/// as well.
///
/// # Examples
///
/// ```
/// use sonic_dna_composer::destylize_leet;
///
/// assert_eq!(destylize_leet("Dr4k3"), "Drake");
/// assert_eq!(destylize_leet("Tr4v1$ $c0tt"), "Travis scott");
/// ```
pub fn destylize_leet(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '4' => 'a',
            '3' => 'e',
            '1' => 'i',
            '0' => 'o',
            '$' => 's',
            'U' => 'u',
            other => other,
        })
        .collect()
}
