//! Leet-speak dictionary records.

use serde::Serialize;

/// What kind of proper noun a [`LeetReference`] stylizes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum LeetCategory {
    /// A performing artist
    #[display("performer")]
    Performer,
    /// An album or other release
    #[display("release")]
    Release,
    /// A single song
    #[display("track")]
    Track,
    /// A production or vocal technique
    #[display("technique")]
    Technique,
}

impl LeetCategory {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeetCategory::Performer => "performer",
            LeetCategory::Release => "release",
            LeetCategory::Track => "track",
            LeetCategory::Technique => "technique",
        }
    }
}

impl std::str::FromStr for LeetCategory {
    type Err = String;

    /// Parses the category name, also accepting the older
    /// `artist`/`album`/`song`/`style` spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "performer" | "artist" => Ok(LeetCategory::Performer),
            "release" | "album" => Ok(LeetCategory::Release),
            "track" | "song" => Ok(LeetCategory::Track),
            "technique" | "style" => Ok(LeetCategory::Technique),
            _ => Err(format!("Unknown leet category: {}", s)),
        }
    }
}

/// A mapping from a real-world proper noun to a stylized spelling.
///
/// Matching against `original` is case-insensitive. Entries sharing an
/// `original` are discouraged but not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LeetReference {
    /// The proper noun as normally written
    pub original: &'static str,
    /// Stylized spelling
    pub leet: &'static str,
    /// Kind of noun
    pub category: LeetCategory,
    /// Topical tags used for archetype matching
    pub tags: &'static [&'static str],
}

impl LeetReference {
    /// Returns true if any of this entry's tags contains any query tag,
    /// ignoring case.
    pub fn matches_any_tag<S: AsRef<str>>(&self, query: &[S]) -> bool {
        self.tags.iter().any(|tag| {
            let tag = tag.to_lowercase();
            query
                .iter()
                .any(|q| tag.contains(&q.as_ref().to_lowercase()))
        })
    }
}
