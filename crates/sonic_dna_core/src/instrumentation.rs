//! Instrumentation catalog categories.

use serde::Serialize;
use sonic_dna_error::{TableError, TableErrorKind};

/// Buckets of the instrumentation catalog, in catalog order.
///
/// Iterating with [`strum::IntoEnumIterator`] yields the categories in the
/// order their tags are flattened.
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
pub enum InstrumentationCategory {
    /// Drum kits and programmed beats
    #[display("drums")]
    Drums,
    /// Bass instruments
    #[display("bass")]
    Bass,
    /// Pianos, organs, keys
    #[display("keys")]
    Keys,
    /// Bowed and plucked strings
    #[display("strings")]
    Strings,
    /// Horns
    #[display("brass")]
    Brass,
    /// Guitars and banjo
    #[display("guitars")]
    Guitars,
    /// Synthesizers
    #[display("synths")]
    Synths,
    /// Hand percussion
    #[display("percussion")]
    Percussion,
    /// Sound effects and transitions
    #[display("effects")]
    Effects,
    /// Production descriptors
    #[display("production")]
    Production,
}

impl InstrumentationCategory {
    /// Convert to the lower-case category key.
    pub fn as_str(&self) -> &'static str {
        match self {
            InstrumentationCategory::Drums => "drums",
            InstrumentationCategory::Bass => "bass",
            InstrumentationCategory::Keys => "keys",
            InstrumentationCategory::Strings => "strings",
            InstrumentationCategory::Brass => "brass",
            InstrumentationCategory::Guitars => "guitars",
            InstrumentationCategory::Synths => "synths",
            InstrumentationCategory::Percussion => "percussion",
            InstrumentationCategory::Effects => "effects",
            InstrumentationCategory::Production => "production",
        }
    }
}

impl std::str::FromStr for InstrumentationCategory {
    type Err = TableError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drums" => Ok(InstrumentationCategory::Drums),
            "bass" => Ok(InstrumentationCategory::Bass),
            "keys" => Ok(InstrumentationCategory::Keys),
            "strings" => Ok(InstrumentationCategory::Strings),
            "brass" => Ok(InstrumentationCategory::Brass),
            "guitars" => Ok(InstrumentationCategory::Guitars),
            "synths" => Ok(InstrumentationCategory::Synths),
            "percussion" => Ok(InstrumentationCategory::Percussion),
            "effects" => Ok(InstrumentationCategory::Effects),
            "production" => Ok(InstrumentationCategory::Production),
            _ => Err(TableError::new(TableErrorKind::InvalidCategory(
                s.to_string(),
            ))),
        }
    }
}
