//! Plot twist selection and placeholder substitution.

use sonic_dna_core::{PlotTwist, RandomSource};
use sonic_dna_tables::{plot_twist_by_id, random_plot_twist};
use tracing::{debug, warn};

/// Values available for filling a plot twist formula.
///
/// # Examples
///
/// ```
/// use sonic_dna_composer::TwistContext;
///
/// let context = TwistContext::builder()
///     .genre("Trap Soul")
///     .artist("Dr4k3")
///     .build()
///     .unwrap();
///
/// assert_eq!(context.genre().as_deref(), Some("Trap Soul"));
/// assert!(context.song().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(default, setter(into, strip_option))]
pub struct TwistContext {
    /// Song title, already stylized
    song: Option<String>,
    /// Genre to splice into genre slots
    genre: Option<String>,
    /// Artist to splice into artist slots
    artist: Option<String>,
}

impl TwistContext {
    /// Creates a context from optional values.
    pub fn new(song: Option<String>, genre: Option<String>, artist: Option<String>) -> Self {
        Self {
            song,
            genre,
            artist,
        }
    }

    /// Creates a new context builder.
    pub fn builder() -> TwistContextBuilder {
        TwistContextBuilder::default()
    }
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Song,
    Genre,
    Artist,
}

struct Placeholder {
    token: &'static str,
    slot: Slot,
    suffix: &'static str,
}

const fn placeholder(token: &'static str, slot: Slot, suffix: &'static str) -> Placeholder {
    Placeholder {
        token,
        slot,
        suffix,
    }
}

/// Recognized placeholders in substitution order.
const PLACEHOLDERS: &[Placeholder] = &[
    placeholder("[Famous Song]", Slot::Song, ""),
    placeholder("[Song]", Slot::Song, ""),
    placeholder("[Sad Song]", Slot::Song, ""),
    placeholder("[Electronic Song]", Slot::Song, ""),
    placeholder("[English Song]", Slot::Song, ""),
    placeholder("[Male Artist Song]", Slot::Song, ""),
    placeholder("[Opposite Genre]", Slot::Genre, ""),
    placeholder("[Genre A]", Slot::Genre, ""),
    placeholder("[Modern Artist Style]", Slot::Artist, "'s style"),
    placeholder("[Western Artist]", Slot::Artist, ""),
];

/// Fills a plot twist formula from the context.
///
/// Each recognized placeholder has its first occurrence replaced when the
/// matching context value is present. Anything else, including
/// unrecognized placeholders, is left verbatim.
///
/// # Examples
///
/// ```
/// use sonic_dna_composer::{apply_plot_twist, TwistContext};
/// use sonic_dna_tables::plot_twist_by_id;
///
/// let twist = plot_twist_by_id("eraSwap").unwrap();
/// let context = TwistContext::builder().artist("Dr4k3").build().unwrap();
///
/// assert_eq!(
///     apply_plot_twist(twist, &context),
///     "Take Dr4k3's style but produce it like [Decade]"
/// );
/// ```
pub fn apply_plot_twist(twist: &PlotTwist, context: &TwistContext) -> String {
    let mut text = twist.formula.to_string();

    for placeholder in PLACEHOLDERS {
        let value = match placeholder.slot {
            Slot::Song => context.song.as_deref(),
            Slot::Genre => context.genre.as_deref(),
            Slot::Artist => context.artist.as_deref(),
        };
        let Some(value) = value else {
            continue;
        };
        if text.contains(placeholder.token) {
            let replacement = format!("{}{}", value, placeholder.suffix);
            text = text.replacen(placeholder.token, &replacement, 1);
        }
    }

    text
}

/// Picks the requested plot twist, or draws one at random.
///
/// An identifier that names no twist falls back to a random draw.
pub fn select_plot_twist(id: Option<&str>, rng: &mut impl RandomSource) -> &'static PlotTwist {
    if let Some(id) = id {
        if let Some(twist) = plot_twist_by_id(id) {
            debug!(twist = twist.id, "Using requested plot twist");
            return twist;
        }
        warn!(requested = id, "Unknown plot twist, drawing at random");
    }

    let twist = random_plot_twist(rng);
    debug!(twist = twist.id, "Drew random plot twist");
    twist
}
