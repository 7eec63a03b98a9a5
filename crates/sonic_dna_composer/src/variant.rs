//! Side B "remix" derivation.
//!
//! Side B starts from the length-enforced side A and rewrites it in four
//! passes: a fresh plot twist, a production flip, retrowave artist names
//! and finally the `[Side B]` marker.

use crate::leet::{destylize_leet, retrowave_style};
use crate::length::{ELLIPSIS, INSTRUMENTATION_SEGMENT};
use crate::plot_twist::{TwistContext, apply_plot_twist};
use regex::{NoExpand, Regex, RegexBuilder};
use sonic_dna_core::RandomSource;
use sonic_dna_tables::random_plot_twist;
use std::sync::LazyLock;
use tracing::{debug, instrument};

/// Marker identifying the alternate variant.
pub const SIDE_B_MARKER: &str = "[Side B]";

const INSTRUMENTATION_HEADER: &str = "Instrumentation:";
const ACOUSTIC_HEADER: &str = "Acoustic arrangement:";
const ELECTRONIC_HEADER: &str = "Electronic production:";
const SYNTH_MARKER: &str = "synth layers";
const HEADER_PREFIXES: &[&str] = &[INSTRUMENTATION_HEADER, "Tags:"];

/// Phrases that mark a sentence as a plot twist.
const TWIST_CONNECTIVES: &[&str] = &[" but ", " and make it", " and reimagine", " with ", " to "];

/// Trap production markers and their acoustic stand-ins, most specific first.
const ACOUSTIC_SWAPS: &[(&str, &str)] = &[
    ("808 slides", "upright bass slides"),
    ("808 bass", "upright bass"),
    ("808s", "upright bass"),
    ("trap hi-hats", "brushed hi-hats"),
    ("trap drums", "live drums"),
    ("808", "upright bass"),
];

static ACOUSTIC_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    ACOUSTIC_SWAPS
        .iter()
        .map(|(marker, acoustic)| {
            let regex = RegexBuilder::new(&regex::escape(marker))
                .case_insensitive(true)
                .build()
                .expect("Valid acoustic swap regex");
            (regex, *acoustic)
        })
        .collect()
});

/// Derives side B from a finished side A.
///
/// Draws exactly one plot twist from `rng`. `influences` must be the
/// stylized names as they appear in side A.
///
/// # Examples
///
/// ```
/// use sonic_dna_composer::{derive_side_b, TwistContext};
/// use sonic_dna_core::SequenceRandom;
///
/// let side_a = "Pop track. clean vocals. Instrumentation: piano, strings. Tags: Pop.";
/// let side_b = derive_side_b(side_a, &[], &TwistContext::default(), &mut SequenceRandom::new([0]));
///
/// assert!(side_b.contains("Electronic production: piano, strings, synth layers."));
/// assert!(side_b.ends_with("[Side B]."));
/// ```
#[instrument(skip_all, fields(length = side_a.chars().count()))]
pub fn derive_side_b(
    side_a: &str,
    influences: &[String],
    context: &TwistContext,
    rng: &mut impl RandomSource,
) -> String {
    let twist = random_plot_twist(rng);
    debug!(twist = twist.id, "Drew side B plot twist");
    let replacement = apply_plot_twist(twist, context);

    let text = replace_twist_sentence(side_a, &replacement);
    let text = flip_production(&text);
    let text = restyle_influences(&text, influences);
    mark_side_b(&text)
}

/// Byte ranges of each sentence's body, split on `". "`.
///
/// The terminating period belongs to no span.
fn sentence_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = 0;
    for (index, _) in text.match_indices(". ") {
        spans.push((start, index));
        start = index + 2;
    }
    let end = if text.ends_with('.') && text.len() > start {
        text.len() - 1
    } else {
        text.len()
    };
    if start < text.len() {
        spans.push((start, end.max(start)));
    }
    spans
}

/// Swaps the first twist sentence after the lead sentence for `replacement`.
fn replace_twist_sentence(text: &str, replacement: &str) -> String {
    let target = sentence_spans(text).into_iter().skip(1).find(|&(start, end)| {
        let sentence = &text[start..end];
        !HEADER_PREFIXES
            .iter()
            .any(|prefix| sentence.starts_with(prefix))
            && TWIST_CONNECTIVES
                .iter()
                .any(|connective| sentence.contains(connective))
    });

    match target {
        Some((start, end)) => {
            debug!(sentence = &text[start..end], "Replacing plot twist sentence");
            format!("{}{}{}", &text[..start], replacement, &text[end..])
        }
        None => {
            debug!("No plot twist sentence found");
            text.to_string()
        }
    }
}

/// Trades trap production for acoustic, or anything else for electronic.
///
/// Only the first instrumentation list is rewritten, so artist names and the
/// plot twist keep their spelling. Text without a list is swapped as a whole.
fn flip_production(text: &str) -> String {
    let Some(segment) = INSTRUMENTATION_SEGMENT.captures(text) else {
        if has_trap_markers(text) {
            debug!("Flipped trap production to acoustic without a list");
            return swap_acoustic(text);
        }
        debug!("Added electronic production sentence");
        return format!("{} {} {}.", text, ELECTRONIC_HEADER, SYNTH_MARKER);
    };

    let (Some(whole), Some(list)) = (segment.get(0), segment.get(1)) else {
        return text.to_string();
    };
    let (before, after) = (&text[..whole.start()], &text[list.end()..]);

    if has_trap_markers(list.as_str()) {
        debug!("Flipped trap production to acoustic");
        format!(
            "{}{} {}{}",
            before,
            ACOUSTIC_HEADER,
            swap_acoustic(list.as_str()),
            after
        )
    } else {
        debug!("Flipped production to electronic");
        format!(
            "{}{} {}, {}{}",
            before,
            ELECTRONIC_HEADER,
            list.as_str(),
            SYNTH_MARKER,
            after
        )
    }
}

fn has_trap_markers(text: &str) -> bool {
    ACOUSTIC_PATTERNS
        .iter()
        .any(|(regex, _)| regex.is_match(text))
}

fn swap_acoustic(text: &str) -> String {
    ACOUSTIC_PATTERNS
        .iter()
        .fold(text.to_string(), |result, (regex, acoustic)| {
            regex.replace_all(&result, NoExpand(*acoustic)).into_owned()
        })
}

/// Replaces the influence clause with retrowave names.
fn restyle_influences(text: &str, influences: &[String]) -> String {
    if influences.is_empty() {
        return text.to_string();
    }

    let clause = format!("in the style of {}", influences.join(", "));
    if !text.contains(&clause) {
        debug!("Influence clause not found");
        return text.to_string();
    }

    let restyled: Vec<String> = influences
        .iter()
        .map(|name| retrowave_style(&destylize_leet(name)))
        .collect();
    text.replacen(
        &clause,
        &format!("in the style of {}", restyled.join(", ")),
        1,
    )
}

/// Places the side B marker before the final period, or at the very end.
fn mark_side_b(text: &str) -> String {
    let text = text.trim_end();
    match text.strip_suffix('.') {
        Some(body) if !text.ends_with(ELLIPSIS) => format!("{} {}.", body, SIDE_B_MARKER),
        _ => format!("{} {}", text, SIDE_B_MARKER),
    }
}
