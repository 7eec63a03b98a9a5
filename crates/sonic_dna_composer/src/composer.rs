//! Prompt assembly pipeline.

use crate::config::ComposerConfig;
use crate::leet::{find_by_tags, translate_to_leet};
use crate::length::LengthBudget;
use crate::plot_twist::{TwistContext, apply_plot_twist, select_plot_twist};
use crate::technical::estimate_technical;
use crate::variant::derive_side_b;
use sonic_dna_core::{
    Archetype, GeneratedPrompt, PlotTwist, PromptBreakdown, PromptInput, RandomSource,
    ThreadRandom,
};
use sonic_dna_error::{ComposerError, ComposerErrorKind};
use sonic_dna_tables::{archetype_by_id, vocal_texture_by_id, vocal_textures};
use tracing::{debug, info, instrument};

/// Vibe keywords and the mood suffix they add, checked in order.
const MOOD_RULES: &[(&[&str], &str)] = &[
    (&["sad", "moody"], "melancholic"),
    (&["happy", "upbeat"], "upbeat"),
    (&["dark"], "dark"),
    (&["chill"], "chill"),
];

/// The resolved segments of a prompt before length enforcement.
///
/// # Examples
///
/// ```
/// use sonic_dna_composer::PromptDraft;
///
/// let draft = PromptDraft::builder()
///     .genre("Pop")
///     .influences(vec!["Du4 L1p4".to_string()])
///     .vocal_tag("clean vocals")
///     .twist("Blend Pop with [Genre B]")
///     .tags(vec!["Pop".to_string()])
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     draft.assemble(),
///     "Pop track in the style of Du4 L1p4. clean vocals. Blend Pop with [Genre B]. Tags: Pop."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct PromptDraft {
    /// Genre with optional mood suffix
    genre: String,
    /// Stylized artist references
    #[builder(default)]
    influences: Vec<String>,
    /// Vocal texture tag
    vocal_tag: String,
    /// Instrumentation entries
    #[builder(default)]
    instrumentation: Vec<String>,
    /// Plot twist with placeholders filled
    twist: String,
    /// Genre tags plus the user vibe
    #[builder(default)]
    tags: Vec<String>,
}

impl PromptDraft {
    /// Creates a new draft builder.
    pub fn builder() -> PromptDraftBuilder {
        PromptDraftBuilder::default()
    }

    /// Joins the segments into prompt text.
    pub fn assemble(&self) -> String {
        let mut prompt = format!("{} track", self.genre);

        if !self.influences.is_empty() {
            prompt.push_str(&format!(" in the style of {}", self.influences.join(", ")));
        }

        prompt.push_str(&format!(". {}.", self.vocal_tag));

        if !self.instrumentation.is_empty() {
            prompt.push_str(&format!(
                " Instrumentation: {}.",
                self.instrumentation.join(", ")
            ));
        }

        prompt.push_str(&format!(" {}.", self.twist));

        if !self.tags.is_empty() {
            prompt.push_str(&format!(" Tags: {}.", self.tags.join(", ")));
        }

        prompt
    }
}

/// Everything resolved for one request ahead of assembly.
struct Resolved {
    draft: PromptDraft,
    plot_twist: &'static PlotTwist,
    context: TwistContext,
}

/// Builds prompts from archetypes and user input.
///
/// The composer holds only its limits; all randomness comes from the
/// [`RandomSource`] passed to each call.
///
/// # Examples
///
/// ```
/// use sonic_dna_composer::PromptComposer;
/// use sonic_dna_core::{PromptInput, SeededRandom};
///
/// let composer = PromptComposer::default();
/// let input = PromptInput::new("trapSoulKing");
/// let prompt = composer.generate(&input, &mut SeededRandom::new(42)).unwrap();
///
/// assert!(*prompt.character_count() <= 498);
/// assert_eq!(prompt.prompt(), prompt.side_a());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_getters::Getters)]
pub struct PromptComposer {
    /// Composition limits
    config: ComposerConfig,
}

impl PromptComposer {
    /// Creates a composer with the given limits.
    pub fn new(config: ComposerConfig) -> Self {
        Self { config }
    }

    /// Generates a prompt, its side B and technical estimates.
    ///
    /// Takes two draws from `rng`: the side A plot twist (only when no valid
    /// twist id was requested) and then the side B twist.
    ///
    /// # Errors
    ///
    /// Returns `ArchetypeNotFound` if the archetype id does not resolve.
    #[instrument(skip(self, input, rng), fields(archetype = %input.archetype_id()))]
    pub fn generate(
        &self,
        input: &PromptInput,
        rng: &mut impl RandomSource,
    ) -> Result<GeneratedPrompt, ComposerError> {
        let Resolved {
            draft,
            plot_twist,
            context,
        } = self.resolve(input, rng)?;

        let raw = draft.assemble();
        let budget = LengthBudget::new(
            *self.config.max_prompt_length(),
            *self.config.trimmed_instrumentation(),
        );
        let (prompt, report) = budget.enforce(&raw);
        if !report.untouched() {
            debug!(?report, "Prompt shortened to fit budget");
        }

        let side_b = derive_side_b(&prompt, &draft.influences, &context, rng);
        let technical = estimate_technical(&draft.genre, input.archetype_id());

        let breakdown = PromptBreakdown::new(
            draft.genre,
            draft.influences,
            draft.vocal_tag,
            draft.instrumentation,
            plot_twist.formula,
            draft.tags,
        );

        let generated = GeneratedPrompt::new(prompt, breakdown, side_b, Some(technical));
        info!(
            characters = generated.character_count(),
            twist = plot_twist.id,
            "Generated prompt"
        );
        Ok(generated)
    }

    /// Resolves and assembles segments without enforcing the budget.
    ///
    /// Consumes the same plot twist draw as [`PromptComposer::generate`], so a
    /// replayed random sequence yields the draft `generate` started from.
    ///
    /// # Errors
    ///
    /// Returns `ArchetypeNotFound` if the archetype id does not resolve.
    pub fn draft(
        &self,
        input: &PromptInput,
        rng: &mut impl RandomSource,
    ) -> Result<PromptDraft, ComposerError> {
        self.resolve(input, rng).map(|resolved| resolved.draft)
    }

    fn resolve(
        &self,
        input: &PromptInput,
        rng: &mut impl RandomSource,
    ) -> Result<Resolved, ComposerError> {
        let archetype = archetype_by_id(input.archetype_id()).ok_or_else(|| {
            ComposerError::new(ComposerErrorKind::ArchetypeNotFound(
                input.archetype_id().clone(),
            ))
        })?;

        let vibe = input
            .user_vibe()
            .as_deref()
            .filter(|vibe| !vibe.trim().is_empty());
        let genre = select_genre(archetype, vibe);
        let influences = self.resolve_influences(archetype, input.custom_influences());
        let vocal_tag = select_vocal_tag(archetype);
        let instrumentation = select_instrumentation(archetype, input.custom_instrumentation());
        let plot_twist = select_plot_twist(input.plot_twist_id().as_deref(), rng);
        let tags = generate_tags(archetype, vibe);

        let context = TwistContext::new(
            input.reference_song().as_deref().map(translate_to_leet),
            tags.first().cloned(),
            influences.first().cloned(),
        );
        let twist = apply_plot_twist(plot_twist, &context);

        debug!(
            genre = %genre,
            influences = ?influences,
            twist = plot_twist.id,
            "Resolved prompt segments"
        );

        Ok(Resolved {
            draft: PromptDraft {
                genre,
                influences,
                vocal_tag,
                instrumentation,
                twist,
                tags,
            },
            plot_twist,
            context,
        })
    }

    /// Caller influences first, then archetype matches, deduplicated and capped.
    fn resolve_influences(&self, archetype: &Archetype, custom: &[String]) -> Vec<String> {
        let genres: Vec<String> = archetype
            .default_genres
            .iter()
            .map(|genre| genre.to_lowercase())
            .collect();

        let candidates = custom
            .iter()
            .map(|name| translate_to_leet(name))
            .chain(
                find_by_tags(&genres)
                    .into_iter()
                    .map(|reference| reference.leet.to_string()),
            );

        let mut influences: Vec<String> = Vec::new();
        for candidate in candidates {
            if influences.len() == *self.config.max_influences() {
                break;
            }
            if !influences.contains(&candidate) {
                influences.push(candidate);
            }
        }
        influences
    }
}

/// The archetype's lead genre, with a mood suffix when the vibe asks for one.
pub fn select_genre(archetype: &Archetype, vibe: Option<&str>) -> String {
    let genre = archetype.primary_genre().unwrap_or_default();
    let Some(vibe) = vibe else {
        return genre.to_string();
    };

    let vibe = vibe.to_lowercase();
    match MOOD_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| vibe.contains(keyword)))
    {
        Some((_, mood)) => format!("{}, {}", genre, mood),
        None => genre.to_string(),
    }
}

fn select_vocal_tag(archetype: &Archetype) -> String {
    let texture = archetype
        .primary_vocal_preset()
        .and_then(vocal_texture_by_id)
        .or_else(|| {
            debug!(archetype = archetype.id, "Vocal preset unresolved, using first texture");
            vocal_textures().first()
        });
    texture
        .map(|texture| texture.tag.to_string())
        .unwrap_or_default()
}

fn select_instrumentation(archetype: &Archetype, custom: &[String]) -> Vec<String> {
    if custom.is_empty() {
        archetype
            .instrumentation_tags
            .iter()
            .map(|tag| tag.to_string())
            .collect()
    } else {
        custom.to_vec()
    }
}

fn generate_tags(archetype: &Archetype, vibe: Option<&str>) -> Vec<String> {
    archetype
        .default_genres
        .iter()
        .map(|genre| genre.to_string())
        .chain(vibe.map(str::to_string))
        .collect()
}

/// Generates a prompt with default limits and thread-local randomness.
///
/// # Errors
///
/// Returns `ArchetypeNotFound` if the archetype id does not resolve.
pub fn generate_prompt(input: &PromptInput) -> Result<GeneratedPrompt, ComposerError> {
    PromptComposer::default().generate(input, &mut ThreadRandom)
}
