//! Prompt generation command handler.

use super::commands::{GenerateArgs, OutputFormat};
use sonic_dna::{
    ComposerError, ComposerErrorKind, GeneratedPrompt, GeneratedTrack, JsonError,
    MockTrackBackend, PromptComposer, PromptInput, SeededRandom, SonicDnaConfig, SonicDnaResult,
    ThreadRandom, TrackBackend, TrackRequest,
};
use serde::Serialize;
use tracing::{debug, instrument};

#[derive(Serialize)]
struct GenerateOutput<'a> {
    prompt: &'a GeneratedPrompt,
    #[serde(skip_serializing_if = "Option::is_none")]
    track: Option<&'a GeneratedTrack>,
}

/// Generate a prompt and print it, optionally submitting it as a track.
#[instrument(skip(args, config), fields(archetype = %args.archetype, seed = ?args.seed))]
pub fn generate(args: GenerateArgs, config: &SonicDnaConfig) -> SonicDnaResult<()> {
    let input = build_input(&args)?;
    let composer = PromptComposer::new(config.composer);

    let prompt = match args.seed {
        Some(seed) => composer.generate(&input, &mut SeededRandom::new(seed))?,
        None => composer.generate(&input, &mut ThreadRandom)?,
    };

    let track = if args.submit {
        let request = TrackRequest::new(
            prompt.prompt().clone(),
            prompt.breakdown().tags().clone(),
            args.artist_id.clone(),
        )?;
        debug!("Submitting prompt to mock backend");
        Some(MockTrackBackend::default().submit(&request)?)
    } else {
        None
    };

    match args.format {
        OutputFormat::Json => {
            let output = GenerateOutput {
                prompt: &prompt,
                track: track.as_ref(),
            };
            let json = serde_json::to_string_pretty(&output)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            let max = *config.composer.max_prompt_length();
            print_prompt(&prompt, max, track.as_ref());
        }
    }

    Ok(())
}

fn build_input(args: &GenerateArgs) -> Result<PromptInput, ComposerError> {
    let mut builder = PromptInput::builder();
    builder
        .archetype_id(args.archetype.clone())
        .custom_influences(args.influences.clone())
        .custom_instrumentation(args.instruments.clone());
    if let Some(vibe) = &args.vibe {
        builder.user_vibe(vibe.clone());
    }
    if let Some(twist) = &args.twist {
        builder.plot_twist_id(twist.clone());
    }
    if let Some(song) = &args.song {
        builder.reference_song(song.clone());
    }

    builder
        .build()
        .map_err(|e| ComposerError::new(ComposerErrorKind::InvalidInput(e.to_string())))
}

fn print_prompt(prompt: &GeneratedPrompt, max: usize, track: Option<&GeneratedTrack>) {
    let breakdown = prompt.breakdown();

    println!("Side A ({}/{} characters):", prompt.character_count(), max);
    println!("  {}", prompt.side_a());
    println!();
    println!("Side B:");
    println!("  {}", prompt.side_b());
    println!();
    println!("Breakdown:");
    println!("  Genre:           {}", breakdown.genre());
    println!("  Influences:      {}", breakdown.influences().join(", "));
    println!("  Vocal texture:   {}", breakdown.vocal_texture());
    println!("  Instrumentation: {}", breakdown.instrumentation().join(", "));
    println!("  Plot twist:      {}", breakdown.plot_twist());
    println!("  Tags:            {}", breakdown.tags().join(", "));

    if let Some(technical) = prompt.technical() {
        println!();
        println!(
            "Technical: {} BPM, {} {}",
            technical.tempo_bpm(),
            technical.key(),
            technical.mode()
        );
    }

    if let Some(track) = track {
        println!();
        println!("Track {} ({}):", track.id(), track.status());
        println!("  Title: {}", track.title());
        println!("  Audio: {}", track.audio_url());
        println!("  Cover: {}", track.image_url());
    }
}

/// Print the effective configuration.
pub fn show_config(config: &SonicDnaConfig) -> SonicDnaResult<()> {
    let json =
        serde_json::to_string_pretty(config).map_err(|e| JsonError::new(e.to_string()))?;
    println!("{}", json);
    Ok(())
}
