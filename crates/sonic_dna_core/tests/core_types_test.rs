//! Tests for core value types.

use sonic_dna_core::{
    GeneratedPrompt, InstrumentationCategory, LeetCategory, MusicalMode, PromptBreakdown,
    PromptInput, RandomSource, SeededRandom, SequenceRandom, TechnicalParameters, TrackRequest,
    TrackStatus,
};
use sonic_dna_error::{TableErrorKind, TrackErrorKind};
use strum::IntoEnumIterator;

fn breakdown() -> PromptBreakdown {
    PromptBreakdown::builder()
        .genre("Pop")
        .influences(Vec::<String>::new())
        .vocal_texture("clean vocals")
        .instrumentation(vec!["piano".to_string()])
        .plot_twist("Blend [Genre A] with [Genre B]")
        .tags(vec!["Pop".to_string()])
        .build()
        .unwrap()
}

#[test]
fn test_instrumentation_category_order_and_parsing() {
    let keys: Vec<&str> = InstrumentationCategory::iter().map(|c| c.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "drums",
            "bass",
            "keys",
            "strings",
            "brass",
            "guitars",
            "synths",
            "percussion",
            "effects",
            "production"
        ]
    );

    for category in InstrumentationCategory::iter() {
        let parsed: InstrumentationCategory = category.as_str().parse().unwrap();
        assert_eq!(parsed, category);
        assert_eq!(category.to_string(), category.as_str());
    }
}

#[test]
fn test_unknown_instrumentation_category() {
    let err = "kazoo".parse::<InstrumentationCategory>().unwrap_err();
    assert_eq!(err.kind(), &TableErrorKind::InvalidCategory("kazoo".into()));
}

#[test]
fn test_leet_category_accepts_legacy_names() {
    assert_eq!("artist".parse::<LeetCategory>(), Ok(LeetCategory::Performer));
    assert_eq!("ALBUM".parse::<LeetCategory>(), Ok(LeetCategory::Release));
    assert_eq!("song".parse::<LeetCategory>(), Ok(LeetCategory::Track));
    assert_eq!("style".parse::<LeetCategory>(), Ok(LeetCategory::Technique));
    assert!("genre".parse::<LeetCategory>().is_err());
}

#[test]
fn test_sequence_random_cycles_and_reduces() {
    let mut rng = SequenceRandom::new([3, 12]);
    assert_eq!(rng.next_index(10), 3);
    assert_eq!(rng.next_index(10), 2);
    assert_eq!(rng.next_index(10), 3);
    assert_eq!(rng.draws(), 3);
    assert_eq!(rng.next_index(0), 0);
}

#[test]
fn test_seeded_random_stays_in_range() {
    let mut rng = SeededRandom::new(42);
    for _ in 0..200 {
        assert!(rng.next_index(7) < 7);
    }
    assert_eq!(rng.next_index(1), 0);
}

#[test]
fn test_prompt_input_builder_requires_archetype() {
    assert!(PromptInput::builder().user_vibe("chill").build().is_err());

    let input = PromptInput::builder()
        .archetype_id("emoRapper")
        .plot_twist_id("eraSwap")
        .build()
        .unwrap();
    assert_eq!(input.plot_twist_id().as_deref(), Some("eraSwap"));
    assert!(input.custom_instrumentation().is_empty());
}

#[test]
fn test_prompt_input_deserializes_camel_case() {
    let input: PromptInput = serde_json::from_str(
        r#"{"archetypeId":"trapSoulKing","userVibe":"dark","customInfluences":["Drake"]}"#,
    )
    .unwrap();
    assert_eq!(input.archetype_id(), "trapSoulKing");
    assert_eq!(input.user_vibe().as_deref(), Some("dark"));
    assert_eq!(input.custom_influences(), &vec!["Drake".to_string()]);
    assert!(input.plot_twist_id().is_none());
    assert!(input.reference_song().is_none());
}

#[test]
fn test_generated_prompt_counts_characters() {
    let prompt = "Pop track. clean vocals, día.".to_string();
    let generated = GeneratedPrompt::new(
        prompt.clone(),
        breakdown(),
        format!("{} [Side B]", prompt),
        Some(TechnicalParameters::new(120, "C", MusicalMode::Minor)),
    );

    assert_eq!(*generated.character_count(), prompt.chars().count());
    assert!(*generated.character_count() < prompt.len());
    assert_eq!(generated.side_a(), generated.prompt());

    let json = serde_json::to_value(&generated).unwrap();
    assert_eq!(json["characterCount"], prompt.chars().count());
    assert_eq!(json["technical"]["mode"], "minor");
    assert_eq!(json["breakdown"]["vocalTexture"], "clean vocals");
}

#[test]
fn test_track_request_validation() {
    let err = TrackRequest::new("Pop track.", Vec::new(), " ").unwrap_err();
    assert_eq!(err.kind(), &TrackErrorKind::MissingArtist);

    let long = "x".repeat(499);
    let err = TrackRequest::new(long, Vec::new(), "artist").unwrap_err();
    assert_eq!(
        err.kind(),
        &TrackErrorKind::PromptTooLong {
            length: 499,
            max: 498
        }
    );

    assert!(TrackRequest::new("x".repeat(498), Vec::new(), "artist").is_ok());
}

#[test]
fn test_track_status_accepts_queued_alias() {
    let status: TrackStatus = serde_json::from_str("\"queued\"").unwrap();
    assert_eq!(status, TrackStatus::Processing);
    assert_eq!(
        serde_json::to_string(&TrackStatus::Completed).unwrap(),
        "\"completed\""
    );
}
