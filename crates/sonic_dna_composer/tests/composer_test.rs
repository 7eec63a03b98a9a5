//! Tests for the prompt composition pipeline.

use sonic_dna_composer::{
    ComposerConfig, PromptComposer, estimate_key, estimate_tempo, generate_prompt, select_genre,
};
use sonic_dna_core::{MusicalMode, PromptInput, SeededRandom, SequenceRandom};
use sonic_dna_error::ComposerErrorKind;
use sonic_dna_tables::{archetype_by_id, archetypes};

const SCENARIO_PROMPT: &str = "Trap Soul, melancholic track in the style of Dr4k3, Th3 W33knd, Bry$0n T1ll3r. autotuned vocals, pitch-corrected, processed vocals. Instrumentation: 808s, ambient synths, minimalist production. Take [Famous Song] but make it Trap Soul. Tags: Trap Soul, R&B, Hip Hop, sad and emotional.";

fn scenario_input() -> PromptInput {
    PromptInput::builder()
        .archetype_id("trapSoulKing")
        .user_vibe("sad and emotional")
        .custom_influences(vec!["Drake".to_string(), "The Weeknd".to_string()])
        .build()
        .unwrap()
}

#[test]
fn test_trap_soul_scenario() {
    let composer = PromptComposer::default();
    let prompt = composer
        .generate(&scenario_input(), &mut SequenceRandom::new([0, 1]))
        .unwrap();

    let breakdown = prompt.breakdown();
    assert_eq!(breakdown.genre(), "Trap Soul, melancholic");
    assert_eq!(
        breakdown.influences(),
        &vec![
            "Dr4k3".to_string(),
            "Th3 W33knd".to_string(),
            "Bry$0n T1ll3r".to_string()
        ]
    );
    assert_eq!(
        breakdown.vocal_texture(),
        "autotuned vocals, pitch-corrected, processed vocals"
    );
    assert_eq!(
        breakdown.plot_twist(),
        "Take [Famous Song] but make it [Opposite Genre]"
    );
    assert_eq!(breakdown.tags().last().map(String::as_str), Some("sad and emotional"));

    assert_eq!(prompt.prompt(), SCENARIO_PROMPT);
    assert_eq!(prompt.side_a(), SCENARIO_PROMPT);
    assert_eq!(*prompt.character_count(), 285);
}

#[test]
fn test_trap_soul_side_b_uses_second_draw() {
    let composer = PromptComposer::default();
    let mut rng = SequenceRandom::new([0, 1]);
    let prompt = composer.generate(&scenario_input(), &mut rng).unwrap();

    assert_eq!(rng.draws(), 2);
    assert_eq!(
        prompt.side_b(),
        "Trap Soul, melancholic track in the style of Dr. Ake (Synthwave Ver), The W33kend (Retrowave Mix), Bry$0n T1ll3r (Retrowave Ver). autotuned vocals, pitch-corrected, processed vocals. Acoustic arrangement: upright bass, ambient synths, minimalist production. Take Dr4k3's style but produce it like [Decade]. Tags: Trap Soul, R&B, Hip Hop, sad and emotional [Side B]."
    );
}

#[test]
fn test_technical_parameters() {
    let prompt = PromptComposer::default()
        .generate(&scenario_input(), &mut SequenceRandom::new([0, 1]))
        .unwrap();

    let technical = prompt.technical().as_ref().unwrap();
    assert_eq!(*technical.tempo_bpm(), 140);
    assert_eq!(technical.key(), "A");
    assert_eq!(*technical.mode(), MusicalMode::Minor);
}

#[test]
fn test_every_archetype_fits_budget() {
    let composer = PromptComposer::default();

    for archetype in archetypes() {
        for seed in 0..20 {
            let input = PromptInput::new(archetype.id);
            let prompt = composer
                .generate(&input, &mut SeededRandom::new(seed))
                .unwrap();

            assert!(*prompt.character_count() <= 498, "{}", archetype.id);
            assert_eq!(*prompt.character_count(), prompt.prompt().chars().count());
            assert!(prompt.side_b().trim_end_matches('.').ends_with("[Side B]"));
        }
    }
}

#[test]
fn test_unknown_archetype() {
    let err = PromptComposer::default()
        .generate(&PromptInput::new("unknown-xyz"), &mut SequenceRandom::new([0]))
        .unwrap_err();

    assert_eq!(
        err.kind(),
        &ComposerErrorKind::ArchetypeNotFound("unknown-xyz".to_string())
    );
}

#[test]
fn test_empty_vibe_is_ignored() {
    let input = PromptInput::builder()
        .archetype_id("trapSoulKing")
        .user_vibe("")
        .build()
        .unwrap();
    let prompt = PromptComposer::default()
        .generate(&input, &mut SequenceRandom::new([0, 1]))
        .unwrap();

    assert_eq!(prompt.breakdown().genre(), "Trap Soul");
    assert_eq!(
        prompt.breakdown().tags(),
        &vec![
            "Trap Soul".to_string(),
            "R&B".to_string(),
            "Hip Hop".to_string()
        ]
    );
    assert!(prompt.prompt().ends_with("Tags: Trap Soul, R&B, Hip Hop."));
}

#[test]
fn test_short_draft_becomes_side_a_unchanged() {
    let composer = PromptComposer::default();
    let input = PromptInput::new("popRnBQueen");

    let draft = composer
        .draft(&input, &mut SequenceRandom::new([2, 3]))
        .unwrap();
    let prompt = composer
        .generate(&input, &mut SequenceRandom::new([2, 3]))
        .unwrap();

    assert_eq!(prompt.side_a(), &draft.assemble());
    assert_eq!(
        prompt.side_a(),
        "Pop track in the style of 4r14n4 Gr4nd3, Du4 L1p4, Th3 W33knd. powerful belting, strong vocals, chest voice. Instrumentation: trap drums, piano, vocal layering. Blend Pop with [Genre B]. Tags: Pop, R&B, Contemporary R&B."
    );
}

#[test]
fn test_requested_twist_uses_reference_song() {
    let input = PromptInput::builder()
        .archetype_id("trapSoulKing")
        .plot_twist_id("oppositeVibe")
        .reference_song("Hotline Bling")
        .build()
        .unwrap();
    let mut rng = SequenceRandom::new([5]);

    let prompt = PromptComposer::default().generate(&input, &mut rng).unwrap();

    assert_eq!(rng.draws(), 1);
    assert!(prompt
        .prompt()
        .contains("Take H0tl1n3 Bl1ng but make it Trap Soul."));
    assert!(prompt
        .side_b()
        .contains("Take H0tl1n3 Bl1ng and make it [2x faster/slower]."));
}

#[test]
fn test_custom_instrumentation_and_influence_cap() {
    let input = PromptInput::builder()
        .archetype_id("afrobeatsKing")
        .custom_influences(vec!["Nobody Famous".to_string(), "Wizkid".to_string()])
        .custom_instrumentation(vec!["talking drum".to_string(), "kora".to_string()])
        .build()
        .unwrap();
    let composer = PromptComposer::new(ComposerConfig::default().with_max_influences(1));

    let prompt = composer
        .generate(&input, &mut SequenceRandom::new([4, 4]))
        .unwrap();

    assert_eq!(prompt.breakdown().influences(), &vec!["Nobody Famous".to_string()]);
    assert_eq!(
        prompt.prompt(),
        "Afrobeats track in the style of Nobody Famous. patois accent, caribbean vocals, jamaican delivery. Instrumentation: talking drum, kora. Replace [Typical Instruments] with [Unusual Instruments]. Tags: Afrobeats, Afropop, Dancehall."
    );
    assert!(prompt
        .side_b()
        .contains("Electronic production: talking drum, kora, synth layers."));
}

#[test]
fn test_tight_budget_runs_every_step() {
    let composer = PromptComposer::new(ComposerConfig::default().with_max_prompt_length(200));
    let prompt = composer
        .generate(&scenario_input(), &mut SequenceRandom::new([0, 1]))
        .unwrap();

    assert_eq!(
        prompt.prompt(),
        "Trap Soul, melancholic track in the style of Dr4k3, Th3 W33knd, Bry$0n T1ll3r. autotuned vocals, pitch-corrected, processed vocals. Instrumentation: 808s, ambient synths. Take [Famous Song] but mak..."
    );
    assert_eq!(*prompt.character_count(), 200);
    assert!(prompt.side_b().ends_with("like [Decade] [Side B]."));
    assert_eq!(
        prompt.breakdown().instrumentation().len(),
        3,
        "breakdown keeps the untrimmed selection"
    );
}

#[test]
fn test_select_genre_priority() {
    let archetype = archetype_by_id("trapSoulKing").unwrap();

    assert_eq!(select_genre(archetype, None), "Trap Soul");
    assert_eq!(select_genre(archetype, Some("Sad but HAPPY")), "Trap Soul, melancholic");
    assert_eq!(select_genre(archetype, Some("upbeat")), "Trap Soul, upbeat");
    assert_eq!(select_genre(archetype, Some("dark and chill")), "Trap Soul, dark");
    assert_eq!(select_genre(archetype, Some("chill")), "Trap Soul, chill");
    assert_eq!(select_genre(archetype, Some("energetic")), "Trap Soul");
}

#[test]
fn test_tempo_and_key_estimates() {
    assert_eq!(estimate_tempo("Hip Hop"), 140);
    assert_eq!(estimate_tempo("Indie Pop"), 120);
    assert_eq!(estimate_tempo("Afrobeats"), 105);
    assert_eq!(estimate_tempo("Contemporary R&B"), 90);
    assert_eq!(estimate_tempo("Power Ballad"), 70);
    assert_eq!(estimate_tempo("Neo-Soul"), 120);

    assert_eq!(estimate_key("trapSoulKing"), "A");
    assert_eq!(estimate_key("emoRapper"), "E");
    assert_eq!(estimate_key(""), "C");
}

#[test]
fn test_generate_prompt_convenience() {
    let prompt = generate_prompt(&PromptInput::new("soulVocalist")).unwrap();
    assert!(prompt.prompt().starts_with("Neo-Soul track."));
    assert!(*prompt.character_count() <= 498);
}

#[test]
fn test_serializes_camel_case() {
    let prompt = PromptComposer::default()
        .generate(&scenario_input(), &mut SequenceRandom::new([0, 1]))
        .unwrap();
    let json = serde_json::to_value(&prompt).unwrap();

    assert_eq!(json["characterCount"], 285);
    assert_eq!(json["breakdown"]["vocalTexture"], "autotuned vocals, pitch-corrected, processed vocals");
    assert_eq!(json["technical"]["tempoBpm"], 140);
    assert_eq!(json["technical"]["mode"], "minor");
    assert!(json["sideB"].as_str().unwrap().contains("[Side B]"));
}
