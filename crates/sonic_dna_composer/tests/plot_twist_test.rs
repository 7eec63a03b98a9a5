//! Tests for plot twist selection and substitution.

use sonic_dna_composer::{TwistContext, apply_plot_twist, select_plot_twist};
use sonic_dna_core::{PlotTwist, SequenceRandom};
use sonic_dna_tables::plot_twist_by_id;

fn twist(id: &str) -> &'static PlotTwist {
    plot_twist_by_id(id).unwrap()
}

#[test]
fn test_apply_song_and_genre() {
    let context = TwistContext::builder()
        .song("H0tl1n3 Bl1ng")
        .genre("Trap Soul")
        .build()
        .unwrap();

    assert_eq!(
        apply_plot_twist(twist("oppositeVibe"), &context),
        "Take H0tl1n3 Bl1ng but make it Trap Soul"
    );
}

#[test]
fn test_apply_modern_artist_style_suffix() {
    let context = TwistContext::builder().artist("Dr4k3").build().unwrap();

    assert_eq!(
        apply_plot_twist(twist("eraSwap"), &context),
        "Take Dr4k3's style but produce it like [Decade]"
    );
}

#[test]
fn test_apply_western_artist() {
    let context = TwistContext::builder().artist("Dr4k3").build().unwrap();

    assert_eq!(
        apply_plot_twist(twist("culturalFusion"), &context),
        "Blend Dr4k3 with [Non-Western Music Tradition]"
    );
}

#[test]
fn test_missing_context_leaves_placeholders() {
    let context = TwistContext::default();

    assert_eq!(
        apply_plot_twist(twist("oppositeVibe"), &context),
        "Take [Famous Song] but make it [Opposite Genre]"
    );
}

#[test]
fn test_unrecognized_placeholders_stay_verbatim() {
    let context = TwistContext::new(
        Some("Song".to_string()),
        Some("Pop".to_string()),
        Some("Artist".to_string()),
    );

    assert_eq!(
        apply_plot_twist(twist("genreFusion"), &context),
        "Blend Pop with [Genre B]"
    );
    assert_eq!(
        apply_plot_twist(twist("genderSwap"), &context),
        "Take Song and reimagine with [Female Vocal Style]"
    );
}

#[test]
fn test_only_first_occurrence_replaced() {
    let doubled = PlotTwist {
        id: "doubled",
        name: "Doubled",
        formula: "[Genre A] meets [Genre A]",
        example: "",
    };
    let context = TwistContext::builder().genre("Jazz").build().unwrap();

    assert_eq!(apply_plot_twist(&doubled, &context), "Jazz meets [Genre A]");
}

#[test]
fn test_select_by_id_takes_no_draw() {
    let mut rng = SequenceRandom::new([7]);
    let selected = select_plot_twist(Some("speedChange"), &mut rng);

    assert_eq!(selected.id, "speedChange");
    assert_eq!(rng.draws(), 0);
}

#[test]
fn test_select_unknown_id_draws() {
    let mut rng = SequenceRandom::new([7]);
    let selected = select_plot_twist(Some("noSuchTwist"), &mut rng);

    assert_eq!(selected.id, "acousticFlip");
    assert_eq!(rng.draws(), 1);
}

#[test]
fn test_select_without_id_draws() {
    let mut rng = SequenceRandom::new([0]);
    assert_eq!(select_plot_twist(None, &mut rng).id, "oppositeVibe");
}
