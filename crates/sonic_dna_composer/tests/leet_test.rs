//! Tests for leet translation and dictionary queries.

use sonic_dna_composer::{
    LeetTranslator, destylize_leet, find_by_category, find_by_tags, retrowave_style,
    translate_to_leet,
};
use sonic_dna_core::{LeetCategory, LeetReference};

#[test]
fn test_translate_replaces_case_insensitively() {
    assert_eq!(translate_to_leet("I love drake and SZA"), "I love Dr4k3 and $Z4");
    assert_eq!(
        translate_to_leet("Blinding Lights by The Weeknd"),
        "Bl1nd1ng L1ght$ by Th3 W33knd"
    );
}

#[test]
fn test_translate_leaves_unknown_text_unchanged() {
    assert_eq!(translate_to_leet("Nobody Famous"), "Nobody Famous");
    assert_eq!(translate_to_leet(""), "");
}

#[test]
fn test_translate_is_pure() {
    let first = translate_to_leet("Drake and Future");
    let second = translate_to_leet("Drake and Future");
    assert_eq!(first, second);
}

#[test]
fn test_translate_compounds_across_entries() {
    // "PartyNextDoor" runs first, then "Rema" matches the leftover "rema".
    assert_eq!(translate_to_leet("PartyNextDoorema"), "P4rtyN3xtD00R3m4");
    assert_eq!(translate_to_leet("Travis Scottems"), "Tr4v1$ $c0tT3m$");
}

#[test]
fn test_translate_matches_punctuation_literally() {
    assert_eq!(translate_to_leet("J. Cole"), "J. C0l3");
    assert_eq!(translate_to_leet("J_ Cole"), "J_ Cole");
}

#[test]
fn test_replacement_dollar_signs_are_verbatim() {
    assert_eq!(translate_to_leet("Bryson Tiller"), "Bry$0n T1ll3r");
}

#[test]
fn test_custom_translator_keeps_dictionary_order() {
    static DICTIONARY: &[LeetReference] = &[
        LeetReference {
            original: "ab",
            leet: "X",
            category: LeetCategory::Performer,
            tags: &[],
        },
        LeetReference {
            original: "xc",
            leet: "$1",
            category: LeetCategory::Performer,
            tags: &[],
        },
    ];

    let translator = LeetTranslator::new(DICTIONARY).unwrap();
    assert_eq!(translator.len(), 2);
    assert_eq!(translator.translate("abc"), "$1");
}

#[test]
fn test_find_by_tags_substring_match() {
    let names: Vec<&str> = find_by_tags(&["trap soul", "r&b", "hip hop"])
        .into_iter()
        .map(|reference| reference.leet)
        .collect();
    assert_eq!(
        names,
        vec!["Dr4k3", "Bry$0n T1ll3r", "6L4CK", "K3ndr1ck L4m4r", "J. C0l3"]
    );
}

#[test]
fn test_find_by_tags_ignores_case() {
    let names: Vec<&str> = find_by_tags(&["AFROBEATS"])
        .into_iter()
        .map(|reference| reference.leet)
        .collect();
    assert_eq!(names, vec!["BUrn4 B0y", "W1zk1d", "T3m$", "R3m4"]);
}

#[test]
fn test_find_by_tags_no_match() {
    let empty: &[&str] = &[];
    assert!(find_by_tags(empty).is_empty());
    assert!(find_by_tags(&["polka"]).is_empty());
}

#[test]
fn test_find_by_category() {
    let releases: Vec<&str> = find_by_category(LeetCategory::Release)
        .into_iter()
        .map(|reference| reference.original)
        .collect();
    assert_eq!(
        releases,
        vec!["Take Care", "Starboy", "After Hours", "CTRL", "Astroworld"]
    );

    let tracks = find_by_category(LeetCategory::Track);
    assert_eq!(tracks.len(), 5);
    assert_eq!(tracks[0].original, "Hotline Bling");
}

#[test]
fn test_retrowave_style_known_names() {
    assert_eq!(retrowave_style("Drake"), "Dr. Ake (Synthwave Ver)");
    assert_eq!(retrowave_style("kendrick lamar"), "K3ndrick (80s Fusion)");
}

#[test]
fn test_retrowave_style_fallback() {
    assert_eq!(retrowave_style("Bryson Tiller"), "Bry$0n T1ll3r (Retrowave Ver)");
    assert_eq!(retrowave_style("Nobody"), "Nobody (Retrowave Ver)");
}

#[test]
fn test_destylize_leet() {
    assert_eq!(destylize_leet("Bry$0n T1ll3r"), "Bryson Tiller");
    assert_eq!(destylize_leet("FUtUr3"), "Future");
    assert_eq!(destylize_leet("plain"), "plain");
}
