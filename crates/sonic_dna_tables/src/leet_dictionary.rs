//! Leet-speak dictionary and retrowave name table.

use sonic_dna_core::{LeetCategory, LeetReference};

const fn entry(
    original: &'static str,
    leet: &'static str,
    category: LeetCategory,
    tags: &'static [&'static str],
) -> LeetReference {
    LeetReference {
        original,
        leet,
        category,
        tags,
    }
}

/// Every leet reference, in application order.
///
/// Translation applies entries top to bottom against the running text, so a
/// later entry can match inside an earlier entry's output. "The Weeknd"
/// appears twice; the second entry never matches after the first has run.
pub static LEET_DICTIONARY: &[LeetReference] = &[
    // Performers: trap and R&B
    entry("Drake", "Dr4k3", LeetCategory::Performer, &["trap soul", "emotional", "rnb"]),
    entry("Future", "FUtUr3", LeetCategory::Performer, &["trap", "autotune", "atlanta"]),
    entry("The Weeknd", "Th3 W33knd", LeetCategory::Performer, &["rnb", "dark", "alternative"]),
    entry("SZA", "$Z4", LeetCategory::Performer, &["rnb", "alternative", "soul"]),
    entry("Travis Scott", "Tr4v1$ $c0tt", LeetCategory::Performer, &["psychedelic trap", "autotune"]),
    entry("Bryson Tiller", "Bry$0n T1ll3r", LeetCategory::Performer, &["trap soul", "rnb"]),
    entry("PartyNextDoor", "P4rtyN3xtD00r", LeetCategory::Performer, &["rnb", "ovo", "dark"]),
    entry("6LACK", "6L4CK", LeetCategory::Performer, &["rnb", "trap soul", "moody"]),

    // Performers: pop
    entry("Ariana Grande", "4r14n4 Gr4nd3", LeetCategory::Performer, &["pop", "vocals", "rnb"]),
    entry("Dua Lipa", "Du4 L1p4", LeetCategory::Performer, &["pop", "dance", "disco"]),
    entry("The Weeknd", "Th3 W33knd", LeetCategory::Performer, &["pop", "rnb", "synth"]),
    entry("Billie Eilish", "B1ll13 31l1$h", LeetCategory::Performer, &["alt pop", "dark", "whisper"]),
    entry("Olivia Rodrigo", "0l1v14 R0dr1g0", LeetCategory::Performer, &["pop rock", "emotional"]),

    // Performers: afrobeats
    entry("Burna Boy", "BUrn4 B0y", LeetCategory::Performer, &["afrobeats", "afrofusion"]),
    entry("Wizkid", "W1zk1d", LeetCategory::Performer, &["afrobeats", "afropop"]),
    entry("Tems", "T3m$", LeetCategory::Performer, &["afrobeats", "rnb", "soul"]),
    entry("Rema", "R3m4", LeetCategory::Performer, &["afrobeats", "afrorave"]),

    // Performers: hip hop
    entry("Kendrick Lamar", "K3ndr1ck L4m4r", LeetCategory::Performer, &["hip hop", "conscious rap"]),
    entry("J. Cole", "J. C0l3", LeetCategory::Performer, &["hip hop", "conscious rap"]),
    entry("Lil Baby", "L1l B4by", LeetCategory::Performer, &["trap", "melodic rap"]),
    entry("Gunna", "GUnn4", LeetCategory::Performer, &["trap", "melodic"]),

    // Performers: emo rap
    entry("Juice WRLD", "JU1c3 WRLD", LeetCategory::Performer, &["emo rap", "melodic", "emotional"]),
    entry("Lil Peep", "L1l P33p", LeetCategory::Performer, &["emo rap", "emo", "punk"]),
    entry("XXXTentacion", "XXXT3nt4c10n", LeetCategory::Performer, &["emo rap", "alternative"]),

    // Performers: hyperpop
    entry("100 gecs", "100 g3c$", LeetCategory::Performer, &["hyperpop", "experimental"]),
    entry("Charli XCX", "Ch4rl1 XCX", LeetCategory::Performer, &["hyperpop", "pop", "experimental"]),
    entry("Sophie", "$0ph13", LeetCategory::Performer, &["hyperpop", "pc music"]),

    // Releases
    entry("Take Care", "T4k3 C4r3", LeetCategory::Release, &["drake", "emotional", "rnb"]),
    entry("Starboy", "$t4rb0y", LeetCategory::Release, &["weeknd", "synth", "pop"]),
    entry("After Hours", "4ft3r H0ur$", LeetCategory::Release, &["weeknd", "synth", "80s"]),
    entry("CTRL", "CTRL", LeetCategory::Release, &["sza", "rnb", "alternative"]),
    entry("Astroworld", "4$tr0w0rld", LeetCategory::Release, &["travis scott", "psychedelic"]),

    // Tracks
    entry("Hotline Bling", "H0tl1n3 Bl1ng", LeetCategory::Track, &["drake", "dancehall"]),
    entry("Blinding Lights", "Bl1nd1ng L1ght$", LeetCategory::Track, &["weeknd", "synth"]),
    entry("Good Days", "G00d D4y$", LeetCategory::Track, &["sza", "soul"]),
    entry("SICKO MODE", "$1CK0 M0D3", LeetCategory::Track, &["travis scott", "trap"]),
    entry("Lucid Dreams", "LUc1d Dr34m$", LeetCategory::Track, &["juice wrld", "emo"]),

    // Techniques
    entry("Auto-Tune", "4ut0-tUn3", LeetCategory::Technique, &["vocal effect", "trap"]),
    entry("Falsetto", "F4l$3tt0", LeetCategory::Technique, &["vocal technique", "rnb"]),
    entry("Melodic Rap", "M3l0d1c R4p", LeetCategory::Technique, &["rap", "singing"]),
    entry("808s", "808$", LeetCategory::Technique, &["drums", "bass", "trap"]),
    entry("Vocal Runs", "V0c4l RUn$", LeetCategory::Technique, &["rnb", "technique"]),
    entry("Ad-libs", "4d-l1b$", LeetCategory::Technique, &["rap", "trap", "vocal"]),
];

/// Fixed artist name to 80s-synthwave stylization table.
pub static RETROWAVE_NAMES: &[(&str, &str)] = &[
    ("Drake", "Dr. Ake (Synthwave Ver)"),
    ("The Weeknd", "The W33kend (Retrowave Mix)"),
    ("SZA", "S.Z.A. (80s Edit)"),
    ("Travis Scott", "Travis Sc0tt (Neon Nights)"),
    ("Ariana Grande", "Ariana Grand3 (Vapor Edit)"),
    ("Future", "FUtUr3 (Retro Future)"),
    ("Billie Eilish", "Billie 31lish (Cyber Dreams)"),
    ("Dua Lipa", "Dua Lip4 (Disco Redux)"),
    ("Burna Boy", "Burn4 Boy (Afro Synth)"),
    ("Kendrick Lamar", "K3ndrick (80s Fusion)"),
];
