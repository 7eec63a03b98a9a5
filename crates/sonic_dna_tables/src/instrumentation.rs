//! Instrumentation catalog.

use sonic_dna_core::InstrumentationCategory;

const DRUMS: &[&str] = &[
    "808s",
    "trap hi-hats",
    "live drums",
    "electronic drums",
    "drum machine",
    "drill hi-hats",
    "dembow rhythm",
    "reggaeton drums",
    "log drums",
    "lo-fi drums",
    "breakbeats",
    "boom bap drums",
];

const BASS: &[&str] = &[
    "sub bass",
    "synth bass",
    "electric bass",
    "upright bass",
    "808 bass",
    "reese bass",
    "wobble bass",
    "bass guitar",
];

const KEYS: &[&str] = &[
    "piano",
    "electric piano",
    "synths",
    "ambient pads",
    "organ",
    "rhodes piano",
    "dark piano",
    "bright piano",
    "keys",
];

const STRINGS: &[&str] = &[
    "violin",
    "cello",
    "string section",
    "pizzicato strings",
    "orchestral strings",
    "staccato strings",
];

const BRASS: &[&str] = &[
    "trumpet",
    "saxophone",
    "trombone",
    "horn section",
    "brass hits",
];

const GUITARS: &[&str] = &[
    "acoustic guitar",
    "electric guitar",
    "bass guitar",
    "guitar riffs",
    "guitar strums",
    "distorted guitar",
    "clean guitar",
    "guitar solo",
    "banjo",
];

const SYNTHS: &[&str] = &[
    "ambient synths",
    "synth arpeggios",
    "synth leads",
    "synth pads",
    "retro synths",
    "80s synths",
    "analog synths",
    "digital synths",
    "synth bass",
];

const PERCUSSION: &[&str] = &[
    "shakers",
    "congas",
    "bongos",
    "tambourine",
    "claps",
    "snaps",
    "latin percussion",
    "african percussion",
    "hand drums",
];

const EFFECTS: &[&str] = &[
    "vocal chops",
    "reversed sounds",
    "glitch effects",
    "vinyl crackle",
    "tape hiss",
    "ambient noise",
    "sound fx",
    "risers",
    "downlifters",
    "bass drops",
];

const PRODUCTION: &[&str] = &[
    "minimalist",
    "maximalist",
    "lo-fi",
    "hi-fi",
    "atmospheric",
    "spacious",
    "compressed",
    "raw",
    "polished",
    "experimental",
    "psychedelic",
    "dark",
    "bright",
    "warm",
    "cold",
];

/// Tags for one category, in catalog order.
pub fn category_tags(category: InstrumentationCategory) -> &'static [&'static str] {
    match category {
        InstrumentationCategory::Drums => DRUMS,
        InstrumentationCategory::Bass => BASS,
        InstrumentationCategory::Keys => KEYS,
        InstrumentationCategory::Strings => STRINGS,
        InstrumentationCategory::Brass => BRASS,
        InstrumentationCategory::Guitars => GUITARS,
        InstrumentationCategory::Synths => SYNTHS,
        InstrumentationCategory::Percussion => PERCUSSION,
        InstrumentationCategory::Effects => EFFECTS,
        InstrumentationCategory::Production => PRODUCTION,
    }
}
