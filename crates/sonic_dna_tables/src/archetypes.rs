//! Artist persona table.

use sonic_dna_core::Archetype;

/// Every archetype, in declared order.
pub static ARCHETYPES: &[Archetype] = &[
    Archetype {
        id: "trapSoulKing",
        name: "Trap Soul King",
        description: "Drake meets The Weeknd - moody, introspective, Auto-Tuned",
        default_genres: &["Trap Soul", "R&B", "Hip Hop"],
        vocal_texture_presets: &["autotuned", "melodicRap", "falsetto"],
        instrumentation_tags: &["808s", "ambient synths", "minimalist production"],
    },
    Archetype {
        id: "popRnBQueen",
        name: "Pop R&B Queen",
        description: "Ariana Grande meets SZA - powerful vocals, modern production",
        default_genres: &["Pop", "R&B", "Contemporary R&B"],
        vocal_texture_presets: &["belting", "runs", "breathy"],
        instrumentation_tags: &["trap drums", "piano", "vocal layering"],
    },
    Archetype {
        id: "afrobeatsKing",
        name: "Afrobeats King",
        description: "Burna Boy meets Wizkid - infectious rhythms, global sound",
        default_genres: &["Afrobeats", "Afropop", "Dancehall"],
        vocal_texture_presets: &["patoisAccent", "melodicFlow", "callAndResponse"],
        instrumentation_tags: &["log drums", "shakers", "guitar riffs"],
    },
    Archetype {
        id: "emoRapper",
        name: "Emo Rapper",
        description: "Juice WRLD meets Lil Peep - emotional, melodic, guitar-driven",
        default_genres: &["Emo Rap", "Cloud Rap", "Alternative Hip Hop"],
        vocal_texture_presets: &["autotuned", "melodicRap", "emotional"],
        instrumentation_tags: &["electric guitar", "808s", "melancholic melodies"],
    },
    Archetype {
        id: "hyperpopStar",
        name: "Hyperpop Star",
        description: "100 gecs meets Charli XCX - chaotic, experimental, maximalist",
        default_genres: &["Hyperpop", "Experimental Pop", "Electronic"],
        vocal_texture_presets: &["pitched", "distorted", "layered"],
        instrumentation_tags: &["glitch effects", "bass drops", "synth arpeggios"],
    },
    Archetype {
        id: "latinTrapStar",
        name: "Latin Trap Star",
        description: "Bad Bunny meets Rosalía - reggaeton beats, Spanish flair",
        default_genres: &["Latin Trap", "Reggaeton", "Urban Latino"],
        vocal_texture_presets: &["melodicFlow", "spanish", "rhythmic"],
        instrumentation_tags: &["dembow rhythm", "reggaeton drums", "latin percussion"],
    },
    Archetype {
        id: "indiePopDreamer",
        name: "Indie Pop Dreamer",
        description: "Clairo meets Beabadoobee - lo-fi, intimate, bedroom pop",
        default_genres: &["Indie Pop", "Bedroom Pop", "Lo-Fi"],
        vocal_texture_presets: &["breathy", "soft", "intimate"],
        instrumentation_tags: &["acoustic guitar", "lo-fi drums", "reverb"],
    },
    Archetype {
        id: "drillWarrior",
        name: "Drill Warrior",
        description: "Pop Smoke meets Central Cee - aggressive, dark, drill beats",
        default_genres: &["Drill", "UK Drill", "Hip Hop"],
        vocal_texture_presets: &["gritty", "aggressive", "monotone"],
        instrumentation_tags: &["drill hi-hats", "808 slides", "dark piano"],
    },
    Archetype {
        id: "soulVocalist",
        name: "Soul Vocalist",
        description: "H.E.R. meets Daniel Caesar - soulful, jazzy, emotional",
        default_genres: &["Neo-Soul", "R&B", "Jazz"],
        vocal_texture_presets: &["soulful", "runs", "emotional"],
        instrumentation_tags: &["live instruments", "rhodes piano", "jazz chords"],
    },
    Archetype {
        id: "countryPopCrossover",
        name: "Country Pop Crossover",
        description: "Taylor Swift meets Morgan Wallen - storytelling meets pop hooks",
        default_genres: &["Country Pop", "Pop", "Americana"],
        vocal_texture_presets: &["clean", "storytelling", "twang"],
        instrumentation_tags: &["acoustic guitar", "banjo", "pop production"],
    },
];
