//! Plot twist table.

use sonic_dna_core::PlotTwist;

/// Every plot twist, in declared order.
pub static PLOT_TWISTS: &[PlotTwist] = &[
    PlotTwist {
        id: "oppositeVibe",
        name: "Opposite Vibe",
        formula: "Take [Famous Song] but make it [Opposite Genre]",
        example: "Take \"Hotline Bling\" but make it Death Metal",
    },
    PlotTwist {
        id: "eraSwap",
        name: "Era Swap",
        formula: "Take [Modern Artist Style] but produce it like [Decade]",
        example: "Take Travis Scott's style but produce it like 1980s synth-pop",
    },
    PlotTwist {
        id: "genreFusion",
        name: "Genre Fusion",
        formula: "Blend [Genre A] with [Genre B]",
        example: "Blend Reggaeton with Jazz in the style of The Weeknd",
    },
    PlotTwist {
        id: "emotionalFlip",
        name: "Emotional Flip",
        formula: "Take [Sad Song] and make it [Happy/Upbeat]",
        example: "Take \"Marvin's Room\" and make it an upbeat summer anthem",
    },
    PlotTwist {
        id: "instrumentSwap",
        name: "Instrument Swap",
        formula: "Replace [Typical Instruments] with [Unusual Instruments]",
        example: "Replace trap 808s with orchestral strings and harps",
    },
    PlotTwist {
        id: "speedChange",
        name: "Speed Change",
        formula: "Take [Song] and make it [2x faster/slower]",
        example: "Take \"Blinding Lights\" and make it a slow ballad",
    },
    PlotTwist {
        id: "culturalFusion",
        name: "Cultural Fusion",
        formula: "Blend [Western Artist] with [Non-Western Music Tradition]",
        example: "Blend Drake with traditional Indian classical music",
    },
    PlotTwist {
        id: "acousticFlip",
        name: "Acoustic Flip",
        formula: "Take [Electronic Song] and make it acoustic",
        example: "Take a Future trap banger and make it an acoustic guitar ballad",
    },
    PlotTwist {
        id: "genderSwap",
        name: "Gender Swap",
        formula: "Take [Male Artist Song] and reimagine with [Female Vocal Style]",
        example: "Take Drake's \"God's Plan\" but with Ariana Grande's vocal runs",
    },
    PlotTwist {
        id: "languageSwitch",
        name: "Language Switch",
        formula: "Translate [English Song] to [Another Language]",
        example: "Take \"Blinding Lights\" but sing it in Spanish with reggaeton beats",
    },
];
