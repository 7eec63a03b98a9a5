//! Vocal texture table.

use sonic_dna_core::VocalTexture;

/// Every vocal texture, in declared order. The first entry is the fallback
/// for archetypes whose preset does not resolve.
pub static VOCAL_TEXTURES: &[VocalTexture] = &[
    VocalTexture {
        id: "autotuned",
        name: "Auto-Tuned",
        description: "Heavily processed with Auto-Tune",
        tag: "autotuned vocals, pitch-corrected, processed vocals",
    },
    VocalTexture {
        id: "melodicRap",
        name: "Melodic Rap",
        description: "Singing-rap hybrid",
        tag: "melodic rap flow, sung-rap hybrid, melodic delivery",
    },
    VocalTexture {
        id: "falsetto",
        name: "Falsetto",
        description: "High, breathy register",
        tag: "falsetto vocals, airy high notes, head voice",
    },
    VocalTexture {
        id: "belting",
        name: "Belting",
        description: "Powerful, chest-voice singing",
        tag: "powerful belting, strong vocals, chest voice",
    },
    VocalTexture {
        id: "breathy",
        name: "Breathy",
        description: "Soft, intimate delivery",
        tag: "breathy vocals, whisper singing, intimate delivery",
    },
    VocalTexture {
        id: "gritty",
        name: "Gritty",
        description: "Raw, rough texture",
        tag: "gritty vocals, raspy voice, raw delivery",
    },
    VocalTexture {
        id: "runs",
        name: "Vocal Runs",
        description: "R&B style vocal runs and riffs",
        tag: "vocal runs, riffs, melismatic singing",
    },
    VocalTexture {
        id: "emotional",
        name: "Emotional",
        description: "Vulnerable, heartfelt delivery",
        tag: "emotional vocals, vulnerable delivery, heartfelt",
    },
    VocalTexture {
        id: "aggressive",
        name: "Aggressive",
        description: "Intense, forceful delivery",
        tag: "aggressive vocals, intense delivery, forceful",
    },
    VocalTexture {
        id: "monotone",
        name: "Monotone",
        description: "Flat, drill-style delivery",
        tag: "monotone flow, flat delivery, drill vocals",
    },
    VocalTexture {
        id: "layered",
        name: "Layered",
        description: "Multiple vocal tracks stacked",
        tag: "layered vocals, vocal stacks, harmonies",
    },
    VocalTexture {
        id: "distorted",
        name: "Distorted",
        description: "Heavy vocal distortion and effects",
        tag: "distorted vocals, vocal fx, processed",
    },
    VocalTexture {
        id: "pitched",
        name: "Pitch-Shifted",
        description: "Heavily pitch-shifted vocals",
        tag: "pitch-shifted vocals, vocal manipulation, altered pitch",
    },
    VocalTexture {
        id: "callAndResponse",
        name: "Call and Response",
        description: "Alternating vocal patterns",
        tag: "call and response, vocal interplay, back and forth",
    },
    VocalTexture {
        id: "melodicFlow",
        name: "Melodic Flow",
        description: "Smooth, flowing melodic rap",
        tag: "melodic flow, smooth delivery, flowing vocals",
    },
    VocalTexture {
        id: "patoisAccent",
        name: "Patois Accent",
        description: "Caribbean/Jamaican accent",
        tag: "patois accent, caribbean vocals, jamaican delivery",
    },
    VocalTexture {
        id: "spanish",
        name: "Spanish Vocals",
        description: "Spanish language delivery",
        tag: "spanish vocals, latin delivery, spanish language",
    },
    VocalTexture {
        id: "soft",
        name: "Soft",
        description: "Gentle, delicate vocals",
        tag: "soft vocals, gentle delivery, delicate voice",
    },
    VocalTexture {
        id: "intimate",
        name: "Intimate",
        description: "Close, personal delivery",
        tag: "intimate vocals, close mic, personal delivery",
    },
    VocalTexture {
        id: "soulful",
        name: "Soulful",
        description: "Deep, soul-influenced vocals",
        tag: "soulful vocals, soul singing, emotive delivery",
    },
    VocalTexture {
        id: "clean",
        name: "Clean",
        description: "Clear, unprocessed vocals",
        tag: "clean vocals, natural voice, unprocessed",
    },
    VocalTexture {
        id: "storytelling",
        name: "Storytelling",
        description: "Narrative, conversational delivery",
        tag: "storytelling vocals, narrative delivery, conversational",
    },
    VocalTexture {
        id: "twang",
        name: "Country Twang",
        description: "Country-style vocal twang",
        tag: "country twang, southern vocals, twangy delivery",
    },
    VocalTexture {
        id: "rhythmic",
        name: "Rhythmic",
        description: "Percussive, rhythm-focused delivery",
        tag: "rhythmic vocals, percussive delivery, rhythm-focused",
    },
];
