//! Table browsing and stylizer command handlers.

use super::commands::OutputFormat;
use serde::Serialize;
use sonic_dna::{
    InstrumentationCategory, JsonError, SeededRandom, SonicDnaResult, ThreadRandom, archetypes,
    category_tags, instrumentation_by_category, plot_twists, random_instrumentation,
    retrowave_style, translate_to_leet, vocal_textures,
};
use strum::IntoEnumIterator;

fn print_json<T: Serialize + ?Sized>(value: &T) -> SonicDnaResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| JsonError::new(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

/// List archetypes.
pub fn list_archetypes(format: OutputFormat) -> SonicDnaResult<()> {
    match format {
        OutputFormat::Json => print_json(archetypes())?,
        OutputFormat::Human => {
            for archetype in archetypes() {
                println!("{:<22} {}", archetype.id, archetype.name);
                println!("{:<22} {}", "", archetype.description);
                println!("{:<22} {}", "", archetype.default_genres.join(", "));
            }
            println!("Total: {} archetypes", archetypes().len());
        }
    }
    Ok(())
}

/// List plot twists.
pub fn list_plot_twists(format: OutputFormat) -> SonicDnaResult<()> {
    match format {
        OutputFormat::Json => print_json(plot_twists())?,
        OutputFormat::Human => {
            for twist in plot_twists() {
                println!("{:<16} {}", twist.id, twist.formula);
            }
        }
    }
    Ok(())
}

/// List vocal textures.
pub fn list_vocal_textures(format: OutputFormat) -> SonicDnaResult<()> {
    match format {
        OutputFormat::Json => print_json(vocal_textures())?,
        OutputFormat::Human => {
            for texture in vocal_textures() {
                println!("{:<16} {}", texture.id, texture.tag);
            }
        }
    }
    Ok(())
}

/// List the instrumentation catalog, one category, or a random sample.
pub fn list_instruments(
    category: Option<&str>,
    random: Option<usize>,
    seed: Option<u64>,
) -> SonicDnaResult<()> {
    if let Some(count) = random {
        let picked = match seed {
            Some(seed) => random_instrumentation(&mut SeededRandom::new(seed), count),
            None => random_instrumentation(&mut ThreadRandom, count),
        };
        println!("{}", picked.join(", "));
        return Ok(());
    }

    if let Some(key) = category {
        for tag in instrumentation_by_category(key)? {
            println!("{}", tag);
        }
        return Ok(());
    }

    for category in InstrumentationCategory::iter() {
        println!("{}: {}", category, category_tags(category).join(", "));
    }
    Ok(())
}

/// Print the leet translation of `text`.
pub fn stylize_leet(text: &str) {
    println!("{}", translate_to_leet(text));
}

/// Print the retrowave stylization of `name`.
pub fn stylize_retrowave(name: &str) {
    println!("{}", retrowave_style(name));
}
