//! Sonic DNA CLI binary.
//!
//! This binary provides command-line access to the prompt generator:
//! - Generate prompts (and optionally mock tracks) from an archetype
//! - Browse the archetype, plot twist, vocal texture and instrumentation tables
//! - Try the leet and retrowave name stylizers

use clap::Parser;
use sonic_dna::{LoggingConfig, init_logging};

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{
        Cli, Commands, generate, list_archetypes, list_instruments, list_plot_twists,
        list_vocal_textures, show_config, stylize_leet, stylize_retrowave,
    };

    // Parse command-line arguments
    let cli = Cli::parse();

    init_logging(
        LoggingConfig::default()
            .with_verbose(cli.verbose)
            .with_json_logs(cli.json_logs),
    )?;

    let config = cli.load_config()?;

    match cli.command {
        Commands::Generate(args) => generate(args, &config)?,
        Commands::Archetypes { format } => list_archetypes(format)?,
        Commands::Twists { format } => list_plot_twists(format)?,
        Commands::Textures { format } => list_vocal_textures(format)?,
        Commands::Instruments {
            category,
            random,
            seed,
        } => list_instruments(category.as_deref(), random, seed)?,
        Commands::Leet { text } => stylize_leet(&text.join(" ")),
        Commands::Retro { name } => stylize_retrowave(&name.join(" ")),
        Commands::Config => show_config(&config)?,
    }

    Ok(())
}
