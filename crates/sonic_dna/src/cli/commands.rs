//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use sonic_dna::{SonicDnaConfig, SonicDnaResult};
use std::path::PathBuf;

/// Sonic DNA - archetype-driven music prompt generator
#[derive(Parser, Debug)]
#[command(name = "sonic_dna")]
#[command(about = "Archetype-driven music prompt generator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Read configuration from this file instead of the default locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Loads the configuration named on the command line, or the layered default.
    pub fn load_config(&self) -> SonicDnaResult<SonicDnaConfig> {
        match &self.config {
            Some(path) => SonicDnaConfig::from_file(path),
            None => SonicDnaConfig::load(),
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a prompt from an archetype
    Generate(GenerateArgs),

    /// List artist archetypes
    Archetypes {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// List plot twists
    Twists {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// List vocal textures
    Textures {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Browse or sample the instrumentation catalog
    Instruments {
        /// Only show this category (drums, bass, keys, ...)
        #[arg(long)]
        category: Option<String>,

        /// Sample this many tags instead of listing
        #[arg(long)]
        random: Option<usize>,

        /// Seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Stylize text with the leet dictionary
    Leet {
        /// Text to translate
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Show the retrowave stylization of an artist name
    Retro {
        /// Artist name
        #[arg(required = true)]
        name: Vec<String>,
    },

    /// Show the effective configuration
    Config,
}

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Archetype identifier (see `sonic_dna archetypes`)
    #[arg(long)]
    pub archetype: String,

    /// Free-text mood, e.g. "sad and emotional"
    #[arg(long)]
    pub vibe: Option<String>,

    /// Artist to reference (repeatable)
    #[arg(long = "influence")]
    pub influences: Vec<String>,

    /// Plot twist identifier (random when omitted)
    #[arg(long)]
    pub twist: Option<String>,

    /// Instrumentation override (repeatable)
    #[arg(long = "instrument")]
    pub instruments: Vec<String>,

    /// Song for the plot twist to riff on
    #[arg(long)]
    pub song: Option<String>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Submit the prompt to the mock track backend
    #[arg(long)]
    pub submit: bool,

    /// Artist id used when submitting
    #[arg(long, default_value = "sonic-dna-cli")]
    pub artist_id: String,
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
