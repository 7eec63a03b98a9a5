//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the sonic_dna binary.

mod commands;
mod generate;
mod tables;

pub use commands::{Cli, Commands};
pub use generate::{generate, show_config};
pub use tables::{
    list_archetypes, list_instruments, list_plot_twists, list_vocal_textures, stylize_leet,
    stylize_retrowave,
};
