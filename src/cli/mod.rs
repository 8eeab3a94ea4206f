pub mod completions;
pub mod extract;
pub mod process;
pub mod theme;

use clap::{Parser, Subcommand};

/// emblem - Brand theme and logo asset pipeline
#[derive(Parser, Debug)]
#[command(name = "emblem")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process a brand logo into transparent PNG assets
    Process(process::ProcessArgs),

    /// Sample the dominant colour from an image
    Extract(extract::ExtractArgs),

    /// Derive theme variables from an accent colour or image
    Theme(theme::ThemeArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
