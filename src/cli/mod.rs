pub mod build;
pub mod completions;
pub mod list;
pub mod render;
pub mod verify;

use clap::{Parser, Subcommand};

/// pxsynth - procedural sprite synthesizer
#[derive(Parser, Debug)]
#[command(name = "pxsynth")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress status output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate catalog sprites into the assets directory
    Build(build::BuildArgs),

    /// Render a single shape to a PNG file
    Render(render::RenderArgs),

    /// List catalog sprites
    List(list::ListArgs),

    /// Check PNG signatures and chunk checksums
    Verify(verify::VerifyArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
