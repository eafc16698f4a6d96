//! Build command implementation.
//!
//! Synthesizes catalog sprites and writes them as PNG files.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::catalog::{Sprite, SpriteCatalog};
use crate::error::{Result, SynthError};
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};
use crate::render::write_png;
use crate::synth::synthesize_scaled;

/// Generate catalog sprites into the assets directory
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Sprites to build (default: all)
    pub names: Vec<String>,

    /// Manifest file (default: ./pxsynth.yaml if present)
    #[arg(long, short)]
    pub manifest: Option<PathBuf>,

    /// Output directory (overrides the manifest)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Integer scale factor (overrides the manifest)
    #[arg(long)]
    pub scale: Option<u32>,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::load_or_default(args.manifest.as_deref(), Path::new("."))?;
    let catalog = manifest.catalog();

    let output = args.output.clone().unwrap_or_else(|| manifest.output.clone());
    let scale = args.scale.unwrap_or_else(|| manifest.effective_scale()).max(1);

    let sprites = select(&catalog, &args.names)?;

    for sprite in &sprites {
        let path = build_sprite(sprite, &output, scale)?;
        let (w, h) = sprite.spec.dimensions();
        printer.status(
            "Generating",
            &format!(
                "{} ({}x{}) {} {}",
                sprite.name,
                w * scale,
                h * scale,
                printer.dim("->"),
                display_path(&path)
            ),
        );
    }

    printer.status(
        "Finished",
        &format!(
            "{} in {}",
            plural(sprites.len(), "sprite", "sprites"),
            display_path(&output)
        ),
    );

    Ok(())
}

/// Synthesize one sprite into `<output>/<name>.png`.
pub fn build_sprite(sprite: &Sprite, output: &Path, scale: u32) -> Result<PathBuf> {
    let bytes = synthesize_scaled(&sprite.spec, scale)?;
    let path = output.join(format!("{}.png", sprite.name));
    write_png(&path, &bytes)?;
    Ok(path)
}

/// Pick the requested sprites, or all of them when `names` is empty.
fn select<'a>(catalog: &'a SpriteCatalog, names: &[String]) -> Result<Vec<&'a Sprite>> {
    if names.is_empty() {
        return Ok(catalog.iter().collect());
    }

    let missing: Vec<&str> = names
        .iter()
        .map(String::as_str)
        .filter(|name| !catalog.contains(name))
        .collect();
    if !missing.is_empty() {
        return Err(SynthError::Build {
            message: format!("Unknown sprite(s): {}", missing.join(", ")),
            help: Some("Run `pxsynth list` to see available sprites".to_string()),
        });
    }

    Ok(catalog
        .iter()
        .filter(|s| names.iter().any(|n| *n == s.name))
        .collect())
}
