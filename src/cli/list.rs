//! List command implementation.
//!
//! Prints the sprite catalog, as status lines or as JSON on stdout.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::catalog::{Sprite, SpriteCatalog};
use crate::error::{Result, SynthError};
use crate::manifest::Manifest;
use crate::output::{plural, Printer};

/// List catalog sprites
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Manifest file (default: ./pxsynth.yaml if present)
    #[arg(long, short)]
    pub manifest: Option<PathBuf>,

    /// Print JSON to stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::load_or_default(args.manifest.as_deref(), Path::new("."))?;
    let catalog = manifest.catalog();

    if args.json {
        println!("{}", to_json(&catalog)?);
    } else {
        for sprite in &catalog {
            printer.info(sprite.spec.kind_name(), &describe(sprite));
        }
        printer.status("Found", &plural(catalog.len(), "sprite", "sprites"));
    }

    Ok(())
}

fn describe(sprite: &Sprite) -> String {
    let (w, h) = sprite.spec.dimensions();
    format!("{} {}x{}", sprite.name, w, h)
}

fn to_json(catalog: &SpriteCatalog) -> Result<String> {
    let sprites: Vec<&Sprite> = catalog.iter().collect();
    serde_json::to_string_pretty(&sprites).map_err(|e| SynthError::Build {
        message: format!("Failed to serialize catalog: {}", e),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let catalog = SpriteCatalog::builtin();
        let flipper = catalog.iter().find(|s| s.name == "flipper").unwrap();
        assert_eq!(describe(flipper), "flipper 60x12");
    }

    #[test]
    fn test_json_round_trips() {
        let catalog = SpriteCatalog::builtin();
        let json = to_json(&catalog).unwrap();

        let parsed: Vec<Sprite> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), catalog.len());
        assert_eq!(parsed[0].name, "ball");
        assert_eq!(Some(&parsed[0].spec), catalog.get("ball"));
    }
}
