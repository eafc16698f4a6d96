//! Project manifest (pxsynth.yaml) parsing.
//!
//! The manifest sets the output directory and scale, and can add or
//! override catalog sprites.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::{Sprite, SpriteCatalog};
use crate::error::{Result, SynthError};

/// Manifest filename looked up in the working directory.
pub const MANIFEST_FILENAME: &str = "pxsynth.yaml";

/// Project manifest loaded from pxsynth.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Output directory for generated sprites.
    pub output: PathBuf,

    /// Default integer scale factor.
    pub scale: Option<u32>,

    /// Include the built-in sprite set.
    pub builtins: bool,

    /// Extra sprites; an entry with a built-in name replaces it.
    pub sprites: Vec<Sprite>,
}

fn default_output() -> PathBuf {
    PathBuf::from("assets/sprites")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output: default_output(),
            scale: None,
            builtins: true,
            sprites: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a pxsynth.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SynthError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `path` if given, else `pxsynth.yaml` in `dir` if present, else defaults.
    pub fn load_or_default(path: Option<&Path>, dir: &Path) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let candidate = dir.join(MANIFEST_FILENAME);
                if candidate.is_file() {
                    Self::load(&candidate)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let manifest: Self = serde_yaml::from_str(content).map_err(|e| SynthError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })?;

        for sprite in &manifest.sprites {
            sprite.spec.validate().map_err(|e| SynthError::Parse {
                message: format!("Sprite '{}': {}", sprite.name, e),
                help: Some("Sprite sizes must be at least 1x1".to_string()),
            })?;
        }

        Ok(manifest)
    }

    /// Build the sprite catalog this manifest describes.
    pub fn catalog(&self) -> SpriteCatalog {
        let mut catalog = if self.builtins {
            SpriteCatalog::builtin()
        } else {
            SpriteCatalog::new()
        };

        for sprite in &self.sprites {
            catalog.insert(sprite.clone());
        }

        catalog
    }

    /// Get the effective scale factor.
    pub fn effective_scale(&self) -> u32 {
        self.scale.unwrap_or(1).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Colour, ShapeSpec, SilhouetteKind};
    use tempfile::tempdir;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = Manifest::parse("output: build").unwrap();

        assert_eq!(manifest.output, PathBuf::from("build"));
        assert!(manifest.builtins);
        assert!(manifest.sprites.is_empty());
        assert_eq!(manifest.effective_scale(), 1);
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r##"
output: game/assets/sprites
scale: 2
builtins: false
sprites:
  - name: sky
    shape: gradient
    width: 800
    height: 600
    top: "#1A1A33"
    bottom: "#000000"
  - name: ball
    shape: circle
    diameter: 24
    color: "#FF3333"
  - name: goal
    shape: silhouette
    kind: goal
    width: 50
    height: 30
"##;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.output, PathBuf::from("game/assets/sprites"));
        assert_eq!(manifest.effective_scale(), 2);

        let catalog = manifest.catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.get("sky"),
            Some(&ShapeSpec::Gradient {
                width: 800,
                height: 600,
                top: Colour::rgb(26, 26, 51),
                bottom: Colour::BLACK,
            })
        );
        assert_eq!(
            catalog.get("goal"),
            Some(&ShapeSpec::Silhouette {
                kind: SilhouetteKind::Goal,
                width: 50,
                height: 30,
            })
        );
    }

    #[test]
    fn test_manifest_overrides_builtin() {
        let yaml = "sprites:\n  - name: ball\n    shape: circle\n    diameter: 24\n    color: '#00FF00'\n";
        let catalog = Manifest::parse(yaml).unwrap().catalog();

        assert_eq!(catalog.len(), 13);
        assert_eq!(catalog.get("ball").unwrap().dimensions(), (24, 24));
    }

    #[test]
    fn test_rejects_unknown_shape() {
        let yaml = "sprites:\n  - name: x\n    shape: triangle\n    width: 4\n    height: 4\n";
        assert!(matches!(Manifest::parse(yaml), Err(SynthError::Parse { .. })));
    }

    #[test]
    fn test_rejects_zero_size_sprite() {
        let yaml = "sprites:\n  - name: x\n    shape: rect\n    width: 0\n    height: 4\n    color: '#FFF'\n";
        assert!(matches!(Manifest::parse(yaml), Err(SynthError::Parse { .. })));
    }

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = Manifest::parse("").unwrap();
        assert_eq!(manifest.output, PathBuf::from("assets/sprites"));
        assert_eq!(manifest.catalog().len(), 13);
    }

    #[test]
    fn test_load_or_default() {
        let dir = tempdir().unwrap();
        let manifest = Manifest::load_or_default(None, dir.path()).unwrap();
        assert_eq!(manifest.output, PathBuf::from("assets/sprites"));

        std::fs::write(dir.path().join(MANIFEST_FILENAME), "scale: 4\n").unwrap();
        let manifest = Manifest::load_or_default(None, dir.path()).unwrap();
        assert_eq!(manifest.effective_scale(), 4);

        let missing = dir.path().join("nope.yaml");
        assert!(Manifest::load_or_default(Some(&missing), dir.path()).is_err());
    }
}
