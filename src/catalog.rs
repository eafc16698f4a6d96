//! Named sprite catalog.
//!
//! The catalog is an explicit, ordered name -> `ShapeSpec` mapping. The
//! driver builds one at startup (built-ins plus manifest entries) and passes
//! it by reference.

use serde::{Deserialize, Serialize};

use crate::types::{Colour, ShapeSpec, SilhouetteKind};

/// A named sprite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    pub name: String,
    #[serde(flatten)]
    pub spec: ShapeSpec,
}

impl Sprite {
    pub fn new(name: impl Into<String>, spec: ShapeSpec) -> Self {
        Self {
            name: name.into(),
            spec,
        }
    }
}

/// Ordered collection of sprites with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpriteCatalog {
    sprites: Vec<Sprite>,
}

impl SpriteCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The pinball sprite set.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for sprite in builtin_sprites() {
            catalog.insert(sprite);
        }
        catalog
    }

    /// Add a sprite, replacing any existing sprite with the same name in place.
    pub fn insert(&mut self, sprite: Sprite) {
        match self.sprites.iter_mut().find(|s| s.name == sprite.name) {
            Some(existing) => *existing = sprite,
            None => self.sprites.push(sprite),
        }
    }

    /// Get a sprite spec by name.
    pub fn get(&self, name: &str) -> Option<&ShapeSpec> {
        self.sprites.iter().find(|s| s.name == name).map(|s| &s.spec)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sprite> {
        self.sprites.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sprites.iter().map(|s| s.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

impl<'a> IntoIterator for &'a SpriteCatalog {
    type Item = &'a Sprite;
    type IntoIter = std::slice::Iter<'a, Sprite>;

    fn into_iter(self) -> Self::IntoIter {
        self.sprites.iter()
    }
}

fn circle(name: &str, diameter: u32, color: Colour) -> Sprite {
    Sprite::new(name, ShapeSpec::Circle { diameter, color })
}

fn rect(name: &str, width: u32, height: u32, color: Colour) -> Sprite {
    Sprite::new(
        name,
        ShapeSpec::Rect {
            width,
            height,
            color,
        },
    )
}

fn silhouette(name: &str, kind: SilhouetteKind, width: u32, height: u32) -> Sprite {
    Sprite::new(
        name,
        ShapeSpec::Silhouette {
            kind,
            width,
            height,
        },
    )
}

fn builtin_sprites() -> Vec<Sprite> {
    vec![
        circle("ball", 16, Colour::rgb(255, 51, 51)),
        rect("flipper", 60, 12, Colour::rgb(51, 153, 255)),
        circle("bumper", 60, Colour::rgb(255, 255, 51)),
        circle("peg", 16, Colour::WHITE),
        rect("wall_obstacle", 40, 10, Colour::rgb(128, 128, 128)),
        // tileable
        rect("wall", 20, 20, Colour::rgb(77, 77, 102)),
        rect("background", 800, 600, Colour::rgb(26, 26, 51)),
        rect("plunger", 10, 30, Colour::rgb(204, 51, 51)),
        rect("launcher_base", 60, 10, Colour::rgb(102, 102, 102)),
        silhouette("basketball_hoop", SilhouetteKind::Hoop, 60, 60),
        silhouette("baseball_player", SilhouetteKind::Player, 20, 40),
        silhouette("baseball_bat", SilhouetteKind::Bat, 40, 12),
        silhouette("soccer_goal", SilhouetteKind::Goal, 50, 30),
    ]
}
