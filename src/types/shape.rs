//! Shape descriptions.
//!
//! A `ShapeSpec` is the pure input to a rasterization function. Specs can be
//! declared in a manifest:
//!
//! ```yaml
//! sprites:
//!   - name: ball
//!     shape: circle
//!     diameter: 16
//!     color: "#FF3333"
//!   - name: goal
//!     shape: silhouette
//!     kind: goal
//!     width: 50
//!     height: 30
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SynthError};

use super::Colour;
use crate::render::MAX_DIMENSION;

/// A composite game-object silhouette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SilhouetteKind {
    Hoop,
    Player,
    Bat,
    Goal,
}

impl SilhouetteKind {
    pub const ALL: [SilhouetteKind; 4] = [Self::Hoop, Self::Player, Self::Bat, Self::Goal];

    pub fn name(self) -> &'static str {
        match self {
            Self::Hoop => "hoop",
            Self::Player => "player",
            Self::Bat => "bat",
            Self::Goal => "goal",
        }
    }
}

impl fmt::Display for SilhouetteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SilhouetteKind {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| unsupported_kind(s))
    }
}

/// What to rasterize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ShapeSpec {
    /// A filled disc inside a `diameter` x `diameter` canvas.
    Circle { diameter: u32, color: Colour },

    /// A full-canvas fill.
    Rect { width: u32, height: u32, color: Colour },

    /// A vertical two-colour gradient.
    Gradient {
        width: u32,
        height: u32,
        top: Colour,
        bottom: Colour,
    },

    /// A fixed multi-part silhouette.
    Silhouette {
        kind: SilhouetteKind,
        width: u32,
        height: u32,
    },
}

/// Shape kinds accepted by [`ShapeSpec::from_kind`].
pub const SHAPE_KINDS: [&str; 7] = ["circle", "rect", "gradient", "hoop", "player", "bat", "goal"];

/// Loose parameters used when a shape is selected by kind name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeParams {
    pub width: u32,
    pub height: u32,
    pub color: Colour,
    /// Bottom colour, required for gradients.
    pub bottom: Option<Colour>,
}

impl ShapeParams {
    pub fn new(width: u32, height: u32, color: Colour) -> Self {
        Self {
            width,
            height,
            color,
            bottom: None,
        }
    }

    pub fn with_bottom(mut self, bottom: Colour) -> Self {
        self.bottom = Some(bottom);
        self
    }
}

impl ShapeSpec {
    /// Resolve a kind name and parameters into a spec.
    ///
    /// Circles use `params.width` as the diameter. Silhouettes ignore the
    /// colour parameters and draw in their fixed colours.
    pub fn from_kind(kind: &str, params: &ShapeParams) -> Result<Self> {
        let ShapeParams {
            width,
            height,
            color,
            bottom,
        } = *params;

        match kind {
            "circle" => Ok(Self::Circle {
                diameter: width,
                color,
            }),
            "rect" => Ok(Self::Rect {
                width,
                height,
                color,
            }),
            "gradient" => {
                let bottom = bottom.ok_or_else(|| SynthError::Parse {
                    message: "gradient requires a bottom colour".to_string(),
                    help: Some("Pass --bottom <HEX>".to_string()),
                })?;
                Ok(Self::Gradient {
                    width,
                    height,
                    top: color,
                    bottom,
                })
            }
            other => {
                let kind = other.parse::<SilhouetteKind>()?;
                Ok(Self::Silhouette {
                    kind,
                    width,
                    height,
                })
            }
        }
    }

    /// Output dimensions as (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        match *self {
            Self::Circle { diameter, .. } => (diameter, diameter),
            Self::Rect { width, height, .. }
            | Self::Gradient { width, height, .. }
            | Self::Silhouette { width, height, .. } => (width, height),
        }
    }

    /// Short kind name (e.g. "circle", "goal").
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Circle { .. } => "circle",
            Self::Rect { .. } => "rect",
            Self::Gradient { .. } => "gradient",
            Self::Silhouette { kind, .. } => kind.name(),
        }
    }

    /// Check the rasterizer precondition: both dimensions in
    /// `1..=MAX_DIMENSION`.
    pub fn validate(&self) -> Result<()> {
        let (width, height) = self.dimensions();
        if width == 0 || height == 0 {
            return Err(SynthError::dimensions(
                width,
                height,
                "width and height must be at least 1",
            ));
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(SynthError::dimensions(
                width,
                height,
                format!("dimensions must not exceed {}", MAX_DIMENSION),
            ));
        }
        Ok(())
    }
}

fn unsupported_kind(kind: &str) -> SynthError {
    SynthError::UnsupportedShapeKind {
        kind: kind.to_string(),
        help: Some(format!("Expected one of: {}", SHAPE_KINDS.join(", "))),
    }
}
