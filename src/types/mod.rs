//! Core domain types for pxsynth.
//!
//! - `Colour` - RGBA colour values
//! - `PixelBuffer` - owned row-major RGBA grid
//! - `ShapeSpec` - what to rasterize

mod colour;
mod pixels;
mod shape;

pub use colour::Colour;
pub use pixels::PixelBuffer;
pub use shape::{ShapeParams, ShapeSpec, SilhouetteKind, SHAPE_KINDS};
