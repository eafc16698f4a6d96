//! Rendering module for pxsynth.
//!
//! Rasterizers turn a `ShapeSpec` into a `PixelBuffer`; the PNG encoder
//! turns a buffer into container bytes.

mod png;
mod primitive;
mod silhouette;

pub use png::{
    encode_png, encode_rgba, read_chunks, verify_png, write_png, Chunk, RawChunk,
    COMPRESSION_LEVEL, IDAT, IEND, IHDR, MAX_DIMENSION, PNG_SIGNATURE,
};
pub use primitive::{circle, gradient, rect};
pub use silhouette::{bat, goal, hoop, player, silhouette, NET_DASH, NET_PERIOD};

use crate::types::{PixelBuffer, ShapeSpec};

/// Rasterize a shape spec.
///
/// Precondition: both dimensions are at least 1 (see [`ShapeSpec::validate`]).
/// Zero-sized specs produce an empty buffer rather than an error.
pub fn rasterize(spec: &ShapeSpec) -> PixelBuffer {
    match *spec {
        ShapeSpec::Circle { diameter, color } => circle(diameter, color),
        ShapeSpec::Rect {
            width,
            height,
            color,
        } => rect(width, height, color),
        ShapeSpec::Gradient {
            width,
            height,
            top,
            bottom,
        } => gradient(width, height, top, bottom),
        ShapeSpec::Silhouette {
            kind,
            width,
            height,
        } => silhouette(kind, width, height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Colour, SilhouetteKind};

    #[test]
    fn test_rasterize_matches_spec_dimensions() {
        let specs = [
            ShapeSpec::Circle {
                diameter: 16,
                color: Colour::WHITE,
            },
            ShapeSpec::Rect {
                width: 60,
                height: 12,
                color: Colour::WHITE,
            },
            ShapeSpec::Gradient {
                width: 8,
                height: 3,
                top: Colour::BLACK,
                bottom: Colour::WHITE,
            },
            ShapeSpec::Silhouette {
                kind: SilhouetteKind::Goal,
                width: 50,
                height: 30,
            },
        ];

        for spec in &specs {
            assert_eq!(rasterize(spec).size(), spec.dimensions(), "{spec:?}");
        }
    }
}
