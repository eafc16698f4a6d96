//! Synthesis entry points: validate, rasterize, upscale, encode.

use crate::error::{Result, SynthError};
use crate::render::{encode_png, rasterize, MAX_DIMENSION};
use crate::types::{PixelBuffer, ShapeParams, ShapeSpec};

/// Synthesize PNG bytes for a shape spec.
pub fn synthesize(spec: &ShapeSpec) -> Result<Vec<u8>> {
    synthesize_scaled(spec, 1)
}

/// Synthesize PNG bytes, upscaling by an integer factor before encoding.
///
/// A factor of 0 is treated as 1.
pub fn synthesize_scaled(spec: &ShapeSpec, scale: u32) -> Result<Vec<u8>> {
    let buffer = render_scaled(spec, scale)?;
    encode_png(&buffer)
}

/// Select a shape by kind name (e.g. "circle", "goal") and synthesize it.
pub fn synthesize_kind(kind: &str, params: &ShapeParams) -> Result<Vec<u8>> {
    synthesize(&ShapeSpec::from_kind(kind, params)?)
}

/// Validate and rasterize a spec, then upscale.
///
/// The scaled size is checked before any pixel is allocated.
pub fn render_scaled(spec: &ShapeSpec, scale: u32) -> Result<PixelBuffer> {
    spec.validate()?;

    let (width, height) = spec.dimensions();
    let factor = scale.max(1);
    let fits = |n: u32| n.checked_mul(factor).is_some_and(|n| n <= MAX_DIMENSION);
    if !fits(width) || !fits(height) {
        return Err(SynthError::dimensions(
            width,
            height,
            format!("scale {} exceeds the maximum size of {}", scale, MAX_DIMENSION),
        ));
    }

    Ok(rasterize(spec).scaled(scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::read_chunks;
    use crate::types::Colour;

    #[test]
    fn test_synthesize_is_deterministic() {
        let spec = ShapeSpec::Circle {
            diameter: 16,
            color: Colour::rgb(255, 51, 51),
        };
        assert_eq!(synthesize(&spec).unwrap(), synthesize(&spec).unwrap());
    }

    #[test]
    fn test_synthesize_rejects_zero_size() {
        let spec = ShapeSpec::Rect {
            width: 0,
            height: 12,
            color: Colour::WHITE,
        };
        assert!(matches!(
            synthesize(&spec),
            Err(SynthError::InvalidDimensions { width: 0, height: 12, .. })
        ));
    }

    #[test]
    fn test_synthesize_kind_unknown() {
        let params = ShapeParams::new(4, 4, Colour::WHITE);
        assert!(matches!(
            synthesize_kind("hexagon", &params),
            Err(SynthError::UnsupportedShapeKind { .. })
        ));
    }

    #[test]
    fn test_scaled_header() {
        let spec = ShapeSpec::Silhouette {
            kind: crate::types::SilhouetteKind::Bat,
            width: 40,
            height: 12,
        };
        let png = synthesize_scaled(&spec, 3).unwrap();
        let chunks = read_chunks(&png).unwrap();
        let ihdr = chunks[0].payload;

        assert_eq!(&ihdr[0..4], &120u32.to_be_bytes());
        assert_eq!(&ihdr[4..8], &36u32.to_be_bytes());
    }

    #[test]
    fn test_render_scaled_overflow() {
        let spec = ShapeSpec::Rect {
            width: 70_000,
            height: 1,
            color: Colour::BLACK,
        };
        assert!(matches!(
            render_scaled(&spec, 70_000),
            Err(SynthError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_render_scaled_past_dimension_limit() {
        // 2.8e9 fits in u32 but not in a PNG header.
        let spec = ShapeSpec::Rect {
            width: 70_000,
            height: 1,
            color: Colour::BLACK,
        };
        assert!(matches!(
            render_scaled(&spec, 40_000),
            Err(SynthError::InvalidDimensions { width: 70_000, height: 1, .. })
        ));
    }

    #[test]
    fn test_synthesize_rejects_oversized_canvas() {
        let spec = ShapeSpec::Rect {
            width: MAX_DIMENSION + 1,
            height: 1,
            color: Colour::BLACK,
        };
        assert!(matches!(
            synthesize(&spec),
            Err(SynthError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_render_scaled_zero_factor() {
        let spec = ShapeSpec::Rect {
            width: 2,
            height: 3,
            color: Colour::BLACK,
        };
        assert_eq!(render_scaled(&spec, 0).unwrap().size(), (2, 3));
    }
}
