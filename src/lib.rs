//! pxsynth - procedural sprite synthesizer
//!
//! Builds RGBA pixel buffers from geometric primitives and composite
//! silhouettes, and encodes them as PNG without an image codec library.

pub mod catalog;
pub mod cli;
pub mod error;
pub mod manifest;
pub mod output;
pub mod render;
pub mod synth;
pub mod types;

pub use catalog::{Sprite, SpriteCatalog};
pub use error::{Result, SynthError};
pub use manifest::{Manifest, MANIFEST_FILENAME};
pub use render::{encode_png, encode_rgba, rasterize, read_chunks, verify_png, write_png, RawChunk};
pub use synth::{render_scaled, synthesize, synthesize_kind, synthesize_scaled};
pub use types::{Colour, PixelBuffer, ShapeParams, ShapeSpec, SilhouetteKind};
