//! Owned RGBA pixel grid.

use crate::error::{Result, SynthError};

use super::Colour;

/// An RGBA raster, row-major (top-to-bottom, left-to-right).
///
/// The pixel vector always holds exactly `width * height` entries; every
/// accessor is bounds-checked against the grid rather than the flat index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Colour>,
}

impl PixelBuffer {
    /// Create a fully transparent buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Colour::TRANSPARENT)
    }

    /// Create a buffer where every pixel is `colour`.
    pub fn filled(width: u32, height: u32, colour: Colour) -> Self {
        Self {
            width,
            height,
            pixels: vec![colour; width as usize * height as usize],
        }
    }

    /// Create a buffer by classifying every pixel with `f(x, y)`.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Colour) -> Self {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Build a buffer from packed RGBA bytes.
    pub fn from_rgba(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(SynthError::dimensions(
                width,
                height,
                format!("expected {} RGBA bytes, got {}", expected, bytes.len()),
            ));
        }

        let pixels = bytes
            .chunks_exact(4)
            .map(|px| Colour::new(px[0], px[1], px[2], px[3]))
            .collect();

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels in the grid.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Get a mutable pixel at the given position.
    pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut Colour> {
        self.index(x, y).map(move |i| &mut self.pixels[i])
    }

    /// Set a pixel. Returns false if the position is outside the grid.
    pub fn set(&mut self, x: u32, y: u32, colour: Colour) -> bool {
        match self.get_mut(x, y) {
            Some(px) => {
                *px = colour;
                true
            }
            None => false,
        }
    }

    /// Get one row of pixels.
    pub fn row(&self, y: u32) -> Option<&[Colour]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.pixels[start..start + self.width as usize])
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Colour]> {
        // chunks_exact(0) panics; a zero-width grid has no rows to yield.
        let width = (self.width as usize).max(1);
        self.pixels.chunks_exact(width)
    }

    /// Iterate over all pixels with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, Colour)> + '_ {
        let width = self.width.max(1);
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, &c)| ((i as u32) % width, (i as u32) / width, c))
    }

    /// Flatten to packed RGBA bytes.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.pixels.len() * 4);
        for colour in &self.pixels {
            buffer.extend_from_slice(&colour.to_rgba());
        }
        buffer
    }

    /// Nearest-neighbour integer upscale. A factor of 0 or 1 returns a copy.
    pub fn scaled(&self, factor: u32) -> Self {
        if factor <= 1 {
            return self.clone();
        }

        Self::from_fn(self.width * factor, self.height * factor, |x, y| {
            self.pixels[(y / factor) as usize * self.width as usize + (x / factor) as usize]
        })
    }
}
