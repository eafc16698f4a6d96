//! Geometric primitives: circle, rect, gradient.

use crate::types::{Colour, PixelBuffer};

/// Rasterize a disc.
///
/// The centre sits at `diameter / 2` and the radius is `diameter / 2 - 1`,
/// so the disc is one pixel narrower than its bounding box. The boundary is
/// inclusive.
pub fn circle(diameter: u32, color: Colour) -> PixelBuffer {
    let center = diameter as f64 / 2.0;
    let radius = diameter as f64 / 2.0 - 1.0;

    PixelBuffer::from_fn(diameter, diameter, |x, y| {
        let dx = x as f64 - center;
        let dy = y as f64 - center;
        if (dx * dx + dy * dy).sqrt() <= radius {
            color
        } else {
            Colour::TRANSPARENT
        }
    })
}

/// Fill the whole canvas with one colour.
pub fn rect(width: u32, height: u32, color: Colour) -> PixelBuffer {
    PixelBuffer::filled(width, height, color)
}

/// Vertical gradient from `top` to `bottom`.
///
/// Each row uses `t = row / height`, so the last row stops one step short of
/// `bottom`. Channels are truncated, not rounded.
pub fn gradient(width: u32, height: u32, top: Colour, bottom: Colour) -> PixelBuffer {
    let rows: Vec<Colour> = (0..height)
        .map(|y| lerp(top, bottom, y as f64 / height as f64))
        .collect();

    PixelBuffer::from_fn(width, height, |_, y| rows[y as usize])
}

fn lerp(from: Colour, to: Colour, t: f64) -> Colour {
    let mix = |a: u8, b: u8| (a as f64 * (1.0 - t) + b as f64 * t) as u8;
    Colour::new(
        mix(from.r, to.r),
        mix(from.g, to.g),
        mix(from.b, to.b),
        mix(from.a, to.a),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BALL_RED: Colour = Colour::rgb(255, 51, 51);

    #[test]
    fn test_circle_center_and_corner() {
        let buf = circle(16, BALL_RED);
        assert_eq!(buf.size(), (16, 16));
        assert_eq!(buf.get(8, 8), Some(BALL_RED));
        assert_eq!(buf.get(0, 0), Some(Colour::TRANSPARENT));
        assert_eq!(buf.get(15, 15), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_circle_inclusive_edge() {
        // radius 7 around (8, 8): (1, 8) is exactly on the boundary.
        let buf = circle(16, BALL_RED);
        assert_eq!(buf.get(1, 8), Some(BALL_RED));
        assert_eq!(buf.get(0, 8), Some(Colour::TRANSPARENT));
        assert_eq!(buf.get(8, 15), Some(BALL_RED));
    }

    #[test]
    fn test_circle_tiny_is_empty() {
        // Diameter 1 gives a negative radius; nothing is drawn.
        let buf = circle(1, BALL_RED);
        assert_eq!(buf.get(0, 0), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_rect_fills_every_pixel() {
        let blue = Colour::rgb(51, 153, 255);
        let buf = rect(60, 12, blue);
        assert_eq!(buf.len(), 720);
        assert!(buf.iter().all(|(_, _, c)| c == blue));
    }

    #[test]
    fn test_gradient_truncates_and_never_reaches_bottom() {
        let buf = gradient(1, 4, Colour::BLACK, Colour::WHITE);

        assert_eq!(buf.get(0, 0), Some(Colour::BLACK));
        assert_eq!(buf.get(0, 1), Some(Colour::rgb(63, 63, 63)));
        assert_eq!(buf.get(0, 2), Some(Colour::rgb(127, 127, 127)));
        assert_eq!(buf.get(0, 3), Some(Colour::rgb(191, 191, 191)));
    }

    #[test]
    fn test_gradient_rows_are_uniform() {
        let buf = gradient(5, 3, Colour::rgb(0, 0, 255), Colour::rgb(255, 0, 0));
        for row in buf.rows() {
            assert!(row.iter().all(|&c| c == row[0]));
        }
    }
}
