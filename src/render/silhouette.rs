//! Composite silhouettes for sports-themed obstacles.
//!
//! Each kind is a short chain of per-pixel geometric tests. All geometry is
//! proportional to the canvas; the first matching region wins and a pixel
//! that matches nothing stays transparent.

use crate::types::{Colour, PixelBuffer, SilhouetteKind};

const WOOD: Colour = Colour::rgb(120, 80, 40);
const HOOP_ORANGE: Colour = Colour::rgb(255, 140, 0);
const HOOP_RIM: Colour = Colour::rgb(200, 100, 0);
const UNIFORM: Colour = Colour::rgb(60, 60, 80);
const GOAL_FRAME: Colour = Colour::rgb(200, 200, 200);
const GOAL_NET: Colour = Colour::new(180, 180, 180, 150);

/// Net dash period along the `x + y` diagonal.
pub const NET_PERIOD: u32 = 8;

/// Net pixels per period.
pub const NET_DASH: u32 = 3;

/// Rasterize a silhouette of the given kind.
pub fn silhouette(kind: SilhouetteKind, width: u32, height: u32) -> PixelBuffer {
    match kind {
        SilhouetteKind::Hoop => hoop(width, height),
        SilhouetteKind::Player => player(width, height),
        SilhouetteKind::Bat => bat(width, height),
        SilhouetteKind::Goal => goal(width, height),
    }
}

fn classify(
    width: u32,
    height: u32,
    f: impl Fn(f64, f64) -> Option<Colour>,
) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |x, y| {
        f(x as f64, y as f64).unwrap_or(Colour::TRANSPARENT)
    })
}

/// Basketball hoop: a ring above the canvas midline on a pole.
///
/// The ring is clipped at the midline, so only its upper arc is drawn.
pub fn hoop(width: u32, height: u32) -> PixelBuffer {
    let (w, h) = (width as f64, height as f64);
    let cx = w / 2.0;
    let cy = h * 0.4;
    let midline = h / 2.0;
    let radius = w.min(h) * 0.3;
    let band = (w.min(h) / 20.0).max(1.0);
    let pole = (w / 20.0).max(1.0);

    classify(width, height, |x, y| {
        let dx = x - cx;
        let dy = y - cy;

        // Pole starts at the ring centre and is drawn over the ring.
        if dx.abs() < pole && y > cy {
            return Some(WOOD);
        }
        if y >= midline {
            return None;
        }

        let off = ((dx * dx + dy * dy).sqrt() - radius).abs();
        if off <= band / 3.0 {
            Some(HOOP_RIM)
        } else if off <= band {
            Some(HOOP_ORANGE)
        } else {
            None
        }
    })
}

/// Baseball player: head, tapering body, two legs.
pub fn player(width: u32, height: u32) -> PixelBuffer {
    let (w, h) = (width as f64, height as f64);
    let cx = w / 2.0;
    let head_y = h / 5.0;
    let head_radius = w / 4.0;
    let body_top = h * 7.0 / 20.0;
    let legs_top = h * 3.0 / 5.0;
    let leg_offset = w / 5.0;
    let leg_half = w / 10.0;

    classify(width, height, |x, y| {
        let dx = x - cx;

        let hit = if y < body_top {
            let dy = y - head_y;
            (dx * dx + dy * dy).sqrt() <= head_radius
        } else if y < legs_top {
            dx.abs() < w / 2.0 - dx.abs() * 0.3
        } else {
            (dx - leg_offset).abs() < leg_half || (dx + leg_offset).abs() < leg_half
        };

        hit.then_some(UNIFORM)
    })
}

/// Baseball bat standing on its handle: barrel on top, taper, handle below.
pub fn bat(width: u32, height: u32) -> PixelBuffer {
    let (w, h) = (width as f64, height as f64);
    let cx = w / 2.0;
    let barrel_end = h * 7.0 / 20.0;
    let handle_start = h * 3.0 / 4.0;
    let barrel_half = w * 3.0 / 20.0;
    let handle_half = (w / 20.0).max(1.0);

    classify(width, height, |x, y| {
        let half = if y < barrel_end {
            barrel_half
        } else if y >= handle_start {
            handle_half
        } else {
            let t = (y - barrel_end) / (handle_start - barrel_end);
            barrel_half + (handle_half - barrel_half) * t
        };

        ((x - cx).abs() < half).then_some(WOOD)
    })
}

/// Soccer goal: two posts, a crossbar, and a dashed net inside the frame.
pub fn goal(width: u32, height: u32) -> PixelBuffer {
    let (w, h) = (width as f64, height as f64);
    let left = w / 5.0;
    let right = w * 4.0 / 5.0;
    let crossbar = h * 3.0 / 10.0;
    let post = (w / 12.5).max(1.0);
    let bar = (h / 15.0).max(1.0);
    let net_bottom = h - h / 6.0;

    PixelBuffer::from_fn(width, height, |px, py| {
        let (x, y) = (px as f64, py as f64);

        let on_post = ((x - left).abs() < post || (x - right).abs() < post) && y > crossbar;
        let on_bar = (y - crossbar).abs() < bar && (left..=right).contains(&x);
        if on_post || on_bar {
            return GOAL_FRAME;
        }

        let in_net = y > crossbar && y < net_bottom && x > left + post && x < right - post;
        if in_net && (px + py) % NET_PERIOD < NET_DASH {
            GOAL_NET
        } else {
            Colour::TRANSPARENT
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_sizes() {
        for kind in SilhouetteKind::ALL {
            let buf = silhouette(kind, 37, 23);
            assert_eq!(buf.size(), (37, 23), "{kind}");
            assert!(buf.iter().any(|(_, _, c)| !c.is_transparent()), "{kind} drew nothing");
        }
    }

    #[test]
    fn test_hoop_regions() {
        let buf = hoop(60, 60);

        assert_eq!(buf.get(30, 50), Some(WOOD));
        assert_eq!(buf.get(12, 24), Some(HOOP_RIM));
        assert_eq!(buf.get(9, 24), Some(HOOP_ORANGE));
        assert_eq!(buf.get(30, 24), Some(Colour::TRANSPARENT));
        assert_eq!(buf.get(0, 0), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_hoop_pole_only_below_ring_centre() {
        let buf = hoop(60, 60);
        // Inside the ring, above the centre: no pole.
        assert_eq!(buf.get(30, 20), Some(Colour::TRANSPARENT));
        assert_eq!(buf.get(30, 25), Some(WOOD));
    }

    #[test]
    fn test_hoop_ring_stays_in_upper_half() {
        let buf = hoop(60, 60);
        // (20, 40) lies on the ring circle but below the midline.
        assert_eq!(buf.get(20, 40), Some(Colour::TRANSPARENT));
        assert_eq!(buf.get(12, 29), Some(HOOP_RIM));
        assert!((30..60)
            .flat_map(|y| (0..60).map(move |x| (x, y)))
            .filter_map(|(x, y)| buf.get(x, y))
            .all(|c| c == WOOD || c.is_transparent()));
    }

    #[test]
    fn test_player_regions() {
        let buf = player(20, 40);

        assert_eq!(buf.get(10, 8), Some(UNIFORM));
        assert_eq!(buf.get(0, 0), Some(Colour::TRANSPARENT));
        assert_eq!(buf.get(10, 20), Some(UNIFORM));
        assert_eq!(buf.get(1, 20), Some(Colour::TRANSPARENT));

        // Two legs with a gap on the centreline.
        assert_eq!(buf.get(6, 30), Some(UNIFORM));
        assert_eq!(buf.get(14, 30), Some(UNIFORM));
        assert_eq!(buf.get(10, 30), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_bat_tapers_toward_handle() {
        let buf = bat(40, 12);

        assert_eq!(buf.get(15, 0), Some(WOOD));
        assert_eq!(buf.get(14, 0), Some(Colour::TRANSPARENT));
        assert_eq!(buf.get(16, 6), Some(WOOD));
        assert_eq!(buf.get(15, 6), Some(Colour::TRANSPARENT));
        assert_eq!(buf.get(19, 11), Some(WOOD));
        assert_eq!(buf.get(17, 11), Some(Colour::TRANSPARENT));

        let widths: Vec<usize> = buf
            .rows()
            .map(|row| row.iter().filter(|c| !c.is_transparent()).count())
            .collect();
        assert!(widths.windows(2).all(|pair| pair[0] >= pair[1]), "{widths:?}");
        assert!(widths[0] > widths[11]);
    }

    #[test]
    fn test_goal_frame() {
        let buf = goal(50, 30);

        assert_eq!(buf.get(10, 20), Some(GOAL_FRAME));
        assert_eq!(buf.get(40, 20), Some(GOAL_FRAME));
        assert_eq!(buf.get(25, 9), Some(GOAL_FRAME));
        // Posts only hang below the crossbar.
        assert_eq!(buf.get(10, 5), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_goal_net_pattern() {
        let buf = goal(50, 30);
        let mut net = 0;
        let mut gaps = 0;

        for y in 11..=24 {
            for x in 15..=35 {
                let colour = buf.get(x, y).unwrap();
                if (x + y) % NET_PERIOD < NET_DASH {
                    assert_eq!(colour, GOAL_NET, "({x}, {y})");
                    net += 1;
                } else {
                    assert_eq!(colour, Colour::TRANSPARENT, "({x}, {y})");
                    gaps += 1;
                }
            }
        }

        assert!(net > 0 && gaps > 0);
        assert_eq!(buf.get(20, 12), Some(GOAL_NET));
        assert_eq!(buf.get(20, 15), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_single_pixel_canvas() {
        for kind in SilhouetteKind::ALL {
            assert_eq!(silhouette(kind, 1, 1).size(), (1, 1));
        }
    }
}
