// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Raster surface accumulating committed strokes.
//!
//! The surface only ever grows by appended segments or is wiped by a full
//! clear. Unpainted pixels are fully transparent, so the exported PNG
//! carries the strokes alone.

use crate::models::landmark::{CanvasSize, PixelPoint};
use crate::util::geometry::segment_distance;
use image::{Rgba, RgbaImage};

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// RGBA drawing buffer.
pub struct Surface {
    image: RgbaImage,
    /// Bumped on every mutation so the UI knows when to re-upload.
    revision: u64,
}

impl Surface {
    pub fn new(size: CanvasSize) -> Self {
        Self {
            image: RgbaImage::from_pixel(size.width, size.height, TRANSPARENT),
            revision: 0,
        }
    }

    pub fn size(&self) -> CanvasSize {
        CanvasSize::new(self.image.width(), self.image.height())
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Swap in a blank buffer of a new size.
    ///
    /// The revision keeps counting up so a texture uploaded from the old
    /// buffer is never mistaken for the new one.
    pub fn resize(&mut self, size: CanvasSize) {
        self.image = RgbaImage::from_pixel(size.width, size.height, TRANSPARENT);
        self.revision += 1;
    }

    /// Wipe every pixel back to transparent.
    pub fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = TRANSPARENT;
        }
        self.revision += 1;
    }

    /// Draw a segment of the given width with round caps.
    ///
    /// Every pixel whose center lies within `width / 2` of the segment is
    /// painted, which rounds both ends and lets consecutive segments join
    /// without gaps.
    pub fn draw_segment(&mut self, from: PixelPoint, to: PixelPoint, color: Rgba<u8>, width: f64) {
        let radius = (width / 2.0).max(0.5);
        let (w, h) = self.image.dimensions();
        if w == 0 || h == 0 {
            return;
        }

        let min_x = (from.x.min(to.x) - radius).floor().max(0.0) as u32;
        let min_y = (from.y.min(to.y) - radius).floor().max(0.0) as u32;
        let max_x = ((from.x.max(to.x) + radius).ceil().max(0.0) as u32).min(w - 1);
        let max_y = ((from.y.max(to.y) + radius).ceil().max(0.0) as u32).min(h - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let center = PixelPoint::new(x as f64 + 0.5, y as f64 + 0.5);
                if segment_distance(center, from, to) <= radius {
                    self.image.put_pixel(x, y, color);
                }
            }
        }
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    fn painted(surface: &Surface) -> usize {
        surface.image().pixels().filter(|p| p[3] != 0).count()
    }

    #[test]
    fn test_new_surface_is_transparent() {
        let surface = Surface::new(CanvasSize::new(32, 24));
        assert_eq!(surface.size(), CanvasSize::new(32, 24));
        assert_eq!(painted(&surface), 0);
    }

    #[test]
    fn test_segment_has_round_caps() {
        let mut surface = Surface::new(CanvasSize::new(40, 40));
        surface.draw_segment(
            PixelPoint::new(10.0, 20.0),
            PixelPoint::new(30.0, 20.0),
            RED,
            6.0,
        );

        // Along the body
        assert_eq!(*surface.image().get_pixel(20, 20), RED);
        assert_eq!(*surface.image().get_pixel(20, 17), RED);
        assert_eq!(surface.image().get_pixel(20, 24)[3], 0);
        // Past the end, inside the cap
        assert_eq!(*surface.image().get_pixel(31, 19), RED);
        // Cap corner is rounded off
        assert_eq!(surface.image().get_pixel(32, 22)[3], 0);
    }

    #[test]
    fn test_segment_clipped_to_surface() {
        let mut surface = Surface::new(CanvasSize::new(10, 10));
        surface.draw_segment(
            PixelPoint::new(-20.0, 5.0),
            PixelPoint::new(50.0, 5.0),
            RED,
            2.0,
        );
        assert_eq!(painted(&surface), 20);
    }

    #[test]
    fn test_resize_never_repeats_a_revision() {
        let mut surface = Surface::new(CanvasSize::new(20, 20));
        surface.draw_segment(PixelPoint::new(5.0, 5.0), PixelPoint::new(9.0, 5.0), RED, 2.0);
        let uploaded = surface.revision();

        surface.resize(CanvasSize::new(10, 8));
        assert_eq!(surface.size(), CanvasSize::new(10, 8));
        assert_eq!(painted(&surface), 0);

        for _ in 0..3 {
            surface.draw_segment(PixelPoint::new(2.0, 2.0), PixelPoint::new(4.0, 2.0), RED, 2.0);
            assert_ne!(surface.revision(), uploaded);
        }
    }

    #[test]
    fn test_clear_resets_pixels() {
        let mut surface = Surface::new(CanvasSize::new(20, 20));
        surface.draw_segment(PixelPoint::new(5.0, 5.0), PixelPoint::new(5.0, 5.0), RED, 4.0);
        assert!(painted(&surface) > 0);
        let before = surface.revision();

        surface.clear();
        assert_eq!(painted(&surface), 0);
        assert!(surface.revision() > before);
    }
}
