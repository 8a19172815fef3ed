// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides the coordinate transformation from normalized
//! landmark coordinates to canvas pixels, plus the distance and
//! interpolation primitives shared by the classifier and renderer.

use crate::models::landmark::{CanvasSize, Landmark, PixelPoint};

/// Convert normalized landmark coordinates to canvas pixel coordinates.
pub fn to_pixel(landmark: &Landmark, size: CanvasSize) -> PixelPoint {
    PixelPoint {
        x: landmark.x * size.width as f64,
        y: landmark.y * size.height as f64,
    }
}

/// Euclidean distance between two pixel points.
pub fn distance(a: PixelPoint, b: PixelPoint) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Linear interpolation from `a` towards `b` by `t`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Per-axis linear interpolation between two points.
pub fn lerp_point(a: PixelPoint, b: PixelPoint, t: f64) -> PixelPoint {
    PixelPoint {
        x: lerp(a.x, b.x, t),
        y: lerp(a.y, b.y, t),
    }
}

/// Shortest distance from `p` to the segment `a`-`b`.
pub fn segment_distance(p: PixelPoint, a: PixelPoint, b: PixelPoint) -> f64 {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return distance(p, a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    distance(p, PixelPoint::new(a.x + t * dx, a.y + t * dy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pixel_scales_with_canvas() {
        let lm = Landmark::new(0.25, 0.5);

        let small = to_pixel(&lm, CanvasSize::new(640, 480));
        let large = to_pixel(&lm, CanvasSize::new(1280, 480));

        assert_eq!(small.x, 160.0);
        assert_eq!(small.y, 240.0);
        assert_eq!(large.x, 2.0 * small.x);
        assert_eq!(large.y, small.y);
    }

    #[test]
    fn test_to_pixel_corners() {
        let size = CanvasSize::new(1920, 1080);

        // Top-left corner
        let tl = to_pixel(&Landmark::new(0.0, 0.0), size);
        assert_eq!(tl, PixelPoint::new(0.0, 0.0));

        // Bottom-right corner
        let br = to_pixel(&Landmark::new(1.0, 1.0), size);
        assert_eq!(br, PixelPoint::new(1920.0, 1080.0));
    }

    #[test]
    fn test_distance_and_lerp() {
        let d = distance(PixelPoint::new(0.0, 0.0), PixelPoint::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-9);

        assert_eq!(lerp(10.0, 20.0, 0.2), 12.0);
        assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);

        let p = lerp_point(PixelPoint::new(0.0, 100.0), PixelPoint::new(50.0, 0.0), 0.5);
        assert_eq!(p, PixelPoint::new(25.0, 50.0));
    }

    #[test]
    fn test_segment_distance() {
        let a = PixelPoint::new(0.0, 0.0);
        let b = PixelPoint::new(10.0, 0.0);

        // Perpendicular to the middle
        assert!((segment_distance(PixelPoint::new(5.0, 3.0), a, b) - 3.0).abs() < 1e-9);
        // Beyond the end cap
        assert!((segment_distance(PixelPoint::new(13.0, 4.0), a, b) - 5.0).abs() < 1e-9);
        // Degenerate segment
        assert!((segment_distance(PixelPoint::new(0.0, 2.0), a, a) - 2.0).abs() < 1e-9);
    }
}
