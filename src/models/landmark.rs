// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Hand landmark data structures.
//!
//! This module defines the 21-point hand topology delivered by the
//! landmark model, the validated per-frame landmark set, and the pixel
//! space types the pipeline works in.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Number of landmarks in one detected hand.
pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;

/// Tips of the four non-thumb fingers, index first.
pub const FINGER_TIPS: [usize; 4] = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

/// Proximal-interphalangeal joint belonging to a fingertip.
pub const fn pip_of(tip: usize) -> usize {
    tip - 2
}

/// A 2D landmark with normalized image coordinates (0.0 to 1.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn is_normalized(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

/// A validated set of exactly 21 landmarks for one hand.
///
/// A landmark's index in the topology is its position in the set.
#[derive(Debug, Clone, PartialEq)]
pub struct HandLandmarks([Landmark; LANDMARK_COUNT]);

impl HandLandmarks {
    /// Validate a raw landmark slice from the upstream model.
    pub fn from_slice(landmarks: &[Landmark]) -> Result<Self> {
        let points: [Landmark; LANDMARK_COUNT] = match landmarks.try_into() {
            Ok(points) => points,
            Err(_) => bail!(
                "expected {} landmarks, got {}",
                LANDMARK_COUNT,
                landmarks.len()
            ),
        };

        if let Some((index, lm)) = points.iter().enumerate().find(|(_, lm)| !lm.is_normalized()) {
            bail!("landmark {} out of range: ({}, {})", index, lm.x, lm.y);
        }

        Ok(Self(points))
    }

    /// Landmark at a topology index (0..=20).
    pub fn get(&self, index: usize) -> &Landmark {
        &self.0[index]
    }
}

/// A point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Canvas dimensions in pixels. Both must be positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_wrong_count() {
        let landmarks = vec![Landmark::new(0.5, 0.5); 20];
        let err = HandLandmarks::from_slice(&landmarks).unwrap_err();
        assert!(err.to_string().contains("expected 21 landmarks, got 20"));
    }

    #[test]
    fn test_rejects_out_of_range() {
        let mut landmarks = vec![Landmark::new(0.5, 0.5); LANDMARK_COUNT];
        landmarks[INDEX_TIP].y = 1.2;
        let err = HandLandmarks::from_slice(&landmarks).unwrap_err();
        assert!(err.to_string().contains("landmark 8"));

        landmarks[INDEX_TIP].y = f64::NAN;
        assert!(HandLandmarks::from_slice(&landmarks).is_err());
    }

    #[test]
    fn test_accepts_full_hand() {
        let landmarks: Vec<Landmark> = (0..LANDMARK_COUNT)
            .map(|i| Landmark::new(i as f64 / 20.0, 0.5))
            .collect();
        let hand = HandLandmarks::from_slice(&landmarks).unwrap();
        assert_eq!(hand.get(PINKY_TIP).x, 1.0);
        assert_eq!(hand.get(WRIST).x, 0.0);
    }

    #[test]
    fn test_pip_of_tip() {
        assert_eq!(pip_of(INDEX_TIP), 6);
        assert_eq!(pip_of(PINKY_TIP), 18);
    }
}
