// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Simulated hand driven by the pointer and keyboard.
//!
//! Synthesizes a plausible 21-landmark hand for a chosen pose so the
//! application can be used without a camera. The same hands serve as
//! fixtures in the pipeline tests.

use crate::models::landmark::{Landmark, LANDMARK_COUNT};

/// Hand shape to synthesize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandPose {
    /// Index finger up, the rest curled.
    Point,
    /// All fingers curled into the palm.
    Fist,
    /// All fingers extended.
    Palm,
    /// Index and middle finger up.
    Neutral,
}

/// Horizontal offset of each finger's column from the wrist, index first.
const FINGER_OFFSETS: [f64; 4] = [-0.06, -0.02, 0.02, 0.06];

/// Height above the wrist of (MCP, PIP, DIP, tip) for each finger state.
const EXTENDED: [f64; 4] = [0.10, 0.20, 0.25, 0.30];
const CURLED: [f64; 4] = [0.10, 0.15, 0.14, 0.12];
const CLENCHED: [f64; 4] = [0.08, 0.10, 0.07, 0.06];

/// A synthetic hand anchored at the index fingertip of a pointing pose.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedHand {
    pub pose: HandPose,
    /// Normalized anchor position; the index fingertip when pointing.
    pub position: Landmark,
    /// Horizontal thumb-to-index spread, in normalized units.
    pub pinch: f64,
}

impl SimulatedHand {
    pub fn new(pose: HandPose, x: f64, y: f64) -> Self {
        Self {
            pose,
            position: Landmark::new(x, y),
            pinch: 0.05,
        }
    }

    pub fn with_pinch(mut self, pinch: f64) -> Self {
        self.pinch = pinch;
        self
    }

    /// The 21 landmarks of this hand, clamped into the image.
    pub fn landmarks(&self) -> Vec<Landmark> {
        let wx = self.position.x - FINGER_OFFSETS[0];
        let wy = self.position.y + EXTENDED[3];

        let mut points = Vec::with_capacity(LANDMARK_COUNT);
        points.push(Landmark::new(wx, wy));

        // Thumb: CMC, MCP, IP, tip
        points.push(Landmark::new(wx - 0.05, wy - 0.03));
        points.push(Landmark::new(wx - 0.09, wy - 0.07));
        points.push(Landmark::new(wx - 0.12, wy - 0.11));
        points.push(match self.pose {
            HandPose::Point => Landmark::new(self.position.x - self.pinch, self.position.y),
            _ => Landmark::new(wx - 0.14, wy - 0.14),
        });

        for (finger, dx) in FINGER_OFFSETS.iter().enumerate() {
            let heights = match (self.pose, finger) {
                (HandPose::Palm, _) => EXTENDED,
                (HandPose::Point, 0) | (HandPose::Neutral, 0 | 1) => EXTENDED,
                (HandPose::Fist, _) => CLENCHED,
                _ => CURLED,
            };
            for h in heights {
                points.push(Landmark::new(wx + dx, wy - h));
            }
        }

        debug_assert_eq!(points.len(), LANDMARK_COUNT);

        points
            .into_iter()
            .map(|p| Landmark::new(p.x.clamp(0.0, 1.0), p.y.clamp(0.0, 1.0)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::landmark::{pip_of, HandLandmarks, FINGER_TIPS, INDEX_TIP, THUMB_TIP};

    fn extended(hand: &SimulatedHand) -> Vec<bool> {
        let lms = HandLandmarks::from_slice(&hand.landmarks()).unwrap();
        FINGER_TIPS
            .iter()
            .map(|&tip| lms.get(tip).y < lms.get(pip_of(tip)).y - 0.02)
            .collect()
    }

    #[test]
    fn test_point_anchors_index_tip() {
        let hand = SimulatedHand::new(HandPose::Point, 0.4, 0.3).with_pinch(0.1);
        let lms = hand.landmarks();
        assert!((lms[INDEX_TIP].x - 0.4).abs() < 1e-9);
        assert!((lms[INDEX_TIP].y - 0.3).abs() < 1e-9);
        assert!((lms[THUMB_TIP].x - 0.3).abs() < 1e-9);
        assert_eq!(extended(&hand), vec![true, false, false, false]);
    }

    #[test]
    fn test_pose_finger_states() {
        let at = |pose| SimulatedHand::new(pose, 0.4, 0.3);
        assert_eq!(extended(&at(HandPose::Palm)), vec![true; 4]);
        assert_eq!(extended(&at(HandPose::Fist)), vec![false; 4]);
        assert_eq!(extended(&at(HandPose::Neutral)), vec![true, true, false, false]);
    }

    #[test]
    fn test_landmarks_stay_normalized() {
        let hand = SimulatedHand::new(HandPose::Palm, 0.99, 0.95);
        assert!(HandLandmarks::from_slice(&hand.landmarks()).is_ok());
    }
}
