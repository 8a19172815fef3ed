// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Gesture classification results.

use super::landmark::PixelPoint;

/// Gesture recognized in a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// No hand in the frame.
    NoHand,
    /// Index finger extended, the other three curled: draw.
    Pointing {
        /// Index fingertip in canvas pixels.
        fingertip: PixelPoint,
        /// Thumb tip to index tip distance in canvas pixels.
        pinch: f64,
    },
    /// All fingertips close to the wrist.
    Fist,
    /// All four fingers extended.
    Palm,
    /// A hand that matches none of the above.
    Neutral,
}

impl Gesture {
    /// Short label for the status bar and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Gesture::NoHand => "no hand",
            Gesture::Pointing { .. } => "pointing",
            Gesture::Fist => "fist",
            Gesture::Palm => "palm",
            Gesture::Neutral => "neutral",
        }
    }
}

/// Output of the classifier for one frame.
///
/// The two action flags have already passed their cooldown gates and are
/// independent of the reported gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub gesture: Gesture,
    /// Advance the brush color by one palette entry.
    pub cycle_color: bool,
    /// Clear the whole canvas.
    pub clear: bool,
}

impl Classification {
    /// A classification with no actions attached.
    pub fn gesture(gesture: Gesture) -> Self {
        Self {
            gesture,
            cycle_color: false,
            clear: false,
        }
    }
}
