// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Fixed tuning constants for the gesture pipeline.
//!
//! These are compile-time values; nothing here is read from disk or the
//! environment.

use std::time::Duration;

/// Exponential smoothing factor applied to the drawing cursor each frame.
pub const SMOOTHING_FACTOR: f64 = 0.2;

/// Brush width bounds in pixels.
pub const MIN_BRUSH_WIDTH: f64 = 1.0;
pub const MAX_BRUSH_WIDTH: f64 = 12.0;

/// Canvas width the brush bounds are expressed at.
pub const REFERENCE_WIDTH: f64 = 640.0;

/// Pinch distance (px) to brush width (px) factor.
pub const PINCH_TO_WIDTH: f64 = 0.8;

/// A fist must be held longer than this before it changes color.
pub const FIST_HOLD: Duration = Duration::from_millis(300);

/// Minimum time between two color changes.
pub const COLOR_CHANGE_COOLDOWN: Duration = Duration::from_millis(800);

/// Minimum time between two palm clears.
pub const CLEAR_COOLDOWN: Duration = Duration::from_millis(1200);

/// Normalized margin a fingertip must clear above its PIP joint to count as extended.
pub const EXTENSION_MARGIN: f64 = 0.02;

/// Fingertips closer than this fraction of the canvas width to the wrist form a fist.
pub const FIST_PROXIMITY: f64 = 0.15;

/// Largest canvas width, and its height at the camera's 4:3 aspect.
pub const MAX_CANVAS_WIDTH: u32 = 640;
pub const MAX_CANVAS_HEIGHT: u32 = 480;
