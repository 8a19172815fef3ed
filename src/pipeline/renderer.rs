// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Stroke rendering.
//!
//! Turns the per-frame classification into a smoothed cursor path and
//! commits it to the surface as round-capped line segments.

use super::surface::Surface;
use crate::config::{
    MAX_BRUSH_WIDTH, MIN_BRUSH_WIDTH, PINCH_TO_WIDTH, REFERENCE_WIDTH, SMOOTHING_FACTOR,
};
use crate::models::gesture::{Classification, Gesture};
use crate::models::landmark::{CanvasSize, PixelPoint};
use crate::models::palette::ColorIndex;
use crate::util::geometry::lerp_point;
use image::Rgba;

/// Brush width in pixels for a pinch distance on a canvas of `canvas_width`.
pub fn brush_width(pinch: f64, canvas_width: u32) -> f64 {
    let scale = canvas_width as f64 / REFERENCE_WIDTH;
    (pinch * PINCH_TO_WIDTH * scale).clamp(MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH)
}

/// A mutation applied to the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeCommand {
    Segment {
        from: PixelPoint,
        to: PixelPoint,
        color: Rgba<u8>,
        width: f64,
    },
    Clear,
}

/// Brush color and stroke cursor.
///
/// The smoothed cursor is committed as soon as it is computed, so between
/// frames the smoothed and last committed positions are the same point:
/// one optional field holds both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawingState {
    pub color: ColorIndex,
    pub cursor: Option<PixelPoint>,
}

/// Owns the drawing state and the surface it paints on.
pub struct StrokeRenderer {
    state: DrawingState,
    surface: Surface,
    /// Width the brush has at the current pinch
    width: f64,
}

impl StrokeRenderer {
    pub fn new(size: CanvasSize) -> Self {
        Self {
            state: DrawingState::default(),
            surface: Surface::new(size),
            width: MIN_BRUSH_WIDTH,
        }
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Brush width from the most recent pointing frame.
    pub fn brush_width(&self) -> f64 {
        self.width
    }

    /// Drop the in-flight stroke.
    pub fn lift_pen(&mut self) {
        self.state.cursor = None;
    }

    /// Replace the surface with a blank one of a new size.
    pub fn resize(&mut self, size: CanvasSize) {
        self.surface.resize(size);
        self.lift_pen();
    }

    /// Apply one frame and return the commands committed to the surface.
    pub fn render(&mut self, frame: &Classification) -> Vec<StrokeCommand> {
        let mut commands = Vec::new();

        if frame.cycle_color {
            self.state.color = self.state.color.next();
        }

        if frame.clear {
            self.surface.clear();
            self.lift_pen();
            commands.push(StrokeCommand::Clear);
        }

        match frame.gesture {
            Gesture::Pointing { fingertip, pinch } => {
                // First frame of a stroke starts at the raw fingertip
                let smoothed = match self.state.cursor {
                    Some(previous) => lerp_point(previous, fingertip, SMOOTHING_FACTOR),
                    None => fingertip,
                };

                let width = brush_width(pinch, self.surface.size().width);
                self.width = width;

                if let Some(previous) = self.state.cursor {
                    let color = self.state.color.color();
                    self.surface.draw_segment(previous, smoothed, color, width);
                    commands.push(StrokeCommand::Segment {
                        from: previous,
                        to: smoothed,
                        color,
                        width,
                    });
                }
                self.state.cursor = Some(smoothed);
            }
            Gesture::NoHand | Gesture::Fist | Gesture::Palm | Gesture::Neutral => self.lift_pen(),
        }

        commands
    }
}
