// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Per-frame gesture pipeline: normalize, classify, render.
//!
//! A [`PaintSession`] holds all state that lives across frames. Frames are
//! processed one at a time, synchronously, in arrival order.

pub mod classifier;
pub mod renderer;
pub mod surface;

use crate::models::gesture::{Classification, Gesture};
use crate::models::landmark::{CanvasSize, HandLandmarks, Landmark};
use anyhow::{Context, Result};
use classifier::{classify, CooldownClock};
use renderer::{StrokeCommand, StrokeRenderer};
use std::time::Duration;

/// What one frame did.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub classification: Classification,
    pub commands: Vec<StrokeCommand>,
}

/// Session state for one drawing session.
pub struct PaintSession {
    size: CanvasSize,
    clock: CooldownClock,
    renderer: StrokeRenderer,
    /// Gesture of the previous frame, for transition logging
    last_gesture: Gesture,
}

impl PaintSession {
    pub fn new(size: CanvasSize) -> Self {
        Self {
            size,
            clock: CooldownClock::new(),
            renderer: StrokeRenderer::new(size),
            last_gesture: Gesture::NoHand,
        }
    }

    pub fn renderer(&self) -> &StrokeRenderer {
        &self.renderer
    }

    pub fn last_gesture(&self) -> Gesture {
        self.last_gesture
    }

    /// Process one frame captured `now` after the session started.
    ///
    /// Malformed landmark sets are rejected before any state changes.
    pub fn process_frame(
        &mut self,
        landmarks: Option<&[Landmark]>,
        now: Duration,
    ) -> Result<FrameReport> {
        let hand = landmarks
            .map(HandLandmarks::from_slice)
            .transpose()
            .with_context(|| format!("rejected frame at {} ms", now.as_millis()))?;

        let classification = classify(hand.as_ref(), self.size, now, &mut self.clock);
        let commands = self.renderer.render(&classification);

        if classification.cycle_color {
            log::info!(
                "Color changed to palette entry {}",
                self.renderer.state().color.index()
            );
        }
        if classification.clear {
            log::info!("Canvas cleared");
        }
        if classification.gesture.label() != self.last_gesture.label() {
            log::debug!(
                "Gesture {} -> {}",
                self.last_gesture.label(),
                classification.gesture.label()
            );
        }
        self.last_gesture = classification.gesture;

        Ok(FrameReport {
            classification,
            commands,
        })
    }

    /// End the current stroke and forget any fist in progress.
    ///
    /// Called whenever the landmark source changes, since positions from two
    /// different streams must never be joined by a segment.
    pub fn lift_pen(&mut self) {
        self.renderer.lift_pen();
        self.clock.release_fist();
    }

    /// Adopt new canvas dimensions.
    ///
    /// Pixel positions from before the resize are meaningless afterwards,
    /// so the stroke in flight is dropped along with the old surface.
    pub fn resize(&mut self, size: CanvasSize) {
        if size == self.size {
            return;
        }
        log::info!(
            "Canvas resized from {}x{} to {}x{}",
            self.size.width,
            self.size.height,
            size.width,
            size.height
        );
        self.size = size;
        self.renderer.resize(size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::sim::{HandPose, SimulatedHand};

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn segment_count(report: &FrameReport) -> usize {
        report
            .commands
            .iter()
            .filter(|c| matches!(c, StrokeCommand::Segment { .. }))
            .count()
    }

    #[test]
    fn test_draws_from_landmarks() {
        let mut session = PaintSession::new(CanvasSize::new(640, 480));

        let mut total = 0;
        for (i, x) in [0.3, 0.35, 0.4, 0.45].into_iter().enumerate() {
            let lms = SimulatedHand::new(HandPose::Point, x, 0.3).landmarks();
            let report = session.process_frame(Some(&lms), ms(i as u64 * 33)).unwrap();
            assert!(matches!(report.classification.gesture, Gesture::Pointing { .. }));
            total += segment_count(&report);
        }

        assert_eq!(total, 3);
        assert!(matches!(session.last_gesture(), Gesture::Pointing { .. }));
    }

    #[test]
    fn test_malformed_frame_is_skipped() {
        let mut session = PaintSession::new(CanvasSize::new(640, 480));
        let lms = SimulatedHand::new(HandPose::Point, 0.3, 0.3).landmarks();
        session.process_frame(Some(&lms), ms(0)).unwrap();

        let err = session.process_frame(Some(&lms[..5]), ms(33)).unwrap_err();
        assert!(err.to_string().contains("rejected frame at 33 ms"));

        // The stroke survives the skipped frame
        let lms = SimulatedHand::new(HandPose::Point, 0.35, 0.3).landmarks();
        let report = session.process_frame(Some(&lms), ms(66)).unwrap();
        assert_eq!(segment_count(&report), 1);
    }

    #[test]
    fn test_resize_drops_stroke_in_flight() {
        let mut session = PaintSession::new(CanvasSize::new(640, 480));
        let lms = SimulatedHand::new(HandPose::Point, 0.3, 0.3).landmarks();
        session.process_frame(Some(&lms), ms(0)).unwrap();

        session.resize(CanvasSize::new(320, 240));
        assert_eq!(session.renderer().surface().size(), CanvasSize::new(320, 240));
        assert_eq!(session.renderer().state().cursor, None);

        let report = session.process_frame(Some(&lms), ms(33)).unwrap();
        assert_eq!(segment_count(&report), 0);
    }

    #[test]
    fn test_lift_pen_separates_sources() {
        let mut session = PaintSession::new(CanvasSize::new(640, 480));
        let lms = SimulatedHand::new(HandPose::Point, 0.1, 0.3).landmarks();
        session.process_frame(Some(&lms), ms(0)).unwrap();

        session.lift_pen();
        assert_eq!(session.renderer().state().cursor, None);

        let lms = SimulatedHand::new(HandPose::Point, 0.8, 0.6).landmarks();
        let report = session.process_frame(Some(&lms), ms(33)).unwrap();
        assert_eq!(segment_count(&report), 0);
        assert!(session.renderer().surface().image().pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn test_lift_pen_restarts_fist_hold() {
        let mut session = PaintSession::new(CanvasSize::new(640, 480));
        let fist = SimulatedHand::new(HandPose::Fist, 0.4, 0.3).landmarks();
        session.process_frame(Some(&fist), ms(0)).unwrap();

        session.lift_pen();
        let report = session.process_frame(Some(&fist), ms(200)).unwrap();
        assert!(!report.classification.cycle_color);
        let report = session.process_frame(Some(&fist), ms(400)).unwrap();
        assert!(!report.classification.cycle_color);
        let report = session.process_frame(Some(&fist), ms(550)).unwrap();
        assert!(report.classification.cycle_color);
    }

    #[test]
    fn test_no_hand_ends_stroke() {
        let mut session = PaintSession::new(CanvasSize::new(640, 480));
        let lms = SimulatedHand::new(HandPose::Point, 0.3, 0.3).landmarks();
        session.process_frame(Some(&lms), ms(0)).unwrap();

        let report = session.process_frame(None, ms(33)).unwrap();
        assert_eq!(report.classification.gesture, Gesture::NoHand);
        assert_eq!(session.renderer().state().cursor, None);
    }
}
