// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Trace playback.
//!
//! Replays a recorded landmark trace against wall-clock time, releasing
//! every frame whose timestamp has elapsed.

use crate::models::trace::{LandmarkTrace, TraceFrame};
use std::time::Duration;

/// Plays a [`LandmarkTrace`] from start to end.
pub struct TracePlayer {
    trace: LandmarkTrace,
    /// Index of the next frame to release
    next: usize,
}

impl TracePlayer {
    pub fn new(trace: LandmarkTrace) -> Self {
        Self { trace, next: 0 }
    }

    /// Frames with `timestamp <= elapsed` that have not been released yet.
    pub fn due_frames(&mut self, elapsed: Duration) -> &[TraceFrame] {
        let start = self.next;
        let pending = &self.trace.frames[start..];
        let count = pending
            .iter()
            .take_while(|frame| frame.timestamp() <= elapsed)
            .count();
        self.next += count;
        &self.trace.frames[start..self.next]
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.trace.frames.len()
    }

    /// Fraction of frames released so far.
    pub fn progress(&self) -> f32 {
        if self.trace.frames.is_empty() {
            1.0
        } else {
            self.next as f32 / self.trace.frames.len() as f32
        }
    }
}
