// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Recorded landmark streams.
//!
//! A trace is the upstream model's output captured frame by frame, so a
//! drawing session can be replayed without a camera.

use super::landmark::Landmark;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One captured frame: a timestamp and zero or one hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceFrame {
    /// Milliseconds since the start of the recording.
    pub timestamp_ms: u64,
    /// Raw landmarks, absent when no hand was detected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landmarks: Option<Vec<Landmark>>,
}

impl TraceFrame {
    pub fn new(timestamp: Duration, landmarks: Option<Vec<Landmark>>) -> Self {
        Self {
            timestamp_ms: timestamp.as_millis() as u64,
            landmarks,
        }
    }

    pub fn timestamp(&self) -> Duration {
        Duration::from_millis(self.timestamp_ms)
    }
}

/// Complete landmark trace for serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandmarkTrace {
    pub frames: Vec<TraceFrame>,
}

impl LandmarkTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: TraceFrame) {
        self.frames.push(frame);
    }

    /// Timestamp of the last frame.
    pub fn duration(&self) -> Duration {
        self.frames
            .last()
            .map(TraceFrame::timestamp)
            .unwrap_or_default()
    }
}
