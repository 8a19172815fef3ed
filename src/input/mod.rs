// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Landmark sources feeding the pipeline.
//!
//! The pipeline never reads the wall clock itself; every frame carries a
//! timestamp relative to the start of the session. Live sources stamp
//! frames with a [`SessionClock`], recorded traces carry their own.

pub mod playback;
pub mod sim;

use std::time::{Duration, Instant};

/// Monotonic time since a session (or playback) started.
#[derive(Debug, Clone, Copy)]
pub struct SessionClock {
    started: Instant,
}

impl SessionClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::start()
    }
}
