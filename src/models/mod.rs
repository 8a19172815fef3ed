// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data models for hands, gestures, colors and recorded traces.

pub mod gesture;
pub mod landmark;
pub mod palette;
pub mod trace;
