// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Brush color palette.

use image::Rgba;

/// The six brush colors, cycled by the fist gesture.
pub const PALETTE: [Rgba<u8>; 6] = [
    Rgba([0x00, 0x00, 0x00, 0xff]), // black
    Rgba([0xff, 0x00, 0x00, 0xff]), // red
    Rgba([0x00, 0xa8, 0x6b, 0xff]), // jade
    Rgba([0x1e, 0x90, 0xff, 0xff]), // dodger blue
    Rgba([0xff, 0x8c, 0x00, 0xff]), // dark orange
    Rgba([0x8a, 0x2b, 0xe2, 0xff]), // blue violet
];

/// Index of the current brush color in [`PALETTE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorIndex(usize);

impl ColorIndex {
    pub fn index(&self) -> usize {
        self.0
    }

    pub fn color(&self) -> Rgba<u8> {
        PALETTE[self.0]
    }

    /// Next palette entry, wrapping after the last.
    pub fn next(self) -> Self {
        Self((self.0 + 1) % PALETTE.len())
    }
}
