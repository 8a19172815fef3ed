// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing canvas display.
//!
//! This module shows the drawing surface over a white sheet, overlays the
//! current hand landmarks, and reports where the pointer is so the
//! simulated hand can follow it.

use crate::config::{MAX_CANVAS_HEIGHT, MAX_CANVAS_WIDTH};
use crate::models::landmark::{CanvasSize, Landmark, FINGER_TIPS, THUMB_TIP};

/// Result of laying out the canvas for this frame.
pub struct CanvasResponse {
    /// Pixel size the canvas should have at the current window size
    pub size: CanvasSize,
    /// Pointer position in normalized canvas coordinates, if hovering
    pub pointer: Option<Landmark>,
}

/// Canvas size for the available width: at most 640 wide, 4:3.
pub fn fit_size(available_width: f32) -> CanvasSize {
    let width = (available_width * 95.0 / 100.0)
        .min(MAX_CANVAS_WIDTH as f32)
        .floor()
        .max(1.0) as u32;
    let height = ((width * MAX_CANVAS_HEIGHT) / MAX_CANVAS_WIDTH).max(1);
    CanvasSize::new(width, height)
}

/// Display the canvas and the landmark overlay.
pub fn show(
    ui: &mut egui::Ui,
    texture: &Option<egui::TextureHandle>,
    landmarks: Option<&[Landmark]>,
) -> CanvasResponse {
    let size = fit_size(ui.available_width());

    ui.vertical_centered(|ui| {
        let (rect, response) = ui.allocate_exact_size(
            egui::vec2(size.width as f32, size.height as f32),
            egui::Sense::click_and_drag(),
        );
        let painter = ui.painter_at(rect);

        // Paper
        painter.rect_filled(rect, 0.0, egui::Color32::WHITE);
        painter.rect_stroke(rect, 0.0, egui::Stroke::new(4.0, egui::Color32::BLACK));

        if let Some(texture) = texture {
            painter.image(
                texture.id(),
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        }

        if let Some(landmarks) = landmarks {
            draw_hand(&painter, landmarks, &rect);
        }

        let pointer = response
            .hover_pos()
            .filter(|pos| rect.contains(*pos))
            .map(|pos| {
                Landmark::new(
                    ((pos.x - rect.min.x) / rect.width()) as f64,
                    ((pos.y - rect.min.y) / rect.height()) as f64,
                )
            });

        CanvasResponse { size, pointer }
    })
    .inner
}

/// Draw landmarks as dots, fingertips highlighted.
fn draw_hand(painter: &egui::Painter, landmarks: &[Landmark], rect: &egui::Rect) {
    let to_screen = |lm: &Landmark| {
        egui::pos2(
            rect.min.x + (lm.x as f32) * rect.width(),
            rect.min.y + (lm.y as f32) * rect.height(),
        )
    };

    for (index, lm) in landmarks.iter().enumerate() {
        let is_tip = index == THUMB_TIP || FINGER_TIPS.contains(&index);
        let (radius, color) = if is_tip {
            (4.0, egui::Color32::from_rgb(0x1e, 0x90, 0xff))
        } else {
            (2.5, egui::Color32::from_gray(160))
        };
        let pos = to_screen(lm);
        painter.circle_filled(pos, radius, color);
        painter.circle_stroke(pos, radius, egui::Stroke::new(1.0, egui::Color32::BLACK));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_size_caps_width() {
        assert_eq!(fit_size(2000.0), CanvasSize::new(640, 480));
    }

    #[test]
    fn test_fit_size_keeps_aspect() {
        let size = fit_size(400.0);
        assert_eq!(size, CanvasSize::new(380, 285));
    }
}
