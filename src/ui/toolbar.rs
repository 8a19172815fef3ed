// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Status toolbar.
//!
//! Shows the current brush color, the recognized gesture and brush width,
//! and the recording / playback controls.

use crate::models::gesture::Gesture;
use image::Rgba;

/// What drives the pipeline right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SourceStatus {
    Simulated { recording: bool },
    Playback { progress: f32 },
}

/// Result of toolbar interaction.
pub enum ToolbarAction {
    None,
    ToggleRecording,
    StopPlayback,
}

/// Display the toolbar.
pub fn show(
    ui: &mut egui::Ui,
    color: Rgba<u8>,
    gesture: Gesture,
    brush_width: f64,
    source: SourceStatus,
) -> ToolbarAction {
    let mut action = ToolbarAction::None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        // Current color swatch
        let (rect, _) = ui.allocate_exact_size(egui::vec2(24.0, 24.0), egui::Sense::hover());
        ui.painter().rect_filled(
            rect,
            3.0,
            egui::Color32::from_rgba_unmultiplied(color[0], color[1], color[2], color[3]),
        );
        ui.painter()
            .rect_stroke(rect, 3.0, egui::Stroke::new(1.0, egui::Color32::BLACK));
        ui.label("Current Color");

        ui.separator();
        ui.label(format!("Gesture: {}", gesture.label()));
        ui.separator();
        ui.label(format!("Brush: {:.1} px", brush_width));
        ui.separator();

        match source {
            SourceStatus::Simulated { recording } => {
                let label = if recording { "⏹ Stop Recording" } else { "⏺ Record" };
                if ui.selectable_label(recording, label).clicked() {
                    action = ToolbarAction::ToggleRecording;
                }
            }
            SourceStatus::Playback { progress } => {
                ui.add(egui::ProgressBar::new(progress).desired_width(120.0).show_percentage());
                if ui.button("Stop Playback").clicked() {
                    action = ToolbarAction::StopPlayback;
                }
            }
        }
    });

    ui.label(
        egui::RichText::new(
            "Point finger = Draw | Fist = Change color | Palm = Clear | Pinch = Brush size",
        )
        .italics()
        .weak(),
    );

    action
}
