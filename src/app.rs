// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait. Each UI frame it pulls at most one landmark frame
//! from the simulated hand (or every due frame from a trace being played
//! back), runs it through the paint session, and shows the result.

use crate::input::playback::TracePlayer;
use crate::input::sim::{HandPose, SimulatedHand};
use crate::input::SessionClock;
use crate::io::{export, serialization};
use crate::models::landmark::Landmark;
use crate::models::trace::{LandmarkTrace, TraceFrame};
use crate::pipeline::PaintSession;
use crate::ui::{canvas, toolbar};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;

/// Pinch spread step for the `-` / `=` keys, in normalized units.
const PINCH_STEP: f64 = 0.01;

/// Where landmark frames come from.
enum Source {
    /// Pointer-driven hand, optionally recorded.
    Simulated {
        recording: Option<Recording>,
    },
    /// Replaying a trace; frame timestamps are offset by `started_at`.
    Playback {
        player: TracePlayer,
        started_at: Duration,
    },
}

/// Frames captured from the simulated hand.
struct Recording {
    started_at: Duration,
    trace: LandmarkTrace,
}

/// Main application state.
pub struct HandPaintApp {
    /// Pipeline state for the session
    session: PaintSession,

    /// Time base for every frame fed to the session
    clock: SessionClock,

    /// Current landmark source
    source: Source,

    /// Thumb-to-index spread of the simulated hand
    sim_pinch: f64,

    /// Most recently finished recording, available for export
    last_recording: Option<LandmarkTrace>,

    /// Landmarks of the last processed frame, for the overlay
    last_landmarks: Option<Vec<Landmark>>,

    /// Surface texture and the surface revision it shows
    surface_texture: Option<egui::TextureHandle>,
    uploaded_revision: Option<u64>,

    /// Receiver for background trace loading
    trace_loader: Option<Receiver<Result<LandmarkTrace, String>>>,

    /// Loading state message
    loading_message: Option<String>,
}

impl HandPaintApp {
    /// Create a new application instance.
    pub fn new() -> Self {
        Self {
            session: PaintSession::new(canvas::fit_size(f32::MAX)),
            clock: SessionClock::start(),
            source: Source::Simulated { recording: None },
            sim_pinch: 0.05,
            last_recording: None,
            last_landmarks: None,
            surface_texture: None,
            uploaded_revision: None,
            trace_loader: None,
            loading_message: None,
        }
    }

    /// Feed one landmark frame to the session, logging rejected frames.
    fn feed(&mut self, landmarks: Option<Vec<Landmark>>, now: Duration) {
        match self.session.process_frame(landmarks.as_deref(), now) {
            Ok(report) => log::trace!(
                "{}: {} stroke commands",
                report.classification.gesture.label(),
                report.commands.len()
            ),
            Err(e) => {
                log::warn!("{:#}", e);
                return;
            }
        }
        self.last_landmarks = landmarks;
    }

    /// Drive the session from the simulated hand.
    fn step_simulated(&mut self, ctx: &egui::Context, pointer: Option<Landmark>) {
        let (point, fist, palm, narrower, wider) = ctx.input(|i| {
            (
                i.key_down(egui::Key::Space) || i.pointer.primary_down(),
                i.key_down(egui::Key::F),
                i.key_down(egui::Key::P),
                i.key_pressed(egui::Key::Minus),
                i.key_pressed(egui::Key::Equals),
            )
        });

        if narrower {
            self.sim_pinch = (self.sim_pinch - PINCH_STEP).max(0.0);
        }
        if wider {
            self.sim_pinch = (self.sim_pinch + PINCH_STEP).min(0.5);
        }

        let pose = if fist {
            HandPose::Fist
        } else if palm {
            HandPose::Palm
        } else if point {
            HandPose::Point
        } else {
            HandPose::Neutral
        };

        let landmarks = pointer.map(|p| {
            SimulatedHand::new(pose, p.x, p.y)
                .with_pinch(self.sim_pinch)
                .landmarks()
        });

        let now = self.clock.elapsed();
        if let Source::Simulated {
            recording: Some(recording),
        } = &mut self.source
        {
            recording.trace.push(TraceFrame::new(
                now.saturating_sub(recording.started_at),
                landmarks.clone(),
            ));
        }
        self.feed(landmarks, now);
    }

    /// Switch landmark source without joining strokes across the two.
    fn switch_source(&mut self, source: Source) {
        self.session.lift_pen();
        self.source = source;
    }

    /// Drive the session from the trace being played back.
    fn step_playback(&mut self) {
        let now = self.clock.elapsed();
        let Source::Playback { player, started_at } = &mut self.source else {
            return;
        };
        let started_at = *started_at;
        let due = player.due_frames(now.saturating_sub(started_at)).to_vec();
        let finished = player.is_finished();

        for frame in due {
            let now = started_at + frame.timestamp();
            self.feed(frame.landmarks, now);
        }

        if finished {
            log::info!("Playback finished");
            self.switch_source(Source::Simulated { recording: None });
        }
    }

    fn toggle_recording(&mut self) {
        if let Source::Simulated { recording } = &mut self.source {
            match recording.take() {
                Some(finished) => {
                    log::info!("Recorded {} frames", finished.trace.frames.len());
                    self.last_recording = Some(finished.trace);
                }
                None => {
                    log::info!("Recording started");
                    *recording = Some(Recording {
                        started_at: self.clock.elapsed(),
                        trace: LandmarkTrace::new(),
                    });
                }
            }
        }
    }

    /// Save the drawing as a PNG file.
    fn save_drawing(&self, path: PathBuf) {
        match export::export_png(self.session.renderer().surface().image(), &path) {
            Ok(_) => log::info!("Saved drawing to {}", path.display()),
            Err(e) => log::error!("Failed to save drawing: {:#}", e),
        }
    }

    /// Export the last recording as a trace file.
    fn export_recording(&self, path: PathBuf) {
        if let Some(ref trace) = self.last_recording {
            match serialization::export_trace(trace, &path) {
                Ok(_) => log::info!("Exported {} frames to {}", trace.frames.len(), path.display()),
                Err(e) => log::error!("Failed to export recording: {:#}", e),
            }
        }
    }

    /// Load a trace file (asynchronously) and play it back once loaded.
    pub fn load_trace_file(&mut self, path: PathBuf) {
        let (sender, receiver) = channel();
        self.trace_loader = Some(receiver);
        self.loading_message = Some("Loading trace...".to_string());

        // Spawn background thread for loading
        std::thread::spawn(move || {
            let result = serialization::import_trace(&path)
                .map_err(|e| format!("Failed to load trace: {:#}", e));

            if let Ok(ref trace) = result {
                log::info!(
                    "Loaded {} frames ({} ms) from {}",
                    trace.frames.len(),
                    trace.duration().as_millis(),
                    path.display()
                );
            }

            let _ = sender.send(result);
        });
    }

    fn source_status(&self) -> toolbar::SourceStatus {
        match &self.source {
            Source::Simulated { recording } => toolbar::SourceStatus::Simulated {
                recording: recording.is_some(),
            },
            Source::Playback { player, .. } => toolbar::SourceStatus::Playback {
                progress: player.progress(),
            },
        }
    }

    /// Upload the surface to the GPU if it changed since the last upload.
    fn sync_texture(&mut self, ctx: &egui::Context) {
        let surface = self.session.renderer().surface();
        if self.uploaded_revision == Some(surface.revision()) && self.surface_texture.is_some() {
            return;
        }

        let image = surface.image();
        let size = [image.width() as usize, image.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
        match self.surface_texture {
            Some(ref mut texture) => texture.set(color_image, egui::TextureOptions::LINEAR),
            None => {
                self.surface_texture =
                    Some(ctx.load_texture("surface", color_image, egui::TextureOptions::LINEAR));
            }
        }
        self.uploaded_revision = Some(surface.revision());
    }
}

impl Default for HandPaintApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for HandPaintApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed trace loading
        if let Some(ref receiver) = self.trace_loader {
            if let Ok(result) = receiver.try_recv() {
                self.trace_loader = None;
                self.loading_message = None;

                match result {
                    Ok(trace) => {
                        let started_at = self.clock.elapsed();
                        self.switch_source(Source::Playback {
                            player: TracePlayer::new(trace),
                            started_at,
                        });
                    }
                    Err(e) => {
                        log::error!("{}", e);
                    }
                }
            }
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Save Drawing...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("PNG", &["png"])
                            .set_file_name(export::DEFAULT_FILE_NAME)
                            .save_file()
                        {
                            self.save_drawing(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Load Trace...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Landmark traces", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.load_trace_file(path);
                        }
                        ui.close_menu();
                    }
                    let has_recording = self.last_recording.is_some();
                    ui.add_enabled_ui(has_recording, |ui| {
                        ui.menu_button("Export Recording", |ui| {
                            if ui.button("Export as YAML...").clicked() {
                                if let Some(path) = rfd::FileDialog::new()
                                    .add_filter("YAML", &["yaml", "yml"])
                                    .set_file_name("trace.yaml")
                                    .save_file()
                                {
                                    self.export_recording(path);
                                }
                                ui.close_menu();
                            }
                            if ui.button("Export as JSON...").clicked() {
                                if let Some(path) = rfd::FileDialog::new()
                                    .add_filter("JSON", &["json"])
                                    .set_file_name("trace.json")
                                    .save_file()
                                {
                                    self.export_recording(path);
                                }
                                ui.close_menu();
                            }
                        });
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Status toolbar
        let renderer = self.session.renderer();
        let (color, width) = (renderer.state().color.color(), renderer.brush_width());
        let gesture = self.session.last_gesture();
        let status = self.source_status();
        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| toolbar::show(ui, color, gesture, width, status))
            .inner;

        match toolbar_action {
            toolbar::ToolbarAction::ToggleRecording => self.toggle_recording(),
            toolbar::ToolbarAction::StopPlayback => {
                log::info!("Playback stopped");
                self.switch_source(Source::Simulated { recording: None });
            }
            toolbar::ToolbarAction::None => {}
        }

        // Main canvas (center)
        let canvas_response = egui::CentralPanel::default()
            .show(ctx, |ui| {
                if let Some(ref message) = self.loading_message {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(message);
                    });
                }
                canvas::show(ui, &self.surface_texture, self.last_landmarks.as_deref())
            })
            .inner;

        self.session.resize(canvas_response.size);

        match self.source {
            Source::Simulated { .. } => self.step_simulated(ctx, canvas_response.pointer),
            Source::Playback { .. } => self.step_playback(),
        }

        self.sync_texture(ctx);

        // Frames are pulled once per UI frame
        ctx.request_repaint();
    }
}
