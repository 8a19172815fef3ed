// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Hand Paint - draw on a virtual canvas with hand gestures.
//!
//! A pointing finger draws, a closed fist cycles the brush color, an open
//! palm clears the canvas, and the thumb-to-index pinch sets the brush
//! width. Hand landmarks come from a recorded trace or a pointer-driven
//! simulated hand.

mod app;
mod config;
mod input;
mod io;
mod models;
mod pipeline;
mod ui;
mod util;

use anyhow::Result;
use app::HandPaintApp;
use std::path::PathBuf;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Optional trace file to play back at startup
    let trace_path = std::env::args().nth(1).map(PathBuf::from);

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 680.0])
            .with_min_inner_size([480.0, 420.0])
            .with_title("Hand Paint"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Hand Paint",
        options,
        Box::new(move |_cc| {
            let mut app = HandPaintApp::new();
            if let Some(path) = trace_path {
                app.load_trace_file(path);
            }
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
