//! # Rect Canvas
//!
//! A small interactive canvas of coloured rectangles that can be connected with lines.
//!
//! ## Features
//! - Double-click empty space to create a rectangle centred on the pointer
//! - Drag rectangles; moves that would overlap another rectangle are rejected
//!   and every rectangle stays inside the 800×600 scene
//! - Ctrl+click two rectangles to connect them, and again to disconnect
//! - Links follow the centres of their rectangles as they move

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod canvas;
mod config;
mod constants;
mod error;
mod geometry;
mod link;
mod selection;
mod shape;
mod ui;

// Re-export public types and functions
pub use canvas::{Canvas, LinkToggle, SettleOutcome};
pub use config::CanvasConfig;
pub use error::CanvasError;
pub use geometry::{clamp_top_left, fits_within, overlaps};
pub use link::{Link, LinkId};
pub use selection::LinkSelection;
pub use shape::{random_color, MoveState, Shape, ShapeId};
pub use ui::{CanvasApp, ViewportState};

/// Runs the canvas application with default settings.
///
/// Opens a native window sized to fit the scene and starts the main event loop.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an `eframe::Error` if
/// initialization fails.
///
/// # Example
///
/// ```no_run
/// use rect_canvas::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let config = CanvasConfig::default();
    let margin = 2.0 * constants::WINDOW_MARGIN;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([
            config.scene_size.x + margin,
            config.scene_size.y + margin + constants::STATUS_BAR_HEIGHT,
        ]),
        ..Default::default()
    };
    log::info!("starting with a {}x{} scene", config.scene_size.x, config.scene_size.y);
    eframe::run_native(
        "Rect Canvas",
        options,
        Box::new(|_cc| Ok(Box::new(CanvasApp::new(config)))),
    )
}
