//! Application state structures.
//!
//! This module contains the main [`CanvasApp`] and the viewport state that maps
//! the scene onto the window.

use crate::canvas::Canvas;
use crate::config::CanvasConfig;
use eframe::egui;

/// State related to placing the scene inside the window.
///
/// The scene is drawn unscaled; only its origin moves with the panel layout.
pub struct ViewportState {
    /// Screen position of the scene's top-left corner, updated every frame
    pub origin: egui::Vec2,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            origin: egui::Vec2::ZERO,
        }
    }
}

/// The main application structure containing the canvas and view state.
///
/// This struct implements the `eframe::App` trait and translates pointer input
/// into canvas operations each frame.
pub struct CanvasApp {
    /// The scene being edited
    pub canvas: Canvas,
    /// Placement of the scene on screen
    pub viewport: ViewportState,
}

impl Default for CanvasApp {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl CanvasApp {
    /// Creates an app around an empty canvas built from `config`.
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            canvas: Canvas::new(config),
            viewport: ViewportState::default(),
        }
    }
}
