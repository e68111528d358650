//! User interface for the canvas.
//!
//! # Module Organization
//!
//! - `state` - The main `CanvasApp` and viewport state
//! - `viewport` - Coordinate mapping and pointer input forwarding
//! - `rendering` - Drawing the scene, links, shapes and status bar

mod rendering;
mod state;
mod viewport;

pub use state::{CanvasApp, ViewportState};

use crate::constants::STATUS_BAR_HEIGHT;
use eframe::egui;

impl eframe::App for CanvasApp {
    /// Main update function called by egui for each frame.
    ///
    /// Lays out the status bar and the scene, forwards input to the canvas and
    /// then paints the current state.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::light());

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(STATUS_BAR_HEIGHT)
            .show(ctx, |ui| {
                self.draw_status_bar(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_canvas(ui);
        });
    }
}

impl CanvasApp {
    /// Allocates the scene area, handles its input and paints it.
    pub fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let panel_rect = ui.max_rect();
        let scene_size = self.canvas.config().scene_size;
        let (response, painter) = ui.allocate_painter(scene_size, egui::Sense::click_and_drag());

        // Scene origin follows the panel layout.
        self.viewport.origin = response.rect.min.to_vec2();

        self.handle_pointer_input(ui, panel_rect, response.rect);
        self.render_scene(&painter);
    }
}

#[cfg(test)]
mod tests;
