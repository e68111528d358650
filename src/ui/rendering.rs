//! Scene rendering for shapes, links and the scene background.
//!
//! Everything is redrawn from the canvas model every frame, so any mutation is
//! reflected on the next paint.

use super::state::CanvasApp;
use crate::link::Link;
use crate::shape::Shape;
use eframe::egui;
use eframe::epaint::StrokeKind;

impl CanvasApp {
    /// Renders the scene: background first, then links, then shapes on top.
    ///
    /// # Arguments
    ///
    /// * `painter` - The egui painter for drawing operations
    pub fn render_scene(&self, painter: &egui::Painter) {
        let scene = self.world_rect_to_screen(self.canvas.config().scene_rect());
        painter.rect_filled(scene, 0.0, egui::Color32::WHITE);
        painter.rect_stroke(
            scene,
            0.0,
            egui::Stroke::new(1.0, egui::Color32::GRAY),
            StrokeKind::Outside,
        );

        for link in self.canvas.links() {
            self.draw_link(painter, link);
        }

        let pending = self.canvas.selection().pending();
        for shape in self.canvas.shapes() {
            self.draw_shape(painter, shape, Some(shape.id) == pending);
        }
    }

    /// Draws a link as a straight line between its endpoint centres.
    pub fn draw_link(&self, painter: &egui::Painter, link: &Link) {
        let [start, end] = link.segment();
        painter.line_segment(
            [self.world_to_screen(start), self.world_to_screen(end)],
            egui::Stroke::new(self.canvas.config().link_stroke_width, egui::Color32::BLACK),
        );
    }

    /// Draws a shape with its fill colour and an outline.
    ///
    /// # Arguments
    ///
    /// * `painter` - The egui painter for drawing operations
    /// * `shape` - The shape to draw
    /// * `pending` - Whether the shape is waiting in the selection buffer
    pub fn draw_shape(&self, painter: &egui::Painter, shape: &Shape, pending: bool) {
        let rect = self.world_rect_to_screen(shape.rect());
        painter.rect_filled(rect, 0.0, shape.color);

        let stroke = if pending {
            egui::Stroke::new(
                crate::constants::SELECTED_OUTLINE_WIDTH,
                egui::Color32::from_rgb(100, 150, 255),
            )
        } else {
            egui::Stroke::new(crate::constants::SHAPE_OUTLINE_WIDTH, egui::Color32::BLACK)
        };
        painter.rect_stroke(rect, 0.0, stroke, StrokeKind::Inside);
    }

    /// Draws the one-line summary below the scene.
    pub fn draw_status_bar(&self, ui: &mut egui::Ui) {
        let selection = match self.canvas.selection().pending() {
            Some(_) => "1 shape selected, Ctrl+click another to toggle a link",
            None => "double-click to add, drag to move, Ctrl+click two shapes to link",
        };
        ui.horizontal(|ui| {
            ui.label(format!(
                "{} shapes, {} links",
                self.canvas.shapes().len(),
                self.canvas.links().len()
            ));
            ui.separator();
            ui.label(selection);
        });
    }
}
