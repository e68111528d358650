//! Pointer input and coordinate mapping.
//!
//! This module converts between screen and scene coordinates and forwards
//! pointer events to the canvas handlers.

use super::state::CanvasApp;
use eframe::egui;

impl CanvasApp {
    /// Converts screen coordinates to scene coordinates.
    pub fn screen_to_world(&self, screen_pos: egui::Pos2) -> egui::Pos2 {
        screen_pos - self.viewport.origin
    }

    /// Converts scene coordinates to screen coordinates.
    pub fn world_to_screen(&self, world_pos: egui::Pos2) -> egui::Pos2 {
        world_pos + self.viewport.origin
    }

    /// Converts a scene rectangle to screen coordinates.
    pub fn world_rect_to_screen(&self, rect: egui::Rect) -> egui::Rect {
        rect.translate(self.viewport.origin)
    }

    /// Forwards this frame's primary-button input to the canvas.
    ///
    /// Presses anywhere in the canvas panel reach the canvas, so a click in the
    /// margin around the scene still clears a pending link selection. Double
    /// clicks only count inside the scene. Motion and release are forwarded
    /// wherever the pointer is, so a drag keeps tracking outside the scene.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    /// * `panel_rect` - Screen rectangle of the panel hosting the scene
    /// * `scene_rect` - Screen rectangle covered by the scene
    pub fn handle_pointer_input(
        &mut self,
        ui: &egui::Ui,
        panel_rect: egui::Rect,
        scene_rect: egui::Rect,
    ) {
        let (pressed, down, released, double_clicked, modifiers, pointer) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.primary_released(),
                i.pointer
                    .button_double_clicked(egui::PointerButton::Primary),
                i.modifiers,
                i.pointer.interact_pos(),
            )
        });
        let in_panel = pointer.is_some_and(|p| panel_rect.contains(p));
        let in_scene = pointer.is_some_and(|p| scene_rect.contains(p));
        let world = pointer.map(|p| self.screen_to_world(p));

        if let Some(world) = world {
            if pressed && in_panel {
                self.canvas.pointer_pressed(world, modifiers.command);
            }
            if down && self.canvas.dragging().is_some() {
                self.canvas.pointer_dragged(world);
            }
        }

        if released {
            self.canvas.pointer_released();
        }

        if let Some(world) = world.filter(|_| double_clicked && in_scene) {
            self.canvas.double_clicked(world, modifiers.command);
        }
    }
}
