//! Canvas configuration.
//!
//! The canvas reads every tunable value from a [`CanvasConfig`] instead of the
//! raw constants, so alternative scenes can be built without touching the model.

use crate::constants::*;

/// Tunable values for a [`Canvas`](crate::Canvas).
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    /// Size of the scene; its top-left corner is always the origin
    pub scene_size: egui::Vec2,
    /// Size given to every newly created shape
    pub shape_size: egui::Vec2,
    /// Diagonal offset applied per settle attempt
    pub settle_nudge: f32,
    /// Step used by the four-direction free position search
    pub free_search_step: f32,
    /// Maximum number of settle iterations
    pub max_settle_attempts: usize,
    /// Width of the line drawn for each link
    pub link_stroke_width: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            scene_size: egui::vec2(SCENE_WIDTH, SCENE_HEIGHT),
            shape_size: egui::vec2(SHAPE_WIDTH, SHAPE_HEIGHT),
            settle_nudge: SETTLE_NUDGE,
            free_search_step: FREE_SEARCH_STEP,
            max_settle_attempts: MAX_SETTLE_ATTEMPTS,
            link_stroke_width: LINK_STROKE_WIDTH,
        }
    }
}

impl CanvasConfig {
    /// The scene rectangle in world coordinates.
    pub fn scene_rect(&self) -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::ZERO, self.scene_size)
    }
}
