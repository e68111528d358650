//! Movable, coloured rectangles placed on the canvas.

use crate::link::LinkId;
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Whether a shape is currently inside a move computation.
///
/// A tentative position write made while probing for collisions must not start
/// another move computation on the same shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveState {
    /// No move is being computed
    #[default]
    Idle,
    /// A move computation is in progress
    Resolving,
}

/// A rectangle on the canvas.
#[derive(Debug, Clone)]
pub struct Shape {
    /// Unique identifier for this shape
    pub id: ShapeId,
    position: egui::Pos2,
    size: egui::Vec2,
    /// Fill colour chosen at creation
    pub color: egui::Color32,
    links: Vec<LinkId>,
    move_state: MoveState,
}

impl Shape {
    /// Creates a detached shape with a fresh id.
    ///
    /// # Arguments
    ///
    /// * `position` - Top-left corner in scene coordinates
    /// * `size` - Width and height, fixed for the lifetime of the shape
    /// * `color` - Fill colour
    pub fn new(position: egui::Pos2, size: egui::Vec2, color: egui::Color32) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            size,
            color,
            links: Vec::new(),
            move_state: MoveState::Idle,
        }
    }

    /// Top-left corner in scene coordinates.
    pub fn position(&self) -> egui::Pos2 {
        self.position
    }

    /// Width and height of the shape.
    pub fn size(&self) -> egui::Vec2 {
        self.size
    }

    /// Bounding box in scene coordinates.
    pub fn rect(&self) -> egui::Rect {
        self.rect_at(self.position)
    }

    /// The bounding box this shape would have with its top-left at `position`.
    pub fn rect_at(&self, position: egui::Pos2) -> egui::Rect {
        egui::Rect::from_min_size(position, self.size)
    }

    /// Centre of the bounding box.
    pub fn center(&self) -> egui::Pos2 {
        self.rect().center()
    }

    /// Links incident to this shape.
    pub fn links(&self) -> &[LinkId] {
        &self.links
    }

    /// Current move guard state.
    pub fn move_state(&self) -> MoveState {
        self.move_state
    }

    /// Records an incident link. Adding the same link twice has no effect.
    pub fn add_link(&mut self, link: LinkId) {
        if !self.links.contains(&link) {
            self.links.push(link);
        }
    }

    /// Forgets an incident link, returning whether it was present.
    pub fn remove_link(&mut self, link: LinkId) -> bool {
        match self.links.iter().position(|l| *l == link) {
            Some(idx) => {
                self.links.swap_remove(idx);
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_position(&mut self, position: egui::Pos2) {
        self.position = position;
    }

    /// Enters the resolving state. Returns `false` if a move is already being resolved.
    pub(crate) fn begin_move(&mut self) -> bool {
        if self.move_state == MoveState::Resolving {
            return false;
        }
        self.move_state = MoveState::Resolving;
        true
    }

    pub(crate) fn end_move(&mut self) {
        self.move_state = MoveState::Idle;
    }
}

/// Picks a random, fully opaque fill colour.
///
/// Falls back to grey if the operating system's random source is unavailable.
pub fn random_color() -> egui::Color32 {
    let mut rgb = [0u8; 3];
    match getrandom::fill(&mut rgb) {
        Ok(()) => egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2]),
        Err(err) => {
            log::warn!("random source unavailable, using grey fill: {err}");
            egui::Color32::GRAY
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Shape {
        Shape::new(
            egui::pos2(50.0, 50.0),
            egui::vec2(100.0, 50.0),
            egui::Color32::RED,
        )
    }

    #[test]
    fn rect_and_center_follow_position() {
        let mut shape = sample();
        assert_eq!(shape.center(), egui::pos2(100.0, 75.0));
        shape.set_position(egui::pos2(0.0, 0.0));
        assert_eq!(shape.rect().max, egui::pos2(100.0, 50.0));
        assert_eq!(shape.center(), egui::pos2(50.0, 25.0));
    }

    #[test]
    fn link_set_ignores_duplicates_and_removes_by_id() {
        let mut shape = sample();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        shape.add_link(a);
        shape.add_link(a);
        shape.add_link(b);
        assert_eq!(shape.links().len(), 2);

        assert!(shape.remove_link(a));
        assert!(!shape.remove_link(a));
        assert_eq!(shape.links(), &[b]);
    }

    #[test]
    fn move_guard_rejects_nested_entry() {
        let mut shape = sample();
        assert_eq!(shape.move_state(), MoveState::Idle);
        assert!(shape.begin_move());
        assert!(!shape.begin_move());
        assert_eq!(shape.move_state(), MoveState::Resolving);
        shape.end_move();
        assert_eq!(shape.move_state(), MoveState::Idle);
    }

    #[test]
    fn random_color_is_opaque() {
        assert_eq!(random_color().a(), 255);
    }
}
