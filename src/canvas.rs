//! The scene controller.
//!
//! [`Canvas`] owns every shape and link and is the single context through which
//! the viewport mutates the scene. All operations run synchronously on the UI
//! thread in event order, so collision tests always see the settled result of
//! the previous event.

use crate::config::CanvasConfig;
use crate::error::CanvasError;
use crate::geometry::{clamp_top_left, fits_within, overlaps};
use crate::link::{Link, LinkId};
use crate::selection::LinkSelection;
use crate::shape::{random_color, Shape, ShapeId};

/// Result of a successful link toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkToggle {
    /// A new link was created
    Connected(LinkId),
    /// An existing link was removed
    Disconnected(LinkId),
}

/// Result of settling a shape after a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    /// The shape did not overlap anything
    AlreadyClear,
    /// The overlap was cleared after the given number of attempts
    Resolved {
        /// Attempts used
        attempts: usize,
    },
    /// The overlap could not be cleared; the shape keeps it
    GaveUp {
        /// Attempts used before giving up
        attempts: usize,
    },
}

/// A drag in progress.
#[derive(Debug, Clone, Copy)]
struct DragState {
    shape: ShapeId,
    /// Offset from the shape's top-left corner to the pointer
    grab_offset: egui::Vec2,
}

/// Owns the shapes, links and gesture state of one scene.
#[derive(Debug)]
pub struct Canvas {
    config: CanvasConfig,
    shapes: Vec<Shape>,
    links: Vec<Link>,
    selection: LinkSelection,
    drag: Option<DragState>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(CanvasConfig::default())
    }
}

impl Canvas {
    /// Creates an empty canvas.
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            config,
            shapes: Vec::new(),
            links: Vec::new(),
            selection: LinkSelection::Idle,
            drag: None,
        }
    }

    /// The configuration this canvas was built with.
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// All shapes in creation (and paint) order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// All links.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Looks up a shape by id.
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    /// Looks up a link by id.
    pub fn link(&self, id: LinkId) -> Option<&Link> {
        self.links.iter().find(|l| l.id == id)
    }

    /// Current state of the link toggle gesture.
    pub fn selection(&self) -> LinkSelection {
        self.selection
    }

    /// The shape being dragged, if any.
    pub fn dragging(&self) -> Option<ShapeId> {
        self.drag.map(|d| d.shape)
    }

    fn index_of(&self, id: ShapeId) -> Result<usize, CanvasError> {
        self.shapes
            .iter()
            .position(|s| s.id == id)
            .ok_or(CanvasError::UnknownShape(id))
    }

    /// First shape (other than `except`) whose box overlaps `rect`.
    fn first_overlap(&self, rect: egui::Rect, except: Option<ShapeId>) -> Option<ShapeId> {
        self.shapes
            .iter()
            .filter(|s| Some(s.id) != except)
            .find(|s| overlaps(s.rect(), rect))
            .map(|s| s.id)
    }

    /// Returns the first other shape overlapping `id` at its current position.
    pub fn overlapping(&self, id: ShapeId) -> Option<ShapeId> {
        let shape = self.shape(id)?;
        self.first_overlap(shape.rect(), Some(id))
    }

    /// Creates a shape with a random fill colour.
    ///
    /// # Arguments
    ///
    /// * `top_left` - Position of the new shape's top-left corner
    ///
    /// # Returns
    ///
    /// The new shape's id, or why it could not be placed.
    pub fn create_shape(&mut self, top_left: egui::Pos2) -> Result<ShapeId, CanvasError> {
        self.create_shape_with_color(top_left, random_color())
    }

    /// Creates a shape with the given fill colour.
    ///
    /// Fails if the box would leave the scene or overlap an existing shape.
    pub fn create_shape_with_color(
        &mut self,
        top_left: egui::Pos2,
        color: egui::Color32,
    ) -> Result<ShapeId, CanvasError> {
        let rect = egui::Rect::from_min_size(top_left, self.config.shape_size);
        if !fits_within(rect, self.config.scene_rect()) {
            return Err(CanvasError::OutOfBounds(rect));
        }
        if let Some(other) = self.first_overlap(rect, None) {
            return Err(CanvasError::Overlap { other });
        }

        let shape = Shape::new(top_left, self.config.shape_size, color);
        let id = shape.id;
        self.shapes.push(shape);
        log::info!("created shape {id} at ({}, {})", top_left.x, top_left.y);
        Ok(id)
    }

    /// Creates a shape centred on `point`.
    pub fn create_shape_centered(&mut self, point: egui::Pos2) -> Result<ShapeId, CanvasError> {
        self.create_shape(point - self.config.shape_size / 2.0)
    }

    /// Finds the topmost shape containing `point`.
    pub fn shape_at(&self, point: egui::Pos2) -> Option<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .find(|s| s.rect().contains(point))
            .map(|s| s.id)
    }

    /// Requests that a shape move by `delta`.
    ///
    /// The target is clamped into the scene on each axis. If the clamped box
    /// overlaps another shape the move is rejected as a whole and the shape keeps
    /// its position; otherwise the shape moves and its links are refreshed. A call
    /// made while the shape is already resolving a move is suppressed.
    ///
    /// # Returns
    ///
    /// The position the shape ends up at.
    pub fn propose_move(
        &mut self,
        id: ShapeId,
        delta: egui::Vec2,
    ) -> Result<egui::Pos2, CanvasError> {
        let idx = self.index_of(id)?;
        let current = self.shapes[idx].position();
        if !self.shapes[idx].begin_move() {
            return Ok(current);
        }

        let size = self.shapes[idx].size();
        let clamped = clamp_top_left(current + delta, size, self.config.scene_rect());

        // Tentative write, rolled back below if it collides.
        self.shapes[idx].set_position(clamped);
        let accepted = match self.first_overlap(self.shapes[idx].rect(), Some(id)) {
            Some(other) => {
                log::debug!("move of {id} blocked by {other}");
                self.shapes[idx].set_position(current);
                current
            }
            None => {
                self.refresh_links(idx);
                clamped
            }
        };

        self.shapes[idx].end_move();
        Ok(accepted)
    }

    /// Requests that a shape move so its top-left lands on `target`.
    pub fn move_to(&mut self, id: ShapeId, target: egui::Pos2) -> Result<egui::Pos2, CanvasError> {
        let current = self.shape(id).ok_or(CanvasError::UnknownShape(id))?.position();
        self.propose_move(id, target - current)
    }

    /// Writes a position without collision checks and refreshes the shape's links.
    fn place(&mut self, idx: usize, position: egui::Pos2) {
        self.shapes[idx].set_position(position);
        self.refresh_links(idx);
    }

    fn refresh_links(&mut self, idx: usize) {
        let shapes = &self.shapes;
        for link_id in shapes[idx].links() {
            let Some(link) = self.links.iter_mut().find(|l| l.id == *link_id) else {
                continue;
            };
            let a = shapes.iter().find(|s| s.id == link.a);
            let b = shapes.iter().find(|s| s.id == link.b);
            if let (Some(a), Some(b)) = (a, b) {
                link.refresh_geometry(a, b);
            }
        }
    }

    /// Finds the link joining two shapes, in either order.
    pub fn link_between(&self, a: ShapeId, b: ShapeId) -> Option<LinkId> {
        self.links.iter().find(|l| l.connects(a, b)).map(|l| l.id)
    }

    /// Connects two shapes, or disconnects them if they are already linked.
    pub fn toggle_link(&mut self, a: ShapeId, b: ShapeId) -> Result<LinkToggle, CanvasError> {
        if a == b {
            return Err(CanvasError::SelfLink(a));
        }
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;

        if let Some(existing) = self.link_between(a, b) {
            self.remove_link(existing);
            log::info!("disconnected {a} and {b}");
            return Ok(LinkToggle::Disconnected(existing));
        }

        let link = Link::new(&self.shapes[ia], &self.shapes[ib])?;
        let id = link.id;
        self.shapes[ia].add_link(id);
        self.shapes[ib].add_link(id);
        self.links.push(link);
        log::info!("connected {a} and {b}");
        Ok(LinkToggle::Connected(id))
    }

    fn remove_link(&mut self, id: LinkId) {
        if let Some(pos) = self.links.iter().position(|l| l.id == id) {
            let link = self.links.remove(pos);
            for shape in self.shapes.iter_mut().filter(|s| link.touches(s.id)) {
                shape.remove_link(id);
            }
        }
    }

    /// Looks for a free spot one search step away from `around`.
    ///
    /// Tries +x, -x, +y and -y in that order and returns the first position whose
    /// box stays in the scene and overlaps no other shape.
    pub fn nearest_free_position(&self, id: ShapeId, around: egui::Pos2) -> Option<egui::Pos2> {
        let shape = self.shape(id)?;
        let step = self.config.free_search_step;
        let scene = self.config.scene_rect();
        [
            egui::vec2(step, 0.0),
            egui::vec2(-step, 0.0),
            egui::vec2(0.0, step),
            egui::vec2(0.0, -step),
        ]
        .into_iter()
        .map(|offset| around + offset)
        .find(|candidate| {
            let rect = shape.rect_at(*candidate);
            fits_within(rect, scene) && self.first_overlap(rect, Some(id)).is_none()
        })
    }

    /// Pushes a shape off any shape it overlaps.
    ///
    /// Each attempt nudges the shape diagonally by the settle offset, clamped to
    /// the scene. Gives up when the nudge can make no progress or the attempt
    /// limit is reached.
    pub fn settle(&mut self, id: ShapeId) -> Result<SettleOutcome, CanvasError> {
        let idx = self.index_of(id)?;
        if self.overlapping(id).is_none() {
            return Ok(SettleOutcome::AlreadyClear);
        }

        let nudge = egui::Vec2::splat(self.config.settle_nudge);
        let scene = self.config.scene_rect();
        for attempt in 1..=self.config.max_settle_attempts {
            let current = self.shapes[idx].position();
            let nudged = clamp_top_left(current + nudge, self.shapes[idx].size(), scene);
            if nudged == current {
                log::warn!("shape {id} is pinned against the scene edge, leaving it overlapping");
                return Ok(SettleOutcome::GaveUp { attempts: attempt });
            }
            self.place(idx, nudged);
            if self.overlapping(id).is_none() {
                return Ok(SettleOutcome::Resolved { attempts: attempt });
            }
        }

        log::warn!(
            "shape {id} still overlaps after {} settle attempts",
            self.config.max_settle_attempts
        );
        Ok(SettleOutcome::GaveUp {
            attempts: self.config.max_settle_attempts,
        })
    }

    /// Handles a double click at `point`: creates a shape centred there.
    ///
    /// Ignored when the modifier is held or a shape is under the pointer.
    /// Rejected creations leave the scene unchanged.
    pub fn double_clicked(&mut self, point: egui::Pos2, modifier: bool) -> Option<ShapeId> {
        if modifier || self.shape_at(point).is_some() {
            return None;
        }
        match self.create_shape_centered(point) {
            Ok(id) => Some(id),
            Err(err) => {
                log::debug!("shape not created: {err}");
                None
            }
        }
    }

    /// Handles a primary button press at `point`.
    ///
    /// Feeds the link toggle gesture and, for an unmodified press on a shape,
    /// starts dragging it.
    pub fn pointer_pressed(&mut self, point: egui::Pos2, modifier: bool) -> Option<LinkToggle> {
        let hit = self.shape_at(point);
        let toggled = match self.selection.click(hit, modifier) {
            Some((a, b)) => match self.toggle_link(a, b) {
                Ok(toggle) => Some(toggle),
                Err(err) => {
                    log::debug!("link not toggled: {err}");
                    None
                }
            },
            None => None,
        };

        if !modifier {
            let drag = hit.and_then(|id| self.shape(id)).map(|shape| DragState {
                shape: shape.id,
                grab_offset: point - shape.position(),
            });
            if drag.is_some() {
                self.drag = drag;
            }
        }
        toggled
    }

    /// Handles pointer motion while the primary button is held.
    pub fn pointer_dragged(&mut self, point: egui::Pos2) {
        if let Some(drag) = self.drag {
            if let Err(err) = self.move_to(drag.shape, point - drag.grab_offset) {
                log::debug!("drag ignored: {err}");
                self.drag = None;
            }
        }
    }

    /// Handles release of the primary button: ends any drag and settles the shape.
    pub fn pointer_released(&mut self) -> Option<SettleOutcome> {
        let drag = self.drag.take()?;
        self.settle(drag.shape).ok()
    }
}
