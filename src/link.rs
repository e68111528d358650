//! Lines connecting pairs of shapes.

use crate::error::CanvasError;
use crate::shape::{Shape, ShapeId};
use uuid::Uuid;

/// Unique identifier for links.
pub type LinkId = Uuid;

/// An undirected connection between two distinct shapes.
///
/// The segment is derived state: it always runs between the current centres of
/// both shapes and must be refreshed after either of them moves.
#[derive(Debug, Clone)]
pub struct Link {
    /// Unique identifier for this link
    pub id: LinkId,
    /// First endpoint shape
    pub a: ShapeId,
    /// Second endpoint shape
    pub b: ShapeId,
    segment: [egui::Pos2; 2],
}

impl Link {
    /// Creates a link between two shapes and computes its segment.
    ///
    /// Does not register the link on the shapes; the canvas does that so both
    /// sides of the relation are updated together.
    ///
    /// # Returns
    ///
    /// The new link, or [`CanvasError::SelfLink`] if both ends are the same shape.
    pub fn new(a: &Shape, b: &Shape) -> Result<Self, CanvasError> {
        if a.id == b.id {
            return Err(CanvasError::SelfLink(a.id));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            a: a.id,
            b: b.id,
            segment: [a.center(), b.center()],
        })
    }

    /// Returns `true` if this link joins `x` and `y`, in either order.
    pub fn connects(&self, x: ShapeId, y: ShapeId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    /// Returns `true` if `shape` is one of the two endpoints.
    pub fn touches(&self, shape: ShapeId) -> bool {
        self.a == shape || self.b == shape
    }

    /// The line segment as last refreshed.
    pub fn segment(&self) -> [egui::Pos2; 2] {
        self.segment
    }

    /// Sets the segment endpoints to the centres of the given shapes.
    pub fn refresh_geometry(&mut self, a: &Shape, b: &Shape) {
        debug_assert!(a.id == self.a && b.id == self.b);
        self.segment = [a.center(), b.center()];
    }
}

/// Two links are the same connection if they join the same unordered pair.
impl PartialEq for Link {
    fn eq(&self, other: &Self) -> bool {
        self.connects(other.a, other.b)
    }
}

impl Eq for Link {}
