//! Error type for rejected canvas operations.

use crate::shape::ShapeId;
use thiserror::Error;

/// Why the canvas refused to perform an operation.
///
/// None of these are fatal: the pointer handlers log them and leave the scene untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CanvasError {
    /// The box would extend past the scene bounds
    #[error("rectangle {0:?} does not fit inside the scene")]
    OutOfBounds(egui::Rect),
    /// The box would overlap an existing shape
    #[error("rectangle overlaps shape {other}")]
    Overlap {
        /// The first shape found in the way
        other: ShapeId,
    },
    /// A link was requested from a shape to itself
    #[error("cannot link shape {0} to itself")]
    SelfLink(ShapeId),
    /// No shape with this id exists on the canvas
    #[error("no shape with id {0}")]
    UnknownShape(ShapeId),
}
