//! Shared application-wide constants.
//! Centralizes tweakable values used by the canvas model and its rendering.

// Scene
/// Scene width in world units.
pub const SCENE_WIDTH: f32 = 800.0;
/// Scene height in world units.
pub const SCENE_HEIGHT: f32 = 600.0;

// Shape dimensions
/// Width of every shape in world units.
pub const SHAPE_WIDTH: f32 = 100.0;
/// Height of every shape in world units.
pub const SHAPE_HEIGHT: f32 = 50.0;

// Collision settling
/// Offset applied on both axes for each settle nudge.
pub const SETTLE_NUDGE: f32 = 10.0;
/// Step used when probing the four axis directions for a free spot.
pub const FREE_SEARCH_STEP: f32 = 5.0;
/// Upper bound on settle iterations before residual overlap is accepted.
pub const MAX_SETTLE_ATTEMPTS: usize = 100;

// Drawing
/// Stroke width of link lines (in screen pixels).
pub const LINK_STROKE_WIDTH: f32 = 2.0;
/// Stroke width of shape outlines (in screen pixels).
pub const SHAPE_OUTLINE_WIDTH: f32 = 1.0;
/// Stroke width of the outline drawn around a shape waiting in the selection buffer.
pub const SELECTED_OUTLINE_WIDTH: f32 = 3.0;
/// Margin around the scene inside the native window.
pub const WINDOW_MARGIN: f32 = 16.0;
/// Height reserved for the status bar below the scene.
pub const STATUS_BAR_HEIGHT: f32 = 28.0;
