//! Axis-aligned box helpers shared by the canvas and its tests.

/// Returns `true` if the two boxes share a region of positive area.
///
/// Boxes that only touch along an edge or at a corner do not overlap.
pub fn overlaps(a: egui::Rect, b: egui::Rect) -> bool {
    a.min.x < b.max.x && b.min.x < a.max.x && a.min.y < b.max.y && b.min.y < a.max.y
}

/// Returns `true` if `inner` lies fully within `outer`, edges included.
pub fn fits_within(inner: egui::Rect, outer: egui::Rect) -> bool {
    inner.min.x >= outer.min.x
        && inner.min.y >= outer.min.y
        && inner.max.x <= outer.max.x
        && inner.max.y <= outer.max.y
}

/// Clamps a top-left position so a box of `size` stays within `bounds`.
///
/// Each axis is clamped independently to `[bounds.min, bounds.max - size]`.
pub fn clamp_top_left(pos: egui::Pos2, size: egui::Vec2, bounds: egui::Rect) -> egui::Pos2 {
    let max_x = (bounds.max.x - size.x).max(bounds.min.x);
    let max_y = (bounds.max.y - size.y).max(bounds.min.y);
    egui::pos2(
        pos.x.clamp(bounds.min.x, max_x),
        pos.y.clamp(bounds.min.y, max_y),
    )
}
