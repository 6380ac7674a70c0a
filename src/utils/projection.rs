//! Projection helpers: converting a desired world-space view height into
//! lens parameters.
//!
//! These are stateless utilities for camera components that own a projection;
//! the tracking rig itself only deals in world-space rectangles.

/// Vertical field of view (radians) that shows `view_height` world units at
/// `distance` from the subject.
pub fn fov_for_height(view_height: f32, distance: f32) -> f32 {
    2.0 * (view_height * 0.5 / distance).atan()
}

/// Orthographic half-height that shows `view_height` world units.
pub fn ortho_half_height(view_height: f32) -> f32 {
    view_height * 0.5
}

/// Applies a lens pull: moves the camera `pull` units further back and
/// returns `(distance, fov)` with the field of view narrowed so the apparent
/// view height stays constant. Negative pull moves closer and widens.
///
/// The pulled distance is floored just above zero so a large negative pull
/// cannot put the camera on or behind the subject plane.
pub fn pulled_lens(view_height: f32, distance: f32, pull: f32) -> (f32, f32) {
    let pulled = (distance + pull).max(1e-3);
    (pulled, fov_for_height(view_height, pulled))
}
