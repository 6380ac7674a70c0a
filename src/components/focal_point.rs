//! Focal points: weighted points of interest that attract the camera.
//!
//! A focal point is activated by inserting the component on an entity and
//! deactivated by removing it (or despawning the entity). The rig reads the
//! entity's `GlobalTransform` every frame, so moving the entity moves its
//! influence — position is never cached here.

use bevy::prelude::*;

/// A weighted point of camera interest.
///
/// Influence falls off with distance from the rig's reference position and
/// cuts out entirely at `max_distance`. Besides pulling the camera toward
/// its position, a focal point can bias zoom, lens pull, and follow speed
/// while it dominates the blend.
#[derive(Component, Debug, Clone)]
pub struct FocalPoint {
    /// Influence strength relative to other focal points. Non-positive
    /// weights contribute nothing.
    pub weight: f32,
    /// Radius of effect in world units. At or beyond this distance the
    /// point contributes nothing; influence ramps in discontinuously as it
    /// crosses inside.
    pub max_distance: f32,
    /// Zoom magnification this point votes for (1.0 = neutral).
    pub zoom: f32,
    /// Lens pull this point votes for (0.0 = neutral).
    pub pull: f32,
    /// Follow-speed multiplier this point votes for (1.0 = neutral).
    pub speed: f32,
    /// Runtime dimmer in [0, 1], independent of `weight`. Useful for
    /// fading a point in or out without touching its configured strength.
    pub influence_scale: f32,
}

impl FocalPoint {
    /// Creates a focal point with neutral zoom/pull/speed biases.
    pub fn new(weight: f32, max_distance: f32) -> Self {
        Self {
            weight,
            max_distance,
            zoom: 1.0,
            pull: 0.0,
            speed: 1.0,
            influence_scale: 1.0,
        }
    }

    /// Sets the zoom bias.
    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    /// Sets the lens-pull bias.
    pub fn with_pull(mut self, pull: f32) -> Self {
        self.pull = pull;
        self
    }

    /// Sets the follow-speed multiplier.
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Sets the runtime influence dimmer, clamped to [0, 1].
    pub fn with_influence_scale(mut self, scale: f32) -> Self {
        self.influence_scale = scale.clamp(0.0, 1.0);
        self
    }
}

impl Default for FocalPoint {
    fn default() -> Self {
        Self::new(1.0, 500.0)
    }
}

/// Marks the rig's base target (e.g. the player).
///
/// The entity must also carry a `FocalPoint`; its weight and biases are
/// always blended in regardless of distance, and its position is the
/// distance reference when the rig runs in `ReferenceMode::Primary`. At
/// most one entity should carry this marker — extras are treated as
/// ordinary focal points.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct PrimaryTarget;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_neutral() {
        let point = FocalPoint::new(3.0, 120.0);
        assert_eq!(point.weight, 3.0);
        assert_eq!(point.max_distance, 120.0);
        assert_eq!(point.zoom, 1.0);
        assert_eq!(point.pull, 0.0);
        assert_eq!(point.speed, 1.0);
        assert_eq!(point.influence_scale, 1.0);
    }

    #[test]
    fn test_builder_biases() {
        let point = FocalPoint::new(1.0, 50.0)
            .with_zoom(1.6)
            .with_pull(-0.25)
            .with_speed(2.0);
        assert_eq!(point.zoom, 1.6);
        assert_eq!(point.pull, -0.25);
        assert_eq!(point.speed, 2.0);
    }

    #[test]
    fn test_influence_scale_is_clamped() {
        assert_eq!(FocalPoint::new(1.0, 50.0).with_influence_scale(1.8).influence_scale, 1.0);
        assert_eq!(FocalPoint::new(1.0, 50.0).with_influence_scale(-0.5).influence_scale, 0.0);
    }
}
