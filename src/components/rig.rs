//! The tracking rig: per-camera tuning plus the smoothed pose the driver
//! maintains.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::curve::ResponseCurve;

/// Which position focal-point distances are measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReferenceMode {
    /// Distances are measured from the camera's own (smoothed) position.
    #[default]
    Camera,
    /// Distances are measured from the primary target. Falls back to the
    /// camera position when no primary target exists.
    Primary,
}

/// Tracking-camera state and tuning.
///
/// The driver blends focal points into a target pose, pushes it out of any
/// walls, then smooths `pan`/`zoom`/`pull` toward it each frame. Shake is
/// layered onto the transform afterwards and never written back here, so
/// the smoothed pose stays jitter-free.
#[derive(Component, Debug, Clone)]
pub struct CameraRig {
    pub reference_mode: ReferenceMode,
    /// Distance falloff applied to focal-point influence. Fade-shaped
    /// curves (full at zero distance) are the useful choices here.
    pub falloff: ResponseCurve,
    /// Base smoothing rate in 1/seconds; multiplied by the blended `speed`
    /// of the current targets. Higher snaps harder.
    pub responsiveness: f32,
    /// World-space size of the view rectangle used for wall containment.
    pub view_size: Vec2,
    /// Projection scale at zoom 1.0.
    pub base_scale: f32,
    /// Smoothed camera center.
    pub pan: Vec2,
    /// Smoothed zoom magnification.
    pub zoom: f32,
    /// Smoothed lens pull.
    pub pull: f32,
}

impl CameraRig {
    pub fn new(view_size: Vec2) -> Self {
        Self {
            reference_mode: ReferenceMode::default(),
            falloff: ResponseCurve::FadeLinear,
            responsiveness: 4.0,
            view_size,
            base_scale: 1.0,
            pan: Vec2::ZERO,
            zoom: 1.0,
            pull: 0.0,
        }
    }

    pub fn with_reference_mode(mut self, mode: ReferenceMode) -> Self {
        self.reference_mode = mode;
        self
    }

    pub fn with_falloff(mut self, falloff: ResponseCurve) -> Self {
        self.falloff = falloff;
        self
    }

    pub fn with_responsiveness(mut self, responsiveness: f32) -> Self {
        self.responsiveness = responsiveness;
        self
    }

    /// Starts the smoothed pose at the given center instead of the origin,
    /// avoiding a long settle-in glide on spawn.
    pub fn starting_at(mut self, pan: Vec2) -> Self {
        self.pan = pan;
        self
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(Vec2::new(1280.0, 720.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_neutral() {
        let rig = CameraRig::new(Vec2::new(640.0, 360.0));
        assert_eq!(rig.pan, Vec2::ZERO);
        assert_eq!(rig.zoom, 1.0);
        assert_eq!(rig.pull, 0.0);
        assert_eq!(rig.view_size, Vec2::new(640.0, 360.0));
    }

    #[test]
    fn test_starting_at_seeds_pan() {
        let rig = CameraRig::default().starting_at(Vec2::new(100.0, -30.0));
        assert_eq!(rig.pan, Vec2::new(100.0, -30.0));
    }
}
