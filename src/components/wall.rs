//! Camera walls: axis-aligned regions the camera's view rectangle is pushed
//! out of.
//!
//! A wall is activated by inserting the component and deactivated by
//! removing it. Its world rectangle is recomputed from the entity's
//! `GlobalTransform` on every containment pass, so walls may move and scale
//! freely at runtime.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Which axes a wall is allowed to correct the camera along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WallMode {
    /// Corrects whichever axis overlaps more.
    #[default]
    Solid,
    /// Always corrects along X.
    Horizontal,
    /// Always corrects along Y.
    Vertical,
    /// Registered but inert. Handy for toggling a wall without removing it.
    None,
}

/// An axis-aligned blocking region for the camera view rectangle.
#[derive(Component, Debug, Clone)]
pub struct CameraWall {
    pub mode: WallMode,
    /// Rectangle size in local units, scaled by the entity transform.
    pub size: Vec2,
    /// Rectangle center offset from the entity translation, in local units.
    pub offset: Vec2,
}

impl CameraWall {
    pub fn new(mode: WallMode, size: Vec2) -> Self {
        Self {
            mode,
            size,
            offset: Vec2::ZERO,
        }
    }

    /// A wall that blocks on both axes.
    pub fn solid(size: Vec2) -> Self {
        Self::new(WallMode::Solid, size)
    }

    /// A wall that only corrects horizontally.
    pub fn horizontal(size: Vec2) -> Self {
        Self::new(WallMode::Horizontal, size)
    }

    /// A wall that only corrects vertically.
    pub fn vertical(size: Vec2) -> Self {
        Self::new(WallMode::Vertical, size)
    }

    /// Offsets the rectangle center from the entity translation.
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// The wall's current world-space rectangle.
    ///
    /// Recomputed from the transform on every call; the entity may have
    /// moved or scaled since the previous frame.
    pub fn world_rect(&self, transform: &GlobalTransform) -> Rect {
        let (scale, _, translation) = transform.to_scale_rotation_translation();
        let scale = scale.truncate();
        let center = translation.truncate() + self.offset * scale;
        Rect::from_center_size(center, self.size * scale.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_rect_follows_translation() {
        let wall = CameraWall::solid(Vec2::new(100.0, 40.0));
        let transform = GlobalTransform::from_translation(Vec3::new(50.0, -20.0, 0.0));
        let rect = wall.world_rect(&transform);
        assert_eq!(rect.center(), Vec2::new(50.0, -20.0));
        assert_eq!(rect.size(), Vec2::new(100.0, 40.0));
    }

    #[test]
    fn test_world_rect_applies_scale_and_offset() {
        let wall = CameraWall::vertical(Vec2::new(10.0, 10.0)).with_offset(Vec2::new(5.0, 0.0));
        let transform = GlobalTransform::from(
            Transform::from_xyz(0.0, 0.0, 0.0).with_scale(Vec3::new(2.0, 3.0, 1.0)),
        );
        let rect = wall.world_rect(&transform);
        assert_eq!(rect.center(), Vec2::new(10.0, 0.0));
        assert_eq!(rect.size(), Vec2::new(20.0, 30.0));
    }

    #[test]
    fn test_default_mode_is_solid() {
        assert_eq!(WallMode::default(), WallMode::Solid);
    }
}
