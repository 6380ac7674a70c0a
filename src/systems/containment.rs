//! Wall containment: pushing the camera view rectangle out of blocking
//! regions.
//!
//! Corrections are applied one wall at a time in registration order; each
//! wall sees the camera rectangle as already corrected by the walls before
//! it. Under deeply overlapping, conflicting walls the result is therefore
//! approximate and order-dependent. That trade keeps every frame a single
//! cheap pass instead of a constraint solve.

use bevy::prelude::*;

use crate::components::wall::{CameraWall, WallMode};
use crate::resources::registry::WallRegistry;

/// World-space snapshot of one wall for a containment pass.
#[derive(Debug, Clone, Copy)]
pub struct WallShape {
    pub rect: Rect,
    pub mode: WallMode,
}

/// Computes the offset that moves a camera rectangle centered at `center`
/// out of the given walls.
///
/// Returns `Vec2::ZERO` when nothing overlaps. `Horizontal` walls correct
/// along X, `Vertical` along Y; `Solid` walls correct whichever axis
/// overlaps strictly more, with equal overlaps resolving to Y. The
/// corrected edge lands exactly flush with the wall edge on the side of
/// the wall center the camera sits on.
pub fn resolve_containment(center: Vec2, view_size: Vec2, walls: &[WallShape]) -> Vec2 {
    let mut offset = Vec2::ZERO;

    for wall in walls {
        if wall.mode == WallMode::None {
            continue;
        }

        let camera = Rect::from_center_size(center + offset, view_size);
        let overlap_x = camera.max.x.min(wall.rect.max.x) - camera.min.x.max(wall.rect.min.x);
        let overlap_y = camera.max.y.min(wall.rect.max.y) - camera.min.y.max(wall.rect.min.y);
        if overlap_x <= 0.0 || overlap_y <= 0.0 {
            continue;
        }

        let correct_x = match wall.mode {
            WallMode::Horizontal => true,
            WallMode::Vertical => false,
            WallMode::Solid => overlap_x > overlap_y,
            WallMode::None => continue,
        };

        let camera_center = center + offset;
        if correct_x {
            offset.x += if camera_center.x < wall.rect.center().x {
                wall.rect.min.x - camera.max.x
            } else {
                wall.rect.max.x - camera.min.x
            };
        } else {
            offset.y += if camera_center.y < wall.rect.center().y {
                wall.rect.min.y - camera.max.y
            } else {
                wall.rect.max.y - camera.min.y
            };
        }
    }

    offset
}

/// Mirrors `CameraWall` component lifecycles into the ordered registry.
///
/// Runs before the rig driver so a wall spawned this frame constrains the
/// camera this frame, and a despawned wall stops constraining immediately.
pub fn sync_wall_registry(
    mut registry: ResMut<WallRegistry>,
    added: Query<Entity, Added<CameraWall>>,
    mut removed: RemovedComponents<CameraWall>,
) {
    for entity in &added {
        registry.register(entity);
    }
    for entity in removed.read() {
        registry.unregister(entity);
    }
}
