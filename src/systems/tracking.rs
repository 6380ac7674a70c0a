//! Target blending and the per-frame rig driver.
//!
//! `blend_targets` is the pure aggregation core: it folds the primary
//! target and every in-range focal point into one target pose.
//! `drive_camera_rig` snapshots the ECS, blends, applies wall containment,
//! and smooths the rig's pose toward the result.

use bevy::prelude::*;

use crate::components::focal_point::{FocalPoint, PrimaryTarget};
use crate::components::rig::{CameraRig, ReferenceMode};
use crate::components::wall::CameraWall;
use crate::resources::registry::WallRegistry;
use crate::systems::containment::{resolve_containment, WallShape};
use crate::utils::curve::ResponseCurve;

/// Snapshot of one focal point, captured from the ECS at evaluation time.
#[derive(Debug, Clone, Copy)]
pub struct Contributor {
    pub position: Vec2,
    pub weight: f32,
    pub max_distance: f32,
    pub zoom: f32,
    pub pull: f32,
    pub speed: f32,
    pub influence_scale: f32,
}

impl Contributor {
    pub fn from_point(point: &FocalPoint, position: Vec2) -> Self {
        Self {
            position,
            weight: point.weight,
            max_distance: point.max_distance,
            zoom: point.zoom,
            pull: point.pull,
            speed: point.speed,
            influence_scale: point.influence_scale,
        }
    }
}

/// The blended target pose the rig smooths toward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendedTarget {
    pub position: Vec2,
    pub zoom: f32,
    pub pull: f32,
    pub speed: f32,
}

impl BlendedTarget {
    /// The neutral pose used when nothing is influencing the camera: stay
    /// where it is, no zoom, no pull, normal speed.
    pub fn hold_at(position: Vec2) -> Self {
        Self {
            position,
            zoom: 1.0,
            pull: 0.0,
            speed: 1.0,
        }
    }
}

/// Blends the primary target and all in-range focal points into one pose.
///
/// The primary is always included at its raw weight, regardless of
/// distance. Every other point is gated to the half-open interval
/// `[0, max_distance)` around the reference position and scaled by
/// `falloff(distance / max_distance)` times its influence dimmer. A zero
/// total weight yields the neutral hold pose rather than a division by
/// zero.
pub fn blend_targets(
    primary: Option<&Contributor>,
    points: &[Contributor],
    reference_mode: ReferenceMode,
    camera_position: Vec2,
    falloff: ResponseCurve,
) -> BlendedTarget {
    let reference = match (reference_mode, primary) {
        (ReferenceMode::Primary, Some(primary)) => primary.position,
        _ => camera_position,
    };

    let mut position_sum = Vec2::ZERO;
    let mut zoom_sum = 0.0;
    let mut pull_sum = 0.0;
    let mut speed_sum = 0.0;
    let mut weight_sum = 0.0;

    if let Some(primary) = primary {
        let weight = primary.weight;
        position_sum += primary.position * weight;
        zoom_sum += primary.zoom * weight;
        pull_sum += primary.pull * weight;
        speed_sum += primary.speed * weight;
        weight_sum += weight;
    }

    for point in points {
        if point.weight <= 0.0 {
            continue;
        }
        let distance_squared = point.position.distance_squared(reference);
        if distance_squared >= point.max_distance * point.max_distance {
            continue;
        }
        let distance_scale = falloff.evaluate(distance_squared.sqrt() / point.max_distance);
        let weight = point.weight * point.influence_scale * distance_scale;

        position_sum += point.position * weight;
        zoom_sum += point.zoom * weight;
        pull_sum += point.pull * weight;
        speed_sum += point.speed * weight;
        weight_sum += weight;
    }

    if weight_sum == 0.0 {
        return BlendedTarget::hold_at(camera_position);
    }

    BlendedTarget {
        position: position_sum / weight_sum,
        zoom: zoom_sum / weight_sum,
        pull: pull_sum / weight_sum,
        speed: speed_sum / weight_sum,
    }
}

/// Per-frame rig driver: blend targets, contain against walls, smooth.
///
/// Smoothing uses the frame-rate independent factor
/// `1 - exp(-speed * responsiveness * dt)`, so the rig converges at the
/// same rate whether the game runs at 30 or 240 fps. The smoothed pan is
/// written into the transform; the shake pass runs after this and layers
/// its offset on top.
pub fn drive_camera_rig(
    time: Res<Time>,
    registry: Res<WallRegistry>,
    walls: Query<(&CameraWall, &GlobalTransform)>,
    targets: Query<(&FocalPoint, &GlobalTransform, Has<PrimaryTarget>)>,
    mut rigs: Query<(
        &mut CameraRig,
        &mut Transform,
        Option<&mut OrthographicProjection>,
    )>,
) {
    let mut primary = None;
    let mut points = Vec::new();
    for (point, transform, is_primary) in &targets {
        let contributor = Contributor::from_point(point, transform.translation().truncate());
        if is_primary && primary.is_none() {
            primary = Some(contributor);
        } else {
            if is_primary {
                warn_once!("multiple PrimaryTarget entities; extras demoted to focal points");
            }
            points.push(contributor);
        }
    }

    let wall_shapes: Vec<WallShape> = registry
        .iter()
        .filter_map(|entity| walls.get(entity).ok())
        .map(|(wall, transform)| WallShape {
            rect: wall.world_rect(transform),
            mode: wall.mode,
        })
        .collect();

    let dt = time.delta_secs();
    for (mut rig, mut transform, projection) in &mut rigs {
        let target = blend_targets(
            primary.as_ref(),
            &points,
            rig.reference_mode,
            rig.pan,
            rig.falloff,
        );
        let contained =
            target.position + resolve_containment(target.position, rig.view_size, &wall_shapes);

        let alpha = 1.0 - (-target.speed * rig.responsiveness * dt).exp();
        let pan = rig.pan;
        rig.pan += (contained - pan) * alpha;
        let zoom = rig.zoom;
        rig.zoom += (target.zoom - zoom) * alpha;
        let pull = rig.pull;
        rig.pull += (target.pull - pull) * alpha;

        transform.translation.x = rig.pan.x;
        transform.translation.y = rig.pan.y;

        if let Some(mut projection) = projection {
            projection.scale = rig.base_scale / rig.zoom.max(0.01);
        }
    }
}
