//! Shake systems: trauma event routing and per-frame shake application.

use bevy::prelude::*;

use crate::components::rig::CameraRig;
use crate::components::shake::{CameraShake, DEFAULT_TRAUMA_SOURCE};
use crate::events::TraumaEvent;
use crate::plugins::core::MainCamera;

/// Routes `TraumaEvent`s into the main camera's shake ledger.
pub fn apply_trauma_events(
    mut events: EventReader<TraumaEvent>,
    mut query: Query<&mut CameraShake, With<MainCamera>>,
) {
    let Ok(mut shake) = query.get_single_mut() else {
        events.clear();
        return;
    };

    for event in events.read() {
        let source = event.source.as_deref().unwrap_or(DEFAULT_TRAUMA_SOURCE);
        shake.add_trauma_on(source, event.amount, event.mode);
    }
}

/// Ticks the shake ledger and layers the sampled jitter onto the camera
/// transform.
///
/// Runs after the rig driver, which rewrites the translation from the
/// smoothed pan every frame, so the additive offset never accumulates and
/// never leaks back into the rig's motion state. Rotation is reset to
/// identity when the ledger is silent.
pub fn apply_camera_shake(
    time: Res<Time>,
    mut query: Query<(&mut CameraShake, &mut Transform), With<CameraRig>>,
) {
    for (mut shake, mut transform) in &mut query {
        shake.tick(time.delta_secs());
        let sample = shake.sample();

        transform.translation.x += sample.offset.x;
        transform.translation.y += sample.offset.y;
        if sample.roll != 0.0 {
            transform.rotation = Quat::from_rotation_z(sample.roll);
        } else {
            transform.rotation = Quat::IDENTITY;
        }
    }
}
