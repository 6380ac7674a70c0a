use bevy::prelude::*;

use crate::events::TraumaEvent;
use crate::resources::registry::WallRegistry;
use crate::systems::containment::sync_wall_registry;
use crate::systems::shake::{apply_camera_shake, apply_trauma_events};
use crate::systems::tracking::drive_camera_rig;

/// Marks the camera that default wiring targets: trauma events land on its
/// ledger and the debug overlay reads its rig. The tracking systems
/// themselves work on any entity with the right components.
#[derive(Component, Default)]
pub struct MainCamera;

/// Registers the tracking-camera driver.
///
/// Per frame, in order: mirror wall lifecycles into the ordered registry,
/// route queued trauma events, blend/contain/smooth the rig, then tick and
/// apply shake on top of the driven transform.
pub struct TrackingCameraPlugin;

impl Plugin for TrackingCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<TraumaEvent>()
            .init_resource::<WallRegistry>()
            .add_systems(
                Update,
                (
                    sync_wall_registry,
                    apply_trauma_events,
                    drive_camera_rig,
                    apply_camera_shake,
                )
                    .chain(),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{CameraRig, CameraShake, CameraWall, FocalPoint, PrimaryTarget};
    use bevy::time::TimeUpdateStrategy;
    use std::time::Duration;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(TrackingCameraPlugin)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(
                16,
            )));
        app
    }

    #[test]
    fn test_rig_converges_toward_focal_point() {
        let mut app = test_app();
        let camera = app
            .world_mut()
            .spawn((Transform::default(), CameraRig::new(Vec2::new(40.0, 30.0))))
            .id();
        app.world_mut().spawn((
            FocalPoint::new(1.0, 10_000.0),
            PrimaryTarget,
            GlobalTransform::from_translation(Vec3::new(100.0, 0.0, 0.0)),
        ));

        for _ in 0..12 {
            app.update();
        }

        let rig = app.world().entity(camera).get::<CameraRig>().unwrap();
        assert!(rig.pan.x > 1.0);
        assert!(rig.pan.x < 100.0);
        let transform = app.world().entity(camera).get::<Transform>().unwrap();
        assert!((transform.translation.x - rig.pan.x).abs() < 1e-4);
    }

    #[test]
    fn test_trauma_event_reaches_main_camera_ledger() {
        let mut app = test_app();
        let camera = app
            .world_mut()
            .spawn((
                Transform::default(),
                CameraRig::default(),
                CameraShake::with_seed(1),
                MainCamera,
            ))
            .id();

        app.world_mut().send_event(TraumaEvent::burst(50.0));
        app.update();
        app.update();

        let shake = app.world().entity(camera).get::<CameraShake>().unwrap();
        assert!(shake.total_trauma().x > 0.0);
    }

    #[test]
    fn test_wall_registry_follows_component_lifecycle() {
        let mut app = test_app();
        let wall = app
            .world_mut()
            .spawn((
                Transform::from_xyz(200.0, 0.0, 0.0),
                CameraWall::solid(Vec2::new(50.0, 50.0)),
            ))
            .id();

        app.update();
        assert_eq!(app.world().resource::<WallRegistry>().len(), 1);

        app.world_mut().entity_mut(wall).despawn();
        app.update();
        assert_eq!(app.world().resource::<WallRegistry>().len(), 0);
    }
}
