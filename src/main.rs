use bevy::prelude::*;
use leafwing_input_manager::prelude::*;
use rand::Rng;

use spyglass::components::{
    CameraRig, CameraShake, CameraWall, FocalPoint, PrimaryTarget, ReferenceMode, TraumaMode,
};
use spyglass::events::TraumaEvent;
use spyglass::plugins::core::{MainCamera, TrackingCameraPlugin};
use spyglass::plugins::debug_ui::CameraDebugPlugin;

#[derive(Actionlike, PartialEq, Eq, Clone, Copy, Hash, Debug, Reflect)]
enum DemoAction {
    #[actionlike(DualAxis)]
    Move,
    Rumble,
    Quake,
}

fn demo_input_map() -> InputMap<DemoAction> {
    let mut input_map = InputMap::default();
    input_map.insert_dual_axis(DemoAction::Move, VirtualDPad::wasd());
    input_map.insert(DemoAction::Rumble, KeyCode::Space);
    input_map.insert(DemoAction::Quake, KeyCode::KeyE);
    input_map
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(InputManagerPlugin::<DemoAction>::default())
        .add_plugins(TrackingCameraPlugin)
        .add_plugins(CameraDebugPlugin)
        .add_systems(Startup, setup_scene)
        .add_systems(Update, (move_avatar, fire_trauma))
        .run();
}

const AVATAR_SPEED: f32 = 420.0;

fn setup_scene(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Transform::from_xyz(0.0, 0.0, 100.0),
        MainCamera,
        CameraRig::new(Vec2::new(1280.0, 720.0))
            .with_reference_mode(ReferenceMode::Primary)
            .with_responsiveness(3.0),
        CameraShake::new(),
    ));

    // The avatar is the rig's primary target.
    commands.spawn((
        Sprite::from_color(Color::srgb(0.92, 0.85, 0.2), Vec2::splat(40.0)),
        Transform::from_xyz(0.0, 0.0, 1.0),
        FocalPoint::new(500.0, 1.0),
        PrimaryTarget,
        InputManagerBundle::with_map(demo_input_map()),
    ));

    // Points of interest that tug the camera and zoom in as the avatar
    // wanders near.
    let mut rng = rand::thread_rng();
    for _ in 0..6 {
        let position = Vec2::new(
            rng.gen_range(-1200.0..1200.0),
            rng.gen_range(-700.0..700.0),
        );
        commands.spawn((
            Sprite::from_color(Color::srgb(0.3, 0.55, 0.9), Vec2::splat(24.0)),
            Transform::from_translation(position.extend(0.5)),
            FocalPoint::new(rng.gen_range(80.0..200.0), 450.0)
                .with_zoom(rng.gen_range(1.1..1.5))
                .with_speed(1.5),
        ));
    }

    // Arena bounds: thick slabs outside the play area keep the view inside.
    let bounds = [
        (Vec2::new(0.0, 1350.0), Vec2::new(4400.0, 700.0)),
        (Vec2::new(0.0, -1350.0), Vec2::new(4400.0, 700.0)),
        (Vec2::new(2100.0, 0.0), Vec2::new(700.0, 4400.0)),
        (Vec2::new(-2100.0, 0.0), Vec2::new(700.0, 4400.0)),
    ];
    for (position, size) in bounds {
        commands.spawn((
            Sprite::from_color(Color::srgba(0.8, 0.25, 0.25, 0.25), size),
            Transform::from_translation(position.extend(0.2)),
            CameraWall::solid(size),
        ));
    }

    // An interior pillar the camera slides around horizontally.
    let pillar_size = Vec2::new(260.0, 900.0);
    commands.spawn((
        Sprite::from_color(Color::srgba(0.8, 0.5, 0.25, 0.3), pillar_size),
        Transform::from_xyz(900.0, 0.0, 0.2),
        CameraWall::horizontal(pillar_size),
    ));
}

fn move_avatar(
    time: Res<Time>,
    mut query: Query<(&ActionState<DemoAction>, &mut Transform), With<PrimaryTarget>>,
) {
    let Ok((action_state, mut transform)) = query.get_single_mut() else {
        return;
    };
    let direction = action_state.axis_pair(&DemoAction::Move);
    if direction != Vec2::ZERO {
        let step = direction.normalize_or_zero() * AVATAR_SPEED * time.delta_secs();
        transform.translation.x += step.x;
        transform.translation.y += step.y;
    }
}

fn fire_trauma(
    query: Query<&ActionState<DemoAction>, With<PrimaryTarget>>,
    mut events: EventWriter<TraumaEvent>,
) {
    let Ok(action_state) = query.get_single() else {
        return;
    };
    if action_state.just_pressed(&DemoAction::Rumble) {
        events.send(TraumaEvent::burst(35.0));
    }
    if action_state.just_pressed(&DemoAction::Quake) {
        events.send(TraumaEvent::from_source(
            "quake",
            Vec2::new(70.0, 25.0),
            TraumaMode::KeepMax,
        ));
    }
}
