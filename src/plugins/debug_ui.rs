use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};

use crate::components::focal_point::{FocalPoint, PrimaryTarget};
use crate::components::rig::CameraRig;
use crate::components::shake::CameraShake;
use crate::components::wall::{CameraWall, WallMode};
use crate::plugins::core::MainCamera;
use crate::resources::registry::WallRegistry;

/// Editor-style overlay for tuning the tracked camera: an egui panel with
/// live rig/trauma readouts plus gizmo outlines for walls, focal radii, and
/// the containment view rectangle.
pub struct CameraDebugPlugin;

impl Plugin for CameraDebugPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<EguiPlugin>() {
            app.add_plugins(EguiPlugin);
        }

        app.init_resource::<CameraDebugConfig>().add_systems(
            Update,
            (
                camera_debug_panel,
                draw_wall_gizmos,
                draw_focal_gizmos,
                draw_view_rect_gizmo,
            ),
        );
    }
}

/// Toggles for the overlay systems.
#[derive(Resource, Debug)]
pub struct CameraDebugConfig {
    pub show_walls: bool,
    pub show_focal_points: bool,
    pub show_view_rect: bool,
}

impl Default for CameraDebugConfig {
    fn default() -> Self {
        Self {
            show_walls: true,
            show_focal_points: true,
            show_view_rect: false,
        }
    }
}

fn camera_debug_panel(
    mut contexts: EguiContexts,
    mut config: ResMut<CameraDebugConfig>,
    registry: Res<WallRegistry>,
    rig_query: Query<(&CameraRig, Option<&CameraShake>), With<MainCamera>>,
) {
    egui::Window::new("Camera Debug").show(contexts.ctx_mut(), |ui| {
        ui.checkbox(&mut config.show_walls, "Show Walls");
        ui.checkbox(&mut config.show_focal_points, "Show Focal Points");
        ui.checkbox(&mut config.show_view_rect, "Show View Rect");
        ui.separator();

        ui.label(format!("Registered walls: {}", registry.len()));

        let Ok((rig, shake)) = rig_query.get_single() else {
            ui.label("No MainCamera rig");
            return;
        };

        ui.heading("Rig");
        ui.label(format!("Pan: ({:.1}, {:.1})", rig.pan.x, rig.pan.y));
        ui.label(format!("Zoom: {:.3}  Pull: {:.3}", rig.zoom, rig.pull));
        ui.label(format!("Reference: {:?}", rig.reference_mode));

        if let Some(shake) = shake {
            ui.separator();
            ui.heading("Trauma");
            let level = shake.normalized();
            ui.add(
                egui::ProgressBar::new((level.x + level.y) * 0.5)
                    .text(format!("level ({:.2}, {:.2})", level.x, level.y)),
            );
            for (name, value) in shake.iter_sources() {
                ui.label(format!("{}: ({:.0}, {:.0})", name, value.x, value.y));
            }
        }
    });
}

fn wall_color(mode: WallMode) -> Color {
    match mode {
        WallMode::Solid => Color::srgb(0.9, 0.3, 0.3),
        WallMode::Horizontal => Color::srgb(0.9, 0.6, 0.2),
        WallMode::Vertical => Color::srgb(0.9, 0.9, 0.3),
        WallMode::None => Color::srgb(0.5, 0.5, 0.5),
    }
}

fn draw_wall_gizmos(
    config: Res<CameraDebugConfig>,
    walls: Query<(&CameraWall, &GlobalTransform)>,
    mut gizmos: Gizmos,
) {
    if !config.show_walls {
        return;
    }
    for (wall, transform) in &walls {
        let rect = wall.world_rect(transform);
        gizmos.rect_2d(rect.center(), rect.size(), wall_color(wall.mode));
    }
}

fn draw_focal_gizmos(
    config: Res<CameraDebugConfig>,
    points: Query<(&FocalPoint, &GlobalTransform, Has<PrimaryTarget>)>,
    mut gizmos: Gizmos,
) {
    if !config.show_focal_points {
        return;
    }
    for (point, transform, is_primary) in &points {
        let position = transform.translation().truncate();
        let color = if is_primary {
            Color::srgb(0.3, 0.9, 0.4)
        } else {
            Color::srgb(0.3, 0.6, 0.9)
        };
        gizmos.circle_2d(position, point.max_distance, color);
        gizmos.circle_2d(position, 3.0, color);
    }
}

fn draw_view_rect_gizmo(
    config: Res<CameraDebugConfig>,
    rigs: Query<&CameraRig, With<MainCamera>>,
    mut gizmos: Gizmos,
) {
    if !config.show_view_rect {
        return;
    }
    let Ok(rig) = rigs.get_single() else {
        return;
    };
    gizmos.rect_2d(rig.pan, rig.view_size, Color::srgb(0.9, 0.9, 0.9));
}
