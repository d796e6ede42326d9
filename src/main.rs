use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_egui::EguiPlugin;
use bevy_panorbit_camera::PanOrbitCameraPlugin;

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod bodies;
mod core;
mod interaction;
mod orbital;
mod ui;
mod visualization;

use bodies::BodiesPlugin;
use core::orbit_camera::{INITIAL_CAMERA_POSITION, initial_pan_orbit};
use core::{MainCamera, SceneSettings};
use interaction::InteractionPlugin;
use orbital::OrbitalPlugin;
use ui::UiPlugin;
use visualization::VisualizationPlugin;

/// Far plane large enough for the starfield shell
const CAMERA_FAR: f32 = 4000.0;

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 45.0_f32.to_radians(),
            near: 0.1,
            far: CAMERA_FAR,
            ..default()
        }),
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(Color::BLACK),
            ..default()
        },
        initial_pan_orbit(),
        MainCamera,
        Transform::from_translation(INITIAL_CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        Name::new("Main Camera"),
    ));
}

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Solar System".to_string(),
            present_mode: PresentMode::AutoVsync,
            fit_canvas_to_parent: true,
            ..default()
        }),
        ..default()
    }));

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    // Loaded before the plugins so they can seed their resources from it.
    app.insert_resource(SceneSettings::load_or_default());

    app.add_plugins(EguiPlugin::default());
    app.add_plugins(PanOrbitCameraPlugin);

    app.add_plugins(OrbitalPlugin);
    app.add_plugins(BodiesPlugin);
    app.add_plugins(VisualizationPlugin);
    app.add_plugins(UiPlugin);
    app.add_plugins(InteractionPlugin);
    app.add_systems(Startup, setup_camera);

    app.run();
}
