//! Sun point light and ambient fill

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

use crate::core::SceneSettings;
use crate::ui::OptionChanged;

/// Lumens emitted per unit on the panel's intensity slider.
pub const LUMENS_PER_INTENSITY_UNIT: f32 = 2.0e7;
/// The outermost orbit is 216 units out; leave margin for the camera.
const SUN_LIGHT_RANGE: f32 = 1000.0;
const AMBIENT_BRIGHTNESS: f32 = 80.0;

/// Marker component for the light at the center of the sun
#[derive(Component)]
pub struct SunLight;

pub fn sun_light_lumens(intensity: f32) -> f32 {
    intensity * LUMENS_PER_INTENSITY_UNIT
}

pub fn spawn_lights(mut commands: Commands, settings: Res<SceneSettings>) {
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
        ..default()
    });

    commands.spawn((
        PointLight {
            color: Color::WHITE,
            intensity: sun_light_lumens(settings.light_intensity),
            range: SUN_LIGHT_RANGE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(Vec3::ZERO),
        SunLight,
        Name::new("Sun light"),
    ));
}

/// Observer applying the intensity slider to the sun light
pub fn apply_light_intensity(
    change: On<OptionChanged>,
    mut lights: Query<&mut PointLight, With<SunLight>>,
) {
    let OptionChanged::LightIntensity(intensity) = *change.event() else {
        return;
    };
    for mut light in &mut lights {
        light.intensity = sun_light_lumens(intensity);
    }
}
