//! Starfield backdrop with a slow twinkle

use bevy::light::NotShadowCaster;
use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::SceneSettings;

const STAR_BASE_SIZE: f32 = 0.7;
const STAR_TWINKLE_AMPLITUDE: f32 = 0.3;
/// Angular frequency of the twinkle in radians per second.
const STAR_TWINKLE_RATE: f32 = 5.0;
const STAR_OPACITY: f32 = 0.8;

#[derive(Component)]
pub struct Star;

/// Current apparent star size, shared by every star
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct StarField {
    pub size: f32,
}

impl Default for StarField {
    fn default() -> Self {
        Self {
            size: STAR_BASE_SIZE,
        }
    }
}

/// Star size at `seconds` of wall-clock time
pub fn twinkle_size(seconds: f32) -> f32 {
    STAR_BASE_SIZE + STAR_TWINKLE_AMPLITUDE * (seconds * STAR_TWINKLE_RATE).sin()
}

/// Uniformly scattered positions inside a cube of edge `spread` centered on the origin
pub fn star_positions(count: usize, spread: f32, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    let half = spread * 0.5;
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.random_range(-half..half),
                rng.random_range(-half..half),
                rng.random_range(-half..half),
            )
        })
        .collect()
}

pub fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<SceneSettings>,
) {
    // Unit-diameter sphere; the twinkle scales it to the star size.
    let mesh = meshes.add(Sphere::new(0.5).mesh().uv(6, 4));
    let material = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, STAR_OPACITY),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });

    let positions = star_positions(settings.star_count, settings.star_spread, settings.star_seed);
    let count = positions.len();
    commands.spawn_batch(positions.into_iter().map(move |position| {
        (
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(position).with_scale(Vec3::splat(STAR_BASE_SIZE)),
            Star,
            NotShadowCaster,
        )
    }));
    info!("Spawned {} stars", count);
}

/// Runs whether or not the animation is paused; the twinkle follows real time.
pub fn twinkle_stars(
    time: Res<Time<Real>>,
    mut field: ResMut<StarField>,
    mut stars: Query<&mut Transform, With<Star>>,
) {
    field.size = twinkle_size(time.elapsed_secs());
    let scale = Vec3::splat(field.size);
    for mut transform in &mut stars {
        transform.scale = scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twinkle_stays_in_range() {
        for i in 0..200 {
            let size = twinkle_size(i as f32 * 0.037);
            assert!(size >= STAR_BASE_SIZE - STAR_TWINKLE_AMPLITUDE - 1e-6);
            assert!(size <= STAR_BASE_SIZE + STAR_TWINKLE_AMPLITUDE + 1e-6);
        }
        assert!((twinkle_size(0.0) - STAR_BASE_SIZE).abs() < 1e-6);
    }

    #[test]
    fn test_star_positions_are_seeded_and_bounded() {
        let a = star_positions(500, 2000.0, 7);
        let b = star_positions(500, 2000.0, 7);
        let c = star_positions(500, 2000.0, 8);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.iter().all(|p| p.abs().max_element() <= 1000.0));
    }

    #[test]
    fn test_twinkle_applies_to_every_star() {
        let mut app = App::new();
        app.init_resource::<Time<Real>>()
            .init_resource::<StarField>()
            .add_systems(Update, twinkle_stars);
        let stars: Vec<Entity> = (0..3)
            .map(|i| app.world_mut().spawn((Transform::from_xyz(i as f32, 0.0, 0.0), Star)).id())
            .collect();
        let other = app.world_mut().spawn(Transform::default()).id();

        app.update();

        let size = app.world().resource::<StarField>().size;
        for star in stars {
            let transform = app.world().get::<Transform>(star).unwrap();
            assert_eq!(transform.scale, Vec3::splat(size));
        }
        assert_eq!(app.world().get::<Transform>(other).unwrap().scale, Vec3::ONE);
    }
}
