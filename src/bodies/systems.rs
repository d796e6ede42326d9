//! Scene graph construction for the sun, planets, rings and satellites

use std::f32::consts::FRAC_PI_2;

use bevy::image::ImageLoaderSettings;
use bevy::light::NotShadowCaster;
use bevy::prelude::*;

use crate::bodies::components::{Atmosphere, AxialTilt, Body, Orbit, Planet, Ring, Spin, Sun};
use crate::bodies::descriptors::{
    AtmosphereDescriptor, PLANETS, PlanetDescriptor, RingDescriptor, SUN_NAME, SUN_RADIUS,
    SUN_TEXTURE, SatelliteDescriptor,
};
use crate::core::SceneSettings;
use crate::visualization::orbit_paths::{orbit_path_material, spawn_orbit_path};

const SPHERE_SECTORS: u32 = 64;
const SPHERE_STACKS: u32 = 64;
const RING_RESOLUTION: u32 = 64;
const RING_OPACITY: f32 = 0.8;

/// Where body textures come from
///
/// Implemented by the `AssetServer`; loads are asynchronous and materials
/// render untextured until the image arrives.
pub trait TextureSource {
    /// sRGB color texture
    fn color_texture(&self, path: &'static str) -> Handle<Image>;
    /// Linear data texture such as a normal map
    fn data_texture(&self, path: &'static str) -> Handle<Image>;
}

impl TextureSource for AssetServer {
    fn color_texture(&self, path: &'static str) -> Handle<Image> {
        self.load(path)
    }

    fn data_texture(&self, path: &'static str) -> Handle<Image> {
        self.load_with_settings(path, |settings: &mut ImageLoaderSettings| {
            settings.is_srgb = false;
        })
    }
}

/// Entities spawned for one planet
#[derive(Clone, Debug)]
pub struct PlanetInstance {
    pub name: &'static str,
    pub pivot: Entity,
    pub body: Entity,
    pub ring: Option<Entity>,
    pub atmosphere: Option<Entity>,
    pub satellite_pivots: Vec<Entity>,
    pub orbit_path: Entity,
}

/// Startup system spawning every body from the descriptor table
pub fn spawn_solar_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    settings: Res<SceneSettings>,
) {
    let planets = build_solar_system(
        &mut commands,
        &mut meshes,
        &mut materials,
        &*asset_server,
        &settings,
    );

    let satellites: usize = planets.iter().map(|p| p.satellite_pivots.len()).sum();
    let rings = planets.iter().filter(|p| p.ring.is_some()).count();
    info!(
        "Spawned sun, {} planets, {} rings and {} satellites",
        planets.len(),
        rings,
        satellites
    );
}

/// Spawn the sun and every planet with its orbit path
pub fn build_solar_system(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    textures: &impl TextureSource,
    settings: &SceneSettings,
) -> Vec<PlanetInstance> {
    spawn_sun(commands, meshes, materials, textures);

    let path_material = materials.add(orbit_path_material());

    PLANETS
        .iter()
        .map(|descriptor| {
            let orbit_path = spawn_orbit_path(
                commands,
                meshes,
                path_material.clone(),
                descriptor.name,
                descriptor.distance_from_sun,
                settings.show_orbit_paths,
            );
            spawn_planet(commands, meshes, materials, textures, descriptor, orbit_path)
        })
        .collect()
}

fn spawn_sun(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    textures: &impl TextureSource,
) -> Entity {
    commands
        .spawn((
            Mesh3d(meshes.add(sphere_mesh(SUN_RADIUS, false))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color_texture: Some(textures.color_texture(SUN_TEXTURE)),
                unlit: true,
                ..default()
            })),
            Transform::default(),
            Body {
                name: SUN_NAME,
                radius: SUN_RADIUS,
            },
            Sun,
            // The point light sits inside this sphere.
            NotShadowCaster,
            Name::new(SUN_NAME),
        ))
        .id()
}

/// Spawn the pivot, body and optional ring, atmosphere and satellites of one planet
fn spawn_planet(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    textures: &impl TextureSource,
    descriptor: &PlanetDescriptor,
    orbit_path: Entity,
) -> PlanetInstance {
    let offset = body_offset(descriptor);

    let pivot = commands
        .spawn((
            Transform::default(),
            Visibility::default(),
            Orbit {
                rate: descriptor.orbit_speed,
                angle: 0.0,
                radius: descriptor.distance_from_sun,
            },
            Name::new(format!("{} pivot", descriptor.name)),
        ))
        .id();

    let spin = Spin {
        rate: descriptor.rotation_speed,
        angle: 0.0,
    };
    let material = StandardMaterial {
        base_color_texture: Some(textures.color_texture(descriptor.texture)),
        normal_map_texture: descriptor.normal_map.map(|path| textures.data_texture(path)),
        perceptual_roughness: 1.0,
        metallic: 0.0,
        ..default()
    };
    let body = commands
        .spawn((
            Mesh3d(meshes.add(sphere_mesh(descriptor.size, descriptor.normal_map.is_some()))),
            MeshMaterial3d(materials.add(material)),
            Transform::from_translation(offset).with_rotation(spin.rotation(descriptor.axial_tilt)),
            Body {
                name: descriptor.name,
                radius: descriptor.size,
            },
            Planet,
            spin,
            AxialTilt(descriptor.axial_tilt),
            Name::new(descriptor.name),
            ChildOf(pivot),
        ))
        .id();

    let ring = descriptor
        .ring
        .map(|ring| spawn_ring(commands, meshes, materials, textures, &ring, pivot, offset));

    let atmosphere = descriptor
        .atmosphere
        .map(|atmosphere| spawn_atmosphere(commands, meshes, materials, &atmosphere, body));

    let satellite_pivots = descriptor
        .satellites
        .iter()
        .map(|satellite| spawn_satellite(commands, meshes, materials, textures, satellite, pivot, offset))
        .collect();

    PlanetInstance {
        name: descriptor.name,
        pivot,
        body,
        ring,
        atmosphere,
        satellite_pivots,
        orbit_path,
    }
}

/// Position of a planet's body node within its pivot
pub fn body_offset(descriptor: &PlanetDescriptor) -> Vec3 {
    Vec3::new(descriptor.distance_from_sun, 0.0, 0.0)
}

fn spawn_ring(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    textures: &impl TextureSource,
    ring: &RingDescriptor,
    pivot: Entity,
    offset: Vec3,
) -> Entity {
    let mesh = Annulus::new(ring.inner_radius, ring.outer_radius)
        .mesh()
        .resolution(RING_RESOLUTION)
        .build();

    commands
        .spawn((
            Mesh3d(meshes.add(mesh)),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgba(1.0, 1.0, 1.0, RING_OPACITY),
                base_color_texture: Some(textures.color_texture(ring.texture)),
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                double_sided: true,
                cull_mode: None,
                ..default()
            })),
            // Annulus meshes lie in the XY plane; lay it flat in the orbital plane.
            Transform::from_translation(offset).with_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
            Ring,
            NotShadowCaster,
            Name::new("Ring"),
            ChildOf(pivot),
        ))
        .id()
}

fn spawn_atmosphere(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    atmosphere: &AtmosphereDescriptor,
    body: Entity,
) -> Entity {
    let [r, g, b] = atmosphere.color;
    commands
        .spawn((
            Mesh3d(meshes.add(sphere_mesh(atmosphere.radius, false))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgba(r, g, b, atmosphere.opacity),
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                ..default()
            })),
            Transform::default(),
            Atmosphere,
            NotShadowCaster,
            Name::new("Atmosphere"),
            ChildOf(body),
        ))
        .id()
}

/// Satellites orbit a sub-pivot placed at the parent body, so they follow its revolution.
fn spawn_satellite(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    textures: &impl TextureSource,
    satellite: &SatelliteDescriptor,
    planet_pivot: Entity,
    offset: Vec3,
) -> Entity {
    let sub_pivot = commands
        .spawn((
            Transform::from_translation(offset),
            Visibility::default(),
            Orbit {
                rate: satellite.orbit_speed,
                angle: 0.0,
                radius: satellite.distance,
            },
            Name::new(format!("{} pivot", satellite.name)),
            ChildOf(planet_pivot),
        ))
        .id();

    commands.spawn((
        Mesh3d(meshes.add(sphere_mesh(satellite.size, false))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(textures.color_texture(satellite.texture)),
            perceptual_roughness: 1.0,
            ..default()
        })),
        Transform::from_xyz(satellite.distance, 0.0, 0.0),
        Body {
            name: satellite.name,
            radius: satellite.size,
        },
        Name::new(satellite.name),
        ChildOf(sub_pivot),
    ));

    sub_pivot
}

fn sphere_mesh(radius: f32, with_tangents: bool) -> Mesh {
    let mut mesh = Sphere::new(radius).mesh().uv(SPHERE_SECTORS, SPHERE_STACKS);
    // Normal maps need tangents.
    if with_tangents && let Err(err) = mesh.generate_tangents() {
        warn!("Failed to generate sphere tangents: {}", err);
    }
    mesh
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    /// Hands out empty handles; the tests never render.
    pub(crate) struct NoTextures;

    impl TextureSource for NoTextures {
        fn color_texture(&self, _path: &'static str) -> Handle<Image> {
            Handle::default()
        }

        fn data_texture(&self, _path: &'static str) -> Handle<Image> {
            Handle::default()
        }
    }

    pub(crate) fn build_test_scene(world: &mut World) -> Vec<PlanetInstance> {
        world.init_resource::<Assets<Mesh>>();
        world.init_resource::<Assets<StandardMaterial>>();
        world
            .run_system_once(
                |mut commands: Commands,
                 mut meshes: ResMut<Assets<Mesh>>,
                 mut materials: ResMut<Assets<StandardMaterial>>| {
                    build_solar_system(
                        &mut commands,
                        &mut meshes,
                        &mut materials,
                        &NoTextures,
                        &SceneSettings::default(),
                    )
                },
            )
            .expect("scene builds")
    }
}
