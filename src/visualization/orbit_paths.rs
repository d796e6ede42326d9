//! Orbit path rings drawn under each planet

use std::f32::consts::TAU;

use bevy::asset::RenderAssetUsages;
use bevy::light::NotShadowCaster;
use bevy::mesh::PrimitiveTopology;
use bevy::prelude::*;

use crate::ui::OptionChanged;

/// Segments per orbit path; the strip repeats its first point to close the loop.
pub const ORBIT_PATH_SEGMENTS: usize = 128;
const ORBIT_PATH_COLOR: Color = Color::srgb(0.333, 0.333, 0.333);

/// Closed line tracing a planet's orbit
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct OrbitPath {
    pub radius: f32,
}

/// Points of a circle of `radius` in the XZ plane, first point repeated at the end
pub fn orbit_path_points(radius: f32) -> Vec<Vec3> {
    (0..=ORBIT_PATH_SEGMENTS)
        .map(|i| {
            let angle = (i % ORBIT_PATH_SEGMENTS) as f32 / ORBIT_PATH_SEGMENTS as f32 * TAU;
            Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
        })
        .collect()
}

pub fn orbit_path_mesh(radius: f32) -> Mesh {
    Mesh::new(PrimitiveTopology::LineStrip, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, orbit_path_points(radius))
}

pub fn orbit_path_material() -> StandardMaterial {
    StandardMaterial {
        base_color: ORBIT_PATH_COLOR,
        unlit: true,
        ..default()
    }
}

pub fn spawn_orbit_path(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    material: Handle<StandardMaterial>,
    body_name: &str,
    radius: f32,
    visible: bool,
) -> Entity {
    commands
        .spawn((
            Mesh3d(meshes.add(orbit_path_mesh(radius))),
            MeshMaterial3d(material),
            Transform::default(),
            path_visibility(visible),
            OrbitPath { radius },
            NotShadowCaster,
            Name::new(format!("{} orbit path", body_name)),
        ))
        .id()
}

fn path_visibility(visible: bool) -> Visibility {
    if visible {
        Visibility::Visible
    } else {
        Visibility::Hidden
    }
}

/// Observer showing or hiding every orbit path when the option changes
pub fn apply_orbit_path_visibility(
    change: On<OptionChanged>,
    mut paths: Query<&mut Visibility, With<OrbitPath>>,
) {
    let OptionChanged::ShowOrbitPaths(visible) = *change.event() else {
        return;
    };
    for mut visibility in &mut paths {
        *visibility = path_visibility(visible);
    }
    debug!("Orbit paths {}", if visible { "shown" } else { "hidden" });
}
