//! Visualization module
//!
//! Lighting, orbit paths and the starfield backdrop.

use bevy::prelude::*;

use crate::orbital::FrameSystems;

pub mod lighting;
pub mod orbit_paths;
pub mod starfield;

pub use lighting::{SunLight, apply_light_intensity, spawn_lights};
pub use orbit_paths::{OrbitPath, apply_orbit_path_visibility};
pub use starfield::{Star, StarField, spawn_starfield, twinkle_stars};

/// Plugin for visualization systems
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StarField>()
            .add_observer(apply_light_intensity)
            .add_observer(apply_orbit_path_visibility)
            .add_systems(Startup, (spawn_lights, spawn_starfield))
            .add_systems(Update, twinkle_stars.in_set(FrameSystems::Decor));
    }
}
