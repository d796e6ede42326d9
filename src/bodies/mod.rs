//! Sun, planets and satellites
//!
//! The descriptor table drives scene construction; the components carry the
//! spin and orbit state that the animation advances each frame.

use bevy::prelude::*;

pub mod components;
pub mod descriptors;
pub mod systems;

pub use components::{Atmosphere, AxialTilt, Body, Orbit, Planet, Ring, Spin, Sun};
pub use descriptors::{PLANETS, PlanetDescriptor};
pub use systems::{PlanetInstance, TextureSource, build_solar_system, spawn_solar_system};

/// Plugin spawning the bodies of the solar system
pub struct BodiesPlugin;

impl Plugin for BodiesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_solar_system);
    }
}
