//! Orbital motion module
//!
//! This module owns the per-frame animation order: body motion first, then
//! decorative updates, then the camera.

use bevy::prelude::*;

pub mod motion;

pub use motion::advance_motion;

/// Ordered stages of the per-frame update
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSystems {
    /// Spin and orbit angles
    Motion,
    /// Starfield twinkle
    Decor,
    /// Picking and the zoom fly-to
    Camera,
}

/// Plugin for orbital motion
pub struct OrbitalPlugin;

impl Plugin for OrbitalPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                FrameSystems::Motion,
                FrameSystems::Decor,
                FrameSystems::Camera,
            )
                .chain(),
        )
        .add_systems(Update, advance_motion.in_set(FrameSystems::Motion));
    }
}
