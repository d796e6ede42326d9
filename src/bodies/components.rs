//! Components for the bodies in the scene graph

use bevy::prelude::*;

/// Visible sphere of a sun, planet or satellite
#[derive(Component, Clone, Debug)]
pub struct Body {
    pub name: &'static str,
    pub radius: f32,
}

/// Marks the body nodes of the planets; these are the hover/click targets.
#[derive(Component)]
pub struct Planet;

#[derive(Component)]
pub struct Sun;

#[derive(Component)]
pub struct Ring;

#[derive(Component)]
pub struct Atmosphere;

/// Spin of a body node about its own (tilted) axis
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Spin {
    /// Radians per frame at speed 1
    pub rate: f32,
    pub angle: f32,
}

/// Revolution of a pivot node about its parent's Y axis
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Orbit {
    /// Radians per frame at speed 1
    pub rate: f32,
    pub angle: f32,
    /// Distance of the orbiting body from the pivot.
    pub radius: f32,
}

/// Fixed tilt of the spin axis, in radians about Z
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct AxialTilt(pub f32);

impl Spin {
    pub fn rotation(&self, tilt: f32) -> Quat {
        Quat::from_rotation_z(tilt) * Quat::from_rotation_y(self.angle)
    }
}

impl Orbit {
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.angle)
    }
}
