//! Per-frame spin and orbit updates

use bevy::prelude::*;

use crate::bodies::{AxialTilt, Orbit, Spin};
use crate::ui::SimulationOptions;

/// Angle increment for one frame at the given speed multiplier
pub fn frame_step(rate: f32, speed: f32) -> f32 {
    rate * speed
}

/// Advance every spin and orbit angle by one frame unless paused
pub fn advance_motion(
    options: Res<SimulationOptions>,
    mut spins: Query<(&mut Spin, &mut Transform, Option<&AxialTilt>), Without<Orbit>>,
    mut orbits: Query<(&mut Orbit, &mut Transform), Without<Spin>>,
) {
    if options.paused {
        return;
    }

    for (mut spin, mut transform, tilt) in &mut spins {
        spin.angle += frame_step(spin.rate, options.speed);
        transform.rotation = spin.rotation(tilt.map_or(0.0, |t| t.0));
    }

    for (mut orbit, mut transform) in &mut orbits {
        orbit.angle += frame_step(orbit.rate, options.speed);
        transform.rotation = orbit.rotation();
    }
}
