//! Helpers for driving `bevy_panorbit_camera` from code.
//!
//! PanOrbit owns the camera transform: it recomputes it from focus, yaw, pitch
//! and radius every frame. To place the camera at an explicit position we
//! convert that position into an orbit pose and write both the current and
//! target values so its smoothing does not pull the camera back.

use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

pub const INITIAL_CAMERA_POSITION: Vec3 = Vec3::new(-120.0, 100.0, 250.0);
pub const MIN_CAMERA_DISTANCE: f32 = 20.0;
pub const MAX_CAMERA_DISTANCE: f32 = 600.0;
/// Fraction of the remaining motion kept each frame (0 = no damping).
pub const CAMERA_SMOOTHNESS: f32 = 0.95;

/// Marks the camera that renders the scene and drives picking.
#[derive(Component)]
pub struct MainCamera;

/// Orbit description of a camera position relative to a focus point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitPose {
    pub focus: Vec3,
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl OrbitPose {
    /// Compute pitch and yaw the way PanOrbit measures them.
    pub fn from_position(position: Vec3, focus: Vec3) -> Self {
        let offset = position - focus;
        let radius = offset.length();
        let direction = offset.normalize_or(Vec3::Z);
        Self {
            focus,
            radius,
            yaw: direction.x.atan2(direction.z),
            pitch: direction.y.clamp(-1.0, 1.0).asin(),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.focus
            + Vec3::new(
                self.radius * self.pitch.cos() * self.yaw.sin(),
                self.radius * self.pitch.sin(),
                self.radius * self.pitch.cos() * self.yaw.cos(),
            )
    }

    /// Force the camera to this pose on the next PanOrbit update.
    pub fn apply(&self, pan_orbit: &mut PanOrbitCamera, transform: &mut Transform) {
        pan_orbit.focus = self.focus;
        pan_orbit.target_focus = self.focus;

        pan_orbit.target_radius = self.radius;
        pan_orbit.target_yaw = self.yaw;
        pan_orbit.target_pitch = self.pitch;

        pan_orbit.radius = Some(self.radius);
        pan_orbit.yaw = Some(self.yaw);
        pan_orbit.pitch = Some(self.pitch);
        pan_orbit.force_update = true;

        // Keep the transform in sync for systems that read it this frame.
        transform.translation = self.position();
        transform.look_at(self.focus, Vec3::Y);
    }
}

/// Build the PanOrbit controller for the initial view of the whole system.
pub fn initial_pan_orbit() -> PanOrbitCamera {
    let pose = OrbitPose::from_position(INITIAL_CAMERA_POSITION, Vec3::ZERO);
    PanOrbitCamera {
        focus: pose.focus,
        radius: Some(pose.radius),
        yaw: Some(pose.yaw),
        pitch: Some(pose.pitch),
        zoom_lower_limit: MIN_CAMERA_DISTANCE,
        zoom_upper_limit: Some(MAX_CAMERA_DISTANCE),
        orbit_smoothness: CAMERA_SMOOTHNESS,
        pan_smoothness: CAMERA_SMOOTHNESS,
        zoom_smoothness: CAMERA_SMOOTHNESS,
        force_update: true,
        ..default()
    }
}
