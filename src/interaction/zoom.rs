//! Click-to-zoom camera flight
//!
//! A click on a planet starts a straight-line flight from the current camera
//! position to a point offset from the planet. Each frame advances the
//! interpolation by a fixed step while the look-at point eases toward the end
//! point. Clicks during a flight are ignored.

use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use crate::bodies::{Body, Planet};
use crate::core::{MainCamera, OrbitPose, SceneSettings};
use crate::interaction::picking::{PickTarget, PointerRay, nearest_hit, planet_targets};
use crate::ui::PanelFocus;

/// Progress within this distance of 1 counts as arrived
pub const ZOOM_EPSILON: f32 = 1e-4;
/// Fraction of the remaining distance the look-at point covers per frame
pub const FOCUS_EASE: f32 = 0.1;

/// Flight step and end-point offset, taken from the scene settings
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ZoomConfig {
    pub step: f32,
    pub standoff: Vec3,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self::from(&SceneSettings::default())
    }
}

impl From<&SceneSettings> for ZoomConfig {
    fn from(settings: &SceneSettings) -> Self {
        Self {
            step: settings.zoom_step,
            standoff: settings.zoom_standoff(),
        }
    }
}

#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    pub active: bool,
    pub start: Vec3,
    pub end: Vec3,
    pub progress: f32,
}

/// Result of advancing a flight by one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomFrame {
    InFlight(Vec3),
    Arrived(Vec3),
}

impl ZoomFrame {
    pub fn position(self) -> Vec3 {
        match self {
            ZoomFrame::InFlight(position) | ZoomFrame::Arrived(position) => position,
        }
    }
}

impl ZoomState {
    /// Start a flight toward `target`. Returns false if one is already running.
    pub fn begin(&mut self, camera: Vec3, target: Vec3, standoff: Vec3) -> bool {
        if self.active {
            return false;
        }
        *self = Self {
            active: true,
            start: camera,
            end: target + standoff,
            progress: 0.0,
        };
        true
    }

    pub fn advance(&mut self, step: f32) -> Option<ZoomFrame> {
        if !self.active {
            return None;
        }

        self.progress += step;
        if self.progress >= 1.0 - ZOOM_EPSILON {
            self.progress = 1.0;
            self.active = false;
            return Some(ZoomFrame::Arrived(self.end));
        }
        Some(ZoomFrame::InFlight(self.start.lerp(self.end, self.progress)))
    }
}

/// Begin a flight toward the nearest hit, if any. Returns the hit target.
pub fn zoom_to_hit<'a>(
    zoom: &mut ZoomState,
    config: &ZoomConfig,
    camera_position: Vec3,
    ray: Ray3d,
    targets: impl IntoIterator<Item = PickTarget<'a>>,
) -> Option<PickTarget<'a>> {
    if zoom.active {
        return None;
    }
    let hit = nearest_hit(ray, targets)?;
    zoom.begin(camera_position, hit.center, config.standoff)
        .then_some(hit)
}

/// Start a flight on left-button release over a planet
pub fn start_zoom_on_click(
    buttons: Res<ButtonInput<MouseButton>>,
    pointer: Res<PointerRay>,
    cameras: Query<&GlobalTransform, With<MainCamera>>,
    planets: Query<(Entity, &Body, &GlobalTransform), With<Planet>>,
    focus: Res<PanelFocus>,
    config: Res<ZoomConfig>,
    mut zoom: ResMut<ZoomState>,
) {
    if !buttons.just_released(MouseButton::Left) || focus.wants_pointer || zoom.active {
        return;
    }

    let Some(ray) = pointer.ray else {
        return;
    };
    let Ok(camera_transform) = cameras.single() else {
        return;
    };

    if let Some(hit) = zoom_to_hit(
        &mut zoom,
        &config,
        camera_transform.translation(),
        ray,
        planet_targets(&planets),
    ) {
        info!("Zooming to {} at {:?}", hit.name, hit.center);
    }
}

/// Move the camera one step along the active flight
pub fn advance_zoom(
    config: Res<ZoomConfig>,
    mut zoom: ResMut<ZoomState>,
    mut cameras: Query<(&mut PanOrbitCamera, &mut Transform), With<MainCamera>>,
) {
    if !zoom.active {
        return;
    }
    let Ok((mut pan_orbit, mut transform)) = cameras.single_mut() else {
        return;
    };
    let Some(frame) = zoom.advance(config.step) else {
        return;
    };

    let focus = pan_orbit.focus.lerp(zoom.end, FOCUS_EASE);
    OrbitPose::from_position(frame.position(), focus).apply(&mut pan_orbit, &mut transform);

    if let ZoomFrame::Arrived(position) = frame {
        debug!("Zoom finished at {:?}", position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::orbit_camera::{INITIAL_CAMERA_POSITION, initial_pan_orbit};

    const STANDOFF: Vec3 = Vec3::new(0.0, 10.0, 20.0);

    fn target(name: &str, center: Vec3, radius: f32) -> PickTarget<'_> {
        PickTarget {
            entity: Entity::PLACEHOLDER,
            name,
            center,
            radius,
        }
    }

    #[test]
    fn test_begin_sets_end_from_target_and_standoff() {
        let mut zoom = ZoomState::default();
        assert!(zoom.begin(Vec3::new(1.0, 2.0, 3.0), Vec3::new(50.0, 0.0, 0.0), STANDOFF));
        assert!(zoom.active);
        assert_eq!(zoom.start, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(zoom.end, Vec3::new(50.0, 10.0, 20.0));
        assert_eq!(zoom.progress, 0.0);
    }

    #[test]
    fn test_click_during_flight_is_ignored() {
        let mut zoom = ZoomState::default();
        zoom.begin(Vec3::ZERO, Vec3::X * 100.0, STANDOFF);
        zoom.advance(0.02);
        let before = zoom;

        assert!(!zoom.begin(Vec3::ONE, Vec3::NEG_X * 40.0, STANDOFF));
        assert_eq!(zoom, before);

        let ray = Ray3d::new(Vec3::new(-40.0, 0.0, 500.0), Dir3::NEG_Z);
        let hit = zoom_to_hit(
            &mut zoom,
            &ZoomConfig::default(),
            Vec3::ONE,
            ray,
            [target("Venus", Vec3::NEG_X * 40.0, 5.5)],
        );
        assert!(hit.is_none());
        assert_eq!(zoom, before);
    }

    #[test]
    fn test_flight_terminates_exactly_at_end() {
        let mut zoom = ZoomState::default();
        let start = Vec3::new(-120.0, 100.0, 250.0);
        zoom.begin(start, Vec3::new(62.0, 0.0, 0.0), STANDOFF);

        let mut frames = 0;
        let mut last = None;
        while let Some(frame) = zoom.advance(0.02) {
            frames += 1;
            last = Some(frame);
            assert!(frames <= 51, "flight did not terminate");
        }

        assert_eq!(frames, 50);
        assert_eq!(last, Some(ZoomFrame::Arrived(Vec3::new(62.0, 10.0, 20.0))));
        assert!(!zoom.active);
        assert_eq!(zoom.progress, 1.0);
    }

    #[test]
    fn test_intermediate_frames_lie_on_the_segment() {
        let mut zoom = ZoomState::default();
        zoom.begin(Vec3::ZERO, Vec3::new(100.0, -10.0, -20.0), STANDOFF);
        let frame = zoom.advance(0.25).unwrap();
        assert_eq!(frame, ZoomFrame::InFlight(Vec3::new(25.0, 0.0, 0.0)));
    }

    #[test]
    fn test_zoom_to_hit_targets_nearest_planet() {
        let mut zoom = ZoomState::default();
        let ray = Ray3d::new(Vec3::new(0.0, 0.0, 500.0), Dir3::NEG_Z);
        let hit = zoom_to_hit(
            &mut zoom,
            &ZoomConfig::default(),
            Vec3::new(0.0, 0.0, 500.0),
            ray,
            [
                target("Sun-side", Vec3::ZERO, 4.0),
                target("Near", Vec3::new(0.0, 0.0, 120.0), 4.0),
            ],
        )
        .unwrap();

        assert_eq!(hit.name, "Near");
        assert_eq!(zoom.end, Vec3::new(0.0, 10.0, 140.0));
    }

    // Checks the pose handed to PanOrbit each frame. In the running app
    // PanOrbit then holds the camera at least `zoom_lower_limit` from the focus.
    #[test]
    fn test_advance_zoom_hands_end_pose_to_pan_orbit() {
        let mut app = App::new();
        app.init_resource::<ZoomConfig>()
            .init_resource::<ZoomState>()
            .add_systems(Update, advance_zoom);
        let camera = app
            .world_mut()
            .spawn((
                initial_pan_orbit(),
                Transform::from_translation(INITIAL_CAMERA_POSITION),
                MainCamera,
            ))
            .id();

        let body = Vec3::new(-90.0, 0.0, 0.0);
        app.world_mut()
            .resource_mut::<ZoomState>()
            .begin(INITIAL_CAMERA_POSITION, body, STANDOFF);

        app.update();
        let first = app.world().get::<Transform>(camera).unwrap().translation;
        let expected_first = INITIAL_CAMERA_POSITION.lerp(body + STANDOFF, 0.02);
        assert!(first.distance(expected_first) < 1e-3);

        for _ in 0..60 {
            app.update();
        }

        let transform = app.world().get::<Transform>(camera).unwrap();
        assert!(transform.translation.distance(body + STANDOFF) < 1e-3);
        assert!(!app.world().resource::<ZoomState>().active);

        let pan_orbit = app.world().get::<PanOrbitCamera>(camera).unwrap();
        let end = body + STANDOFF;
        assert!(pan_orbit.focus.distance(end) < 0.01 * end.length());
    }

    struct ClickScene {
        app: App,
        camera_position: Vec3,
    }

    /// Mars straight ahead of the camera, with the pointer ray on it
    fn click_scene() -> ClickScene {
        let camera_position = Vec3::new(78.0, 0.0, 300.0);
        let mut app = App::new();
        app.init_resource::<ButtonInput<MouseButton>>()
            .init_resource::<PanelFocus>()
            .init_resource::<ZoomConfig>()
            .init_resource::<ZoomState>()
            .insert_resource(PointerRay {
                ray: Some(Ray3d::new(camera_position, Dir3::NEG_Z)),
            })
            .add_systems(Update, start_zoom_on_click);
        app.world_mut().spawn((
            GlobalTransform::from_translation(camera_position),
            MainCamera,
        ));
        app.world_mut().spawn((
            Body {
                name: "Mars",
                radius: 3.5,
            },
            Planet,
            GlobalTransform::from_translation(Vec3::new(78.0, 0.0, 0.0)),
        ));
        ClickScene {
            app,
            camera_position,
        }
    }

    fn click(scene: &mut ClickScene) {
        {
            let mut buttons = scene.app.world_mut().resource_mut::<ButtonInput<MouseButton>>();
            buttons.clear();
            buttons.press(MouseButton::Left);
            buttons.release(MouseButton::Left);
        }
        scene.app.update();
    }

    fn zoom_state(scene: &ClickScene) -> ZoomState {
        *scene.app.world().resource::<ZoomState>()
    }

    #[test]
    fn test_click_on_planet_starts_flight() {
        let mut scene = click_scene();
        click(&mut scene);

        let zoom = zoom_state(&scene);
        assert!(zoom.active);
        assert_eq!(zoom.progress, 0.0);
        assert_eq!(zoom.start, scene.camera_position);
        assert_eq!(zoom.end, Vec3::new(78.0, 0.0, 0.0) + STANDOFF);
    }

    #[test]
    fn test_press_without_release_does_nothing() {
        let mut scene = click_scene();
        scene
            .app
            .world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        scene.app.update();
        assert!(!zoom_state(&scene).active);
    }

    #[test]
    fn test_click_over_panel_is_ignored() {
        let mut scene = click_scene();
        scene.app.world_mut().resource_mut::<PanelFocus>().wants_pointer = true;
        click(&mut scene);
        assert_eq!(zoom_state(&scene), ZoomState::default());

        scene.app.world_mut().resource_mut::<PanelFocus>().wants_pointer = false;
        click(&mut scene);
        assert!(zoom_state(&scene).active);
    }

    #[test]
    fn test_click_during_flight_keeps_current_flight() {
        let mut scene = click_scene();
        let earlier = Vec3::new(-10.0, 5.0, 5.0);
        scene
            .app
            .world_mut()
            .resource_mut::<ZoomState>()
            .begin(Vec3::ZERO, earlier, STANDOFF);
        let before = zoom_state(&scene);

        click(&mut scene);
        assert_eq!(zoom_state(&scene), before);
    }

    #[test]
    fn test_click_on_empty_space_does_nothing() {
        let mut scene = click_scene();
        scene.app.world_mut().resource_mut::<PointerRay>().ray =
            Some(Ray3d::new(scene.camera_position, Dir3::Y));
        click(&mut scene);
        assert!(!zoom_state(&scene).active);
    }
}
