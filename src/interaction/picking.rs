//! Pointer ray tests against the planet bodies

use bevy::math::bounding::{BoundingSphere, RayCast3d};
use bevy::prelude::*;
use bevy::window::{CursorLeft, CursorMoved, PrimaryWindow};

use crate::bodies::{Body, Planet};
use crate::core::MainCamera;
use crate::interaction::tooltip::HoverLabel;
use crate::ui::PanelFocus;

/// A body that can be hit: its entity, world center and radius
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickTarget<'a> {
    pub entity: Entity,
    pub name: &'a str,
    pub center: Vec3,
    pub radius: f32,
}

/// Closest target the ray enters, if any
pub fn nearest_hit<'a>(
    ray: Ray3d,
    targets: impl IntoIterator<Item = PickTarget<'a>>,
) -> Option<PickTarget<'a>> {
    let cast = RayCast3d::from_ray(ray, f32::MAX);
    targets
        .into_iter()
        .filter_map(|target| {
            cast.sphere_intersection_at(&BoundingSphere::new(target.center, target.radius))
                .map(|distance| (target, distance))
        })
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(target, _)| target)
}

/// Ray through a cursor position in window (logical pixel) coordinates
pub fn cursor_ray(camera: &Camera, camera_transform: &GlobalTransform, cursor: Vec2) -> Option<Ray3d> {
    camera.viewport_to_world(camera_transform, cursor).ok()
}

pub fn planet_targets<'a>(
    planets: &'a Query<(Entity, &Body, &GlobalTransform), With<Planet>>,
) -> impl Iterator<Item = PickTarget<'a>> + 'a {
    planets.iter().map(|(entity, body, transform)| PickTarget {
        entity,
        name: body.name,
        center: transform.translation(),
        radius: body.radius,
    })
}

/// World-space ray under the cursor this frame, if the cursor is over the window
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PointerRay {
    pub ray: Option<Ray3d>,
}

/// Cast the cursor into the scene once per frame for hover and click
pub fn update_pointer_ray(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut pointer: ResMut<PointerRay>,
) {
    let cursor = windows.single().ok().and_then(Window::cursor_position);
    let camera = cameras.single().ok();
    pointer.ray = cursor
        .zip(camera)
        .and_then(|(cursor, (camera, transform))| cursor_ray(camera, transform, cursor));
}

/// Re-pick on every pointer move and update the hover label
pub fn update_hover(
    mut moved: MessageReader<CursorMoved>,
    mut left: MessageReader<CursorLeft>,
    windows: Query<Entity, With<PrimaryWindow>>,
    pointer: Res<PointerRay>,
    planets: Query<(Entity, &Body, &GlobalTransform), With<Planet>>,
    focus: Res<PanelFocus>,
    mut label: ResMut<HoverLabel>,
) {
    let Ok(primary) = windows.single() else {
        return;
    };

    if left.read().any(|event| event.window == primary) {
        label.hide();
    }

    let Some(cursor) = moved
        .read()
        .filter(|event| event.window == primary)
        .last()
        .map(|event| event.position)
    else {
        return;
    };

    if focus.wants_pointer {
        label.hide();
        return;
    }

    let hit = pointer
        .ray
        .and_then(|ray| nearest_hit(ray, planet_targets(&planets)));
    label.update(hit.map(|target| target.name), cursor);
}
