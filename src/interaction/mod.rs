//! Pointer interaction module
//!
//! Hover picking with a name tooltip, and click-to-zoom on a planet.

use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::core::SceneSettings;
use crate::orbital::FrameSystems;

pub mod picking;
pub mod tooltip;
pub mod zoom;

pub use picking::{PickTarget, PointerRay, nearest_hit, update_hover, update_pointer_ray};
pub use tooltip::{HoverLabel, Tooltip, spawn_tooltip, sync_tooltip};
pub use zoom::{ZoomConfig, ZoomState, advance_zoom, start_zoom_on_click};

/// Plugin for hover and click handling
pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<SceneSettings>()
            .map(ZoomConfig::from)
            .unwrap_or_default();

        app.insert_resource(config)
            .init_resource::<ZoomState>()
            .init_resource::<HoverLabel>()
            .init_resource::<PointerRay>()
            .add_systems(Startup, spawn_tooltip)
            .add_systems(
                Update,
                (
                    update_pointer_ray,
                    (
                        (update_hover, sync_tooltip).chain(),
                        (start_zoom_on_click, advance_zoom).chain(),
                    ),
                )
                    .chain()
                    .in_set(FrameSystems::Camera),
            )
            .add_systems(Update, log_resize);
    }
}

/// The camera aspect follows the window automatically; just note the change.
fn log_resize(mut resized: MessageReader<WindowResized>) {
    if let Some(event) = resized.read().last() {
        debug!("Window resized to {}x{}", event.width, event.height);
    }
}
