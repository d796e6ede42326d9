//! User interface module
//!
//! This module handles the option state, the egui control panel and the
//! change events the panel publishes.

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::core::SceneSettings;

pub mod panels;
pub mod state;
pub mod systems;

pub use state::{OptionChanged, PanelFocus, SimulationOptions, UiState};
pub use systems::ui_system;

/// Plugin for user interface management
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        let options = app
            .world()
            .get_resource::<SceneSettings>()
            .map(SimulationOptions::from)
            .unwrap_or_default();

        app.insert_resource(options)
            .init_resource::<UiState>()
            .init_resource::<PanelFocus>()
            .add_systems(EguiPrimaryContextPass, ui_system);
    }
}
