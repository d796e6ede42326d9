//! UI systems for the egui interface

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::ui::panels::{PANEL_WIDTH, render_options_panel};
use crate::ui::state::{OptionChanged, PanelFocus, SimulationOptions, UiState};

/// Renders the control panel and publishes option edits
pub fn ui_system(
    mut contexts: EguiContexts,
    mut commands: Commands,
    mut state: ResMut<UiState>,
    mut options: ResMut<SimulationOptions>,
    mut focus: ResMut<PanelFocus>,
) {
    let Ok(ctx) = contexts.ctx_mut() else { return };

    let mut requested = Vec::new();

    let keys = ctx.input(|i| ShortcutKeys {
        toggle_panel: i.key_pressed(egui::Key::H),
        toggle_pause: i.key_pressed(egui::Key::Space),
    });
    let widget_focused = ctx.memory(|m| m.focused().is_some());
    requested.extend(apply_shortcuts(keys, widget_focused, &mut state, &options));

    if state.show_panel {
        egui::Window::new("Controls")
            .default_width(PANEL_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                requested.extend(render_options_panel(ui, &options));
            });
    }

    focus.wants_pointer = ctx.wants_pointer_input() || ctx.is_pointer_over_area();

    publish_changes(&mut commands, &mut options, requested);
}

/// Shortcut keys pressed this frame
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortcutKeys {
    pub toggle_panel: bool,
    pub toggle_pause: bool,
}

/// H toggles the panel, Space requests a pause toggle.
///
/// Skipped while a panel widget has keyboard focus, since egui also hands
/// Space to the focused checkbox.
pub fn apply_shortcuts(
    keys: ShortcutKeys,
    widget_focused: bool,
    state: &mut UiState,
    options: &SimulationOptions,
) -> Option<OptionChanged> {
    if widget_focused {
        return None;
    }
    if keys.toggle_panel {
        state.show_panel = !state.show_panel;
    }
    keys.toggle_pause
        .then_some(OptionChanged::Paused(!options.paused))
}

/// Apply each change and trigger it for the observers if it changed anything.
pub fn publish_changes(
    commands: &mut Commands,
    options: &mut SimulationOptions,
    requested: impl IntoIterator<Item = OptionChanged>,
) {
    for change in requested {
        if let Some(applied) = options.apply(change) {
            debug!("Option changed: {:?}", applied);
            commands.trigger(applied);
        }
    }
}
