//! Control panel layout
use bevy_egui::egui;

use crate::ui::state::{
    LIGHT_INTENSITY_MAX, LIGHT_INTENSITY_MIN, OptionChanged, SLIDER_STEP, SPEED_MAX, SPEED_MIN,
    SimulationOptions,
};

pub const PANEL_WIDTH: f32 = 320.0;

/// Draw the option controls and return the edits the user made this frame.
///
/// Nothing is written back here; the caller applies and publishes the changes.
pub fn render_options_panel(ui: &mut egui::Ui, options: &SimulationOptions) -> Vec<OptionChanged> {
    let mut changes = Vec::new();
    let mut speed = options.speed;
    let mut paused = options.paused;
    let mut light_intensity = options.light_intensity;
    let mut show_orbit_paths = options.show_orbit_paths;

    egui::CollapsingHeader::new("Animation")
        .default_open(true)
        .show(ui, |ui| {
            if ui
                .add(
                    egui::Slider::new(&mut speed, SPEED_MIN..=SPEED_MAX)
                        .step_by(SLIDER_STEP)
                        .text("Speed"),
                )
                .changed()
            {
                changes.push(OptionChanged::Speed(speed));
            }
            if ui.checkbox(&mut paused, "Pause animation (Space)").changed() {
                changes.push(OptionChanged::Paused(paused));
            }
        });

    egui::CollapsingHeader::new("Lighting")
        .default_open(true)
        .show(ui, |ui| {
            if ui
                .add(
                    egui::Slider::new(&mut light_intensity, LIGHT_INTENSITY_MIN..=LIGHT_INTENSITY_MAX)
                        .step_by(SLIDER_STEP)
                        .text("Sun light intensity"),
                )
                .changed()
            {
                changes.push(OptionChanged::LightIntensity(light_intensity));
            }
        });

    egui::CollapsingHeader::new("Display")
        .default_open(true)
        .show(ui, |ui| {
            if ui.checkbox(&mut show_orbit_paths, "Show orbit paths").changed() {
                changes.push(OptionChanged::ShowOrbitPaths(show_orbit_paths));
            }
            ui.label("Hover a planet for its name, click to fly to it. H hides this panel.");
        });

    changes
}
