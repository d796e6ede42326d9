//! UI state management

use bevy::prelude::*;

use crate::core::SceneSettings;

pub const SPEED_MIN: f32 = 0.0;
pub const SPEED_MAX: f32 = 5.0;
pub const LIGHT_INTENSITY_MIN: f32 = 0.0;
pub const LIGHT_INTENSITY_MAX: f32 = 5.0;
/// Slider granularity for speed and light intensity.
pub const SLIDER_STEP: f64 = 0.1;

/// Run-time options edited by the control panel
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SimulationOptions {
    pub speed: f32,
    pub paused: bool,
    pub light_intensity: f32,
    pub show_orbit_paths: bool,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self::from(&SceneSettings::default())
    }
}

impl From<&SceneSettings> for SimulationOptions {
    fn from(settings: &SceneSettings) -> Self {
        Self {
            speed: settings.speed.clamp(SPEED_MIN, SPEED_MAX),
            paused: settings.paused,
            light_intensity: settings
                .light_intensity
                .clamp(LIGHT_INTENSITY_MIN, LIGHT_INTENSITY_MAX),
            show_orbit_paths: settings.show_orbit_paths,
        }
    }
}

/// A single option edit, published to every observer after it is applied
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum OptionChanged {
    Speed(f32),
    Paused(bool),
    LightIntensity(f32),
    ShowOrbitPaths(bool),
}

impl SimulationOptions {
    /// Apply a change, clamping ranged values.
    ///
    /// Returns the change as stored, or None if nothing changed.
    pub fn apply(&mut self, change: OptionChanged) -> Option<OptionChanged> {
        let applied = match change {
            OptionChanged::Speed(speed) => {
                let speed = speed.clamp(SPEED_MIN, SPEED_MAX);
                if speed == self.speed {
                    return None;
                }
                self.speed = speed;
                OptionChanged::Speed(speed)
            }
            OptionChanged::Paused(paused) => {
                if paused == self.paused {
                    return None;
                }
                self.paused = paused;
                change
            }
            OptionChanged::LightIntensity(intensity) => {
                let intensity = intensity.clamp(LIGHT_INTENSITY_MIN, LIGHT_INTENSITY_MAX);
                if intensity == self.light_intensity {
                    return None;
                }
                self.light_intensity = intensity;
                OptionChanged::LightIntensity(intensity)
            }
            OptionChanged::ShowOrbitPaths(show) => {
                if show == self.show_orbit_paths {
                    return None;
                }
                self.show_orbit_paths = show;
                change
            }
        };
        Some(applied)
    }
}

/// Main UI state resource
#[derive(Resource)]
pub struct UiState {
    pub show_panel: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { show_panel: true }
    }
}

/// Whether the panel claimed the pointer this frame; scene picking backs off when it did.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PanelFocus {
    pub wants_pointer: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SimulationOptions::default();
        assert_eq!(options.speed, 1.0);
        assert!(!options.paused);
        assert_eq!(options.light_intensity, 2.8);
        assert!(options.show_orbit_paths);
    }

    #[test]
    fn test_apply_clamps_ranges() {
        let mut options = SimulationOptions::default();
        assert_eq!(
            options.apply(OptionChanged::Speed(9.0)),
            Some(OptionChanged::Speed(SPEED_MAX))
        );
        assert_eq!(options.speed, SPEED_MAX);
        assert_eq!(
            options.apply(OptionChanged::LightIntensity(-2.0)),
            Some(OptionChanged::LightIntensity(0.0))
        );
        assert_eq!(options.light_intensity, 0.0);
    }

    #[test]
    fn test_apply_reports_no_op_changes() {
        let mut options = SimulationOptions::default();
        assert_eq!(options.apply(OptionChanged::Paused(false)), None);
        assert_eq!(options.apply(OptionChanged::ShowOrbitPaths(true)), None);
        assert_eq!(options.apply(OptionChanged::Speed(1.0)), None);
        assert_eq!(
            options.apply(OptionChanged::Paused(true)),
            Some(OptionChanged::Paused(true))
        );
        assert!(options.paused);
    }

    #[test]
    fn test_from_settings() {
        let settings = SceneSettings {
            speed: 2.0,
            paused: true,
            light_intensity: 1.0,
            show_orbit_paths: false,
            ..SceneSettings::default()
        };
        let options = SimulationOptions::from(&settings);
        assert_eq!(options.speed, 2.0);
        assert!(options.paused);
        assert_eq!(options.light_intensity, 1.0);
        assert!(!options.show_orbit_paths);
    }
}
