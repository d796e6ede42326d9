//! Scene settings persisted as JSON
//!
//! Settings are optional: a missing file yields the defaults, a malformed one
//! is reported and also falls back to the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bevy::prelude::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Overrides the settings file location.
pub const SETTINGS_ENV_VAR: &str = "SOLAR_SYSTEM_SETTINGS";

const SPEED_RANGE: (f32, f32) = (0.0, 5.0);
const LIGHT_RANGE: (f32, f32) = (0.0, 5.0);
/// Upper bound on spawned stars.
pub const MAX_STAR_COUNT: usize = 50_000;

/// Startup configuration for the scene
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    pub speed: f32,
    pub paused: bool,
    pub light_intensity: f32,
    pub show_orbit_paths: bool,
    /// Zoom progress added per frame.
    pub zoom_step: f32,
    /// Offset from the clicked body where the camera lands.
    pub zoom_standoff: [f32; 3],
    pub star_count: usize,
    pub star_seed: u64,
    /// Edge length of the cube the stars are scattered in.
    pub star_spread: f32,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            speed: 1.0,
            paused: false,
            light_intensity: 2.8,
            show_orbit_paths: true,
            zoom_step: 0.02,
            zoom_standoff: [0.0, 10.0, 20.0],
            star_count: 5000,
            star_seed: 0x5eed_57a2,
            star_spread: 2000.0,
        }
    }
}

impl SceneSettings {
    /// Read settings from a JSON file.
    ///
    /// Returns Ok(None) if the file doesn't exist.
    pub fn read(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings: SceneSettings = serde_json::from_str(&contents)
            .with_context(|| format!("parsing settings in {}", path.display()))?;

        Ok(Some(settings.sanitized()))
    }

    /// Resolve the settings path: the env override first, then the platform config dir
    ///
    /// - macOS: ~/Library/Application Support/solar_system/settings.json
    /// - Linux: ~/.config/solar_system/settings.json
    /// - Windows: %APPDATA%\solar_system\config\settings.json
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(SETTINGS_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("", "", "solar_system")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load from the default location, falling back to defaults on any problem.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            warn!("Could not resolve a config directory; using default scene settings");
            return Self::default();
        };

        match Self::read(&path) {
            Ok(Some(settings)) => {
                info!("Loaded scene settings from {}", path.display());
                settings
            }
            Ok(None) => Self::default(),
            Err(err) => {
                warn!("Ignoring scene settings: {:#}", err);
                Self::default()
            }
        }
    }

    /// Clamp values into the ranges the panel exposes.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.speed = clamp_or(self.speed, SPEED_RANGE, defaults.speed);
        self.light_intensity = clamp_or(self.light_intensity, LIGHT_RANGE, defaults.light_intensity);
        if !(self.zoom_step.is_finite() && self.zoom_step > 0.0 && self.zoom_step <= 1.0) {
            self.zoom_step = defaults.zoom_step;
        }
        if !self.zoom_standoff.iter().all(|c| c.is_finite()) {
            self.zoom_standoff = defaults.zoom_standoff;
        }
        self.star_count = self.star_count.min(MAX_STAR_COUNT);
        if !(self.star_spread.is_finite() && self.star_spread > 0.0) {
            self.star_spread = defaults.star_spread;
        }
        self
    }

    pub fn zoom_standoff(&self) -> Vec3 {
        Vec3::from_array(self.zoom_standoff)
    }
}

fn clamp_or(value: f32, (min, max): (f32, f32), fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}
